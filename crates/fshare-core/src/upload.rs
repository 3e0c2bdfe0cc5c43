//! Upload state machine.
//!
//! The widget sends everything in one request and is one-shot per page
//! load: once an upload has started, the pending list is frozen and a
//! second upload is refused.
//!
//! ```text
//! Idle ──begin──▶ Uploading{percent} ──Completed(200)──▶ Succeeded
//!                        │        ├──Completed(other)─▶ Failed
//!                        │        └──TransportError──▶ Failed
//!                        └──Aborted──▶ Aborted
//! ```

use tracing::{info, warn};

use crate::error::UploadError;

/// The only status code treated as success.
const SUCCESS_STATUS: u16 = 200;

/// Observable state of the upload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading {
        percent: u8,
    },
    Succeeded,
    Failed {
        message: String,
    },
    Aborted,
}

/// Events reported by the transport while a request is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadEvent {
    /// Request body bytes sent so far.
    Progress { loaded: u64, total: u64 },
    /// A response arrived.
    Completed { status: u16, body: String },
    /// The request failed without a usable response.
    TransportError { body: String },
    Aborted,
}

impl UploadEvent {
    /// Outcome of a terminal event; `None` for progress.
    pub fn outcome(&self) -> Option<Result<(), UploadError>> {
        match self {
            Self::Progress { .. } => None,
            Self::Completed { status, .. } if *status == SUCCESS_STATUS => Some(Ok(())),
            Self::Completed { status, body } => Some(Err(UploadError::Http {
                status: *status,
                body: body.clone(),
            })),
            Self::TransportError { body } => Some(Err(UploadError::Transport(body.clone()))),
            Self::Aborted => Some(Err(UploadError::Aborted)),
        }
    }
}

/// Percentage of the body sent, truncated toward zero and clamped to 100.
pub fn progress_percent(loaded: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    let percent = (u128::from(loaded) * 100 / u128::from(total)).min(100);
    percent as u8
}

impl UploadStatus {
    /// Move from `Idle` to `Uploading`. Any other state refuses.
    pub fn begin(&mut self) -> Result<(), UploadError> {
        match self {
            Self::Idle => {
                *self = Self::Uploading { percent: 0 };
                Ok(())
            }
            _ => Err(UploadError::AlreadyStarted),
        }
    }

    /// Fold a transport event into the status. Events arriving outside
    /// `Uploading` are ignored.
    pub fn apply(&mut self, event: UploadEvent) {
        let Self::Uploading { percent } = self else {
            return;
        };

        if let UploadEvent::Progress { loaded, total } = event {
            *percent = progress_percent(loaded, total);
            return;
        }

        *self = match event.outcome() {
            Some(Ok(())) => {
                info!("upload finished");
                Self::Succeeded
            }
            Some(Err(UploadError::Aborted)) => {
                warn!("upload aborted");
                Self::Aborted
            }
            Some(Err(err)) => {
                warn!(error = %err, "upload failed");
                Self::Failed {
                    message: failure_message(&event),
                }
            }
            None => return,
        };
    }

    /// Whether files may be added, removed, or sent.
    pub fn accepts_changes(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self, Self::Uploading { .. })
    }

    /// Text for the send button / progress indicator. `None` while idle.
    pub fn label(&self) -> Option<String> {
        match self {
            Self::Idle => None,
            Self::Uploading { percent } => Some(format!("{percent}%")),
            Self::Succeeded => Some("File Uploaded".to_string()),
            Self::Failed { message } => Some(format!("Error Uploading: {message}")),
            Self::Aborted => Some("Upload aborted".to_string()),
        }
    }
}

/// What the user sees on failure: the server's response text.
fn failure_message(event: &UploadEvent) -> String {
    match event {
        UploadEvent::Completed { body, .. } | UploadEvent::TransportError { body } => body.clone(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uploading() -> UploadStatus {
        let mut status = UploadStatus::default();
        status.begin().expect("idle status starts");
        status
    }

    #[test]
    fn test_progress_percent_truncates() {
        assert_eq!(progress_percent(0, 100), 0);
        assert_eq!(progress_percent(999, 1000), 99);
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(1000, 1000), 100);
    }

    #[test]
    fn test_progress_percent_edge_cases() {
        assert_eq!(progress_percent(10, 0), 0);
        assert_eq!(progress_percent(2000, 1000), 100);
        assert_eq!(progress_percent(u64::MAX, u64::MAX), 100);
    }

    #[test]
    fn test_begin_is_single_flight() {
        let mut status = uploading();
        assert_eq!(status, UploadStatus::Uploading { percent: 0 });
        assert_eq!(status.begin(), Err(UploadError::AlreadyStarted));

        status.apply(UploadEvent::Completed {
            status: 200,
            body: String::new(),
        });
        assert_eq!(status.begin(), Err(UploadError::AlreadyStarted));
    }

    #[test]
    fn test_progress_then_success() {
        let mut status = uploading();

        status.apply(UploadEvent::Progress {
            loaded: 512,
            total: 1024,
        });
        assert_eq!(status, UploadStatus::Uploading { percent: 50 });
        assert_eq!(status.label().as_deref(), Some("50%"));

        status.apply(UploadEvent::Completed {
            status: 200,
            body: "ok".into(),
        });
        assert_eq!(status, UploadStatus::Succeeded);
        assert_eq!(status.label().as_deref(), Some("File Uploaded"));
    }

    #[test]
    fn test_non_200_is_failure_with_body() {
        let mut status = uploading();

        status.apply(UploadEvent::Completed {
            status: 400,
            body: "File to big".into(),
        });

        assert_eq!(
            status,
            UploadStatus::Failed {
                message: "File to big".into()
            }
        );
        assert_eq!(
            status.label().as_deref(),
            Some("Error Uploading: File to big")
        );
    }

    #[test]
    fn test_transport_error_and_abort() {
        let mut failed = uploading();
        failed.apply(UploadEvent::TransportError { body: String::new() });
        assert!(matches!(failed, UploadStatus::Failed { .. }));

        let mut aborted = uploading();
        aborted.apply(UploadEvent::Aborted);
        assert_eq!(aborted, UploadStatus::Aborted);
    }

    #[test]
    fn test_events_after_terminal_state_are_ignored() {
        let mut status = uploading();
        status.apply(UploadEvent::Aborted);
        status.apply(UploadEvent::Completed {
            status: 200,
            body: String::new(),
        });
        status.apply(UploadEvent::Progress {
            loaded: 1,
            total: 1,
        });
        assert_eq!(status, UploadStatus::Aborted);

        let mut idle = UploadStatus::Idle;
        idle.apply(UploadEvent::Progress {
            loaded: 1,
            total: 2,
        });
        assert_eq!(idle, UploadStatus::Idle);
    }

    #[test]
    fn test_only_idle_accepts_changes() {
        assert!(UploadStatus::Idle.accepts_changes());
        assert!(!uploading().accepts_changes());
        assert!(!UploadStatus::Succeeded.accepts_changes());
        assert!(!UploadStatus::Aborted.accepts_changes());
    }

    #[test]
    fn test_event_outcomes() {
        assert_eq!(
            UploadEvent::Progress {
                loaded: 0,
                total: 0
            }
            .outcome(),
            None
        );
        assert_eq!(
            UploadEvent::Completed {
                status: 500,
                body: "boom".into()
            }
            .outcome(),
            Some(Err(UploadError::Http {
                status: 500,
                body: "boom".into()
            }))
        );
        assert_eq!(UploadEvent::Aborted.outcome(), Some(Err(UploadError::Aborted)));
    }
}
