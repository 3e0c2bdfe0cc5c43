//! Multipart upload over `XMLHttpRequest`.
//!
//! `fetch` exposes no upload progress, so the single upload request goes
//! through XHR. The `load`/`error`/`abort` listeners settle a `Promise`
//! that is awaited like any other future; upload progress is forwarded to
//! a callback while the request is in flight.

use fshare_core::{PendingFiles, UploadError, UploadEvent};
use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, File, FormData, ProgressEvent, XmlHttpRequest};

use crate::config::{UPLOAD_ENDPOINT, UPLOAD_METHOD};
use crate::utils::dom::js_error_message;

/// Build the multipart body: one part per pending file, keyed by its
/// relative path or name.
pub fn form_data(files: &PendingFiles<File>) -> Result<FormData, UploadError> {
    let form = FormData::new().map_err(setup_error)?;

    for (key, file) in files.parts() {
        form.append_with_blob_and_filename(key, file, key)
            .map_err(setup_error)?;
    }

    Ok(form)
}

/// Send `form` and wait for the request to settle.
///
/// `on_progress` receives [`UploadEvent::Progress`] while the body is
/// being sent. The returned event is the terminal one (`Completed`,
/// `TransportError`, or `Aborted`); `Err` means the request could not be
/// issued at all.
pub async fn send(
    form: &FormData,
    on_progress: impl Fn(UploadEvent) + 'static,
) -> Result<UploadEvent, UploadError> {
    let xhr = XmlHttpRequest::new().map_err(setup_error)?;
    xhr.open(UPLOAD_METHOD, UPLOAD_ENDPOINT)
        .map_err(setup_error)?;

    let upload = xhr.upload().map_err(setup_error)?;
    let progress = Closure::<dyn FnMut(ProgressEvent)>::new(move |ev: ProgressEvent| {
        if ev.length_computable() {
            on_progress(UploadEvent::Progress {
                loaded: ev.loaded() as u64,
                total: ev.total() as u64,
            });
        }
    });
    upload.set_onprogress(Some(progress.as_ref().unchecked_ref()));

    let settled = Promise::new(&mut |resolve, reject| {
        xhr.set_onload(Some(&resolve));
        xhr.set_onerror(Some(&reject));
        xhr.set_onabort(Some(&reject));
    });

    xhr.send_with_opt_form_data(Some(form))
        .map_err(setup_error)?;

    let outcome = JsFuture::from(settled).await;
    upload.set_onprogress(None);
    drop(progress);

    let body = xhr.response_text().ok().flatten().unwrap_or_default();

    Ok(match outcome {
        Ok(_) => UploadEvent::Completed {
            status: xhr.status().unwrap_or_default(),
            body,
        },
        Err(ev) if is_abort(&ev) => UploadEvent::Aborted,
        Err(_) => UploadEvent::TransportError { body },
    })
}

fn is_abort(value: &wasm_bindgen::JsValue) -> bool {
    value
        .dyn_ref::<Event>()
        .is_some_and(|ev| ev.type_() == "abort")
}

fn setup_error(err: wasm_bindgen::JsValue) -> UploadError {
    UploadError::RequestSetup(js_error_message(&err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::dom::fixtures::text_file;
    use fshare_core::FileHandle;
    use wasm_bindgen_test::wasm_bindgen_test;

    #[wasm_bindgen_test]
    fn form_has_one_part_per_file_named_by_key() {
        let mut files = PendingFiles::new();
        files.insert(
            FileHandle::new("a.txt", 5).with_relative_path(Some("docs/a.txt".into())),
            text_file("a.txt", "hello"),
        );
        files.insert(FileHandle::new("b.txt", 3), text_file("b.txt", "abc"));

        let form = form_data(&files).unwrap();

        let nested: File = form.get("docs/a.txt").dyn_into().unwrap();
        assert_eq!(nested.name(), "docs/a.txt");
        assert_eq!(nested.size(), 5.0);

        let plain: File = form.get("b.txt").dyn_into().unwrap();
        assert_eq!(plain.name(), "b.txt");

        assert!(form.get("a.txt").is_null());
        assert_eq!(form.get_all("docs/a.txt").length(), 1);
    }

    #[wasm_bindgen_test]
    fn empty_collection_builds_empty_form() {
        let form = form_data(&PendingFiles::new()).unwrap();
        assert!(form.get("anything").is_null());
    }
}
