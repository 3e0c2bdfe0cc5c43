//! Send button with upload progress.

use fshare_core::UploadStatus;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::labels;

stylance::import_crate_style!(css, "src/components/uploader/send_button.module.css");

#[component]
pub fn SendButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let uploader = ctx.uploader;
    let status = uploader.status;

    let button_class = move || {
        status.with(|s| match s {
            UploadStatus::Succeeded => format!("{} {}", css::button, css::success),
            UploadStatus::Failed { .. } | UploadStatus::Aborted => {
                format!("{} {}", css::button, css::failure)
            }
            UploadStatus::Idle | UploadStatus::Uploading { .. } => css::button.to_string(),
        })
    };

    let disabled = move || !uploader.has_files() || uploader.is_locked();

    let label = move || {
        status
            .with(UploadStatus::label)
            .unwrap_or_else(|| labels::SEND.to_string())
    };

    let percent = move || match status.get() {
        UploadStatus::Uploading { percent } => percent,
        UploadStatus::Succeeded => 100,
        _ => 0,
    };

    let show_progress = move || status.with(UploadStatus::is_uploading);

    view! {
        <div class=css::wrapper>
            <button
                type="button"
                class=button_class
                disabled=disabled
                on:click=move |_| uploader.send()
            >
                {move || status.with(|s| match s {
                    UploadStatus::Idle => view! { <Icon icon=ic::UPLOAD /> }.into_any(),
                    UploadStatus::Uploading { .. } => {
                        view! { <span class=css::spinner aria-hidden="true"></span> }.into_any()
                    }
                    UploadStatus::Succeeded => view! { <Icon icon=ic::SUCCESS /> }.into_any(),
                    UploadStatus::Failed { .. } | UploadStatus::Aborted => {
                        view! { <Icon icon=ic::FAILURE /> }.into_any()
                    }
                })}
                <span class=css::label>{label}</span>
            </button>
            <Show when=show_progress>
                <div
                    class=css::progress
                    role="progressbar"
                    aria-valuemin="0"
                    aria-valuemax="100"
                    aria-valuenow=move || percent().to_string()
                >
                    <div class=css::progressBar style:width=move || format!("{}%", percent())></div>
                </div>
            </Show>
        </div>
    }
}
