//! Upload card.
//!
//! Drop zone with the file/folder pickers on top, the pending file list in
//! the middle, and the send button with upload progress at the bottom.
//! All state lives in [`UploaderState`](crate::app::UploaderState).

mod drop_zone;
mod file_list;
mod send_button;

use leptos::prelude::*;

use drop_zone::DropZone;
use file_list::FileList;
use send_button::SendButton;

stylance::import_crate_style!(css, "src/components/uploader/uploader.module.css");

#[component]
pub fn Uploader() -> impl IntoView {
    view! {
        <section class=css::card aria-label="File upload">
            <DropZone />
            <FileList />
            <SendButton />
        </section>
    }
}
