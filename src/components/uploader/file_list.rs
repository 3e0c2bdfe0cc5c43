//! Pending file list.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::{AppContext, FileRow};
use crate::components::icons as ic;
use crate::config::labels;

stylance::import_crate_style!(css, "src/components/uploader/file_list.module.css");

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let uploader = ctx.uploader;

    let is_empty = move || uploader.rows.with(Vec::is_empty);

    view! {
        <ul class=css::list aria-label="Selected files">
            <Show when=is_empty>
                <li class=css::empty>{labels::EMPTY_LIST}</li>
            </Show>
            <For
                each=move || uploader.rows.get()
                key=|row| row.id
                children=move |row| view! { <FileListItem row=row /> }
            />
        </ul>
    }
}

/// A single row. `leaving` is re-read from the row list so the fade-out
/// class applies without re-keying the row.
#[component]
fn FileListItem(row: FileRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let uploader = ctx.uploader;

    let id = row.id;
    let key = row.key.clone();

    let leaving = Signal::derive(move || {
        uploader
            .rows
            .with(|rows| rows.iter().any(|r| r.id == id && r.leaving))
    });

    let item_class = move || {
        if leaving.get() {
            format!("{} {}", css::item, css::leaving)
        } else {
            format!("{} {}", css::item, css::entering)
        }
    };

    let on_remove = move |_: MouseEvent| uploader.remove(id, &key);

    view! {
        <li class=item_class>
            <span class=css::icon aria-hidden="true"><Icon icon=ic::FILE /></span>
            <div class=css::meta>
                <p class=css::name title=row.key.clone()>{row.key.clone()}</p>
                <small class=css::size>{row.size}</small>
            </div>
            <button
                type="button"
                class=css::remove
                title="Remove"
                aria-label=format!("Remove {}", row.key)
                disabled=move || leaving.get() || uploader.is_locked()
                on:click=on_remove
            >
                <Icon icon=ic::CLOSE />
            </button>
        </li>
    }
}
