//! Drop zone and pickers.
//!
//! Two hidden `<input type="file">` elements back the "Add files" and
//! "Add folder" buttons. The whole zone accepts drag-and-drop of files and
//! folders.

use leptos::ev::DragEvent;
use leptos::html;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::labels;
use crate::utils::dom::files_from_list;

stylance::import_crate_style!(css, "src/components/uploader/drop_zone.module.css");

#[component]
pub fn DropZone() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let uploader = ctx.uploader;

    let files_ref: NodeRef<html::Input> = NodeRef::new();
    let folder_ref: NodeRef<html::Input> = NodeRef::new();
    let dragging = RwSignal::new(false);

    let open_picker = move |input_ref: NodeRef<html::Input>| {
        if let Some(input) = input_ref.get_untracked() {
            input.click();
        }
    };

    let on_picked = move |input_ref: NodeRef<html::Input>, from_folder: bool| {
        let Some(input) = input_ref.get_untracked() else {
            return;
        };
        if let Some(list) = input.files() {
            uploader.add_picked(files_from_list(&list), from_folder);
        }
        // Lets the same file be picked again after it was removed.
        input.set_value("");
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        dragging.set(true);
    };

    let on_dragleave = move |_: DragEvent| dragging.set(false);

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        dragging.set(false);
        if let Some(transfer) = ev.data_transfer() {
            uploader.accept_drop(&transfer);
        }
    };

    let zone_class = move || {
        if dragging.get() {
            format!("{} {}", css::zone, css::zoneActive)
        } else {
            css::zone.to_string()
        }
    };

    view! {
        <div
            class=zone_class
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <input
                node_ref=files_ref
                type="file"
                multiple=true
                class=css::hiddenInput
                on:change=move |_| on_picked(files_ref, false)
            />
            <input
                node_ref=folder_ref
                type="file"
                prop:webkitdirectory=true
                class=css::hiddenInput
                on:change=move |_| on_picked(folder_ref, true)
            />

            <span class=css::dropIcon aria-hidden="true"><Icon icon=ic::UPLOAD /></span>
            <p class=css::hint>{labels::DROP_HINT}</p>

            <div class=css::actions>
                <button
                    type="button"
                    class=css::pickButton
                    disabled=move || uploader.is_locked()
                    on:click=move |_| open_picker(files_ref)
                >
                    <Icon icon=ic::ADD_FILE />
                    <span>{labels::ADD_FILES}</span>
                </button>
                <button
                    type="button"
                    class=css::pickButton
                    disabled=move || uploader.is_locked()
                    on:click=move |_| open_picker(folder_ref)
                >
                    <Icon icon=ic::ADD_FOLDER />
                    <span>{labels::ADD_FOLDER}</span>
                </button>
            </div>
        </div>
    }
}
