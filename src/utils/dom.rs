//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::{File, FileList, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Show a blocking `window.alert`.
pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

/// Collect a `FileList` into owned handles.
pub fn files_from_list(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// `webkitRelativePath` of a file picked from a directory input.
///
/// web-sys has no binding for the property. Empty for files that did not
/// come from a directory picker, which maps to `None`.
pub fn webkit_relative_path(file: &File) -> Option<String> {
    Reflect::get(file, &JsValue::from_str("webkitRelativePath"))
        .ok()
        .and_then(|value| value.as_string())
        .filter(|path| !path.is_empty())
}

/// Best-effort human-readable message from a thrown or rejected value.
///
/// Handles plain strings, `Error`/`DOMException` objects (via `message`,
/// falling back to `name`), and anything else via its debug form.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }

    ["message", "name"]
        .into_iter()
        .filter_map(|key| Reflect::get(value, &JsValue::from_str(key)).ok())
        .filter_map(|v| v.as_string())
        .find(|s| !s.is_empty())
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Browser objects for wasm tests.
#[cfg(test)]
pub(crate) mod fixtures {
    use js_sys::{Array, Object, Reflect};
    use wasm_bindgen::JsValue;
    use web_sys::File;

    pub(crate) fn text_file(name: &str, body: &str) -> File {
        File::new_with_str_sequence(&Array::of1(&JsValue::from_str(body)), name)
            .expect("File constructor")
    }

    /// Give `file` the relative path a directory picker would have set.
    pub(crate) fn set_relative_path(file: &File, path: &str) {
        let descriptor = Object::new();
        Reflect::set(&descriptor, &JsValue::from_str("value"), &JsValue::from_str(path))
            .expect("descriptor");
        Object::define_property(file.as_ref(), &JsValue::from_str("webkitRelativePath"), &descriptor);
    }
}
