use web_sys::{File, Url};

/// Derives a transient, display-only URL for a file picked in the browser.
/// The URL stays valid for the lifetime of the document, which matches the
/// lifetime of the in-memory review holding it.
pub fn create(file: &File) -> Option<String> {
    Url::create_object_url_with_blob(file).ok()
}
