#[cfg(feature = "csr")]
pub fn main() {
    // to run: `trunk serve --open`
    use storefront::app::App;

    console_error_panic_hook::set_once();

    leptos::mount_to_body(App);
}

#[cfg(not(feature = "csr"))]
pub fn main() {
    // no main function without the csr feature; the app only runs as a
    // client-side WASM bundle
}
