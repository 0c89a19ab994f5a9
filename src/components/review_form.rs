use leptos::ev::SubmitEvent;
use leptos::*;
use web_sys::File;

/// Review submission form: free text, a five-star picker and an optional
/// image. On submit the form hands `(text, rating, image)` to `on_submit` and
/// resets every field; a submission whose trimmed text is empty is silently
/// dropped. Rating defaults to 0 and clicking star n sets it to exactly n.
#[component]
pub fn ReviewForm(
    on_submit: Callback<(String, u8, Option<String>)>,
    /// Turns a picked file into a displayable URL. Injectable so tests can
    /// avoid the real `URL.createObjectURL`.
    #[prop(default = Callback::new(|file: File| crate::utils::object_url::create(&file)))]
    object_url: Callback<File, Option<String>>,
) -> impl IntoView {
    let (text, set_text) = create_signal(String::new());
    let (rating, set_rating) = create_signal(0u8);
    let (image, set_image) = create_signal(None::<String>);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if text.get().trim().is_empty() {
            return;
        }
        on_submit.call((text.get(), rating.get(), image.get()));

        // Reset values
        set_text.set(String::new());
        set_rating.set(0);
        set_image.set(None);
    };

    // Only the most recently picked file is kept until submission.
    let handle_image = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            set_image.set(object_url.call(file));
        }
    };

    view! {
        <form on:submit=handle_submit class="review-form">
            <textarea
                placeholder="Write your review…"
                prop:value=move || text.get()
                on:input=move |e| set_text.set(event_target_value(&e))
            />
            <div class="rating-picker">
                <span>{ "Rating: " }</span>
                {(1u8..=5).map(|star| view! {
                    <span
                        class=move || if star <= rating.get() { "star-filled" } else { "star-empty" }
                        on:click=move |_| set_rating.set(star)
                    >{ "★" }</span>
                }).collect::<Vec<_>>()}
            </div>
            <div class="form-group">
                <label>{ "Attach an image:" }</label>
                <input type="file" on:change=handle_image/>
                {move || image.get().map(|url| view! {
                    <img src=url alt="Pending attachment" class="review-image"/>
                })}
            </div>
            <button type="submit">{ "Submit review" }</button>
        </form>
    }
}
