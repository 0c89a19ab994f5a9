use leptos::*;

/// Number of filled stars for an average rating, rounded to the nearest whole
/// star and clamped to the 0-5 range.
pub fn filled_stars(rate: f64) -> u8 {
    rate.round().clamp(0.0, 5.0) as u8
}

/// Fixed five-star row: `filled` solid glyphs followed by hollow ones.
#[component]
pub fn Stars(filled: u8) -> impl IntoView {
    let filled = filled.min(5);

    view! {
        <span class="stars">
            {(1u8..=5).map(|star| {
                if star <= filled {
                    view! { <span class="star-filled">{ "★" }</span> }
                } else {
                    view! { <span class="star-empty">{ "☆" }</span> }
                }
            }).collect::<Vec<_>>()}
        </span>
    }
}
