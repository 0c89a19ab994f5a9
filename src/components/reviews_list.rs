use leptos::*;
use uuid::Uuid;

use crate::components::stars::Stars;
use crate::models::review::{Reaction, Review};

/// Newest-first list of submitted reviews with like/dislike counters.
#[component]
pub fn ReviewsList(
    #[prop(into)] reviews: Signal<Vec<Review>>,
    on_react: Callback<(Uuid, Reaction)>,
) -> impl IntoView {
    view! {
        <div class="reviews">
            {move || {
                let reviews = reviews.get();
                if reviews.is_empty() {
                    return view! { <p>{ "No reviews yet." }</p> }.into_view();
                }
                reviews.into_iter().map(|review| {
                    let Review { id, text, rating, image, posted_at, likes, dislikes } = review;
                    view! {
                        <div class="review">
                            <p>{ text }</p>
                            <Stars filled=rating/>
                            {image.map(|url| view! {
                                <img src=url alt="Review attachment" class="review-image"/>
                            })}
                            <small>{ posted_at.format("%Y-%m-%d %H:%M").to_string() }</small>
                            <div class="reactions">
                                <button
                                    class="reaction-button"
                                    on:click=move |_| on_react.call((id, Reaction::Like))
                                >
                                    { format!("👍 {likes}") }
                                </button>
                                <button
                                    class="reaction-button"
                                    on:click=move |_| on_react.call((id, Reaction::Dislike))
                                >
                                    { format!("👎 {dislikes}") }
                                </button>
                            </div>
                        </div>
                    }
                }).collect::<Vec<_>>().into_view()
            }}
        </div>
    }
}
