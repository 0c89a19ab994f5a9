use leptos::logging::error;
use leptos::*;
use leptos_router::use_params_map;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::category_options::CategoryOptions;
use crate::components::review_form::ReviewForm;
use crate::components::reviews_list::ReviewsList;
use crate::components::stars::{filled_stars, Stars};
use crate::models::category::Category;
use crate::models::product::Product;
use crate::models::review::{Reaction, Review};
use crate::store::ReviewBoard;

/// Product page: loads one product by the `:id` route param and renders its
/// details, category-specific pickers and the local review board.
///
/// The page is either loading, showing "not found", or showing the product.
/// Changing the id or category re-enters the loading state; a fetch error is
/// logged and collapses into the same display as a missing product.
#[component]
pub fn ProductDetail() -> impl IntoView {
    let params = use_params_map();
    let product_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());
    let category_tag = move || params.with(|p| p.get("category").cloned().unwrap_or_default());
    let category = move || Category::parse(&category_tag());

    let (product, set_product) = create_signal(None::<Product>);
    let (loading, set_loading) = create_signal(true);
    // Bumped on every (id, category) change; a fetch that settles under an
    // older generation is stale and its result is discarded.
    let generation = store_value(0u64);

    // Reviews belong to the mounted view, not to one fetched product, so the
    // board lives here and survives refetches.
    let board = create_rw_signal(ReviewBoard::new());
    let reviews = Signal::derive(move || board.with(|b| b.reviews().to_vec()));

    let add_review = Callback::new(move |(text, rating, image): (String, u8, Option<String>)| {
        board.update(|b| {
            b.submit(&text, rating, image);
        });
    });
    let react = Callback::new(move |(id, reaction): (Uuid, Reaction)| {
        board.update(|b| {
            b.react(id, reaction);
        });
    });

    create_effect(move |_| {
        let id = product_id();
        // The category is part of the reload trigger even though the lookup
        // only needs the id.
        let _ = category_tag();

        generation.update_value(|g| *g += 1);
        let gen = generation.get_value();
        set_loading.set(true);

        spawn_local(async move {
            let fetched = api::fetch_product(&id).await;
            settle_product_fetch(generation, gen, &id, fetched, set_product, set_loading);
        });
    });

    view! {
        <div class="container">
            {move || {
                if loading.get() {
                    return view! { <p>{ "Loading product details…" }</p> }.into_view();
                }
                match product.get() {
                    Some(product) => view! {
                        <ProductPanel
                            product=product
                            category=category()
                            category_tag=category_tag()
                            reviews=reviews
                            on_submit=add_review
                            on_react=react
                        />
                    }
                    .into_view(),
                    None => view! { <p>{ "Product not found." }</p> }.into_view(),
                }
            }}
        </div>
    }
}

/// Applies a settled fetch to the loader's signals. A response is dropped
/// when a newer navigation superseded it, or when the view was torn down
/// while the request was in flight; the signals are disposed in the latter
/// case, so only `try_` access is safe here.
pub fn settle_product_fetch(
    generation: StoredValue<u64>,
    gen: u64,
    id: &str,
    fetched: Result<Product, api::ApiError>,
    set_product: WriteSignal<Option<Product>>,
    set_loading: WriteSignal<bool>,
) {
    if generation.try_get_value() != Some(gen) {
        return;
    }
    match fetched {
        Ok(found) => {
            set_product.try_set(Some(found));
        }
        Err(err) => {
            error!("Failed to load product {}: {}", id, err);
            set_product.try_set(None);
        }
    }
    set_loading.try_set(false);
}

/// The loaded product plus the review board underneath it.
#[component]
fn ProductPanel(
    product: Product,
    category: Category,
    category_tag: String,
    #[prop(into)] reviews: Signal<Vec<Review>>,
    on_submit: Callback<(String, u8, Option<String>)>,
    on_react: Callback<(Uuid, Reaction)>,
) -> impl IntoView {
    let summary_stars = filled_stars(product.rating.rate);

    view! {
        <div class="product-row">
            <div class="product-media">
                <img src=product.image.clone() alt=product.title.clone() class="product-image"/>
            </div>
            <div class="product-info">
                <h2>{ product.title.clone() }</h2>
                <p><strong>{ "Price: " }</strong>{ format!("${}", product.price) }</p>
                <p><strong>{ "Description: " }</strong>{ product.description.clone() }</p>
                <CategoryOptions category=category/>
                <p>{ format!("Category: {category_tag}") }</p>
                <div class="rating">
                    <Stars filled=summary_stars/>
                    <span>{ format!(" ({} reviews)", product.rating.count) }</span>
                </div>
                // Purchase actions are placeholders; there is no cart.
                <button class="action-button">{ "Buy" }</button>
                <button class="action-button">{ "Add to cart" }</button>
            </div>
        </div>
        <div class="reviews-section">
            <h3>{ "User reviews" }</h3>
            <ReviewForm on_submit=on_submit/>
            <ReviewsList reviews=reviews on_react=on_react/>
        </div>
    }
}
