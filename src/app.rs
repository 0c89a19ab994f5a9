//! Main application entry point for the storefront.
//! Routes the product-detail path to its page and everything else to a
//! minimal landing view.

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{Route, Router, Routes};

use crate::components::product_detail::ProductDetail;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Storefront"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/product/:category/:id" view=ProductDetail/>
                    <Route path="/*any" view=Home/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn Home() -> impl IntoView {
    view! {
        <div class="container">
            <h1>{ "Storefront" }</h1>
            <p>{ "Open /product/:category/:id to view a product." }</p>
        </div>
    }
}
