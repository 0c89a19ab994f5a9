use leptos::*;

use crate::models::category::Category;

/// Extra attribute pickers shown for recognized categories.
/// The selections are display-only: nothing reads them back into any state,
/// matching the current behavior of the product page.
#[component]
pub fn CategoryOptions(category: Category) -> impl IntoView {
    view! {
        <div class="category-options">
            {category.attribute_groups().iter().map(|group| view! {
                <div class="form-group">
                    <label><strong>{ group.label }{ ":" }</strong></label>
                    <select class="form-control">
                        <option disabled=true selected=true>{ group.placeholder }</option>
                        {group.options.iter().map(|option| view! {
                            <option>{ *option }</option>
                        }).collect::<Vec<_>>()}
                    </select>
                </div>
            }).collect::<Vec<_>>()}
        </div>
    }
}
