use crate::components::SearchEnhancer;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SearchEnhancer />
    }
}
