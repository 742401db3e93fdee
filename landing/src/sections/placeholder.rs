use leptos::prelude::*;

/// Reserved slot for a page that has no content yet.
#[component]
pub fn Placeholder() -> impl IntoView {
    view! { <section id="placeholder" class="placeholder"></section> }
}
