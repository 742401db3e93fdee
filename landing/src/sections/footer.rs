use crate::config::{COPYRIGHT, PRODUCT_NAME, TAGLINE};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-logo">
                        <i class="ri-book-2-fill"></i>
                    </span>
                    <span class="footer-title">{PRODUCT_NAME}</span>
                </div>
                <p class="footer-tagline">{TAGLINE}</p>
                <div class="footer-links">
                    <a href="#bento" class="footer-link">"Overview"</a>
                    <a href="#records" class="footer-link">"Record Book"</a>
                    <a href="#features" class="footer-link">"Features"</a>
                </div>
                <p class="footer-copyright">{COPYRIGHT}</p>
            </div>
        </footer>
    }
}
