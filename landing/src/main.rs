// MentorTrack Landing Page — Leptos 0.8 Edition
// Built for mentors by The MentorTrack Team (c)2025

mod config;
mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::info!("mounting {} {}", config::PRODUCT_NAME, config::VERSION);
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <ConsoleBanner />
        <Nav />
        <main>
            <BentoGrid />
            <BookShowcase />
            <Features />
            <Placeholder />
        </main>
        <Footer />
    }
}
