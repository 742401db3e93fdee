use crate::config::{PRODUCT_NAME, VERSION};
use leptos::prelude::*;

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="#" class="nav-brand">
                    <div class="nav-logo">
                        <i class="ri-book-2-fill"></i>
                    </div>
                    <span class="nav-title">{PRODUCT_NAME}</span>
                    <span class="nav-version">{VERSION}</span>
                </a>
                <button
                    class=move || if menu_open.get() { "nav-toggle active" } else { "nav-toggle" }
                    aria-label="Toggle navigation"
                    on:click=move |_| set_menu_open.update(|o| *o = !*o)
                >
                    <i class={move || if menu_open.get() { "ri-close-line" } else { "ri-menu-line" }}></i>
                </button>
                <div class={move || if menu_open.get() { "nav-links open" } else { "nav-links" }}>
                    <a href="#bento" class="nav-link" on:click=move |_| set_menu_open.set(false)>
                        "Overview"
                    </a>
                    <a href="#records" class="nav-link" on:click=move |_| set_menu_open.set(false)>
                        "Record Book"
                    </a>
                    <a href="#features" class="nav-link" on:click=move |_| set_menu_open.set(false)>
                        "Features"
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_brand_and_section_links() {
        let html = Owner::new().with(|| view! { <Nav /> }.to_html());
        assert!(html.contains(PRODUCT_NAME));
        assert!(html.contains(VERSION));
        for anchor in ["#bento", "#records", "#features"] {
            assert!(html.contains(&format!("href=\"{anchor}\"")));
        }
        assert!(html.contains("class=\"nav-links\""));
    }
}
