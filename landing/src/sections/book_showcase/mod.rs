//! Record book showcase: a tabbed view over a sample mentee's record.

mod panels;
mod tabs;

pub use tabs::{RecordTab, TabSelection};

use leptos::prelude::*;
use panels::render_panel;

#[component]
pub fn BookShowcase(
    /// Selection handle; a fresh one starting on Student Details if omitted.
    #[prop(optional)]
    selection: Option<TabSelection>,
) -> impl IntoView {
    let selection = selection.unwrap_or_default();

    view! {
        <section id="records" class="book-showcase">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Record Book"</p>
                    <h2 class="section-title">"One book per mentee. Always up to date."</h2>
                    <p class="section-description">
                        "Details, grades, family contacts, goals and progress, "
                        "kept together where the mentor can see them."
                    </p>
                </div>
                <div class="book">
                    <div class="book-tabs" role="tablist">
                        {RecordTab::ALL
                            .into_iter()
                            .map(|tab| view! { <TabButton tab=tab selection=selection /> })
                            .collect_view()}
                    </div>
                    <div class="book-page">
                        {move || render_panel(selection.active())}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TabButton(tab: RecordTab, selection: TabSelection) -> impl IntoView {
    view! {
        <button
            type="button"
            role="tab"
            data-tab=tab.id()
            class=move || if selection.is_active(tab) { "book-tab active" } else { "book-tab" }
            aria-selected=move || selection.is_active(tab).to_string()
            on:click=move |_| selection.select(tab)
        >
            <i class={tab.icon()}></i>
            <span class="book-tab-label">{tab.label()}</span>
        </button>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_root() -> HtmlElement {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("no document");
        let root: HtmlElement = document
            .create_element("div")
            .expect("create div")
            .unchecked_into();
        document
            .body()
            .expect("no body")
            .append_child(&root)
            .expect("append root");
        root
    }

    fn shown_panels(root: &HtmlElement) -> Vec<String> {
        let panels = root.query_selector_all("[data-panel]").expect("panel selector");
        (0..panels.length())
            .filter_map(|i| panels.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .filter_map(|el| el.get_attribute("data-panel"))
            .collect()
    }

    fn button(root: &HtmlElement, tab: RecordTab) -> HtmlElement {
        root.query_selector(&format!("[data-tab=\"{}\"]", tab.id()))
            .expect("button selector")
            .expect("missing tab button")
            .unchecked_into()
    }

    #[wasm_bindgen_test]
    async fn clicking_each_button_shows_its_panel() {
        let root = mount_root();
        let _handle = leptos::mount::mount_to(root.clone(), || view! { <BookShowcase /> });

        assert_eq!(shown_panels(&root), vec!["student-details"]);

        for tab in RecordTab::ALL {
            let btn = button(&root, tab);
            btn.click();
            leptos::task::tick().await;
            assert_eq!(shown_panels(&root), vec![tab.id()]);
            assert_eq!(btn.get_attribute("aria-selected").as_deref(), Some("true"));

            // second click on the active tab
            btn.click();
            leptos::task::tick().await;
            assert_eq!(shown_panels(&root), vec![tab.id()]);
        }
    }
}
