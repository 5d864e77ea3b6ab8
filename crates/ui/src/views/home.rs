use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::SectionView;

/// Landing route: the first section of the bank.
#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();

    match ctx.default_section() {
        Some(name) => {
            let name = name.to_owned();
            rsx! {
                SectionView { key: "{name}", name: name.clone() }
            }
        }
        None => rsx! {
            div { class: "page",
                h2 { "No sections" }
                p { "The question bank is empty." }
            }
        },
    }
}

/// `/section/:name`. Keyed on the name so switching sections remounts the view.
#[component]
pub fn SectionRouteView(name: String) -> Element {
    rsx! {
        SectionView { key: "{name}", name: name.clone() }
    }
}
