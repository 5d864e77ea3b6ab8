use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable, use_navigator, use_route};

use crate::context::AppContext;
use crate::views::{HomeView, SectionRouteView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/section/:name", SectionRouteView)] Section { name: String },
}

impl Route {
    /// Section shown by this route, falling back to the first bank section.
    #[must_use]
    pub fn section_name<'a>(&'a self, ctx: &'a AppContext) -> Option<&'a str> {
        match self {
            Self::Home {} => ctx.default_section(),
            Self::Section { name } => Some(name.as_str()),
        }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "app-header",
                h1 { "Quiz" }
                SectionSelect {}
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn SectionSelect() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let current = route.section_name(&ctx).unwrap_or_default().to_owned();

    rsx! {
        label { class: "section-select",
            "Section "
            select {
                value: "{current}",
                onchange: move |evt: FormEvent| {
                    navigator.push(Route::Section { name: evt.value() });
                },
                for name in ctx.section_names().iter().cloned() {
                    option {
                        key: "{name}",
                        value: "{name}",
                        selected: name == current,
                        "{name}"
                    }
                }
            }
        }
    }
}
