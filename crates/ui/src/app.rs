use dioxus::prelude::*;
use dioxus_router::Router;

use crate::routes::Route;

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Window title stays fixed; the section name is shown in the panel header.
        document::Title { "Quiz" }

        // Root hook for the layout rules in style.css.
        div { class: "app-root",
            ErrorBoundary {
                // Last-resort fallback; section load failures render inside the view.
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
