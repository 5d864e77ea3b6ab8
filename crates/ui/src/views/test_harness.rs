use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{QuizService, load_bank_from_str};
use storage::repository::{InMemoryStore, KeyValueStore, Storage};

use crate::context::{UiApp, build_app_context};
use crate::views::{HomeView, SectionTestHandles, SectionView};

pub const TEST_BANK: &str = r#"{
  "Networking": [
    { "number": 1, "question": "Which layer does TCP live on?",
      "options": ["Network", "Transport", "Session"], "answer": "B",
      "explanation": "TCP is a transport protocol." },
    { "number": 2, "question": "Default HTTPS port?",
      "options": ["80", "8080", "443", "22"], "answer": "C" },
    { "number": 3, "question": "What does DNS resolve?",
      "options": ["Names to addresses", "Addresses to MACs"], "answer": "A" }
  ],
  "Storage": [
    { "number": 1, "question": "What does RAID 1 do?",
      "options": ["Striping", "Mirroring"], "answer": "B" }
  ]
}"#;

#[derive(Clone)]
struct TestApp {
    quiz: Arc<QuizService>,
}

impl UiApp for TestApp {
    fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Section(String),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: SectionTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Section(name) => rsx! { SectionView { name } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub kv: Arc<dyn KeyValueStore>,
    pub handles: SectionTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        for _ in 0..4 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    /// Rebuild and let the section resource resolve.
    pub async fn load(&mut self) {
        self.rebuild();
        self.drive_async().await;
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_store(view, Arc::new(InMemoryStore::new()))
}

pub fn setup_view_harness_with_store(view: ViewKind, kv: Arc<dyn KeyValueStore>) -> ViewHarness {
    let bank = load_bank_from_str(TEST_BANK).expect("test bank");
    let quiz = Arc::new(QuizService::new(bank, Storage::from_store(Arc::clone(&kv))));
    let handles = SectionTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::new(TestApp { quiz }),
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, kv, handles }
}
