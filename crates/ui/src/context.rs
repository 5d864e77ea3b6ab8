use std::sync::Arc;

use services::QuizService;

pub trait UiApp: Send + Sync {
    fn quiz(&self) -> Arc<QuizService>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz: Arc<QuizService>,
    section_names: Arc<[String]>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let quiz = app.quiz();
        let section_names = quiz
            .section_names()
            .map(|name| name.as_str().to_owned())
            .collect();

        Self {
            quiz,
            section_names,
        }
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    /// Section names in bank order.
    #[must_use]
    pub fn section_names(&self) -> &[String] {
        &self.section_names
    }

    #[must_use]
    pub fn default_section(&self) -> Option<&str> {
        self.section_names.first().map(String::as_str)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
