//! Conversion state shared by the one-shot and watch hosts.

use log::{debug, info};
use notetex_convert::Converter;
use notetex_core::{Result, ViewMode};
use notetex_store::{save_latex, DocumentStore, SaveOutcome, SaveRequest};
use std::time::Instant;

/// The latest LaTeX and how it should be shown.
#[derive(Debug, Clone, Default)]
pub struct Session {
    converter: Converter,
    latex: String,
    view: ViewMode,
}

impl Session {
    pub fn new(view: ViewMode) -> Self {
        Self {
            view,
            ..Self::default()
        }
    }

    /// Reconvert from `text`. Blank text clears the output.
    pub fn update(&mut self, text: &str) {
        if text.trim().is_empty() {
            debug!("blank input, clearing output");
            self.latex.clear();
            return;
        }

        let start = Instant::now();
        self.latex = self.converter.convert(text);
        info!("Converted in {:.3}s", start.elapsed().as_secs_f64());
        debug!("{} characters", self.latex.chars().count());
    }

    pub fn latex(&self) -> &str {
        &self.latex
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    /// Switch between the preview and the raw LaTeX.
    pub fn toggle_view(&mut self) -> ViewMode {
        self.view = self.view.toggled();
        self.view
    }

    /// The text for the current view.
    pub fn display(&self) -> String {
        match self.view {
            ViewMode::Code => self.latex.clone(),
            ViewMode::Rendered => notetex_preview::render(&self.latex),
        }
    }

    /// Save the latest LaTeX, refusing when nothing has been converted.
    pub fn save<S: DocumentStore + ?Sized>(
        &self,
        store: &mut S,
        request: &SaveRequest,
    ) -> Result<SaveOutcome> {
        save_latex(store, &self.latex, request)
    }
}
