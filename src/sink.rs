//! Presentation sinks: where the navigator publishes its view.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::types::View;

/// Receives the navigator's state after every command.
pub trait PresentationSink: Send {
    fn render(&mut self, view: &View);

    /// Hint that the display should return to its top.
    fn scroll_to_top(&mut self) {}
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl PresentationSink for NullSink {
    fn render(&mut self, _view: &View) {}
}

/// Keeps every published view. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    views: Arc<Mutex<Vec<View>>>,
    scrolls: Arc<AtomicUsize>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn views(&self) -> Vec<View> {
        match self.views.lock() {
            Ok(views) => views.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn last(&self) -> Option<View> {
        self.views().pop()
    }

    pub fn scrolls(&self) -> usize {
        self.scrolls.load(Ordering::SeqCst)
    }
}

impl PresentationSink for RecordingSink {
    fn render(&mut self, view: &View) {
        match self.views.lock() {
            Ok(mut views) => views.push(view.clone()),
            Err(poisoned) => poisoned.into_inner().push(view.clone()),
        }
    }

    fn scroll_to_top(&mut self) {
        self.scrolls.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RenderFormat {
    #[default]
    Text,
    Json,
}

/// Writes each view to a terminal or any other writer
pub struct ConsoleSink<W: Write + Send> {
    out: W,
    format: RenderFormat,
    clear_on_scroll: bool,
}

impl<W: Write + Send> ConsoleSink<W> {
    pub fn new(out: W, format: RenderFormat) -> Self {
        Self {
            out,
            format,
            clear_on_scroll: false,
        }
    }

    pub fn clear_on_scroll(mut self, clear: bool) -> Self {
        self.clear_on_scroll = clear;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_view(&mut self, view: &View) -> std::io::Result<()> {
        match self.format {
            RenderFormat::Json => {
                serde_json::to_writer(&mut self.out, view)?;
                writeln!(self.out)?;
            }
            RenderFormat::Text => {
                let trail: Vec<String> = view
                    .breadcrumbs
                    .iter()
                    .map(|b| format!("{} ({})", b.name, b.id))
                    .collect();
                writeln!(self.out, "{}", trail.join(" > "))?;
                if view.entries.is_empty() {
                    writeln!(self.out, "  (empty)")?;
                }
                for entry in &view.entries {
                    writeln!(self.out, "  {:<6} {}", entry.id.to_string(), entry.name)?;
                }
                if view.add_dialog_open {
                    writeln!(self.out, "[new folder: type `mkdir <name>` or `dialog` to cancel]")?;
                }
            }
        }
        self.out.flush()
    }
}

impl<W: Write + Send> PresentationSink for ConsoleSink<W> {
    fn render(&mut self, view: &View) {
        if let Err(e) = self.write_view(view) {
            tracing::warn!("failed to render view: {}", e);
        }
    }

    fn scroll_to_top(&mut self) {
        if self.clear_on_scroll {
            // ANSI: cursor home, clear screen
            if let Err(e) = write!(self.out, "\x1b[H\x1b[2J") {
                tracing::warn!("failed to clear the terminal: {}", e);
            }
        }
    }
}
