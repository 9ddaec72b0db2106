//! Message display surfaces.

use std::sync::Mutex;

use crate::presenter::Category;

/// The region a message is rendered into.
pub trait MessageSurface: Send + Sync {
    /// Set text and style, and make the region visible.
    fn show(&self, text: &str, category: Category);

    fn hide(&self);
}

/// Snapshot of a [`MemorySurface`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceState {
    pub text: String,
    pub class: String,
    pub category: Option<Category>,
    pub visible: bool,
    pub shows: u64,
    pub hides: u64,
}

/// Headless surface that keeps the last message in memory.
#[derive(Debug, Default)]
pub struct MemorySurface {
    state: Mutex<SurfaceState>,
}

impl MemorySurface {
    pub fn state(&self) -> SurfaceState {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl MessageSurface for MemorySurface {
    fn show(&self, text: &str, category: Category) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.text = text.to_string();
        state.class = category.style_class().to_string();
        state.category = Some(category);
        state.visible = true;
        state.shows += 1;
    }

    fn hide(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.visible = false;
        state.hides += 1;
    }
}

/// Writes messages to the terminal: errors to stderr, the rest to stdout.
#[derive(Debug, Default)]
pub struct TerminalSurface;

impl MessageSurface for TerminalSurface {
    fn show(&self, text: &str, category: Category) {
        match category {
            Category::Error => eprintln!("{}", text),
            Category::Success => println!("{}", text),
        }
    }

    fn hide(&self) {
        tracing::debug!("Status message hidden");
    }
}
