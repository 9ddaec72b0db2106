//! Status message presentation.
//!
//! # Responsibilities
//! - Show one transient message, styled by category
//! - Hide it again after a fixed delay
//!
//! # Design Decisions
//! - Every `present` call bumps a generation counter; a hide timer only
//!   fires if no newer message was shown since it was scheduled
//! - Hide timers are detached Tokio tasks holding an `Arc` to the surface

pub mod surface;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::config::PresenterConfig;

pub use surface::{MemorySurface, MessageSurface, SurfaceState, TerminalSurface};

/// Message category, which decides its styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Error,
    Success,
}

impl Category {
    /// Style classes applied to the message region.
    pub fn style_class(self) -> &'static str {
        match self {
            Category::Error => "p-3 rounded-md bg-red-100 text-red-800",
            Category::Success => "p-3 rounded-md bg-green-100 text-green-800",
        }
    }
}

#[derive(Clone)]
pub struct MessagePresenter {
    surface: Arc<dyn MessageSurface>,
    hide_after: Duration,
    generation: Arc<AtomicU64>,
}

impl MessagePresenter {
    pub fn new(surface: Arc<dyn MessageSurface>, config: &PresenterConfig) -> Self {
        Self {
            surface,
            hide_after: Duration::from_millis(config.hide_after_ms),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn hide_after(&self) -> Duration {
        self.hide_after
    }

    /// Show `text` and schedule it to be hidden. Must be called inside a
    /// Tokio runtime.
    pub fn present(&self, text: &str, category: Category) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.surface.show(text, category);

        let surface = Arc::clone(&self.surface);
        let current = Arc::clone(&self.generation);
        let delay = self.hide_after;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if current.load(Ordering::SeqCst) == generation {
                surface.hide();
            }
        });
    }
}

impl std::fmt::Debug for MessagePresenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessagePresenter")
            .field("hide_after", &self.hide_after)
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presenter() -> (MessagePresenter, Arc<MemorySurface>) {
        let surface = Arc::new(MemorySurface::default());
        let presenter = MessagePresenter::new(surface.clone(), &PresenterConfig::default());
        (presenter, surface)
    }

    #[test]
    fn test_style_classes() {
        assert!(Category::Error.style_class().contains("bg-red-100"));
        assert!(Category::Success.style_class().contains("bg-green-100"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_hides_after_delay() {
        let (presenter, surface) = presenter();
        presenter.present("X", Category::Success);

        let state = surface.state();
        assert!(state.visible);
        assert_eq!(state.text, "X");
        assert_eq!(state.class, Category::Success.style_class());

        tokio::time::sleep(Duration::from_millis(4999)).await;
        assert!(surface.state().visible);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(!surface.state().visible);
        assert_eq!(surface.state().hides, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_message_is_not_hidden_early() {
        let (presenter, surface) = presenter();
        presenter.present("first", Category::Success);

        tokio::time::sleep(Duration::from_millis(3000)).await;
        presenter.present("second", Category::Error);
        assert_eq!(surface.state().text, "second");
        assert_eq!(surface.state().class, Category::Error.style_class());

        // First timer elapses here and must not hide the second message.
        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert!(surface.state().visible);
        assert_eq!(surface.state().text, "second");

        tokio::time::sleep(Duration::from_millis(2600)).await;
        assert!(!surface.state().visible);
        assert_eq!(surface.state().hides, 1);
    }
}
