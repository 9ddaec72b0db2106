//! Submit button state.

/// The form's submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    enabled: bool,
    label: String,
    idle_label: String,
    busy_label: String,
    restores: u64,
}

impl SubmitButton {
    pub fn new(idle_label: &str, busy_label: &str) -> Self {
        Self {
            enabled: true,
            label: idle_label.to_string(),
            idle_label: idle_label.to_string(),
            busy_label: busy_label.to_string(),
            restores: 0,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// How many times the button has been restored after a submission.
    pub fn restores(&self) -> u64 {
        self.restores
    }

    /// Disable the button and show the busy label.
    ///
    /// Returns `None` if the button is already disabled. The returned guard
    /// re-enables the button and restores the idle label when dropped.
    pub fn begin(&mut self) -> Option<BusyGuard<'_>> {
        if !self.enabled {
            return None;
        }
        self.enabled = false;
        self.label = self.busy_label.clone();
        Some(BusyGuard { button: self })
    }

    fn restore(&mut self) {
        self.enabled = true;
        self.label = self.idle_label.clone();
        self.restores += 1;
    }
}

/// Keeps a [`SubmitButton`] disabled for as long as it lives.
#[derive(Debug)]
pub struct BusyGuard<'a> {
    button: &'a mut SubmitButton,
}

impl BusyGuard<'_> {
    pub fn label(&self) -> &str {
        self.button.label()
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.button.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_disables_and_relabels() {
        let mut button = SubmitButton::new("Create Task", "Saving...");
        let guard = button.begin().unwrap();
        assert_eq!(guard.label(), "Saving...");
        drop(guard);

        assert!(button.is_enabled());
        assert_eq!(button.label(), "Create Task");
        assert_eq!(button.restores(), 1);
    }

    #[test]
    fn test_begin_refused_while_disabled() {
        let mut button = SubmitButton::new("Create Task", "Saving...");
        let guard = button.begin().unwrap();
        std::mem::forget(guard);

        assert!(!button.is_enabled());
        assert!(button.begin().is_none());
        assert_eq!(button.restores(), 0);
    }
}
