//! The task form: named fields plus the submit button.
//!
//! Stands in for the HTML form. Field values are free-form strings and are
//! not validated here.

pub mod button;

use std::collections::HashMap;

pub use button::{BusyGuard, SubmitButton};

use crate::config::FormConfig;

/// Field names the handler reads, in wire order.
pub const FIELD_NAMES: [&str; 5] = [
    "employeeName",
    "taskTitle",
    "taskDescription",
    "dueDate",
    "priority",
];

/// Current values of the form's named fields.
#[derive(Debug, Clone, Default)]
pub struct FieldValues(HashMap<String, String>);

impl FieldValues {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Clear every field value.
    pub fn reset(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|v| v.is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct TaskForm {
    fields: FieldValues,
    button: SubmitButton,
}

impl TaskForm {
    pub fn new(config: &FormConfig) -> Self {
        Self {
            fields: FieldValues::default(),
            button: SubmitButton::new(&config.idle_label, &config.busy_label),
        }
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.set(name, value);
    }

    /// Builder-style variant of [`TaskForm::set_field`].
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_field(name, value);
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &FieldValues {
        &self.fields
    }

    pub fn reset(&mut self) {
        self.fields.reset();
    }

    pub fn button(&self) -> &SubmitButton {
        &self.button
    }

    /// Borrow fields and button independently, so the button can stay
    /// busy while the fields are read or reset.
    pub fn split_mut(&mut self) -> (&mut FieldValues, &mut SubmitButton) {
        (&mut self.fields, &mut self.button)
    }
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::new(&FormConfig::default())
    }
}
