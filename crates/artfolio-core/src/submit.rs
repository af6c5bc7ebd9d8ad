//! Submit control state shared by both forms.

/// A form's submit button: its label, enabled state and dimmed style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    label: String,
    original: String,
    disabled: bool,
    dimmed: bool,
}

impl SubmitControl {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            original: label.clone(),
            label,
            disabled: false,
            dimmed: false,
        }
    }

    /// Enter the pending state with a new label.
    pub fn pending(&mut self, label: &str, dim: bool) {
        self.label = label.to_string();
        self.disabled = true;
        self.dimmed = dim;
    }

    /// Back to the original label, enabled and undimmed.
    pub fn restore(&mut self) {
        self.label = self.original.clone();
        self.disabled = false;
        self.dimmed = false;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_pending(&self) -> bool {
        self.disabled && self.label != self.original
    }

    /// Inline style for the button.
    pub fn style(&self) -> &'static str {
        if self.dimmed {
            "background: #ccc;"
        } else {
            ""
        }
    }
}
