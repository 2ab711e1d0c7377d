//! UI-only state of the contact screen (focus, subject picker, snackbar)

use super::form::Field;
use super::snackbar::Snackbar;

/// Focusable elements, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Name,
    Email,
    Subject,
    Message,
    SendButton,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Name,
        Focus::Email,
        Focus::Subject,
        Focus::Message,
        Focus::SendButton,
    ];

    fn index(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        let count = Self::ORDER.len();
        Self::ORDER[(self.index() + count - 1) % count]
    }

    /// The form field behind this focus, if it is an input
    pub fn field(&self) -> Option<Field> {
        match self {
            Focus::Name => Some(Field::Name),
            Focus::Email => Some(Field::Email),
            Focus::Subject => Some(Field::Subject),
            Focus::Message => Some(Field::Message),
            Focus::SendButton => None,
        }
    }
}

/// Open dropdown for the subject select field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectPicker {
    pub highlighted: usize,
}

impl SubjectPicker {
    pub fn next(&mut self, option_count: usize) {
        if option_count > 0 {
            self.highlighted = (self.highlighted + 1) % option_count;
        }
    }

    pub fn prev(&mut self, option_count: usize) {
        if option_count > 0 {
            self.highlighted = if self.highlighted == 0 {
                option_count - 1
            } else {
                self.highlighted - 1
            };
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScreenState {
    pub focus: Focus,
    pub subject_picker: Option<SubjectPicker>,
    pub snackbar: Option<Snackbar>,
}

impl ScreenState {
    /// Clear the snackbar once it has expired
    pub fn update_snackbar(&mut self) {
        if self.snackbar.as_ref().is_some_and(|s| s.is_expired()) {
            self.snackbar = None;
        }
    }
}
