//! Application state and key handling

use crate::config::TuiConfig;
use crate::state::{
    ContactUiEvent, Field, Focus, FormState, FormStore, IntentError, ScreenState, Snackbar,
    SubjectPicker,
};
use crate::submission::SubmissionClientTrait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::{broadcast, watch};

/// Main application struct
pub struct App {
    /// Contact form state machine
    pub store: FormStore,
    /// UI-only state (focus, dropdown, snackbar)
    pub screen: ScreenState,
    /// Options offered by the subject field
    pub subject_options: Vec<String>,
    state_rx: watch::Receiver<FormState>,
    events: broadcast::Receiver<ContactUiEvent>,
    snackbar_duration: Duration,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App backed by the simulated submitter
    pub fn new(config: &TuiConfig) -> Self {
        let submitter = config.submitter();
        tracing::info!(
            success_rate = submitter.success_rate(),
            delay_ms = submitter.delay().as_millis() as u64,
            "Using simulated submission backend"
        );
        Self::with_client(
            Arc::new(submitter),
            config.subject_options(),
            config.snackbar_duration(),
        )
    }

    pub fn with_client(
        client: Arc<dyn SubmissionClientTrait>,
        subject_options: Vec<String>,
        snackbar_duration: Duration,
    ) -> Self {
        let store = FormStore::new(client);
        let state_rx = store.subscribe_state();
        let events = store.subscribe_events();
        Self {
            store,
            screen: ScreenState::default(),
            subject_options,
            state_rx,
            events,
            snackbar_duration,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Latest published form state
    pub fn form_state(&self) -> FormState {
        self.state_rx.borrow().clone()
    }

    /// Drain pending one-shot events and expire the snackbar
    pub fn tick(&mut self) {
        loop {
            match self.events.try_recv() {
                Ok(event) => {
                    self.screen.snackbar = Some(Snackbar::for_event(&event, self.snackbar_duration));
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!("Missed {skipped} submission events");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        self.screen.update_snackbar();
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Any key dismisses the snackbar; Esc does nothing else
        if self.screen.snackbar.take().is_some() && key.code == KeyCode::Esc {
            return;
        }

        if self.screen.subject_picker.is_some() {
            self.handle_subject_picker_key(key);
            return;
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Tab | KeyCode::Down => self.screen.focus = self.screen.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.screen.focus = self.screen.focus.prev(),
            KeyCode::Enter => match self.screen.focus {
                Focus::SendButton => self.submit(),
                Focus::Subject => self.open_subject_picker(),
                Focus::Message => self.input_char('\n'),
                Focus::Name | Focus::Email => self.screen.focus = self.screen.focus.next(),
            },
            KeyCode::Char(' ') if self.screen.focus == Focus::Subject => {
                self.open_subject_picker()
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input_char(c)
            }
            KeyCode::Backspace => self.backspace(),
            _ => {}
        }
    }

    fn handle_subject_picker_key(&mut self, key: KeyEvent) {
        let count = self.subject_options.len();
        let Some(picker) = self.screen.subject_picker.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Esc => self.screen.subject_picker = None,
            KeyCode::Down | KeyCode::Tab => picker.next(count),
            KeyCode::Up | KeyCode::BackTab => picker.prev(count),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let chosen = self.subject_options.get(picker.highlighted).cloned();
                self.screen.subject_picker = None;
                if let Some(subject) = chosen {
                    self.apply(Field::Subject, subject);
                }
            }
            _ => {}
        }
    }

    fn open_subject_picker(&mut self) {
        if self.form_state().is_submitting {
            return;
        }
        let current = self.form_state().form.subject;
        let highlighted = self
            .subject_options
            .iter()
            .position(|o| *o == current)
            .unwrap_or(0);
        self.screen.subject_picker = Some(SubjectPicker { highlighted });
    }

    /// Append a character to the focused text field
    fn input_char(&mut self, c: char) {
        let Some(field) = self.screen.focus.field() else {
            return;
        };
        if field == Field::Subject || (c == '\n' && !field.is_multiline()) {
            return;
        }
        let mut value = self.form_state().form.get(field).to_string();
        value.push(c);
        self.apply(field, value);
    }

    /// Remove the last character of the focused text field
    fn backspace(&mut self) {
        let Some(field) = self.screen.focus.field() else {
            return;
        };
        if field == Field::Subject {
            return;
        }
        let mut value = self.form_state().form.get(field).to_string();
        if value.pop().is_some() {
            self.apply(field, value);
        }
    }

    fn apply(&mut self, field: Field, value: String) {
        let result = match field {
            Field::Name => self.store.on_name_changed(value),
            Field::Email => self.store.on_email_changed(value),
            Field::Subject => self.store.on_subject_changed(value),
            Field::Message => self.store.on_message_changed(value),
        };
        // Rejections (submitting, over-long) leave the form unchanged
        if let Err(err) = result {
            tracing::trace!("Edit of {} not applied: {err}", field.label());
        }
    }

    fn submit(&mut self) {
        match self.store.submit() {
            Ok(()) => {}
            Err(IntentError::Invalid) => {
                // Jump to the first field that needs attention
                let errors = self.form_state().errors;
                if let Some(field) = Field::ALL.into_iter().find(|f| errors.get(*f).is_some()) {
                    self.screen.focus = match field {
                        Field::Name => Focus::Name,
                        Field::Email => Focus::Email,
                        Field::Subject => Focus::Subject,
                        Field::Message => Focus::Message,
                    };
                }
            }
            Err(err) => tracing::debug!("Submit not started: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{SnackbarKind, ValidationError};
    use crate::submission::MockSubmissionClientTrait;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn options() -> Vec<String> {
        vec!["Option 1".to_string(), "Option 2".to_string()]
    }

    fn app_with(mock: MockSubmissionClientTrait) -> App {
        App::with_client(Arc::new(mock), options(), Duration::from_secs(60))
    }

    fn idle_app() -> App {
        let mut mock = MockSubmissionClientTrait::new();
        mock.expect_submit().never();
        app_with(mock)
    }

    /// Fill every field with valid values, leaving focus on the Send button
    fn fill_form(app: &mut App) {
        type_text(app, "Ana");
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "ana@example.com");
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Tab));
        type_text(app, "Hi");
        app.handle_key(key(KeyCode::Tab));
    }

    #[test]
    fn test_typing_updates_focused_field() {
        let mut app = idle_app();
        type_text(&mut app, "Ana");
        assert_eq!(app.form_state().form.name, "Ana");
        assert_eq!(app.form_state().errors.email, Some(ValidationError::Required));
    }

    #[test]
    fn test_backspace_removes_last_char() {
        let mut app = idle_app();
        type_text(&mut app, "Anna");
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.form_state().form.name, "Ann");
    }

    #[test]
    fn test_tab_moves_focus() {
        let mut app = idle_app();
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.screen.focus, Focus::Email);
        app.handle_key(key(KeyCode::BackTab));
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.screen.focus, Focus::SendButton);
    }

    #[test]
    fn test_enter_in_message_inserts_newline() {
        let mut app = idle_app();
        app.screen.focus = Focus::Message;
        type_text(&mut app, "a");
        app.handle_key(key(KeyCode::Enter));
        type_text(&mut app, "b");
        assert_eq!(app.form_state().form.message, "a\nb");
    }

    #[test]
    fn test_typing_ignored_on_subject() {
        let mut app = idle_app();
        app.screen.focus = Focus::Subject;
        type_text(&mut app, "xyz");
        assert_eq!(app.form_state().form.subject, "");
    }

    #[test]
    fn test_subject_picker_selects_option() {
        let mut app = idle_app();
        app.screen.focus = Focus::Subject;

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.screen.subject_picker, Some(SubjectPicker { highlighted: 0 }));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));

        assert!(app.screen.subject_picker.is_none());
        assert_eq!(app.form_state().form.subject, "Option 2");
    }

    #[test]
    fn test_subject_picker_esc_closes_without_change() {
        let mut app = idle_app();
        app.screen.focus = Focus::Subject;
        app.handle_key(key(KeyCode::Char(' ')));
        app.handle_key(key(KeyCode::Esc));
        assert!(app.screen.subject_picker.is_none());
        assert!(!app.should_quit());
        assert_eq!(app.form_state().form.subject, "");
    }

    #[test]
    fn test_name_length_limit() {
        let mut app = idle_app();
        type_text(&mut app, &"x".repeat(70));
        assert_eq!(app.form_state().form.name.chars().count(), 60);
    }

    #[test]
    fn test_esc_quits() {
        let mut app = idle_app();
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_invalid_submit_focuses_first_error() {
        let mut app = idle_app();
        app.screen.focus = Focus::Email;
        type_text(&mut app, "ana@example.com");
        app.screen.focus = Focus::SendButton;

        app.handle_key(ctrl('s'));

        let state = app.form_state();
        assert!(!state.is_submitting);
        assert_eq!(state.errors.name, Some(ValidationError::Required));
        assert_eq!(app.screen.focus, Focus::Name);
        app.tick();
        assert!(app.screen.snackbar.is_none());
    }

    #[tokio::test]
    async fn test_successful_submit_shows_snackbar_and_clears_form() {
        let mut mock = MockSubmissionClientTrait::new();
        mock.expect_submit().times(1).returning(|_| Ok(true));
        let mut app = app_with(mock);
        let mut events = app.store.subscribe_events();
        fill_form(&mut app);
        assert!(app.form_state().can_submit);

        app.handle_key(key(KeyCode::Enter));
        assert!(app.form_state().is_submitting);
        events.recv().await.unwrap();
        app.tick();

        assert_eq!(app.form_state(), FormState::default());
        let snackbar = app.screen.snackbar.as_ref().unwrap();
        assert_eq!(snackbar.kind, SnackbarKind::Success);
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_form() {
        let mut mock = MockSubmissionClientTrait::new();
        mock.expect_submit().times(1).returning(|_| Ok(false));
        let mut app = app_with(mock);
        let mut events = app.store.subscribe_events();
        fill_form(&mut app);

        app.handle_key(ctrl('s'));
        events.recv().await.unwrap();
        app.tick();

        let state = app.form_state();
        assert_eq!(state.form.name, "Ana");
        assert_eq!(state.form.subject, "Option 1");
        assert!(!state.is_submitting);
        assert_eq!(
            app.screen.snackbar.as_ref().map(|s| s.kind),
            Some(SnackbarKind::Error)
        );
    }

    #[tokio::test]
    async fn test_edits_ignored_while_submitting() {
        let mut mock = MockSubmissionClientTrait::new();
        mock.expect_submit().times(1).returning(|_| Ok(false));
        let mut app = app_with(mock);
        let mut events = app.store.subscribe_events();
        fill_form(&mut app);

        app.handle_key(ctrl('s'));
        app.screen.focus = Focus::Name;
        type_text(&mut app, "zzz");
        assert_eq!(app.form_state().form.name, "Ana");

        events.recv().await.unwrap();
    }

    #[tokio::test]
    async fn test_key_dismisses_snackbar() {
        let mut mock = MockSubmissionClientTrait::new();
        mock.expect_submit().times(1).returning(|_| Ok(true));
        let mut app = app_with(mock);
        let mut events = app.store.subscribe_events();
        fill_form(&mut app);
        app.handle_key(ctrl('s'));
        events.recv().await.unwrap();
        app.tick();
        assert!(app.screen.snackbar.is_some());

        app.handle_key(key(KeyCode::Esc));

        assert!(app.screen.snackbar.is_none());
        assert!(!app.should_quit());
    }
}
