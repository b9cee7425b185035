//! TUI application state.
//!
//! Wraps the library [`Session`] with the view-only state the terminal
//! needs: which operand field has focus and whether the app should quit.
//! All calculator semantics stay in the session.

use sumstack::client::CalculationApi;
use sumstack::session::Session;

/// The two editable operand fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// First operand.
    Num1,
    /// Second operand.
    Num2,
}

impl Field {
    /// Returns the other field.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Num1 => Self::Num2,
            Self::Num2 => Self::Num1,
        }
    }
}

/// Calculator front-end state.
#[derive(Debug)]
pub struct App<A> {
    /// Synchronized calculator state.
    session: Session<A>,
    /// Resolved backend address, shown in the footer.
    backend_url: String,
    /// Operand field that receives typed characters.
    focus: Field,
    /// Whether the app should quit.
    should_quit: bool,
}

impl<A: CalculationApi> App<A> {
    /// Creates the front-end around an existing session.
    #[must_use]
    pub fn new(session: Session<A>, backend_url: impl Into<String>) -> Self {
        Self {
            session,
            backend_url: backend_url.into(),
            focus: Field::Num1,
            should_quit: false,
        }
    }

    /// Returns the underlying session.
    #[must_use]
    pub fn session(&self) -> &Session<A> {
        &self.session
    }

    /// Returns the underlying session mutably.
    pub fn session_mut(&mut self) -> &mut Session<A> {
        &mut self.session
    }

    /// Returns the backend address shown to the user.
    #[must_use]
    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Returns the focused field.
    #[must_use]
    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Moves focus to the other operand field.
    pub fn switch_field(&mut self) {
        self.focus = self.focus.other();
    }

    /// Returns whether the app should quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Appends a character to the focused field.
    ///
    /// Ignored while a submit is in flight, matching the disabled inputs
    /// of the original form.
    pub fn insert_char(&mut self, c: char) {
        if self.session.is_loading() {
            return;
        }
        let mut value = self.focused_value().to_string();
        value.push(c);
        self.set_focused_value(value);
    }

    /// Deletes the last character of the focused field.
    pub fn backspace(&mut self) {
        if self.session.is_loading() {
            return;
        }
        let mut value = self.focused_value().to_string();
        value.pop();
        self.set_focused_value(value);
    }

    /// Clears the focused field.
    pub fn clear_field(&mut self) {
        if self.session.is_loading() {
            return;
        }
        self.set_focused_value(String::new());
    }

    /// Returns the text of the focused field.
    #[must_use]
    pub fn focused_value(&self) -> &str {
        match self.focus {
            Field::Num1 => self.session.num1(),
            Field::Num2 => self.session.num2(),
        }
    }

    fn set_focused_value(&mut self, value: String) {
        match self.focus {
            Field::Num1 => self.session.set_num1(value),
            Field::Num2 => self.session.set_num2(value),
        }
    }

    /// Eager history fetch on startup.
    pub async fn activate(&mut self) {
        self.session.activate().await;
    }

    /// Submits the current operands.
    pub async fn submit(&mut self) {
        self.session.submit().await;
    }

    /// Re-fetches the history on demand.
    pub async fn refresh(&mut self) {
        self.session.refresh_history().await;
    }
}
