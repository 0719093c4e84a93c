//! Outcome of an action or built-in command

/// Result of executing an entry.
///
/// `continue_session = false` tells the driving loop to stop. `message` is
/// printed by the engine when `ok` is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub continue_session: bool,
    pub ok: bool,
    pub message: String,
}

impl Default for Response {
    fn default() -> Self {
        Self {
            continue_session: true,
            ok: true,
            message: String::new(),
        }
    }
}

impl Response {
    /// Successful, keep the session going
    pub fn ok() -> Self {
        Self::default()
    }

    /// Ask the driving loop to terminate
    pub fn quit() -> Self {
        Self {
            continue_session: false,
            ..Self::default()
        }
    }

    /// Report a failure; the session continues
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_continue(mut self, continue_session: bool) -> Self {
        self.continue_session = continue_session;
        self
    }
}
