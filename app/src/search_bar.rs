//! Controlled input buffer for the search bar.

/// Search input state.
///
/// A controlled buffer: the latest typed value replaces the previous one,
/// and submission is an explicit event.
#[derive(Debug, Clone, Default)]
pub struct SearchBar {
    input: String,
}

impl SearchBar {
    /// Create an empty search bar.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            input: String::new(),
        }
    }

    /// Replace the buffer with the latest typed value.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Current buffer contents.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Submit the current input.
    ///
    /// Returns the trimmed query for non-blank input. Blank or
    /// whitespace-only input yields `None` with no other signal; there is
    /// no validation message. The buffer is left intact either way.
    #[must_use]
    pub fn submit(&self) -> Option<String> {
        let trimmed = self.input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}
