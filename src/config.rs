//! Session settings
//!
//! There are no flags, config files, or environment variables: every knob has a
//! compile-time default in [`Settings::default`]. Tests and embedders construct a
//! [`Settings`] directly and hand it to [`crate::menu::Session::new`].

use tracing::Level;

/// Prompt printed before reading a menu selection
pub const MENU_PROMPT: &str = "Enter your choice: ";

/// Line printed after input fails to parse as an integer; the prompt is then reissued
pub const RETRY_PROMPT: &str = "Invalid input! Please enter a valid number.";

/// Largest array the out-of-bounds scenario will allocate (in elements)
pub const MAX_ARRAY_LEN: usize = 1 << 20;

/// Settings for one menu session
#[derive(Debug, Clone)]
pub struct Settings {
    pub menu_prompt: String,
    pub retry_prompt: String,
    pub max_array_len: usize,
    /// Maximum level emitted by the stderr log subscriber
    pub log_level: Level,
    /// Color banners and reports with ANSI escapes
    pub styled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            menu_prompt: MENU_PROMPT.to_string(),
            retry_prompt: RETRY_PROMPT.to_string(),
            max_array_len: MAX_ARRAY_LEN,
            log_level: Level::WARN,
            styled: false,
        }
    }
}

impl Settings {
    /// Enable or disable ANSI styling
    pub fn with_styling(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn with_max_array_len(mut self, len: usize) -> Self {
        self.max_array_len = len;
        self
    }
}
