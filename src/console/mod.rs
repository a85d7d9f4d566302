//! Line-oriented console for prompts and reports
//!
//! [`Console`] wraps one input stream and one output stream. It is the only state
//! shared between the menu and the scenarios: the input cursor advances by exactly
//! one line per read and is never rewound.
//!
//! # Scripted sessions
//!
//! [`ScriptedConsole`] reads from an in-memory script and records everything written
//! to it, so a whole session can be driven from a test and its transcript asserted
//! on afterwards:
//!
//! ```
//! use faultlab::console::ScriptedConsole;
//!
//! let mut console = ScriptedConsole::scripted("abc\n7\n");
//! let n: i32 = console.prompt_number("Number: ").unwrap();
//! assert_eq!(n, 7);
//! assert!(console.transcript().contains("Invalid input!"));
//! ```

mod theme;

pub use theme::{Theme, DEFAULT_THEME};

use crate::config::{Settings, RETRY_PROMPT};
use crossterm::style::{Color, Stylize};
use std::fmt::Display;
use std::io::{self, BufRead, Cursor, Write};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, trace};

/// Failures of the console itself (never one of the demonstrated faults)
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The input stream reached end of file
    #[error("input stream closed")]
    InputClosed,
}

/// Console over any buffered reader and writer
pub struct Console<R, W> {
    input: R,
    output: W,
    retry_prompt: String,
    styled: bool,
}

/// Console over an in-memory script, recording its output
pub type ScriptedConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console {
            input,
            output,
            retry_prompt: RETRY_PROMPT.to_string(),
            styled: false,
        }
    }

    /// Create a console using the prompts and styling from `settings`
    pub fn with_settings(input: R, output: W, settings: &Settings) -> Self {
        Console {
            input,
            output,
            retry_prompt: settings.retry_prompt.clone(),
            styled: settings.styled,
        }
    }

    /// Print without newline, flushing so prompts appear before the read blocks
    pub fn print(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    pub fn println(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print a two-line title banner: a blank line, the title, and a rule
    pub fn banner(&mut self, title: &str) -> Result<(), ConsoleError> {
        let title = self.paint(format!("Handling {}", title), DEFAULT_THEME.banner);
        writeln!(self.output)?;
        writeln!(self.output, "{}", title)?;
        writeln!(self.output, "==============================")?;
        Ok(())
    }

    /// Print a menu or heading line
    pub fn heading(&mut self, text: &str) -> Result<(), ConsoleError> {
        let text = self.paint(text, DEFAULT_THEME.menu);
        self.println(&text)
    }

    /// Print the message of a scenario that completed without a fault
    pub fn success(&mut self, text: &str) -> Result<(), ConsoleError> {
        let text = self.paint(text, DEFAULT_THEME.success);
        self.println(&text)
    }

    /// Print a fault report line
    pub fn report(&mut self, text: &str) -> Result<(), ConsoleError> {
        let text = self.paint(text, DEFAULT_THEME.fault);
        self.println(&text)
    }

    /// Read one raw line, without its line terminator
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD, so a malformed
    /// line reaches the caller as text instead of ending the session.
    pub fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut buf = Vec::new();
        let n = self.input.read_until(b'\n', &mut buf)?;
        if n == 0 {
            debug!("console input reached end of file");
            return Err(ConsoleError::InputClosed);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        // Content is not logged: this also reads passwords
        trace!(len = buf.len(), "read console line");
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Print `prompt` and read one raw line
    pub fn prompt_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        let prompt = self.paint(prompt, DEFAULT_THEME.prompt);
        self.print(&prompt)?;
        self.read_line()
    }

    /// Prompt until a line parses as an integer
    ///
    /// Each failed parse prints the retry line and reissues `prompt`. There is no
    /// retry limit; only a closed input stream ends the loop early.
    pub fn prompt_number<T>(&mut self, prompt: &str) -> Result<T, ConsoleError>
    where
        T: FromStr,
        T::Err: Display,
    {
        loop {
            let line = self.prompt_line(prompt)?;
            match line.trim().parse::<T>() {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(input = %line, error = %e, "rejected non-integer input");
                    let retry = self.paint(self.retry_prompt.clone(), DEFAULT_THEME.fault);
                    self.println(&retry)?;
                }
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn paint(&self, text: impl Into<String>, color: Color) -> String {
        let text = text.into();
        if self.styled {
            text.with(color).to_string()
        } else {
            text
        }
    }
}

impl ScriptedConsole {
    /// Create a console that reads `script` and records its output
    pub fn scripted(script: &str) -> Self {
        Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    /// Everything written so far, as text
    pub fn transcript(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}
