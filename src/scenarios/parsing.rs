//! Number parsing scenario (menu item 11)

use super::{Scenario, ScenarioError};
use crate::console::Console;
use crate::fault::{CatchScope, Fault, FaultKind};
use std::io::{BufRead, Write};

/// Parse a raw line as an `i32`
pub struct ParseNumber;

impl ParseNumber {
    /// Parse `input` exactly as typed; surrounding whitespace is malformed
    pub fn parse(input: &str) -> Result<i32, Fault> {
        input.parse().map_err(|source| Fault::NumberFormat {
            input: input.to_string(),
            source,
        })
    }
}

impl Scenario for ParseNumber {
    const TITLE: FaultKind = FaultKind::NumberFormat;
    const SCOPE: CatchScope = CatchScope::new(&[FaultKind::NumberFormat]);

    fn trigger<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<String, ScenarioError> {
        let input = console.prompt_line("Enter a number: ")?;
        let number = Self::parse(&input)?;
        Ok(format!("Parsed number: {}", number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(ParseNumber::parse("42").unwrap(), 42);
        assert_eq!(ParseNumber::parse("-7").unwrap(), -7);
        assert_eq!(ParseNumber::parse("+7").unwrap(), 7);
    }

    #[test]
    fn test_malformed_inputs() {
        let err = ParseNumber::parse("abc").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid digit found in string for input \"abc\""
        );

        assert!(ParseNumber::parse(" 42").is_err());
        assert!(ParseNumber::parse("").is_err());
        assert!(ParseNumber::parse("2147483648").is_err());
    }
}
