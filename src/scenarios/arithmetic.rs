//! Integer division scenario (menu item 6)

use super::{Scenario, ScenarioError};
use crate::console::Console;
use crate::fault::{CatchScope, Fault, FaultKind};
use std::io::{BufRead, Write};

/// Divide two user-supplied integers
pub struct Divide;

impl Divide {
    /// Checked `i32` division
    ///
    /// Fails on a zero divisor and on `i32::MIN / -1`, whose quotient does not fit.
    pub fn quotient(dividend: i32, divisor: i32) -> Result<i32, Fault> {
        dividend.checked_div(divisor).ok_or(Fault::Division(if divisor == 0 {
            "attempt to divide by zero"
        } else {
            "attempt to divide with overflow"
        }))
    }
}

impl Scenario for Divide {
    const TITLE: FaultKind = FaultKind::DivisionError;
    const SCOPE: CatchScope = CatchScope::new(&[FaultKind::DivisionError]);

    fn trigger<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<String, ScenarioError> {
        let dividend: i32 = console.prompt_number("Enter dividend: ")?;
        let divisor: i32 = console.prompt_number("Enter divisor: ")?;

        let result = Self::quotient(dividend, divisor)?;
        Ok(format!("Result: {}", result))
    }
}
