//! Sleep scenario (menu item 10)
//!
//! A negative duration is rejected before sleeping. Rust threads cannot be
//! interrupted from outside, so a sleep that starts always runs to completion.

use super::{Scenario, ScenarioError};
use crate::console::Console;
use crate::fault::{CatchScope, Fault, FaultKind};
use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Sleep for a user-supplied number of milliseconds
pub struct Sleep;

impl Scenario for Sleep {
    const TITLE: FaultKind = FaultKind::InvalidArgument;
    const SCOPE: CatchScope = CatchScope::new(&[FaultKind::InvalidArgument]);

    fn trigger<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<String, ScenarioError> {
        let millis: i64 = console.prompt_number("Enter sleep time in milliseconds: ")?;
        let duration = u64::try_from(millis)
            .map(Duration::from_millis)
            .map_err(|_| Fault::NegativeTimeout { millis })?;

        debug!(millis, "sleeping");
        thread::sleep(duration);
        Ok(format!("Slept for {} ms.", millis))
    }
}
