//! Fault scenarios
//!
//! Each scenario prompts for its inputs, performs one operation that is known to
//! fail under some input, and reports the outcome. Scenarios are independent: none
//! calls another, and none keeps state between runs.
//!
//! # Reporting contract
//!
//! [`run_scenario`] prints the banner, calls [`Scenario::trigger`], and then
//! either prints the success message or resolves the [`Fault`] against the
//! scenario's [`CatchScope`] and prints `"<Kind> occurred: <message>"`. A fault
//! never escapes `run_scenario`; only a [`ConsoleError`] does, because a broken
//! console cannot be prompted again.
//!
//! | # | Scenario | Scope |
//! |---|----------|-------|
//! | 1 | [`ReadFirstLine`] | `IoError` |
//! | 2 | [`OpenFile`] | `FileNotFound`, `IoError` |
//! | 3 | [`ReadPastEnd`] | `UnexpectedEof`, `IoError` |
//! | 4 | [`ConnectDatabase`] | `DatabaseError` |
//! | 5 | [`ResolveType`] | `SymbolNotFound` |
//! | 6 | [`Divide`] | `DivisionError` |
//! | 7 | [`NullDereference`] | `NullReference` |
//! | 8 | [`IndexArray`] | `IndexOutOfBounds`, `InvalidArgument` |
//! | 9 | [`CastInstance`] | `InvalidCast` |
//! | 10 | [`Sleep`] | `InvalidArgument` |
//! | 11 | [`ParseNumber`] | `NumberFormat` |

mod arithmetic;
mod casts;
mod database;
mod files;
mod memory;
mod parsing;
mod symbols;
mod timing;

pub use arithmetic::Divide;
pub use casts::CastInstance;
pub use database::{ConnectDatabase, Credentials};
pub use files::{OpenFile, ReadFirstLine, ReadPastEnd};
pub use memory::{IndexArray, NullDereference};
pub use parsing::ParseNumber;
pub use symbols::ResolveType;
pub use timing::Sleep;

use crate::console::{Console, ConsoleError};
use crate::fault::{CatchScope, Fault, FaultKind};
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::{debug, info};

/// Why a scenario's trigger stopped early
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The provoked fault, reported by [`run_scenario`]
    #[error(transparent)]
    Fault(#[from] Fault),

    #[error(transparent)]
    Console(#[from] ConsoleError),
}

/// A routine that provokes and reports one fault kind
pub trait Scenario {
    /// Kind named in the banner
    const TITLE: FaultKind;

    /// Kinds reported under their own label
    const SCOPE: CatchScope;

    /// Prompt for inputs and perform the faulty operation
    ///
    /// Returns the success message when the operation does not fail.
    fn trigger<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<String, ScenarioError>;
}

/// Run `scenario` once, reporting any fault it raises
pub fn run_scenario<S, R, W>(scenario: &S, console: &mut Console<R, W>) -> Result<(), ConsoleError>
where
    S: Scenario,
    R: BufRead,
    W: Write,
{
    console.banner(S::TITLE.label())?;

    match scenario.trigger(console) {
        Ok(message) => {
            info!(scenario = %S::TITLE, "scenario completed without a fault");
            console.success(&message)
        }
        Err(ScenarioError::Fault(fault)) => {
            let reported = S::SCOPE.resolve(fault.kind());
            debug!(
                scenario = %S::TITLE,
                raised = %fault.kind(),
                reported = %reported,
                error = %fault,
                "fault raised"
            );
            console.report(&S::SCOPE.report(&fault))
        }
        Err(ScenarioError::Console(e)) => Err(e),
    }
}
