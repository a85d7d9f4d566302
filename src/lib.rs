//! # Introduction
//!
//! faultlab is a menu-driven teaching tool for error handling. Each menu entry
//! runs a scenario that deliberately provokes one kind of fault (a missing file,
//! a read past the end of a stream, a division by zero, an out-of-bounds index,
//! ...), handles it where it was raised, and reports it on the console.
//!
//! ## Session flow
//!
//! ```text
//! Menu → Integer prompt → Scenario → Fault → Catch scope → Report → Menu
//! ```
//!
//! 1. [`menu`]: prints the menu, reads a selection, and dispatches it.
//! 2. [`console`]: line input, the retry-until-valid integer prompt, and styled
//!    output; [`console::ScriptedConsole`] drives sessions from tests.
//! 3. [`scenarios`]: the eleven fault scenarios behind the
//!    [`scenarios::Scenario`] trait.
//! 4. [`fault`]: the [`fault::Fault`] taxonomy and the [`fault::CatchScope`]
//!    that picks the label a fault is reported under.
//! 5. [`value`]: tagged runtime values and the type registry used by the
//!    reference, array, cast, and type resolution scenarios.
//! 6. [`config`]: compile-time session settings.
//!
//! ## Guarantees
//!
//! Faults never leave the scenario that raised them. The only error that reaches
//! the menu loop is a [`console::ConsoleError`]; a closed input stream ends the
//! session cleanly.

pub mod config;
pub mod console;
pub mod fault;
pub mod menu;
pub mod scenarios;
pub mod value;
