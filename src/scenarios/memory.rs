//! Reference and array scenarios (menu items 7 and 8)

use super::{Scenario, ScenarioError};
use crate::config::MAX_ARRAY_LEN;
use crate::console::Console;
use crate::fault::{CatchScope, Fault, FaultKind};
use crate::value::Value;
use std::io::{BufRead, Write};
use tracing::debug;

/// Call a method through a reference that was never set
pub struct NullDereference;

/// The reference the scenario dereferences
fn unset_reference() -> Value {
    Value::Null
}

impl Scenario for NullDereference {
    const TITLE: FaultKind = FaultKind::NullReference;
    const SCOPE: CatchScope = CatchScope::new(&[FaultKind::NullReference]);

    fn trigger<R: BufRead, W: Write>(
        &self,
        _console: &mut Console<R, W>,
    ) -> Result<String, ScenarioError> {
        let text = unset_reference();
        let len = text.len("text")?;
        Ok(format!("Length: {}", len))
    }
}

/// Allocate a zeroed array of user size and read a user index
pub struct IndexArray {
    max_len: usize,
}

impl IndexArray {
    /// Refuse allocations larger than `max_len` elements
    pub fn new(max_len: usize) -> Self {
        IndexArray { max_len }
    }

    fn allocate(&self, size: i32) -> Result<Value, Fault> {
        let len = usize::try_from(size)
            .ok()
            .filter(|len| *len <= self.max_len)
            .ok_or(Fault::InvalidArraySize {
                size,
                limit: self.max_len,
            })?;
        debug!(len, "allocated array");
        Ok(Value::zeroed_array(len))
    }
}

impl Default for IndexArray {
    fn default() -> Self {
        Self::new(MAX_ARRAY_LEN)
    }
}

impl Scenario for IndexArray {
    const TITLE: FaultKind = FaultKind::IndexOutOfBounds;
    const SCOPE: CatchScope =
        CatchScope::new(&[FaultKind::IndexOutOfBounds, FaultKind::InvalidArgument]);

    fn trigger<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<String, ScenarioError> {
        let size: i32 = console.prompt_number("Enter array size: ")?;
        let array = self.allocate(size)?;

        let index: i32 = console.prompt_number("Enter index to access: ")?;
        let value = array.index(index)?;
        Ok(format!("Value: {}", value))
    }
}
