//! Invalid cast scenario (menu item 9)

use super::{Scenario, ScenarioError};
use crate::console::Console;
use crate::fault::{CatchScope, FaultKind};
use crate::value::Value;
use std::any::type_name;
use std::io::{BufRead, Write};

/// Cast an instance of this scenario to text
pub struct CastInstance;

impl Scenario for CastInstance {
    const TITLE: FaultKind = FaultKind::InvalidCast;
    const SCOPE: CatchScope = CatchScope::new(&[FaultKind::InvalidCast]);

    fn trigger<R: BufRead, W: Write>(
        &self,
        _console: &mut Console<R, W>,
    ) -> Result<String, ScenarioError> {
        let instance = Value::Object {
            class: type_name::<CastInstance>().to_string(),
        };
        let text = instance.cast_text()?;
        Ok(format!("Cast succeeded: {}", text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;

    #[test]
    fn test_instance_is_not_text() {
        let mut console = ScriptedConsole::scripted("");
        let err = CastInstance.trigger(&mut console).unwrap_err();
        assert_eq!(
            err.to_string(),
            "`faultlab::scenarios::casts::CastInstance` cannot be cast to `text`"
        );
    }
}
