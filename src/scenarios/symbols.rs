//! Type resolution scenario (menu item 5)

use super::{Scenario, ScenarioError};
use crate::console::Console;
use crate::fault::{CatchScope, FaultKind};
use crate::value::registry::TypeRegistry;
use std::io::{BufRead, Write};

/// Resolve a user-named type in a [`TypeRegistry`] and construct it
pub struct ResolveType {
    registry: TypeRegistry,
}

impl ResolveType {
    pub fn new(registry: TypeRegistry) -> Self {
        ResolveType { registry }
    }
}

impl Default for ResolveType {
    fn default() -> Self {
        Self::new(TypeRegistry::builtin())
    }
}

impl Scenario for ResolveType {
    const TITLE: FaultKind = FaultKind::SymbolNotFound;
    const SCOPE: CatchScope = CatchScope::new(&[FaultKind::SymbolNotFound]);

    fn trigger<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<String, ScenarioError> {
        let name = console.prompt_line("Enter the type name to load: ")?;
        let instance = self.registry.resolve(&name)?;
        Ok(format!("Type loaded successfully: {} -> {}", name, instance))
    }
}
