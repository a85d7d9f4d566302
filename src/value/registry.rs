//! Type registry for resolving types by name
//!
//! Rust has no by-name type loading, so resolution is simulated with an explicit
//! table from type names to constructors. Names not in the table fail with
//! [`Fault::SymbolNotFound`].

use super::Value;
use crate::fault::Fault;
use rustc_hash::FxHashMap;

/// Builds a fresh instance of a registered type
pub type Constructor = fn() -> Value;

/// Name -> constructor table
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    constructors: FxHashMap<String, Constructor>,
}

impl TypeRegistry {
    /// An empty registry
    pub fn new() -> Self {
        TypeRegistry {
            constructors: FxHashMap::default(),
        }
    }

    /// The registry of the built-in value types
    ///
    /// Each type is reachable by its short name (`int`) and its qualified path
    /// (`faultlab::value::Int`).
    pub fn builtin() -> Self {
        let mut registry = TypeRegistry::new();
        let builtins: [(&str, &str, Constructor); 5] = [
            ("int", "Int", || Value::Int(0)),
            ("text", "Text", || Value::Text(String::new())),
            ("array", "Array", || Value::Array(Vec::new())),
            ("object", "Object", || Value::Object {
                class: "object".to_string(),
            }),
            ("null", "Null", || Value::Null),
        ];
        for (short, variant, ctor) in builtins {
            registry.register(short, ctor);
            registry.register(&format!("faultlab::value::{}", variant), ctor);
        }
        registry
    }

    /// Register `name`, replacing any previous constructor
    pub fn register(&mut self, name: &str, ctor: Constructor) {
        self.constructors.insert(name.to_string(), ctor);
    }

    /// Look up `name` and construct an instance
    ///
    /// Names are matched exactly; surrounding whitespace is part of the name.
    pub fn resolve(&self, name: &str) -> Result<Value, Fault> {
        self.constructors
            .get(name)
            .map(|ctor| ctor())
            .ok_or_else(|| Fault::SymbolNotFound {
                name: name.to_string(),
            })
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
