//! Expression function registry
//!
//! Mirror of the host's registration surface: every custom function
//! carries the metadata the host shows in its expression builder (name,
//! group, help) plus what it enforces before dispatch (arity, NULL
//! handling).

use std::collections::HashMap;

use crate::{ExprError, Value};

/// Signature shared by all expression functions
pub type Handler = fn(&[Value]) -> Result<Value, ExprError>;

/// Registration metadata for one expression function
#[derive(Debug, Clone)]
pub struct FunctionSpec {
    /// Name the function is bound under in expressions
    pub name: &'static str,
    /// Group the host files the function under in its builder UI
    pub group: &'static str,
    /// Exact number of arguments
    pub arity: usize,
    /// Function sees NULL arguments instead of the registry
    /// short-circuiting the call
    pub handles_null: bool,
    /// One-line usage summary shown next to the function
    pub help: &'static str,
}

/// Registry of callable expression functions
pub struct Registry {
    functions: HashMap<&'static str, (FunctionSpec, Handler)>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Registry preloaded with the built-in label functions
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::label::register(&mut registry);
        registry
    }

    /// Register a function under the name in its spec.
    ///
    /// Re-registering a name replaces the previous binding.
    pub fn register(&mut self, spec: FunctionSpec, handler: Handler) {
        tracing::debug!("registering expression function {}", spec.name);
        self.functions.insert(spec.name, (spec, handler));
    }

    /// Metadata for a registered function
    pub fn spec(&self, name: &str) -> Option<&FunctionSpec> {
        self.functions.get(name).map(|(spec, _)| spec)
    }

    /// Names of all registered functions
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.functions.keys().copied()
    }

    /// Call a registered function with host argument values.
    ///
    /// Unknown names and argument-count mismatches are errors. A NULL
    /// argument short-circuits the call to a NULL result unless the
    /// function opted into handling NULL itself.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, ExprError> {
        let (spec, handler) = self
            .functions
            .get(name)
            .ok_or_else(|| ExprError::UnknownFunction(name.to_string()))?;

        if args.len() != spec.arity {
            return Err(ExprError::ArityMismatch {
                function: spec.name.to_string(),
                expected: spec.arity,
                got: args.len(),
            });
        }

        if !spec.handles_null && args.iter().any(Value::is_null) {
            return Ok(Value::Null);
        }

        handler(args)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
