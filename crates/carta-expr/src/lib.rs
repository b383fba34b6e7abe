//! Custom expression functions for Carta
//!
//! The host evaluates label expressions once per feature record; this
//! crate supplies the custom functions those expressions can call,
//! together with the value model and registry the host binds them
//! through.
//!
//! The one function with real work behind it is [`normalize_label`],
//! backed by the carta-text pipeline. Functions that talk to host
//! services (layer lookups, network fetches) live with the host itself.

mod function;
mod label;
mod value;

pub use function::{FunctionSpec, Handler, Registry};
pub use label::normalize_label;
pub use value::Value;

/// Expression evaluation error
#[derive(Debug, thiserror::Error)]
pub enum ExprError {
    #[error("{function}: argument must be {expected}, not {got}")]
    InvalidArgumentType {
        function: String,
        expected: &'static str,
        got: &'static str,
    },

    #[error("unknown function: {0}")]
    UnknownFunction(String),

    #[error("{function}: expected {expected} argument(s), got {got}")]
    ArityMismatch {
        function: String,
        expected: usize,
        got: usize,
    },
}
