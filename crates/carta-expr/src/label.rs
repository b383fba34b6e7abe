//! Label normalization function
//!
//! `normalize_label(<string>)` rewrites a mixed-direction label into the
//! rendering-ready form the renderer expects: Arabic presentation forms
//! substituted, RTL segments reversed and reordered, brackets mirrored.

use crate::function::{FunctionSpec, Registry};
use crate::{ExprError, Value};

/// Register `normalize_label` with a registry
pub fn register(registry: &mut Registry) {
    registry.register(
        FunctionSpec {
            name: "normalize_label",
            group: "Custom",
            arity: 1,
            handles_null: true,
            help: "normalize_label( <string> ) -> string: reshape and reorder \
                   right-to-left label text for the renderer; NULL passes through",
        },
        handler,
    );
}

fn handler(args: &[Value]) -> Result<Value, ExprError> {
    match args {
        [value] => normalize_label(value),
        _ => Err(ExprError::ArityMismatch {
            function: "normalize_label".to_string(),
            expected: 1,
            got: args.len(),
        }),
    }
}

/// Normalize one label value.
///
/// NULL propagates unchanged. Text is rewritten through the carta-text
/// pipeline. Every other value type is an invalid-argument error; nothing
/// is coerced to text.
pub fn normalize_label(value: &Value) -> Result<Value, ExprError> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::Text(text) => Ok(Value::Text(carta_text::normalize(text))),
        other => Err(ExprError::InvalidArgumentType {
            function: "normalize_label".to_string(),
            expected: "text",
            got: other.type_name(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_passes_through() {
        assert_eq!(normalize_label(&Value::Null).unwrap(), Value::Null);
    }

    #[test]
    fn test_text_is_normalized() {
        let result = normalize_label(&Value::from("\u{05D0}\u{05D1}")).unwrap();
        assert_eq!(result, Value::from("\u{05D1}\u{05D0}"));
    }

    #[test]
    fn test_ltr_text_unchanged() {
        let result = normalize_label(&Value::from("Main Street")).unwrap();
        assert_eq!(result, Value::from("Main Street"));
    }

    #[test]
    fn test_non_text_is_rejected() {
        for value in [Value::Int(7), Value::Float(1.5), Value::Bool(true)] {
            let err = normalize_label(&value).unwrap_err();
            assert!(matches!(
                err,
                ExprError::InvalidArgumentType { expected: "text", .. }
            ));
        }
    }

    #[test]
    fn test_error_names_function_and_type() {
        let err = normalize_label(&Value::Int(7)).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("normalize_label"));
        assert!(message.contains("int"));
    }

    #[test]
    fn test_handler_rejects_wrong_arity() {
        let err = handler(&[]).unwrap_err();
        assert!(matches!(
            err,
            ExprError::ArityMismatch { expected: 1, got: 0, .. }
        ));
    }
}
