//! Field-level validation issue reporting.
//!
//! Request DTOs derive [`validator::Validate`]; this module flattens the
//! nested error tree produced by the derive into a flat list of
//! `{ field, message }` pairs so clients can render per-field feedback.

use serde::Serialize;
use validator::{ValidationErrors, ValidationErrorsKind};

/// A single structured validation failure: the dotted path of the offending
/// field plus a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

/// Flatten a [`ValidationErrors`] tree into a sorted list of issues.
///
/// Nested struct errors are joined with `.` (e.g. `position.w`); list
/// entries carry their index (e.g. `items[2].name`). Sorting keeps the
/// output stable regardless of hash-map iteration order.
pub fn flatten_issues(errors: &ValidationErrors) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    collect(errors, "", &mut issues);
    issues.sort_by(|a, b| a.field.cmp(&b.field));
    issues
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut Vec<ValidationIssue>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for err in field_errors {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("invalid value ({})", err.code));
                    out.push(ValidationIssue {
                        field: path.clone(),
                        message,
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, &path, out),
            ValidationErrorsKind::List(entries) => {
                for (index, nested) in entries {
                    collect(nested, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Debug, Validate)]
    struct Inner {
        #[validate(range(min = 1, message = "must be at least 1"))]
        w: i32,
    }

    #[derive(Debug, Validate)]
    struct Outer {
        #[validate(range(min = 0, message = "must be non-negative"))]
        x: i32,
        #[validate(nested)]
        inner: Inner,
    }

    #[test]
    fn valid_input_produces_no_issues() {
        let value = Outer {
            x: 0,
            inner: Inner { w: 1 },
        };
        assert!(value.validate().is_ok());
    }

    #[test]
    fn nested_field_paths_are_dotted() {
        let value = Outer {
            x: -1,
            inner: Inner { w: 0 },
        };
        let errors = value.validate().unwrap_err();
        let issues = flatten_issues(&errors);

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].field, "inner.w");
        assert_eq!(issues[0].message, "must be at least 1");
        assert_eq!(issues[1].field, "x");
        assert_eq!(issues[1].message, "must be non-negative");
    }
}
