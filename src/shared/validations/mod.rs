use validator::{ValidationErrors, ValidationErrorsKind};

use super::types::{FieldError, FieldErrors, PaginationParams, DEFAULT_LIMIT, DEFAULT_PAGE};

/// Builds pagination from raw query values.
///
/// Absent, non-numeric, zero and negative values fall back to the defaults.
pub fn validate_pagination(page: Option<&str>, limit: Option<&str>) -> PaginationParams {
    PaginationParams::new(
        parse_positive(page).unwrap_or(DEFAULT_PAGE),
        parse_positive(limit).unwrap_or(DEFAULT_LIMIT),
    )
}

fn parse_positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v >= 1)
}

/// Flattens nested `validator` errors into camelCase field paths, sorted by path.
pub fn collect_field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut out = Vec::new();
    collect_into("", errors, &mut out);
    out.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
    FieldErrors(out)
}

fn collect_into(prefix: &str, errors: &ValidationErrors, out: &mut Vec<FieldError>) {
    for (field, kind) in errors.errors() {
        let name = to_camel_case(&field.to_string());
        let path = if prefix.is_empty() {
            name
        } else {
            format!("{}.{}", prefix, name)
        };

        match kind {
            ValidationErrorsKind::Field(errs) => {
                for e in errs {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    out.push(FieldError::new(path.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_into(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_into(&format!("{}[{}]", path, index), inner, out);
                }
            }
        }
    }
}

pub fn to_camel_case(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper_next = false;
    for c in snake.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
