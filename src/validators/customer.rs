use std::fmt;
use validator::validate_email;

use crate::models::{CustomerFields, CustomerPayload};

/// A single rule attached to one field of the request body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    NotBlank,
    NotEmpty,
    Size { min: usize, max: usize },
    Email,
}

impl Constraint {
    /// Absent values only fail the presence constraints
    fn check(&self, value: Option<&str>) -> Result<(), String> {
        let ok = match (self, value) {
            (Self::NotBlank, value) => value.map_or(false, |v| !v.trim().is_empty()),
            (Self::NotEmpty, value) => value.map_or(false, |v| !v.is_empty()),
            (_, None) => true,
            (Self::Size { min, max }, Some(v)) => (*min..=*max).contains(&v.encode_utf16().count()),
            (Self::Email, Some(v)) => validate_email(v),
        };
        if ok {
            Ok(())
        } else {
            Err(self.message())
        }
    }

    fn message(&self) -> String {
        match self {
            Self::NotBlank => "must not be blank".to_string(),
            Self::NotEmpty => "must not be empty".to_string(),
            Self::Size { min, max } => format!("size must be between {} and {}", min, max),
            Self::Email => "must be a well-formed email address".to_string(),
        }
    }
}

/// One violated constraint, reported against the field's wire name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "El campo '{}':{}", self.field, self.message)
    }
}

struct FieldRules {
    field: &'static str,
    value: fn(&CustomerPayload) -> Option<&str>,
    constraints: &'static [Constraint],
}

const NAME_SIZE: Constraint = Constraint::Size { min: 4, max: 12 };

fn first_name(payload: &CustomerPayload) -> Option<&str> {
    payload.first_name.as_deref()
}

fn last_name(payload: &CustomerPayload) -> Option<&str> {
    payload.last_name.as_deref()
}

fn email(payload: &CustomerPayload) -> Option<&str> {
    payload.email.as_deref()
}

static CUSTOMER_RULES: [FieldRules; 3] = [
    FieldRules {
        field: "nombre",
        value: first_name,
        constraints: &[Constraint::NotBlank, NAME_SIZE],
    },
    FieldRules {
        field: "apellido",
        value: last_name,
        constraints: &[Constraint::NotEmpty, NAME_SIZE],
    },
    FieldRules {
        field: "email",
        value: email,
        constraints: &[Constraint::NotBlank, Constraint::Email],
    },
];

/// Checks every field of the payload, reporting at most one violation per
/// field: the first of its constraints that fails
fn violations(payload: &CustomerPayload) -> Vec<FieldViolation> {
    CUSTOMER_RULES
        .iter()
        .filter_map(|rules| {
            let value = (rules.value)(payload);
            rules
                .constraints
                .iter()
                .find_map(|constraint| constraint.check(value).err())
                .map(|message| FieldViolation {
                    field: rules.field,
                    message,
                })
        })
        .collect()
}

/// Turns a request body into the editable customer fields, or every field
/// violation found in it
pub fn validate_customer(
    payload: CustomerPayload,
) -> Result<CustomerFields, Vec<FieldViolation>> {
    let violations = violations(&payload);
    match (payload.first_name, payload.last_name, payload.email) {
        (Some(first_name), Some(last_name), Some(email)) if violations.is_empty() => {
            Ok(CustomerFields {
                first_name,
                last_name,
                email,
            })
        }
        _ => Err(violations),
    }
}
