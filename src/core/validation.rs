//! Field schemas for the two public forms.
//!
//! Each schema is a static table of fields, and each field carries an ordered
//! list of predicate/message pairs. Every field is checked, so a rejected
//! submission reports all of its problems at once.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::core::errors::FieldErrors;
use crate::core::models::{appointment::InsertAppointment, contact_message::InsertContactMessage};

pub const REQUIRED: &str = "Required";
pub const EXPECTED_STRING: &str = "Expected string";
pub const EXPECTED_OBJECT: &str = "Expected object";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$").expect("email pattern compiles")
});

/// Local part may not start with a dot and no two dots may be adjacent;
/// the pattern covers the rest.
pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

struct Rule {
    check: fn(&str) -> bool,
    message: &'static str,
}

struct FieldSpec {
    name: &'static str,
    required: bool,
    rules: &'static [Rule],
}

// Lengths are in UTF-16 code units, the unit the browser forms count in.
fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

fn at_least_2(s: &str) -> bool {
    utf16_len(s) >= 2
}

fn at_least_10(s: &str) -> bool {
    utf16_len(s) >= 10
}

fn non_empty(s: &str) -> bool {
    !s.is_empty()
}

const NAME_RULES: &[Rule] = &[Rule {
    check: at_least_2,
    message: "Name must be at least 2 characters",
}];

const EMAIL_RULES: &[Rule] = &[Rule {
    check: is_valid_email,
    message: "Please enter a valid email address",
}];

static CONTACT_MESSAGE_SCHEMA: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        required: true,
        rules: NAME_RULES,
    },
    FieldSpec {
        name: "email",
        required: true,
        rules: EMAIL_RULES,
    },
    FieldSpec {
        name: "message",
        required: true,
        rules: &[Rule {
            check: at_least_10,
            message: "Message must be at least 10 characters",
        }],
    },
];

static APPOINTMENT_SCHEMA: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        required: true,
        rules: NAME_RULES,
    },
    FieldSpec {
        name: "email",
        required: true,
        rules: EMAIL_RULES,
    },
    FieldSpec {
        name: "service",
        required: true,
        rules: &[Rule {
            check: non_empty,
            message: "Please specify the service you're interested in",
        }],
    },
    // Accepted in whatever format the form sends; never parsed as a calendar date.
    FieldSpec {
        name: "date",
        required: true,
        rules: &[Rule {
            check: non_empty,
            message: "Please select a preferred date",
        }],
    },
    FieldSpec {
        name: "message",
        required: false,
        rules: &[],
    },
];

/// String values that passed their field rules, keyed by field name.
/// Absent optional fields have no entry.
struct CheckedFields(HashMap<&'static str, String>);

impl CheckedFields {
    fn take(&mut self, name: &str) -> String {
        self.0.remove(name).unwrap_or_default()
    }

    fn take_optional(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }
}

fn check_schema(schema: &'static [FieldSpec], raw: &Value) -> Result<CheckedFields, FieldErrors> {
    let mut errors = FieldErrors::default();
    let Some(object) = raw.as_object() else {
        errors.push("body", EXPECTED_OBJECT);
        return Err(errors);
    };

    let mut values = HashMap::new();
    for field in schema {
        match object.get(field.name) {
            None | Some(Value::Null) => {
                if field.required {
                    errors.push(field.name, REQUIRED);
                }
            }
            Some(Value::String(s)) => {
                let mut passed = true;
                for rule in field.rules {
                    if !(rule.check)(s) {
                        errors.push(field.name, rule.message);
                        passed = false;
                    }
                }
                if passed {
                    values.insert(field.name, s.clone());
                }
            }
            Some(_) => errors.push(field.name, EXPECTED_STRING),
        }
    }

    if errors.is_empty() {
        Ok(CheckedFields(values))
    } else {
        Err(errors)
    }
}

pub fn validate_contact_message(raw: &Value) -> Result<InsertContactMessage, FieldErrors> {
    let mut fields = check_schema(CONTACT_MESSAGE_SCHEMA, raw)?;
    Ok(InsertContactMessage {
        name: fields.take("name"),
        email: fields.take("email"),
        message: fields.take("message"),
    })
}

pub fn validate_appointment(raw: &Value) -> Result<InsertAppointment, FieldErrors> {
    let mut fields = check_schema(APPOINTMENT_SCHEMA, raw)?;
    Ok(InsertAppointment {
        name: fields.take("name"),
        email: fields.take("email"),
        service: fields.take("service"),
        date: fields.take("date"),
        message: fields.take_optional("message"),
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionKind {
    ContactMessage,
    Appointment,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    ContactMessage(InsertContactMessage),
    Appointment(InsertAppointment),
}

pub fn validate(kind: SubmissionKind, raw: &Value) -> Result<Submission, FieldErrors> {
    match kind {
        SubmissionKind::ContactMessage => validate_contact_message(raw).map(Submission::ContactMessage),
        SubmissionKind::Appointment => validate_appointment(raw).map(Submission::Appointment),
    }
}
