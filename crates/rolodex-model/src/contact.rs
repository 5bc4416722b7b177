// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A persisted contact. `id` is assigned by the store at creation and is
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Contact {
    /// Assemble the full record from an id and the draft that produced it.
    #[must_use]
    pub fn from_draft(id: i64, draft: &ContactDraft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            phone: draft.phone.clone(),
            email: draft.email.clone(),
            kind: draft.kind.clone(),
        }
    }

    /// The mutable field set of this record, for pre-filling the edit form.
    #[must_use]
    pub fn draft(&self) -> ContactDraft {
        ContactDraft {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            kind: self.kind.clone(),
        }
    }
}

/// The mutable field set accepted from either surface, form-encoded or JSON.
///
/// Every field defaults to empty so a body may omit anything except `name`
/// (only `name` is checked by [`validate`]). Unknown keys — the HTML form's
/// submit button value, for one — are ignored rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// A single rejected field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: &'static str,
}

/// The set of field errors produced by one [`validate`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    #[must_use]
    pub fn field_errors(&self) -> &[FieldError] {
        &self.0
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for err in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{} {}", err.field, err.reason)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Shared validation rule set. Both controllers call this and only this, so
/// what one surface accepts the other must accept too.
///
/// Rule: `name` must be non-empty after trimming. `phone`, `email`, and
/// `type` are free text with no format constraint.
pub fn validate(draft: &ContactDraft) -> Result<(), ValidationErrors> {
    let mut errors = Vec::new();
    if draft.name.trim().is_empty() {
        errors.push(FieldError {
            field: "name",
            reason: "must not be empty",
        });
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}
