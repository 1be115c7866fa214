//! Activity records — the rows of the RACI matrix.
//!
//! A record is created once by the store and never edited; the only other
//! mutation is permanent deletion.

use std::{fmt, str::FromStr};

use serde::Serialize;
use strum::EnumCount as _;

use crate::{
  Result, ValidationError,
  role::{Assignments, ResponsibilityCode, Role},
};

// ─── Identity ────────────────────────────────────────────────────────────────

/// Store-assigned row identifier. Always non-negative.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
#[serde(transparent)]
pub struct ActivityId(i64);

impl ActivityId {
  pub fn new(raw: i64) -> Result<Self, ValidationError> {
    if raw < 0 {
      return Err(ValidationError::InvalidId(raw.to_string()));
    }
    Ok(Self(raw))
  }

  pub fn get(self) -> i64 { self.0 }
}

impl FromStr for ActivityId {
  type Err = ValidationError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let trimmed = s.trim();
    let raw: i64 = trimmed
      .parse()
      .map_err(|_| ValidationError::InvalidId(trimmed.to_owned()))?;
    Self::new(raw)
  }
}

impl fmt::Display for ActivityId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.0, f)
  }
}

// ─── Persisted record ────────────────────────────────────────────────────────

/// A persisted activity or decision with one code per role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityRecord {
  pub id:          ActivityId,
  pub title:       String,
  pub assignments: Assignments,
}

/// Serialise records as a pretty JSON array, ids ascending as given.
pub fn records_to_json(records: &[ActivityRecord]) -> Result<String> {
  Ok(serde_json::to_string_pretty(records)?)
}

// ─── Input ───────────────────────────────────────────────────────────────────

/// Unvalidated input as collected by a form or command line: a title and
/// loosely-typed `(role id, code)` pairs.
#[derive(Debug, Clone, Default)]
pub struct ActivityDraft {
  pub title:       String,
  pub assignments: Vec<(String, String)>,
}

impl ActivityDraft {
  pub fn new(title: impl Into<String>) -> Self {
    Self { title: title.into(), assignments: Vec::new() }
  }

  /// Add a `(role id, code)` pair. Nothing is checked until
  /// [`ActivityDraft::validate`].
  pub fn assign(mut self, role: impl Into<String>, code: impl Into<String>) -> Self {
    self.assignments.push((role.into(), code.into()));
    self
  }

  /// Normalise into a [`NewActivity`].
  ///
  /// Roles that are not mentioned default to `Empty`. Unknown role ids,
  /// duplicated roles, and codes that cannot be normalised are rejected.
  pub fn validate(self) -> Result<NewActivity, ValidationError> {
    let mut assignments = Assignments::new();
    let mut seen = [false; Role::COUNT];

    for (raw_role, raw_code) in &self.assignments {
      let role = Role::parse(raw_role)?;
      if std::mem::replace(&mut seen[role.index()], true) {
        return Err(ValidationError::DuplicateRole(role.label()));
      }
      assignments.set(role, ResponsibilityCode::parse(raw_code)?);
    }

    NewActivity::new(self.title, assignments)
  }
}

/// Validated input for the store's create operation. The title is trimmed
/// and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivity {
  title:       String,
  assignments: Assignments,
}

impl NewActivity {
  pub fn new(
    title: impl AsRef<str>,
    assignments: Assignments,
  ) -> Result<Self, ValidationError> {
    let title = title.as_ref().trim();
    if title.is_empty() {
      return Err(ValidationError::BlankTitle);
    }
    Ok(Self { title: title.to_owned(), assignments })
  }

  pub fn title(&self) -> &str { &self.title }

  pub fn assignments(&self) -> &Assignments { &self.assignments }

  /// Attach the store-assigned id.
  pub fn into_record(self, id: ActivityId) -> ActivityRecord {
    ActivityRecord { id, title: self.title, assignments: self.assignments }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn draft_normalises_codes_and_defaults_missing_roles() {
    let new = ActivityDraft::new("  Approve annual budget ")
      .assign("CEO", "A")
      .assign("AreaPresident", "c")
      .assign("BoardAdvisor", "I")
      .assign("ExecutiveManager", "r")
      .validate()
      .unwrap();

    assert_eq!(new.title(), "Approve annual budget");
    assert_eq!(new.assignments().codes(), [
      ResponsibilityCode::Accountable,
      ResponsibilityCode::Consulted,
      ResponsibilityCode::Empty,
      ResponsibilityCode::Informed,
      ResponsibilityCode::Responsible,
    ]);
  }

  #[test]
  fn blank_title_is_rejected() {
    for title in ["", "   ", "\t\n"] {
      let err = ActivityDraft::new(title).validate().unwrap_err();
      assert_eq!(err, ValidationError::BlankTitle);
    }
  }

  #[test]
  fn unknown_role_is_rejected() {
    let err = ActivityDraft::new("Hire").assign("Intern", "R").validate().unwrap_err();
    assert_eq!(err, ValidationError::UnknownRole("Intern".into()));
  }

  #[test]
  fn duplicate_role_is_rejected() {
    let err = ActivityDraft::new("Hire")
      .assign("ceo", "R")
      .assign("CEO", "A")
      .validate()
      .unwrap_err();
    assert_eq!(err, ValidationError::DuplicateRole("CEO"));
  }

  #[test]
  fn invalid_code_is_rejected() {
    let err = ActivityDraft::new("Hire").assign("CEO", "Z").validate().unwrap_err();
    assert_eq!(err, ValidationError::InvalidCode("Z".into()));
  }

  #[test]
  fn activity_id_rejects_negatives_and_garbage() {
    assert_eq!("7".parse::<ActivityId>().unwrap().get(), 7);
    assert!("-1".parse::<ActivityId>().is_err());
    assert!("seven".parse::<ActivityId>().is_err());
    assert!(ActivityId::new(-3).is_err());
  }

  #[test]
  fn records_serialise_with_letters() {
    let record = NewActivity::new(
      "Sign contract",
      Assignments::new().with(Role::Ceo, ResponsibilityCode::Accountable),
    )
    .unwrap()
    .into_record(ActivityId::new(3).unwrap());

    let json: serde_json::Value =
      serde_json::from_str(&records_to_json(&[record]).unwrap()).unwrap();
    assert_eq!(json[0]["id"], 3);
    assert_eq!(json[0]["title"], "Sign contract");
    assert_eq!(json[0]["assignments"]["CEO"], "A");
  }
}
