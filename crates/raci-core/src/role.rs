//! The five fixed roles and the responsibility codes assigned to them.
//!
//! Both sets are closed. Loosely-typed input (form fields, CLI flags) is
//! normalised into these enums at the store boundary and never trusted
//! downstream.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, EnumString, IntoEnumIterator as _};

use crate::ValidationError;

// ─── Role ────────────────────────────────────────────────────────────────────

/// An organisational position that receives one code per activity.
///
/// Declaration order is the canonical column order of the matrix.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
  EnumIter,
  EnumCount,
  EnumString,
  strum::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Role {
  #[serde(rename = "CEO")]
  #[strum(to_string = "CEO")]
  Ceo,
  #[strum(to_string = "AreaPresident", serialize = "area_president")]
  AreaPresident,
  #[strum(to_string = "ExecutiveDirector", serialize = "executive_director")]
  ExecutiveDirector,
  #[strum(to_string = "BoardAdvisor", serialize = "board_advisor")]
  BoardAdvisor,
  #[strum(to_string = "ExecutiveManager", serialize = "executive_manager")]
  ExecutiveManager,
}

impl Role {
  /// All roles in canonical column order.
  pub fn all() -> impl Iterator<Item = Role> { Role::iter() }

  /// Position of this role in [`Role::all`].
  pub fn index(self) -> usize { self as usize }

  /// The column label shown in the matrix header.
  pub fn label(self) -> &'static str {
    match self {
      Role::Ceo => "CEO",
      Role::AreaPresident => "AreaPresident",
      Role::ExecutiveDirector => "ExecutiveDirector",
      Role::BoardAdvisor => "BoardAdvisor",
      Role::ExecutiveManager => "ExecutiveManager",
    }
  }

  /// Parse a role identifier, ignoring surrounding whitespace and case.
  pub fn parse(input: &str) -> Result<Role, ValidationError> {
    let trimmed = input.trim();
    Role::from_str(trimmed)
      .map_err(|_| ValidationError::UnknownRole(trimmed.to_owned()))
  }
}

// ─── ResponsibilityCode ──────────────────────────────────────────────────────

/// A RACI code, or `Empty` when the role has no part in the activity.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
pub enum ResponsibilityCode {
  #[default]
  #[serde(rename = "")]
  Empty,
  #[serde(rename = "R")]
  Responsible,
  #[serde(rename = "A")]
  Accountable,
  #[serde(rename = "C")]
  Consulted,
  #[serde(rename = "I")]
  Informed,
}

impl ResponsibilityCode {
  /// Canonical single-letter form; `""` for [`ResponsibilityCode::Empty`].
  pub fn letter(self) -> &'static str {
    match self {
      Self::Empty => "",
      Self::Responsible => "R",
      Self::Accountable => "A",
      Self::Consulted => "C",
      Self::Informed => "I",
    }
  }

  /// Human-readable name, e.g. `"Accountable"`.
  pub fn label(self) -> &'static str {
    match self {
      Self::Empty => "",
      Self::Responsible => "Responsible",
      Self::Accountable => "Accountable",
      Self::Consulted => "Consulted",
      Self::Informed => "Informed",
    }
  }

  pub fn is_empty(self) -> bool { matches!(self, Self::Empty) }

  /// Normalise free-form input. Accepts the letters `R`, `A`, `C`, `I`, their
  /// full names, or blank, in any case and with surrounding whitespace.
  pub fn parse(input: &str) -> Result<Self, ValidationError> {
    let trimmed = input.trim();
    let code = match trimmed.to_ascii_uppercase().as_str() {
      "" => Self::Empty,
      "R" | "RESPONSIBLE" => Self::Responsible,
      "A" | "ACCOUNTABLE" => Self::Accountable,
      "C" | "CONSULTED" => Self::Consulted,
      "I" | "INFORMED" => Self::Informed,
      _ => return Err(ValidationError::InvalidCode(trimmed.to_owned())),
    };
    Ok(code)
  }
}

impl FromStr for ResponsibilityCode {
  type Err = ValidationError;

  fn from_str(s: &str) -> Result<Self, Self::Err> { Self::parse(s) }
}

impl fmt::Display for ResponsibilityCode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.letter())
  }
}

// ─── Assignments ─────────────────────────────────────────────────────────────

/// Exactly one code per role. The fixed-size array makes a missing or extra
/// role unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Assignments {
  codes: [ResponsibilityCode; Role::COUNT],
}

impl Assignments {
  /// All roles set to [`ResponsibilityCode::Empty`].
  pub fn new() -> Self { Self::default() }

  /// Build from codes listed in canonical role order.
  pub fn from_codes(codes: [ResponsibilityCode; Role::COUNT]) -> Self {
    Self { codes }
  }

  pub fn get(&self, role: Role) -> ResponsibilityCode { self.codes[role.index()] }

  pub fn set(&mut self, role: Role, code: ResponsibilityCode) {
    self.codes[role.index()] = code;
  }

  /// Builder-style [`Assignments::set`].
  pub fn with(mut self, role: Role, code: ResponsibilityCode) -> Self {
    self.set(role, code);
    self
  }

  /// `(role, code)` pairs in canonical role order.
  pub fn iter(&self) -> impl Iterator<Item = (Role, ResponsibilityCode)> + '_ {
    Role::all().map(|role| (role, self.get(role)))
  }

  pub fn codes(&self) -> [ResponsibilityCode; Role::COUNT] { self.codes }
}

impl Serialize for Assignments {
  fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeMap as _;
    let mut map = serializer.serialize_map(Some(Role::COUNT))?;
    for (role, code) in self.iter() {
      map.serialize_entry(role.label(), &code)?;
    }
    map.end()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn roles_are_in_canonical_order() {
    let labels: Vec<_> = Role::all().map(Role::label).collect();
    assert_eq!(labels, [
      "CEO",
      "AreaPresident",
      "ExecutiveDirector",
      "BoardAdvisor",
      "ExecutiveManager",
    ]);
    assert!(Role::all().enumerate().all(|(i, r)| r.index() == i));
  }

  #[test]
  fn role_parse_is_case_insensitive() {
    assert_eq!(Role::parse("ceo").unwrap(), Role::Ceo);
    assert_eq!(Role::parse(" areapresident ").unwrap(), Role::AreaPresident);
    assert_eq!(Role::parse("board_advisor").unwrap(), Role::BoardAdvisor);
    assert_eq!(Role::Ceo.to_string(), "CEO");
  }

  #[test]
  fn unknown_role_is_rejected() {
    assert_eq!(
      Role::parse("Janitor"),
      Err(ValidationError::UnknownRole("Janitor".into()))
    );
  }

  #[test]
  fn code_parse_normalises() {
    assert_eq!(ResponsibilityCode::parse("a").unwrap(), ResponsibilityCode::Accountable);
    assert_eq!(ResponsibilityCode::parse(" R ").unwrap(), ResponsibilityCode::Responsible);
    assert_eq!(ResponsibilityCode::parse("consulted").unwrap(), ResponsibilityCode::Consulted);
    assert_eq!(ResponsibilityCode::parse("I").unwrap(), ResponsibilityCode::Informed);
    assert_eq!(ResponsibilityCode::parse("  ").unwrap(), ResponsibilityCode::Empty);
  }

  #[test]
  fn unrecognised_code_is_rejected() {
    assert_eq!(
      ResponsibilityCode::parse("x"),
      Err(ValidationError::InvalidCode("x".into()))
    );
    assert!(ResponsibilityCode::parse("RA").is_err());
  }

  #[test]
  fn assignments_default_to_empty() {
    let a = Assignments::new().with(Role::BoardAdvisor, ResponsibilityCode::Informed);
    assert_eq!(a.get(Role::Ceo), ResponsibilityCode::Empty);
    assert_eq!(a.get(Role::BoardAdvisor), ResponsibilityCode::Informed);
    assert_eq!(a.iter().count(), 5);
  }

  #[test]
  fn assignments_serialize_as_role_map() {
    let a = Assignments::new().with(Role::Ceo, ResponsibilityCode::Accountable);
    let json = serde_json::to_value(a).unwrap();
    assert_eq!(json["CEO"], "A");
    assert_eq!(json["ExecutiveManager"], "");
    assert_eq!(json.as_object().unwrap().len(), 5);
  }
}
