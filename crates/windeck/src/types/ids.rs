/*! Branded ID types for type-safe window references. */

use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use ts_rs::TS;

/// Window identifier, e.g. `"terminal"`.
///
/// Assigned once when the desktop is built and never reused for another window.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
  TS,
  Display,
  From,
  Into,
)]
#[ts(export)]
pub struct WindowId(pub String);

impl WindowId {
  /// Create a window identifier.
  pub fn new(id: impl Into<String>) -> Self {
    Self(id.into())
  }

  /// The identifier as a string slice.
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for WindowId {
  fn from(id: &str) -> Self {
    Self(id.to_owned())
  }
}

impl AsRef<str> for WindowId {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

// Lets registry maps be queried with `&str`. Hash/Eq/Ord agree with `String`.
impl Borrow<str> for WindowId {
  fn borrow(&self) -> &str {
    &self.0
  }
}

impl PartialEq<str> for WindowId {
  fn eq(&self, other: &str) -> bool {
    self.0 == other
  }
}

impl PartialEq<&str> for WindowId {
  fn eq(&self, other: &&str) -> bool {
    self.0 == *other
  }
}
