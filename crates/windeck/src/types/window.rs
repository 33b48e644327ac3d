/*! Per-window state record and the display state derived from it. */

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// State of one registered window.
///
/// Field names serialize in camelCase to match the presentation layer's store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WindowState {
  /// Whether the window is part of the visible set.
  pub is_open: bool,
  /// Collapsed to the dock. Never true together with `is_maximized`.
  pub is_minimized: bool,
  /// Occupies the full viewport.
  pub is_maximized: bool,
  /// Stacking order: higher is in front. 0 = never stacked.
  pub z_index: u32,
}

impl WindowState {
  /// Initial state of every registered window.
  pub const CLOSED: Self = Self {
    is_open: false,
    is_minimized: false,
    is_maximized: false,
    z_index: 0,
  };

  /// Open and not minimized.
  pub const fn is_visible(&self) -> bool {
    self.is_open && !self.is_minimized
  }

  /// Collapse the three flags into the observable display state.
  pub const fn display(&self) -> DisplayState {
    if !self.is_open {
      DisplayState::Closed
    } else if self.is_minimized {
      DisplayState::Minimized
    } else if self.is_maximized {
      DisplayState::Maximized
    } else {
      DisplayState::Normal
    }
  }

  /// Whether the flag invariants hold for this record.
  pub(crate) const fn is_consistent(&self) -> bool {
    !(self.is_minimized && self.is_maximized)
      && (self.is_open || (!self.is_minimized && !self.is_maximized))
  }
}

/// The four observable states a window can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DisplayState {
  Closed,
  Normal,
  Minimized,
  Maximized,
}
