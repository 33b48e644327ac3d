/*! Snapshot and event types for observing window state. */

use super::{WindowId, WindowState};
use serde::Serialize;
use std::collections::BTreeMap;
use ts_rs::TS;

/// Immutable copy of the whole registry, taken under a single read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Snapshot {
  pub windows: BTreeMap<WindowId, WindowState>,
  /// Visible window IDs in z-order (front to back)
  pub z_order: Vec<WindowId>,
  /// Topmost visible window
  pub focused_window: Option<WindowId>,
}

impl Snapshot {
  /// State of one window in this snapshot.
  pub fn get(&self, id: &WindowId) -> Option<&WindowState> {
    self.windows.get(id)
  }
}

/// Events emitted when window state changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "event", content = "data")]
#[ts(export)]
pub enum Event {
  // Initial sync (on subscription)
  #[serde(rename = "sync:init")]
  SyncInit(Snapshot),

  // Any flag or z-index change of one window
  #[serde(rename = "window:changed")]
  WindowChanged {
    #[serde(rename = "windowId")]
    window_id: WindowId,
    state: WindowState,
  },

  // Topmost visible window changed
  #[serde(rename = "focus:window")]
  FocusWindow {
    #[serde(rename = "windowId")]
    window_id: Option<WindowId>,
  },
}
