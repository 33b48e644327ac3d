/*!
Read-only queries for Desktop.

Every query copies out of the registry under a shared lock; nothing returned
here can observe a later change.
*/

use super::Desktop;
use crate::types::{DisplayState, Event, Snapshot, WindeckResult, WindowId, WindowState};
use std::collections::BTreeMap;

impl Desktop {
  /// Current state of one window.
  pub fn state(&self, id: impl AsRef<str>) -> WindeckResult<WindowState> {
    self.read(|r| r.get(id.as_ref()))
  }

  /// Current state of every window, for dock/taskbar summaries.
  pub fn all_states(&self) -> BTreeMap<WindowId, WindowState> {
    self.read(super::Registry::all_states)
  }

  /// Consistent copy of the whole registry.
  pub fn snapshot(&self) -> Snapshot {
    self.read(super::Registry::snapshot)
  }

  /// Snapshot wrapped as the event a new subscriber starts from.
  pub fn sync_init(&self) -> Event {
    Event::SyncInit(self.snapshot())
  }

  /// Observable display state of one window.
  pub fn display_state(&self, id: impl AsRef<str>) -> WindeckResult<DisplayState> {
    self.state(id).map(|s| s.display())
  }

  /// Topmost visible window, if any.
  pub fn focused_window(&self) -> Option<WindowId> {
    self.read(|r| r.focused_window().cloned())
  }

  /// Visible windows, front to back.
  pub fn z_order(&self) -> Vec<WindowId> {
    self.read(super::Registry::z_order)
  }

  /// Registered window ids in registration order.
  pub fn window_ids(&self) -> Vec<WindowId> {
    self.read(|r| r.ids().to_vec())
  }

  /// Events lost because a subscriber fell behind the channel capacity.
  pub fn dropped_events(&self) -> u64 {
    self.read(super::Registry::dropped_events)
  }

  /// Whether `id` was registered.
  pub fn is_registered(&self, id: impl AsRef<str>) -> bool {
    self.read(|r| r.contains(id.as_ref()))
  }
}
