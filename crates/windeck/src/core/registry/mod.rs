/*!
Registry - the single source of truth for window state.

All fields are private. Mutations go through methods that maintain invariants
and emit events. This guarantees:
- Flag invariants are normalized on every write
- z-indices are handed out by the one counter
- Events are always emitted

## Module Structure

- `mod.rs` - Registry struct, construction, reads, event emission
- `windows.rs` - `WindowPatch`, `set`, `raise`
- `stacking.rs` - z-order counter and front-to-back queries
*/

mod stacking;
mod windows;

pub(crate) use windows::WindowPatch;

use async_broadcast::Sender;
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::types::{Event, Snapshot, WindeckError, WindeckResult, WindowId, WindowState};
use stacking::Stacking;

/// Internal state storage with automatic event emission.
pub(crate) struct Registry {
  // Event emission
  events_tx: Sender<Event>,

  // Fixed at construction. `order` keeps registration order for listings.
  windows: HashMap<WindowId, WindowState>,
  order: Vec<WindowId>,

  stacking: Stacking,

  // Cached topmost visible window, for `FocusWindow` change detection
  focused_window: Option<WindowId>,

  // Events lost to channel overflow, either mode
  dropped_events: u64,
}

impl Registry {
  /// Register a fixed set of windows, all starting closed.
  pub(crate) fn new(ids: Vec<WindowId>, events_tx: Sender<Event>) -> WindeckResult<Self> {
    let mut seen = HashSet::with_capacity(ids.len());
    for id in &ids {
      if id.as_str().is_empty() {
        return Err(WindeckError::InvalidWindowId);
      }
      if !seen.insert(id) {
        return Err(WindeckError::DuplicateWindow(id.clone()));
      }
    }

    let windows = ids
      .iter()
      .map(|id| (id.clone(), WindowState::CLOSED))
      .collect();

    Ok(Self {
      events_tx,
      windows,
      order: ids,
      stacking: Stacking::new(),
      focused_window: None,
      dropped_events: 0,
    })
  }

  /// Emit an event. Overflow in either channel mode is counted and logged.
  pub(super) fn emit(&mut self, event: Event) {
    match self.events_tx.try_broadcast(event) {
      Ok(None) => {}
      // Overflow mode: the oldest queued event was evicted to make room
      Ok(Some(_evicted)) => {
        self.dropped_events += 1;
        log::error!(
          "Event channel overflow - oldest event dropped. \
           Consider increasing the event channel capacity or processing events faster."
        );
      }
      Err(e) if e.is_full() => {
        self.dropped_events += 1;
        log::error!(
          "Event channel overflow - newest event dropped. \
           Consider increasing the event channel capacity or processing events faster."
        );
      }
      // No active subscribers
      Err(_) => {}
    }
  }

  /// Events lost to channel overflow so far.
  pub(crate) const fn dropped_events(&self) -> u64 {
    self.dropped_events
  }

  /// Current state of one window.
  pub(crate) fn get(&self, id: &str) -> WindeckResult<WindowState> {
    self
      .windows
      .get(id)
      .copied()
      .ok_or_else(|| WindeckError::WindowNotFound(id.into()))
  }

  pub(crate) fn contains(&self, id: &str) -> bool {
    self.windows.contains_key(id)
  }

  /// Registered ids in registration order.
  pub(crate) fn ids(&self) -> &[WindowId] {
    &self.order
  }

  /// Copy of every window's state, keyed by id.
  pub(crate) fn all_states(&self) -> BTreeMap<WindowId, WindowState> {
    self
      .windows
      .iter()
      .map(|(id, state)| (id.clone(), *state))
      .collect()
  }

  /// Immutable copy of the full registry.
  pub(crate) fn snapshot(&self) -> Snapshot {
    Snapshot {
      windows: self.all_states(),
      z_order: self.z_order(),
      focused_window: self.focused_window.clone(),
    }
  }

  /// Topmost visible window.
  pub(crate) fn focused_window(&self) -> Option<&WindowId> {
    self.focused_window.as_ref()
  }

  /// Visible windows, front to back.
  pub(crate) fn z_order(&self) -> Vec<WindowId> {
    stacking::z_order(&self.windows)
  }

  /// Last z-index handed out by the counter.
  pub(crate) const fn z_counter(&self) -> u32 {
    self.stacking.counter()
  }

  /// Recompute the topmost visible window. Emits `FocusWindow` if it changed.
  fn sync_focused_window(&mut self) {
    let top = stacking::topmost(&self.windows).cloned();
    if self.focused_window == top {
      return;
    }
    self.focused_window.clone_from(&top);
    self.emit(Event::FocusWindow { window_id: top });
  }
}

impl std::fmt::Debug for Registry {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Registry")
      .field("windows", &self.order.len())
      .field("z_counter", &self.z_counter())
      .field("focused_window", &self.focused_window)
      .field("dropped_events", &self.dropped_events)
      .finish_non_exhaustive()
  }
}
