/*!
Window writes for the Registry.

`set` merges a partial state and normalizes it; `raise` hands out the next
top z-index. Both emit `WindowChanged` for every window they touch.
*/

use super::Registry;
use crate::types::{Event, WindeckError, WindeckResult, WindowState};

/// Partial window state. `None` fields are left as they are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct WindowPatch {
  pub(crate) is_open: Option<bool>,
  pub(crate) is_minimized: Option<bool>,
  pub(crate) is_maximized: Option<bool>,
  pub(crate) z_index: Option<u32>,
}

impl WindowPatch {
  pub(crate) const fn open(mut self, open: bool) -> Self {
    self.is_open = Some(open);
    self
  }

  pub(crate) const fn minimized(mut self, minimized: bool) -> Self {
    self.is_minimized = Some(minimized);
    self
  }

  pub(crate) const fn maximized(mut self, maximized: bool) -> Self {
    self.is_maximized = Some(maximized);
    self
  }

  pub(crate) const fn z_index(mut self, z_index: u32) -> Self {
    self.z_index = Some(z_index);
    self
  }

  /// Merge into `state` and restore the flag invariants.
  ///
  /// A closed window drops both transient flags. If minimize and maximize
  /// end up both set, the one this patch set wins; maximize wins a tie.
  pub(crate) fn apply(self, mut state: WindowState) -> WindowState {
    if let Some(open) = self.is_open {
      state.is_open = open;
    }
    if let Some(minimized) = self.is_minimized {
      state.is_minimized = minimized;
    }
    if let Some(maximized) = self.is_maximized {
      state.is_maximized = maximized;
    }
    if let Some(z_index) = self.z_index {
      state.z_index = z_index;
    }

    if !state.is_open {
      state.is_minimized = false;
      state.is_maximized = false;
    } else if state.is_minimized && state.is_maximized {
      if self.is_maximized == Some(true) {
        state.is_minimized = false;
      } else {
        state.is_maximized = false;
      }
    }

    debug_assert!(state.is_consistent());
    state
  }
}

impl Registry {
  /// Merge `patch` into one window as a single transition.
  ///
  /// Emits `WindowChanged` if the state changed and `FocusWindow` if the
  /// topmost visible window changed. Returns the new state.
  pub(crate) fn set(&mut self, id: &str, patch: WindowPatch) -> WindeckResult<WindowState> {
    let Some((key, current)) = self.windows.get_key_value(id) else {
      return Err(WindeckError::WindowNotFound(id.into()));
    };

    let next = patch.apply(*current);
    if next == *current {
      return Ok(next);
    }

    let window_id = key.clone();
    self.windows.insert(window_id.clone(), next);
    self.debug_assert_unique_z();

    self.emit(Event::WindowChanged {
      window_id,
      state: next,
    });
    self.sync_focused_window();

    Ok(next)
  }

  /// Next top z-index for `id`. Does not assign it; pass it to `set`.
  ///
  /// When the counter is exhausted, every stacked window is renumbered to
  /// `1..=n` first (relative order kept) and each renumbered window emits
  /// `WindowChanged`.
  pub(crate) fn raise(&mut self, id: &str) -> WindeckResult<u32> {
    if !self.contains(id) {
      return Err(WindeckError::WindowNotFound(id.into()));
    }

    if self.stacking.is_exhausted() {
      self.compact_z();
    }
    Ok(self.stacking.advance())
  }

  fn compact_z(&mut self) {
    let before = self.all_states();
    self.stacking.compact(self.windows.values_mut());
    log::debug!(
      "z-index counter exhausted, compacted stacking to {}",
      self.stacking.counter()
    );

    for (window_id, old) in before {
      let Some(state) = self.windows.get(&window_id).copied() else {
        continue;
      };
      if state != old {
        self.emit(Event::WindowChanged { window_id, state });
      }
    }
  }

  fn debug_assert_unique_z(&self) {
    if cfg!(debug_assertions) {
      let mut seen = std::collections::HashSet::new();
      for state in self.windows.values().filter(|s| s.z_index > 0) {
        assert!(seen.insert(state.z_index), "duplicate z-index {}", state.z_index);
      }
    }
  }
}
