/*!
Z-order resolver.

A single counter hands out strictly increasing z-indices. Raising a window
assigns it the next value; every other window keeps its value, so relative
order among the rest is preserved without touching them.
*/

use crate::types::{WindowId, WindowState};

/// Monotonic z-index counter.
#[derive(Debug, Default)]
pub(crate) struct Stacking {
  counter: u32,
}

impl Stacking {
  pub(crate) const fn new() -> Self {
    Self { counter: 0 }
  }

  #[cfg(test)]
  pub(crate) const fn starting_at(counter: u32) -> Self {
    Self { counter }
  }

  /// Last z-index handed out.
  pub(crate) const fn counter(&self) -> u32 {
    self.counter
  }

  /// True when the next `advance` would overflow. Call `compact` first.
  pub(crate) const fn is_exhausted(&self) -> bool {
    self.counter == u32::MAX
  }

  /// Hand out the next top z-index.
  ///
  /// Raising the window that is already on top still advances the counter.
  pub(crate) fn advance(&mut self) -> u32 {
    debug_assert!(!self.is_exhausted(), "compact before advancing");
    self.counter += 1;
    self.counter
  }

  /// Renumber stacked windows to `1..=n`, keeping their relative order.
  ///
  /// Windows that were never stacked (`z_index == 0`) are left alone.
  pub(crate) fn compact<'a>(&mut self, states: impl IntoIterator<Item = &'a mut WindowState>) {
    let mut stacked: Vec<&mut WindowState> =
      states.into_iter().filter(|s| s.z_index > 0).collect();
    stacked.sort_unstable_by_key(|s| s.z_index);

    let mut rank = 0;
    for state in stacked {
      rank += 1;
      state.z_index = rank;
    }
    self.counter = rank;
  }
}

/// Topmost visible window: open, not minimized, highest z-index.
pub(crate) fn topmost<'a>(
  windows: impl IntoIterator<Item = (&'a WindowId, &'a WindowState)>,
) -> Option<&'a WindowId> {
  windows
    .into_iter()
    .filter(|(_, state)| state.is_visible())
    .max_by_key(|(_, state)| state.z_index)
    .map(|(id, _)| id)
}

/// Visible windows, front to back.
pub(crate) fn z_order<'a>(
  windows: impl IntoIterator<Item = (&'a WindowId, &'a WindowState)>,
) -> Vec<WindowId> {
  let mut visible: Vec<(&WindowId, &WindowState)> = windows
    .into_iter()
    .filter(|(_, state)| state.is_visible())
    .collect();
  visible.sort_unstable_by(|a, b| b.1.z_index.cmp(&a.1.z_index));
  visible.into_iter().map(|(id, _)| id.clone()).collect()
}
