/*!
The window state machine.

Each function runs against an already-locked registry and writes at most
one patch per window, so every operation is a single transition for readers.

```text
Closed --open--> Normal <--minimize/focus--> Minimized
                   ^                             ^
                   +--maximize/restore--> Maximized --minimize--+
```

Minimizing a maximized window clears the maximized flag, so focusing it
again always lands in Normal.
*/

use super::registry::{Registry, WindowPatch};
use crate::types::{WindeckResult, WindowState};

/// Open and bring to front. Opening a minimized window restores it.
pub(super) fn open(r: &mut Registry, id: &str) -> WindeckResult<WindowState> {
  let z = r.raise(id)?;
  r.set(id, WindowPatch::default().open(true).minimized(false).z_index(z))
}

/// Close. Both transient flags reset; z-indices untouched.
pub(super) fn close(r: &mut Registry, id: &str) -> WindeckResult<WindowState> {
  r.set(
    id,
    WindowPatch::default()
      .open(false)
      .minimized(false)
      .maximized(false),
  )
}

/// Bring to front and un-minimize. Ignored for a closed window.
pub(super) fn focus(r: &mut Registry, id: &str) -> WindeckResult<WindowState> {
  let state = r.get(id)?;
  if !state.is_open {
    log::debug!("focus({id}) ignored: window is closed");
    return Ok(state);
  }
  let z = r.raise(id)?;
  r.set(id, WindowPatch::default().minimized(false).z_index(z))
}

/// Press/drag-start on the window body: focus, unless maximized (dragging is
/// disabled then). Check and raise happen under the same lock.
pub(super) fn focus_unless_maximized(r: &mut Registry, id: &str) -> WindeckResult<WindowState> {
  let state = r.get(id)?;
  if state.is_maximized {
    log::debug!("focus({id}) ignored: window is maximized");
    return Ok(state);
  }
  focus(r, id)
}

/// Collapse to the dock, forgetting maximize. Stacking is kept.
pub(super) fn minimize(r: &mut Registry, id: &str) -> WindeckResult<WindowState> {
  let state = r.get(id)?;
  if !state.is_open {
    log::debug!("minimize({id}) ignored: window is closed");
    return Ok(state);
  }
  r.set(id, WindowPatch::default().minimized(true).maximized(false))
}

/// Fill the viewport and bring to front. Wins over a prior minimize.
pub(super) fn maximize(r: &mut Registry, id: &str) -> WindeckResult<WindowState> {
  let state = r.get(id)?;
  if !state.is_open {
    log::debug!("maximize({id}) ignored: window is closed");
    return Ok(state);
  }
  let z = r.raise(id)?;
  r.set(
    id,
    WindowPatch::default()
      .maximized(true)
      .minimized(false)
      .z_index(z),
  )
}

/// Undo maximize. Stacking is kept.
pub(super) fn restore(r: &mut Registry, id: &str) -> WindeckResult<WindowState> {
  r.set(id, WindowPatch::default().maximized(false))
}

pub(super) fn toggle_minimize(r: &mut Registry, id: &str) -> WindeckResult<WindowState> {
  if r.get(id)?.is_minimized {
    focus(r, id)
  } else {
    minimize(r, id)
  }
}

pub(super) fn toggle_maximize(r: &mut Registry, id: &str) -> WindeckResult<WindowState> {
  if r.get(id)?.is_maximized {
    restore(r, id)
  } else {
    maximize(r, id)
  }
}
