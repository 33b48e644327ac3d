/*!
Window operations for Desktop.

Each takes the write lock once, so a concurrent `snapshot()` sees either the
state before the operation or after it, never a mix.
*/

use super::{transitions, Desktop};
use crate::types::WindeckResult;

impl Desktop {
  /// Open a window and bring it to the front.
  pub fn open(&self, id: impl AsRef<str>) -> WindeckResult<()> {
    let id = id.as_ref();
    self.write(|r| transitions::open(r, id))?;
    log::debug!("open({id})");
    Ok(())
  }

  /// Close a window. Its minimized and maximized flags are reset.
  pub fn close(&self, id: impl AsRef<str>) -> WindeckResult<()> {
    let id = id.as_ref();
    self.write(|r| transitions::close(r, id))?;
    log::debug!("close({id})");
    Ok(())
  }

  /// Bring an open window to the front, restoring it if minimized.
  ///
  /// This is the hook for press and drag-start gestures. Closed windows
  /// are left alone.
  pub fn focus(&self, id: impl AsRef<str>) -> WindeckResult<()> {
    let id = id.as_ref();
    self.write(|r| transitions::focus(r, id))?;
    log::debug!("focus({id})");
    Ok(())
  }

  /// Focus unless maximized, in one critical section.
  ///
  /// The press/drag-start hook for draggable windows: a maximized window
  /// cannot be dragged, so the gesture leaves it where it is.
  pub fn focus_unless_maximized(&self, id: impl AsRef<str>) -> WindeckResult<()> {
    let id = id.as_ref();
    self.write(|r| transitions::focus_unless_maximized(r, id))?;
    log::debug!("focus_unless_maximized({id})");
    Ok(())
  }

  /// Minimize an open window. Clears maximized; keeps its z-index.
  pub fn minimize(&self, id: impl AsRef<str>) -> WindeckResult<()> {
    let id = id.as_ref();
    self.write(|r| transitions::minimize(r, id))?;
    log::debug!("minimize({id})");
    Ok(())
  }

  /// Maximize an open window and bring it to the front.
  pub fn maximize(&self, id: impl AsRef<str>) -> WindeckResult<()> {
    let id = id.as_ref();
    self.write(|r| transitions::maximize(r, id))?;
    log::debug!("maximize({id})");
    Ok(())
  }

  /// Undo maximize. Keeps the z-index.
  pub fn restore(&self, id: impl AsRef<str>) -> WindeckResult<()> {
    let id = id.as_ref();
    self.write(|r| transitions::restore(r, id))?;
    log::debug!("restore({id})");
    Ok(())
  }

  /// Minimize, or focus if already minimized.
  pub fn toggle_minimize(&self, id: impl AsRef<str>) -> WindeckResult<()> {
    let id = id.as_ref();
    self.write(|r| transitions::toggle_minimize(r, id))?;
    log::debug!("toggle_minimize({id})");
    Ok(())
  }

  /// Maximize, or restore if already maximized.
  pub fn toggle_maximize(&self, id: impl AsRef<str>) -> WindeckResult<()> {
    let id = id.as_ref();
    self.write(|r| transitions::toggle_maximize(r, id))?;
    log::debug!("toggle_maximize({id})");
    Ok(())
  }
}
