/*!
Presentation wrapper - shared window behavior composed around any content.

A `Windowed<C>` pairs content with a `Desktop` handle and a window id. The
presentation layer renders `view()` and forwards gestures to the hooks; it
never touches window state directly.

```
use windeck::{Desktop, Layout, Presence, WindowContent};

struct Terminal;

impl WindowContent for Terminal {
    fn name(&self) -> Option<&str> {
        Some("Terminal")
    }
}

let desktop = Desktop::new(["terminal"])?;
let terminal = desktop.wrap("terminal", Terminal)?;
assert_eq!(terminal.display_name(), "Windowed(Terminal)");

desktop.open("terminal")?;
let view = terminal.view()?;
assert_eq!(view.presence, Presence::Shown);
assert_eq!(view.layout, Layout::Floating);
assert!(view.draggable);
# Ok::<(), windeck::WindeckError>(())
```
*/

use serde::Serialize;
use ts_rs::TS;

use crate::core::Desktop;
use crate::types::{WindeckError, WindeckResult, WindowId, WindowState};

/// Content that can be wrapped in a window.
pub trait WindowContent {
  /// Human-readable name used in [`Windowed::display_name`].
  fn name(&self) -> Option<&str> {
    None
  }
}

/// Whether the wrapped content is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Presence {
  /// Open and not minimized.
  Shown,
  /// Collapsed to the dock.
  Minimized,
  /// Closed.
  Hidden,
}

/// How the window is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Layout {
  /// Positioned by the user, sized to content.
  Floating,
  /// Fills the viewport.
  Fullscreen,
}

/// Everything the presentation layer needs to render one window.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WindowView {
  pub window_id: WindowId,
  /// Stacking order to apply to the element.
  pub z_index: u32,
  pub presence: Presence,
  pub layout: Layout,
  /// Dragging is disabled while maximized.
  pub draggable: bool,
}

impl WindowView {
  fn from_state(window_id: WindowId, state: WindowState) -> Self {
    let presence = if state.is_visible() {
      Presence::Shown
    } else if state.is_minimized {
      Presence::Minimized
    } else {
      Presence::Hidden
    };
    let layout = if state.is_maximized {
      Layout::Fullscreen
    } else {
      Layout::Floating
    };

    Self {
      window_id,
      z_index: state.z_index,
      presence,
      layout,
      draggable: !state.is_maximized,
    }
  }
}

/// Content `C` wrapped with open/close/focus/drag behavior.
#[derive(Debug, Clone)]
pub struct Windowed<C> {
  desktop: Desktop,
  window_id: WindowId,
  content: C,
}

impl<C: WindowContent> Windowed<C> {
  /// Wrap `content` as the window `id`. Fails if `id` is not registered.
  pub fn new(desktop: &Desktop, id: impl Into<WindowId>, content: C) -> WindeckResult<Self> {
    let window_id = id.into();
    if !desktop.is_registered(&window_id) {
      return Err(WindeckError::WindowNotFound(window_id));
    }
    Ok(Self {
      desktop: desktop.clone(),
      window_id,
      content,
    })
  }

  /// `Windowed(<content name>)`, or `Windowed(Component)` for unnamed content.
  pub fn display_name(&self) -> String {
    format!("Windowed({})", self.content.name().unwrap_or("Component"))
  }
}

impl<C> Windowed<C> {
  /// Id of the wrapped window.
  pub const fn window_id(&self) -> &WindowId {
    &self.window_id
  }

  /// The wrapped content.
  pub const fn content(&self) -> &C {
    &self.content
  }

  /// The wrapped content, mutably.
  pub fn content_mut(&mut self) -> &mut C {
    &mut self.content
  }

  /// Unwrap the content, dropping the window behavior.
  pub fn into_content(self) -> C {
    self.content
  }

  /// Current render state for this window.
  pub fn view(&self) -> WindeckResult<WindowView> {
    let state = self.desktop.state(&self.window_id)?;
    Ok(WindowView::from_state(self.window_id.clone(), state))
  }

  /// Pointer pressed on the window body. Brings it to front unless maximized.
  pub fn on_press(&self) -> WindeckResult<()> {
    self.desktop.focus_unless_maximized(&self.window_id)
  }

  /// Drag started. Brings it to front unless maximized.
  pub fn on_drag_start(&self) -> WindeckResult<()> {
    self.desktop.focus_unless_maximized(&self.window_id)
  }

  /// Titlebar close button.
  pub fn close(&self) -> WindeckResult<()> {
    self.desktop.close(&self.window_id)
  }

  /// Titlebar minimize button.
  pub fn minimize(&self) -> WindeckResult<()> {
    self.desktop.minimize(&self.window_id)
  }

  /// Titlebar maximize/restore button.
  pub fn toggle_maximize(&self) -> WindeckResult<()> {
    self.desktop.toggle_maximize(&self.window_id)
  }
}

impl Desktop {
  /// Wrap `content` as the window `id`. See [`Windowed`].
  pub fn wrap<C: WindowContent>(
    &self,
    id: impl Into<WindowId>,
    content: C,
  ) -> WindeckResult<Windowed<C>> {
    Windowed::new(self, id, content)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  struct Unnamed;
  impl WindowContent for Unnamed {}

  #[derive(Debug)]
  struct Finder;
  impl WindowContent for Finder {
    fn name(&self) -> Option<&str> {
      Some("Finder")
    }
  }

  fn desktop() -> Desktop {
    Desktop::new(["terminal", "finder"]).unwrap()
  }

  #[test]
  fn unnamed_content_falls_back() {
    let windowed = desktop().wrap("terminal", Unnamed).unwrap();
    assert_eq!(windowed.display_name(), "Windowed(Component)");
  }

  #[test]
  fn wrapping_unknown_id_fails() {
    let err = desktop().wrap("ghost", Finder).unwrap_err();
    assert_eq!(err, WindeckError::WindowNotFound("ghost".into()));
  }

  #[test]
  fn closed_window_is_hidden() {
    let windowed = desktop().wrap("finder", Finder).unwrap();
    let view = windowed.view().unwrap();
    assert_eq!(view.presence, Presence::Hidden);
    assert_eq!(view.z_index, 0);
  }

  #[test]
  fn minimized_window_view() {
    let desktop = desktop();
    let windowed = desktop.wrap("finder", Finder).unwrap();
    desktop.open("finder").unwrap();

    windowed.minimize().unwrap();

    assert_eq!(windowed.view().unwrap().presence, Presence::Minimized);
  }

  #[test]
  fn maximized_window_is_not_draggable() {
    let desktop = desktop();
    let windowed = desktop.wrap("finder", Finder).unwrap();
    desktop.open("finder").unwrap();

    windowed.toggle_maximize().unwrap();
    let view = windowed.view().unwrap();

    assert_eq!(view.layout, Layout::Fullscreen);
    assert!(!view.draggable);
  }

  #[test]
  fn press_focuses_floating_window() {
    let desktop = desktop();
    let finder = desktop.wrap("finder", Finder).unwrap();
    desktop.open("finder").unwrap();
    desktop.open("terminal").unwrap();

    finder.on_press().unwrap();

    assert_eq!(desktop.focused_window(), Some("finder".into()));
  }

  #[test]
  fn press_on_maximized_window_is_ignored() {
    let desktop = desktop();
    let finder = desktop.wrap("finder", Finder).unwrap();
    desktop.open("finder").unwrap();
    desktop.maximize("finder").unwrap();
    let before = desktop.state("finder").unwrap();

    finder.on_drag_start().unwrap();

    assert_eq!(desktop.state("finder").unwrap(), before);
  }

  #[test]
  fn view_serializes_camel_case() {
    let desktop = desktop();
    let finder = desktop.wrap("finder", Finder).unwrap();
    desktop.open("finder").unwrap();

    let json = serde_json::to_value(finder.view().unwrap()).unwrap();

    assert_eq!(
      json,
      serde_json::json!({
        "windowId": "finder",
        "zIndex": 1,
        "presence": "shown",
        "layout": "floating",
        "draggable": true
      })
    );
  }

  #[test]
  fn close_hides_window() {
    let desktop = desktop();
    let finder = desktop.wrap("finder", Finder).unwrap();
    desktop.open("finder").unwrap();

    finder.close().unwrap();

    assert_eq!(finder.view().unwrap().presence, Presence::Hidden);
    assert!(finder.content().name().is_some());
  }
}
