/*!
Core windeck instance - owns window state and event broadcasting.

# Module Structure

- `mod.rs` - Desktop struct, builder, construction, events
- `registry/` - Registry with private fields + writes + event emission
- `transitions.rs` - the window state machine, over a locked registry
- `actions.rs` - `open()`, `close()`, `focus()`, ... (one write lock each)
- `queries.rs` - `state()`, `all_states()`, `snapshot()`, ...

# Example

```
use windeck::{Desktop, DisplayState};

let desktop = Desktop::builder().window("terminal").window("finder").build()?;

desktop.open("terminal")?;
desktop.open("finder")?;
desktop.focus("terminal")?;
desktop.minimize("finder")?;

assert_eq!(desktop.focused_window(), Some("terminal".into()));
assert_eq!(desktop.display_state("finder")?, DisplayState::Minimized);
# Ok::<(), windeck::WindeckError>(())
```
*/

mod actions;
mod queries;
mod registry;
mod transitions;

pub(crate) use registry::Registry;

use crate::config::Config;
use crate::types::{Event, WindeckResult, WindowId};
use async_broadcast::{InactiveReceiver, Receiver, Sender};
use parking_lot::RwLock;
use std::sync::Arc;

/// Main windeck instance - the only way to read or change window state.
///
/// Construct once at startup and pass the handle to whatever needs it.
/// Clone is cheap (Arc bumps) - share freely across threads.
pub struct Desktop {
  pub(crate) state: Arc<RwLock<Registry>>,
  events_tx: Sender<Event>,
  events_keepalive: InactiveReceiver<Event>,
}

impl Clone for Desktop {
  fn clone(&self) -> Self {
    Self {
      state: Arc::clone(&self.state),
      events_tx: self.events_tx.clone(),
      events_keepalive: self.events_keepalive.clone(),
    }
  }
}

impl std::fmt::Debug for Desktop {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Desktop")
      .field("registry", &*self.state.read())
      .finish_non_exhaustive()
  }
}

/// Builder for configuring a Desktop instance.
///
/// The set of windows is fixed here; no window can be added later.
///
/// # Example
///
/// ```
/// use windeck::Desktop;
///
/// let desktop = Desktop::builder()
///     .window("terminal")
///     .windows(["finder", "resume"])
///     .event_channel_capacity(64)
///     .build()?;
/// # Ok::<(), windeck::WindeckError>(())
/// ```
#[derive(Debug, Default, Clone)]
#[must_use = "Builder does nothing until .build() is called"]
pub struct DesktopBuilder {
  config: Config,
  windows: Vec<WindowId>,
}

impl DesktopBuilder {
  /// Register one window.
  pub fn window(mut self, id: impl Into<WindowId>) -> Self {
    self.windows.push(id.into());
    self
  }

  /// Register several windows, in order.
  pub fn windows<I>(mut self, ids: I) -> Self
  where
    I: IntoIterator,
    I::Item: Into<WindowId>,
  {
    self.windows.extend(ids.into_iter().map(Into::into));
    self
  }

  /// Replace the whole configuration.
  pub const fn config(mut self, config: Config) -> Self {
    self.config = config;
    self
  }

  /// Capacity of the event channel. Default: 1000.
  pub const fn event_channel_capacity(mut self, capacity: usize) -> Self {
    self.config.event_channel_capacity = capacity;
    self
  }

  /// Build the Desktop with every registered window closed.
  ///
  /// Fails on an empty or duplicated window id.
  pub fn build(self) -> WindeckResult<Desktop> {
    Desktop::create_with_config(self.windows, self.config)
  }
}

impl Desktop {
  /// Create a Desktop over the given windows with default options.
  ///
  /// For custom configuration, use [`Desktop::builder()`].
  pub fn new<I>(ids: I) -> WindeckResult<Self>
  where
    I: IntoIterator,
    I::Item: Into<WindowId>,
  {
    Self::builder().windows(ids).build()
  }

  /// Create a builder for configuring a new Desktop.
  pub fn builder() -> DesktopBuilder {
    DesktopBuilder::default()
  }

  fn create_with_config(windows: Vec<WindowId>, config: Config) -> WindeckResult<Self> {
    let (mut tx, rx) = async_broadcast::broadcast(config.event_channel_capacity.max(1));
    tx.set_overflow(config.drop_oldest_on_overflow);

    // Registry owns a clone of the sender for event emission
    let registry = Registry::new(windows, tx.clone())?;
    log::debug!("desktop created with {} windows", registry.ids().len());

    Ok(Desktop {
      state: Arc::new(RwLock::new(registry)),
      events_tx: tx,
      events_keepalive: rx.deactivate(),
    })
  }

  /// Subscribe to events from this instance.
  ///
  /// Only events emitted after this call are received; pair with
  /// [`Desktop::sync_init`] to get the starting state.
  pub fn subscribe(&self) -> Receiver<Event> {
    self.events_keepalive.activate_cloned()
  }

  /// Number of active subscribers.
  pub fn subscriber_count(&self) -> usize {
    self.events_tx.receiver_count()
  }

  /// Read state under a shared lock.
  #[inline]
  pub(crate) fn read<R>(&self, f: impl FnOnce(&Registry) -> R) -> R {
    f(&self.state.read())
  }

  /// Write state. The whole closure is one atomic transition for readers.
  #[inline]
  pub(crate) fn write<R>(&self, f: impl FnOnce(&mut Registry) -> R) -> R {
    f(&mut self.state.write())
  }
}
