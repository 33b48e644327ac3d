/*!
Windeck - window-manager state core for a desktop-styled page.

Tracks a fixed set of virtual windows (open, minimized, maximized, z-order)
and exposes the operations every window's presentation wrapper calls.

```
use windeck::{Desktop, WindowState};

// Construct once and pass the handle around (no globals)
let desktop = Desktop::new(["terminal", "finder"])?;

// Gestures become operations
desktop.open("terminal")?;
desktop.open("finder")?;
desktop.focus("terminal")?; // press / drag-start
desktop.minimize("finder")?;

// Reads are copies
let states = desktop.all_states();
assert_eq!(states["terminal"].z_index, 3);
assert_eq!(
    states["finder"],
    WindowState { is_open: true, is_minimized: true, is_maximized: false, z_index: 2 }
);

// Subscribe to changes
let mut events = desktop.subscribe();
desktop.close("finder")?;
assert!(events.try_recv().is_ok());
# Ok::<(), windeck::WindeckError>(())
```
*/

mod config;
mod core;
mod wrapper;

pub mod rpc;

mod types;
pub use types::*;

pub use crate::config::Config;
pub use crate::core::{Desktop, DesktopBuilder};
pub use crate::wrapper::{Layout, Presence, WindowContent, WindowView, Windowed};
