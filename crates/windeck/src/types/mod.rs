/*! Core types for windeck.

Regenerate TypeScript types: `cargo test -p windeck export_bindings`
*/

#![allow(missing_docs)]

mod error;
mod event;
mod ids;
mod window;

pub use error::{WindeckError, WindeckResult};
pub use event::{Event, Snapshot};
pub use ids::WindowId;
pub use window::{DisplayState, WindowState};
