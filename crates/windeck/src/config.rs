/*!
Configuration for windeck.

All values have sensible defaults. Override through the builder:

```
use windeck::{Config, Desktop};

let desktop = Desktop::builder()
    .window("terminal")
    .config(Config {
        event_channel_capacity: 64,
        ..Config::default()
    })
    .build()?;
# Ok::<(), windeck::WindeckError>(())
```
*/

/// Desktop configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
  /// Capacity of the event broadcast channel.
  /// Default: 1000 events.
  pub event_channel_capacity: usize,

  /// Drop the oldest event when the channel is full instead of the newest.
  /// Default: true.
  pub drop_oldest_on_overflow: bool,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      event_channel_capacity: 1000,
      drop_oldest_on_overflow: true,
    }
  }
}

impl Config {
  /// Create a new config with default values.
  pub fn new() -> Self {
    Self::default()
  }
}
