//! End-to-end window lifecycle through the public `Desktop` surface.

use std::collections::BTreeMap;
use windeck::{Desktop, DisplayState, Event, WindeckError, WindowId, WindowState};

fn desktop() -> Desktop {
  Desktop::new(["A", "B"]).unwrap()
}

fn state(is_open: bool, is_minimized: bool, is_maximized: bool, z_index: u32) -> WindowState {
  WindowState {
    is_open,
    is_minimized,
    is_maximized,
    z_index,
  }
}

#[test]
fn scenario_open_focus_minimize() {
  let desktop = desktop();
  assert_eq!(desktop.display_state("A").unwrap(), DisplayState::Closed);
  assert_eq!(desktop.display_state("B").unwrap(), DisplayState::Closed);

  desktop.open("A").unwrap();
  assert_eq!(desktop.state("A").unwrap(), state(true, false, false, 1));

  desktop.open("B").unwrap();
  assert_eq!(desktop.state("B").unwrap(), state(true, false, false, 2));

  desktop.focus("A").unwrap();
  assert_eq!(desktop.state("A").unwrap().z_index, 3);

  desktop.minimize("B").unwrap();

  let expected: BTreeMap<WindowId, WindowState> = [
    (WindowId::from("A"), state(true, false, false, 3)),
    (WindowId::from("B"), state(true, true, false, 2)),
  ]
  .into_iter()
  .collect();
  assert_eq!(desktop.all_states(), expected);
  assert_eq!(desktop.focused_window(), Some(WindowId::from("A")));
  assert_eq!(desktop.z_order(), vec![WindowId::from("A")]);
}

#[test]
fn open_puts_window_on_top_of_open_windows() {
  let desktop = Desktop::new(["a", "b", "c"]).unwrap();
  for id in ["a", "b", "c", "a"] {
    desktop.open(id).unwrap();
    let max_open = desktop
      .all_states()
      .values()
      .filter(|s| s.is_open)
      .map(|s| s.z_index)
      .max();
    let state = desktop.state(id).unwrap();
    assert!(state.is_open);
    assert_eq!(Some(state.z_index), max_open);
  }
}

#[test]
fn close_then_open_clears_flags() {
  let desktop = desktop();
  desktop.open("A").unwrap();
  desktop.maximize("A").unwrap();
  desktop.close("A").unwrap();
  desktop.open("A").unwrap();

  let state = desktop.state("A").unwrap();
  assert!(!state.is_minimized);
  assert!(!state.is_maximized);

  desktop.minimize("A").unwrap();
  desktop.close("A").unwrap();
  desktop.open("A").unwrap();

  assert_eq!(desktop.display_state("A").unwrap(), DisplayState::Normal);
}

#[test]
fn later_focus_is_higher() {
  let desktop = desktop();
  desktop.open("A").unwrap();
  desktop.open("B").unwrap();

  desktop.focus("A").unwrap();
  desktop.focus("B").unwrap();

  assert!(desktop.state("B").unwrap().z_index > desktop.state("A").unwrap().z_index);
}

#[test]
fn maximize_wins_over_minimize() {
  let desktop = desktop();
  desktop.open("A").unwrap();
  desktop.minimize("A").unwrap();
  desktop.maximize("A").unwrap();

  let state = desktop.state("A").unwrap();
  assert!(!state.is_minimized);
  assert!(state.is_maximized);
}

#[test]
fn minimize_forgets_maximize() {
  let desktop = desktop();
  desktop.open("A").unwrap();
  desktop.maximize("A").unwrap();
  desktop.minimize("A").unwrap();

  let state = desktop.state("A").unwrap();
  assert!(!state.is_maximized);
  assert!(state.is_minimized);

  desktop.focus("A").unwrap();
  assert_eq!(desktop.display_state("A").unwrap(), DisplayState::Normal);
}

#[test]
fn unknown_id_fails_and_changes_nothing() {
  let desktop = desktop();
  desktop.open("A").unwrap();
  desktop.open("B").unwrap();
  desktop.minimize("A").unwrap();
  let before = desktop.snapshot();
  let not_found = Err(WindeckError::WindowNotFound(WindowId::from("doesNotExist")));

  assert_eq!(desktop.open("doesNotExist"), not_found);
  assert_eq!(desktop.close("doesNotExist"), not_found);
  assert_eq!(desktop.focus("doesNotExist"), not_found);
  assert_eq!(desktop.minimize("doesNotExist"), not_found);
  assert_eq!(desktop.maximize("doesNotExist"), not_found);
  assert_eq!(desktop.restore("doesNotExist"), not_found);
  assert_eq!(desktop.toggle_minimize("doesNotExist"), not_found);
  assert_eq!(desktop.toggle_maximize("doesNotExist"), not_found);
  assert_eq!(
    desktop.state("doesNotExist"),
    Err(WindeckError::WindowNotFound(WindowId::from("doesNotExist")))
  );

  assert_eq!(desktop.snapshot(), before);
}

#[test]
fn events_follow_operations() {
  let desktop = desktop();
  let mut events = desktop.subscribe();

  desktop.open("A").unwrap();
  desktop.open("B").unwrap();
  desktop.minimize("B").unwrap();

  let received: Vec<Event> = std::iter::from_fn(|| events.try_recv().ok()).collect();
  assert_eq!(
    received,
    vec![
      Event::WindowChanged {
        window_id: "A".into(),
        state: state(true, false, false, 1),
      },
      Event::FocusWindow {
        window_id: Some("A".into()),
      },
      Event::WindowChanged {
        window_id: "B".into(),
        state: state(true, false, false, 2),
      },
      Event::FocusWindow {
        window_id: Some("B".into()),
      },
      Event::WindowChanged {
        window_id: "B".into(),
        state: state(true, true, false, 2),
      },
      Event::FocusWindow {
        window_id: Some("A".into()),
      },
    ]
  );
}

#[test]
fn sync_init_carries_snapshot() {
  let desktop = desktop();
  desktop.open("B").unwrap();

  let Event::SyncInit(snapshot) = desktop.sync_init() else {
    panic!("expected sync:init");
  };

  assert_eq!(snapshot.get(&WindowId::from("B")), Some(&state(true, false, false, 1)));
  assert_eq!(snapshot.focused_window, Some(WindowId::from("B")));
}

#[test]
fn handle_is_shared_across_threads() {
  let desktop = Desktop::new(["a", "b", "c", "d"]).unwrap();

  std::thread::scope(|scope| {
    for id in ["a", "b", "c", "d"] {
      let desktop = desktop.clone();
      scope.spawn(move || {
        for _ in 0..50 {
          desktop.open(id).unwrap();
          desktop.minimize(id).unwrap();
          desktop.focus(id).unwrap();
        }
      });
    }
  });

  let mut z: Vec<u32> = desktop.all_states().values().map(|s| s.z_index).collect();
  z.sort_unstable();
  z.dedup();
  assert_eq!(z.len(), 4);
  assert_eq!(z.last(), Some(&400));
}
