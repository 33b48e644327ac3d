/*!
RPC request/response types and dispatch.

An in-process JSON surface for webview or wasm bindings. Transport is the
caller's business. Method names and argument keys are camelCase, like every
other key windeck serializes:

```json
{ "method": "toggleMaximize", "args": { "windowId": "terminal" } }
```
*/

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use std::collections::BTreeMap;
use ts_rs::TS;

use crate::core::Desktop;
use crate::types::{Snapshot, WindeckError, WindowId, WindowState};

/// RPC request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, TS)]
#[serde(tag = "method", content = "args", rename_all = "camelCase")]
#[ts(export)]
pub enum RpcRequest {
  /// Get a snapshot of current state.
  Snapshot,
  /// Get one window's state.
  State {
    #[serde(rename = "windowId")]
    window_id: WindowId,
  },
  /// Get every window's state.
  AllStates,
  Open {
    #[serde(rename = "windowId")]
    window_id: WindowId,
  },
  Close {
    #[serde(rename = "windowId")]
    window_id: WindowId,
  },
  Focus {
    #[serde(rename = "windowId")]
    window_id: WindowId,
  },
  Minimize {
    #[serde(rename = "windowId")]
    window_id: WindowId,
  },
  Maximize {
    #[serde(rename = "windowId")]
    window_id: WindowId,
  },
  Restore {
    #[serde(rename = "windowId")]
    window_id: WindowId,
  },
  ToggleMinimize {
    #[serde(rename = "windowId")]
    window_id: WindowId,
  },
  ToggleMaximize {
    #[serde(rename = "windowId")]
    window_id: WindowId,
  },
}

/// RPC response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum RpcResponse {
  /// Full state snapshot.
  Snapshot(Box<Snapshot>),
  /// Single window.
  State(WindowState),
  /// Every window, keyed by id.
  States(BTreeMap<WindowId, WindowState>),
  /// No data.
  Null,
}

pub fn dispatch_json(desktop: &Desktop, method: &str, args: &JsonValue) -> JsonValue {
  let request_value = json!({ "method": method, "args": args });

  match serde_json::from_value::<RpcRequest>(request_value) {
    Ok(request) => match dispatch(desktop, request) {
      Ok(response) => json!({ "result": response }),
      Err(e) => {
        log::warn!("[rpc] {method} failed: {e}");
        json!({ "error": e.to_string() })
      }
    },
    Err(e) => {
      log::warn!("[rpc] Invalid request for {method}: {e}");
      json!({ "error": format!("Invalid request: {e}") })
    }
  }
}

pub fn dispatch(desktop: &Desktop, request: RpcRequest) -> Result<RpcResponse, WindeckError> {
  match request {
    RpcRequest::Snapshot => Ok(RpcResponse::Snapshot(Box::new(desktop.snapshot()))),

    RpcRequest::State { window_id } => desktop.state(&window_id).map(RpcResponse::State),

    RpcRequest::AllStates => Ok(RpcResponse::States(desktop.all_states())),

    RpcRequest::Open { window_id } => desktop.open(&window_id).map(|()| RpcResponse::Null),

    RpcRequest::Close { window_id } => desktop.close(&window_id).map(|()| RpcResponse::Null),

    RpcRequest::Focus { window_id } => desktop.focus(&window_id).map(|()| RpcResponse::Null),

    RpcRequest::Minimize { window_id } => {
      desktop.minimize(&window_id).map(|()| RpcResponse::Null)
    }

    RpcRequest::Maximize { window_id } => {
      desktop.maximize(&window_id).map(|()| RpcResponse::Null)
    }

    RpcRequest::Restore { window_id } => {
      desktop.restore(&window_id).map(|()| RpcResponse::Null)
    }

    RpcRequest::ToggleMinimize { window_id } => desktop
      .toggle_minimize(&window_id)
      .map(|()| RpcResponse::Null),

    RpcRequest::ToggleMaximize { window_id } => desktop
      .toggle_maximize(&window_id)
      .map(|()| RpcResponse::Null),
  }
}
