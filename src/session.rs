//! Ties a bridge client to an output panel.
//!
//! Each trigger is one independent dispatch: read the goal, POST it, write
//! the reply (or the error) to the panel. Two rapid triggers produce two
//! concurrent requests, each with its own timeout, and the panel ends up
//! showing whichever resolved last. With stale cancellation on, a new
//! trigger aborts the previous in-flight request for the same action so a
//! stale reply can never overwrite a newer one.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use tokio::task::{AbortHandle, JoinHandle};

use crate::bridge::{Action, BridgeClient, reply_text};
use crate::panel::Panel;

pub struct Session {
    client: Arc<BridgeClient>,
    panel: Arc<dyn Panel>,
    cancel_stale: bool,
    inflight: Mutex<HashMap<Action, AbortHandle>>,
}

impl Session {
    pub fn new(client: Arc<BridgeClient>, panel: Arc<dyn Panel>, cancel_stale: bool) -> Self {
        Self {
            client,
            panel,
            cancel_stale,
            inflight: Mutex::new(HashMap::new()),
        }
    }

    /// Run one trigger to completion.
    ///
    /// On success the named reply field lands on the panel and is returned.
    /// Any failure — connection refused, timeout, non-JSON reply — is caught
    /// exactly once here: the panel shows `Error: <message>` and the error
    /// still propagates to the caller.
    pub async fn run(&self, action: Action, goal: &str) -> Result<String> {
        match self.client.call(action, goal).await {
            Ok(reply) => {
                let text = reply_text(&reply, action);
                self.panel.set_text(&text);
                Ok(text)
            }
            Err(e) => {
                self.panel.set_text(&format!("Error: {e:#}"));
                Err(e)
            }
        }
    }

    /// Launch [`run`](Self::run) as an independent task.
    ///
    /// With `cancel_stale` set, the previous in-flight task for the same
    /// action is aborted first; otherwise concurrent triggers race freely
    /// and the panel is last-write-wins.
    pub fn spawn(self: &Arc<Self>, action: Action, goal: &str) -> JoinHandle<Result<String>> {
        if self.cancel_stale {
            let previous = self.inflight.lock().unwrap().remove(&action);
            if let Some(previous) = previous {
                previous.abort();
            }
        }

        let session = Arc::clone(self);
        let goal = goal.to_string();
        let handle = tokio::spawn(async move { session.run(action, &goal).await });
        self.inflight
            .lock()
            .unwrap()
            .insert(action, handle.abort_handle());
        handle
    }
}
