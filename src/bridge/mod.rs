//! HTTP client for the local Blender bridge.
//!
//! The bridge is a localhost-only service that turns a plain-language goal
//! into either a tutoring hint or an executed macro. Everything here is a
//! single JSON-over-HTTP POST per call: no retries, no request queue, no
//! state shared between calls.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

use crate::consts::{NEXT_STEP_PATH, RUN_MACRO_PATH, base_url};

/// The two things the bridge can do with a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Ask for the very next modeling step, as text.
    NextStep,
    /// Ask the bridge to generate and run a macro.
    RunMacro,
}

impl Action {
    /// Endpoint path for this action.
    pub fn path(self) -> &'static str {
        match self {
            Action::NextStep => NEXT_STEP_PATH,
            Action::RunMacro => RUN_MACRO_PATH,
        }
    }

    /// Reply field shown to the user for this action.
    pub fn reply_field(self) -> &'static str {
        match self {
            Action::NextStep => "step",
            Action::RunMacro => "code",
        }
    }

    /// Short name for banners and logs.
    pub fn label(self) -> &'static str {
        match self {
            Action::NextStep => "next",
            Action::RunMacro => "doit",
        }
    }
}

/// What every bridge endpoint takes: the user's goal, verbatim.
#[derive(Serialize)]
struct GoalRequest<'a> {
    goal: &'a str,
}

/// A client bound to one bridge instance.
pub struct BridgeClient {
    http: reqwest::Client,
    base_url: String,
}

impl BridgeClient {
    /// Client for the bridge on a localhost port, with a per-request timeout.
    pub fn new(port: u16, timeout: Duration) -> Result<Self> {
        Self::with_base_url(base_url(port), timeout)
    }

    /// Client for an arbitrary base URL. Tests point this at a simulated
    /// bridge on an ephemeral port.
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// POST a JSON payload to a bridge path and parse the reply body as JSON.
    ///
    /// The timeout covers the whole exchange; a request that outlives it is
    /// aborted and reported as an error. The body is parsed whatever the
    /// HTTP status — the bridge reports degraded results (e.g. LLM offline)
    /// in-band, not via status codes.
    pub async fn dispatch<T: Serialize>(&self, path: &str, payload: &T) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?;
        resp.json()
            .await
            .context("bridge reply was not valid JSON")
    }

    /// Send a goal to an action's endpoint and return the raw reply.
    pub async fn call(&self, action: Action, goal: &str) -> Result<Value> {
        self.dispatch(action.path(), &GoalRequest { goal }).await
    }
}

/// Pull the displayable text for an action out of a reply.
///
/// Plain property access, no schema: an absent or non-string field displays
/// as the empty string.
pub fn reply_text(reply: &Value, action: Action) -> String {
    reply
        .get(action.reply_field())
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn action_paths() {
        assert_eq!(Action::NextStep.path(), "/blender/next_step");
        assert_eq!(Action::RunMacro.path(), "/blender/run_macro");
    }

    #[test]
    fn action_reply_fields() {
        assert_eq!(Action::NextStep.reply_field(), "step");
        assert_eq!(Action::RunMacro.reply_field(), "code");
    }

    #[test]
    fn goal_request_serializes_to_single_field() {
        let body = serde_json::to_value(GoalRequest { goal: "add a cube" }).unwrap();
        assert_eq!(body, json!({"goal": "add a cube"}));
    }

    #[test]
    fn reply_text_extracts_the_named_field() {
        let reply = json!({"step": "Enter edit mode."});
        assert_eq!(reply_text(&reply, Action::NextStep), "Enter edit mode.");
    }

    #[test]
    fn reply_text_ignores_other_fields() {
        let reply = json!({"code": "bpy.ops.mesh.primitive_cube_add(size=2)"});
        assert_eq!(reply_text(&reply, Action::NextStep), "");
        assert_eq!(
            reply_text(&reply, Action::RunMacro),
            "bpy.ops.mesh.primitive_cube_add(size=2)"
        );
    }

    #[test]
    fn reply_text_absent_or_non_string_is_empty() {
        assert_eq!(reply_text(&json!({}), Action::NextStep), "");
        assert_eq!(reply_text(&json!({"step": 7}), Action::NextStep), "");
        assert_eq!(reply_text(&json!(null), Action::RunMacro), "");
    }
}
