//! Project-wide constants.

/// The bridge listens on localhost only.
pub const BRIDGE_HOST: &str = "127.0.0.1";

/// Default port of the local Blender bridge.
pub const DEFAULT_PORT: u16 = 17890;

/// Default request timeout: five minutes. The bridge may be waiting on a
/// slow local LLM, so this is deliberately generous.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Endpoint that suggests the next modeling step for a goal.
pub const NEXT_STEP_PATH: &str = "/blender/next_step";

/// Endpoint that generates and runs a macro for a goal.
pub const RUN_MACRO_PATH: &str = "/blender/run_macro";

/// Build the bridge base URL for a port, e.g. `http://127.0.0.1:17890`.
pub fn base_url(port: u16) -> String {
    format!("http://{}:{}", BRIDGE_HOST, port)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_default_port() {
        assert_eq!(base_url(DEFAULT_PORT), "http://127.0.0.1:17890");
    }

    #[test]
    fn base_url_other_port() {
        assert_eq!(base_url(4242), "http://127.0.0.1:4242");
    }

    #[test]
    fn paths_are_absolute() {
        assert!(NEXT_STEP_PATH.starts_with('/'));
        assert!(RUN_MACRO_PATH.starts_with('/'));
    }
}
