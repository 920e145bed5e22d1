pub mod banner;
pub mod bridge;
pub mod consts;
pub mod panel;
pub mod repl;
pub mod session;
