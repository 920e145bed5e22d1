//! The output panel: a single text region, last write wins.
//!
//! The panel is overwritten by whichever call resolves most recently; it
//! keeps no history. Callers own the panel they write to — nothing in the
//! bridge layer touches it.

pub mod mock;

/// A single mutable text region.
pub trait Panel: Send + Sync {
    /// Replace the panel contents with `text`.
    fn set_text(&self, text: &str);
}

/// Production panel: writes straight to the terminal.
pub struct StdoutPanel;

impl Panel for StdoutPanel {
    fn set_text(&self, text: &str) {
        println!("{text}");
    }
}
