use std::sync::Mutex;

use super::Panel;

/// A panel for tests: remembers the last text written and how many writes
/// it has seen.
#[derive(Default)]
pub struct MockPanel {
    state: Mutex<(String, usize)>,
}

impl MockPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent text written, or empty if never written.
    pub fn text(&self) -> String {
        self.state.lock().unwrap().0.clone()
    }

    /// Number of writes so far.
    pub fn writes(&self) -> usize {
        self.state.lock().unwrap().1
    }
}

impl Panel for MockPanel {
    fn set_text(&self, text: &str) {
        let mut state = self.state.lock().unwrap();
        state.0 = text.to_string();
        state.1 += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let panel = MockPanel::new();
        assert_eq!(panel.text(), "");
        assert_eq!(panel.writes(), 0);
    }

    #[test]
    fn last_write_wins() {
        let panel = MockPanel::new();
        panel.set_text("first");
        panel.set_text("second");
        assert_eq!(panel.text(), "second");
        assert_eq!(panel.writes(), 2);
    }
}
