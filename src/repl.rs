//! REPL line parsing.
//!
//! The prompt accepts two verbs mirroring the bridge actions, plus the
//! usual escape hatches. A bare line is shorthand for `next`.

use crate::bridge::Action;

/// What the user typed, decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Trigger an action with a goal.
    Trigger(Action, String),
    /// Show the help text.
    Help,
    /// Leave the REPL.
    Quit,
    /// Blank line, nothing to do.
    Empty,
}

pub const HELP: &str = "\
commands:
  next <goal>   ask for the very next step toward the goal
  doit <goal>   generate and run a macro for the goal
  <goal>        shorthand for `next <goal>`
  help          show this text
  quit / exit   leave\n";

/// Decode one line of user input.
pub fn parse_line(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }
    match line {
        "quit" | "exit" => return Input::Quit,
        "help" => return Input::Help,
        // A verb with no goal gets the help text rather than an empty goal.
        "next" | "doit" => return Input::Help,
        _ => {}
    }
    if let Some(goal) = line.strip_prefix("next ") {
        return Input::Trigger(Action::NextStep, goal.trim().to_string());
    }
    if let Some(goal) = line.strip_prefix("doit ") {
        return Input::Trigger(Action::RunMacro, goal.trim().to_string());
    }
    Input::Trigger(Action::NextStep, line.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace() {
        assert_eq!(parse_line(""), Input::Empty);
        assert_eq!(parse_line("   "), Input::Empty);
    }

    #[test]
    fn quit_and_exit() {
        assert_eq!(parse_line("quit"), Input::Quit);
        assert_eq!(parse_line("exit"), Input::Quit);
        assert_eq!(parse_line("  quit  "), Input::Quit);
    }

    #[test]
    fn explicit_next() {
        assert_eq!(
            parse_line("next add a red cube"),
            Input::Trigger(Action::NextStep, "add a red cube".to_string())
        );
    }

    #[test]
    fn explicit_doit() {
        assert_eq!(
            parse_line("doit make a pyramid"),
            Input::Trigger(Action::RunMacro, "make a pyramid".to_string())
        );
    }

    #[test]
    fn bare_line_is_next() {
        assert_eq!(
            parse_line("model a teapot"),
            Input::Trigger(Action::NextStep, "model a teapot".to_string())
        );
    }

    #[test]
    fn verb_without_goal_shows_help() {
        assert_eq!(parse_line("next"), Input::Help);
        assert_eq!(parse_line("doit"), Input::Help);
        assert_eq!(parse_line("help"), Input::Help);
    }

    #[test]
    fn goal_starting_with_a_verb_word_is_kept_whole() {
        // `nexttime` is not the `next` verb
        assert_eq!(
            parse_line("nexttime do it better"),
            Input::Trigger(Action::NextStep, "nexttime do it better".to_string())
        );
    }
}
