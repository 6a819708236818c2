//! Prompt line editing: key mapping, Tab cycling and hint acceptance.
//!
//! Everything here is plain state so it can be tested without a DOM; the
//! `Input` component keeps it in signals.

use crate::core::AutocompleteResult;

/// Direction of a command history step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryStep {
    /// ArrowUp: toward older entries.
    Prev,
    /// ArrowDown: toward newer entries.
    Next,
}

/// What a key press does to the prompt line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Complete,
    Submit,
    History(HistoryStep),
    AcceptHint,
    /// Ctrl+C
    Interrupt,
    /// Ctrl+L
    ClearScreen,
    Dismiss,
    /// Typing; only ends a Tab cycle.
    Edit,
}

impl KeyAction {
    pub fn from_key(key: &str, ctrl: bool) -> Self {
        match (key, ctrl) {
            ("c", true) => Self::Interrupt,
            ("l", true) => Self::ClearScreen,
            ("Tab", _) => Self::Complete,
            ("Enter", _) => Self::Submit,
            ("ArrowUp", _) => Self::History(HistoryStep::Prev),
            ("ArrowDown", _) => Self::History(HistoryStep::Next),
            ("ArrowRight", _) => Self::AcceptHint,
            ("Escape", _) => Self::Dismiss,
            _ => Self::Edit,
        }
    }

    /// Whether the browser's default handling must be suppressed.
    pub fn overrides_browser(self) -> bool {
        matches!(
            self,
            Self::Complete | Self::History(_) | Self::ClearScreen
        )
    }
}

/// Candidates of an ambiguous completion, stepped through with Tab.
///
/// Each candidate replaces the word fragment after `stem`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TabCycle {
    stem: String,
    candidates: Vec<String>,
    selected: Option<usize>,
}

impl TabCycle {
    pub fn new(common: &str, candidates: Vec<String>) -> Self {
        Self {
            stem: completion_stem(common).to_string(),
            candidates,
            selected: None,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.candidates.is_empty()
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Select the next candidate, wrapping, and return the completed line.
    pub fn advance(&mut self) -> Option<String> {
        if self.candidates.is_empty() {
            return None;
        }
        let next = self
            .selected
            .map_or(0, |idx| (idx + 1) % self.candidates.len());
        self.selected = Some(next);
        Some(format!("{}{}", self.stem, self.candidates[next]))
    }
}

/// Part of a completion base that stays fixed while cycling.
///
/// Matches replace the word fragment after the last space or slash, so
/// `cd projects/A` keeps `cd projects/` and `help t` keeps `help `.
pub fn completion_stem(base: &str) -> &str {
    match base.rfind([' ', '/']) {
        Some(idx) => &base[..=idx],
        None => "",
    }
}

/// Apply one Tab press to `line` and return the replacement line, if any.
///
/// A running cycle advances; otherwise `lookup` is asked for completions.
/// An ambiguous result first fills in the common prefix when that grows
/// the line, and starts cycling through the candidates otherwise.
pub fn complete_line(
    line: &str,
    cycle: &mut TabCycle,
    lookup: impl FnOnce(&str) -> AutocompleteResult,
) -> Option<String> {
    if cycle.is_active() {
        return cycle.advance();
    }
    if line.is_empty() {
        return None;
    }

    match lookup(line) {
        AutocompleteResult::Single(completed) => Some(completed),
        AutocompleteResult::Multiple(common, candidates) => {
            *cycle = TabCycle::new(&common, candidates);
            if common.len() > line.len() {
                Some(common)
            } else {
                cycle.advance()
            }
        }
        AutocompleteResult::None => None,
    }
}

/// The line with its ghost hint appended, when the cursor sits at the end.
pub fn accept_hint(line: &str, cursor: usize, hint: Option<&str>) -> Option<String> {
    let hint = hint.filter(|h| !h.is_empty())?;
    (cursor == line.len()).then(|| format!("{}{}", line, hint))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multiple(common: &str, names: &[&str]) -> AutocompleteResult {
        AutocompleteResult::Multiple(
            common.to_string(),
            names.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(KeyAction::from_key("c", true), KeyAction::Interrupt);
        assert_eq!(KeyAction::from_key("c", false), KeyAction::Edit);
        assert_eq!(KeyAction::from_key("l", true), KeyAction::ClearScreen);
        assert_eq!(
            KeyAction::from_key("ArrowUp", false),
            KeyAction::History(HistoryStep::Prev)
        );
        assert_eq!(KeyAction::from_key("Tab", false), KeyAction::Complete);
        assert!(KeyAction::Complete.overrides_browser());
        assert!(!KeyAction::Interrupt.overrides_browser());
        assert!(!KeyAction::AcceptHint.overrides_browser());
    }

    #[test]
    fn test_completion_stem() {
        assert_eq!(completion_stem("c"), "");
        assert_eq!(completion_stem("help t"), "help ");
        assert_eq!(completion_stem("cd projects/A"), "cd projects/");
        assert_eq!(completion_stem("ls -la /ho"), "ls -la /");
    }

    #[test]
    fn test_single_completion() {
        let mut cycle = TabCycle::default();
        let line = complete_line("pw", &mut cycle, |_| {
            AutocompleteResult::Single("pwd ".to_string())
        });
        assert_eq!(line.as_deref(), Some("pwd "));
        assert!(!cycle.is_active());
    }

    #[test]
    fn test_common_prefix_then_cycle() {
        let mut cycle = TabCycle::default();
        let first = complete_line("cd projects/A", &mut cycle, |_| {
            multiple("cd projects/Air", &["AirDnD/", "Airship/"])
        });
        assert_eq!(first.as_deref(), Some("cd projects/Air"));
        assert_eq!(cycle.selected(), None);

        let lookup_unused = |_: &str| -> AutocompleteResult { panic!("cycle should advance") };
        assert_eq!(
            complete_line("cd projects/Air", &mut cycle, lookup_unused).as_deref(),
            Some("cd projects/AirDnD/")
        );
        assert_eq!(
            complete_line("cd projects/AirDnD/", &mut cycle, lookup_unused).as_deref(),
            Some("cd projects/Airship/")
        );
        assert_eq!(
            complete_line("cd projects/Airship/", &mut cycle, lookup_unused).as_deref(),
            Some("cd projects/AirDnD/")
        );
    }

    #[test]
    fn test_cycle_starts_when_prefix_does_not_grow() {
        let mut cycle = TabCycle::default();
        let line = complete_line("c", &mut cycle, |_| multiple("c", &["cat", "cd", "clear"]));
        assert_eq!(line.as_deref(), Some("cat"));
        assert_eq!(cycle.selected(), Some(0));
        assert_eq!(cycle.candidates().len(), 3);
    }

    #[test]
    fn test_nothing_to_complete() {
        let mut cycle = TabCycle::default();
        assert_eq!(complete_line("", &mut cycle, |_| multiple("", &["ls"])), None);
        assert_eq!(
            complete_line("zz", &mut cycle, |_| AutocompleteResult::None),
            None
        );
        assert!(!cycle.is_active());
    }

    #[test]
    fn test_accept_hint() {
        assert_eq!(accept_hint("he", 2, Some("lp")).as_deref(), Some("help"));
        assert_eq!(accept_hint("he", 1, Some("lp")), None);
        assert_eq!(accept_hint("he", 2, Some("")), None);
        assert_eq!(accept_hint("he", 2, None), None);
    }
}
