//! Selectable-view controller
//!
//! Generic "pick one of N named views" state, used by the section navigator,
//! the skills categories, the experience tabs, and the project filter. The
//! option set is fixed at construction; the active selection is the only
//! mutable state.

/// How many ticks the enter transition dims the incoming panel.
///
/// While the countdown runs the renderer shows the new panel dimmed, so two
/// fully-opaque panels never coexist.
pub const TRANSITION_TICKS: u8 = 3;

/// One selectable view: a unique id plus display metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOption {
    pub id: String,
    pub label: String,
    pub icon: String,
}

impl ViewOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: String::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}

/// Holds exactly one selected option among a fixed set.
///
/// `active` is always a valid index into `options`; selection of an unknown
/// id is a silent no-op, so the invariant cannot be broken from outside.
#[derive(Debug, Clone)]
pub struct SelectableView {
    options: Vec<ViewOption>,
    active: usize,
    transition: u8,
}

impl SelectableView {
    /// Create a controller over a fixed, non-empty option set. The first
    /// option starts selected.
    pub fn new(options: Vec<ViewOption>) -> Self {
        assert!(
            !options.is_empty(),
            "a selectable view requires at least one option"
        );
        Self {
            options,
            active: 0,
            transition: 0,
        }
    }

    pub fn options(&self) -> &[ViewOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        false // the constructor rejects empty option sets
    }

    /// The currently selected option. Always resolves.
    pub fn current(&self) -> &ViewOption {
        &self.options[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Select by id. Unknown ids and reselecting the current id are no-ops
    /// (no transition artifacts).
    pub fn select(&mut self, id: &str) {
        if let Some(index) = self.options.iter().position(|o| o.id == id) {
            self.select_index(index);
        }
    }

    /// Select by position. Out-of-range indices are ignored.
    pub fn select_index(&mut self, index: usize) {
        if index < self.options.len() && index != self.active {
            self.active = index;
            self.transition = TRANSITION_TICKS;
        }
    }

    /// Move selection one option forward (clamped, no wrap).
    pub fn select_next(&mut self) {
        if self.active + 1 < self.options.len() {
            self.select_index(self.active + 1);
        }
    }

    /// Move selection one option back (clamped, no wrap).
    pub fn select_prev(&mut self) {
        if self.active > 0 {
            self.select_index(self.active - 1);
        }
    }

    /// True while the enter transition is running.
    pub fn in_transition(&self) -> bool {
        self.transition > 0
    }

    /// Advance the transition countdown by one tick.
    pub fn tick(&mut self) {
        self.transition = self.transition.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> SelectableView {
        SelectableView::new(vec![
            ViewOption::new("alpha", "Alpha"),
            ViewOption::new("beta", "Beta"),
            ViewOption::new("gamma", "Gamma"),
        ])
    }

    #[test]
    fn test_defaults_to_first_option() {
        let v = view();
        assert_eq!(v.current().id, "alpha");
        assert!(!v.in_transition());
    }

    #[test]
    fn test_select_by_id() {
        let mut v = view();
        v.select("beta");
        assert_eq!(v.current().id, "beta");
        assert!(v.in_transition());
    }

    #[test]
    fn test_select_unknown_id_is_a_noop() {
        let mut v = view();
        v.select("delta");
        assert_eq!(v.current().id, "alpha");
        assert!(!v.in_transition());
    }

    #[test]
    fn test_reselecting_current_starts_no_transition() {
        let mut v = view();
        v.select("beta");
        while v.in_transition() {
            v.tick();
        }
        v.select("beta");
        assert_eq!(v.current().id, "beta");
        assert!(!v.in_transition());
    }

    #[test]
    fn test_next_prev_clamp_at_the_ends() {
        let mut v = view();
        v.select_prev();
        assert_eq!(v.active_index(), 0);
        v.select_next();
        v.select_next();
        v.select_next();
        assert_eq!(v.current().id, "gamma");
    }

    #[test]
    fn test_transition_expires_after_ticks() {
        let mut v = view();
        v.select_index(2);
        for _ in 0..TRANSITION_TICKS {
            assert!(v.in_transition());
            v.tick();
        }
        assert!(!v.in_transition());
    }

    #[test]
    #[should_panic(expected = "at least one option")]
    fn test_empty_option_set_is_rejected() {
        SelectableView::new(Vec::new());
    }
}
