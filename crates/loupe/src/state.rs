//! Widget-local interaction state
//!
//! The input text itself is caller-owned (controlled input); everything the
//! widget tracks on its own — the filtered list, the last-chosen option and
//! dropdown visibility — lives here and is re-derivable from props plus the
//! event transitions below. Keeping it in one pure container lets the whole
//! interaction flow be tested without a renderer.

use crate::filter::filter_options;
use crate::options::SearchOption;

/// Dropdown visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dropdown {
    Closed,
    Open,
}

/// Transient state of one mounted search input.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    filtered: Vec<SearchOption>,
    selected: Option<SearchOption>,
    dropdown: Dropdown,
}

impl SearchState {
    /// Fresh state for a newly mounted widget, seeded with the full option
    /// set (what an empty query filters to).
    #[must_use]
    pub fn new(options: Vec<SearchOption>) -> Self {
        Self {
            filtered: options,
            selected: None,
            dropdown: Dropdown::Closed,
        }
    }

    #[must_use]
    pub fn filtered(&self) -> &[SearchOption] {
        &self.filtered
    }

    #[must_use]
    pub fn selected(&self) -> Option<&SearchOption> {
        self.selected.as_ref()
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.dropdown, Dropdown::Open)
    }

    /// Whether `option` is the currently chosen one, judged by `value`.
    #[must_use]
    pub fn is_selected(&self, option: &SearchOption) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|selected| selected.value == option.value)
    }

    /// Text change transition: refilter against the full option set; an
    /// empty text additionally drops the selection. Visibility is untouched,
    /// that is driven only by focus and blur.
    pub fn text_changed(&mut self, options: &[SearchOption], text: &str) {
        self.filtered = filter_options(options, text);
        if text.is_empty() {
            self.selected = None;
        }
    }

    /// Option click transition: remember the choice. The dropdown stays
    /// open; closing is left to the blur timer.
    pub fn option_chosen(&mut self, option: SearchOption) {
        self.selected = Some(option);
    }

    /// Clear transition: restore the full option set and drop the selection.
    pub fn cleared(&mut self, options: &[SearchOption]) {
        self.filtered = options.to_vec();
        self.selected = None;
    }

    pub fn open(&mut self) {
        self.dropdown = Dropdown::Open;
    }

    pub fn close(&mut self) {
        self.dropdown = Dropdown::Closed;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn options() -> Vec<SearchOption> {
        vec![
            SearchOption::new("Option 1", "option-1"),
            SearchOption::new("Option 2", "option-2"),
            SearchOption::new("Option 3", "option-3"),
        ]
    }

    #[test]
    fn starts_closed_with_full_list_and_no_selection() {
        let state = SearchState::new(options());
        assert_eq!(state.filtered(), options());
        assert_eq!(state.selected(), None);
        assert!(!state.is_open());
    }

    #[test]
    fn text_change_refilters() {
        let opts = options();
        let mut state = SearchState::new(opts.clone());
        state.text_changed(&opts, "2");
        assert_eq!(state.filtered(), vec![SearchOption::new("Option 2", "option-2")]);

        // A broader query filters from the full set again, not from the
        // previous result.
        state.text_changed(&opts, "option");
        assert_eq!(state.filtered(), opts);
    }

    #[test]
    fn empty_text_clears_selection() {
        let opts = options();
        let mut state = SearchState::new(opts.clone());
        state.option_chosen(opts[0].clone());
        state.text_changed(&opts, "");
        assert_eq!(state.selected(), None);
        assert_eq!(state.filtered(), opts);
    }

    #[test]
    fn nonempty_text_keeps_selection() {
        let opts = options();
        let mut state = SearchState::new(opts.clone());
        state.option_chosen(opts[0].clone());
        state.text_changed(&opts, "option");
        assert_eq!(state.selected(), Some(&opts[0]));
    }

    #[test]
    fn choosing_an_option_marks_only_that_row() {
        let opts = options();
        let mut state = SearchState::new(opts.clone());

        state.option_chosen(opts[0].clone());
        assert!(state.is_selected(&opts[0]));
        assert!(!state.is_selected(&opts[1]));

        // Choosing another option moves the highlight.
        state.option_chosen(opts[1].clone());
        assert!(!state.is_selected(&opts[0]));
        assert!(state.is_selected(&opts[1]));
    }

    #[test]
    fn duplicate_values_highlight_ambiguously() {
        let twins = vec![
            SearchOption::new("First", "dup"),
            SearchOption::new("Second", "dup"),
        ];
        let mut state = SearchState::new(twins.clone());
        state.option_chosen(twins[0].clone());
        // Both rows match by value; accepted degradation, not an error.
        assert!(state.is_selected(&twins[0]));
        assert!(state.is_selected(&twins[1]));
    }

    #[test]
    fn clear_resets_list_and_selection() {
        let opts = options();
        let mut state = SearchState::new(opts.clone());
        state.text_changed(&opts, "3");
        state.option_chosen(opts[2].clone());

        state.cleared(&opts);
        assert_eq!(state.filtered(), opts);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn open_and_close_toggle_visibility() {
        let mut state = SearchState::new(options());
        state.open();
        assert!(state.is_open());
        state.close();
        assert!(!state.is_open());
    }

    #[test]
    fn no_match_leaves_empty_filtered_list() {
        let opts = options();
        let mut state = SearchState::new(opts.clone());
        state.text_changed(&opts, "nothing matches this");
        assert_eq!(state.filtered(), Vec::<SearchOption>::new());
    }
}
