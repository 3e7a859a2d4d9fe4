//! Option filtering

use crate::options::SearchOption;

/// Keep the options whose label contains `query`, case-insensitively.
///
/// The result preserves the relative order of the input. An empty query
/// keeps every option; a query that matches nothing returns an empty vec,
/// which the widget renders as a single "no results" row.
///
/// Linear scan over the option set. Fine for the small in-memory lists
/// this widget is meant for; there is no indexing or debouncing.
#[must_use]
pub fn filter_options(options: &[SearchOption], query: &str) -> Vec<SearchOption> {
    let query = query.to_lowercase();
    options
        .iter()
        .filter(|option| option.label.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fixture() -> Vec<SearchOption> {
        vec![
            SearchOption::new("Alpha", "a"),
            SearchOption::new("Rambo", "r"),
            SearchOption::new("Bond", "b"),
        ]
    }

    #[test]
    fn empty_query_keeps_everything() {
        let options = fixture();
        assert_eq!(filter_options(&options, ""), options);
    }

    #[test]
    fn matches_are_case_insensitive() {
        let filtered = filter_options(&fixture(), "Bo");
        assert_eq!(
            filtered,
            vec![
                SearchOption::new("Rambo", "r"),
                SearchOption::new("Bond", "b"),
            ]
        );
    }

    #[test]
    fn result_preserves_input_order() {
        let filtered = filter_options(&fixture(), "a");
        assert_eq!(
            filtered,
            vec![
                SearchOption::new("Alpha", "a"),
                SearchOption::new("Rambo", "r"),
            ]
        );
    }

    #[test]
    fn no_match_returns_empty() {
        assert_eq!(filter_options(&fixture(), "zebra"), vec![]);
    }

    #[test]
    fn empty_option_set_stays_empty() {
        assert_eq!(filter_options(&[], "anything"), vec![]);
    }

    #[test]
    fn every_result_contains_the_query() {
        let query = "oN";
        for option in filter_options(&fixture(), query) {
            assert!(option.label.to_lowercase().contains(&query.to_lowercase()));
        }
    }
}
