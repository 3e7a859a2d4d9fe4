//! loupe - a filtering search input for Dioxus
//!
//! One widget: a controlled text input with an attached dropdown that
//! filters a caller-supplied option list by case-insensitive substring
//! match. The host owns the text value; the widget owns only derived UI
//! state (filtered list, chosen option, dropdown visibility).
//!
//! ```ignore
//! use loupe::{SearchInput, SearchOption};
//!
//! rsx! {
//!     SearchInput {
//!         value: query(),
//!         options: vec![SearchOption::new("Option 1", "option-1")],
//!         onchange: move |text| query.set(text),
//!         on_option_select: move |option: SearchOption| query.set(option.label),
//!     }
//! }
//! ```

pub mod filter;
pub mod icons;
pub mod options;
pub mod search_input;
pub mod state;

pub use filter::filter_options;
pub use options::SearchOption;
pub use search_input::{SearchInput, SEARCH_INPUT_STYLES};
pub use state::SearchState;
