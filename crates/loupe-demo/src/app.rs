//! Demo page component

use dioxus::prelude::*;

use loupe::{SearchInput, SearchOption, SEARCH_INPUT_STYLES};

/// Root component: one search input wired to a host-owned value.
#[component]
pub fn App() -> Element {
    let mut value = use_signal(String::new);

    rsx! {
        style {
            "{SEARCH_INPUT_STYLES}"
        }

        div {
            style: "padding: 40px;",

            SearchInput {
                value: value(),
                options: vec![
                    SearchOption::new("Option 1", "option-1"),
                    SearchOption::new("Option 2", "option-2"),
                    SearchOption::new("Option 3", "option-3"),
                ],
                onchange: move |text| value.set(text),
                on_option_select: move |option: SearchOption| value.set(option.label),
                placeholder: "Search google",
            }
        }
    }
}
