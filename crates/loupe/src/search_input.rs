//! Search input component
//!
//! A controlled text input with a filtering dropdown attached. The host owns
//! the text value and passes it down each render; the widget keeps only the
//! derived state (filtered list, chosen option, dropdown visibility) in a
//! [`SearchState`] and updates it through the event handlers below.

use std::time::Duration;

use dioxus::prelude::*;

use crate::icons::{ClearIcon, SearchIcon};
use crate::options::SearchOption;
use crate::state::SearchState;

/// Delay before the dropdown opens after focus and closes after blur.
///
/// The close delay keeps the dropdown alive long enough for a click on an
/// option row (which blurs the input) to land as a selection; the open delay
/// gives any entry animation time to finish before content appears. The two
/// timers are one-shot and independent, so rapid focus/blur cycling can let
/// a stale close fire after a later focus.
const DROPDOWN_DELAY: Duration = Duration::from_millis(100);

/// Cosmetic default styles for the widget, keyed to the `loupe-*` classes.
/// Hosts embed them with `style { "{SEARCH_INPUT_STYLES}" }` or ship their
/// own rules instead.
pub const SEARCH_INPUT_STYLES: &str = r#"
.loupe-container {
    position: relative;
    width: 260px;
    font-family: system-ui, sans-serif;
}

.loupe-field {
    position: relative;
    display: flex;
    align-items: center;
}

.loupe-icon {
    position: absolute;
    left: 10px;
    display: flex;
    fill: #9ca3af;
    pointer-events: none;
}

.loupe-clear {
    position: absolute;
    right: 6px;
    display: flex;
    border: none;
    background: transparent;
    cursor: pointer;
    fill: #9ca3af;
}

.loupe-clear:hover {
    fill: #374151;
}

.loupe-input {
    width: 100%;
    border: 1px solid #d1d5db;
    border-radius: 10px;
    padding: 10px 34px 10px 36px;
    font-size: 13px;
    background: #ffffff;
    color: #111827;
    outline: none;
}

.loupe-options {
    position: absolute;
    top: 100%;
    left: 0;
    right: 0;
    margin-top: 4px;
    border: 1px solid #d1d5db;
    border-radius: 10px;
    background: #ffffff;
    overflow: hidden;
    z-index: 10;
}

.loupe-option {
    padding: 8px 12px;
    font-size: 13px;
    cursor: pointer;
}

.loupe-option:hover {
    background: #f3f4f6;
}

.loupe-option--selected {
    background: #e5e7eb;
}

.loupe-empty {
    padding: 8px 12px;
    font-size: 13px;
    color: #6b7280;
}
"#;

/// Text input with a filtering dropdown.
///
/// `value`/`onchange` follow the controlled-input contract: the widget never
/// stores the text, it only reports new text to the host. When `options` is
/// absent the widget degrades to a plain decorated input; no dropdown is
/// ever rendered and typing still reaches `onchange`.
///
/// Caller-supplied focus/blur/change callbacks are layered under the
/// widget's own handlers: they receive the event in addition to, not
/// instead of, the internal bookkeeping.
#[component]
pub fn SearchInput(
    value: String,
    onchange: EventHandler<String>,
    options: Option<Vec<SearchOption>>,
    on_option_select: Option<EventHandler<SearchOption>>,
    onclear: Option<EventHandler<()>>,
    onfocus: Option<EventHandler<FocusEvent>>,
    onblur: Option<EventHandler<FocusEvent>>,
    #[props(default = true)] is_clearable: bool,
    #[props(default = true)] open_options_on_focus: bool,
    #[props(extends = GlobalAttributes)]
    #[props(extends = input)]
    attributes: Vec<Attribute>,
) -> Element {
    let mut state = use_signal({
        let seed = options.clone().unwrap_or_default();
        move || SearchState::new(seed)
    });

    let has_options = options.is_some();
    let input_options = options.clone();
    let clear_options = options;

    let open = state.read().is_open();
    let filtered = state.read().filtered().to_vec();
    let selected_value = state.read().selected().map(|option| option.value.clone());

    rsx! {
        div {
            class: "loupe-container",

            div {
                class: "loupe-field",

                span {
                    class: "loupe-icon",
                    SearchIcon {}
                }

                if is_clearable {
                    button {
                        class: "loupe-clear",
                        onclick: move |_| {
                            tracing::debug!("search input cleared");
                            onchange.call(String::new());
                            state
                                .write()
                                .cleared(clear_options.as_deref().unwrap_or(&[]));
                            if let Some(handler) = onclear {
                                handler.call(());
                            }
                        },
                        ClearIcon {}
                    }
                }

                input {
                    class: "loupe-input",
                    r#type: "text",
                    value: "{value}",
                    oninput: move |event: FormEvent| {
                        let text = event.value();
                        onchange.call(text.clone());
                        if let Some(options) = &input_options {
                            state.write().text_changed(options, &text);
                        }
                    },
                    onfocus: move |event: FocusEvent| {
                        if let Some(handler) = onfocus {
                            handler.call(event);
                        }
                        if open_options_on_focus {
                            spawn(async move {
                                tokio::time::sleep(DROPDOWN_DELAY).await;
                                state.write().open();
                            });
                        }
                    },
                    onblur: move |event: FocusEvent| {
                        if let Some(handler) = onblur {
                            handler.call(event);
                        }
                        spawn(async move {
                            tokio::time::sleep(DROPDOWN_DELAY).await;
                            state.write().close();
                        });
                    },
                    ..attributes,
                }
            }

            if has_options && open {
                div {
                    class: "loupe-options",

                    if filtered.is_empty() {
                        div {
                            class: "loupe-empty",
                            "No results for \"{value}\""
                        }
                    } else {
                        for option in filtered {
                            {
                                let is_selected =
                                    selected_value.as_deref() == Some(option.value.as_str());
                                let chosen = option.clone();

                                rsx! {
                                    div {
                                        key: "{option.value}",
                                        class: if is_selected {
                                            "loupe-option loupe-option--selected"
                                        } else {
                                            "loupe-option"
                                        },
                                        onclick: move |_| {
                                            tracing::debug!(label = %chosen.label, "option selected");
                                            state.write().option_chosen(chosen.clone());
                                            if let Some(handler) = on_option_select {
                                                handler.call(chosen.clone());
                                            }
                                        },
                                        "{option.label}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
