//! Option model

use serde::{Deserialize, Serialize};

/// One selectable item offered by the dropdown.
///
/// The caller supplies these as an ordered sequence. `value` is assumed
/// unique within one set; it identifies the option for selection
/// highlighting and serves as the rendering key. Duplicate values are not
/// rejected, they just make the highlight ambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOption {
    /// Text shown in the dropdown row and matched against the query
    pub label: String,
    /// Opaque identity the host application cares about
    pub value: String,
}

impl SearchOption {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}
