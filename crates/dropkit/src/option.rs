//! Option data model for the select menu.
//!
//! A [`SelectOption`] is one selectable entry: a unique string value, a
//! display label, a disabled flag, and an optional per-option callback fired
//! in addition to the list-level change signal. [`OptionList`] owns the
//! ordered options and provides the navigation queries the widget needs.
//!
//! # Index Spaces
//!
//! The list has a single canonical index space: positions in the full,
//! original order. Keyboard navigation conceptually moves through the
//! subsequence of *enabled* options (wrapping circularly), but that
//! subsequence is computed on demand and results are always mapped back to
//! full-list indices. Nothing stores an enabled-subsequence index, so the
//! two views cannot drift.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Callback invoked with the committed option's value.
pub type SelectCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Display content for an option.
///
/// Plain text is the common case; `Custom` carries an opaque payload that
/// the core passes through to the renderer unmodified.
#[derive(Clone)]
pub enum OptionLabel {
    /// A plain text label.
    Text(String),
    /// An opaque renderable payload, interpreted only by the renderer.
    Custom(Arc<dyn Any + Send + Sync>),
}

impl OptionLabel {
    /// The label text, if this is a text label.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Custom(_) => None,
        }
    }
}

impl fmt::Debug for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// One selectable entry in a select menu.
///
/// # Duplicate Values
///
/// Option values are expected to be unique within a list. Duplicates are not
/// rejected; every lookup by value in [`OptionList`] resolves to the **last**
/// matching index, and keyboard-focus mapping over a list with duplicates is
/// not otherwise defined.
#[derive(Clone)]
pub struct SelectOption {
    value: String,
    label: OptionLabel,
    disabled: bool,
    on_select: Option<SelectCallback>,
}

impl SelectOption {
    /// Create an option whose label shows the given text.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: OptionLabel::Text(label.into()),
            disabled: false,
            on_select: None,
        }
    }

    /// Create an option with an opaque renderable label.
    pub fn with_custom_label(
        value: impl Into<String>,
        label: Arc<dyn Any + Send + Sync>,
    ) -> Self {
        Self {
            value: value.into(),
            label: OptionLabel::Custom(label),
            disabled: false,
            on_select: None,
        }
    }

    /// Set the disabled flag using the builder pattern.
    ///
    /// Disabled options are excluded from pointer/keyboard selection and
    /// from focus traversal.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Attach a per-option callback, invoked after the list-level change
    /// signal when this option is committed.
    pub fn with_on_select<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_select = Some(Arc::new(callback));
        self
    }

    /// The option's unique value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The option's display label.
    pub fn label(&self) -> &OptionLabel {
        &self.label
    }

    /// Whether this option is excluded from selection and focus traversal.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Invoke the per-option callback, if one is attached.
    pub(crate) fn notify_selected(&self) {
        if let Some(callback) = &self.on_select {
            callback(&self.value);
        }
    }
}

impl fmt::Debug for SelectOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectOption")
            .field("value", &self.value)
            .field("label", &self.label)
            .field("disabled", &self.disabled)
            .field("on_select", &self.on_select.is_some())
            .finish()
    }
}

/// An ordered list of options with enabled-subsequence navigation.
#[derive(Debug, Clone, Default)]
pub struct OptionList {
    options: Vec<SelectOption>,
}

impl OptionList {
    /// Create a list from the given options, preserving order.
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self { options }
    }

    /// Create an empty list.
    pub fn empty() -> Self {
        Self {
            options: Vec::new(),
        }
    }

    /// Number of options, disabled ones included.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Check whether the list has no options at all.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Get the option at a full-list index.
    pub fn get(&self, index: usize) -> Option<&SelectOption> {
        self.options.get(index)
    }

    /// Iterate over all options in order.
    pub fn iter(&self) -> impl Iterator<Item = &SelectOption> {
        self.options.iter()
    }

    /// Check whether at least one option is enabled.
    pub fn has_enabled(&self) -> bool {
        self.options.iter().any(|o| !o.is_disabled())
    }

    /// Full-list index of the first enabled option.
    pub fn first_enabled(&self) -> Option<usize> {
        self.options.iter().position(|o| !o.is_disabled())
    }

    /// Full-list index of the last enabled option.
    pub fn last_enabled(&self) -> Option<usize> {
        self.options.iter().rposition(|o| !o.is_disabled())
    }

    /// Full-list index of the enabled option after `current`, wrapping past
    /// the last enabled option to the first.
    ///
    /// `current` is a full-list index and is expected to refer to an enabled
    /// option; if it does not, navigation restarts at the first enabled
    /// option. Returns `None` when no option is enabled.
    pub fn next_enabled(&self, current: usize) -> Option<usize> {
        let enabled = self.enabled_indices();
        if enabled.is_empty() {
            return None;
        }
        match enabled.iter().position(|&i| i == current) {
            Some(pos) => Some(enabled[(pos + 1) % enabled.len()]),
            None => Some(enabled[0]),
        }
    }

    /// Full-list index of the enabled option before `current`, wrapping past
    /// the first enabled option to the last.
    ///
    /// Same conventions as [`next_enabled`](Self::next_enabled).
    pub fn previous_enabled(&self, current: usize) -> Option<usize> {
        let enabled = self.enabled_indices();
        if enabled.is_empty() {
            return None;
        }
        match enabled.iter().position(|&i| i == current) {
            Some(pos) => Some(enabled[(pos + enabled.len() - 1) % enabled.len()]),
            None => Some(enabled[enabled.len() - 1]),
        }
    }

    /// Full-list index of the option with the given value.
    ///
    /// With duplicate values, the last match wins.
    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.options.iter().rposition(|o| o.value() == value)
    }

    /// Full-list index of the *enabled* option with the given value.
    ///
    /// With duplicate values, the last enabled match wins. This is the
    /// lookup the initial-focus rule uses, so a selected-but-disabled option
    /// never receives keyboard focus.
    pub fn enabled_index_of(&self, value: &str) -> Option<usize> {
        self.options
            .iter()
            .rposition(|o| !o.is_disabled() && o.value() == value)
    }

    fn enabled_indices(&self) -> Vec<usize> {
        self.options
            .iter()
            .enumerate()
            .filter(|(_, o)| !o.is_disabled())
            .map(|(i, _)| i)
            .collect()
    }
}

impl From<Vec<SelectOption>> for OptionList {
    fn from(options: Vec<SelectOption>) -> Self {
        Self::new(options)
    }
}

impl FromIterator<SelectOption> for OptionList {
    fn from_iter<T: IntoIterator<Item = SelectOption>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
