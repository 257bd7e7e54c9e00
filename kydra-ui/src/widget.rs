//! What a widget did with an event.

/// Result of a widget handling an input event.
///
/// Hosts use this to decide whether to stop propagating the event and
/// whether to rebuild the element tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetResult {
    /// Event was not handled by this widget.
    #[default]
    Ignored,
    /// Event was handled but nothing visible changed beyond transient state.
    Handled,
    /// A button-like element was activated and its callback ran.
    Activated,
    /// Widget value or view state changed (text, selection, page).
    Changed,
    /// Table sort key or direction changed.
    Sorted,
    /// A popup was opened.
    Opened,
    /// A popup was closed.
    Closed,
}

impl WidgetResult {
    /// Check if the event was handled (not Ignored).
    pub fn is_handled(&self) -> bool {
        !matches!(self, WidgetResult::Ignored)
    }
}
