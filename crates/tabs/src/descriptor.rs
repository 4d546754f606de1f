//! Tab metadata supplied by the caller.

use leptos::prelude::*;

/// Trigger caption shown in collapsed mode when the active id matches no tab.
pub const FALLBACK_TRIGGER_LABEL: &str = "Select Tab";

/// One tab: a stable id, its captions, an optional count and the content pane.
///
/// The component treats the ordered set of descriptors as read-only input for
/// a render pass. Ids must be unique within one set.
#[derive(Clone)]
pub struct TabDescriptor {
    /// Unique key within one tab set.
    pub id: String,
    /// Full caption, shown at coarse widths and in the dropdown.
    pub label: String,
    /// Compact caption for fine-grained widths. Falls back to `label`.
    pub short_label: Option<String>,
    /// Count for the badge. `None` and `Some(0)` both suppress the badge.
    pub count: Option<u32>,
    /// Content pane rendered while this tab is active.
    pub content: ViewFn,
}

impl TabDescriptor {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        content: impl Into<ViewFn>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            short_label: None,
            count: None,
            content: content.into(),
        }
    }

    pub fn with_short_label(mut self, short_label: impl Into<String>) -> Self {
        self.short_label = Some(short_label.into());
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Caption for the compact label slot.
    pub fn short_or_label(&self) -> &str {
        self.short_label.as_deref().unwrap_or(&self.label)
    }

    /// Badge value, or `None` when the badge is suppressed.
    ///
    /// A present zero suppresses the badge the same way an absent count does.
    pub fn badge(&self, show_counts: bool) -> Option<u32> {
        match self.count {
            Some(count) if show_counts && count > 0 => Some(count),
            _ => None,
        }
    }
}

/// Finds the descriptor the given active id points at.
///
/// `None` when the id matches nothing, e.g. after the caller swapped the tab
/// set without updating the selection.
pub fn active_descriptor<'a>(tabs: &'a [TabDescriptor], active: &str) -> Option<&'a TabDescriptor> {
    tabs.iter().find(|tab| tab.id == active)
}

/// Caption for the collapsed-mode trigger.
pub fn trigger_label(tabs: &[TabDescriptor], active: &str) -> String {
    active_descriptor(tabs, active)
        .map(|tab| tab.label.clone())
        .unwrap_or_else(|| FALLBACK_TRIGGER_LABEL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(id: &str, label: &str) -> TabDescriptor {
        TabDescriptor::new(id, label, ViewFn::default())
    }

    #[test]
    fn test_badge_suppressed_for_zero_and_absent_counts() {
        assert_eq!(tab("x", "X").badge(true), None);
        assert_eq!(tab("x", "X").with_count(0).badge(true), None);
        assert_eq!(tab("x", "X").with_count(5).badge(true), Some(5));
    }

    #[test]
    fn test_badge_gated_by_show_counts() {
        assert_eq!(tab("x", "X").with_count(5).badge(false), None);
    }

    #[test]
    fn test_short_label_falls_back_to_label() {
        assert_eq!(tab("a", "Archive").short_or_label(), "Archive");
        assert_eq!(
            tab("a", "Archive").with_short_label("Arc").short_or_label(),
            "Arc"
        );
    }

    #[test]
    fn test_active_descriptor_lookup() {
        let tabs = vec![tab("a", "A"), tab("b", "B"), tab("c", "C")];
        assert_eq!(active_descriptor(&tabs, "b").map(|t| t.label.as_str()), Some("B"));
        // Stale id after the caller swapped the tab set: no match, no healing.
        assert!(active_descriptor(&tabs, "gone").is_none());
        assert!(active_descriptor(&tabs, "").is_none());
        assert!(active_descriptor(&[], "a").is_none());
    }

    #[test]
    fn test_trigger_label_placeholder() {
        let tabs = vec![tab("a", "Alpha")];
        assert_eq!(trigger_label(&tabs, "a"), "Alpha");
        assert_eq!(trigger_label(&tabs, "gone"), FALLBACK_TRIGGER_LABEL);
        assert_eq!(trigger_label(&[], ""), FALLBACK_TRIGGER_LABEL);
    }
}
