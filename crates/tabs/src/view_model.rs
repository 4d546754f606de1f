//! Active-tab state for one mounted tab set.

use crate::descriptor::TabDescriptor;
use leptos::logging::log;
use leptos::prelude::*;

/// Holds the active tab id and propagates selection changes.
///
/// Owned by exactly one mounted component instance; the signal write is what
/// re-renders dependents, and the optional external callback is notified on
/// every selection.
#[derive(Clone, Copy)]
pub struct ResponsiveTabsVm {
    /// Active tab id. Empty only when the tab set was empty at mount.
    pub active_tab: RwSignal<String>,
    on_tab_change: Option<Callback<String>>,
}

impl ResponsiveTabsVm {
    /// Creates the store with the initial selection.
    ///
    /// Policy: a non-empty `default_tab` wins, else the first descriptor's
    /// id, else the empty string.
    pub fn new(
        tabs: &[TabDescriptor],
        default_tab: Option<String>,
        on_tab_change: Option<Callback<String>>,
    ) -> Self {
        let initial = default_tab
            .filter(|id| !id.is_empty())
            .or_else(|| tabs.first().map(|tab| tab.id.clone()))
            .unwrap_or_default();
        Self {
            active_tab: RwSignal::new(initial),
            on_tab_change,
        }
    }

    /// Current active id (possibly empty).
    pub fn active(&self) -> String {
        self.active_tab.get()
    }

    /// Equality test the renderers use for the active marker.
    pub fn is_active(&self, id: &str) -> bool {
        self.active_tab.with(|active| active == id)
    }

    /// Activates the given id and notifies the external callback.
    ///
    /// The id is taken as-is; membership in the current tab set is the
    /// caller's concern. Re-selecting the active id writes and notifies
    /// again; selection is not deduplicated.
    pub fn select(&self, id: impl Into<String>) {
        let id = id.into();
        log!("responsive-tabs: select '{}'", id);
        self.active_tab.set(id.clone());
        if let Some(callback) = self.on_tab_change {
            callback.run(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn tab(id: &str) -> TabDescriptor {
        TabDescriptor::new(id, id.to_ascii_uppercase(), ViewFn::default())
    }

    fn recording_callback() -> (Callback<String>, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let callback = Callback::new(move |id: String| {
            sink.lock().unwrap().push(id);
        });
        (callback, seen)
    }

    #[test]
    fn test_initial_selection_prefers_default_tab() {
        let tabs = vec![tab("a"), tab("b")];
        let vm = ResponsiveTabsVm::new(&tabs, Some("b".to_string()), None);
        assert_eq!(vm.active(), "b");
    }

    #[test]
    fn test_initial_selection_falls_back_to_first_tab() {
        let tabs = vec![tab("a"), tab("b"), tab("c")];
        assert_eq!(ResponsiveTabsVm::new(&tabs, None, None).active(), "a");
        // An empty default is treated as absent.
        assert_eq!(
            ResponsiveTabsVm::new(&tabs, Some(String::new()), None).active(),
            "a"
        );
    }

    #[test]
    fn test_initial_selection_empty_for_empty_tab_set() {
        let vm = ResponsiveTabsVm::new(&[], None, None);
        assert_eq!(vm.active(), "");
        assert!(vm.is_active(""));
    }

    #[test]
    fn test_select_updates_and_notifies_once() {
        let tabs = vec![tab("a"), tab("b")];
        let (callback, seen) = recording_callback();
        let vm = ResponsiveTabsVm::new(&tabs, None, Some(callback));

        vm.select("b");

        assert_eq!(vm.active(), "b");
        assert!(vm.is_active("b"));
        assert!(!vm.is_active("a"));
        assert_eq!(*seen.lock().unwrap(), vec!["b".to_string()]);
    }

    #[test]
    fn test_repeated_select_notifies_every_time() {
        let tabs = vec![tab("a"), tab("b")];
        let (callback, seen) = recording_callback();
        let vm = ResponsiveTabsVm::new(&tabs, None, Some(callback));

        vm.select("b");
        vm.select("b");

        assert_eq!(vm.active(), "b");
        assert_eq!(
            *seen.lock().unwrap(),
            vec!["b".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_select_accepts_ids_outside_the_tab_set() {
        let tabs = vec![tab("a")];
        let vm = ResponsiveTabsVm::new(&tabs, None, None);
        vm.select("not-a-tab");
        assert_eq!(vm.active(), "not-a-tab");
    }
}
