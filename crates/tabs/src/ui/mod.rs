//! The ResponsiveTabs component: mode decision plus content routing.

pub mod dropdown;
pub mod strip;

pub use dropdown::TabDropdown;
pub use strip::TabStrip;

use crate::descriptor::{active_descriptor, TabDescriptor};
use crate::mode::{presentation_mode, PresentationMode, DEFAULT_COLLAPSE_THRESHOLD};
use crate::view_model::ResponsiveTabsVm;
use crate::viewport::{use_narrow_signal, BrowserViewport, ViewportHost};
use leptos::prelude::*;
use std::rc::Rc;

/// Tab navigation that adapts to viewport width: a horizontal strip of
/// buttons on wide viewports, a dropdown selector on narrow ones once the
/// tab count exceeds `mobile_breakpoint`. The content pane of the active
/// tab renders below the navigation.
#[component]
pub fn ResponsiveTabs(
    /// Ordered tab set. Ids must be unique within the set.
    #[prop(into)]
    tabs: Signal<Vec<TabDescriptor>>,
    /// Initially active id; falls back to the first tab when empty or absent.
    #[prop(optional, into)]
    default_tab: Option<String>,
    /// Invoked with the new id on every selection.
    #[prop(optional)]
    on_tab_change: Option<Callback<String>>,
    /// Gates all count badges.
    #[prop(default = true)]
    show_counts: bool,
    /// Tab-count threshold for collapsing on narrow viewports.
    #[prop(default = DEFAULT_COLLAPSE_THRESHOLD)]
    mobile_breakpoint: usize,
    /// Overrides the internally derived narrow signal for this mount.
    #[prop(optional, into)]
    is_mobile: Option<bool>,
    /// Extra classes for the root container, passed through untouched.
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Viewport capability; defaults to the browser window.
    #[prop(optional)]
    viewport: Option<Rc<dyn ViewportHost>>,
) -> impl IntoView {
    let vm = ResponsiveTabsVm::new(&tabs.get_untracked(), default_tab, on_tab_change);

    let host: Rc<dyn ViewportHost> = viewport.unwrap_or_else(|| Rc::new(BrowserViewport));
    let derived_narrow = use_narrow_signal(&*host);
    // The override takes full precedence: when present, the derived signal
    // is never read, so resize notifications have no downstream effect.
    let narrow = Signal::derive(move || is_mobile.unwrap_or_else(|| derived_narrow.get()));

    let collapsed = Signal::derive(move || {
        presentation_mode(narrow.get(), tabs.with(|tabs| tabs.len()), mobile_breakpoint)
            == PresentationMode::Collapsed
    });

    view! {
        <div class=move || format!("responsive-tabs {}", class.get().unwrap_or_default())>
            <div class="responsive-tabs__nav">
                <Show
                    when=move || collapsed.get()
                    fallback=move || view! { <TabStrip tabs=tabs vm=vm show_counts=show_counts /> }
                >
                    <TabDropdown tabs=tabs vm=vm show_counts=show_counts />
                </Show>
            </div>
            <div class="responsive-tabs__content">
                {move || {
                    let active = vm.active_tab.get();
                    tabs.with(|tabs| active_descriptor(tabs, &active).map(|tab| tab.content.run()))
                }}
            </div>
        </div>
    }
}
