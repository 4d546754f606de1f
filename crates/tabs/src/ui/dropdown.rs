//! Collapsed-mode renderer: a single trigger plus a popup menu.

use crate::descriptor::{active_descriptor, trigger_label, TabDescriptor};
use crate::icons::icon;
use crate::view_model::ResponsiveTabsVm;
use leptos::prelude::*;

/// Trigger reflecting the active tab; activating it opens a popup with one
/// selectable item per descriptor, in supplied order.
#[component]
pub fn TabDropdown(
    #[prop(into)] tabs: Signal<Vec<TabDescriptor>>,
    vm: ResponsiveTabsVm,
    show_counts: bool,
) -> impl IntoView {
    let is_open = RwSignal::new(false);

    let toggle = move |_| {
        is_open.update(|open| *open = !*open);
    };

    let active_label = move || {
        let active = vm.active_tab.get();
        tabs.with(|tabs| trigger_label(tabs, &active))
    };

    let active_badge = move || {
        let active = vm.active_tab.get();
        tabs.with(|tabs| active_descriptor(tabs, &active).and_then(|tab| tab.badge(show_counts)))
    };

    let select_tab = move |id: String| {
        vm.select(id);
        is_open.set(false);
    };

    view! {
        <div class="responsive-tabs__dropdown">
            <button class="responsive-tabs__trigger" on:click=toggle>
                <span class="responsive-tabs__trigger-label">{active_label}</span>
                {move || active_badge().map(|count| view! {
                    <span class="responsive-tabs__badge">{count.to_string()}</span>
                })}
                {move || if is_open.get() {
                    icon("chevron-up")
                } else {
                    icon("chevron-down")
                }}
            </button>

            <Show when=move || is_open.get()>
                <div class="responsive-tabs__menu">
                    <For
                        each=move || tabs.get()
                        key=|tab| tab.id.clone()
                        children=move |tab: TabDescriptor| {
                            let badge = tab.badge(show_counts);
                            let active_id = tab.id.clone();
                            let select_id = tab.id.clone();
                            let is_active = move || vm.is_active(&active_id);
                            view! {
                                <div
                                    class="responsive-tabs__item"
                                    class:responsive-tabs__item--active=is_active
                                    on:click=move |_| select_tab(select_id.clone())
                                >
                                    <span class="responsive-tabs__item-label">
                                        {tab.label.clone()}
                                    </span>
                                    {badge.map(|count| view! {
                                        <span class="responsive-tabs__badge">{count.to_string()}</span>
                                    })}
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
