//! Expanded-mode renderer: a horizontal strip of tab buttons.

use crate::descriptor::TabDescriptor;
use crate::view_model::ResponsiveTabsVm;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor, Button, ButtonAppearance, ButtonSize, Flex, FlexGap};

/// One button per descriptor, in supplied order.
///
/// Every button carries both label variants; the stylesheet's width classes
/// decide which span is visible, so no pixel measurement happens here.
#[component]
pub fn TabStrip(
    #[prop(into)] tabs: Signal<Vec<TabDescriptor>>,
    vm: ResponsiveTabsVm,
    show_counts: bool,
) -> impl IntoView {
    view! {
        <div class="responsive-tabs__strip">
            <Flex gap=FlexGap::Small>
                <For
                    each=move || tabs.get()
                    key=|tab| tab.id.clone()
                    children=move |tab: TabDescriptor| {
                        let badge = tab.badge(show_counts);
                        let short = tab.short_or_label().to_string();
                        let label = tab.label.clone();
                        let appearance_id = tab.id.clone();
                        let badge_id = tab.id.clone();
                        let select_id = tab.id.clone();
                        view! {
                            <Button
                                appearance=Signal::derive(move || if vm.is_active(&appearance_id) {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Subtle
                                })
                                size=ButtonSize::Small
                                on_click=move |_| vm.select(select_id.clone())
                            >
                                <span class="responsive-tabs__label responsive-tabs__label--short">
                                    {short}
                                </span>
                                <span class="responsive-tabs__label responsive-tabs__label--full">
                                    {label}
                                </span>
                                {badge.map(|count| view! {
                                    <Badge
                                        appearance=BadgeAppearance::Tint
                                        color=Signal::derive(move || if vm.is_active(&badge_id) {
                                            BadgeColor::Brand
                                        } else {
                                            BadgeColor::Informative
                                        })
                                        attr:style="margin-left: 6px;"
                                    >
                                        {count.to_string()}
                                    </Badge>
                                })}
                            </Button>
                        }
                    }
                />
            </Flex>
        </div>
    }
}
