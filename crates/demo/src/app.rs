//! Demo shell mounting the responsive tab navigation with a sample tab set.

use leptos::prelude::*;
use responsive_tabs::{ResponsiveTabs, TabDescriptor};

fn demo_tabs() -> Vec<TabDescriptor> {
    vec![
        TabDescriptor::new("orders", "Orders", || view! { <p>"Orders content"</p> })
            .with_short_label("Ord")
            .with_count(12),
        TabDescriptor::new("products", "Products", || view! { <p>"Products content"</p> })
            .with_short_label("Prod")
            .with_count(248),
        TabDescriptor::new("customers", "Customers", || {
            view! { <p>"Customers content"</p> }
        })
        .with_short_label("Cust"),
        TabDescriptor::new("returns", "Returns", || view! { <p>"Returns content"</p> })
            .with_short_label("Ret")
            .with_count(0),
        TabDescriptor::new("payments", "Payments", || view! { <p>"Payments content"</p> })
            .with_short_label("Pay")
            .with_count(3),
        TabDescriptor::new("settings", "Settings", || view! { <p>"Settings content"</p> })
            .with_short_label("Set"),
    ]
}

#[component]
pub fn App() -> impl IntoView {
    let (last_selected, set_last_selected) = signal(String::new());

    view! {
        <main class="demo">
            <h1>"Responsive tabs"</h1>

            <section class="demo__section">
                <h2>"Adapts to the viewport"</h2>
                <ResponsiveTabs
                    tabs=demo_tabs()
                    default_tab="orders".to_string()
                    on_tab_change=Callback::new(move |id: String| {
                        leptos::logging::log!("demo: tab changed to '{}'", id);
                        set_last_selected.set(id);
                    })
                />
                <Show when=move || !last_selected.get().is_empty()>
                    <p class="demo__status">"Last selected: " {move || last_selected.get()}</p>
                </Show>
            </section>

            <section class="demo__section">
                <h2>"Forced mobile presentation"</h2>
                <ResponsiveTabs tabs=demo_tabs() is_mobile=true />
            </section>
        </main>
    }
}
