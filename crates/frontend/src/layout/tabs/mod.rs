//! Admin console tabs
//!
//! - `registry` maps each tab to its view

pub mod registry;

use leptos::prelude::*;

use self::registry::{render_tab_content, AdminTab};

/// Tab strip plus the content of every visited tab
///
/// A tab is rendered the first time it is opened and then only hidden, so
/// switching back does not refetch its data.
#[component]
pub fn AdminTabs() -> impl IntoView {
    let active = RwSignal::new(AdminTab::Products);
    let visited = RwSignal::new(vec![AdminTab::Products]);

    let open = move |tab: AdminTab| {
        visited.update(|v| {
            if !v.contains(&tab) {
                v.push(tab);
            }
        });
        active.set(tab);
    };

    view! {
        <div class="tabs">
            <nav class="tabs__bar">
                {AdminTab::ALL.into_iter().map(|tab| view! {
                    <button
                        class="tabs__button"
                        class=("tabs__button--active", move || active.get() == tab)
                        on:click=move |_| open(tab)
                    >
                        {tab.title()}
                    </button>
                }).collect_view()}
            </nav>
            <For
                each=move || visited.get()
                key=|tab| *tab
                children=move |tab| view! {
                    <div class="tabs__item" class=("tabs__item--hidden", move || active.get() != tab)>
                        {render_tab_content(tab)}
                    </div>
                }
            />
        </div>
    }
}
