use leptos::prelude::*;

/// Labelled figure above the report tables
#[component]
pub fn StatCard(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] accent: Option<&'static str>,
) -> impl IntoView {
    let class = match accent {
        Some(accent) => format!("stat-card stat-card--{}", accent),
        None => "stat-card".to_string(),
    };

    view! {
        <div class=class>
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">{move || value.get()}</div>
        </div>
    }
}
