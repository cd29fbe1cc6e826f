use contracts::shared::display::Severity;
use contracts::stats::StatValue;
use leptos::prelude::*;

/// Card rendering one display-ready [`StatValue`]. The enclosing view
/// recomputes on every filter change, so the props are plain values.
#[component]
pub fn StatCard(stat: StatValue) -> impl IntoView {
    let status_class = match stat.severity {
        Severity::Success => "stat-card stat-card--success",
        Severity::Error => "stat-card stat-card--error",
        Severity::Warning => "stat-card stat-card--warning",
        Severity::Info | Severity::Neutral => "stat-card",
    };

    let change_view = stat.change_percent.map(|pct| {
        let (arrow, cls) = if pct > 0.5 {
            ("\u{2191}", "stat-card__change stat-card__change--up")
        } else if pct < -0.5 {
            ("\u{2193}", "stat-card__change stat-card__change--down")
        } else {
            ("", "stat-card__change stat-card__change--flat")
        };
        let text = format!("{}{:.1}%", arrow, pct.abs());
        view! { <span class=cls>{text}</span> }
    });

    view! {
        <div class=status_class>
            <div class="stat-card__content">
                <div class="stat-card__label">{stat.label}</div>
                <div class="stat-card__value">
                    {stat.value}
                    {change_view}
                </div>
            </div>
        </div>
    }
}
