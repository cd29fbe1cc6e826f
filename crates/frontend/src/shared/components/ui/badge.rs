use contracts::shared::display::StatusDisplay;
use leptos::prelude::*;

/// Badge rendering a resolved [`StatusDisplay`] (label + severity).
/// Unrecognized codes arrive here already resolved to the raw value.
#[component]
pub fn StatusBadge(display: StatusDisplay) -> impl IntoView {
    let status_class = format!("badge badge--status badge--{}", display.severity.as_str());

    view! {
        <span class=status_class>
            {display.label}
        </span>
    }
}
