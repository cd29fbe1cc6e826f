use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::stat_card::StatCard;
use crate::shared::data::use_dataset;
use contracts::domain::a006_financial_period::FinancialPeriod;
use contracts::stats::{
    count_stat, format_fcfa, format_signed_percent, growth, money_stat, StatValue,
};
use leptos::prelude::*;

/// Stat cards for the latest period, each compared to the one before it.
fn period_cards(current: &FinancialPeriod, previous: Option<&FinancialPeriod>) -> Vec<StatValue> {
    vec![
        money_stat(
            "Revenu total",
            current.total_revenue,
            previous.map(|p| p.total_revenue),
        ),
        money_stat(
            "Commissions",
            current.commissions,
            previous.map(|p| p.commissions),
        ),
        money_stat(
            "Logistique",
            current.logistics,
            previous.map(|p| p.logistics),
        ),
        money_stat(
            "Abonnements",
            current.subscriptions,
            previous.map(|p| p.subscriptions),
        ),
        money_stat(
            "Conciergerie",
            current.concierge,
            previous.map(|p| p.concierge),
        ),
        count_stat("Commandes", current.order_count as usize),
        money_stat(
            "Panier moyen",
            current.average_order_value,
            previous.map(|p| p.average_order_value),
        ),
    ]
}

/// Finance dashboard over the labelled revenue periods. The collection is
/// static for the session, so everything renders once.
#[component]
pub fn FinanceDashboard() -> impl IntoView {
    let dataset = use_dataset();
    let periods = &dataset.periods;

    let Some(current) = periods.last() else {
        return view! {
            <div class="page page--finance">
                <div class="page-header">
                    <h1 class="page-header__title">"Finances"</h1>
                </div>
                <EmptyState message="Aucune période financière disponible" />
            </div>
        }
        .into_any();
    };

    let previous = periods.len().checked_sub(2).and_then(|i| periods.get(i));

    let cards = period_cards(current, previous);

    // Per-row growth of total revenue vs the preceding period
    let rows = periods
        .iter()
        .enumerate()
        .map(|(i, period)| {
            let growth_cell = if i == 0 {
                "—".to_string()
            } else {
                format_signed_percent(growth(period.total_revenue, periods[i - 1].total_revenue))
            };
            view! {
                <tr>
                    <td>{period.label.clone()}</td>
                    <td class="data-table__num">{format_fcfa(period.commissions)}</td>
                    <td class="data-table__num">{format_fcfa(period.logistics)}</td>
                    <td class="data-table__num">{format_fcfa(period.subscriptions)}</td>
                    <td class="data-table__num">{format_fcfa(period.concierge)}</td>
                    <td class="data-table__num">{format_fcfa(period.total_revenue)}</td>
                    <td class="data-table__num">{period.order_count}</td>
                    <td class="data-table__num">{format_fcfa(period.average_order_value)}</td>
                    <td class="data-table__num">{growth_cell}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="page page--finance">
            <div class="page-header">
                <h1 class="page-header__title">"Finances"</h1>
                <span class="page-header__subtitle">
                    "Période courante : " {current.label.clone()}
                </span>
            </div>

            <div class="stat-card-grid">
                {cards
                    .into_iter()
                    .map(|stat| view! { <StatCard stat=stat /> })
                    .collect_view()}
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Période"</th>
                        <th class="data-table__num">"Commissions"</th>
                        <th class="data-table__num">"Logistique"</th>
                        <th class="data-table__num">"Abonnements"</th>
                        <th class="data-table__num">"Conciergerie"</th>
                        <th class="data-table__num">"Revenu total"</th>
                        <th class="data-table__num">"Commandes"</th>
                        <th class="data-table__num">"Panier moyen"</th>
                        <th class="data-table__num">"Croissance"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
    .into_any()
}
