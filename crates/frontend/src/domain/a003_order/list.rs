use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::StatusBadge;
use crate::shared::data::use_dataset;
use contracts::domain::a003_order::Order;
use contracts::enums::{OrderStatus, PackageStatus};
use contracts::shared::display::{order_status_display, package_status_display};
use contracts::stats::{
    count_by, count_matching, count_stat, format_fcfa, money_stat, percent_stat, rate, sum,
    text_matches, FilterSet,
};
use leptos::prelude::*;

/// Admin order console: status rollup chips, search, and the two tracking
/// axes (order lifecycle and package status) rendered side by side.
#[component]
pub fn OrderList() -> impl IntoView {
    let dataset = use_dataset();

    let (filter_text, set_filter_text) = signal(String::new());
    // Order lifecycle code, or "all"
    let (filter_status, set_filter_status) = signal("all".to_string());

    let client_name = move |order: &Order| -> String {
        dataset
            .user_by_id(order.user_ref)
            .map(|u| u.name.clone())
            .unwrap_or_else(|| "—".to_string())
    };

    let filtered_items = move || {
        let query = filter_text.get();
        let status = filter_status.get();

        let filtered = FilterSet::new()
            .when(!query.trim().is_empty(), |o: &Order| {
                text_matches(
                    &query,
                    &[&o.tracking_number, &client_name(o), &o.to_string_id()],
                )
            })
            .when(status != "all", |o: &Order| o.status.code() == status)
            .filter(&dataset.orders);
        filtered
    };

    // Rollup over the unfiltered collection, in first-seen order
    let status_counts = move || count_by(&dataset.orders, |o: &Order| o.status);

    let stats_row = move || {
        let items = filtered_items();
        let delivered =
            count_matching(&items, |o: &Order| o.status == OrderStatus::Delivered);
        let arrived = count_matching(&items, |o: &Order| {
            o.package_status == PackageStatus::ReceivedAbidjan
        });
        vec![
            count_stat("Commandes", items.len()),
            money_stat("Montant total", sum(&items, |o: &Order| o.total), None),
            money_stat("Acomptes dus", sum(&items, |o: &Order| o.deposit_due()), None),
            percent_stat("Taux de livraison", rate(delivered, items.len())),
            count_stat("Arrivées à Abidjan", arrived),
        ]
    };

    view! {
        <div class="page page--orders">
            <div class="page-header">
                <h1 class="page-header__title">"Commandes"</h1>
            </div>

            <div class="stat-card-grid">
                {move || {
                    stats_row()
                        .into_iter()
                        .map(|stat| view! { <StatCard stat=stat /> })
                        .collect_view()
                }}
            </div>

            <div class="status-chips">
                <button
                    class=move || {
                        if filter_status.get() == "all" {
                            "status-chip status-chip--active"
                        } else {
                            "status-chip"
                        }
                    }
                    on:click=move |_| set_filter_status.set("all".to_string())
                >
                    "Toutes (" {move || dataset.orders.len()} ")"
                </button>
                {move || {
                    status_counts()
                        .into_iter()
                        .map(|(status, count)| {
                            let code = status.code();
                            view! {
                                <button
                                    class=move || {
                                        if filter_status.get() == code {
                                            "status-chip status-chip--active"
                                        } else {
                                            "status-chip"
                                        }
                                    }
                                    on:click=move |_| set_filter_status.set(code.to_string())
                                >
                                    {status.label()} " (" {count} ")"
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <div class="filter-bar">
                <input
                    class="form-input"
                    type="text"
                    placeholder="N° de suivi, client..."
                    prop:value=filter_text
                    on:input=move |ev| set_filter_text.set(event_target_value(&ev))
                />
            </div>

            {move || {
                let items = filtered_items();
                if items.is_empty() {
                    view! { <EmptyState /> }.into_any()
                } else {
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"N° de suivi"</th>
                                    <th>"Client"</th>
                                    <th>"Date"</th>
                                    <th class="data-table__num">"Articles"</th>
                                    <th class="data-table__num">"Total"</th>
                                    <th class="data-table__num">"Acompte (50%)"</th>
                                    <th>"Statut"</th>
                                    <th>"Colis"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {items
                                    .into_iter()
                                    .map(|o| {
                                        let line_count: u32 =
                                            o.lines.iter().map(|l| l.quantity).sum();
                                        view! {
                                            <tr>
                                                <td>{o.tracking_number.clone()}</td>
                                                <td>{client_name(&o)}</td>
                                                <td>
                                                    {o.created_at.format("%d/%m/%Y").to_string()}
                                                </td>
                                                <td class="data-table__num">{line_count}</td>
                                                <td class="data-table__num">
                                                    {format_fcfa(o.total)}
                                                </td>
                                                <td class="data-table__num">
                                                    {format_fcfa(o.deposit_due())}
                                                </td>
                                                <td>
                                                    <StatusBadge display=order_status_display(
                                                        o.status.code(),
                                                    ) />
                                                </td>
                                                <td>
                                                    <StatusBadge display=package_status_display(
                                                        o.package_status.code(),
                                                    ) />
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
