use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::StatusBadge;
use crate::shared::data::use_dataset;
use contracts::domain::a001_user::User;
use contracts::enums::SubscriptionTier;
use contracts::shared::display::tier_display;
use contracts::stats::{count_matching, count_stat, percent_stat, rate, text_matches, FilterSet};
use leptos::prelude::*;

/// Admin client list: search, tier filter, premium-rate stats.
/// Only accounts with the client role appear here.
#[component]
pub fn ClientList() -> impl IntoView {
    let dataset = use_dataset();

    let (filter_text, set_filter_text) = signal(String::new());
    // Subscription tier code, or "all"
    let (filter_tier, set_filter_tier) = signal("all".to_string());

    let clients = move || -> Vec<User> {
        dataset
            .users
            .iter()
            .filter(|u| u.is_client())
            .cloned()
            .collect()
    };

    let filtered_items = move || {
        let query = filter_text.get();
        let tier = filter_tier.get();

        let filtered = FilterSet::new()
            .when(!query.trim().is_empty(), |u: &User| {
                text_matches(&query, &[&u.name, &u.email, &u.to_string_id()])
            })
            .when(tier != "all", |u: &User| {
                u.subscription.map(|t| t.code() == tier).unwrap_or(false)
            })
            .filter(&clients());
        filtered
    };

    let stats_row = move || {
        let all_clients = clients();
        let premium = count_matching(&all_clients, |u: &User| u.is_premium_client());
        vec![
            count_stat("Clients", all_clients.len()),
            count_stat("Clients premium", premium),
            percent_stat("Taux premium", rate(premium, all_clients.len())),
        ]
    };

    view! {
        <div class="page page--clients">
            <div class="page-header">
                <h1 class="page-header__title">"Clients"</h1>
            </div>

            <div class="stat-card-grid">
                {move || {
                    stats_row()
                        .into_iter()
                        .map(|stat| view! { <StatCard stat=stat /> })
                        .collect_view()
                }}
            </div>

            <div class="filter-bar">
                <input
                    class="form-input"
                    type="text"
                    placeholder="Nom, email..."
                    prop:value=filter_text
                    on:input=move |ev| set_filter_text.set(event_target_value(&ev))
                />
                <select
                    class="form-select"
                    on:change=move |ev| set_filter_tier.set(event_target_value(&ev))
                >
                    <option value="all">"Tous les abonnements"</option>
                    {SubscriptionTier::all()
                        .into_iter()
                        .map(|t| view! { <option value=t.code()>{t.label()}</option> })
                        .collect_view()}
                </select>
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
                                    <th>"Nom"</th>
                                    <th>"Email"</th>
                                    <th>"Téléphone"</th>
                                    <th>"Ville"</th>
                                    <th>"Pays"</th>
                                    <th>"Abonnement"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {items
                                    .into_iter()
                                    .map(|u| {
                                        let tier_badge = u.subscription.map(|t| {
                                            view! {
                                                <StatusBadge display=tier_display(t.code()) />
                                            }
                                        });
                                        view! {
                                            <tr>
                                                <td>{u.name.clone()}</td>
                                                <td>{u.email.clone()}</td>
                                                <td>{u.phone.clone()}</td>
                                                <td>{u.city.clone()}</td>
                                                <td>{u.country.clone()}</td>
                                                <td>{tier_badge}</td>
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
