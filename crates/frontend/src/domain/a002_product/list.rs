use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::stat_card::StatCard;
use crate::shared::data::use_dataset;
use crate::shared::export::{export_to_csv, CsvExportable};
use contracts::domain::a002_product::Product;
use contracts::enums::{ProductCategory, ProductOrigin};
use contracts::stats::{
    count_matching, count_stat, format_fcfa, money_stat, percent_stat, rate, sum, text_matches,
    FilterSet,
};
use leptos::prelude::*;

impl CsvExportable for Product {
    fn headers() -> Vec<&'static str> {
        vec![
            "Nom",
            "Catégorie",
            "Origine",
            "Pays",
            "Prix (FCFA)",
            "Stock",
            "Note",
            "Délai (jours)",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.category.label().to_string(),
            self.origin.label().to_string(),
            self.country.clone(),
            self.price.to_string(),
            self.stock.to_string(),
            format!("{:.1}", self.rating),
            self.delivery_days.to_string(),
        ]
    }
}

/// Storefront catalog: search + category/origin filters over the resident
/// product collection, with stock valuation stats and CSV export.
#[component]
pub fn CatalogList() -> impl IntoView {
    let dataset = use_dataset();

    // Filters ("all" / empty query = inactive)
    let (filter_text, set_filter_text) = signal(String::new());
    let (filter_category, set_filter_category) = signal("all".to_string());
    let (filter_origin, set_filter_origin) = signal("all".to_string());

    let (export_error, set_export_error) = signal(Option::<String>::None);

    // Pure derivation pipeline, recomputed on every filter change
    let filtered_items = move || {
        let query = filter_text.get();
        let category = filter_category.get();
        let origin = filter_origin.get();

        let filtered = FilterSet::new()
            .when(!query.trim().is_empty(), |p: &Product| {
                text_matches(&query, &[&p.name, &p.description, &p.country])
            })
            .when(category != "all", |p: &Product| {
                p.category.code() == category
            })
            .when(origin != "all", |p: &Product| p.origin.code() == origin)
            .filter(&dataset.products);
        filtered
    };

    let stats_row = move || {
        let items = filtered_items();
        let african = count_matching(&items, |p: &Product| p.origin == ProductOrigin::Africa);
        vec![
            count_stat("Produits", items.len()),
            money_stat(
                "Valeur du stock",
                sum(&items, |p: &Product| p.stock_value()),
                None,
            ),
            percent_stat("Origine Afrique", rate(african, items.len())),
        ]
    };

    let on_export = move |_| {
        let items = filtered_items();
        match export_to_csv(&items, "catalogue.csv") {
            Ok(()) => set_export_error.set(None),
            Err(e) => {
                log::warn!("CSV export failed: {e}");
                set_export_error.set(Some(e));
            }
        }
    };

    view! {
        <div class="page page--catalog">
            <div class="page-header">
                <h1 class="page-header__title">"Catalogue"</h1>
                <button class="btn btn--secondary" on:click=on_export>
                    "Exporter CSV"
                </button>
            </div>

            {move || {
                export_error
                    .get()
                    .map(|e| view! { <div class="alert alert--error">{e}</div> })
            }}

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
                    placeholder="Rechercher un produit..."
                    prop:value=filter_text
                    on:input=move |ev| set_filter_text.set(event_target_value(&ev))
                />
                <select
                    class="form-select"
                    on:change=move |ev| set_filter_category.set(event_target_value(&ev))
                >
                    <option value="all">"Toutes catégories"</option>
                    {ProductCategory::all()
                        .into_iter()
                        .map(|c| view! { <option value=c.code()>{c.label()}</option> })
                        .collect_view()}
                </select>
                <select
                    class="form-select"
                    on:change=move |ev| set_filter_origin.set(event_target_value(&ev))
                >
                    <option value="all">"Toutes origines"</option>
                    {ProductOrigin::all()
                        .into_iter()
                        .map(|o| view! { <option value=o.code()>{o.label()}</option> })
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
                                    <th>"Catégorie"</th>
                                    <th>"Origine"</th>
                                    <th>"Pays"</th>
                                    <th class="data-table__num">"Prix"</th>
                                    <th class="data-table__num">"Stock"</th>
                                    <th class="data-table__num">"Note"</th>
                                    <th class="data-table__num">"Délai"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {items
                                    .into_iter()
                                    .map(|p| {
                                        view! {
                                            <tr>
                                                <td>{p.name.clone()}</td>
                                                <td>{p.category.label()}</td>
                                                <td>{p.origin.label()}</td>
                                                <td>{p.country.clone()}</td>
                                                <td class="data-table__num">
                                                    {format_fcfa(p.price)}
                                                </td>
                                                <td class="data-table__num">{p.stock}</td>
                                                <td class="data-table__num">
                                                    {format!("{:.1}", p.rating)}
                                                    " ("
                                                    {p.review_count}
                                                    ")"
                                                </td>
                                                <td class="data-table__num">
                                                    {p.delivery_days}
                                                    " j"
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
