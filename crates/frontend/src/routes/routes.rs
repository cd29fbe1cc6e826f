use crate::dashboards::d400_finance::FinanceDashboard;
use crate::domain::a001_user::ClientList;
use crate::domain::a002_product::CatalogList;
use crate::domain::a003_order::OrderList;
use crate::layout::sidebar::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;

/// Top-level screens. Signal-driven switching instead of Router components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Catalog,
    Orders,
    Clients,
    Finance,
}

impl Page {
    pub fn label(&self) -> &'static str {
        match self {
            Page::Catalog => "Catalogue",
            Page::Orders => "Commandes",
            Page::Clients => "Clients",
            Page::Finance => "Finances",
        }
    }

    pub fn all() -> Vec<Page> {
        vec![Page::Catalog, Page::Orders, Page::Clients, Page::Finance]
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let active_page = RwSignal::new(Page::Catalog);

    view! {
        <Shell
            left=move || view! { <Sidebar active_page=active_page /> }.into_any()
            center=move || {
                match active_page.get() {
                    Page::Catalog => view! { <CatalogList /> }.into_any(),
                    Page::Orders => view! { <OrderList /> }.into_any(),
                    Page::Clients => view! { <ClientList /> }.into_any(),
                    Page::Finance => view! { <FinanceDashboard /> }.into_any(),
                }
            }
        />
    }
}
