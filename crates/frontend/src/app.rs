use crate::routes::routes::AppRoutes;
use crate::shared::data::provide_dataset;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the read-only dataset to the whole app via context.
    provide_dataset();

    view! {
        <AppRoutes />
    }
}
