use leptos::prelude::*;

/// Explicit no-results state. Data is always resident, so an empty list is
/// a filtering outcome, never a loading indicator.
#[component]
pub fn EmptyState(
    /// Message shown below the title
    #[prop(optional, into)]
    message: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__title">"Aucun résultat"</div>
            <div class="empty-state__message">
                {move || {
                    message
                        .get()
                        .unwrap_or_else(|| "Modifiez vos critères de recherche".to_string())
                }}
            </div>
        </div>
    }
}
