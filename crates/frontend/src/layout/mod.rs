pub mod sidebar;

use leptos::prelude::*;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// |   (Left)  |         (Center)             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <header class="top-header">
                <span class="top-header__brand">"KÔTO AFRICA"</span>
                <span class="top-header__tagline">"Marché Afrique & Asie"</span>
            </header>

            <div class="app-body">
                <aside class="app-sidebar">
                    {left()}
                </aside>

                <div class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}
