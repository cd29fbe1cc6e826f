use crate::routes::routes::Page;
use leptos::prelude::*;

#[component]
pub fn Sidebar(active_page: RwSignal<Page>) -> impl IntoView {
    let items = Page::all();

    view! {
        <nav class="sidebar-nav">
            {items
                .into_iter()
                .map(|page| {
                    view! {
                        <button
                            class=move || {
                                if active_page.get() == page {
                                    "sidebar-nav__item sidebar-nav__item--active"
                                } else {
                                    "sidebar-nav__item"
                                }
                            }
                            on:click=move |_| active_page.set(page)
                        >
                            {page.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
