//! Navigation Component
//!
//! Page shell: header with brand and user, side panel with links, and the
//! content slot the routed page renders into.

use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;

/// Side panel links as (path, icon, title). Settings is rendered apart.
pub const NAV_ITEMS: [(&str, &str, &str); 5] = [
    ("/", "🏠", "Главное"),
    ("/bills", "🧾", "Счета"),
    ("/history", "🕑", "История"),
    ("/payment", "💳", "Оплата"),
    ("/statistics", "📊", "Статистика"),
];

/// Navigation shell wrapping the routed page
#[component]
pub fn Nav(children: Children) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let display_name = move || state.settings.get().display_name;

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <header class="bg-gray-800 border-b border-gray-700">
                <nav class="container mx-auto px-4 flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🏢"</span>
                        <span class="text-xl font-bold text-white">"Smart ЖКХ"</span>
                    </A>

                    <span class="text-sm text-gray-300">{display_name}</span>
                </nav>
            </header>

            <main class="flex-1 container mx-auto px-4 py-8 flex gap-8">
                <aside class="w-56 shrink-0 flex flex-col justify-between">
                    <ul class="space-y-1">
                        {NAV_ITEMS
                            .iter()
                            .map(|&(href, icon, title)| view! {
                                <li><NavLink href=href icon=icon label=title /></li>
                            })
                            .collect_view()}
                    </ul>
                    <NavLink href="/settings" icon="⚙️" label="Настройки" />
                </aside>

                <section class="flex-1">
                    {children()}
                </section>
            </main>
        </div>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    icon: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="flex items-center space-x-3 px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            <span>{icon}</span>
            <span>{label}</span>
        </A>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_items_order() {
        let paths: Vec<&str> = NAV_ITEMS.iter().map(|(path, _, _)| *path).collect();
        assert_eq!(paths, ["/", "/bills", "/history", "/payment", "/statistics"]);
        assert!(NAV_ITEMS.iter().all(|(_, _, title)| !title.is_empty()));
    }
}
