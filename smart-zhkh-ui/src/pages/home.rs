//! Home Page

use leptos::*;
use leptos_router::*;

use crate::state::global::GlobalState;

#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let account = move || state.settings.get().account_number;

    view! {
        <div class="space-y-4">
            <h1 class="text-3xl font-bold">"Главное"</h1>
            <p class="text-gray-400">"Добро пожаловать в Smart ЖКХ."</p>
            <p>"Лицевой счет: " {account}</p>
            <A
                href="/bills"
                class="inline-block px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Перейти к счетам"
            </A>
        </div>
    }
}
