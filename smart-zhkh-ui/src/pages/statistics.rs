//! Statistics Page
//!
//! Static page: heading and a short description.

use leptos::*;

#[component]
pub fn Statistics() -> impl IntoView {
    view! {
        <div class="space-y-2">
            <h1 class="text-3xl font-bold">"Статистика"</h1>
            <p class="text-gray-400">"Статистика потребления услуг."</p>
        </div>
    }
}
