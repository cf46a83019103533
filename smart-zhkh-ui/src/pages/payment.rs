//! Payment Page
//!
//! Static page: heading and a short description.

use leptos::*;

#[component]
pub fn Payment() -> impl IntoView {
    view! {
        <div class="space-y-2">
            <h1 class="text-3xl font-bold">"Оплата"</h1>
            <p class="text-gray-400">"Оплата счетов за коммунальные услуги."</p>
        </div>
    }
}
