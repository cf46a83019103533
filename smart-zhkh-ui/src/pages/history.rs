//! History Page
//!
//! Static page: heading and a short description.

use leptos::*;

#[component]
pub fn History() -> impl IntoView {
    view! {
        <div class="space-y-2">
            <h1 class="text-3xl font-bold">"История"</h1>
            <p class="text-gray-400">"История начислений и платежей."</p>
        </div>
    }
}
