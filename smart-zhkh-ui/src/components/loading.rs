//! Loading Component
//!
//! Placeholders shown while a page's data is loading or failed to load.

use leptos::*;

/// Text of the loading placeholder
pub const LOADING_TEXT: &str = "Загрузка...";

/// Text of the error placeholder
pub const ERROR_TEXT: &str = "Ошибка загрузки данных";

/// Loading placeholder with spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center space-x-3 py-12 text-gray-300">
            <div class="loading-spinner w-6 h-6" />
            <p>{LOADING_TEXT}</p>
        </div>
    }
}

/// Generic load failure placeholder, no detail shown
#[component]
pub fn LoadError() -> impl IntoView {
    view! {
        <p class="py-12 text-red-400">{ERROR_TEXT}</p>
    }
}
