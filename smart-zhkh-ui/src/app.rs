//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{Bills, History, Home, Payment, Settings, Statistics};
use crate::state::provide_global_state;

/// Text of the fallback route
pub const NOT_FOUND_TEXT: &str = "404 — не найдено";

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Router>
            <Nav>
                <Routes>
                    <Route path="/" view=Home />
                    <Route path="/bills" view=Bills />
                    <Route path="/history" view=History />
                    <Route path="/payment" view=Payment />
                    <Route path="/statistics" view=Statistics />
                    <Route path="/settings" view=Settings />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </Nav>

            // Toast notifications
            <Toast />
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-6">{NOT_FOUND_TEXT}</h1>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "На главную"
            </A>
        </div>
    }
}
