//! Toast Notification Component

use leptos::*;

use crate::state::global::{GlobalState, NoticeKind};

fn style(kind: NoticeKind) -> (&'static str, &'static str) {
    match kind {
        NoticeKind::Success => ("✓", "bg-green-600"),
        NoticeKind::Error => ("✕", "bg-red-600"),
    }
}

/// Bottom-right slot for the current notice
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-4 right-4 z-50" role="status">
            {move || state.notice.get().map(|notice| {
                let (icon, bg) = style(notice.kind);
                view! {
                    <div class=format!("flex items-center space-x-3 {bg} text-white px-4 py-3 rounded-lg shadow-lg")>
                        <span class="text-lg">{icon}</span>
                        <span class="text-sm font-medium">{notice.message}</span>
                    </div>
                }
            })}
        </div>
    }
}
