//! Global Application State
//!
//! Request settings and the current notice, shared through Leptos context.

use leptos::*;

use crate::api::ClientSettings;

/// Kind of a transient notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// How long the notice stays on screen, in milliseconds
    pub fn duration_ms(self) -> u32 {
        match self {
            NoticeKind::Success => 3000,
            NoticeKind::Error => 5000,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// State provided to every page
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Bill request settings, mirrored in local storage
    pub settings: RwSignal<ClientSettings>,
    pub notice: RwSignal<Option<Notice>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState {
        settings: create_rw_signal(ClientSettings::load()),
        notice: create_rw_signal(None),
    });
}

impl GlobalState {
    /// Persist the settings and publish them. The bills page picks them up
    /// on its next mount.
    pub fn save_settings(&self, settings: ClientSettings) {
        settings.save();
        self.settings.set(settings);
    }

    pub fn show_success(&self, message: &str) {
        self.notify(NoticeKind::Success, message);
    }

    pub fn show_error(&self, message: &str) {
        self.notify(NoticeKind::Error, message);
    }

    fn notify(&self, kind: NoticeKind, message: &str) {
        let notice = Notice {
            kind,
            message: message.to_string(),
        };
        self.notice.set(Some(notice.clone()));

        // A newer notice is not cleared by an older timer
        let slot = self.notice;
        gloo_timers::callback::Timeout::new(kind.duration_ms(), move || {
            slot.update(|current| {
                if current.as_ref() == Some(&notice) {
                    *current = None;
                }
            });
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_linger_longer() {
        assert!(NoticeKind::Error.duration_ms() > NoticeKind::Success.duration_ms());
    }
}
