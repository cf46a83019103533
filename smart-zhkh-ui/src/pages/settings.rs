//! Settings Page
//!
//! Edits which bill the bills page requests and the token it forwards.
//! Changes apply to the next mount of the bills page.

use leptos::*;

use crate::api::ClientSettings;
use crate::state::global::GlobalState;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let current = state.settings.get_untracked();

    let api_url = create_rw_signal(current.api_url);
    let account_number = create_rw_signal(current.account_number);
    let period = create_rw_signal(current.period);
    let auth_token = create_rw_signal(current.auth_token);
    let display_name = create_rw_signal(current.display_name);

    let save = move |_| {
        let settings = ClientSettings {
            api_url: api_url.get(),
            account_number: account_number.get(),
            period: period.get(),
            auth_token: auth_token.get(),
            display_name: display_name.get(),
        };

        if !is_valid_period(&settings.period) {
            state.show_error("Период должен быть в формате ГГГГ-ММ");
            return;
        }

        state.save_settings(settings);
        state.show_success("Настройки сохранены");
    };

    let reset = move |_| {
        let defaults = ClientSettings::default();
        api_url.set(defaults.api_url);
        account_number.set(defaults.account_number);
        period.set(defaults.period);
        auth_token.set(defaults.auth_token);
        display_name.set(defaults.display_name);
    };

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Настройки"</h1>
                <p class="text-gray-400 mt-1">"Подключение к сервису начислений"</p>
            </div>

            <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                <SettingsField label="Адрес API" value=api_url />
                <SettingsField label="Лицевой счет" value=account_number />
                <SettingsField label="Период (ГГГГ-ММ)" value=period />
                <SettingsField label="Токен доступа" value=auth_token input_type="password" />
                <SettingsField label="Имя пользователя" value=display_name />

                <div class="flex space-x-2 pt-2">
                    <button
                        on:click=save
                        class="px-4 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                    >
                        "Сохранить"
                    </button>
                    <button
                        on:click=reset
                        class="px-4 py-3 bg-gray-600 hover:bg-gray-500 rounded-lg font-medium transition-colors"
                    >
                        "По умолчанию"
                    </button>
                </div>
            </section>
        </div>
    }
}

/// Labelled text input bound to a signal
#[component]
fn SettingsField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")]
    input_type: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">{label}</label>
            <input
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}

/// `YYYY-MM` with a month between 01 and 12
fn is_valid_period(period: &str) -> bool {
    let Some((year, month)) = period.split_once('-') else {
        return false;
    };

    year.len() == 4
        && month.len() == 2
        && year.chars().all(|c| c.is_ascii_digit())
        && matches!(month.parse::<u8>(), Ok(1..=12))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_validation() {
        assert!(is_valid_period("2024-05"));
        assert!(is_valid_period("2024-12"));
        assert!(!is_valid_period("2024-13"));
        assert!(!is_valid_period("2024-00"));
        assert!(!is_valid_period("2024-5"));
        assert!(!is_valid_period("24-05"));
        assert!(!is_valid_period("2024/05"));
    }
}
