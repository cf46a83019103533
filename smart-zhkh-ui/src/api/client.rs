//! HTTP API Client
//!
//! Bill types and the request against the billing service's
//! `GET /api/v1/bills` endpoint.

use gloo_net::http::Request;
use web_sys::AbortSignal;

/// Default billing service base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8003";

const STORAGE_PREFIX: &str = "smart_zhkh_";

// ============ Response Types ============

/// A utility bill, rendered exactly as received
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Bill {
    pub period: String,
    pub account_number: String,
    pub status: String,
    pub total_amount: f64,
    pub services: Vec<Service>,
}

/// A single billed service line
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Service {
    pub service_name: String,
    pub cost_per_unit: f64,
    pub units: f64,
    pub total_cost: f64,
}

// ============ Settings ============

/// Which bill to request and how. Persisted in local storage.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    pub api_url: String,
    pub account_number: String,
    pub period: String,
    pub auth_token: String,
    pub display_name: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_BASE.to_string(),
            account_number: "8".to_string(),
            period: "2024-05".to_string(),
            auth_token: String::new(),
            display_name: "Абонент".to_string(),
        }
    }
}

impl ClientSettings {
    /// Load settings from local storage, falling back to defaults per key
    pub fn load() -> Self {
        let defaults = Self::default();
        let get = |key: &str, default: String| read_storage(key).unwrap_or(default);

        Self {
            api_url: get("api_url", defaults.api_url),
            account_number: get("account_number", defaults.account_number),
            period: get("period", defaults.period),
            auth_token: get("auth_token", defaults.auth_token),
            display_name: get("display_name", defaults.display_name),
        }
    }

    /// Persist settings to local storage
    pub fn save(&self) {
        write_storage("api_url", &self.api_url);
        write_storage("account_number", &self.account_number);
        write_storage("period", &self.period);
        write_storage("auth_token", &self.auth_token);
        write_storage("display_name", &self.display_name);
    }

    /// Full URL of the bills endpoint
    pub fn bills_url(&self) -> String {
        format!("{}/api/v1/bills", self.api_url.trim().trim_end_matches('/'))
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn read_storage(key: &str) -> Option<String> {
    storage()?
        .get_item(&format!("{}{}", STORAGE_PREFIX, key))
        .ok()
        .flatten()
}

fn write_storage(key: &str, value: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(&format!("{}{}", STORAGE_PREFIX, key), value);
    }
}

// ============ API Functions ============

/// Fetch the configured bill.
///
/// The status code is not checked: any body that parses as a bill is a
/// success. `abort` cancels the request when the caller goes away.
pub async fn fetch_bill(
    settings: &ClientSettings,
    abort: Option<&AbortSignal>,
) -> Result<Bill, String> {
    let response = Request::get(&settings.bills_url())
        .query([
            ("account_number", settings.account_number.as_str()),
            ("period", settings.period.as_str()),
        ])
        .header("Content-Type", "application/json")
        .header("Authorization", &format!("Bearer {}", settings.auth_token))
        .abort_signal(abort)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let body = response
        .text()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    parse_bill(&body)
}

/// Parse a response body as a bill
pub fn parse_bill(body: &str) -> Result<Bill, String> {
    serde_json::from_str(body).map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bills_url() {
        let mut settings = ClientSettings::default();
        assert_eq!(settings.bills_url(), "http://127.0.0.1:8003/api/v1/bills");

        settings.api_url = " https://billing.example/ ".to_string();
        assert_eq!(settings.bills_url(), "https://billing.example/api/v1/bills");
    }

    #[test]
    fn test_parse_bill() {
        let bill = parse_bill(
            r#"{"period": "2024-05", "account_number": "8", "status": "paid",
                "total_amount": 1500, "paid_at": null,
                "services": [{"service_name": "water", "cost_per_unit": 50,
                              "units": 10, "total_cost": 500}]}"#,
        )
        .unwrap();

        assert_eq!(bill.total_amount, 1500.0);
        assert_eq!(bill.services[0].service_name, "water");
    }

    #[test]
    fn test_parse_failures() {
        assert!(parse_bill("not json").unwrap_err().starts_with("Parse error"));
        assert!(parse_bill(r#"{"detail": "Invalid token"}"#).is_err());
    }
}
