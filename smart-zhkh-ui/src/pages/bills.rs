//! Bills Page
//!
//! Fetches the configured bill once per mount and renders a loading
//! placeholder, an error placeholder, or the bill. The request is aborted
//! when the page is disposed, and an aborted request never updates state.

use leptos::*;

use crate::api::{self, Bill};
use crate::components::{LoadError, Loading};
use crate::state::global::GlobalState;

/// What the page shows for a given state. Loading wins over everything else.
#[derive(Debug, Clone, PartialEq)]
pub enum BillsView {
    Loading,
    Error,
    Bill(Bill),
}

impl BillsView {
    pub fn from_state(loading: bool, bill: Option<Bill>) -> Self {
        match (loading, bill) {
            (true, _) => BillsView::Loading,
            (false, None) => BillsView::Error,
            (false, Some(bill)) => BillsView::Bill(bill),
        }
    }
}

/// State update for a finished request: the bill to store (absent on
/// failure), or `None` when the page was disposed first and the result must
/// be dropped.
pub fn settle(aborted: bool, result: Result<Bill, String>) -> Option<Option<Bill>> {
    if aborted {
        return None;
    }
    Some(result.ok())
}

fn log_outcome(result: &Result<Bill, String>) {
    match result {
        Ok(bill) => web_sys::console::log_1(&format!("Bill loaded: {:?}", bill).into()),
        Err(e) => web_sys::console::error_1(&format!("Failed to load bill: {}", e).into()),
    }
}

/// Bills page component
#[component]
pub fn Bills() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (bill, set_bill) = create_signal(None::<Bill>);
    let (loading, set_loading) = create_signal(true);

    let controller = web_sys::AbortController::new().ok();
    let abort = controller.as_ref().map(|c| c.signal());
    let settings = state.settings.get_untracked();

    // The one request for this mount
    spawn_local(async move {
        let result = api::fetch_bill(&settings, abort.as_ref()).await;

        let aborted = abort.as_ref().is_some_and(|signal| signal.aborted());
        if !aborted {
            log_outcome(&result);
        }

        // Both outcomes clear loading; a disposed page is left untouched
        if let Some(outcome) = settle(aborted, result) {
            set_bill.set(outcome);
            set_loading.set(false);
        }
    });

    on_cleanup(move || {
        if let Some(controller) = controller {
            controller.abort();
        }
    });

    view! {
        <div class="bills space-y-4">
            {move || match BillsView::from_state(loading.get(), bill.get()) {
                BillsView::Loading => view! { <Loading /> }.into_view(),
                BillsView::Error => view! { <LoadError /> }.into_view(),
                BillsView::Bill(bill) => view! { <BillDetails bill=bill /> }.into_view(),
            }}
        </div>
    }
}

/// Full bill view
#[component]
fn BillDetails(bill: Bill) -> impl IntoView {
    view! {
        <h2 class="text-2xl font-bold">"Счет за период: " {bill.period}</h2>
        <p><strong>"Лицевой счет: "</strong>{bill.account_number}</p>
        <p><strong>"Статус: "</strong>{bill.status}</p>
        <p><strong>"Сумма к оплате: "</strong>{format!("{} ₽", bill.total_amount)}</p>

        <h3 class="text-xl font-semibold pt-4">"Услуги"</h3>
        <ul class="space-y-3">
            {bill.services.into_iter().map(|service| view! {
                <li class="bg-gray-800 rounded-lg p-4">
                    <p><strong>{service.service_name}</strong></p>
                    <p>"Цена за единицу: " {service.cost_per_unit.to_string()}</p>
                    <p>"Количество: " {service.units.to_string()}</p>
                    <p>"Итого: " {service.total_cost.to_string()}</p>
                </li>
            }).collect_view()}
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::parse_bill;

    #[test]
    fn test_view_precedence() {
        let bill = parse_bill(
            r#"{"period": "2024-05", "account_number": "8", "status": "paid",
                "total_amount": 1500, "services": []}"#,
        )
        .unwrap();

        assert_eq!(BillsView::from_state(true, None), BillsView::Loading);
        assert_eq!(BillsView::from_state(true, Some(bill.clone())), BillsView::Loading);
        assert_eq!(BillsView::from_state(false, None), BillsView::Error);
        assert_eq!(
            BillsView::from_state(false, Some(bill.clone())),
            BillsView::Bill(bill)
        );
    }

    #[test]
    fn test_settle_after_abort_is_dropped() {
        let bill = parse_bill(
            r#"{"period": "2024-05", "account_number": "8", "status": "paid",
                "total_amount": 1500, "services": []}"#,
        )
        .unwrap();

        assert_eq!(settle(true, Ok(bill.clone())), None);
        assert_eq!(settle(true, Err("Network error".to_string())), None);

        assert_eq!(settle(false, Ok(bill.clone())), Some(Some(bill)));
        assert_eq!(settle(false, Err("Parse error".to_string())), Some(None));
    }
}
