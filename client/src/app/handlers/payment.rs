//! M-Pesa payment button

use shared::PaymentRequest;

use crate::app::Notifier;
use crate::core::ApiService;
use crate::debug::trace_context::with_trace_id;
use crate::services::api::PaymentOutcome;
use crate::services::storage::{KeyValueStore, LAST_PAYMENT_ID_KEY};
use crate::utils::validation::validate_payment;

use super::error_alert;

/// Validate the payment form, start the STK push and remember its id.
///
/// Any empty field alerts "Please fill all fields" without calling the API.
pub async fn handle_mpesa_payment(
    api: &dyn ApiService,
    storage: &dyn KeyValueStore,
    payment: PaymentRequest,
    notifier: &dyn Notifier,
) -> Option<PaymentOutcome> {
    let validation = validate_payment(&payment);
    if let Some(error) = validation.error {
        notifier.alert(&error);
        return None;
    }

    with_trace_id("mpesa_payment", async {
        match api.initiate_mpesa_payment(payment).await {
            Ok(outcome) => {
                notifier.alert(&outcome.message);
                if let Err(e) = storage.set_item(LAST_PAYMENT_ID_KEY, &outcome.payment_id.to_string()) {
                    tracing::warn!(error = %e, "Failed to remember payment id");
                }
                Some(outcome)
            }
            Err(e) => {
                notifier.alert(&error_alert(e.message()));
                None
            }
        }
    })
    .await
}
