//! # Payment Endpoints
//!
//! M-Pesa STK push initiation. The push itself is confirmed by the payer on
//! their phone; this call only returns the references to track it.

use shared::{PaymentInitiatedResponse, PaymentRequest, RecordId};

use super::client::ApiClient;
use crate::core::error::Result;

/// Message shown once the STK push is on its way.
pub const STK_PUSH_SENT: &str = "STK push sent! Check your phone for the M-Pesa prompt.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentOutcome {
    pub message: String,
    pub payment_id: RecordId,
    pub checkout_request_id: String,
}

/// Initiate an M-Pesa payment.
///
/// Fields are sent as given; callers validate that all four are filled in
/// (see [`crate::utils::validation::validate_payment`]).
#[tracing::instrument(skip(client, payment), fields(
    amount = %payment.amount,
    payment_type = %payment.payment_type
))]
pub async fn initiate_mpesa_payment(
    client: &ApiClient,
    payment: PaymentRequest,
) -> Result<PaymentOutcome> {
    tracing::info!("Initiating M-Pesa payment");

    let response: PaymentInitiatedResponse = client
        .send_json(
            "initiate_payment",
            client.client.post(client.url("/payments/mpesa/initiate")).json(&payment),
        )
        .await?;

    tracing::info!(
        payment_id = %response.payment_id,
        checkout_request_id = %response.checkout_request_id,
        "STK push requested"
    );

    Ok(PaymentOutcome {
        message: STK_PUSH_SENT.to_string(),
        payment_id: response.payment_id,
        checkout_request_id: response.checkout_request_id,
    })
}
