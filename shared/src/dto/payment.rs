use serde::{Deserialize, Serialize};

use super::id::RecordId;

/// M-Pesa STK push initiation request
///
/// `amount` is forwarded as entered; the backend owns parsing and limits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentRequest {
    pub phone: String,
    pub amount: String,
    pub payment_type: String,
    pub payer_name: String,
}

/// Payment initiation response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInitiatedResponse {
    pub payment_id: RecordId,
    pub checkout_request_id: String,
}
