//! # Contact Endpoint

use serde_json::Value;
use shared::ContactRequest;

use super::client::ApiClient;
use crate::core::error::Result;

/// Confirmation shown after a contact form is accepted.
pub const CONTACT_SENT: &str = "Message sent successfully! We will respond soon.";

/// Submit the contact form. The response body carries nothing the caller needs.
#[tracing::instrument(skip(client, form), fields(email = %form.email, subject = %form.subject))]
pub async fn submit_contact_form(client: &ApiClient, form: ContactRequest) -> Result<String> {
    let _: Value = client
        .send_json("submit_contact", client.client.post(client.url("/contacts")).json(&form))
        .await?;

    Ok(CONTACT_SENT.to_string())
}
