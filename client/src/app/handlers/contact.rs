//! Contact form submission

use crate::app::{ContactFormView, Notifier};
use crate::core::ApiService;
use crate::debug::trace_context::with_trace_id;

use super::error_alert;

/// Submit the contact form.
///
/// On success alerts the confirmation and resets the form; on failure alerts
/// the error and leaves the fields as they were. Returns whether the message
/// was accepted.
pub async fn handle_contact_submit(
    api: &dyn ApiService,
    form: &mut dyn ContactFormView,
    notifier: &dyn Notifier,
) -> bool {
    let request = form.values();

    with_trace_id("contact_submit", async {
        match api.submit_contact_form(request).await {
            Ok(confirmation) => {
                notifier.alert(&confirmation);
                form.reset();
                true
            }
            Err(e) => {
                notifier.alert(&error_alert(e.message()));
                false
            }
        }
    })
    .await
}
