//! Page handlers
//!
//! Stub renderers for the two destinations. The real page content
//! (donation form, payment flow) lives outside this repository; the
//! navigation layer only needs handlers that accept props and render.

use obol_core::{Page, PageProps};

/// Donation page for a specific event. Declared with param forwarding,
/// so it receives the captured `eventId`.
pub struct DonationPage;

impl Page for DonationPage {
    fn render(&self, props: &PageProps) -> String {
        match props.get("eventId") {
            Some(event_id) => format!(
                "<main><h1>Support this event</h1>\
                 <p>You are donating to event {}.</p></main>",
                event_id
            ),
            None => {
                "<main><h1>Support this event</h1><p>No event selected.</p></main>".to_string()
            }
        }
    }
}

/// Static confirmation page. Declared without param forwarding.
pub struct ThankYouPage;

impl Page for ThankYouPage {
    fn render(&self, _props: &PageProps) -> String {
        "<main><h1>Thank you!</h1><p>Your donation was received.</p></main>".to_string()
    }
}
