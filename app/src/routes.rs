//! The donation route table
//!
//! Declared exactly once and built fail-fast at startup:
//!
//! | name         | path               | forwards params |
//! |--------------|--------------------|-----------------|
//! | DonationPage | `/donate/:eventId` | yes             |
//! | ThankYouPage | `/thank-you`       | no              |

use std::sync::Arc;

use obol_core::{Destination, Result, Routes};

use crate::pages::{DonationPage, ThankYouPage};

pub fn donation_routes() -> Result<Routes> {
    let table = Routes::builder()
        .route(
            "/donate/:eventId",
            "DonationPage",
            Arc::new(DonationPage) as Destination,
            true,
        )?
        .route(
            "/thank-you",
            "ThankYouPage",
            Arc::new(ThankYouPage) as Destination,
            false,
        )?
        .build()?;

    Ok(table)
}
