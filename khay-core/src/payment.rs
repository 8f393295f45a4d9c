//! Payment QR link construction
//!
//! Builds the VietQR quick-link image URL for an order's total. The amount
//! is rounded to the nearest whole currency unit (the QR format carries no
//! decimals) and tagged with the configured fixed note. Rendering the image
//! is the presentation layer's job; external payment confirmation remains a
//! human-driven signal.

use crate::config::Config;
use crate::money;

/// Image URL for a bank-transfer QR covering `total`.
pub fn qr_image_url(total: f64, config: &Config) -> String {
    format!(
        "https://img.vietqr.io/image/{}-{}-compact.png?amount={}&addInfo={}",
        config.qr_bank_id,
        config.qr_account_no,
        money::round_to_unit(total),
        urlencoding::encode(&config.qr_note),
    )
}
