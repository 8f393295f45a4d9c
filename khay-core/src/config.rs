//! Runtime configuration
//!
//! Every key can be overridden through environment variables:
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | TABLE_MIN | 1 | Lowest valid table number |
//! | TABLE_MAX | 50 | Highest valid table number |
//! | QR_BANK_ID | 970422 | VietQR bank identifier |
//! | QR_ACCOUNT_NO | 0000000000 | Merchant account number |
//! | QR_NOTE | Thanh toan don hang | Fixed transfer note on the QR |

/// Core configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Valid table number range (inclusive)
    pub table_min: u32,
    pub table_max: u32,
    /// VietQR bank identifier (BIN)
    pub qr_bank_id: String,
    /// Merchant account number at that bank
    pub qr_account_no: String,
    /// Fixed note attached to every payment QR
    pub qr_note: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_min: 1,
            table_max: 50,
            qr_bank_id: "970422".into(),
            qr_account_no: "0000000000".into(),
            qr_note: "Thanh toan don hang".into(),
        }
    }
}

impl Config {
    /// Load configuration from the environment (`.env` honoured), falling
    /// back to defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let defaults = Self::default();
        Self {
            table_min: std::env::var("TABLE_MIN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.table_min),
            table_max: std::env::var("TABLE_MAX")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.table_max),
            qr_bank_id: std::env::var("QR_BANK_ID").unwrap_or(defaults.qr_bank_id),
            qr_account_no: std::env::var("QR_ACCOUNT_NO").unwrap_or(defaults.qr_account_no),
            qr_note: std::env::var("QR_NOTE").unwrap_or(defaults.qr_note),
        }
    }

    /// Whether a table number falls inside the configured range.
    pub fn is_valid_table(&self, table_number: u32) -> bool {
        (self.table_min..=self.table_max).contains(&table_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_range() {
        let config = Config::default();
        assert!(config.is_valid_table(1));
        assert!(config.is_valid_table(50));
        assert!(!config.is_valid_table(0));
        assert!(!config.is_valid_table(51));
    }
}
