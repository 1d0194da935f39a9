use crate::errors::{AppError, AppResult};
use regex::Regex;

/// Validate an ISO-4217 alphabetic currency code and return it
/// uppercased. Codes are exactly three ASCII letters.
pub fn normalize_currency(code: &str) -> AppResult<String> {
    let upper = code.trim().to_ascii_uppercase();
    let re = Regex::new(r"^[A-Z]{3}$").map_err(|e| AppError::Other(e.to_string()))?;
    if re.is_match(&upper) {
        Ok(upper)
    } else {
        Err(AppError::InvalidCurrency(code.to_string()))
    }
}
