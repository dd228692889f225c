//! # Date handling
//!
//! A heartbeat's `date` field is a decimal seconds-since-epoch string;
//! the processor extracts its calendar date and compares it
//! literally against `MM/DD/YYYY` scheduled payment keys. Extraction is
//! done in UTC so the comparison is identical on every replica regardless
//! of host timezone — the reference implementation used the local
//! timezone, which would make replicas that run in different zones
//! disagree about which calendar date a heartbeat lands on; see
//! DESIGN.md.

use chrono::{DateTime, Utc};
use ledger_types::LedgerError;

const DATE_FORMAT: &str = "%m/%d/%Y";

/// Extract the `MM/DD/YYYY` calendar date a heartbeat's decimal
/// seconds-since-epoch `date` field falls on (UTC).
pub fn heartbeat_calendar_date(date_field: &str) -> Result<String, LedgerError> {
    let seconds: f64 = date_field
        .trim()
        .parse()
        .map_err(|_| LedgerError::BadPayload(format!("invalid heartbeat date: {date_field}")))?;
    let whole_secs = seconds.trunc() as i64;
    let dt: DateTime<Utc> = DateTime::from_timestamp(whole_secs, 0)
        .ok_or_else(|| LedgerError::BadPayload(format!("out-of-range heartbeat date: {date_field}")))?;
    Ok(dt.format(DATE_FORMAT).to_string())
}
