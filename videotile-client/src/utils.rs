use crate::constants::DISPLAY_NAME_PREFIX;
use web_time::{SystemTime, UNIX_EPOCH};

/// Builds a display name from a millisecond timestamp by dropping the
/// timestamp's first eight digits: `1718000012345` becomes `User-12345`.
pub fn display_name_from_millis(millis: u128) -> String {
    let digits = millis.to_string();
    format!("{DISPLAY_NAME_PREFIX}{}", digits.get(8..).unwrap_or_default())
}

/// Display name for this page load. Unique enough to tell two tabs apart.
pub fn generate_display_name() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    display_name_from_millis(millis)
}
