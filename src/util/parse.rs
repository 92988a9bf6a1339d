use crate::error::{internal::InternalError, AppError};

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse
///   the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId { value, source: e })?;

    Ok(result)
}

/// Largest count that fits the `i32` counter columns.
pub const MAX_STORED_COUNT: u32 = i32::MAX as u32;

/// Converts a stored non-negative counter into `u32`, clamping negatives to zero.
pub fn count_from_db(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

/// Converts a counter into its stored form, saturating at `i32::MAX`.
pub fn count_to_db(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
