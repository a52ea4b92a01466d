use crate::server::error::{internal::InternalError, AppError};

/// Parses a persisted enumeration column into its typed form.
///
/// # Arguments
/// - `column` - Column name, reported when the value is unknown
/// - `value` - The stored string
/// - `parse` - The enum's parser, e.g. `SiteStatus::parse`
///
/// # Returns
/// - `Ok(T)` - Successfully parsed value
/// - `Err(AppError::InternalErr(InvalidEnumValue))` - The stored value is unknown
pub fn parse_enum<T>(
    column: &'static str,
    value: String,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, AppError> {
    match parse(&value) {
        Some(parsed) => Ok(parsed),
        None => Err(InternalError::InvalidEnumValue { column, value }.into()),
    }
}
