//! Phone number normalization for the country-code phone input.

/// Keeps only the characters a phone number may be typed with.
///
/// Digits, whitespace, `-`, `(` and `)` survive, everything else is dropped.
pub fn sanitize_number(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '(' | ')'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Builds the stored phone value `"{dial_code} {number}"`.
///
/// A number already starting with `+` carries its own dial code and only has its local
/// part sanitized. Returns `None` when no digits remain.
///
/// # Arguments
/// - `number` - Number as typed by the user
/// - `dial_code` - Selected country dial code such as `+251`
pub fn normalize_phone(number: &str, dial_code: Option<&str>) -> Option<String> {
    let number = number.trim();

    let (dial_code, local) = match number.strip_prefix('+') {
        Some(rest) => {
            let code_len = rest.chars().take_while(|c| c.is_ascii_digit()).count();
            let (code, local) = rest.split_at(code_len);
            (Some(format!("+{}", code)), local.to_string())
        }
        None => (dial_code.map(|code| code.trim().to_string()), number.to_string()),
    };

    let local = sanitize_number(&local);
    if !local.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    match dial_code.filter(|code| code.len() > 1) {
        Some(code) => Some(format!("{} {}", code, local)),
        None => Some(local),
    }
}
