//! Input validation and sanitizing for login and profile forms.

#[cfg(test)]
#[path = "validators_test.rs"]
mod validators_test;

/// Number of digits in a one-time login code.
pub const OTP_LEN: usize = 6;

/// `local@domain.tld` with no whitespace and exactly one `@`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Needs a dot with something on both sides somewhere after the first char.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[must_use]
pub fn sanitize_email_input(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Indian mobile number: optional `+91`/`91` prefix, then ten digits starting
/// with 6-9. Spaces and hyphens are ignored.
#[must_use]
pub fn is_valid_indian_phone(phone: &str) -> bool {
    let cleaned: String = phone.chars().filter(|c| !c.is_whitespace() && *c != '-').collect();
    let digits = cleaned
        .strip_prefix("+91")
        .or_else(|| cleaned.strip_prefix("91").filter(|rest| rest.len() == 10))
        .unwrap_or(&cleaned);
    digits.len() == 10
        && digits.chars().all(|c| c.is_ascii_digit())
        && digits.starts_with(['6', '7', '8', '9'])
}

/// Reduce a phone number to ten digits, dropping a `91` country code.
#[must_use]
pub fn format_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 12 && digits.starts_with("91") {
        return digits[2..].to_owned();
    }
    let skip = digits.len().saturating_sub(10);
    digits[skip..].to_owned()
}

#[must_use]
pub fn is_valid_otp(otp: &str) -> bool {
    otp.len() == OTP_LEN && is_numeric_only(otp)
}

/// Keep only digits, `+`, spaces and hyphens.
#[must_use]
pub fn sanitize_phone_input(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-'))
        .collect()
}

/// Keep at most [`OTP_LEN`] digits from typed or pasted input.
#[must_use]
pub fn sanitize_otp_input(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).take(OTP_LEN).collect()
}

#[must_use]
pub fn is_numeric_only(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|c| c.is_ascii_digit())
}
