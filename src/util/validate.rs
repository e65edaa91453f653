//! Form input validators.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Minimum number of digits in a phone number.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Whitespace as JS regular expressions match it with `\s`.
fn is_js_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Permissive email check: `local@domain.tld` with no whitespace and exactly
/// one `@`, where the domain has a `.` with text on both sides.
#[must_use]
pub fn validate_email(input: &str) -> bool {
    if input.chars().any(is_js_space) {
        return false;
    }
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Phone check: only digits, whitespace, `+`, `-`, and parentheses, with at
/// least [`MIN_PHONE_DIGITS`] digits.
#[must_use]
pub fn validate_phone(input: &str) -> bool {
    if input.is_empty() {
        return false;
    }
    let allowed = input
        .chars()
        .all(|c| c.is_ascii_digit() || is_js_space(c) || matches!(c, '+' | '-' | '(' | ')'));
    allowed && input.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}
