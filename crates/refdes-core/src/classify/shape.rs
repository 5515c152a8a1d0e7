use crate::model::PatternKind;

/// Match a whole token against the designator shapes, in priority order.
///
/// - `D` + digits -> DNumeric
/// - `U` + digits -> UNumeric
/// - `[A-Z][A-Z0-9_]+` -> Complex
///
/// Single uppercase letters ("R", "D") match nothing.
pub fn match_shape(token: &str) -> Option<PatternKind> {
    if is_letter_digits(token, 'D') {
        return Some(PatternKind::DNumeric);
    }
    if is_letter_digits(token, 'U') {
        return Some(PatternKind::UNumeric);
    }
    if is_complex(token) {
        return Some(PatternKind::Complex);
    }
    None
}

/// True if the first char is an ASCII digit.
pub fn starts_with_number(token: &str) -> bool {
    token.starts_with(|c: char| c.is_ascii_digit())
}

fn is_letter_digits(token: &str, letter: char) -> bool {
    match token.strip_prefix(letter) {
        Some(rest) => !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()),
        None => false,
    }
}

fn is_complex(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {}
        _ => return false,
    }
    let rest = chars.as_str();
    !rest.is_empty()
        && rest
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
