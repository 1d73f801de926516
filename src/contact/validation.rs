use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// Browser whitespace: Unicode spaces plus U+FEFF, without U+0085.
const SPACE_CLASS: &str = r"\t\n\x0B\x0C\r\p{Zs}\x{2028}\x{2029}\x{FEFF}";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^@{}]+", SPACE_CLASS);
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).unwrap()
});
// ASCII digits only. Leading digit must be nonzero; at most 16 digits in total.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").unwrap());

const MIN_PHONE_LENGTH: usize = 10;

/// Why a single field was rejected. The display text is what the visitor sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select,
    Textarea,
}

impl FieldKind {
    /// The `type` attribute for `<input>` based kinds.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
            FieldKind::Text | FieldKind::Select | FieldKind::Textarea => "text",
        }
    }
}

/// Checks one value against the rules for its kind. The first failing rule wins.
pub fn validate_value(kind: FieldKind, required: bool, value: &str) -> Result<(), FieldError> {
    let value = value.trim_matches(is_form_space);

    if value.is_empty() {
        return if required { Err(FieldError::Required) } else { Ok(()) };
    }

    match kind {
        FieldKind::Email if !EMAIL_RE.is_match(value) => Err(FieldError::InvalidEmail),
        FieldKind::Tel if !is_valid_phone(value) => Err(FieldError::InvalidPhone),
        _ => Ok(()),
    }
}

/// Whitespace as the browser's `trim` and `\s` see it. Differs from `char::is_whitespace`
/// on U+FEFF (space here) and U+0085 (not a space here).
pub fn is_form_space(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Strips spaces, hyphens and parentheses before matching.
pub fn clean_phone(value: &str) -> String {
    value
        .chars()
        .filter(|&c| !is_form_space(c) && !matches!(c, '-' | '(' | ')'))
        .collect()
}

fn is_valid_phone(value: &str) -> bool {
    let cleaned = clean_phone(value);
    PHONE_RE.is_match(&cleaned) && cleaned.chars().count() >= MIN_PHONE_LENGTH
}
