use std::sync::LazyLock;

use regex::Regex;

pub const SCHOOL_EMAIL_SUFFIX: &str = "@mergington.edu";

static SCHOOL_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@mergington\.edu$").expect("school email pattern compiles")
});

/// True only for `local@mergington.edu` where the local part uses letters,
/// digits and `._%+-`. The domain is matched case-sensitively.
pub fn validate_email(email: &str) -> bool {
    SCHOOL_EMAIL.is_match(email)
}

/// Server-side form of an address: trimmed and lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
