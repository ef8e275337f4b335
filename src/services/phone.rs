use std::sync::LazyLock;

use regex::Regex;

// +233 or a trunk 0, then a 2-5 network digit and eight more digits.
static GHANA_PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\+233|0)[2-5][0-9]{8}$").expect("invalid phone regex"));

pub fn is_valid_phone(phone: &str) -> bool {
    GHANA_PHONE_RE.is_match(phone)
}
