//! Outbound links rendered as plain anchors.

const WHATSAPP_BASE: &str = "https://wa.me";
const MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search/?api=1&query=";

/// `wa.me` link with a pre-filled message. Formatting characters in the
/// number (spaces, dashes, parentheses, `+`) are dropped.
pub fn whatsapp_url(number: &str, message: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    format!("{}/{}?text={}", WHATSAPP_BASE, digits, urlencoding::encode(message))
}

pub fn maps_search_url(query: &str) -> String {
    format!("{}{}", MAPS_SEARCH_BASE, urlencoding::encode(query))
}
