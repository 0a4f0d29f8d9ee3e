use chrono::{Duration, Utc};
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlDocument};

fn html_document() -> Option<HtmlDocument> {
    window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

pub fn get_cookie(name: &str) -> Option<String> {
    let document = html_document()?;
    let cookies = document.cookie().ok()?;
    parse_cookie(&cookies, name)
}

/// Extracts a value from a `document.cookie` string. An empty value counts
/// as absent, so a wiped cookie never looks like a live credential.
pub fn parse_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find_map(|(key, value)| {
            let value = value.trim();
            (key.trim() == name && !value.is_empty()).then(|| value.to_string())
        })
}

pub fn set_cookie(name: &str, value: &str, expiry_days: i64) -> Result<(), String> {
    let document = html_document().ok_or("Could not access document.cookie")?;
    let expires = (Utc::now() + Duration::days(expiry_days))
        .format("%a, %d %b %Y %H:%M:%S GMT");
    document
        .set_cookie(&format!("{}={}; expires={}; path=/", name, value, expires))
        .map_err(|_| format!("Failed to write cookie {}", name))
}

pub fn remove_cookie(name: &str) -> Result<(), String> {
    let document = html_document().ok_or("Could not access document.cookie")?;
    document
        .set_cookie(&format!(
            "{}=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/",
            name
        ))
        .map_err(|_| format!("Failed to remove cookie {}", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_value_out_of_cookie_string() {
        let cookies = "token=abc123; user_id=42; user_role=Admin";
        assert_eq!(parse_cookie(cookies, "token").as_deref(), Some("abc123"));
        assert_eq!(parse_cookie(cookies, "user_id").as_deref(), Some("42"));
        assert_eq!(parse_cookie(cookies, "user_role").as_deref(), Some("Admin"));
    }

    #[test]
    fn missing_cookie_is_none() {
        assert_eq!(parse_cookie("token=abc123", "user_id"), None);
        assert_eq!(parse_cookie("", "token"), None);
    }

    #[test]
    fn empty_value_counts_as_absent() {
        assert_eq!(parse_cookie("token=; user_id=42", "token"), None);
    }

    #[test]
    fn name_match_is_exact() {
        assert_eq!(parse_cookie("xtoken=abc", "token"), None);
    }
}
