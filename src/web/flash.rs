//! One-time flash notifications
//!
//! A success (or error) banner for the page following a redirect, carried in
//! a `_flash` cookie. Reading the cookie clears it, so the banner shows
//! exactly once.

use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use serde::{Deserialize, Serialize};
use tower_cookies::{Cookie, Cookies};

const FLASH_COOKIE_NAME: &str = "_flash";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashData {
    pub kind: String,
    pub message: String,
}

impl FlashData {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: "success".into(),
            message: message.into(),
        }
    }
}

/// Take the pending flash message, if any, clearing the cookie.
pub fn take_flash(cookies: &Cookies) -> Option<FlashData> {
    let flash_cookie = cookies.get(FLASH_COOKIE_NAME)?;
    let data = serde_json::from_str(flash_cookie.value()).ok();

    let mut removal = Cookie::new(FLASH_COOKIE_NAME, "");
    removal.set_path("/");
    cookies.remove(removal);

    data
}

pub type FlashRedirect = (StatusCode, HeaderMap);

/// Store a flash message and redirect (303) to the home location.
pub fn flash_redirect(cookies: &Cookies, data: FlashData) -> FlashRedirect {
    let payload = serde_json::to_string(&data).unwrap_or_default();
    let mut cookie = Cookie::new(FLASH_COOKIE_NAME, payload);
    cookie.set_path("/");
    cookies.add(cookie);

    let mut headers = HeaderMap::new();
    headers.insert(header::LOCATION, HeaderValue::from_static("/"));

    (StatusCode::SEE_OTHER, headers)
}
