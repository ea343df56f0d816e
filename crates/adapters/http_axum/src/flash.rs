//! One-shot notices carried across a redirect in a signed cookie.

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// Name of the cookie holding the pending notice.
pub const FLASH_COOKIE: &str = "flash";

/// Longest notice kept, in bytes. Longer notices are cut on a char boundary
/// so the encoded cookie stays well under the 4 KB browsers accept.
pub const MAX_NOTICE_LEN: usize = 512;

/// Bytes that may not appear raw in a cookie value. Non-ASCII is always encoded.
const COOKIE_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b',')
    .add(b';')
    .add(b'\\');

fn truncate(message: &str) -> String {
    if message.len() <= MAX_NOTICE_LEN {
        return message.to_string();
    }
    let mut end = MAX_NOTICE_LEN;
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &message[..end])
}

/// Queue `message` for display on the next page load.
#[must_use]
pub fn push(jar: SignedCookieJar, message: &str) -> SignedCookieJar {
    let value = utf8_percent_encode(&truncate(message), COOKIE_VALUE).to_string();
    jar.add(
        Cookie::build((FLASH_COOKIE, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

/// Consume the pending notice, if any.
///
/// Cookies with a bad signature are ignored.
#[must_use]
pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Vec<String>) {
    let Some(cookie) = jar.get(FLASH_COOKIE) else {
        return (jar, Vec::new());
    };
    let message = percent_decode_str(cookie.value())
        .decode_utf8_lossy()
        .into_owned();
    let jar = jar.remove(Cookie::build(FLASH_COOKIE).path("/"));
    (jar, vec![message])
}
