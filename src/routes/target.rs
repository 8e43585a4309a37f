//! Request target resolution.
//!
//! Resolves a request target against `http://<host>/` with a WHATWG URL
//! parser, keeping only the path. The host comes from the Host header, or
//! [`DEFAULT_HOST_TOKEN`] when the header is missing or empty.

use http::Uri;
use url::Url;

use crate::config::DEFAULT_HOST_TOKEN;
use crate::error::TargetError;

/// Resolve the path component of a request target.
///
/// Dot segments, backslashes and scheme-relative targets are handled the way
/// a browser would, so `//x/crash` and `/a\..\crash` both resolve to
/// `/crash`. Fails when the host does not form a valid base URL, the target
/// cannot be joined onto it, or the path contains a malformed percent-escape.
pub fn resolve_path(host: Option<&str>, uri: &Uri) -> Result<String, TargetError> {
    let host = host
        .filter(|h| !h.is_empty())
        .unwrap_or(DEFAULT_HOST_TOKEN);
    let base = Url::parse(&format!("http://{host}/"))
        .map_err(|_| TargetError::InvalidHost(host.to_string()))?;

    let target = uri.to_string();
    let resolved = base
        .join(&target)
        .map_err(|e| TargetError::InvalidTarget(format!("{target}: {e}")))?;

    let path = resolved.path();
    check_escapes(path)?;
    Ok(path.to_string())
}

/// Every `%` must be followed by two hex digits.
fn check_escapes(path: &str) -> Result<(), TargetError> {
    let bytes = path.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                return Err(TargetError::InvalidEscape(path.to_string()));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}
