use std::borrow::Cow;
use url::Url;

/// Placeholder link target for URLs that must not be rendered as-is.
pub const INERT_HREF: &str = "#";

/// Host of a link, if the URL parses and has a non-empty host.
///
/// # Examples
///
/// ```
/// use daily_digest::util::link_host;
///
/// assert_eq!(link_host("https://example.com/x").as_deref(), Some("example.com"));
/// assert_eq!(link_host("not a url"), None);
/// ```
pub fn link_host(url: &str) -> Option<String> {
    let url = Url::parse(url.trim()).ok()?;
    url.host_str()
        .filter(|host| !host.is_empty())
        .map(str::to_owned)
}

/// Link target safe to place in an `href`.
///
/// Feed URLs are untrusted. Anything other than `http`, `https` or `mailto`
/// (notably `javascript:` and `data:`) is replaced by [`INERT_HREF`].
/// Escaping for the attribute context is left to the template layer.
pub fn safe_href(url: &str) -> Cow<'_, str> {
    match Url::parse(url.trim()) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https" | "mailto") => {
            Cow::Borrowed(url.trim())
        }
        _ => Cow::Borrowed(INERT_HREF),
    }
}

/// Image source safe to place in an `src`: only `http` and `https` URLs.
pub fn safe_image_src(url: &str) -> Option<&str> {
    let trimmed = url.trim();
    match Url::parse(trimmed) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Some(trimmed),
        _ => None,
    }
}
