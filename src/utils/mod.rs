//! Utility functions and helpers.

pub mod digest;

use url::Url;

/// Resolve a site route against the public base URL.
pub fn resolve_url(base: &Url, route: &str) -> String {
    base.join(route.trim_start_matches('/'))
        .map(|u| u.to_string())
        .unwrap_or_else(|_| route.to_string())
}

/// Storage key for a route: `/` → `index.html`, `/about/` → `about/index.html`.
///
/// Routes that name a file (`/sitemap.xml`) map to that file.
pub fn route_to_path(route: &str) -> String {
    let trimmed = route.trim_start_matches('/');
    if trimmed.is_empty() {
        "index.html".to_string()
    } else if trimmed.ends_with('/') {
        format!("{trimmed}index.html")
    } else {
        trimmed.to_string()
    }
}

/// Site-internal route of an `href`, without query or fragment.
///
/// Returns `None` for external, protocol-relative and fragment-only links.
pub fn internal_route(href: &str) -> Option<String> {
    if !href.starts_with('/') || href.starts_with("//") {
        return None;
    }
    let end = href.find(['?', '#']).unwrap_or(href.len());
    Some(href[..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url() {
        let base = Url::parse("https://kasparro.example/").unwrap();
        assert_eq!(
            resolve_url(&base, "/app/audit/"),
            "https://kasparro.example/app/audit/"
        );
        assert_eq!(resolve_url(&base, "/"), "https://kasparro.example/");

        let nested = Url::parse("https://example.com/docs/").unwrap();
        assert_eq!(
            resolve_url(&nested, "/about/"),
            "https://example.com/docs/about/"
        );
    }

    #[test]
    fn test_route_to_path() {
        assert_eq!(route_to_path("/"), "index.html");
        assert_eq!(route_to_path("/about/"), "about/index.html");
        assert_eq!(
            route_to_path("/app/audit/eeat-trust/"),
            "app/audit/eeat-trust/index.html"
        );
        assert_eq!(route_to_path("/sitemap.xml"), "sitemap.xml");
    }

    #[test]
    fn test_internal_route() {
        assert_eq!(internal_route("/platform/"), Some("/platform/".to_string()));
        assert_eq!(
            internal_route("/app/audit/?q=trust#top"),
            Some("/app/audit/".to_string())
        );
        assert_eq!(internal_route("https://example.com/"), None);
        assert_eq!(internal_route("//cdn.example.com/x.js"), None);
        assert_eq!(internal_route("#details"), None);
    }
}
