//! Page URLs that respect the deployment base path.
//!
//! When `PUBLIC_URL` is set at compile time (e.g. `/freight` when hosted
//! under a subdirectory), generated URLs are prefixed accordingly. Local
//! builds fall back to root-anchored paths.

use yew_router::Routable;

use crate::router::Route;

fn public_url() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

/// Base path for the router, or `None` when hosted at the root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(public_url())
}

/// Absolute link to a page, with an optional encoded query string.
#[must_use]
pub fn page_href(route: &Route, query: &str) -> String {
    page_href_with_base(route, query, public_url())
}

fn join(base: &str, relative: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');
    format!("{base}/{rel}")
}

fn page_href_with_base(route: &Route, query: &str, base: &str) -> String {
    let path = join(base, &route.to_path());
    let query = query.trim_start_matches('?');
    if query.is_empty() {
        path
    } else {
        format!("{path}?{query}")
    }
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_links_without_base() {
        assert_eq!(page_href(&Route::Intake, ""), "/");
        assert_eq!(
            page_href(&Route::Schedule, "?cargoPeriod=1+week"),
            "/schedule?cargoPeriod=1+week"
        );
    }

    #[test]
    fn page_links_with_public_base() {
        assert_eq!(
            page_href_with_base(&Route::Booking, "id=2", "/freight/"),
            "/freight/booking?id=2"
        );
        assert_eq!(page_href_with_base(&Route::Intake, "", "/freight"), "/freight/");
    }

    #[test]
    fn router_base_is_trimmed_or_absent() {
        assert_eq!(router_base(), None);
        assert_eq!(
            router_base_with_base("/freight/"),
            Some(String::from("/freight"))
        );
        assert_eq!(router_base_with_base("  "), None);
    }
}
