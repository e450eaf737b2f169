//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `folio_db` and map
//! errors via [`crate::error::AppError`].

pub mod auth;
pub mod contact;
pub mod messages;
pub mod projects;
pub mod settings;

use std::net::IpAddr;

use axum::http::HeaderMap;
use folio_core::client_ip::{
    resolve_client_ip, DIRECT_IP_HEADERS, FORWARDED_FOR_HEADER, GEO_CITY_HEADERS,
    GEO_COUNTRY_HEADERS, GEO_REGION_HEADERS,
};

/// Client metadata derived from proxy and CDN request headers.
#[derive(Debug, Default)]
pub(crate) struct ClientMeta {
    pub ip: Option<IpAddr>,
    pub user_agent: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
}

/// Extract client IP, user agent, and geo hints from request headers.
///
/// Header values that are not valid UTF-8 are ignored.
pub(crate) fn client_meta(headers: &HeaderMap) -> ClientMeta {
    let direct = DIRECT_IP_HEADERS
        .iter()
        .filter_map(|name| header_str(headers, name));
    let forwarded = header_str(headers, FORWARDED_FOR_HEADER);

    ClientMeta {
        ip: resolve_client_ip(direct, forwarded),
        user_agent: header_str(headers, "user-agent").map(str::to_string),
        country: first_header(headers, GEO_COUNTRY_HEADERS),
        region: first_header(headers, GEO_REGION_HEADERS),
        city: first_header(headers, GEO_CITY_HEADERS),
    }
}

fn header_str<'h>(headers: &'h HeaderMap, name: &str) -> Option<&'h str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn first_header(headers: &HeaderMap, names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| header_str(headers, name))
        .map(|v| v.trim())
        .find(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn client_meta_prefers_direct_header() {
        let mut headers = HeaderMap::new();
        headers.insert("cf-connecting-ip", HeaderValue::from_static("203.0.113.9"));
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("198.51.100.1, 10.0.0.1"),
        );
        let meta = client_meta(&headers);
        assert_eq!(meta.ip, Some("203.0.113.9".parse().unwrap()));
    }

    #[test]
    fn client_meta_collects_geo_and_user_agent() {
        let mut headers = HeaderMap::new();
        headers.insert("cf-ipcountry", HeaderValue::from_static("DE"));
        headers.insert("x-vercel-ip-city", HeaderValue::from_static("Berlin"));
        headers.insert("user-agent", HeaderValue::from_static("curl/8.0"));
        let meta = client_meta(&headers);
        assert_eq!(meta.country.as_deref(), Some("DE"));
        assert_eq!(meta.city.as_deref(), Some("Berlin"));
        assert_eq!(meta.region, None);
        assert_eq!(meta.user_agent.as_deref(), Some("curl/8.0"));
    }

    #[test]
    fn client_meta_empty_headers() {
        let meta = client_meta(&HeaderMap::new());
        assert_eq!(meta.ip, None);
        assert_eq!(meta.user_agent, None);
    }
}
