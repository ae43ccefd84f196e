//! Click metadata extraction from HTTP request headers.

use axum::http::HeaderMap;
use std::net::IpAddr;

use crate::domain::entities::RequestMetadata;

const CF_CONNECTING_IP: &str = "cf-connecting-ip";
const CF_IPCOUNTRY: &str = "cf-ipcountry";
const CF_IPCITY: &str = "cf-ipcity";
const CF_RAY: &str = "cf-ray";
const CF_TIMEZONE: &str = "cf-timezone";
const X_FORWARDED_FOR: &str = "x-forwarded-for";
const X_REAL_IP: &str = "x-real-ip";

/// Builds [`RequestMetadata`] from edge headers.
///
/// Origin address priority:
/// 1. `CF-Connecting-IP`
/// 2. first `X-Forwarded-For` entry, then `X-Real-IP` (only if `behind_proxy`)
/// 3. the TCP peer address, if known
///
/// Country, city and timezone come from `CF-IPCountry`, `CF-IPCity` and
/// `CF-Timezone`. The colo is the suffix of `CF-Ray` (`8f1b2c3d4e5f6a7b-GRU`).
/// Empty or non-UTF-8 header values are treated as missing.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert("cf-connecting-ip", "203.0.113.7".parse().unwrap());
///
/// let meta = extract_request_metadata(&headers, None, false);
/// assert_eq!(meta.ip.as_deref(), Some("203.0.113.7"));
/// ```
pub fn extract_request_metadata(
    headers: &HeaderMap,
    peer: Option<IpAddr>,
    behind_proxy: bool,
) -> RequestMetadata {
    let ip = header_str(headers, CF_CONNECTING_IP)
        .or_else(|| {
            if behind_proxy {
                forwarded_ip(headers)
            } else {
                None
            }
        })
        .or_else(|| peer.map(|addr| addr.to_string()));

    let colo = header_str(headers, CF_RAY).and_then(|ray| {
        ray.rsplit_once('-')
            .map(|(_, colo)| colo.to_string())
            .filter(|colo| !colo.is_empty())
    });

    RequestMetadata {
        ip,
        country: header_str(headers, CF_IPCOUNTRY),
        city: header_str(headers, CF_IPCITY),
        colo,
        timezone: header_str(headers, CF_TIMEZONE),
    }
}

fn forwarded_ip(headers: &HeaderMap) -> Option<String> {
    header_str(headers, X_FORWARDED_FOR)
        .and_then(|list| {
            list.split(',')
                .next()
                .map(|first| first.trim().to_string())
                .filter(|first| !first.is_empty())
        })
        .or_else(|| header_str(headers, X_REAL_IP))
}

fn header_str(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn test_edge_headers() {
        let map = headers(&[
            ("cf-connecting-ip", "203.0.113.7"),
            ("cf-ipcountry", "BR"),
            ("cf-ipcity", "Recife"),
            ("cf-ray", "8f1b2c3d4e5f6a7b-GRU"),
            ("cf-timezone", "America/Recife"),
        ]);

        let meta = extract_request_metadata(&map, None, false);

        assert_eq!(meta.ip.as_deref(), Some("203.0.113.7"));
        assert_eq!(meta.country.as_deref(), Some("BR"));
        assert_eq!(meta.city.as_deref(), Some("Recife"));
        assert_eq!(meta.colo.as_deref(), Some("GRU"));
        assert_eq!(meta.timezone.as_deref(), Some("America/Recife"));
    }

    #[test]
    fn test_no_headers() {
        let meta = extract_request_metadata(&HeaderMap::new(), None, false);
        assert_eq!(meta, RequestMetadata::default());
    }

    #[test]
    fn test_forwarded_ignored_unless_behind_proxy() {
        let map = headers(&[("x-forwarded-for", "10.0.0.1, 10.0.0.2")]);

        let meta = extract_request_metadata(&map, None, false);
        assert!(meta.ip.is_none());

        let meta = extract_request_metadata(&map, None, true);
        assert_eq!(meta.ip.as_deref(), Some("10.0.0.1"));
    }

    #[test]
    fn test_real_ip_fallback() {
        let map = headers(&[("x-real-ip", "10.1.1.1")]);

        let meta = extract_request_metadata(&map, None, true);
        assert_eq!(meta.ip.as_deref(), Some("10.1.1.1"));
    }

    #[test]
    fn test_edge_ip_beats_forwarded() {
        let map = headers(&[
            ("cf-connecting-ip", "203.0.113.7"),
            ("x-forwarded-for", "10.0.0.1"),
        ]);

        let meta = extract_request_metadata(&map, None, true);
        assert_eq!(meta.ip.as_deref(), Some("203.0.113.7"));
    }

    #[test]
    fn test_peer_address_fallback() {
        let peer: IpAddr = "127.0.0.1".parse().unwrap();

        let meta = extract_request_metadata(&HeaderMap::new(), Some(peer), false);
        assert_eq!(meta.ip.as_deref(), Some("127.0.0.1"));
    }

    #[test]
    fn test_ray_without_colo() {
        let map = headers(&[("cf-ray", "8f1b2c3d4e5f6a7b")]);

        let meta = extract_request_metadata(&map, None, false);
        assert!(meta.colo.is_none());
    }

    #[test]
    fn test_blank_values_are_missing() {
        let map = headers(&[("cf-ipcountry", "  ")]);

        let meta = extract_request_metadata(&map, None, false);
        assert!(meta.country.is_none());
    }
}
