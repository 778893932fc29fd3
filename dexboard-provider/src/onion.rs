//! Gateway rewriting for anonymizing-network endpoints
//!
//! Onion-suffixed hosts are unreachable over the clear web; a configured
//! gateway maps the host's identifier into a path segment instead. The
//! rewrite happens inside the prober before dispatch, callers always pass
//! the endpoint as registered.

use dexboard_core::provider::ONION_SUFFIX;
use url::Url;

/// Rewrite an onion endpoint to route through the clear-web gateway.
///
/// `http://<id>.onion[:port]/path` becomes `{gateway}/<id>/path`; any other
/// endpoint is returned unmodified. An explicit port is dropped: the gateway
/// addresses providers by identifier alone and listens on its own port.
/// Endpoints that fail URL parsing are also returned unmodified and left to
/// fail at dispatch with a transport error.
pub fn rewrite_onion_endpoint(endpoint: &str, gateway: &str) -> String {
    let parsed = match Url::parse(endpoint) {
        Ok(url) => url,
        Err(_) => return endpoint.to_string(),
    };

    let host = match parsed.host_str() {
        Some(host) if host.ends_with(ONION_SUFFIX) => host,
        _ => return endpoint.to_string(),
    };

    let identifier = host.trim_end_matches(ONION_SUFFIX);
    let path = parsed.path().trim_end_matches('/');
    format!("{}/{}{}", gateway.trim_end_matches('/'), identifier, path)
}
