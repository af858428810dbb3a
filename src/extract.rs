//! Extraction of per-request metadata surfaced by the API.
//!
//! Captures the TCP peer address plus the gateway-related headers that
//! upstream proxies and API gateways attach to forwarded requests.

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use http::{header::USER_AGENT, request::Parts};

/// Header set by load balancers and proxies with the original client address.
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Header set by the API management gateway fronting this service.
pub const APIM_GATEWAY_HEADER: &str = "x-apim-gateway";

/// Request metadata extracted from the connection and headers.
///
/// `client_ip` is the peer address of the TCP connection, which is the
/// gateway's address when the service sits behind one; the original client
/// is then found in `forwarded_for`. All fields are optional and serialize
/// to `null` when absent.
#[derive(Clone, Debug)]
pub struct RequestMeta {
    pub client_ip: Option<String>,
    pub forwarded_for: Option<String>,
    pub apim_gateway: Option<String>,
    /// Captured for logging only; never included in response bodies.
    pub user_agent: Option<String>,
}

impl<S> FromRequestParts<S> for RequestMeta
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let client_ip = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string());

        let header = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned)
        };

        Ok(Self {
            client_ip,
            forwarded_for: header(FORWARDED_FOR_HEADER),
            apim_gateway: header(APIM_GATEWAY_HEADER),
            user_agent: header(USER_AGENT.as_str()),
        })
    }
}
