//! Request extractors shared by the REST handlers

use std::convert::Infallible;
use std::net::SocketAddr;

use axum::async_trait;
use axum::extract::{ConnectInfo, FromRequest, FromRequestParts, Query, Request};
use axum::http::header::{AsHeaderName, USER_AGENT};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// JSON body whose rejections become [`ApiError::InvalidRequest`] (400)
///
/// Must be the last extractor of a handler.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(ApiError::InvalidRequest(format!(
                "Invalid request: {}",
                rejection.body_text()
            ))),
        }
    }
}

/// Query string whose rejections become [`ApiError::InvalidRequest`] (400)
#[derive(Debug)]
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(QueryParams(value)),
            Err(rejection) => Err(ApiError::InvalidRequest(format!(
                "Invalid request: {}",
                rejection.body_text()
            ))),
        }
    }
}

/// Network origin of the caller, recorded on audit and activity entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin {
    pub ip: String,
    pub user_agent: String,
}

impl RequestOrigin {
    /// Client IP: first `X-Forwarded-For` hop, then `X-Real-IP`, then the
    /// socket peer address, then `unknown`
    fn from_parts(parts: &Parts) -> Self {
        let headers = &parts.headers;

        let forwarded = header_str(headers, "x-forwarded-for")
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty());
        let real_ip = header_str(headers, "x-real-ip")
            .map(str::trim)
            .filter(|v| !v.is_empty());
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string());

        let ip = forwarded
            .or(real_ip)
            .map(str::to_string)
            .or(peer)
            .unwrap_or_else(|| "unknown".to_string());

        Self {
            ip,
            user_agent: header_str(headers, USER_AGENT).unwrap_or_default().to_string(),
        }
    }
}

fn header_str<K: AsHeaderName>(headers: &HeaderMap, name: K) -> Option<&str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestOrigin
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request as HttpRequest;

    fn parts(headers: &[(&str, &str)]) -> Parts {
        let mut builder = HttpRequest::builder().uri("/");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_forwarded_for_wins() {
        let origin = RequestOrigin::from_parts(&parts(&[
            ("x-forwarded-for", "203.0.113.7, 10.0.0.1"),
            ("x-real-ip", "198.51.100.2"),
            ("user-agent", "curl/8.4"),
        ]));
        assert_eq!(origin.ip, "203.0.113.7");
        assert_eq!(origin.user_agent, "curl/8.4");
    }

    #[test]
    fn test_peer_address_fallback() {
        let mut p = parts(&[]);
        let addr: SocketAddr = "192.0.2.10:5555".parse().unwrap();
        p.extensions.insert(ConnectInfo(addr));

        let origin = RequestOrigin::from_parts(&p);
        assert_eq!(origin.ip, "192.0.2.10");
        assert_eq!(origin.user_agent, "");
    }

    #[tokio::test]
    async fn test_duplicate_query_key_is_invalid_request() {
        let mut p = HttpRequest::builder()
            .uri("/audit-logs?limit=1&limit=2")
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let err = QueryParams::<crate::api::rest::LimitParams>::from_request_parts(&mut p, &())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(ref msg) if msg.starts_with("Invalid request")));
    }

    #[tokio::test]
    async fn test_query_params_parse() {
        let mut p = HttpRequest::builder()
            .uri("/audit-logs?limit=7")
            .body(())
            .unwrap()
            .into_parts()
            .0;

        let QueryParams(params) =
            QueryParams::<crate::api::rest::LimitParams>::from_request_parts(&mut p, &())
                .await
                .unwrap();
        assert_eq!(params.limit.as_deref(), Some("7"));
    }

    #[test]
    fn test_unknown_origin() {
        assert_eq!(RequestOrigin::from_parts(&parts(&[])).ip, "unknown");
    }
}
