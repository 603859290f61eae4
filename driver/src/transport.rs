//! Blocking HTTP transport backed by ureq.

use posts_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};
use ureq::http::Response;
use ureq::typestate::{WithBody, WithoutBody};
use ureq::{Agent, Body, RequestBuilder};

/// Executes `HttpRequest` values over the network.
///
/// The agent is built with `http_status_as_error(false)` so 4xx/5xx come back
/// as `HttpResponse` data and the core decides what counts as failure. No
/// timeouts are configured.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        tracing::debug!(method = %req.method, url = %req.path, "sending request");

        let result = match req.method {
            HttpMethod::Get => send_without_body(self.agent.get(&req.path), &req),
            HttpMethod::Delete => send_without_body(self.agent.delete(&req.path), &req),
            HttpMethod::Post => send_with_body(self.agent.post(&req.path), &req),
            HttpMethod::Put => send_with_body(self.agent.put(&req.path), &req),
            HttpMethod::Patch => send_with_body(self.agent.patch(&req.path), &req),
        };
        let mut response = result.map_err(|e| {
            tracing::warn!(method = %req.method, url = %req.path, error = %e, "request failed");
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let response = HttpResponse {
            status,
            headers,
            body,
        };
        tracing::debug!(
            method = %req.method,
            url = %req.path,
            status,
            content_type = response.header("content-type").unwrap_or("-"),
            "received response"
        );
        Ok(response)
    }
}

fn with_headers<B>(mut builder: RequestBuilder<B>, req: &HttpRequest) -> RequestBuilder<B> {
    for (name, value) in &req.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

/// GET and DELETE. A body, when present, is forced onto the request.
fn send_without_body(
    builder: RequestBuilder<WithoutBody>,
    req: &HttpRequest,
) -> Result<Response<Body>, ureq::Error> {
    let builder = with_headers(builder, req);
    match &req.body {
        Some(body) => builder.force_send_body().send(body.as_bytes()),
        None => builder.call(),
    }
}

fn send_with_body(
    builder: RequestBuilder<WithBody>,
    req: &HttpRequest,
) -> Result<Response<Body>, ureq::Error> {
    let builder = with_headers(builder, req);
    match &req.body {
        Some(body) => builder.send(body.as_bytes()),
        None => builder.send_empty(),
    }
}
