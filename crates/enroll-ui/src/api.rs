use enroll_core::config::ClientConfig;
use enroll_core::error::SyncError;
use enroll_core::wire::{
  ApiRequest,
  ApiResponse,
  Method
};
use gloo::net::http::Request;
use web_sys::RequestCache;

/// Sends one request and reads the body as text. Only transport failures
/// are errors here; status classification is left to the caller.
pub async fn send_request(
  config: &ClientConfig,
  request: &ApiRequest
) -> Result<ApiResponse, SyncError> {
  let url = config.url_for(&request.target);
  tracing::debug!(
    method = request.method.as_str(),
    %url,
    "sending request"
  );

  let builder = match request.method {
    | Method::Get => Request::get(&url),
    | Method::Post => Request::post(&url),
    | Method::Delete => {
      Request::delete(&url)
    }
  };
  let builder = if request.bypass_cache {
    builder.cache(RequestCache::NoStore)
  } else {
    builder
  };

  let response =
    builder.send().await.map_err(|e| {
      SyncError::Network(e.to_string())
    })?;
  let status = response.status();
  let body =
    response.text().await.map_err(|e| {
      SyncError::InvalidBody(e.to_string())
    })?;

  tracing::debug!(
    status,
    body_len = body.len(),
    "received response"
  );
  Ok(ApiResponse { status, body })
}
