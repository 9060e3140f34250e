//! Request targets and raw responses for the activities service.

use enroll_shared::MutationReply;
use percent_encoding::{
  AsciiSet,
  NON_ALPHANUMERIC,
  utf8_percent_encode
};

/// Characters left alone by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet =
  &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(
  raw: &str
) -> String {
  utf8_percent_encode(
    raw,
    URI_COMPONENT
  )
  .to_string()
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Method {
  Get,
  Post,
  Delete
}

impl Method {
  pub fn as_str(self) -> &'static str {
    match self {
      | Self::Get => "GET",
      | Self::Post => "POST",
      | Self::Delete => "DELETE"
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
  pub method:       Method,
  /// Path plus query, already encoded.
  pub target:       String,
  pub bypass_cache: bool
}

impl ApiRequest {
  pub fn list_activities() -> Self {
    Self {
      method:       Method::Get,
      target:       "/activities"
        .to_string(),
      bypass_cache: true
    }
  }

  pub fn signup(
    activity: &str,
    email: &str
  ) -> Self {
    Self {
      method:       Method::Post,
      target:       format!(
        "/activities/{}/signup?email={}",
        encode_component(activity),
        encode_component(email)
      ),
      bypass_cache: false
    }
  }

  pub fn unregister(
    activity: &str,
    email: &str
  ) -> Self {
    Self {
      method:       Method::Delete,
      target:       format!(
        "/activities/{}/unregister?email={}",
        encode_component(activity),
        encode_component(email)
      ),
      bypass_cache: false
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
  pub status: u16,
  pub body:   String
}

impl ApiResponse {
  pub fn is_success(&self) -> bool {
    (200..300).contains(&self.status)
  }

  /// Reads the body as a mutation reply. Bodies that are not JSON objects
  /// read as `None`; the status alone still decides success.
  pub fn reply(
    &self
  ) -> Option<MutationReply> {
    serde_json::from_str(&self.body).ok()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn components_encode_like_the_browser() {
    assert_eq!(
      encode_component("Chess Club"),
      "Chess%20Club"
    );
    assert_eq!(
      encode_component(
        "a+b@mergington.edu"
      ),
      "a%2Bb%40mergington.edu"
    );
    assert_eq!(
      encode_component("Art/Design & Co"),
      "Art%2FDesign%20%26%20Co"
    );
    assert_eq!(
      encode_component("it's (fun)!*~"),
      "it's%20(fun)!*~"
    );
    assert_eq!(
      encode_component("Café"),
      "Caf%C3%A9"
    );
  }

  #[test]
  fn mutation_targets_encode_path_and_query(
  ) {
    let signup = ApiRequest::signup(
      "Chess Club",
      "x?y@school.edu"
    );
    assert_eq!(signup.method, Method::Post);
    assert_eq!(
      signup.target,
      "/activities/Chess%20Club/signup?email=x%3Fy%40school.edu"
    );
    assert!(!signup.bypass_cache);

    let unregister = ApiRequest::unregister(
      "Math#1",
      "a@b.edu"
    );
    assert_eq!(
      unregister.method,
      Method::Delete
    );
    assert_eq!(
      unregister.target,
      "/activities/Math%231/unregister?email=a%40b.edu"
    );
  }

  #[test]
  fn listing_bypasses_caches() {
    let request =
      ApiRequest::list_activities();
    assert_eq!(request.method, Method::Get);
    assert!(request.bypass_cache);
  }

  #[test]
  fn status_class_decides_success() {
    let ok = ApiResponse {
      status: 204,
      body:   String::new()
    };
    assert!(ok.is_success());
    assert_eq!(ok.reply(), None);

    let rejected = ApiResponse {
      status: 404,
      body:   r#"{"detail":"Activity not found"}"#.to_string()
    };
    assert!(!rejected.is_success());
    assert_eq!(
      rejected
        .reply()
        .as_ref()
        .and_then(MutationReply::detail_text),
      Some("Activity not found")
    );
  }
}
