//! Wire shapes exchanged with the activities service.
//!
//! Everything here is deliberately loose: the server is free to send
//! participants as a list or as a keyed object, and optional fields may be
//! missing or mistyped. Canonicalisation happens in `enroll_core`.

use serde::{
  Deserialize,
  Serialize
};
use serde_json::{
  Map,
  Value
};

/// The `GET /activities` body, keyed by activity name in server order.
pub type ActivitySetBody =
  Map<String, Value>;

/// Participants exactly as received.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
#[serde(untagged)]
pub enum ParticipantCollection {
  List(Vec<Value>),
  Map(Map<String, Value>),
  Other(Value)
}

#[derive(
  Debug,
  Clone,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct RawActivityRecord {
  #[serde(default)]
  pub description:      Option<Value>,
  #[serde(default)]
  pub schedule:         Option<Value>,
  #[serde(default)]
  pub max_participants: Option<Value>,
  #[serde(default)]
  pub participants:
    Option<ParticipantCollection>
}

/// Body of a signup or unregister response, successful or not.
#[derive(
  Debug,
  Clone,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct MutationReply {
  #[serde(default)]
  pub message: Option<Value>,
  #[serde(default)]
  pub detail:  Option<Value>
}

impl MutationReply {
  pub fn message_text(
    &self
  ) -> Option<&str> {
    non_empty_text(
      self.message.as_ref()
    )
  }

  /// Only string details count; framework validation errors send a list.
  pub fn detail_text(
    &self
  ) -> Option<&str> {
    non_empty_text(
      self.detail.as_ref()
    )
  }
}

fn non_empty_text(
  value: Option<&Value>
) -> Option<&str> {
  match value {
    | Some(Value::String(text))
      if !text.is_empty() =>
    {
      Some(text.as_str())
    }
    | _ => None
  }
}
