//! Canonical activity records built from whatever the server sent.

use enroll_shared::{
  ActivitySetBody,
  ParticipantCollection,
  RawActivityRecord
};
use serde_json::Value;
use tracing::{
  debug,
  warn
};

use crate::error::SyncError;
use crate::wire::ApiResponse;

#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct ActivityRecord {
  pub description:      String,
  pub schedule:         String,
  pub max_participants: u32,
  pub participants:     Vec<String>
}

impl ActivityRecord {
  pub fn spots_left(&self) -> i64 {
    spots_left(
      self.max_participants,
      self.participants.len()
    )
  }
}

/// Capacity minus roster size. Negative when the server reports more
/// participants than seats.
pub fn spots_left(
  max_participants: u32,
  participant_count: usize
) -> i64 {
  let count = i64::try_from(
    participant_count
  )
  .unwrap_or(i64::MAX);
  i64::from(max_participants) - count
}

pub fn normalize(
  raw: &RawActivityRecord
) -> ActivityRecord {
  ActivityRecord {
    description:      field_text(
      raw.description.as_ref()
    ),
    schedule:         field_text(
      raw.schedule.as_ref()
    ),
    max_participants: capacity(
      raw.max_participants.as_ref()
    ),
    participants:     participant_list(
      raw.participants.as_ref()
    )
  }
}

fn participant_list(
  participants: Option<
    &ParticipantCollection
  >
) -> Vec<String> {
  match participants {
    | Some(
      ParticipantCollection::List(items)
    ) => {
      items
        .iter()
        .map(participant_text)
        .collect()
    }
    | Some(
      ParticipantCollection::Map(entries)
    ) => {
      entries
        .values()
        .map(participant_text)
        .collect()
    }
    | Some(
      ParticipantCollection::Other(value)
    ) => {
      debug!(
        kind = value_kind(value),
        "participants field has no \
         usable shape"
      );
      Vec::new()
    }
    | None => Vec::new()
  }
}

/// String form of a participant entry. Scalars print the way a browser
/// would stringify them; nested values fall back to compact JSON.
pub fn participant_text(
  value: &Value
) -> String {
  match value {
    | Value::String(text) => text.clone(),
    | Value::Null => "null".to_string(),
    | Value::Bool(flag) => {
      flag.to_string()
    }
    | Value::Number(number) => {
      number.to_string()
    }
    | Value::Array(_)
    | Value::Object(_) => value.to_string()
  }
}

fn field_text(
  value: Option<&Value>
) -> String {
  match value {
    | Some(Value::String(text)) => {
      text.clone()
    }
    | Some(Value::Number(number)) => {
      number.to_string()
    }
    | Some(Value::Bool(flag)) => {
      flag.to_string()
    }
    | Some(other @ (Value::Array(_) | Value::Object(_))) => {
      debug!(
        kind = value_kind(other),
        "text field is not a scalar"
      );
      String::new()
    }
    | Some(Value::Null) | None => {
      String::new()
    }
  }
}

fn capacity(
  value: Option<&Value>
) -> u32 {
  let parsed = match value {
    | Some(Value::Number(number)) => {
      number
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .or_else(|| {
          number
            .as_f64()
            .filter(|n| {
              n.is_finite()
                && *n >= 0.0
                && *n <= f64::from(u32::MAX)
            })
            .map(|n| n.trunc() as u32)
        })
    }
    | Some(Value::String(text)) => {
      text.trim().parse::<u32>().ok()
    }
    | _ => None
  };

  if parsed.is_none()
    && value.is_some_and(|v| !v.is_null())
  {
    debug!(
      "max_participants is not a \
       non-negative integer; using 0"
    );
  }
  parsed.unwrap_or(0)
}

fn value_kind(
  value: &Value
) -> &'static str {
  match value {
    | Value::Null => "null",
    | Value::Bool(_) => "bool",
    | Value::Number(_) => "number",
    | Value::String(_) => "string",
    | Value::Array(_) => "array",
    | Value::Object(_) => "object"
  }
}

/// Activities of one fetch, in the order the server listed them.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct ActivitySet {
  entries: Vec<(String, ActivityRecord)>
}

impl ActivitySet {
  pub fn from_body(
    body: ActivitySetBody
  ) -> Self {
    let entries = body
      .into_iter()
      .map(|(name, value)| {
        let raw = serde_json::from_value::<
          RawActivityRecord,
        >(value)
        .unwrap_or_else(|error| {
          warn!(
            activity = %name,
            %error,
            "activity record is not an \
             object; rendering defaults"
          );
          RawActivityRecord::default()
        });
        let record = normalize(&raw);
        (name, record)
      })
      .collect();
    Self { entries }
  }

  pub fn parse(
    text: &str
  ) -> Result<Self, SyncError> {
    serde_json::from_str::<ActivitySetBody>(
      text
    )
    .map(Self::from_body)
    .map_err(|error| {
      SyncError::InvalidBody(
        error.to_string()
      )
    })
  }

  /// Accepts only 2xx listings; anything else counts as a fetch failure.
  pub fn from_response(
    response: &ApiResponse
  ) -> Result<Self, SyncError> {
    if !response.is_success() {
      let detail = response
        .reply()
        .and_then(|reply| {
          reply
            .detail_text()
            .map(str::to_string)
        });
      return Err(SyncError::Rejected {
        status: response.status,
        detail
      });
    }
    Self::parse(&response.body)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn get(
    &self,
    name: &str
  ) -> Option<&ActivityRecord> {
    self
      .entries
      .iter()
      .find(|(entry, _)| entry == name)
      .map(|(_, record)| record)
  }

  pub fn iter(
    &self
  ) -> impl Iterator<
    Item = (&str, &ActivityRecord)
  > {
    self.entries.iter().map(
      |(name, record)| {
        (name.as_str(), record)
      }
    )
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn raw(value: Value) -> RawActivityRecord {
    serde_json::from_value(value)
      .expect("raw record")
  }

  #[test]
  fn list_participants_keep_order_and_stringify(
  ) {
    let record = normalize(&raw(json!({
      "participants": ["zoe@x.edu", 42, true, "adam@x.edu"]
    })));
    assert_eq!(
      record.participants,
      vec![
        "zoe@x.edu",
        "42",
        "true",
        "adam@x.edu"
      ]
    );
  }

  #[test]
  fn object_participants_follow_key_insertion_order(
  ) {
    let record = normalize(&raw(json!({
      "participants": {
        "3": "c@x.edu",
        "1": "a@x.edu",
        "2": "b@x.edu"
      }
    })));
    assert_eq!(
      record.participants,
      vec![
        "c@x.edu",
        "a@x.edu",
        "b@x.edu"
      ]
    );
  }

  #[test]
  fn unusable_participants_become_empty() {
    for participants in [
      json!(null),
      json!("a@x.edu"),
      json!(7),
      json!(false)
    ] {
      let record = normalize(&raw(
        json!({ "participants": participants })
      ));
      assert!(
        record.participants.is_empty()
      );
    }
    assert!(
      normalize(&raw(json!({})))
        .participants
        .is_empty()
    );
  }

  #[test]
  fn missing_fields_take_defaults() {
    let record = normalize(&raw(json!({
      "schedule": "Fridays, 3:30 PM",
      "max_participants": "twelve"
    })));
    assert_eq!(record.description, "");
    assert_eq!(
      record.schedule,
      "Fridays, 3:30 PM"
    );
    assert_eq!(record.max_participants, 0);
  }

  #[test]
  fn capacity_accepts_numeric_forms() {
    let cases = [
      (json!(12), 12),
      (json!(12.0), 12),
      (json!("30"), 30),
      (json!(-4), 0),
      (json!(null), 0)
    ];
    for (value, expected) in cases {
      let record = normalize(&raw(
        json!({ "max_participants": value })
      ));
      assert_eq!(
        record.max_participants,
        expected
      );
    }
  }

  #[test]
  fn spots_left_is_not_clamped() {
    assert_eq!(spots_left(3, 2), 1);
    assert_eq!(spots_left(1, 2), -1);
    assert_eq!(spots_left(0, 0), 0);
  }

  #[test]
  fn malformed_record_does_not_hide_siblings(
  ) {
    let set = ActivitySet::parse(
      r#"{
        "Chess Club": {"max_participants": 2, "participants": ["a@x.edu"]},
        "Broken": "not a record",
        "Gym Class": {"participants": {"k": "b@x.edu"}}
      }"#,
    )
    .expect("activity set");

    let names: Vec<&str> = set
      .iter()
      .map(|(name, _)| name)
      .collect();
    assert_eq!(
      names,
      vec![
        "Chess Club",
        "Broken",
        "Gym Class"
      ]
    );
    assert_eq!(
      set.get("Broken"),
      Some(&ActivityRecord::default())
    );
    assert_eq!(
      set
        .get("Gym Class")
        .map(|r| r.participants.clone()),
      Some(vec!["b@x.edu".to_string()])
    );
    assert_eq!(
      set
        .get("Chess Club")
        .map(ActivityRecord::spots_left),
      Some(1)
    );
  }

  #[test]
  fn non_object_bodies_are_fetch_failures(
  ) {
    assert!(matches!(
      ActivitySet::parse("<html>oops</html>"),
      Err(SyncError::InvalidBody(_))
    ));
    assert!(matches!(
      ActivitySet::parse("[1, 2]"),
      Err(SyncError::InvalidBody(_))
    ));
  }

  #[test]
  fn error_status_is_a_fetch_failure() {
    let response = ApiResponse {
      status: 503,
      body:   r#"{"detail":"maintenance"}"#
        .to_string()
    };
    assert_eq!(
      ActivitySet::from_response(&response),
      Err(SyncError::Rejected {
        status: 503,
        detail: Some(
          "maintenance".to_string()
        )
      })
    );
  }
}
