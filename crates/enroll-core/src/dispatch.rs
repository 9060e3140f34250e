//! The two mutation intents and how their responses read to the user.

use crate::error::SyncError;
use crate::status::StatusKind;
use crate::wire::{
  ApiRequest,
  ApiResponse
};

pub const GENERIC_FAILURE: &str =
  "An error occurred";
pub const SIGNUP_UNREACHABLE: &str =
  "Failed to sign up. Please try again.";
pub const UNREGISTER_UNREACHABLE: &str =
  "Failed to unregister. Please try \
   again.";
pub const SIGNUP_APPLIED: &str =
  "Signed up";
pub const UNREGISTER_APPLIED: &str =
  "Participant removed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
  Signup {
    activity: String,
    email:    String
  },
  Unregister {
    activity:    String,
    participant: String
  }
}

impl Mutation {
  pub fn kind(&self) -> &'static str {
    match self {
      | Self::Signup { .. } => "signup",
      | Self::Unregister { .. } => {
        "unregister"
      }
    }
  }

  pub fn activity(&self) -> &str {
    match self {
      | Self::Signup { activity, .. }
      | Self::Unregister {
        activity,
        ..
      } => activity
    }
  }

  pub fn request(&self) -> ApiRequest {
    match self {
      | Self::Signup { activity, email } => {
        ApiRequest::signup(activity, email)
      }
      | Self::Unregister {
        activity,
        participant
      } => {
        ApiRequest::unregister(
          activity,
          participant
        )
      }
    }
  }

  /// Classifies a settled request. The status class alone decides
  /// success; the body only supplies wording.
  pub fn outcome(
    &self,
    result: &Result<ApiResponse, SyncError>
  ) -> MutationOutcome {
    let response = match result {
      | Ok(response) => response,
      | Err(_) => {
        return MutationOutcome::Unreachable {
          message: self
            .unreachable_text()
            .to_string()
        };
      }
    };

    let reply = response.reply();
    if response.is_success() {
      let message = reply
        .as_ref()
        .and_then(|reply| {
          reply.message_text()
        })
        .unwrap_or(self.applied_text());
      return MutationOutcome::Applied {
        message: message.to_string()
      };
    }

    let message = reply
      .as_ref()
      .and_then(|reply| {
        match self {
          | Self::Signup { .. } => {
            reply.detail_text()
          }
          | Self::Unregister { .. } => {
            reply
              .detail_text()
              .or_else(|| {
                reply.message_text()
              })
          }
        }
      })
      .unwrap_or(GENERIC_FAILURE);
    MutationOutcome::Rejected {
      status:  response.status,
      message: message.to_string()
    }
  }

  fn applied_text(&self) -> &'static str {
    match self {
      | Self::Signup { .. } => {
        SIGNUP_APPLIED
      }
      | Self::Unregister { .. } => {
        UNREGISTER_APPLIED
      }
    }
  }

  fn unreachable_text(
    &self
  ) -> &'static str {
    match self {
      | Self::Signup { .. } => {
        SIGNUP_UNREACHABLE
      }
      | Self::Unregister { .. } => {
        UNREGISTER_UNREACHABLE
      }
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
  Applied { message: String },
  Rejected {
    status:  u16,
    message: String
  },
  Unreachable { message: String }
}

impl MutationOutcome {
  pub fn is_applied(&self) -> bool {
    matches!(self, Self::Applied { .. })
  }

  pub fn message(&self) -> &str {
    match self {
      | Self::Applied { message }
      | Self::Rejected { message, .. }
      | Self::Unreachable { message } => {
        message
      }
    }
  }

  pub fn status_kind(
    &self
  ) -> StatusKind {
    if self.is_applied() {
      StatusKind::Success
    } else {
      StatusKind::Error
    }
  }
}

pub fn confirmation_prompt(
  activity: &str,
  participant: &str
) -> String {
  format!(
    "Remove {participant} from \
     {activity}?"
  )
}

/// What a delegated click handler can learn about the element that was
/// actually clicked.
pub trait ClickTarget {
  /// Whether the element is a participant removal control.
  fn is_removal_control(&self) -> bool;

  /// The identifier carried by the enclosing roster entry.
  fn item_identifier(
    &self
  ) -> Option<String>;
}

/// Resolves a click on a participant list to the participant to remove.
/// Clicks anywhere but a removal control resolve to nothing.
pub fn resolve_removal<T>(
  target: &T
) -> Option<String>
where
  T: ClickTarget + ?Sized
{
  if !target.is_removal_control() {
    return None;
  }
  target
    .item_identifier()
    .filter(|identifier| {
      !identifier.is_empty()
    })
}
