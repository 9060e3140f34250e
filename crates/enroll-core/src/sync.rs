//! The synchronisation loop between the page and the activities service.
//!
//! [`SyncController`] is a plain state machine: the UI shell feeds it
//! [`Event`]s and carries out the [`Effect`]s it returns. The server is the
//! only source of truth, so every applied mutation is followed by a full
//! refresh, and a refresh always replaces the whole listing. Responses are
//! applied in arrival order; when two refreshes race, the later arrival wins.

use tracing::{
  debug,
  error,
  info,
  warn
};

use crate::config::ClientConfig;
use crate::dispatch::{
  Mutation,
  confirmation_prompt
};
use crate::error::SyncError;
use crate::normalize::ActivitySet;
use crate::render::{
  OptionView,
  RenderedView,
  render
};
use crate::status::{
  HideTimer,
  StatusKind,
  StatusLifecycle,
  StatusMessage
};
use crate::wire::{
  ApiRequest,
  ApiResponse
};

pub const LOADING_NOTICE: &str =
  "Loading activities...";
pub const LOAD_FAILURE_NOTICE: &str =
  "Failed to load activities. Please \
   try again later.";

/// What occupies the activity area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
  Loading,
  Ready(RenderedView),
  Failed(&'static str)
}

/// Why a request was sent; decides which event its result becomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Purpose {
  Refresh { cycle: u64 },
  Mutation(Mutation)
}

impl Purpose {
  pub fn settle(
    self,
    result: Result<ApiResponse, SyncError>
  ) -> Event {
    match self {
      | Self::Refresh { cycle } => {
        Event::ActivitiesLoaded {
          cycle,
          result
        }
      }
      | Self::Mutation(mutation) => {
        Event::MutationSettled {
          mutation,
          result
        }
      }
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
  Load,
  ActivitiesLoaded {
    cycle:  u64,
    result: Result<ApiResponse, SyncError>
  },
  SignupSubmitted {
    activity: String,
    email:    String
  },
  RemoveRequested {
    activity:    String,
    participant: String
  },
  RemovalAnswered {
    activity:    String,
    participant: String,
    confirmed:   bool
  },
  MutationSettled {
    mutation: Mutation,
    result:   Result<ApiResponse, SyncError>
  },
  StatusTimerElapsed { generation: u64 }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
  Send {
    request: ApiRequest,
    purpose: Purpose
  },
  AskConfirmation {
    prompt:      String,
    activity:    String,
    participant: String
  },
  ResetSignupForm,
  ArmStatusTimer(HideTimer)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncController {
  listing: Listing,
  options: Vec<OptionView>,
  status:  StatusLifecycle,
  cycle:   u64
}

impl SyncController {
  pub fn new(
    config: &ClientConfig
  ) -> Self {
    Self {
      listing: Listing::Loading,
      options: vec![
        OptionView::placeholder(),
      ],
      status:  StatusLifecycle::new(
        config.status_display_ms
      ),
      cycle:   0
    }
  }

  pub fn listing(&self) -> &Listing {
    &self.listing
  }

  /// Options of the last successful render. A failed refresh keeps them so
  /// the form stays usable.
  pub fn options(&self) -> &[OptionView] {
    &self.options
  }

  pub fn status(
    &self
  ) -> Option<&StatusMessage> {
    self.status.current()
  }

  /// Starts a refresh cycle.
  pub fn refresh(&mut self) -> Effect {
    self.cycle =
      self.cycle.wrapping_add(1);
    info!(
      cycle = self.cycle,
      "refreshing activities"
    );
    Effect::Send {
      request: ApiRequest::list_activities(
      ),
      purpose: Purpose::Refresh {
        cycle: self.cycle
      }
    }
  }

  pub fn show(
    &mut self,
    text: impl Into<String>,
    kind: StatusKind
  ) -> Effect {
    Effect::ArmStatusTimer(
      self.status.show(text, kind)
    )
  }

  pub fn hide(&mut self) {
    self.status.hide();
  }

  pub fn handle(
    &mut self,
    event: Event
  ) -> Vec<Effect> {
    match event {
      | Event::Load => vec![self.refresh()],
      | Event::ActivitiesLoaded {
        cycle,
        result
      } => {
        self.apply_listing(cycle, result);
        Vec::new()
      }
      | Event::SignupSubmitted {
        activity,
        email
      } => self.submit_signup(activity, email),
      | Event::RemoveRequested {
        activity,
        participant
      } => {
        debug!(
          %activity,
          %participant,
          "asking to confirm removal"
        );
        vec![Effect::AskConfirmation {
          prompt: confirmation_prompt(
            &activity,
            &participant
          ),
          activity,
          participant
        }]
      }
      | Event::RemovalAnswered {
        activity,
        participant,
        confirmed
      } => {
        if !confirmed {
          info!(
            %activity,
            %participant,
            "removal canceled"
          );
          return Vec::new();
        }
        self.send_mutation(
          Mutation::Unregister {
            activity,
            participant
          }
        )
      }
      | Event::MutationSettled {
        mutation,
        result
      } => self.settle(mutation, &result),
      | Event::StatusTimerElapsed {
        generation
      } => {
        self.status.elapse(generation);
        Vec::new()
      }
    }
  }

  fn apply_listing(
    &mut self,
    cycle: u64,
    result: Result<ApiResponse, SyncError>
  ) {
    if cycle != self.cycle {
      debug!(
        cycle,
        latest = self.cycle,
        "applying out-of-order refresh"
      );
    }

    match result.and_then(|response| {
      ActivitySet::from_response(
        &response
      )
    }) {
      | Ok(activities) => {
        let view = render(&activities);
        info!(
          cycle,
          activity_count = view.cards.len(),
          "rendered activities"
        );
        self.options =
          view.options.clone();
        self.listing = Listing::Ready(view);
      }
      | Err(err) => {
        error!(error = %err, cycle, "failed to load activities");
        self.listing = Listing::Failed(
          LOAD_FAILURE_NOTICE
        );
      }
    }
  }

  fn submit_signup(
    &mut self,
    activity: String,
    email: String
  ) -> Vec<Effect> {
    let email = email.trim().to_string();
    if email.is_empty()
      || activity.is_empty()
    {
      debug!(
        has_email = !email.is_empty(),
        has_activity = !activity.is_empty(),
        "ignoring incomplete signup form"
      );
      return Vec::new();
    }
    self.send_mutation(Mutation::Signup {
      activity,
      email
    })
  }

  fn send_mutation(
    &mut self,
    mutation: Mutation
  ) -> Vec<Effect> {
    info!(
      kind = mutation.kind(),
      activity = %mutation.activity(),
      "sending mutation"
    );
    vec![Effect::Send {
      request: mutation.request(),
      purpose: Purpose::Mutation(mutation)
    }]
  }

  fn settle(
    &mut self,
    mutation: Mutation,
    result: &Result<ApiResponse, SyncError>
  ) -> Vec<Effect> {
    let outcome = mutation.outcome(result);
    let mut effects = vec![self.show(
      outcome.message(),
      outcome.status_kind()
    )];

    if !outcome.is_applied() {
      match result {
        | Err(err) => {
          error!(error = %err, kind = mutation.kind(), "mutation request failed");
        }
        | Ok(response) => {
          warn!(
            kind = mutation.kind(),
            status = response.status,
            message = outcome.message(),
            "mutation rejected"
          );
        }
      }
      return effects;
    }

    info!(
      kind = mutation.kind(),
      activity = %mutation.activity(),
      "mutation applied"
    );
    if matches!(
      mutation,
      Mutation::Signup { .. }
    ) {
      effects.push(Effect::ResetSignupForm);
    }
    effects.push(self.refresh());
    effects
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn controller() -> SyncController {
    SyncController::new(
      &ClientConfig::default()
    )
  }

  fn ok(body: &str) -> Result<ApiResponse, SyncError> {
    Ok(ApiResponse {
      status: 200,
      body:   body.to_string()
    })
  }

  #[test]
  fn load_starts_a_cache_bypassing_refresh(
  ) {
    let mut sync = controller();
    assert_eq!(
      sync.listing(),
      &Listing::Loading
    );
    let effects = sync.handle(Event::Load);
    assert_eq!(
      effects,
      vec![Effect::Send {
        request: ApiRequest::list_activities(
        ),
        purpose: Purpose::Refresh {
          cycle: 1
        }
      }]
    );
  }

  #[test]
  fn failed_refresh_shows_notice_and_keeps_options(
  ) {
    let mut sync = controller();
    sync.handle(Event::ActivitiesLoaded {
      cycle:  1,
      result: ok(r#"{"Chess Club": {}}"#)
    });
    assert_eq!(sync.options().len(), 2);

    let effects =
      sync.handle(Event::ActivitiesLoaded {
        cycle:  2,
        result: Err(SyncError::Network(
          "offline".to_string()
        ))
      });
    assert!(effects.is_empty());
    assert_eq!(
      sync.listing(),
      &Listing::Failed(LOAD_FAILURE_NOTICE)
    );
    assert_eq!(sync.options().len(), 2);
    assert_eq!(sync.status(), None);
  }

  #[test]
  fn incomplete_signup_sends_nothing() {
    let mut sync = controller();
    assert!(
      sync
        .handle(Event::SignupSubmitted {
          activity: String::new(),
          email:    "a@x.edu".to_string()
        })
        .is_empty()
    );
    assert!(
      sync
        .handle(Event::SignupSubmitted {
          activity: "Chess Club"
            .to_string(),
          email:    "   ".to_string()
        })
        .is_empty()
    );
  }

  #[test]
  fn remove_request_asks_before_sending() {
    let mut sync = controller();
    let effects = sync.handle(
      Event::RemoveRequested {
        activity:    "Chess Club"
          .to_string(),
        participant: "a@x.edu".to_string()
      }
    );
    assert_eq!(
      effects,
      vec![Effect::AskConfirmation {
        prompt:      "Remove a@x.edu from \
                      Chess Club?"
          .to_string(),
        activity:    "Chess Club"
          .to_string(),
        participant: "a@x.edu".to_string()
      }]
    );
  }

  #[test]
  fn purpose_routes_results_back() {
    let refresh =
      Purpose::Refresh { cycle: 7 }
        .settle(ok("{}"));
    assert!(matches!(
      refresh,
      Event::ActivitiesLoaded { cycle: 7, .. }
    ));

    let mutation = Purpose::Mutation(
      Mutation::Signup {
        activity: "Art".to_string(),
        email:    "a@x.edu".to_string()
      }
    )
    .settle(ok("{}"));
    assert!(matches!(
      mutation,
      Event::MutationSettled { .. }
    ));
  }
}
