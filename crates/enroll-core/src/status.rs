//! Transient status message shown after a mutation settles.
//!
//! `Hidden -> Visible` on show, `Visible -> Visible` on a second show (timer
//! restarted), `Visible -> Hidden` when the current timer elapses. Each show
//! bumps a generation; an elapsed timer from an older generation is stale and
//! changes nothing.

use tracing::debug;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum StatusKind {
  Success,
  Error
}

impl StatusKind {
  pub fn as_class(self) -> &'static str {
    match self {
      | Self::Success => "success",
      | Self::Error => "error"
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
  pub text: String,
  pub kind: StatusKind
}

/// A hide timer the shell must arm, replacing any timer armed before.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct HideTimer {
  pub delay_ms:   u32,
  pub generation: u64
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum StatusState {
  Hidden,
  Visible {
    message:    StatusMessage,
    generation: u64
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLifecycle {
  state:      StatusState,
  generation: u64,
  display_ms: u32
}

impl StatusLifecycle {
  pub fn new(display_ms: u32) -> Self {
    Self {
      state: StatusState::Hidden,
      generation: 0,
      display_ms
    }
  }

  pub fn show(
    &mut self,
    text: impl Into<String>,
    kind: StatusKind
  ) -> HideTimer {
    self.generation =
      self.generation.wrapping_add(1);
    let message = StatusMessage {
      text: text.into(),
      kind
    };
    debug!(
      generation = self.generation,
      kind = kind.as_class(),
      text = %message.text,
      "status message shown"
    );
    self.state = StatusState::Visible {
      message,
      generation: self.generation
    };
    HideTimer {
      delay_ms:   self.display_ms,
      generation: self.generation
    }
  }

  /// Handles an elapsed hide timer. Returns whether the message was hidden.
  pub fn elapse(
    &mut self,
    generation: u64
  ) -> bool {
    let is_current = matches!(
      &self.state,
      StatusState::Visible {
        generation: current,
        ..
      } if *current == generation
    );
    if is_current {
      self.hide();
    } else {
      debug!(
        generation,
        current = self.generation,
        "ignoring stale status timer"
      );
    }
    is_current
  }

  pub fn hide(&mut self) {
    self.state = StatusState::Hidden;
  }

  pub fn current(
    &self
  ) -> Option<&StatusMessage> {
    match &self.state {
      | StatusState::Visible {
        message,
        ..
      } => Some(message),
      | StatusState::Hidden => None
    }
  }

  pub fn is_visible(&self) -> bool {
    self.current().is_some()
  }
}
