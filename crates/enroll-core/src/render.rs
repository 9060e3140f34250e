//! Projection of an activity set into view models.
//!
//! Every refresh produces a brand new [`RenderedView`]; nothing here diffs
//! against what was drawn before.

use crate::normalize::{
  ActivityRecord,
  ActivitySet
};

pub const SELECT_PLACEHOLDER: &str =
  "-- Select an activity --";
pub const NO_PARTICIPANTS: &str =
  "No participants signed up yet.";

#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct RenderedView {
  pub cards:   Vec<CardView>,
  pub options: Vec<OptionView>
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
  pub name:                String,
  pub description:         String,
  pub schedule:            String,
  pub spots_left:          i64,
  pub availability:        String,
  pub participants_header: String,
  pub roster:              RosterView
}

/// Either a list or the placeholder, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterView {
  Listed(Vec<ParticipantItem>),
  Empty { placeholder: &'static str }
}

impl RosterView {
  pub fn items(
    &self
  ) -> &[ParticipantItem] {
    match self {
      | Self::Listed(items) => items,
      | Self::Empty { .. } => &[]
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantItem {
  /// Position in the server's roster; identifiers are not guaranteed
  /// unique, so this keys the rendered node.
  pub position:   usize,
  pub identifier: String
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
  pub value: String,
  pub label: String
}

impl OptionView {
  pub fn placeholder() -> Self {
    Self {
      value: String::new(),
      label: SELECT_PLACEHOLDER
        .to_string()
    }
  }

  pub fn is_placeholder(&self) -> bool {
    self.value.is_empty()
  }
}

pub fn render(
  activities: &ActivitySet
) -> RenderedView {
  let mut options =
    Vec::with_capacity(
      activities.len() + 1
    );
  options.push(OptionView::placeholder());

  let cards = activities
    .iter()
    .map(|(name, record)| {
      options.push(OptionView {
        value: name.to_string(),
        label: name.to_string()
      });
      render_card(name, record)
    })
    .collect();

  RenderedView { cards, options }
}

pub fn render_card(
  name: &str,
  record: &ActivityRecord
) -> CardView {
  let spots_left = record.spots_left();
  let roster =
    if record.participants.is_empty() {
      RosterView::Empty {
        placeholder: NO_PARTICIPANTS
      }
    } else {
      RosterView::Listed(
        record
          .participants
          .iter()
          .enumerate()
          .map(|(position, identifier)| {
            ParticipantItem {
              position,
              identifier: identifier
                .clone()
            }
          })
          .collect()
      )
    };

  CardView {
    name: name.to_string(),
    description: record
      .description
      .clone(),
    schedule: record.schedule.clone(),
    spots_left,
    availability: format!(
      "{spots_left} spots left"
    ),
    participants_header: format!(
      "Participants ({}/{}):",
      record.participants.len(),
      record.max_participants
    ),
    roster
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn set(json: &str) -> ActivitySet {
    ActivitySet::parse(json)
      .expect("activity set")
  }

  #[test]
  fn empty_set_renders_only_the_placeholder_option(
  ) {
    let view = render(&set("{}"));
    assert!(view.cards.is_empty());
    assert_eq!(
      view.options,
      vec![OptionView::placeholder()]
    );
    assert!(view.options[0].is_placeholder());
  }

  #[test]
  fn cards_and_options_follow_server_order(
  ) {
    let view = render(&set(
      r#"{"Zumba": {}, "Art": {}, "Math": {}}"#,
    ));
    let cards: Vec<&str> = view
      .cards
      .iter()
      .map(|card| card.name.as_str())
      .collect();
    let options: Vec<&str> = view
      .options
      .iter()
      .skip(1)
      .map(|option| option.value.as_str())
      .collect();
    assert_eq!(
      cards,
      vec!["Zumba", "Art", "Math"]
    );
    assert_eq!(options, cards);
  }

  #[test]
  fn empty_roster_shows_placeholder_only() {
    let view = render(&set(
      r#"{"Chess": {"max_participants": 12, "participants": []}}"#,
    ));
    let card = &view.cards[0];
    assert_eq!(
      card.roster,
      RosterView::Empty {
        placeholder: NO_PARTICIPANTS
      }
    );
    assert!(card.roster.items().is_empty());
    assert_eq!(
      card.participants_header,
      "Participants (0/12):"
    );
    assert_eq!(
      card.availability,
      "12 spots left"
    );
  }

  #[test]
  fn filled_roster_lists_identifiers_without_placeholder(
  ) {
    let view = render(&set(
      r#"{"Chess": {"max_participants": 1, "participants": ["a@x.edu", "a@x.edu"]}}"#,
    ));
    let card = &view.cards[0];
    let RosterView::Listed(items) =
      &card.roster
    else {
      panic!("expected listed roster");
    };
    assert_eq!(
      items,
      &vec![
        ParticipantItem {
          position:   0,
          identifier: "a@x.edu"
            .to_string()
        },
        ParticipantItem {
          position:   1,
          identifier: "a@x.edu"
            .to_string()
        },
      ]
    );
    assert_eq!(card.spots_left, -1);
    assert_eq!(
      card.availability,
      "-1 spots left"
    );
    assert_eq!(
      card.participants_header,
      "Participants (2/1):"
    );
  }

  #[test]
  fn missing_fields_render_with_defaults() {
    let view =
      render(&set(r#"{"Drama": null}"#));
    let card = &view.cards[0];
    assert_eq!(card.description, "");
    assert_eq!(card.schedule, "");
    assert_eq!(
      card.participants_header,
      "Participants (0/0):"
    );
    assert_eq!(card.spots_left, 0);
  }

  #[test]
  fn rendering_is_deterministic() {
    let activities = set(
      r#"{"Chess": {"participants": {"b": "b@x.edu", "a": "a@x.edu"}}}"#,
    );
    assert_eq!(
      render(&activities),
      render(&activities)
    );
  }
}
