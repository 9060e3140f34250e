use enroll_core::render::CardView;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::ParticipantRoster;

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
  pub card:      CardView,
  pub on_remove:
    Callback<(String, String)>
}

#[function_component(ActivityCard)]
pub fn activity_card(
  props: &ActivityCardProps
) -> Html {
  let card = &props.card;
  let on_remove = {
    let activity = card.name.clone();
    props.on_remove.reform(
      move |participant: String| {
        (activity.clone(), participant)
      }
    )
  };

  html! {
      <div class="activity-card">
          <h4>{ &card.name }</h4>
          <p>{ &card.description }</p>
          <p><strong>{ "Schedule:" }</strong>{ format!(" {}", card.schedule) }</p>
          <p><strong>{ "Availability:" }</strong>{ format!(" {}", card.availability) }</p>
          <div class="participants-section">
              <strong>{ &card.participants_header }</strong>
              <ParticipantRoster roster={card.roster.clone()} on_remove={on_remove} />
          </div>
      </div>
  }
}
