use enroll_core::dispatch::{
  ClickTarget,
  resolve_removal
};
use enroll_core::render::RosterView;
use wasm_bindgen::JsCast;
use web_sys::{
  Element,
  MouseEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

const REMOVE_ACTION: &str = "remove";
const ACTION_ATTRIBUTE: &str =
  "data-action";
const IDENTIFIER_ATTRIBUTE: &str =
  "data-email";

/// The element a click on the roster actually landed on.
struct DomClickTarget(Element);

impl ClickTarget for DomClickTarget {
  fn is_removal_control(&self) -> bool {
    self
      .0
      .get_attribute(ACTION_ATTRIBUTE)
      .as_deref()
      == Some(REMOVE_ACTION)
  }

  fn item_identifier(
    &self
  ) -> Option<String> {
    self
      .0
      .closest("li")
      .ok()
      .flatten()
      .and_then(|item| {
        item.get_attribute(
          IDENTIFIER_ATTRIBUTE
        )
      })
  }
}

#[derive(Properties, PartialEq)]
pub struct ParticipantRosterProps {
  pub roster:    RosterView,
  pub on_remove: Callback<String>
}

/// One click listener on the list; entries carry their identifier as an
/// attribute and hold no handlers of their own.
#[function_component(ParticipantRoster)]
pub fn participant_roster(
  props: &ParticipantRosterProps
) -> Html {
  let items = match &props.roster {
    | RosterView::Empty { placeholder } => {
      return html! {
          <p class="no-participants"><em>{ *placeholder }</em></p>
      };
    }
    | RosterView::Listed(items) => items
  };

  let onclick = {
    let on_remove =
      props.on_remove.clone();
    Callback::from(
      move |event: MouseEvent| {
        let Some(target) = event
          .target()
          .and_then(|target| {
            target
              .dyn_into::<Element>()
              .ok()
          })
        else {
          return;
        };
        if let Some(participant) =
          resolve_removal(
            &DomClickTarget(target)
          )
        {
          on_remove.emit(participant);
        }
      }
    )
  };

  html! {
      <ul class="participants-list" onclick={onclick}>
          {
              for items.iter().map(|item| html! {
                  <li key={item.position} data-email={item.identifier.clone()}>
                      <span class="participant-email">{ &item.identifier }</span>
                      <button
                          type="button"
                          class="remove-participant"
                          data-action="remove"
                          title="Remove participant"
                      >
                          { "✕" }
                      </button>
                  </li>
              })
          }
      </ul>
  }
}
