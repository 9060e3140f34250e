use enroll_core::sync::{
  LOADING_NOTICE,
  Listing
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::ActivityCard;

#[derive(Properties, PartialEq)]
pub struct ActivityListingProps {
  pub listing:   Listing,
  pub on_remove:
    Callback<(String, String)>
}

#[function_component(ActivityListing)]
pub fn activity_listing(
  props: &ActivityListingProps
) -> Html {
  match &props.listing {
    | Listing::Loading => html! {
        <div id="activities-list"><p>{ LOADING_NOTICE }</p></div>
    },
    | Listing::Failed(notice) => html! {
        <div id="activities-list"><p>{ *notice }</p></div>
    },
    | Listing::Ready(view) => html! {
        <div id="activities-list">
            {
                for view.cards.iter().cloned().map(|card| html! {
                    <ActivityCard
                        key={card.name.clone()}
                        card={card.clone()}
                        on_remove={props.on_remove.clone()}
                    />
                })
            }
        </div>
    }
  }
}
