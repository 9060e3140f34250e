use enroll_core::status::StatusMessage;
use yew::{
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct StatusBannerProps {
  pub message: Option<StatusMessage>
}

#[function_component(StatusBanner)]
pub fn status_banner(
  props: &StatusBannerProps
) -> Html {
  match &props.message {
    | Some(message) => html! {
        <div id="message" class={classes!("message", message.kind.as_class())}>
            { &message.text }
        </div>
    },
    | None => html! {
        <div id="message" class="message hidden"></div>
    }
  }
}
