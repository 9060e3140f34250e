use std::rc::Rc;

use enroll_core::config::ClientConfig;
use enroll_core::sync::{
  Effect,
  Event,
  SyncController
};
use gloo::timers::callback::Timeout;
use yew::{
  Component,
  Context,
  Html,
  Properties,
  html
};

use crate::api::send_request;
use crate::components::{
  ActivityListing,
  SignupForm,
  StatusBanner
};

const CLIENT_CONFIG_TOML: &str =
  include_str!("../assets/client.toml");

pub fn load_client_config() -> ClientConfig
{
  ClientConfig::load_or_default(
    CLIENT_CONFIG_TOML
  )
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
  pub config: Rc<ClientConfig>
}

pub enum Msg {
  Sync(Event),
  EmailInput(String),
  ActivityChosen(String),
  SubmitSignup
}

/// Owns every handle the page needs: the sync state machine, the single
/// status hide timer and the signup form fields.
pub struct App {
  controller:   SyncController,
  status_timer: Option<Timeout>,
  email:        String,
  activity:     String
}

impl Component for App {
  type Message = Msg;
  type Properties = AppProps;

  fn create(ctx: &Context<Self>) -> Self {
    ctx
      .link()
      .send_message(Msg::Sync(Event::Load));
    Self {
      controller:   SyncController::new(
        &ctx.props().config
      ),
      status_timer: None,
      email:        String::new(),
      activity:     String::new()
    }
  }

  fn update(
    &mut self,
    ctx: &Context<Self>,
    msg: Self::Message
  ) -> bool {
    match msg {
      | Msg::Sync(event) => {
        for effect in
          self.controller.handle(event)
        {
          self.perform(ctx, effect);
        }
        true
      }
      | Msg::EmailInput(email) => {
        self.email = email;
        true
      }
      | Msg::ActivityChosen(activity) => {
        self.activity = activity;
        true
      }
      | Msg::SubmitSignup => {
        let event = Event::SignupSubmitted {
          activity: self.activity.clone(),
          email:    self.email.clone()
        };
        self.update(ctx, Msg::Sync(event))
      }
    }
  }

  fn view(&self, ctx: &Context<Self>) -> Html {
    let link = ctx.link();
    let on_remove = link.callback(
      |(activity, participant): (
        String,
        String
      )| {
        Msg::Sync(Event::RemoveRequested {
          activity,
          participant
        })
      }
    );

    html! {
        <main id="enroll">
            <section id="activities-container">
                <h3>{ "Available Activities" }</h3>
                <ActivityListing
                    listing={self.controller.listing().clone()}
                    on_remove={on_remove}
                />
            </section>
            <section id="signup-container">
                <h3>{ "Sign Up for an Activity" }</h3>
                <SignupForm
                    email={self.email.clone()}
                    activity={self.activity.clone()}
                    options={self.controller.options().to_vec()}
                    on_email={link.callback(Msg::EmailInput)}
                    on_activity={link.callback(Msg::ActivityChosen)}
                    on_submit={link.callback(|()| Msg::SubmitSignup)}
                />
                <StatusBanner message={self.controller.status().cloned()} />
            </section>
        </main>
    }
  }
}

impl App {
  fn perform(
    &mut self,
    ctx: &Context<Self>,
    effect: Effect
  ) {
    match effect {
      | Effect::Send {
        request,
        purpose
      } => {
        let config =
          Rc::clone(&ctx.props().config);
        let link = ctx.link().clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            let result = send_request(
              &config, &request
            )
            .await;
            if let Err(err) = &result {
              tracing::error!(error = %err, request_target = %request.target, "request failed");
            }
            link.send_message(Msg::Sync(
              purpose.settle(result)
            ));
          }
        );
      }
      | Effect::AskConfirmation {
        prompt,
        activity,
        participant
      } => {
        let confirmed = confirm(&prompt);
        ctx.link().send_message(Msg::Sync(
          Event::RemovalAnswered {
            activity,
            participant,
            confirmed
          }
        ));
      }
      | Effect::ResetSignupForm => {
        self.email.clear();
        self.activity.clear();
      }
      | Effect::ArmStatusTimer(timer) => {
        let link = ctx.link().clone();
        let generation = timer.generation;
        // Replacing the handle drops, and so cancels, the previous timer.
        self.status_timer =
          Some(Timeout::new(
            timer.delay_ms,
            move || {
              link.send_message(Msg::Sync(
                Event::StatusTimerElapsed {
                  generation
                }
              ));
            }
          ));
      }
    }
  }
}

fn confirm(prompt: &str) -> bool {
  web_sys::window()
    .and_then(|window| {
      window
        .confirm_with_message(prompt)
        .ok()
    })
    .unwrap_or(false)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn embedded_config_keeps_five_second_status() {
    let config = load_client_config();
    assert_eq!(
      config,
      ClientConfig::default()
    );
    assert_eq!(
      config.status_display_ms,
      5_000
    );
  }
}
