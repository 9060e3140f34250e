use enroll_core::render::OptionView;
use web_sys::{
  Event,
  HtmlInputElement,
  HtmlSelectElement,
  InputEvent,
  SubmitEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
  pub email:       String,
  pub activity:    String,
  pub options:     Vec<OptionView>,
  pub on_email:    Callback<String>,
  pub on_activity: Callback<String>,
  pub on_submit:   Callback<()>
}

#[function_component(SignupForm)]
pub fn signup_form(
  props: &SignupFormProps
) -> Html {
  let onsubmit = {
    let on_submit =
      props.on_submit.clone();
    Callback::from(
      move |event: SubmitEvent| {
        event.prevent_default();
        on_submit.emit(());
      }
    )
  };
  let oninput = {
    let on_email = props.on_email.clone();
    Callback::from(
      move |event: InputEvent| {
        let input: HtmlInputElement =
          event.target_unchecked_into();
        on_email.emit(input.value());
      }
    )
  };
  let onchange = {
    let on_activity =
      props.on_activity.clone();
    Callback::from(move |event: Event| {
      let select: HtmlSelectElement =
        event.target_unchecked_into();
      on_activity.emit(select.value());
    })
  };

  html! {
      <form id="signup-form" onsubmit={onsubmit}>
          <div class="form-group">
              <label for="email">{ "Student Email:" }</label>
              <input
                  type="email"
                  id="email"
                  required=true
                  placeholder="your-email@mergington.edu"
                  value={props.email.clone()}
                  oninput={oninput}
              />
          </div>
          <div class="form-group">
              <label for="activity">{ "Select Activity:" }</label>
              <select id="activity" required=true onchange={onchange}>
                  {
                      for props.options.iter().map(|option| html! {
                          <option
                              key={option.value.clone()}
                              value={option.value.clone()}
                              selected={option.value == props.activity}
                          >
                              { &option.label }
                          </option>
                      })
                  }
              </select>
          </div>
          <button type="submit">{ "Sign Up" }</button>
      </form>
  }
}
