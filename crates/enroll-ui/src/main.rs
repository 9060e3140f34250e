use std::rc::Rc;

mod api;
mod app;
mod components;

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  let config = app::load_client_config();
  tracing::info!(
    mount = %config.mount_id,
    "starting activity signup frontend"
  );

  let mount = web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .and_then(|document| {
      document.get_element_by_id(
        &config.mount_id
      )
    })
    .expect(
      "missing frontend mount element"
    );

  yew::Renderer::<app::App>::with_root_and_props(
    mount,
    app::AppProps {
      config: Rc::new(config)
    }
  )
  .render();
}
