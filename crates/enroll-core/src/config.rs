use anyhow::Context;
use serde::Deserialize;
use tracing::{
  info,
  warn
};

pub const DEFAULT_STATUS_DISPLAY_MS:
  u32 = 5_000;

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
#[serde(default)]
pub struct ClientConfig {
  /// Prefix joined in front of every request target; empty means same
  /// origin.
  pub api_base:          String,
  pub status_display_ms: u32,
  pub mount_id:          String
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      api_base:          String::new(),
      status_display_ms:
        DEFAULT_STATUS_DISPLAY_MS,
      mount_id:          "app"
        .to_string()
    }
  }
}

impl ClientConfig {
  #[tracing::instrument(skip(source))]
  pub fn from_toml_str(
    source: &str
  ) -> anyhow::Result<Self> {
    let cfg: Self =
      toml::from_str(source).context(
        "parsing client config"
      )?;
    anyhow::ensure!(
      cfg.status_display_ms > 0,
      "status_display_ms must be \
       positive"
    );
    anyhow::ensure!(
      !cfg.mount_id.trim().is_empty(),
      "mount_id must not be empty"
    );
    info!(
      api_base = %cfg.api_base,
      status_display_ms =
        cfg.status_display_ms,
      "loaded client config"
    );
    Ok(cfg)
  }

  pub fn load_or_default(
    source: &str
  ) -> Self {
    match Self::from_toml_str(source) {
      | Ok(cfg) => cfg,
      | Err(error) => {
        warn!(error = %format!("{error:#}"), "client config rejected; using defaults");
        Self::default()
      }
    }
  }

  pub fn url_for(
    &self,
    target: &str
  ) -> String {
    format!(
      "{}{target}",
      self.api_base.trim_end_matches('/')
    )
  }
}
