use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::models::errors::InternalError;

/// Installs the global fmt subscriber. `RUST_LOG` wins over `level`.
pub fn init_tracing(level: &str) -> Result<(), InternalError> {
  let env_filter = EnvFilter::try_from_default_env()
    .or_else(|_| EnvFilter::try_new(level))
    .unwrap_or_else(|_| EnvFilter::new("info"));

  tracing_subscriber::registry()
    .with(env_filter)
    .with(tracing_subscriber::fmt::layer())
    .try_init()
    .map_err(|err| InternalError {
      temp: false,
      err: Box::new(err),
      msg: "failed to set logger".into(),
      path: "stores.telemetry.init_tracing".into(),
    })
}
