use std::{fs, path::Path};

use crate::models::{config::Config, errors::InternalError};

/// Reads the YAML config at `path`. Missing sections fall back to defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, InternalError> {
  let mk_err = |msg: &str, err: Box<dyn std::error::Error + Send + Sync>| InternalError {
    temp: false,
    err,
    msg: msg.to_string(),
    path: "stores.manager.load_config".into(),
  };

  let yaml_string = fs::read_to_string(path.as_ref())
    .map_err(|err| mk_err("failed to load stores config file", Box::new(err)))?;

  let config: Config = serde_yaml::from_str(&yaml_string)
    .map_err(|err| mk_err("failed to parse config data", Box::new(err)))?;

  Ok(config)
}
