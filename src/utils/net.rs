use http::Uri;

use crate::models::errors::NetworkError;

/// Parses a request target, rejecting anything that is not an absolute URL.
pub fn validate_url_target(url: &str) -> Result<Uri, NetworkError> {
  let uri = url.parse::<Uri>().map_err(|_| NetworkError::InvalidUrl)?;
  if uri.scheme().is_none() || uri.host().is_none() {
    return Err(NetworkError::InvalidUrl);
  }
  Ok(uri)
}
