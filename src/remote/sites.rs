use http::Method;
use serde_json::json;

use crate::{
  models::{
    errors::{SiteCreationError, StoreError},
    sites::{SiteCreationResponse, SiteCreationResult},
  },
  network::Request,
  remote::Remote,
};

impl Remote {
  pub async fn create_site(&self, name: &str, domain: &str) -> Result<SiteCreationResult, StoreError> {
    let request = Request::dotcom(Method::POST, "sites/new").body(json!({
      "blog_name": domain,
      "blog_title": name,
      "public": 0,
      "validate": false,
      "find_available_url": false,
    }));

    let response: SiteCreationResponse = self.enqueue(request).await?;
    match response.blog_details {
      Some(details) if response.success => Ok(details.into()),
      _ => Err(SiteCreationError::NotCreated.into()),
    }
  }
}
