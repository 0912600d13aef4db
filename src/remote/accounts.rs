use http::Method;
use serde_json::json;

use crate::{
  models::{
    accounts::{Account, CreateAccountResult, Site, SiteList},
    errors::StoreError,
  },
  network::Request,
  remote::Remote,
};

impl Remote {
  pub async fn load_account(&self) -> Result<Account, StoreError> {
    self.enqueue(Request::dotcom(Method::GET, "me")).await
  }

  pub async fn load_sites(&self) -> Result<Vec<Site>, StoreError> {
    let request = Request::dotcom(Method::GET, "me/sites")
      .param("fields", "ID,name,description,URL,options,is_woocommerce_active")
      .param("options", "gmt_offset");

    let list: SiteList = self.enqueue(request).await?;
    Ok(list.sites)
  }

  /// Signs a new user up. `validate: false` creates the account right away
  /// and mails the confirmation afterwards.
  pub async fn create_account(
    &self,
    email: &str,
    username: &str,
    password: &str,
  ) -> Result<CreateAccountResult, StoreError> {
    let request = Request::dotcom(Method::POST, "users/new").body(json!({
      "email": email,
      "username": username,
      "password": password,
      "flow": "signup",
      "validate": false,
      "send_verification_email": true,
    }));

    self.enqueue(request).await
  }
}
