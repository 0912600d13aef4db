use http::Method;

use crate::{
  models::{
    domains::{FreeDomainSuggestion, SiteDomain, SiteDomainList},
    errors::StoreError,
  },
  network::Request,
  remote::Remote,
};

const SUGGESTIONS_QUANTITY: u32 = 20;

impl Remote {
  pub async fn load_free_domain_suggestions(
    &self,
    query: &str,
  ) -> Result<Vec<FreeDomainSuggestion>, StoreError> {
    let request = Request::dotcom(Method::GET, "domains/suggestions")
      .param("query", query)
      .param("quantity", SUGGESTIONS_QUANTITY)
      .param("only_wordpressdotcom", true);

    self.enqueue(request).await
  }

  pub async fn load_domains(&self, site_id: i64) -> Result<Vec<SiteDomain>, StoreError> {
    let request = Request::dotcom(Method::GET, format!("sites/{site_id}/domains"));
    let list: SiteDomainList = self.enqueue(request).await?;
    Ok(list.domains)
  }
}
