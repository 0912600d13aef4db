use async_trait::async_trait;
use tracing::{info, warn};

use crate::{
  actions::{Action, ActionDomain, SiteAction},
  models::{
    errors::{SiteCreationError, StoreError},
    sites::SiteCreationResult,
  },
  remote::Remote,
  stores::{Store, StoreArgs},
  utils::slug::SiteAddress,
};

#[derive(Debug, Clone)]
pub struct SiteStore {
  remote: Remote,
}

impl SiteStore {
  pub fn new(args: StoreArgs) -> Self {
    Self { remote: args.remote }
  }
}

#[async_trait]
impl Store for SiteStore {
  type Operation = SiteAction;

  fn domain() -> ActionDomain {
    ActionDomain::Site
  }

  fn accepts(action: Action) -> Result<SiteAction, Action> {
    match action {
      Action::Site(action) => Ok(action),
      other => Err(other),
    }
  }

  async fn on_action(&self, operation: SiteAction) {
    match operation {
      SiteAction::CreateSite { name, domain, on_completion } => {
        on_completion.complete(create_site(self, &name, domain).await)
      }
    }
  }
}

/// Without an explicit domain the site address is derived from the name.
/// The address is checked by the backend, which answers with the codes
/// `SiteCreationError` knows about.
async fn create_site(
  s: &SiteStore,
  name: &str,
  domain: Option<String>,
) -> Result<SiteCreationResult, StoreError> {
  let path = "stores.sites.create_site";
  let domain = domain.unwrap_or_else(|| SiteAddress::default().generate(name));

  let site = s.remote.create_site(name, &domain).await.map_err(|err| {
    let err = err.map_dotcom(SiteCreationError::from_dotcom);
    warn!(path, domain = %domain, "site creation failed: {}", err);
    err
  })?;

  info!(path, site_id = site.site_id, url = %site.url, "site created");
  Ok(site)
}
