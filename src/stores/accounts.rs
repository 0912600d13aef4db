use std::{collections::BTreeSet, sync::Arc};

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{
  actions::{Action, ActionDomain, AccountAction},
  models::{
    accounts::{Account, CreateAccountResult, Site},
    errors::{CreateAccountError, StoreError},
  },
  remote::Remote,
  storage::{reconcile::sweep_stale, Cache, Record},
  stores::{Store, StoreArgs},
};

#[derive(Debug, Clone)]
pub struct AccountStore {
  remote: Remote,
  cache: Arc<Cache>,
}

impl AccountStore {
  pub fn new(args: StoreArgs) -> Self {
    Self { remote: args.remote, cache: args.cache }
  }
}

#[async_trait]
impl Store for AccountStore {
  type Operation = AccountAction;

  fn domain() -> ActionDomain {
    ActionDomain::Account
  }

  fn accepts(action: Action) -> Result<AccountAction, Action> {
    match action {
      Action::Account(action) => Ok(action),
      other => Err(other),
    }
  }

  async fn on_action(&self, operation: AccountAction) {
    match operation {
      AccountAction::SynchronizeAccount { on_completion } => {
        on_completion.complete(synchronize_account(self).await)
      }
      AccountAction::LoadAccount { user_id, on_completion } => {
        on_completion.complete(Ok(self.cache.load::<Account>(&user_id)))
      }
      AccountAction::SynchronizeSites { selected_site_id, on_completion } => {
        on_completion.complete(synchronize_sites(self, selected_site_id).await)
      }
      AccountAction::LoadAndSynchronizeSiteIfNeeded { site_id, on_completion } => {
        on_completion.complete(load_and_synchronize_site(self, site_id).await)
      }
      AccountAction::CreateAccount { email, username, password, on_completion } => {
        on_completion.complete(create_account(self, &email, &username, &password).await)
      }
    }
  }
}

async fn synchronize_account(s: &AccountStore) -> Result<Account, StoreError> {
  let account = s.remote.load_account().await?;
  s.cache.upsert(account.clone());
  Ok(account)
}

/// Sites missing from the response are deleted, except the selected one:
/// it may be mid-connection and not listed yet.
async fn synchronize_sites(s: &AccountStore, selected_site_id: Option<i64>) -> Result<(), StoreError> {
  let sites = s.remote.load_sites().await?;

  let (upserted, deleted) = s.cache.write(|t| {
    for site in &sites {
      t.upsert(site.clone());
    }
    let active: BTreeSet<i64> = sites.iter().map(|site| site.key()).collect();
    let deleted = sweep_stale(t, &active, |site: &Site| Some(site.site_id) != selected_site_id);
    (sites.len(), deleted)
  });
  debug!(path = "stores.accounts.synchronize_sites", upserted, deleted, "sites reconciled");
  Ok(())
}

async fn load_and_synchronize_site(s: &AccountStore, site_id: i64) -> Result<Site, StoreError> {
  if let Some(site) = s.cache.load::<Site>(&site_id) {
    return Ok(site);
  }

  synchronize_sites(s, None).await?;
  s.cache.load::<Site>(&site_id).ok_or_else(|| {
    warn!(path = "stores.accounts.load_and_synchronize_site", site_id, "site not found after sync");
    StoreError::UnknownSite
  })
}

async fn create_account(
  s: &AccountStore,
  email: &str,
  username: &str,
  password: &str,
) -> Result<CreateAccountResult, StoreError> {
  s.remote
    .create_account(email, username, password)
    .await
    .map_err(|err| err.map_dotcom(CreateAccountError::from_dotcom))
}
