use async_trait::async_trait;

use crate::{
  actions::{Action, ActionDomain, DomainAction},
  models::{domains::FreeDomainSuggestion, errors::StoreError},
  remote::Remote,
  stores::{Store, StoreArgs},
};

/// Domain lookups go straight to the backend; nothing is cached.
#[derive(Debug, Clone)]
pub struct DomainStore {
  remote: Remote,
}

impl DomainStore {
  pub fn new(args: StoreArgs) -> Self {
    Self { remote: args.remote }
  }
}

#[async_trait]
impl Store for DomainStore {
  type Operation = DomainAction;

  fn domain() -> ActionDomain {
    ActionDomain::Domain
  }

  fn accepts(action: Action) -> Result<DomainAction, Action> {
    match action {
      Action::Domain(action) => Ok(action),
      other => Err(other),
    }
  }

  async fn on_action(&self, operation: DomainAction) {
    match operation {
      DomainAction::LoadFreeDomainSuggestions { query, on_completion } => {
        on_completion.complete(load_free_domain_suggestions(self, &query).await)
      }
      DomainAction::LoadDomains { site_id, on_completion } => {
        on_completion.complete(self.remote.load_domains(site_id).await)
      }
    }
  }
}

async fn load_free_domain_suggestions(
  s: &DomainStore,
  query: &str,
) -> Result<Vec<FreeDomainSuggestion>, StoreError> {
  let suggestions: Vec<_> = s
    .remote
    .load_free_domain_suggestions(query)
    .await?
    .into_iter()
    .filter(|suggestion| suggestion.is_free)
    .collect();

  if suggestions.is_empty() {
    return Err(StoreError::EmptySuggestions);
  }
  Ok(suggestions)
}
