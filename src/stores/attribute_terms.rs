use std::{collections::BTreeSet, sync::Arc};

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{
  actions::{Action, ActionDomain, ProductAttributeTermAction},
  models::{
    attributes::{ProductAttribute, ProductAttributeTerm},
    config::SyncConfig,
    errors::StoreError,
  },
  remote::Remote,
  storage::{
    reconcile::{has_next_page, reconcile, sweep_stale, ReconcileSummary},
    Cache, Record, Tables,
  },
  stores::{Store, StoreArgs},
};

#[derive(Debug, Clone)]
pub struct ProductAttributeTermStore {
  remote: Remote,
  cache: Arc<Cache>,
  config: Arc<SyncConfig>,
}

impl ProductAttributeTermStore {
  pub fn new(args: StoreArgs) -> Self {
    Self { remote: args.remote, cache: args.cache, config: args.config }
  }
}

#[async_trait]
impl Store for ProductAttributeTermStore {
  type Operation = ProductAttributeTermAction;

  fn domain() -> ActionDomain {
    ActionDomain::ProductAttributeTerm
  }

  fn accepts(action: Action) -> Result<ProductAttributeTermAction, Action> {
    match action {
      Action::ProductAttributeTerm(action) => Ok(action),
      other => Err(other),
    }
  }

  async fn on_action(&self, operation: ProductAttributeTermAction) {
    match operation {
      ProductAttributeTermAction::SynchronizeProductAttributeTerms {
        site_id,
        attribute_id,
        on_completion,
      } => on_completion.complete(synchronize_all_terms(self, site_id, attribute_id).await),
      ProductAttributeTermAction::CreateProductAttributeTerm {
        site_id,
        attribute_id,
        name,
        on_completion,
      } => on_completion.complete(create_term(self, site_id, attribute_id, &name).await),
    }
  }
}

/// Walks every page of the attribute's terms, committing each page as it
/// arrives. Once a short page ends the walk, terms that no page returned are
/// deleted. A failing page stops the walk; pages committed before it stay.
async fn synchronize_all_terms(
  s: &ProductAttributeTermStore,
  site_id: i64,
  attribute_id: i64,
) -> Result<(), StoreError> {
  let path = "stores.attribute_terms.synchronize_all_terms";
  let page_size = s.config.max_page_size;
  let mut page_number = s.config.first_page_number;
  let mut synchronized = BTreeSet::new();

  loop {
    let terms = s
      .remote
      .load_product_attribute_terms(site_id, attribute_id, page_number, page_size)
      .await
      .map_err(|err| {
        warn!(path, site_id, attribute_id, page_number, "page failed: {}", err);
        StoreError::PageSynchronization { page_number, source: Box::new(err) }
      })?;

    let summary = s.cache.write(|t| upsert_terms(t, site_id, attribute_id, &terms));
    debug!(path, site_id, attribute_id, page_number, ?summary, "page reconciled");
    synchronized.extend(terms.iter().map(|term| term.key()));

    if !has_next_page(terms.len(), page_size) {
      break;
    }
    page_number += 1;
  }

  let deleted = s.cache.write(|t| {
    sweep_stale(t, &synchronized, |term: &ProductAttributeTerm| {
      term.site_id == site_id && term.attribute_id == attribute_id
    })
  });
  debug!(path, site_id, attribute_id, deleted, "stale terms swept");
  Ok(())
}

async fn create_term(
  s: &ProductAttributeTermStore,
  site_id: i64,
  attribute_id: i64,
  name: &str,
) -> Result<ProductAttributeTerm, StoreError> {
  let term = s.remote.create_product_attribute_term(site_id, attribute_id, name).await?;
  s.cache.write(|t| upsert_terms(t, site_id, attribute_id, std::slice::from_ref(&term)));
  Ok(term)
}

// Terms only live under a cached parent attribute.
fn upsert_terms(
  t: &mut Tables,
  site_id: i64,
  attribute_id: i64,
  terms: &[ProductAttributeTerm],
) -> ReconcileSummary {
  if t.load::<ProductAttribute>(&(site_id, attribute_id)).is_none() {
    return ReconcileSummary::default();
  }
  reconcile(t, terms, |_: &ProductAttributeTerm| false, false)
}
