use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::{
  actions::{Action, ActionDomain, ProductVariationAction},
  models::{config::SyncConfig, errors::StoreError, products::ProductVariation},
  remote::Remote,
  storage::{
    reconcile::{has_next_page, reconcile},
    Cache,
  },
  stores::{Store, StoreArgs},
};

#[derive(Debug, Clone)]
pub struct ProductVariationStore {
  remote: Remote,
  cache: Arc<Cache>,
  config: Arc<SyncConfig>,
}

impl ProductVariationStore {
  pub fn new(args: StoreArgs) -> Self {
    Self { remote: args.remote, cache: args.cache, config: args.config }
  }
}

#[async_trait]
impl Store for ProductVariationStore {
  type Operation = ProductVariationAction;

  fn domain() -> ActionDomain {
    ActionDomain::ProductVariation
  }

  fn accepts(action: Action) -> Result<ProductVariationAction, Action> {
    match action {
      Action::ProductVariation(action) => Ok(action),
      other => Err(other),
    }
  }

  async fn on_action(&self, operation: ProductVariationAction) {
    match operation {
      ProductVariationAction::SynchronizeProductVariations {
        site_id,
        product_id,
        page_number,
        page_size,
        on_completion,
      } => on_completion
        .complete(synchronize_variations(self, site_id, product_id, page_number, page_size).await),
      ProductVariationAction::RetrieveProductVariation {
        site_id,
        product_id,
        variation_id,
        on_completion,
      } => on_completion.complete(retrieve_variation(self, site_id, product_id, variation_id).await),
      ProductVariationAction::UpdateProductVariation { variation, on_completion } => {
        on_completion.complete(update_variation(self, variation).await)
      }
    }
  }
}

/// The sweep only ever touches variations of the synchronized product.
async fn synchronize_variations(
  s: &ProductVariationStore,
  site_id: i64,
  product_id: i64,
  page_number: u32,
  page_size: u32,
) -> Result<bool, StoreError> {
  let variations =
    s.remote.load_all_product_variations(site_id, product_id, page_number, page_size).await?;

  let is_first_page = s.config.is_first_page(page_number);
  let in_scope = |v: &ProductVariation| v.site_id == site_id && v.product_id == product_id;
  let summary = s.cache.write(|t| reconcile(t, &variations, in_scope, is_first_page));
  debug!(
    path = "stores.variations.synchronize_variations",
    site_id, product_id, page_number, ?summary, "reconciled"
  );

  Ok(has_next_page(variations.len(), page_size))
}

async fn retrieve_variation(
  s: &ProductVariationStore,
  site_id: i64,
  product_id: i64,
  variation_id: i64,
) -> Result<ProductVariation, StoreError> {
  let variation = s.remote.load_product_variation(site_id, product_id, variation_id).await?;
  s.cache.upsert(variation.clone());
  Ok(variation)
}

async fn update_variation(
  s: &ProductVariationStore,
  variation: ProductVariation,
) -> Result<ProductVariation, StoreError> {
  let updated = s.remote.update_product_variation(&variation).await?;
  s.cache.upsert(updated.clone());
  Ok(updated)
}
