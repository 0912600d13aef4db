use std::{collections::BTreeSet, sync::Arc};

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{
  actions::{Action, ActionDomain, ProductAction},
  models::{
    config::SyncConfig,
    errors::{ProductUpdateError, StoreError},
    products::{Product, ProductVariation},
  },
  remote::Remote,
  storage::{
    reconcile::{has_next_page, reconcile},
    Cache, Record,
  },
  stores::{Store, StoreArgs},
};

#[derive(Debug, Clone)]
pub struct ProductStore {
  remote: Remote,
  cache: Arc<Cache>,
  config: Arc<SyncConfig>,
}

impl ProductStore {
  pub fn new(args: StoreArgs) -> Self {
    Self { remote: args.remote, cache: args.cache, config: args.config }
  }
}

#[async_trait]
impl Store for ProductStore {
  type Operation = ProductAction;

  fn domain() -> ActionDomain {
    ActionDomain::Product
  }

  fn accepts(action: Action) -> Result<ProductAction, Action> {
    match action {
      Action::Product(action) => Ok(action),
      other => Err(other),
    }
  }

  async fn on_action(&self, operation: ProductAction) {
    match operation {
      ProductAction::SynchronizeProducts { site_id, page_number, page_size, on_completion } => {
        on_completion.complete(synchronize_products(self, site_id, page_number, page_size).await)
      }
      ProductAction::RetrieveProduct { site_id, product_id, on_completion } => {
        on_completion.complete(retrieve_product(self, site_id, product_id).await)
      }
      ProductAction::UpdateProduct { product, on_completion } => {
        on_completion.complete(update_product(self, product).await)
      }
      ProductAction::ResetStoredProducts { on_completion } => {
        on_completion.complete(Ok(reset_stored_products(self)))
      }
    }
  }
}

async fn synchronize_products(
  s: &ProductStore,
  site_id: i64,
  page_number: u32,
  page_size: u32,
) -> Result<bool, StoreError> {
  let products = s.remote.load_all_products(site_id, page_number, page_size).await?;

  let is_first_page = s.config.is_first_page(page_number);
  let summary = s.cache.write(|t| {
    let mut stale = BTreeSet::new();
    if is_first_page {
      let active: BTreeSet<_> = products.iter().map(|p| p.key()).collect();
      let swept = t.all::<Product>(|p| p.site_id == site_id && !active.contains(&p.key()));
      stale.extend(swept.iter().map(|p| p.product_id));
    }

    let summary = reconcile(t, &products, |p: &Product| p.site_id == site_id, is_first_page);
    // Variations of swept products go with them.
    t.delete_matching::<ProductVariation>(|v| v.site_id == site_id && stale.contains(&v.product_id));
    summary
  });
  debug!(path = "stores.products.synchronize_products", site_id, page_number, ?summary, "reconciled");

  Ok(has_next_page(products.len(), page_size))
}

async fn retrieve_product(s: &ProductStore, site_id: i64, product_id: i64) -> Result<Product, StoreError> {
  let product = s.remote.load_product(site_id, product_id).await?;
  s.cache.upsert(product.clone());
  Ok(product)
}

async fn update_product(s: &ProductStore, product: Product) -> Result<Product, StoreError> {
  let updated = s.remote.update_product(&product).await.map_err(|err| {
    let err = err.map_dotcom(ProductUpdateError::from_dotcom);
    warn!(path = "stores.products.update_product", product_id = product.product_id, "update failed: {}", err);
    err
  })?;

  s.cache.upsert(updated.clone());
  Ok(updated)
}

fn reset_stored_products(s: &ProductStore) {
  let deleted = s.cache.write(|t| t.delete_all::<Product>() + t.delete_all::<ProductVariation>());
  debug!(path = "stores.products.reset_stored_products", deleted, "cleared");
}
