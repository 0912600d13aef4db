use std::{collections::BTreeSet, sync::Arc};

use async_trait::async_trait;
use tracing::debug;

use crate::{
  actions::{Action, ActionDomain, ProductAttributeAction},
  models::{
    attributes::{ProductAttribute, ProductAttributeTerm},
    errors::StoreError,
  },
  remote::Remote,
  storage::{reconcile::reconcile, Cache, Record},
  stores::{Store, StoreArgs},
};

#[derive(Debug, Clone)]
pub struct ProductAttributeStore {
  remote: Remote,
  cache: Arc<Cache>,
}

impl ProductAttributeStore {
  pub fn new(args: StoreArgs) -> Self {
    Self { remote: args.remote, cache: args.cache }
  }
}

#[async_trait]
impl Store for ProductAttributeStore {
  type Operation = ProductAttributeAction;

  fn domain() -> ActionDomain {
    ActionDomain::ProductAttribute
  }

  fn accepts(action: Action) -> Result<ProductAttributeAction, Action> {
    match action {
      Action::ProductAttribute(action) => Ok(action),
      other => Err(other),
    }
  }

  async fn on_action(&self, operation: ProductAttributeAction) {
    match operation {
      ProductAttributeAction::SynchronizeProductAttributes { site_id, on_completion } => {
        on_completion.complete(synchronize_attributes(self, site_id).await)
      }
      ProductAttributeAction::AddProductAttribute { site_id, name, on_completion } => {
        on_completion.complete(add_attribute(self, site_id, &name).await)
      }
      ProductAttributeAction::DeleteProductAttribute { site_id, attribute_id, on_completion } => {
        on_completion.complete(delete_attribute(self, site_id, attribute_id).await)
      }
    }
  }
}

/// The backend returns every attribute at once, so each call is a first page.
async fn synchronize_attributes(
  s: &ProductAttributeStore,
  site_id: i64,
) -> Result<Vec<ProductAttribute>, StoreError> {
  let attributes = s.remote.load_all_product_attributes(site_id).await?;

  let (summary, orphans) = s.cache.write(|t| {
    let summary = reconcile(t, &attributes, |a: &ProductAttribute| a.site_id == site_id, true);
    let kept: BTreeSet<i64> = attributes.iter().map(|a| a.attribute_id).collect();
    let orphans = t.delete_matching::<ProductAttributeTerm>(|term| {
      term.site_id == site_id && !kept.contains(&term.attribute_id)
    });
    (summary, orphans)
  });
  debug!(
    path = "stores.attributes.synchronize_attributes",
    site_id, ?summary, orphans, "reconciled"
  );

  Ok(attributes)
}

async fn add_attribute(
  s: &ProductAttributeStore,
  site_id: i64,
  name: &str,
) -> Result<ProductAttribute, StoreError> {
  let attribute = s.remote.create_product_attribute(site_id, name).await?;
  s.cache.upsert(attribute.clone());
  Ok(attribute)
}

async fn delete_attribute(
  s: &ProductAttributeStore,
  site_id: i64,
  attribute_id: i64,
) -> Result<ProductAttribute, StoreError> {
  let attribute = s.remote.delete_product_attribute(site_id, attribute_id).await?;

  s.cache.write(|t| {
    t.delete::<ProductAttribute>(&attribute.key());
    t.delete_matching::<ProductAttributeTerm>(|term| {
      term.site_id == site_id && term.attribute_id == attribute.attribute_id
    });
  });
  Ok(attribute)
}
