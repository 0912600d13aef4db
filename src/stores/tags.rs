use std::{collections::BTreeSet, sync::Arc};

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{
  actions::{Action, ActionDomain, ProductTagAction},
  models::{config::SyncConfig, errors::StoreError, tags::ProductTag},
  remote::Remote,
  storage::{
    reconcile::{has_next_page, reconcile, sweep_stale},
    Cache, Record,
  },
  stores::{Store, StoreArgs},
};

#[derive(Debug, Clone)]
pub struct ProductTagStore {
  remote: Remote,
  cache: Arc<Cache>,
  config: Arc<SyncConfig>,
}

impl ProductTagStore {
  pub fn new(args: StoreArgs) -> Self {
    Self { remote: args.remote, cache: args.cache, config: args.config }
  }
}

#[async_trait]
impl Store for ProductTagStore {
  type Operation = ProductTagAction;

  fn domain() -> ActionDomain {
    ActionDomain::ProductTag
  }

  fn accepts(action: Action) -> Result<ProductTagAction, Action> {
    match action {
      Action::ProductTag(action) => Ok(action),
      other => Err(other),
    }
  }

  async fn on_action(&self, operation: ProductTagAction) {
    match operation {
      ProductTagAction::SynchronizeAllProductTags { site_id, on_completion } => {
        on_completion.complete(synchronize_all_tags(self, site_id).await)
      }
      ProductTagAction::AddProductTags { site_id, tags, on_completion } => {
        on_completion.complete(add_tags(self, site_id, &tags).await)
      }
      ProductTagAction::DeleteProductTags { site_id, ids, on_completion } => {
        on_completion.complete(delete_tags(self, site_id, &ids).await)
      }
    }
  }
}

async fn synchronize_all_tags(s: &ProductTagStore, site_id: i64) -> Result<(), StoreError> {
  let path = "stores.tags.synchronize_all_tags";
  let page_size = s.config.max_page_size;
  let mut page_number = s.config.first_page_number;
  let mut synchronized = BTreeSet::new();

  loop {
    let tags = s.remote.load_all_product_tags(site_id, page_number, page_size).await.map_err(|err| {
      warn!(path, site_id, page_number, "page failed: {}", err);
      StoreError::PageSynchronization { page_number, source: Box::new(err) }
    })?;

    let summary = s.cache.write(|t| reconcile(t, &tags, |_: &ProductTag| false, false));
    debug!(path, site_id, page_number, ?summary, "page reconciled");
    synchronized.extend(tags.iter().map(|tag| tag.key()));

    if !has_next_page(tags.len(), page_size) {
      break;
    }
    page_number += 1;
  }

  let deleted =
    s.cache.write(|t| sweep_stale(t, &synchronized, |tag: &ProductTag| tag.site_id == site_id));
  debug!(path, site_id, deleted, "stale tags swept");
  Ok(())
}

async fn add_tags(
  s: &ProductTagStore,
  site_id: i64,
  names: &[String],
) -> Result<Vec<ProductTag>, StoreError> {
  let created = s.remote.create_product_tags(site_id, names).await?;
  s.cache.write(|t| reconcile(t, &created, |_: &ProductTag| false, false));
  Ok(created)
}

async fn delete_tags(
  s: &ProductTagStore,
  site_id: i64,
  ids: &[i64],
) -> Result<Vec<ProductTag>, StoreError> {
  let deleted = s.remote.delete_product_tags(site_id, ids).await?;
  s.cache.write(|t| {
    for tag in &deleted {
      t.delete::<ProductTag>(&tag.key());
    }
  });
  Ok(deleted)
}
