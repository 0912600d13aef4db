mod common;

use common::{Harness, SITE_ID};
use megacommerce_stores::{
  actions::ProductTagAction,
  models::{
    config::SyncConfig,
    errors::{NetworkError, StoreError},
    tags::ProductTag,
  },
};
use pretty_assertions::assert_eq;

fn tag(site_id: i64, tag_id: i64, name: &str) -> ProductTag {
  ProductTag { site_id, tag_id, name: name.into(), slug: name.to_lowercase() }
}

fn stored_names(h: &Harness) -> Vec<String> {
  h.cache.all::<ProductTag>(|t| t.site_id == SITE_ID).into_iter().map(|t| t.name).collect()
}

async fn synchronize_all(h: &Harness) -> Result<(), StoreError> {
  h.run(|on_completion| ProductTagAction::SynchronizeAllProductTags { site_id: SITE_ID, on_completion }.into())
    .await
}

#[tokio::test]
async fn synchronize_all_tags_pages_until_a_short_page() {
  let h = Harness::with_sync(SyncConfig { max_page_size: 2, ..SyncConfig::default() });
  h.cache.upsert(tag(SITE_ID, 1, "Stale"));
  h.cache.upsert(tag(4321, 1, "Elsewhere"));
  h.respond("products/tags", "product-tags-page-1");
  h.respond("products/tags", "product-tags-page-2");

  synchronize_all(&h).await.unwrap();

  assert_eq!(stored_names(&h), vec!["Leather", "Cotton", "Wool"]);
  assert!(h.cache.load::<ProductTag>(&(4321, 1)).is_some());
  assert_eq!(h.network.requests_for("products/tags").len(), 2);
}

#[tokio::test]
async fn a_failing_tag_page_reports_its_number() {
  let h = Harness::with_sync(SyncConfig { max_page_size: 2, ..SyncConfig::default() });
  h.cache.upsert(tag(SITE_ID, 1, "Stale"));
  h.respond("products/tags", "product-tags-page-1");
  h.network.simulate_error("products/tags", NetworkError::Timeout);

  let result = synchronize_all(&h).await;

  assert!(matches!(result, Err(StoreError::PageSynchronization { page_number: 2, .. })));
  assert_eq!(result.unwrap_err().as_network(), Some(&NetworkError::Timeout));
  assert_eq!(stored_names(&h), vec!["Stale", "Leather", "Cotton"]);
}

#[tokio::test]
async fn add_tags_stores_only_the_created_ones() {
  let h = Harness::new();
  h.respond("products/tags/batch", "product-tags-created");

  let created = h
    .run(|on_completion| {
      ProductTagAction::AddProductTags {
        site_id: SITE_ID,
        tags: vec!["Linen".into(), "Leather".into()],
        on_completion,
      }
      .into()
    })
    .await
    .unwrap();

  assert_eq!(created, vec![tag(SITE_ID, 37, "Linen")]);
  assert_eq!(stored_names(&h), vec!["Linen"]);
  let body = h.network.requests()[0].body.clone().unwrap();
  assert_eq!(body["create"][1]["name"], "Leather");
}

#[tokio::test]
async fn delete_tags_removes_the_deleted_ones() {
  let h = Harness::new();
  h.cache.upsert(tag(SITE_ID, 34, "Leather"));
  h.cache.upsert(tag(SITE_ID, 35, "Cotton"));
  h.respond("products/tags/batch", "product-tags-deleted");

  let deleted = h
    .run(|on_completion| {
      ProductTagAction::DeleteProductTags { site_id: SITE_ID, ids: vec![34], on_completion }.into()
    })
    .await
    .unwrap();

  assert_eq!(deleted.len(), 1);
  assert_eq!(stored_names(&h), vec!["Cotton"]);
}
