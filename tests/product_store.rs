mod common;

use common::{backend_error, fixture, Harness, SITE_ID};
use http::Method;
use megacommerce_stores::{
  actions::{ProductAction, ProductVariationAction},
  models::{
    errors::{NetworkError, ProductUpdateError, StoreError},
    products::{Product, ProductStatus, ProductVariation},
  },
};
use pretty_assertions::assert_eq;

fn product(site_id: i64, product_id: i64) -> Product {
  let product: Product = serde_json::from_value(fixture("product")["data"].clone()).unwrap();
  Product { product_id, ..product.with_site_id(site_id) }
}

fn variation(site_id: i64, product_id: i64, variation_id: i64) -> ProductVariation {
  let variation: ProductVariation =
    serde_json::from_value(fixture("product-variation")["data"].clone()).unwrap();
  ProductVariation { variation_id, ..variation.with_parent(site_id, product_id) }
}

async fn synchronize(h: &Harness, page_number: u32, page_size: u32) -> Result<bool, StoreError> {
  h.run(|on_completion| {
    ProductAction::SynchronizeProducts { site_id: SITE_ID, page_number, page_size, on_completion }.into()
  })
  .await
}

#[tokio::test]
async fn synchronize_products_stores_the_page() {
  let h = Harness::new();
  h.respond("products", "products-load-all");

  assert!(!synchronize(&h, 1, 25).await.unwrap());

  let stored = h.cache.load::<Product>(&(SITE_ID, 282)).unwrap();
  assert_eq!(stored.sku.as_deref(), Some("BTGR"));
  assert_eq!(stored.status, ProductStatus::Publish);
  assert_eq!(h.cache.count_all::<Product>(), 2);
  assert_eq!(h.network.requests_for("products")[0].params.get("per_page").map(String::as_str), Some("25"));
}

#[tokio::test]
async fn first_page_removes_stale_products_and_their_variations() {
  let h = Harness::new();
  h.cache.upsert(product(SITE_ID, 1));
  h.cache.upsert(variation(SITE_ID, 1, 10));
  h.cache.upsert(variation(SITE_ID, 282, 11));
  h.respond("products", "products-load-all");

  synchronize(&h, 1, 25).await.unwrap();

  assert!(h.cache.load::<Product>(&(SITE_ID, 1)).is_none());
  assert!(h.cache.load::<ProductVariation>(&(SITE_ID, 1, 10)).is_none());
  assert!(h.cache.load::<ProductVariation>(&(SITE_ID, 282, 11)).is_some());
}

#[tokio::test]
async fn failed_synchronization_keeps_products() {
  let h = Harness::new();
  h.cache.upsert(product(SITE_ID, 1));
  h.network.simulate_error("products", NetworkError::Timeout);

  assert!(matches!(synchronize(&h, 1, 25).await, Err(StoreError::Network(NetworkError::Timeout))));
  assert_eq!(h.cache.count_all::<Product>(), 1);
}

#[tokio::test]
async fn retrieve_product_stores_it() {
  let h = Harness::new();
  h.respond("products/282", "product");

  let retrieved = h
    .run(|on_completion| ProductAction::RetrieveProduct { site_id: SITE_ID, product_id: 282, on_completion }.into())
    .await
    .unwrap();

  assert_eq!(retrieved.site_id, SITE_ID);
  assert_eq!(h.cache.load::<Product>(&(SITE_ID, 282)), Some(retrieved));
}

#[tokio::test]
async fn update_product_maps_an_invalid_sku() {
  let h = Harness::new();
  h.cache.upsert(product(SITE_ID, 282));
  h.network.simulate_json("products/282", &backend_error("product_invalid_sku", "Invalid or duplicated SKU."));

  let mut edited = product(SITE_ID, 282);
  edited.sku = Some("TAKEN".into());
  let result = h.run(|on_completion| ProductAction::UpdateProduct { product: edited, on_completion }.into()).await;

  assert!(matches!(result, Err(StoreError::ProductUpdate(ProductUpdateError::InvalidSku))));
  assert_eq!(h.cache.load::<Product>(&(SITE_ID, 282)).unwrap().sku.as_deref(), Some("BTGR"));
}

#[tokio::test]
async fn update_product_passes_unknown_errors_through() {
  let h = Harness::new();
  h.network.simulate_json("products/282", &backend_error("rest_forbidden", "Sorry"));

  let result = h
    .run(|on_completion| ProductAction::UpdateProduct { product: product(SITE_ID, 282), on_completion }.into())
    .await;

  match result {
    Err(StoreError::Dotcom(err)) => assert_eq!(err.code(), Some("rest_forbidden")),
    other => panic!("unexpected result {other:?}"),
  }
}

#[tokio::test]
async fn update_product_stores_the_returned_product() {
  let h = Harness::new();
  h.respond("products/282", "product");

  let updated = h
    .run(|on_completion| ProductAction::UpdateProduct { product: product(SITE_ID, 282), on_completion }.into())
    .await
    .unwrap();

  assert_eq!(h.cache.load::<Product>(&(SITE_ID, 282)), Some(updated));
  let request = &h.network.requests_for("products/282")[0];
  assert_eq!(request.method, Method::PUT);
  assert_eq!(request.body.as_ref().unwrap()["status"], "publish");
}

#[tokio::test]
async fn reset_stored_products_clears_products_and_variations() {
  let h = Harness::new();
  h.cache.upsert(product(SITE_ID, 1));
  h.cache.upsert(variation(SITE_ID, 1, 10));

  h.run(|on_completion| ProductAction::ResetStoredProducts { on_completion }.into()).await.unwrap();

  assert_eq!(h.cache.count_all::<Product>(), 0);
  assert_eq!(h.cache.count_all::<ProductVariation>(), 0);
  assert!(h.network.requests().is_empty());
}

async fn synchronize_variations(
  h: &Harness,
  product_id: i64,
  page_number: u32,
  page_size: u32,
) -> Result<bool, StoreError> {
  h.run(|on_completion| {
    ProductVariationAction::SynchronizeProductVariations {
      site_id: SITE_ID,
      product_id,
      page_number,
      page_size,
      on_completion,
    }
    .into()
  })
  .await
}

#[tokio::test]
async fn synchronize_variations_sweeps_only_the_same_product() {
  let h = Harness::new();
  h.cache.upsert(variation(SITE_ID, 283, 1));
  h.cache.upsert(variation(SITE_ID, 284, 1));
  h.respond("products/283/variations", "product-variations-load-all");

  let has_next_page = synchronize_variations(&h, 283, 1, 2).await.unwrap();

  assert!(has_next_page);
  assert!(h.cache.load::<ProductVariation>(&(SITE_ID, 283, 1)).is_none());
  assert!(h.cache.load::<ProductVariation>(&(SITE_ID, 284, 1)).is_some());
  let stored = h.cache.load::<ProductVariation>(&(SITE_ID, 283, 1275)).unwrap();
  assert_eq!(stored.stock_quantity, Some(16));
  assert_eq!(stored.attributes[0].option, "Blue");
}

#[tokio::test]
async fn later_variation_pages_only_accumulate() {
  let h = Harness::new();
  h.cache.upsert(variation(SITE_ID, 283, 1));
  h.respond("products/283/variations", "product-variations-load-all");

  synchronize_variations(&h, 283, 2, 25).await.unwrap();

  assert_eq!(h.cache.count::<ProductVariation>(|v| v.product_id == 283), 3);
}

#[tokio::test]
async fn retrieve_and_update_variation_store_the_result() {
  let h = Harness::new();
  h.respond("products/283/variations/1275", "product-variation");

  let retrieved = h
    .run(|on_completion| {
      ProductVariationAction::RetrieveProductVariation {
        site_id: SITE_ID,
        product_id: 283,
        variation_id: 1275,
        on_completion,
      }
      .into()
    })
    .await
    .unwrap();
  assert_eq!(retrieved.product_id, 283);

  let updated = h
    .run(|on_completion| {
      ProductVariationAction::UpdateProductVariation { variation: retrieved.clone(), on_completion }.into()
    })
    .await
    .unwrap();

  assert_eq!(h.cache.count_all::<ProductVariation>(), 1);
  assert_eq!(h.cache.load::<ProductVariation>(&(SITE_ID, 283, 1275)), Some(updated));
  assert_eq!(h.network.requests_for("variations/1275")[1].method, Method::PUT);
}
