mod common;

use common::{backend_error, fixture, Harness};
use http::Method;
use megacommerce_stores::{
  actions::AccountAction,
  models::{
    accounts::{Account, CreateAccountResult, Site},
    errors::{CreateAccountError, DotcomError, NetworkError, StoreError},
  },
};
use pretty_assertions::assert_eq;

fn site(site_id: i64) -> Site {
  let site: Site = serde_json::from_value(fixture("sites")["sites"][0].clone()).unwrap();
  Site { site_id, ..site }
}

async fn synchronize_sites(h: &Harness, selected_site_id: Option<i64>) -> Result<(), StoreError> {
  h.run(|on_completion| AccountAction::SynchronizeSites { selected_site_id, on_completion }.into()).await
}

async fn create_account(h: &Harness) -> Result<CreateAccountResult, StoreError> {
  h.run(|on_completion| {
    AccountAction::CreateAccount {
      email: "merchant@example.com".into(),
      username: "merchant".into(),
      password: "hunter22".into(),
      on_completion,
    }
    .into()
  })
  .await
}

#[tokio::test]
async fn synchronize_account_then_load_it_from_the_cache() {
  let h = Harness::new();
  h.respond("me", "me");

  let account = h.run(|on_completion| AccountAction::SynchronizeAccount { on_completion }.into()).await.unwrap();
  assert_eq!(account.username, "apiexamples");

  h.network.remove_all_simulated_responses();
  let loaded = h
    .run(|on_completion| AccountAction::LoadAccount { user_id: 78972699, on_completion }.into())
    .await
    .unwrap();
  assert_eq!(loaded, Some(account));

  let missing =
    h.run(|on_completion| AccountAction::LoadAccount { user_id: 1, on_completion }.into()).await.unwrap();
  assert_eq!(missing, None);
  assert_eq!(h.network.requests().len(), 1);
}

#[tokio::test]
async fn synchronize_account_failure_stores_nothing() {
  let h = Harness::new();
  h.network.simulate_json("me", &backend_error("unauthorized", "Token expired"));

  let result = h.run(|on_completion| AccountAction::SynchronizeAccount { on_completion }.into()).await;

  assert!(matches!(result, Err(StoreError::Dotcom(DotcomError::Unauthorized))));
  assert_eq!(h.cache.count_all::<Account>(), 0);
}

#[tokio::test]
async fn synchronize_sites_keeps_the_selected_site() {
  let h = Harness::new();
  h.cache.upsert(site(42));
  h.cache.upsert(site(43));
  h.respond("me/sites", "sites");

  synchronize_sites(&h, Some(42)).await.unwrap();

  let ids: Vec<i64> = h.cache.all::<Site>(|_| true).iter().map(|s| s.site_id).collect();
  assert_eq!(ids, vec![42, 1234, 5678]);
  assert_eq!(h.cache.load::<Site>(&1234).map(|s| s.gmt_offset), Some(2.0));
  assert_eq!(h.network.requests_for("me/sites")[0].method, Method::GET);
}

#[tokio::test]
async fn load_and_synchronize_site_prefers_the_cache() {
  let h = Harness::new();
  h.cache.upsert(site(42));

  let loaded = h
    .run(|on_completion| AccountAction::LoadAndSynchronizeSiteIfNeeded { site_id: 42, on_completion }.into())
    .await
    .unwrap();

  assert_eq!(loaded, site(42));
  assert!(h.network.requests().is_empty());
}

#[tokio::test]
async fn load_and_synchronize_site_fetches_missing_sites() {
  let h = Harness::new();
  h.respond("me/sites", "sites");

  let loaded = h
    .run(|on_completion| AccountAction::LoadAndSynchronizeSiteIfNeeded { site_id: 5678, on_completion }.into())
    .await
    .unwrap();
  assert_eq!(loaded.name, "Blog");

  let unknown = h
    .run(|on_completion| AccountAction::LoadAndSynchronizeSiteIfNeeded { site_id: 1, on_completion }.into())
    .await;
  assert!(matches!(unknown, Err(StoreError::UnknownSite)));
}

#[tokio::test]
async fn load_and_synchronize_site_surfaces_network_errors() {
  let h = Harness::new();
  h.network.simulate_error("me/sites", NetworkError::NotConnected);

  let result = h
    .run(|on_completion| AccountAction::LoadAndSynchronizeSiteIfNeeded { site_id: 1, on_completion }.into())
    .await;

  assert!(matches!(result, Err(StoreError::Network(NetworkError::NotConnected))));
}

#[tokio::test]
async fn create_account_returns_the_token() {
  let h = Harness::new();
  h.respond("users/new", "create-account-success");

  let result = create_account(&h).await.unwrap();

  assert_eq!(result.auth_token, "token-abc");
  assert_eq!(result.username, "merchant");
  let body = h.network.requests()[0].body.clone().unwrap();
  assert_eq!(body["validate"], false);
  assert_eq!(body["email"], "merchant@example.com");
}

#[tokio::test]
async fn create_account_maps_backend_codes() {
  let cases = [
    ("email_exists", CreateAccountError::EmailExists),
    ("email_invalid", CreateAccountError::InvalidEmail),
    ("username_exists", CreateAccountError::InvalidUsername),
    ("password_invalid", CreateAccountError::InvalidPassword { message: Some("Too short".into()) }),
  ];

  for (code, expected) in cases {
    let h = Harness::new();
    h.network.simulate_json("users/new", &backend_error(code, "Too short"));

    match create_account(&h).await {
      Err(StoreError::CreateAccount(err)) => assert_eq!(err, expected),
      other => panic!("{code}: unexpected result {other:?}"),
    }
  }
}

#[tokio::test]
async fn create_account_passes_unknown_codes_through() {
  let h = Harness::new();
  h.network.simulate_json("users/new", &backend_error("signup_blocked", "Nope"));

  match create_account(&h).await {
    Err(StoreError::Dotcom(DotcomError::Unknown { code, message })) => {
      assert_eq!(code, "signup_blocked");
      assert_eq!(message.as_deref(), Some("Nope"));
    }
    other => panic!("unexpected result {other:?}"),
  }
}
