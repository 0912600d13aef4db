mod common;

use common::{backend_error, Harness, SITE_ID};
use megacommerce_stores::{
  actions::{DomainAction, SiteAction},
  models::{
    errors::{DotcomError, SiteCreationError, StoreError},
    sites::SiteCreationResult,
  },
};
use pretty_assertions::assert_eq;

async fn create_site(h: &Harness, domain: Option<&str>) -> Result<SiteCreationResult, StoreError> {
  h.run(|on_completion| {
    SiteAction::CreateSite {
      name: "My Fancy Store!".into(),
      domain: domain.map(str::to_string),
      on_completion,
    }
    .into()
  })
  .await
}

#[tokio::test]
async fn create_site_derives_the_address_from_the_name() {
  let h = Harness::new();
  h.respond("sites/new", "site-creation-success");

  let site = create_site(&h, None).await.unwrap();

  assert_eq!(
    site,
    SiteCreationResult {
      site_id: 191,
      name: "My Fancy Store".into(),
      url: "https://myfancystore.example.com/".into(),
      site_slug: "myfancystore.example.com".into(),
    }
  );
  let body = h.network.requests()[0].body.clone().unwrap();
  assert_eq!(body["blog_name"], "myfancystore");
  assert_eq!(body["blog_title"], "My Fancy Store!");
}

#[tokio::test]
async fn create_site_uses_an_explicit_domain() {
  let h = Harness::new();
  h.respond("sites/new", "site-creation-success");

  create_site(&h, Some("fancy2024")).await.unwrap();

  assert_eq!(h.network.requests()[0].body.as_ref().unwrap()["blog_name"], "fancy2024");
}

#[tokio::test]
async fn create_site_maps_address_errors() {
  let cases = [
    ("blog_name_exists", SiteCreationError::DomainExists),
    ("blog_name_invalid", SiteCreationError::InvalidDomain),
    ("blog_name_only_lowercase_letters_and_numbers", SiteCreationError::InvalidDomain),
    ("blog_name_reserved", SiteCreationError::ReservedDomain),
  ];

  for (code, expected) in cases {
    let h = Harness::new();
    h.network.simulate_json("sites/new", &backend_error(code, "Sorry"));

    match create_site(&h, None).await {
      Err(StoreError::SiteCreation(err)) => assert_eq!(err, expected),
      other => panic!("{code}: unexpected result {other:?}"),
    }
  }
}

#[tokio::test]
async fn create_site_reports_an_unsuccessful_answer() {
  let h = Harness::new();
  h.respond("sites/new", "site-creation-failure");

  assert!(matches!(
    create_site(&h, None).await,
    Err(StoreError::SiteCreation(SiteCreationError::NotCreated))
  ));
}

#[tokio::test]
async fn create_site_passes_generic_errors_through() {
  let h = Harness::new();
  h.network.simulate_json("sites/new", &backend_error("invalid_token", "Expired"));

  assert!(matches!(create_site(&h, None).await, Err(StoreError::Dotcom(DotcomError::InvalidToken))));
}

#[tokio::test]
async fn free_suggestions_leave_paid_domains_out() {
  let h = Harness::new();
  h.respond("domains/suggestions", "domain-suggestions");

  let suggestions = h
    .run(|on_completion| {
      DomainAction::LoadFreeDomainSuggestions { query: "fancy store".into(), on_completion }.into()
    })
    .await
    .unwrap();

  let names: Vec<_> = suggestions.iter().map(|s| s.name.as_str()).collect();
  assert_eq!(names, vec!["fancystore.wordpress.com", "fancystoreshop.wordpress.com"]);

  let params = &h.network.requests()[0].params;
  assert_eq!(params.get("query").map(String::as_str), Some("fancy store"));
  assert_eq!(params.get("only_wordpressdotcom").map(String::as_str), Some("true"));
}

#[tokio::test]
async fn no_free_suggestion_is_an_error() {
  let h = Harness::new();
  h.respond("domains/suggestions", "domain-suggestions-paid-only");

  let result = h
    .run(|on_completion| DomainAction::LoadFreeDomainSuggestions { query: "fancy".into(), on_completion }.into())
    .await;

  assert!(matches!(result, Err(StoreError::EmptySuggestions)));
}

#[tokio::test]
async fn load_domains_lists_the_site_domains() {
  let h = Harness::new();
  h.respond(&format!("sites/{SITE_ID}/domains"), "site-domains");

  let domains = h
    .run(|on_completion| DomainAction::LoadDomains { site_id: SITE_ID, on_completion }.into())
    .await
    .unwrap();

  assert_eq!(domains.len(), 2);
  assert!(domains[0].is_primary);
  assert!(domains[1].is_staging);
  assert_eq!(domains[0].renewal_date.as_deref(), Some("2025-01-01"));
}
