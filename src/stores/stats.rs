use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

use crate::{
  actions::{Action, ActionDomain, StatsAction},
  models::{
    errors::{SiteStatsError, StoreError},
    stats::{SiteVisitStats, StatGranularity},
  },
  remote::Remote,
  storage::{Cache, Upserted},
  stores::{Store, StoreArgs},
};

#[derive(Debug, Clone)]
pub struct StatsStore {
  remote: Remote,
  cache: Arc<Cache>,
}

impl StatsStore {
  pub fn new(args: StoreArgs) -> Self {
    Self { remote: args.remote, cache: args.cache }
  }
}

#[async_trait]
impl Store for StatsStore {
  type Operation = StatsAction;

  fn domain() -> ActionDomain {
    ActionDomain::Stats
  }

  fn accepts(action: Action) -> Result<StatsAction, Action> {
    match action {
      Action::Stats(action) => Ok(action),
      other => Err(other),
    }
  }

  async fn on_action(&self, operation: StatsAction) {
    match operation {
      StatsAction::RetrieveSiteVisitStats {
        site_id,
        granularity,
        latest_date,
        quantity,
        on_completion,
      } => on_completion
        .complete(retrieve_site_visit_stats(self, site_id, granularity, latest_date, quantity).await),
      StatsAction::ResetStoredStats { on_completion } => {
        self.cache.delete_all::<SiteVisitStats>();
        on_completion.complete(Ok(()))
      }
    }
  }
}

/// One row per site and granularity, replaced by every successful fetch.
async fn retrieve_site_visit_stats(
  s: &StatsStore,
  site_id: i64,
  granularity: StatGranularity,
  latest_date: NaiveDate,
  quantity: u32,
) -> Result<SiteVisitStats, StoreError> {
  let stats = s
    .remote
    .load_site_visit_stats(site_id, granularity, latest_date, quantity)
    .await
    .map_err(|err| err.map_dotcom(SiteStatsError::from_dotcom))?;

  let upserted = s.cache.upsert(stats.clone());
  debug!(
    path = "stores.stats.retrieve_site_visit_stats",
    site_id, %granularity, replaced = upserted == Upserted::Updated, "stats stored"
  );
  Ok(stats)
}
