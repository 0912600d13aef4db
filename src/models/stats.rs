use derive_more::Display;
use serde::Deserialize;
use serde_json::Value;

use crate::storage::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatGranularity {
  #[display("day")]
  Day,
  #[display("week")]
  Week,
  #[display("month")]
  Month,
  #[display("year")]
  Year,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteVisitStatsItem {
  pub period: String,
  pub views: i64,
  pub visitors: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteVisitStats {
  pub site_id: i64,
  pub date: String,
  pub granularity: StatGranularity,
  pub items: Vec<SiteVisitStatsItem>,
}

impl Record for SiteVisitStats {
  type Key = (i64, StatGranularity);

  fn key(&self) -> Self::Key {
    (self.site_id, self.granularity)
  }
}

/// Column oriented payload: `fields` names each position of the `data` rows.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SiteVisitStatsEnvelope {
  pub date: String,
  pub unit: StatGranularity,
  pub fields: Vec<String>,
  pub data: Vec<Vec<Value>>,
}

impl SiteVisitStatsEnvelope {
  pub fn into_stats(self, site_id: i64) -> SiteVisitStats {
    let column = |name: &str| self.fields.iter().position(|field| field == name);
    let (period, views, visitors) = (column("period"), column("views"), column("visitors"));

    let items = self
      .data
      .iter()
      .map(|row| {
        let text = |idx: Option<usize>| {
          idx.and_then(|i| row.get(i)).and_then(Value::as_str).unwrap_or_default().to_string()
        };
        let number = |idx: Option<usize>| idx.and_then(|i| row.get(i)).and_then(Value::as_i64);
        SiteVisitStatsItem {
          period: text(period),
          views: number(views).unwrap_or_default(),
          visitors: number(visitors).unwrap_or_default(),
        }
      })
      .collect();

    SiteVisitStats { site_id, date: self.date, granularity: self.unit, items }
  }
}
