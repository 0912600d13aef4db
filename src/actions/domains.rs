use crate::{
  actions::Completion,
  models::domains::{FreeDomainSuggestion, SiteDomain},
};

#[derive(Debug)]
pub enum DomainAction {
  LoadFreeDomainSuggestions {
    query: String,
    on_completion: Completion<Vec<FreeDomainSuggestion>>,
  },
  LoadDomains {
    site_id: i64,
    on_completion: Completion<Vec<SiteDomain>>,
  },
}
