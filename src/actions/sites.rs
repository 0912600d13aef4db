use crate::{actions::Completion, models::sites::SiteCreationResult};

#[derive(Debug)]
pub enum SiteAction {
  /// Without a `domain`, the site address is derived from `name`.
  CreateSite {
    name: String,
    domain: Option<String>,
    on_completion: Completion<SiteCreationResult>,
  },
}
