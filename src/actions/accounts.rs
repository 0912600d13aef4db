use crate::{
  actions::Completion,
  models::accounts::{Account, CreateAccountResult, Site},
};

#[derive(Debug)]
pub enum AccountAction {
  SynchronizeAccount {
    on_completion: Completion<Account>,
  },
  /// Reads the cache only.
  LoadAccount {
    user_id: i64,
    on_completion: Completion<Option<Account>>,
  },
  /// The selected site survives the sweep even when the backend omits it.
  SynchronizeSites {
    selected_site_id: Option<i64>,
    on_completion: Completion<()>,
  },
  LoadAndSynchronizeSiteIfNeeded {
    site_id: i64,
    on_completion: Completion<Site>,
  },
  CreateAccount {
    email: String,
    username: String,
    password: String,
    on_completion: Completion<CreateAccountResult>,
  },
}
