use std::collections::BTreeSet;

use crate::storage::{Record, Tables, Upserted};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileSummary {
  pub inserted: usize,
  pub updated: usize,
  pub deleted: usize,
}

impl ReconcileSummary {
  /// Change in the number of stored rows caused by the reconcile call.
  pub fn stored_delta(&self) -> isize {
    self.inserted as isize - self.deleted as isize
  }
}

/// Merges one page of remote records into `tables`.
///
/// Every record is upserted by key. When `is_first_page` is set, rows within
/// `scope` whose key is absent from `remote` are deleted afterwards; an empty
/// first page therefore clears the whole scope. Later pages only add or
/// update, so a multi-page sync prunes on the next first page, not during the
/// current one.
pub fn reconcile<T: Record>(
  tables: &mut Tables,
  remote: &[T],
  scope: impl Fn(&T) -> bool,
  is_first_page: bool,
) -> ReconcileSummary {
  let mut summary = ReconcileSummary::default();

  for record in remote {
    match tables.upsert(record.clone()) {
      Upserted::Inserted => summary.inserted += 1,
      Upserted::Updated => summary.updated += 1,
    }
  }

  if is_first_page {
    let active: BTreeSet<T::Key> = remote.iter().map(|record| record.key()).collect();
    summary.deleted = sweep_stale(tables, &active, scope);
  }

  summary
}

/// Deletes rows within `scope` whose key is not in `active`.
pub fn sweep_stale<T: Record>(
  tables: &mut Tables,
  active: &BTreeSet<T::Key>,
  scope: impl Fn(&T) -> bool,
) -> usize {
  tables.delete_matching::<T>(|row| scope(row) && !active.contains(&row.key()))
}

/// A page as large as requested means the server may hold more.
pub fn has_next_page(count: usize, page_size: u32) -> bool {
  page_size > 0 && count == page_size as usize
}
