use crate::{actions::Completion, models::orders::Order};

#[derive(Debug)]
pub enum OrderAction {
  /// Completes with `true` when another page is likely available. An empty
  /// `statuses` list synchronizes orders of every status.
  SynchronizeOrders {
    site_id: i64,
    statuses: Vec<String>,
    page_number: u32,
    page_size: u32,
    on_completion: Completion<bool>,
  },
  RetrieveOrder {
    site_id: i64,
    order_id: i64,
    on_completion: Completion<Order>,
  },
  SearchOrders {
    site_id: i64,
    keyword: String,
    page_number: u32,
    page_size: u32,
    on_completion: Completion<()>,
  },
  DeleteOrder {
    site_id: i64,
    order: Order,
    delete_permanently: bool,
    on_completion: Completion<Order>,
  },
  CheckIfStoreHasOrders {
    site_id: i64,
    on_completion: Completion<bool>,
  },
  ResetStoredOrders {
    on_completion: Completion<()>,
  },
}
