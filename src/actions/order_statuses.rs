use crate::{actions::Completion, models::order_statuses::OrderStatus};

#[derive(Debug)]
pub enum OrderStatusAction {
  RetrieveOrderStatuses {
    site_id: i64,
    on_completion: Completion<Vec<OrderStatus>>,
  },
  ResetStoredOrderStatuses {
    on_completion: Completion<()>,
  },
}
