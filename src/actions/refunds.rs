use crate::{actions::Completion, models::refunds::Refund};

#[derive(Debug)]
pub enum RefundAction {
  /// Completes with `true` when another page is likely available.
  SynchronizeRefunds {
    site_id: i64,
    order_id: i64,
    page_number: u32,
    page_size: u32,
    on_completion: Completion<bool>,
  },
  RetrieveRefund {
    site_id: i64,
    order_id: i64,
    refund_id: i64,
    on_completion: Completion<Refund>,
  },
  RetrieveRefunds {
    site_id: i64,
    order_id: i64,
    refund_ids: Vec<i64>,
    on_completion: Completion<()>,
  },
  CreateRefund {
    site_id: i64,
    order_id: i64,
    refund: Refund,
    on_completion: Completion<Refund>,
  },
  ResetStoredRefunds {
    on_completion: Completion<()>,
  },
}
