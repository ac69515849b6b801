use thiserror::Error;

use crate::db_types::{NewOrder, Order, OrderId};

/// This trait defines the behaviour for backends supporting the payment tracker engine.
///
/// Every operation is a short-lived, single-statement transaction. There are no multi-statement
/// flows, so backends need no explicit rollback logic; whatever atomicity the underlying engine
/// gives a single insert or update statement is the whole concurrency story. Concurrent calls may
/// interleave freely, and two concurrent `complete_order` calls for the same reference race with
/// last-write-wins semantics.
#[allow(async_fn_in_trait)]
pub trait OrderStoreDatabase {
    /// The URL of the database
    fn url(&self) -> &str;

    /// Inserts a new order with a freshly generated id, `created` status and empty metadata.
    /// Returns the stored row. A single atomic insert: any persistence failure leaves no partial
    /// write behind.
    async fn insert_order(&self, order: NewOrder) -> Result<Order, OrderStoreError>;

    /// Fetches the order with the given id, or `None` if no such order exists.
    async fn fetch_order_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderStoreError>;

    /// Sets the status of the matching order to `approved`.
    ///
    /// Returns whether a row was actually matched. An unmatched reference mutates nothing and is
    /// *not* an error; the public acknowledgement discards this flag, but it is surfaced here so
    /// that callers and tests can see the silent no-op.
    async fn approve_order(&self, order_ref: &OrderId) -> Result<bool, OrderStoreError>;

    /// Sets the status of the matching order to `completed`, records the transaction id and
    /// stamps `completed_at`.
    ///
    /// Returns whether a row was matched, with the same silent no-op semantics as
    /// [`approve_order`](Self::approve_order). Calling this twice for the same reference
    /// re-executes the same write and overwrites `txid` and `completed_at`; the store does not
    /// guard against re-entry. Nor does it reject out-of-order transitions: completing a
    /// `created` order silently advances it.
    async fn complete_order(&self, order_ref: &OrderId, txid: Option<String>) -> Result<bool, OrderStoreError>;

    /// Fetches the most recently created orders, newest first, truncated to `limit`.
    async fn recent_orders(&self, limit: i64) -> Result<Vec<Order>, OrderStoreError>;

    /// Closes the database connection.
    async fn close(&mut self) -> Result<(), OrderStoreError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Error)]
pub enum OrderStoreError {
    #[error("Internal database error: {0}")]
    DatabaseError(String),
}

impl From<sqlx::Error> for OrderStoreError {
    fn from(e: sqlx::Error) -> Self {
        OrderStoreError::DatabaseError(e.to_string())
    }
}
