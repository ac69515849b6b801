use log::{debug, trace};
use sqlx::SqliteConnection;

use crate::{
    db_types::{NewOrder, Order, OrderId, OrderStatusType},
    traits::OrderStoreError,
};

/// Inserts a new order into the database using the given connection, generating a fresh id for it.
/// This is a single atomic insert; a persistence failure leaves no partial write behind. You can
/// embed this call inside a transaction if you need to compose it, and pass `&mut *tx` as the
/// connection argument.
pub async fn insert_order(order: NewOrder, conn: &mut SqliteConnection) -> Result<Order, OrderStoreError> {
    let id = OrderId::random();
    let order: Order = sqlx::query_as(
        r#"
            INSERT INTO orders (id, amount, memo, status, metadata)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *;
        "#,
    )
    .bind(id.as_str())
    .bind(order.amount)
    .bind(order.memo)
    .bind(OrderStatusType::Created.to_string())
    .bind(NewOrder::empty_metadata())
    .fetch_one(conn)
    .await?;
    debug!("📝️ Order [{}] inserted", order.id);
    Ok(order)
}

/// Returns the entry in the orders table for the corresponding `id`, or `None` if there is none.
pub async fn fetch_order_by_id(id: &OrderId, conn: &mut SqliteConnection) -> Result<Option<Order>, sqlx::Error> {
    let order = sqlx::query_as("SELECT * FROM orders WHERE id = $1").bind(id.as_str()).fetch_optional(conn).await?;
    Ok(order)
}

/// Marks the order matching `order_ref` as approved. Returns `true` if a row was matched.
/// An unmatched reference changes nothing and is reported as `false`, not as an error.
pub async fn approve_order(order_ref: &OrderId, conn: &mut SqliteConnection) -> Result<bool, OrderStoreError> {
    let result = sqlx::query("UPDATE orders SET status = $1 WHERE id = $2")
        .bind(OrderStatusType::Approved.to_string())
        .bind(order_ref.as_str())
        .execute(conn)
        .await?;
    let matched = result.rows_affected() > 0;
    trace!("📝️ Approve on order [{order_ref}] matched: {matched}");
    Ok(matched)
}

/// Marks the order matching `order_ref` as completed, storing the transaction id and stamping
/// `completed_at`. Returns `true` if a row was matched, with the same silent no-op semantics as
/// [`approve_order`]. Re-running the statement for the same reference overwrites `txid` and
/// `completed_at`; ordering of transitions is not enforced.
pub async fn complete_order(
    order_ref: &OrderId,
    txid: Option<String>,
    conn: &mut SqliteConnection,
) -> Result<bool, OrderStoreError> {
    let result =
        sqlx::query("UPDATE orders SET status = $1, txid = $2, completed_at = CURRENT_TIMESTAMP WHERE id = $3")
            .bind(OrderStatusType::Completed.to_string())
            .bind(txid)
            .bind(order_ref.as_str())
            .execute(conn)
            .await?;
    let matched = result.rows_affected() > 0;
    trace!("📝️ Complete on order [{order_ref}] matched: {matched}");
    Ok(matched)
}

/// Fetches the most recently created orders, newest first, truncated to `limit`. The rowid
/// tiebreak keeps insertion order for rows created within the same timestamp granule.
pub async fn fetch_recent_orders(limit: i64, conn: &mut SqliteConnection) -> Result<Vec<Order>, sqlx::Error> {
    let orders = sqlx::query_as("SELECT * FROM orders ORDER BY created_at DESC, rowid DESC LIMIT $1")
        .bind(limit)
        .fetch_all(conn)
        .await?;
    trace!("📝️ Result of fetch_recent_orders: {} rows", orders.len());
    Ok(orders)
}
