use std::fmt::Debug;

use log::*;
use thiserror::Error;

use crate::{
    db_types::{NewOrder, Order, OrderId},
    traits::{OrderStoreDatabase, OrderStoreError, PaymentAuthority, PaymentAuthorityError},
};

/// `OrderFlowApi` is the primary API for handling order lifecycle events: creation, approval,
/// completion and listing.
///
/// An instance is created by supplying a database backend that implements [`OrderStoreDatabase`]
/// and a [`PaymentAuthority`]. The authority is consulted before the local state transitions for
/// approve and for transaction verification; with the default no-op authority these are purely
/// local operations.
pub struct OrderFlowApi<B, P> {
    db: B,
    authority: P,
}

impl<B, P> Debug for OrderFlowApi<B, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderFlowApi")
    }
}

impl<B, P> OrderFlowApi<B, P> {
    pub fn new(db: B, authority: P) -> Self {
        Self { db, authority }
    }
}

impl<B, P> OrderFlowApi<B, P>
where
    B: OrderStoreDatabase,
    P: PaymentAuthority,
{
    /// Submit a new order to the store. The store generates the id; the returned record carries
    /// it along with the server-assigned creation time.
    pub async fn create_order(&self, order: NewOrder) -> Result<Order, OrderFlowError> {
        let order = self.db.insert_order(order).await?;
        debug!("🔄️📦️ Order [{}] created with amount {}", order.id, order.amount);
        Ok(order)
    }

    /// Approve an order.
    ///
    /// The payment id, if given, is first approved with the payment authority. Then, if an order
    /// reference was supplied, the matching order is marked as approved locally. No reference
    /// means no mutation. The returned flag says whether a row was matched; callers that expose
    /// the public contract discard it and acknowledge regardless.
    pub async fn approve_order(
        &self,
        payment_id: Option<&str>,
        order_ref: Option<&OrderId>,
    ) -> Result<bool, OrderFlowError> {
        if let Some(payment_id) = payment_id {
            self.authority.approve_payment(payment_id).await?;
        }
        let matched = match order_ref {
            Some(order_ref) => self.db.approve_order(order_ref).await?,
            None => {
                debug!("🔄️📦️ Approve request without an order reference. Nothing to update.");
                false
            },
        };
        Ok(matched)
    }

    /// Complete an order, recording the transaction id against it.
    ///
    /// Same contract as [`Self::approve_order`]: no reference means no mutation, and the matched
    /// flag is informational. The transaction id is stored as supplied, including `None`.
    pub async fn complete_order(
        &self,
        order_ref: Option<&OrderId>,
        txid: Option<String>,
    ) -> Result<bool, OrderFlowError> {
        let matched = match order_ref {
            Some(order_ref) => self.db.complete_order(order_ref, txid).await?,
            None => {
                debug!("🔄️📦️ Complete request without an order reference. Nothing to update.");
                false
            },
        };
        Ok(matched)
    }

    /// Fetch the most recently created orders, newest first, truncated to `limit`.
    pub async fn recent_orders(&self, limit: i64) -> Result<Vec<Order>, OrderFlowError> {
        let orders = self.db.recent_orders(limit).await?;
        Ok(orders)
    }

    /// Fetch a single order by id.
    pub async fn order_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderFlowError> {
        let order = self.db.fetch_order_by_id(id).await?;
        Ok(order)
    }

    /// Check a transaction id with the payment authority.
    ///
    /// With the default [`crate::NoopPaymentAuthority`] this always reports `true`; it is a
    /// documented stub, not a security control.
    pub async fn verify_transaction(&self, txid: &str) -> Result<bool, OrderFlowError> {
        let verified = self.authority.verify_transaction(txid).await?;
        debug!("🔄️🔍️ Verification result for txid [{txid}]: {verified}");
        Ok(verified)
    }
}

#[derive(Debug, Clone, Error)]
pub enum OrderFlowError {
    #[error("{0}")]
    StoreError(#[from] OrderStoreError),
    #[error("Payment authority error. {0}")]
    AuthorityError(#[from] PaymentAuthorityError),
}
