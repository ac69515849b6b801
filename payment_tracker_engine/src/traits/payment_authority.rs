use log::debug;
use thiserror::Error;

/// The external payment platform capability.
///
/// In a full deployment, approving a payment is a server-to-server call against the payment
/// platform's API, and verifying a transaction id means querying the platform or its ledger.
/// Neither call is part of the order store's contract; the store transitions are purely local.
/// This trait is the substitution point for a real integration.
#[allow(async_fn_in_trait)]
pub trait PaymentAuthority {
    /// Approve the payment, identified by the platform's own payment id, with the upstream
    /// authority.
    async fn approve_payment(&self, payment_id: &str) -> Result<(), PaymentAuthorityError>;

    /// Check the given transaction id against the upstream source of truth.
    async fn verify_transaction(&self, txid: &str) -> Result<bool, PaymentAuthorityError>;
}

/// The default [`PaymentAuthority`]: approval is a no-op and every non-empty transaction id
/// verifies as `true`. This is a documented stub, not a security control. Do not treat a
/// `verified` result from this implementation as evidence of anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPaymentAuthority;

impl PaymentAuthority for NoopPaymentAuthority {
    async fn approve_payment(&self, payment_id: &str) -> Result<(), PaymentAuthorityError> {
        debug!("💳️ No-op approval for payment [{payment_id}]. No external call was made.");
        Ok(())
    }

    async fn verify_transaction(&self, txid: &str) -> Result<bool, PaymentAuthorityError> {
        debug!("💳️ No-op verification for txid [{txid}]. Reporting verified without consulting any ledger.");
        Ok(true)
    }
}

#[derive(Debug, Clone, Error)]
pub enum PaymentAuthorityError {
    #[error("The payment authority rejected the request. {0}")]
    RequestRejected(String),
    #[error("Could not reach the payment authority. {0}")]
    Unreachable(String),
}
