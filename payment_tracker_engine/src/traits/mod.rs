//! Backend and collaborator traits for the payment tracker engine.
//!
//! [`OrderStoreDatabase`] is the persistence contract that storage backends implement.
//! [`PaymentAuthority`] is the seam for the external payment platform; the engine ships a no-op
//! implementation and a real integration can be dropped in without touching the store.
mod order_store;
mod payment_authority;

pub use order_store::{OrderStoreDatabase, OrderStoreError};
pub use payment_authority::{NoopPaymentAuthority, PaymentAuthority, PaymentAuthorityError};
