//! Payment Tracker Engine
//!
//! This library contains the core logic for the payment order tracker: the order store and its
//! persistence backend. It is provider-agnostic.
//!
//! The library is divided into two main sections:
//! 1. Database management and control ([`mod@sqlite`]). Currently, SQLite is the supported backend.
//!    You should never need to access the database directly. Instead, use the public API provided
//!    by the engine. The exception is the data types used in the database. These are defined in the
//!    `db_types` module and are public.
//! 2. The engine public API ([`OrderFlowApi`]). This provides the public-facing functionality of
//!    the order store. It is responsible for creating orders, advancing them through their
//!    lifecycle, and listing them. Specific backends need to implement the traits in the
//!    [`mod@traits`] module in order to act as a backend for the tracker server.
//!
//! The engine also defines the [`PaymentAuthority`] capability. Approving a payment and verifying
//! a transaction id are, in a full deployment, server-to-server calls against an external payment
//! platform. This engine ships only a no-op implementation ([`NoopPaymentAuthority`]); a real
//! integration can be substituted without touching the store contract.
pub mod db_types;
mod order_flow_api;
#[cfg(feature = "sqlite")]
mod sqlite;
pub mod traits;

#[cfg(any(feature = "test_utils", test))]
pub mod test_utils;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteDatabase;
pub use order_flow_api::{OrderFlowApi, OrderFlowError};
pub use traits::{
    NoopPaymentAuthority,
    OrderStoreDatabase,
    OrderStoreError,
    PaymentAuthority,
    PaymentAuthorityError,
};
