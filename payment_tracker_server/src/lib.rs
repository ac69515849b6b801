//! # Payment tracker server
//! This module hosts the HTTP surface for the payment order tracker. It is responsible for:
//! parsing incoming requests, delegating to the order store, and translating results and
//! failures into JSON responses.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more
//! information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `/health`: A health check route that returns a 200 OK response.
//! * `/admin`: The embedded admin page.
//! * `/api/payments/create`: Creates a new order.
//! * `/api/payments/approve`: Marks an order as approved.
//! * `/api/payments/complete`: Marks an order as completed and records the transaction id.
//! * `/api/admin/orders`: Lists the most recent orders.
//! * `/api/admin/verify-tx`: Checks a transaction id with the (stub) payment authority.

pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
