//! `SqliteDatabase` is a concrete implementation of a payment tracker engine backend.
//!
//! Unsurprisingly, it uses SQLite as the backend and implements the traits defined in the
//! [`crate::traits`] module.
use std::fmt::Debug;

use log::trace;
use sqlx::SqlitePool;

use super::db::{db_url, new_pool, orders};
use crate::{
    db_types::{NewOrder, Order, OrderId},
    traits::{OrderStoreDatabase, OrderStoreError},
};

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({:?})", self.pool)
    }
}

impl SqliteDatabase {
    /// Creates a new database API object using the URL from the environment, or the default.
    pub async fn new(max_connections: u32) -> Result<Self, OrderStoreError> {
        let url = db_url();
        SqliteDatabase::new_with_url(url.as_str(), max_connections).await
    }

    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, OrderStoreError> {
        trace!("Creating new database connection pool with url {url}");
        let pool = new_pool(url, max_connections).await?;
        let url = url.to_string();
        Ok(Self { url, pool })
    }

    /// Returns a reference to the database connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the orders table if it is absent. Run this once at process startup (and in test
    /// setup) before serving requests.
    pub async fn run_migrations(&self) -> Result<(), OrderStoreError> {
        sqlx::migrate!("./src/sqlite/migrations")
            .run(&self.pool)
            .await
            .map_err(|e| OrderStoreError::DatabaseError(e.to_string()))
    }
}

impl OrderStoreDatabase for SqliteDatabase {
    fn url(&self) -> &str {
        self.url.as_str()
    }

    async fn insert_order(&self, order: NewOrder) -> Result<Order, OrderStoreError> {
        let mut conn = self.pool.acquire().await?;
        orders::insert_order(order, &mut conn).await
    }

    async fn fetch_order_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderStoreError> {
        let mut conn = self.pool.acquire().await?;
        let order = orders::fetch_order_by_id(id, &mut conn).await?;
        Ok(order)
    }

    async fn approve_order(&self, order_ref: &OrderId) -> Result<bool, OrderStoreError> {
        let mut conn = self.pool.acquire().await?;
        orders::approve_order(order_ref, &mut conn).await
    }

    async fn complete_order(&self, order_ref: &OrderId, txid: Option<String>) -> Result<bool, OrderStoreError> {
        let mut conn = self.pool.acquire().await?;
        orders::complete_order(order_ref, txid, &mut conn).await
    }

    async fn recent_orders(&self, limit: i64) -> Result<Vec<Order>, OrderStoreError> {
        let mut conn = self.pool.acquire().await?;
        let orders = orders::fetch_recent_orders(limit, &mut conn).await?;
        Ok(orders)
    }

    async fn close(&mut self) -> Result<(), OrderStoreError> {
        self.pool.close().await;
        Ok(())
    }
}
