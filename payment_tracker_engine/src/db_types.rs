use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use log::error;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlx::{types::Json, FromRow, Type};
use thiserror::Error;
use uuid::Uuid;

//--------------------------------------        OrderId        -------------------------------------------------------
/// An opaque, unique order identifier. Generated by the store at creation time and immutable
/// thereafter. It doubles as the primary key of the orders table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Type, Serialize, Deserialize)]
#[sqlx(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    /// Generates a fresh, globally unique order id.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for OrderId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//--------------------------------------   OrderStatusType     -------------------------------------------------------
/// The order lifecycle state. Orders only ever move forward: `created → approved → completed`.
/// The store does not guard against out-of-order transitions; callers that skip `approved` simply
/// advance the order (see [`crate::traits::OrderStoreDatabase::complete_order`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Type, Serialize, Deserialize)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatusType {
    /// The order is newly created. No approval or payment has been recorded.
    Created,
    /// The order has been approved by the payment authority.
    Approved,
    /// The order has been completed, and a transaction id has been recorded against it.
    Completed,
}

impl Display for OrderStatusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatusType::Created => write!(f, "created"),
            OrderStatusType::Approved => write!(f, "approved"),
            OrderStatusType::Completed => write!(f, "completed"),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("Invalid order status: {0}")]
pub struct ConversionError(String);

impl FromStr for OrderStatusType {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(Self::Created),
            "approved" => Ok(Self::Approved),
            "completed" => Ok(Self::Completed),
            s => Err(ConversionError(format!("Invalid order status: {s}"))),
        }
    }
}

impl From<String> for OrderStatusType {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_else(|_| {
            error!("Invalid order status: {value}. But this conversion cannot fail. Defaulting to created");
            OrderStatusType::Created
        })
    }
}

//--------------------------------------        Order        ---------------------------------------------------------
/// A payment order as stored in the orders table.
///
/// `completed_at` and `txid` are both null until the completion transition executes, at which
/// point they are set together. `metadata` is an open-ended mapping, initialized empty at
/// creation; no current operation populates it.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub amount: f64,
    pub memo: Option<String>,
    pub status: OrderStatusType,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub txid: Option<String>,
    pub metadata: Option<Json<Value>>,
}

//--------------------------------------       NewOrder        -------------------------------------------------------
/// The caller-supplied portion of a new order. The amount is a pass-through value; the store does
/// not validate it for positivity or range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    pub amount: f64,
    /// An optional free-text annotation supplied by the user for the order.
    pub memo: Option<String>,
}

impl NewOrder {
    pub fn new(amount: f64) -> Self {
        Self { amount, memo: None }
    }

    pub fn with_memo(mut self, memo: String) -> Self {
        self.memo = Some(memo);
        self
    }

    /// The metadata value every new order starts out with.
    pub fn empty_metadata() -> Json<Value> {
        Json(json!({}))
    }
}
