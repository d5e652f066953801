//! The tracked order record and its DTOs.
//!
//! [`Order`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait (see
//! [`crate::order_actor::entity`]), which lets a
//! [`ResourceActor`](actor_framework::ResourceActor) own the collection.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

const ID_PREFIX: &str = "CMD-";

/// Type-safe identifier for Orders, rendered as `CMD-###`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{ID_PREFIX}{:03}", self.0)
    }
}

/// Returned when a string is not a `CMD-<digits>` order ID.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("invalid order id: {0:?}")]
pub struct OrderIdParseError(pub String);

impl FromStr for OrderId {
    type Err = OrderIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(ID_PREFIX)
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse().ok())
            .map(OrderId)
            .ok_or_else(|| OrderIdParseError(s.to_string()))
    }
}

impl TryFrom<String> for OrderId {
    type Error = OrderIdParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.to_string()
    }
}

/// Shipment progress of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Completed,
    Partial,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Completed,
        OrderStatus::Partial,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Partial => "partial",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no [`OrderStatus`].
#[derive(Debug, Clone, Error, PartialEq)]
#[error("unknown order status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// A tracked equipment purchase.
///
/// The view expects `shipped_products <= total_products`; the store does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub company_name: String,
    pub product_name: String,
    pub total_products: u32,
    pub shipped_products: u32,
    pub created_at: NaiveDate,
    pub estimated_delivery_date: NaiveDate,
    pub status: OrderStatus,
}

impl Order {
    /// Assembles the stored record for a freshly assigned `id`.
    pub fn new(id: OrderId, params: OrderCreate) -> Self {
        Self {
            id,
            company_name: params.company_name,
            product_name: params.product_name,
            total_products: params.total_products,
            shipped_products: params.shipped_products,
            created_at: params.created_at,
            estimated_delivery_date: params.estimated_delivery_date,
            status: params.status,
        }
    }

    /// Overwrites every field `update` carries; the ID never changes.
    pub fn apply(&mut self, update: OrderUpdate) {
        if let Some(company_name) = update.company_name {
            self.company_name = company_name;
        }
        if let Some(product_name) = update.product_name {
            self.product_name = product_name;
        }
        if let Some(total_products) = update.total_products {
            self.total_products = total_products;
        }
        if let Some(shipped_products) = update.shipped_products {
            self.shipped_products = shipped_products;
        }
        if let Some(created_at) = update.created_at {
            self.created_at = created_at;
        }
        if let Some(estimated_delivery_date) = update.estimated_delivery_date {
            self.estimated_delivery_date = estimated_delivery_date;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }
}

/// Payload for creating a new order: every field except the ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub company_name: String,
    pub product_name: String,
    pub total_products: u32,
    pub shipped_products: u32,
    pub created_at: NaiveDate,
    pub estimated_delivery_date: NaiveDate,
    pub status: OrderStatus,
}

/// Partial update; `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_products: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipped_products: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

impl OrderUpdate {
    pub fn status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

/// A submitted edit form replaces every editable field.
impl From<OrderCreate> for OrderUpdate {
    fn from(params: OrderCreate) -> Self {
        Self {
            company_name: Some(params.company_name),
            product_name: Some(params.product_name),
            total_products: Some(params.total_products),
            shipped_products: Some(params.shipped_products),
            created_at: Some(params.created_at),
            estimated_delivery_date: Some(params.estimated_delivery_date),
            status: Some(params.status),
        }
    }
}
