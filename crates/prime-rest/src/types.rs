//! Types for Prime REST API requests and responses

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pagination::{Paginated, Pagination};

// ============================================================================
// Portfolios
// ============================================================================

/// A Prime portfolio
#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    /// Portfolio id
    pub id: String,
    /// Display name
    pub name: String,
    /// Owning entity id
    #[serde(default)]
    pub entity_id: String,
}

/// Response for listing portfolios
#[derive(Debug, Clone, Deserialize)]
pub struct ListPortfoliosResponse {
    pub portfolios: Vec<Portfolio>,
}

/// Response for fetching a single portfolio
#[derive(Debug, Clone, Deserialize)]
pub struct GetPortfolioResponse {
    pub portfolio: Portfolio,
}

/// An asset balance within a portfolio
#[derive(Debug, Clone, Deserialize)]
pub struct Balance {
    /// Asset symbol (e.g., "BTC")
    pub symbol: String,
    /// Total amount
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Amount held for open orders or pending withdrawals
    #[serde(with = "rust_decimal::serde::str")]
    pub holds: Decimal,
}

impl Balance {
    /// Amount available for new orders
    pub fn available(&self) -> Decimal {
        self.amount - self.holds
    }
}

/// Response for listing portfolio balances
#[derive(Debug, Clone, Deserialize)]
pub struct ListBalancesResponse {
    pub balances: Vec<Balance>,
}

// ============================================================================
// Orders
// ============================================================================

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

/// Order type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Market order
    Market,
    /// Limit order
    Limit,
    /// Time-weighted average price order
    Twap,
    /// Stop limit order
    StopLimit,
}

/// Time in force
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeInForce {
    /// Rest until explicitly cancelled
    GoodUntilCancelled,
    /// Rest until the supplied expiry time
    GoodUntilDateTime,
    /// Fill what is immediately available, cancel the rest
    ImmediateOrCancel,
    /// Fill completely or not at all
    FillOrKill,
}

/// An order as reported by the API
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    /// Order id
    pub id: String,
    /// Product the order trades (e.g., "BTC-USD")
    pub product_id: String,
    /// Buy or sell
    pub side: OrderSide,
    /// Order type
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Base asset quantity
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub base_quantity: Option<Decimal>,
    /// Quote asset value (market orders sized in quote)
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub quote_value: Option<Decimal>,
    /// Limit price
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub limit_price: Option<Decimal>,
    /// Order status as reported by the API
    #[serde(default)]
    pub status: String,
    /// Time in force
    #[serde(default)]
    pub time_in_force: Option<TimeInForce>,
    /// Client-assigned order id
    #[serde(default)]
    pub client_order_id: String,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for placing an order
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderRequest {
    /// Client-assigned idempotency id
    pub client_order_id: String,
    /// Product to trade
    pub product_id: String,
    /// Buy or sell
    pub side: OrderSide,
    /// Order type
    #[serde(rename = "type")]
    pub order_type: OrderType,
    /// Base asset quantity
    #[serde(skip_serializing_if = "Option::is_none", with = "rust_decimal::serde::str_option")]
    pub base_quantity: Option<Decimal>,
    /// Quote asset value
    #[serde(skip_serializing_if = "Option::is_none", with = "rust_decimal::serde::str_option")]
    pub quote_value: Option<Decimal>,
    /// Limit price
    #[serde(skip_serializing_if = "Option::is_none", with = "rust_decimal::serde::str_option")]
    pub limit_price: Option<Decimal>,
    /// Time in force
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
}

/// Response for placing an order
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderResponse {
    /// Id assigned to the new order
    pub order_id: String,
}

/// Response for fetching a single order
#[derive(Debug, Clone, Deserialize)]
pub struct GetOrderResponse {
    pub order: Order,
}

/// Response for cancelling an order
#[derive(Debug, Clone, Deserialize)]
pub struct CancelOrderResponse {
    /// Id of the cancelled order
    pub id: String,
}

/// Response for listing open orders
#[derive(Debug, Clone, Deserialize)]
pub struct ListOpenOrdersResponse {
    pub orders: Vec<Order>,
    #[serde(default)]
    pub pagination: Pagination,
}

impl Paginated for ListOpenOrdersResponse {
    fn pagination(&self) -> &Pagination {
        &self.pagination
    }
}

/// A single fill against an order
#[derive(Debug, Clone, Deserialize)]
pub struct Fill {
    /// Fill id
    pub id: String,
    /// Order this fill belongs to
    pub order_id: String,
    /// Product traded
    pub product_id: String,
    /// Side of the originating order
    pub side: OrderSide,
    /// Quantity filled
    #[serde(with = "rust_decimal::serde::str")]
    pub filled_quantity: Decimal,
    /// Execution price
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    /// Execution time
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,
}

/// Response for listing the fills of an order
#[derive(Debug, Clone, Deserialize)]
pub struct ListOrderFillsResponse {
    pub fills: Vec<Fill>,
    #[serde(default)]
    pub pagination: Pagination,
}

impl Paginated for ListOrderFillsResponse {
    fn pagination(&self) -> &Pagination {
        &self.pagination
    }
}

// ============================================================================
// Products
// ============================================================================

/// A tradable product
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    /// Product id (e.g., "ETH-USD")
    pub id: String,
    /// Smallest base quantity step
    #[serde(with = "rust_decimal::serde::str")]
    pub base_increment: Decimal,
    /// Smallest quote price step
    #[serde(with = "rust_decimal::serde::str")]
    pub quote_increment: Decimal,
    /// Minimum order size in base units
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub base_min_size: Option<Decimal>,
    /// Maximum order size in base units
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub base_max_size: Option<Decimal>,
    /// Permissions the caller holds on this product
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Response for listing tradable products
#[derive(Debug, Clone, Deserialize)]
pub struct ListProductsResponse {
    pub products: Vec<Product>,
    #[serde(default)]
    pub pagination: Pagination,
}

impl Paginated for ListProductsResponse {
    fn pagination(&self) -> &Pagination {
        &self.pagination
    }
}

// ============================================================================
// Transactions
// ============================================================================

/// A custody transaction (deposit, withdrawal, conversion, ...)
#[derive(Debug, Clone, Deserialize)]
pub struct Transaction {
    /// Transaction id
    pub id: String,
    /// Wallet the transaction belongs to
    #[serde(default)]
    pub wallet_id: String,
    /// Transaction type as reported by the API
    #[serde(rename = "type", default)]
    pub transaction_type: String,
    /// Transaction status as reported by the API
    #[serde(default)]
    pub status: String,
    /// Asset symbol
    #[serde(default)]
    pub symbol: String,
    /// Transaction amount
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub amount: Option<Decimal>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Response for fetching a single transaction
#[derive(Debug, Clone, Deserialize)]
pub struct GetTransactionResponse {
    pub transaction: Transaction,
}

/// Response for listing wallet transactions
#[derive(Debug, Clone, Deserialize)]
pub struct ListTransactionsResponse {
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub pagination: Pagination,
}

impl Paginated for ListTransactionsResponse {
    fn pagination(&self) -> &Pagination {
        &self.pagination
    }
}

// ============================================================================
// Activities
// ============================================================================

/// An audit-trail activity entry
#[derive(Debug, Clone, Deserialize)]
pub struct Activity {
    /// Activity id
    pub id: String,
    /// Broad category (e.g., "ACTIVITY_CATEGORY_ORDER")
    #[serde(default)]
    pub category: String,
    /// Activity type within the category
    #[serde(rename = "type", default)]
    pub activity_type: String,
    /// Activity status
    #[serde(default)]
    pub status: String,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Response for fetching a single activity
#[derive(Debug, Clone, Deserialize)]
pub struct GetActivityResponse {
    pub activity: Activity,
}

/// Response for listing activities
#[derive(Debug, Clone, Deserialize)]
pub struct ListActivitiesResponse {
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub pagination: Pagination,
}

impl Paginated for ListActivitiesResponse {
    fn pagination(&self) -> &Pagination {
        &self.pagination
    }
}
