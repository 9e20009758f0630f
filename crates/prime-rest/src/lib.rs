//! REST API client for Coinbase Prime custody and trading
//!
//! This crate provides a typed client for Prime's authenticated REST API:
//! portfolios, balances, orders, fills, products, custody transactions,
//! and the activity audit trail.
//!
//! # Authentication
//!
//! Every Prime endpoint is authenticated. The client signs each request
//! with HMAC-SHA256 over `timestamp + method + path + body` as specified
//! by Prime's API documentation; see the `prime-auth` crate.
//!
//! # Example
//!
//! ```no_run
//! use prime_rest::{PrimeClient, PaginationParams, SortDirection};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads the PRIME_CREDENTIALS environment variable
//!     let client = PrimeClient::from_env()?;
//!
//!     let portfolios = client.portfolios().list_portfolios().await?;
//!     let portfolio = &portfolios.portfolios[0];
//!
//!     // Single page
//!     let params = PaginationParams {
//!         cursor: String::new(),
//!         limit: 50,
//!         sort_direction: Some(SortDirection::Desc),
//!     };
//!     let open = client
//!         .orders()
//!         .list_open_orders(&portfolio.id, Some(&params))
//!         .await?;
//!     println!("{} open orders on this page", open.orders.len());
//!
//!     // All pages, bounded by the client's PaginationConfig
//!     let mut pager = client
//!         .orders()
//!         .list_open_orders_paged(&portfolio.id, None)
//!         .await?;
//!     let (orders, err) = pager.fetch_all().await;
//!     println!("{} open orders total", orders.len());
//!     if let Some(err) = err {
//!         eprintln!("Pagination stopped early: {}", err);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Retries
//!
//! No retries are performed anywhere in this crate. A failed call is a
//! failed call; the error carries the status code, status text, request
//! URL, and server message so the caller can decide whether to retry,
//! alert, or abort.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod pagination;
pub mod types;
pub mod utils;

// Re-export main types
pub use client::{ClientConfig, PrimeClient};
pub use error::{RestError, RestResult};
pub use pagination::{
    Paginated, Pagination, PaginationConfig, PaginationParams, Pager, SortDirection,
};
pub use prime_auth::{Credentials, CREDENTIALS_ENV_VAR};

// Re-export endpoint-specific types
pub use types::{
    // Portfolios
    Balance, GetPortfolioResponse, ListBalancesResponse, ListPortfoliosResponse, Portfolio,
    // Orders
    CancelOrderResponse, CreateOrderRequest, CreateOrderResponse, Fill, GetOrderResponse,
    ListOpenOrdersResponse, ListOrderFillsResponse, Order, OrderSide, OrderType, TimeInForce,
    // Products
    ListProductsResponse, Product,
    // Transactions
    GetTransactionResponse, ListTransactionsResponse, Transaction,
    // Activities
    Activity, GetActivityResponse, ListActivitiesResponse,
};
