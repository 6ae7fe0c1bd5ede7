//! Browser-side counterpart of the service: an HTTP client for the resource
//! endpoints and the per-resource screens built on it.

pub mod api_client;
pub mod page;

pub use api_client::{ApiClient, ClientError};
pub use page::{EmptyState, OrdersPage, PageResource, ProductsPage, ResourcePage, SuppliersPage};
