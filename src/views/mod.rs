//! Client-side views over fully fetched collections: search, pagination,
//! aggregate summaries and the per-screen view state. Nothing here talks to
//! the server.

pub mod form;
pub mod pagination;
pub mod search;
pub mod state;
pub mod summary;

pub use form::{Form, FormError, OrderForm, ProductForm, SupplierForm};
pub use pagination::{PAGE_SIZE, Page};
pub use search::{Searchable, filter};
pub use state::{Mutation, ViewState};
pub use summary::{InventorySummary, OrderStatusSummary};
