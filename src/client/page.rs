use std::mem;

use super::{ApiClient, ClientError};
use crate::{
    models::{Collection, Lookup, Order, Product, References, Resource, Supplier},
    views::{
        Form, InventorySummary, Mutation, OrderStatusSummary, Page, Searchable, ViewState, filter,
        pagination,
    },
};

/// A record type that has its own screen.
pub trait PageResource: Resource + Searchable {
    type Form: Form<Record = Self>;

    /// Collections whose names this screen resolves references against
    const COMPANIONS: &'static [Collection];
}

impl PageResource for Supplier {
    type Form = crate::views::SupplierForm;
    const COMPANIONS: &'static [Collection] = &[];
}

impl PageResource for Product {
    type Form = crate::views::ProductForm;
    const COMPANIONS: &'static [Collection] = &[Collection::Suppliers];
}

impl PageResource for Order {
    type Form = crate::views::OrderForm;
    const COMPANIONS: &'static [Collection] = &[Collection::Products, Collection::Suppliers];
}

/// Why the visible list is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The collection holds nothing
    NoRecords,
    /// Records exist but none match the search
    NoMatches,
}

/// One resource screen: the fetched collection, its companions, and the view
/// state. Data is refreshed only on mount and after a write.
pub struct ResourcePage<R: PageResource> {
    client: ApiClient,
    records: Vec<R>,
    references: References,
    state: ViewState<R::Form>,
}

pub type SuppliersPage = ResourcePage<Supplier>;
pub type ProductsPage = ResourcePage<Product>;
pub type OrdersPage = ResourcePage<Order>;

impl<R: PageResource> ResourcePage<R> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            records: Vec::new(),
            references: References::default(),
            state: ViewState::default(),
        }
    }

    /// Fetch the collection and every companion collection
    pub async fn mount(&mut self) -> Result<(), ClientError> {
        self.refresh().await?;

        for companion in R::COMPANIONS {
            match companion {
                Collection::Suppliers => {
                    let suppliers = self.client.list::<Supplier>().await?;
                    self.references.suppliers = Lookup::suppliers(&suppliers);
                }
                Collection::Products => {
                    let products = self.client.list::<Product>().await?;
                    self.references.products = Lookup::products(&products);
                }
                Collection::Orders => {}
            }
        }

        tracing::debug!(
            "Mounted {} page with {} records",
            R::COLLECTION,
            self.records.len()
        );
        Ok(())
    }

    async fn refresh(&mut self) -> Result<(), ClientError> {
        self.records = self.client.list::<R>().await?;

        let page = self.state.page;
        let total_pages = self.total_pages();
        self.state = mem::take(&mut self.state).go_to_page(page, total_pages);
        Ok(())
    }

    /// The full, unfiltered collection
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn references(&self) -> &References {
        &self.references
    }

    pub fn state(&self) -> &ViewState<R::Form> {
        &self.state
    }

    pub fn filtered(&self) -> Vec<&R> {
        filter(&self.records, &self.state.search, &self.references)
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered().len())
    }

    /// Current page of the filtered view
    pub fn visible(&self) -> Page<&R> {
        Page::of(self.filtered(), self.state.page)
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.filtered().is_empty() {
            None
        } else if self.state.search.is_empty() {
            Some(EmptyState::NoRecords)
        } else {
            Some(EmptyState::NoMatches)
        }
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.state = mem::take(&mut self.state).search(text);
    }

    pub fn next_page(&mut self) {
        let total_pages = self.total_pages();
        self.state = mem::take(&mut self.state).next_page(total_pages);
    }

    pub fn prev_page(&mut self) {
        self.state = mem::take(&mut self.state).prev_page();
    }

    pub fn go_to_page(&mut self, page: usize) {
        let total_pages = self.total_pages();
        self.state = mem::take(&mut self.state).go_to_page(page, total_pages);
    }

    pub fn set_form(&mut self, form: R::Form) {
        self.state = mem::take(&mut self.state).with_form(form);
    }

    /// Load a fetched record into the form. Returns false for an unknown id.
    pub fn edit(&mut self, id: &str) -> bool {
        let Some(record) = self.records.iter().find(|record| record.id() == id) else {
            return false;
        };
        self.state = mem::take(&mut self.state).edit(record);
        true
    }

    pub fn cancel(&mut self) {
        self.state = mem::take(&mut self.state).cancel();
    }

    /// Send the form as a create or update, then re-fetch.
    ///
    /// The form is kept as entered if validation or the request fails.
    pub async fn submit(&mut self) -> Result<(), ClientError> {
        let (next, mutation) = self.state.clone().submit()?;

        match &mutation {
            Mutation::Create(fields) => {
                let created = self.client.create(R::COLLECTION, fields).await?;
                tracing::info!("Created {} {}", R::COLLECTION.label(), created["id"]);
            }
            Mutation::Update { id, fields } => {
                self.client.update(R::COLLECTION, id, fields).await?;
                tracing::info!("Updated {} {}", R::COLLECTION.label(), id);
            }
        }

        self.state = next;
        self.refresh().await
    }

    /// Delete a record, then re-fetch
    pub async fn delete(&mut self, id: &str) -> Result<(), ClientError> {
        self.client.delete(R::COLLECTION, id).await?;
        tracing::info!("Deleted {} {}", R::COLLECTION.label(), id);

        self.state = mem::take(&mut self.state).deleted(id);
        self.refresh().await
    }
}

impl ResourcePage<Product> {
    pub fn inventory_summary(&self) -> InventorySummary {
        InventorySummary::from_products(&self.records)
    }
}

impl ResourcePage<Order> {
    pub fn status_summary(&self) -> OrderStatusSummary {
        OrderStatusSummary::from_orders(&self.records)
    }
}
