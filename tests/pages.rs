mod common;

use serde_json::{Map, Value, json};
use tokio::net::TcpListener;

use common::{TestApp, setup_test_app, teardown_test_app};
use supply_chain_admin::{
    client::{ApiClient, ClientError, EmptyState, OrdersPage, ProductsPage, SuppliersPage},
    models::{Collection, OrderStatus, Resolved},
    views::{FormError, OrderForm, ProductForm, SupplierForm},
};

// Helper function to serve the router on an ephemeral port
async fn serve(app: &TestApp) -> ApiClient {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");
    let router = app.router.clone();

    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    ApiClient::new(format!("http://{addr}"))
}

fn fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected an object"),
    }
}

// Helper function to create a supplier directly in the store
async fn seed_supplier(app: &TestApp, name: &str) -> String {
    let created = app
        .store
        .insert(
            Collection::Suppliers,
            fields(json!({
                "name": name,
                "country": "Germany",
                "status": "Active",
                "contactEmail": format!("{}@example.test", name.to_lowercase().replace(' ', "."))
            })),
        )
        .await
        .expect("Failed to seed supplier");
    created["id"].as_str().unwrap().to_string()
}

async fn seed_product(app: &TestApp, name: &str, price: f64, stock: i64, category: &str, supplier_id: &str) -> String {
    let created = app
        .store
        .insert(
            Collection::Products,
            fields(json!({
                "name": name,
                "price": price,
                "category": category,
                "supplierId": supplier_id,
                "stock": stock,
                "status": "Available"
            })),
        )
        .await
        .expect("Failed to seed product");
    created["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_supplier_page_search_and_pagination() {
    let app = setup_test_app().await;
    for n in 1..=25 {
        seed_supplier(&app, &format!("Supplier {n:02}")).await;
    }
    let mut page = SuppliersPage::new(serve(&app).await);
    page.mount().await.unwrap();

    assert_eq!(page.total_pages(), 3);
    let first = page.visible();
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.items[0].name, "Supplier 01");
    assert_eq!(first.items[9].name, "Supplier 10");
    assert!(first.has_controls());

    page.go_to_page(3);
    let last = page.visible();
    assert_eq!(last.items.len(), 5);
    assert_eq!(last.items[0].name, "Supplier 21");
    assert_eq!(last.items[4].name, "Supplier 25");

    page.go_to_page(4);
    assert_eq!(page.state().page, 3);
    page.next_page();
    assert_eq!(page.state().page, 3);

    page.set_search("SUPPLIER 1");
    assert_eq!(page.state().page, 1);
    let matches = page.visible();
    assert_eq!(matches.total, 10);
    assert_eq!(matches.items[0].name, "Supplier 10");
    assert!(!matches.has_controls());

    page.set_search("nobody");
    assert_eq!(page.empty_state(), Some(EmptyState::NoMatches));

    teardown_test_app(app).await;
}

#[tokio::test]
async fn test_supplier_page_create_edit_delete() {
    let app = setup_test_app().await;
    let mut page = SuppliersPage::new(serve(&app).await);
    page.mount().await.unwrap();
    assert_eq!(page.empty_state(), Some(EmptyState::NoRecords));

    page.set_form(SupplierForm {
        name: "Acme".into(),
        country: "Germany".into(),
        contact_email: "ops@acme.test".into(),
        ..Default::default()
    });
    page.submit().await.unwrap();

    assert_eq!(page.records().len(), 1);
    assert_eq!(page.records()[0].status, "Active");
    assert_eq!(page.state().form, SupplierForm::default());

    let id = page.records()[0].id.clone();
    assert!(page.edit(&id));
    let mut form = page.state().form.clone();
    form.status = "Inactive".into();
    page.set_form(form);
    page.submit().await.unwrap();

    assert_eq!(page.records()[0].status, "Inactive");
    assert!(!page.state().is_editing());

    assert!(page.edit(&id));
    page.delete(&id).await.unwrap();
    assert!(page.records().is_empty());
    assert!(!page.state().is_editing());

    teardown_test_app(app).await;
}

#[tokio::test]
async fn test_invalid_form_is_kept_for_correction() {
    let app = setup_test_app().await;
    let mut page = ProductsPage::new(serve(&app).await);
    page.mount().await.unwrap();

    let form = ProductForm {
        name: "Desk".into(),
        price: "abc".into(),
        category: "Furniture".into(),
        supplier_id: "s1".into(),
        stock: "2".into(),
        ..Default::default()
    };
    page.set_form(form.clone());

    let err = page.submit().await.unwrap_err();
    assert!(matches!(err, ClientError::Form(FormError::NotANumber("price"))));
    assert_eq!(page.state().form, form);
    assert!(page.records().is_empty());

    teardown_test_app(app).await;
}

#[tokio::test]
async fn test_product_page_summary_and_dangling_supplier() {
    let app = setup_test_app().await;
    let acme = seed_supplier(&app, "Acme").await;
    let gone = seed_supplier(&app, "Gone Ltd").await;
    seed_product(&app, "Lamp", 10.0, 5, "A", &acme).await;
    seed_product(&app, "Chair", 20.0, 1, "B", &gone).await;

    let client = serve(&app).await;
    client.delete(Collection::Suppliers, &gone).await.unwrap();

    let mut page = ProductsPage::new(client);
    page.mount().await.unwrap();

    let summary = page.inventory_summary();
    assert_eq!(summary.total_value, 70.0);
    assert_eq!(summary.total_stock, 6);
    assert_eq!(summary.by_category[0].category, "A");
    assert_eq!(summary.by_category[0].value, 50.0);
    assert_eq!(summary.by_category[1].value, 20.0);
    assert_eq!(summary.top_category_label(), "A");

    let chair = &page.records()[1];
    assert_eq!(page.references().suppliers.resolve(&chair.supplier_id), Resolved::Unresolved);

    page.set_search("unknown");
    let hits = page.filtered();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Chair");

    // Aggregates ignore the search
    assert_eq!(page.inventory_summary().total_value, 70.0);

    teardown_test_app(app).await;
}

#[tokio::test]
async fn test_order_page_lifecycle_and_status_summary() {
    let app = setup_test_app().await;
    let acme = seed_supplier(&app, "Acme").await;
    let lamp = seed_product(&app, "Lamp", 10.0, 5, "Electronics", &acme).await;

    let mut page = OrdersPage::new(serve(&app).await);
    page.mount().await.unwrap();

    for (status, date) in [("Pending", "2024-01-10"), ("Pending", "2024-02-11"), ("Shipped", "2024-03-12")] {
        page.set_form(OrderForm {
            product_id: lamp.clone(),
            supplier_id: acme.clone(),
            quantity: "3".into(),
            status: status.into(),
            order_date: date.into(),
        });
        page.submit().await.unwrap();
    }

    let summary = page.status_summary();
    assert_eq!(summary.count_of(OrderStatus::Pending), 2);
    assert_eq!(summary.count_of(OrderStatus::Shipped), 1);
    assert_eq!(summary.count_of(OrderStatus::Delivered), 0);

    page.set_search("lamp");
    assert_eq!(page.filtered().len(), 3);
    page.set_search("2024-02");
    assert_eq!(page.filtered().len(), 1);
    page.set_search("");

    let shipped = page
        .records()
        .iter()
        .find(|order| order.status == "Shipped")
        .unwrap()
        .id
        .clone();
    assert!(page.edit(&shipped));
    let mut form = page.state().form.clone();
    form.status = "Delivered".into();
    page.set_form(form);
    page.submit().await.unwrap();

    let summary = page.status_summary();
    assert_eq!(summary.count_of(OrderStatus::Shipped), 0);
    assert_eq!(summary.count_of(OrderStatus::Delivered), 1);

    let stored = page
        .records()
        .iter()
        .find(|order| order.id == shipped)
        .unwrap();
    assert_eq!(stored.quantity, 3);
    assert_eq!(stored.order_date, "2024-03-12");

    teardown_test_app(app).await;
}

#[tokio::test]
async fn test_client_reports_server_errors() {
    let app = setup_test_app().await;
    let client = serve(&app).await;

    let err = client
        .update(Collection::Orders, "not-an-id", &Map::new())
        .await
        .unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status.as_u16(), 400);
            assert_eq!(message, "Invalid order id format");
        }
        other => panic!("unexpected error: {other}"),
    }

    let missing = client
        .get_document(Collection::Suppliers, &uuid::Uuid::new_v4().to_string())
        .await
        .unwrap();
    assert!(missing.is_none());

    teardown_test_app(app).await;
}
