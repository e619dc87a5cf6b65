use shopfront_cart::{
    ContactDetails, ContactRecord, CustomerDetails, FixedReferenceSource, OrderRecord,
};
use shopfront_catalog::{Catalog, CatalogConfig, CategoryFilter, FilterState, Product, SortKey};
use shopfront_core::{DomainError, Money, ProductId};
use shopfront_session::Storefront;

fn shop() -> Storefront {
    Storefront::new(Catalog::sample().expect("sample catalog loads"))
        .with_reference_source(FixedReferenceSource(321))
}

fn pid(key: &str) -> ProductId {
    ProductId::new(key).expect("valid product id")
}

fn customer() -> CustomerDetails {
    CustomerDetails {
        name: "Yaw Owusu".to_string(),
        phone: "0551112223".to_string(),
        message: "Pickup at the Wa shop".to_string(),
    }
}

#[test]
fn browse_add_and_checkout() {
    let mut shop = shop();
    let changes = shop.subscribe_cart_changes();

    // Browse computers by name.
    shop.filter_by_category(CategoryFilter::only("computers"));
    let computers: Vec<ProductId> = shop.visible_products().iter().map(|p| p.id.clone()).collect();
    assert_eq!(computers, [pid("desktop-dell-001"), pid("laptop-hp-001")]);

    // Add both, the laptop twice.
    for id in &computers {
        shop.add_to_cart(id).unwrap();
    }
    let totals = shop.add_to_cart(&pid("laptop-hp-001")).unwrap();
    assert_eq!(totals.item_count, 3);
    assert_eq!(shop.cart_lines().len(), 2);
    assert_eq!(shop.cart_total(), Money::from_major(2800 + 2 * 3500));
    assert_eq!(shop.format_price(shop.cart_total()), "GHS 9800.00");

    // Checkout.
    let expected_total = shop.cart_total();
    let mut orders: Vec<OrderRecord> = Vec::new();
    let order = shop.place_order(customer(), &mut orders).unwrap();

    assert_eq!(order.total, expected_total);
    assert_eq!(order.lines.len(), 2);
    assert_eq!(order.reference.as_str().len(), "NG".len() + 6 + 3);
    assert!(order.reference.as_str().ends_with("321"));
    assert!(order.placed_at_iso().ends_with('Z'));
    assert_eq!(orders, vec![order]);
    assert!(shop.cart_lines().is_empty());
    assert_eq!(shop.cart_count(), 0);

    // 3 adds + cleared.
    assert_eq!(changes.drain().len(), 4);
}

#[test]
fn empty_cart_submission_is_blocked() {
    let mut shop = shop();
    let mut orders: Vec<OrderRecord> = Vec::new();

    assert_eq!(
        shop.place_order(customer(), &mut orders),
        Err(DomainError::EmptyCart)
    );
    assert!(orders.is_empty());
}

#[test]
fn remove_and_clamp_keep_cart_consistent() {
    let mut shop = shop();
    shop.add_to_cart(&pid("stationary-notebook-001")).unwrap();
    shop.add_to_cart(&pid("stationary-pens-001")).unwrap();

    shop.update_quantity(&pid("stationary-pens-001"), -5);
    shop.update_quantity(&pid("stationary-notebook-001"), 0);
    assert!(shop.cart_lines().iter().all(|l| l.quantity == 1));

    let before = shop.cart().clone();
    shop.remove_from_cart(&pid("phone-iphone-001"));
    assert_eq!(shop.cart(), &before);

    let totals = shop.remove_from_cart(&pid("stationary-pens-001"));
    assert_eq!(totals.item_count, 1);
    assert_eq!(totals.total, Money::from_major(25));
}

#[test]
fn search_states_are_distinguishable() {
    let shop = shop();

    let names: Vec<&str> = shop
        .search("iphone")
        .results()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, ["iPhone 12"]);

    assert!(shop.search("").is_no_query());
    let none = shop.search("zzz");
    assert!(!none.is_no_query());
    assert!(none.results().is_empty());
}

#[test]
fn custom_catalog_document_drives_vocabulary() {
    let json = r#"{
        "config": {
            "currency": "USD",
            "categories": ["books"],
            "price_buckets": ["0-100", "100+"]
        },
        "products": [
            {"id": "b-1", "name": "Rust Book", "category": "books", "brand": "NS",
             "price": 2500, "short_description": "Learn Rust", "is_featured": true},
            {"id": "b-2", "name": "Atlas", "category": "books", "brand": "Geo",
             "price": 8500, "short_description": "Maps"},
            {"id": "b-3", "name": "Encyclopedia", "category": "books", "brand": "Ref",
             "price": 32000, "short_description": "Everything"}
        ]
    }"#;
    let catalog = Catalog::from_json(json).unwrap();
    assert_eq!(catalog.config().featured_limit, CatalogConfig::default().featured_limit);

    let mut shop = Storefront::new(catalog);
    let first_bucket = shop.catalog().price_buckets()[0];
    shop.filter_by_price(first_bucket);
    shop.sort_by(SortKey::Featured);

    let names: Vec<&str> = shop.visible_products().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Rust Book", "Atlas"]);
    assert_eq!(shop.format_price(Money::from_minor(2500)), "USD 25.00");
    let expected = FilterState::default()
        .with_price(first_bucket)
        .with_sort(SortKey::Featured);
    assert_eq!(shop.filter(), &expected);
}

#[test]
fn listing_pages_through_filtered_results() {
    let products: Vec<String> = (1..=5)
        .map(|i| {
            format!(
                r#"{{"id": "pen-{i}", "name": "Pen {i}", "category": "stationary",
                    "brand": "Bic", "price": {price}, "short_description": "Pen"}}"#,
                price = i * 100
            )
        })
        .collect();
    let json = format!(
        r#"{{"config": {{"page_size": 2}}, "products": [{}]}}"#,
        products.join(",")
    );
    let mut shop = Storefront::new(Catalog::from_json(&json).unwrap());
    shop.sort_by(SortKey::PriceHigh);

    let names = |page: &[&Product]| page.iter().map(|p| p.name.clone()).collect::<Vec<_>>();

    let first = shop.visible_page(1);
    assert_eq!(names(first.items()), ["Pen 5", "Pen 4"]);
    assert_eq!(first.next_number(), Some(2));

    let last = shop.visible_page(3);
    assert_eq!(names(last.items()), ["Pen 1"]);
    assert!(last.has_prev() && !last.has_next());
    assert_eq!(shop.visible_page(40), last);

    shop.filter_by_category(CategoryFilter::only("phones"));
    let empty = shop.visible_page(2);
    assert!(empty.items().is_empty());
    assert_eq!((empty.number(), empty.total_pages()), (1, 1));
}

#[test]
fn contact_submission_reaches_sink() {
    let shop = shop();
    let mut inbox: Vec<ContactRecord> = Vec::new();

    let record = shop
        .submit_contact(
            ContactDetails {
                name: "Efua".to_string(),
                email: "efua@example.com".to_string(),
                phone: String::new(),
                subject: "Printing".to_string(),
                message: "Do you print A3?".to_string(),
            },
            &mut inbox,
        )
        .unwrap();

    assert_eq!(inbox, vec![record]);
    assert!(matches!(
        shop.submit_contact(ContactDetails::default(), &mut inbox),
        Err(DomainError::Validation(_))
    ));
    assert_eq!(inbox.len(), 1);
}
