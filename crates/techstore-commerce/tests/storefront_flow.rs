//! End-to-end storefront flow through the public API.

use techstore_commerce::prelude::*;

fn open_store() -> Store<MemoryPort> {
    Store::open(
        seed::demo_catalog(),
        seed::demo_coupons(),
        Currency::USD,
        MemoryPort::new(),
    )
}

#[test]
fn browse_add_discount_checkout() {
    let mut store = open_store();

    // Browse: accessories under $500, cheapest first
    let query = ProductQuery::new()
        .with_category("Accesorios")
        .with_price_range(None, Some(Money::from_major(500.0, Currency::USD)))
        .sorted_by(SortKey::PriceAsc);
    let hits = query.run(store.catalog());
    assert_eq!(hits.len(), 2);
    let buds_id = hits[0].id.clone();

    // Add twice; the cart keeps a single line
    assert!(store.add_item(&buds_id, 1));
    assert!(store.add_item(&buds_id, 1));
    assert_eq!(store.cart().line_count(), 1);
    assert_eq!(store.cart().item_count(), 2);

    // The $598 subtotal clears both coupon minimums; the second apply
    // replaces the first, no stacking.
    assert!(store.apply_coupon("tech20"));
    assert!(store.apply_coupon("REGALO50"));
    assert_eq!(store.cart().coupon().unwrap().code, "REGALO50");

    let totals = store.totals();
    assert_eq!(totals.subtotal.cents, 59_800);
    assert_eq!(totals.discount.cents, 5_000);
    assert_eq!(totals.total.cents, 54_800);

    // Checkout hand-off
    let summary = OrderSummary::from_cart(store.cart());
    let message = summary.render_message();
    assert!(message.contains("AirPods Pro 2 (2x) - $598.00"));
    assert!(message.contains("Descuento (REGALO50): -$50.00"));
    assert!(message.contains("Total: $548.00"));

    let url = summary.whatsapp_url("1234567890");
    assert!(url.starts_with("https://wa.me/1234567890?text="));
    assert!(!url.contains(' '));
}

#[test]
fn persisted_session_resumes_where_it_left_off() {
    let saved = {
        let mut store = open_store();
        store.add_item(&"5".into(), 1); // Dell XPS 15
        store.apply_coupon("BIENVENIDO");

        PersistedState {
            cart: store.cart().lines().to_vec(),
            applied_coupon: store.cart().coupon().cloned(),
            user: None,
        }
    };

    let store = Store::open(
        seed::demo_catalog(),
        seed::demo_coupons(),
        Currency::USD,
        MemoryPort::with_state(saved),
    );

    let totals = store.totals();
    assert_eq!(totals.subtotal.cents, 180_000);
    assert_eq!(totals.discount.cents, 18_000);
    assert_eq!(totals.total.cents, 162_000);
}

#[test]
fn admin_edits_show_up_in_listings() {
    let mut store = open_store();

    store
        .update_product(
            &"6".into(),
            ProductPatch {
                featured: Some(true),
                ..Default::default()
            },
        )
        .unwrap();

    let featured: Vec<&str> = store
        .catalog()
        .featured()
        .map(|p| p.id.as_str())
        .collect();
    assert!(featured.contains(&"6"));

    store.remove_product(&"6".into()).unwrap();
    assert_eq!(store.catalog().brands(), vec!["Apple", "Dell", "Samsung"]);
}
