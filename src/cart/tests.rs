use super::{CartItem, CartStore};

fn item(pv_id: i64, quantity: u32, price: f64) -> CartItem {
    CartItem {
        id: pv_id * 10,
        name: format!("shirt-{pv_id}"),
        price,
        discounted_price: price * 0.9,
        quantity,
        image: None,
        color: Some("indigo".to_string()),
        size: Some("M".to_string()),
        pv_id,
    }
}

#[test]
fn add_merges_by_variant_and_sums_quantity() {
    let mut cart = CartStore::new();
    cart.add_to_cart(item(1, 2, 100.0));
    cart.add_to_cart(item(1, 3, 100.0));

    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].pv_id, 1);
    assert_eq!(cart.items()[0].quantity, 5);
}

#[test]
fn merge_keeps_fields_of_the_existing_entry() {
    let mut cart = CartStore::new();
    cart.add_to_cart(item(7, 1, 100.0));

    let mut repriced = item(7, 4, 250.0);
    repriced.name = "renamed".to_string();
    repriced.color = Some("black".to_string());
    cart.add_to_cart(repriced);

    let entry = &cart.items()[0];
    assert_eq!(entry.quantity, 5);
    // Price and metadata come from the first entry, not the incoming one.
    assert_eq!(entry.price, 100.0);
    assert_eq!(entry.name, "shirt-7");
    assert_eq!(entry.color.as_deref(), Some("indigo"));
}

#[test]
fn at_most_one_entry_per_variant_under_any_add_sequence() {
    let mut cart = CartStore::new();
    let adds = [(1, 2), (2, 1), (1, 1), (3, 4), (2, 2), (1, 3)];
    for (pv_id, qty) in adds {
        cart.add_to_cart(item(pv_id, qty, 50.0));
    }

    let mut seen = std::collections::HashSet::new();
    for entry in cart.items() {
        assert!(seen.insert(entry.pv_id), "duplicate pv_id {}", entry.pv_id);
    }
    let qty_of = |pv: i64| {
        cart.items()
            .iter()
            .find(|i| i.pv_id == pv)
            .map(|i| i.quantity)
    };
    assert_eq!(qty_of(1), Some(6));
    assert_eq!(qty_of(2), Some(3));
    assert_eq!(qty_of(3), Some(4));
}

#[test]
fn add_then_remove_restores_prior_state() {
    let mut cart = CartStore::new();
    cart.add_to_cart(item(1, 2, 100.0));
    let before = cart.items().to_vec();

    cart.add_to_cart(item(9, 1, 30.0));
    cart.remove_from_cart(9);

    assert_eq!(cart.items(), before.as_slice());
}

#[test]
fn remove_of_absent_variant_is_a_noop() {
    let mut cart = CartStore::new();
    cart.add_to_cart(item(1, 2, 100.0));
    cart.remove_from_cart(42);
    assert_eq!(cart.items().len(), 1);
}

#[test]
fn update_quantity_overwrites_without_clamping() {
    let mut cart = CartStore::new();
    cart.add_to_cart(item(1, 2, 100.0));

    cart.update_quantity(1, 0);
    assert_eq!(cart.items()[0].quantity, 0);

    cart.update_quantity(1, 11);
    assert_eq!(cart.items()[0].quantity, 11);

    // Unknown variant: nothing changes.
    cart.update_quantity(5, 3);
    assert_eq!(cart.items().len(), 1);
}

#[test]
fn totals_track_the_current_collection() {
    let mut cart = CartStore::new();
    cart.add_to_cart(item(1, 2, 100.0));
    cart.add_to_cart(item(2, 3, 40.0));
    assert_eq!(cart.total_items(), 5);
    assert_eq!(cart.total_price(), 2.0 * 100.0 + 3.0 * 40.0);

    cart.update_quantity(2, 1);
    assert_eq!(cart.total_items(), 3);
    assert_eq!(cart.total_price(), 240.0);

    cart.remove_from_cart(1);
    assert_eq!(cart.total_items(), 1);
    assert_eq!(cart.total_price(), 40.0);
}

#[test]
fn total_price_uses_the_undiscounted_unit_price() {
    let mut cart = CartStore::new();
    let mut it = item(1, 2, 100.0);
    it.discounted_price = 80.0;
    cart.add_to_cart(it);

    assert_eq!(cart.total_price(), 200.0);
    assert_eq!(cart.total_discounted_price(), 160.0);
}

#[test]
fn clear_cart_is_idempotent() {
    let mut cart = CartStore::new();
    cart.add_to_cart(item(1, 2, 100.0));
    cart.add_to_cart(item(2, 1, 10.0));

    cart.clear_cart();
    assert!(cart.items().is_empty());
    assert_eq!(cart.total_items(), 0);

    cart.clear_cart();
    assert!(cart.items().is_empty());
}

#[test]
fn update_from_db_replaces_wholesale() {
    let mut cart = CartStore::new();
    cart.add_to_cart(item(1, 2, 100.0));
    cart.add_to_cart(item(2, 5, 20.0));

    cart.update_from_db(vec![item(3, 1, 75.0)]);

    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.items()[0].pv_id, 3);
}
