use super::*;

use proptest::prelude::*;

fn product(id: i64, price: f64) -> Product {
    Product {
        id: ProductId(id),
        title: format!("Product {id}"),
        price,
        discount_percentage: 0.0,
        stock: 10,
        thumbnail: format!("https://cdn.example/{id}.png"),
        rating: 4.5,
        category: "misc".to_string(),
        quantity: 0,
    }
}

fn storefront_with(ids: &[i64]) -> Storefront {
    let mut storefront = Storefront::new();
    storefront.replace_catalog(ids.iter().map(|id| product(*id, 10.0)).collect());
    storefront
}

#[test]
fn add_to_cart_sets_quantity_to_one() {
    let mut storefront = storefront_with(&[1]);
    storefront.add_to_cart(ProductId(1));
    assert_eq!(storefront.quantities().get(ProductId(1)), Some(1));
}

#[test]
fn add_to_cart_is_idempotent_once_in_cart() {
    let mut storefront = storefront_with(&[1]);
    storefront.add_to_cart(ProductId(1));
    storefront.increase_quantity(ProductId(1));
    storefront.add_to_cart(ProductId(1));
    storefront.add_to_cart(ProductId(1));
    assert_eq!(storefront.quantities().get(ProductId(1)), Some(2));
}

#[test]
fn add_to_cart_restores_entry_stepped_down_to_zero() {
    let mut storefront = storefront_with(&[1]);
    storefront.add_to_cart(ProductId(1));
    storefront.decrease_quantity(ProductId(1));
    assert_eq!(storefront.quantities().get(ProductId(1)), Some(0));

    storefront.add_to_cart(ProductId(1));
    assert_eq!(storefront.quantities().get(ProductId(1)), Some(1));
}

#[test]
fn bulk_add_restores_zero_entry_created_by_decrease() {
    let mut storefront = storefront_with(&[1]);
    storefront.decrease_quantity(ProductId(1));
    storefront.bulk_add(ProductId(1));
    storefront.bulk_add(ProductId(1));
    assert_eq!(storefront.quantities().get(ProductId(1)), Some(1));
}

#[test]
fn bulk_add_matches_add_to_cart() {
    let mut storefront = storefront_with(&[1, 2]);
    storefront.bulk_add(ProductId(1));
    storefront.add_to_cart(ProductId(2));
    assert_eq!(
        storefront.quantities().get(ProductId(1)),
        storefront.quantities().get(ProductId(2))
    );
}

#[test]
fn increase_three_times_from_empty() {
    let mut storefront = storefront_with(&[1]);
    for _ in 0..3 {
        storefront.increase_quantity(ProductId(1));
    }
    assert_eq!(storefront.quantities().get(ProductId(1)), Some(3));
    assert_eq!(storefront.quantities().len(), 1);
}

#[test]
fn decrease_at_zero_keeps_entry_at_zero() {
    let mut storefront = storefront_with(&[1]);
    storefront.decrease_quantity(ProductId(1));
    assert!(storefront.quantities().contains(ProductId(1)));
    assert_eq!(storefront.quantities().get(ProductId(1)), Some(0));
}

#[test]
fn decrease_does_not_remove_entry_when_reaching_zero() {
    let mut storefront = storefront_with(&[1]);
    storefront.add_to_cart(ProductId(1));
    storefront.decrease_quantity(ProductId(1));
    assert_eq!(storefront.quantities().get(ProductId(1)), Some(0));
    assert_eq!(storefront.products().len(), 1);
}

#[test]
fn delete_removes_product_and_quantity() {
    let mut storefront = storefront_with(&[1, 2]);
    for _ in 0..3 {
        storefront.increase_quantity(ProductId(1));
    }
    storefront.add_to_cart(ProductId(2));

    let removed = storefront.delete_product(ProductId(1)).expect("listed product");
    assert_eq!(removed.id, ProductId(1));
    assert!(!storefront.is_listed(ProductId(1)));
    assert!(!storefront.quantities().contains(ProductId(1)));
    assert_eq!(storefront.quantities().get(ProductId(2)), Some(1));
    assert_eq!(
        storefront
            .products()
            .iter()
            .map(|p| p.id)
            .collect::<Vec<_>>(),
        vec![ProductId(2)]
    );
}

#[test]
fn operations_after_delete_are_noops() {
    let mut storefront = storefront_with(&[1]);
    storefront.add_to_cart(ProductId(1));
    storefront.delete_product(ProductId(1));

    storefront.add_to_cart(ProductId(1));
    storefront.increase_quantity(ProductId(1));
    storefront.decrease_quantity(ProductId(1));
    assert!(storefront.delete_product(ProductId(1)).is_none());

    assert!(storefront.products().is_empty());
    assert!(storefront.quantities().is_empty());
}

#[test]
fn operations_before_catalog_loads_are_noops() {
    let mut storefront = Storefront::new();
    storefront.add_to_cart(ProductId(1));
    storefront.increase_quantity(ProductId(1));
    storefront.decrease_quantity(ProductId(1));
    assert!(storefront.delete_product(ProductId(1)).is_none());
    assert!(storefront.quantities().is_empty());
}

#[test]
fn delete_preserves_order_of_remaining_products() {
    let mut storefront = storefront_with(&[1, 2, 3, 4]);
    storefront.delete_product(ProductId(2));
    let ids: Vec<_> = storefront.products().iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![1, 3, 4]);
}

#[test]
fn replace_catalog_keeps_quantity_map_independent() {
    let mut storefront = storefront_with(&[1]);
    storefront.add_to_cart(ProductId(1));
    storefront.replace_catalog(vec![product(1, 12.0), product(5, 3.0)]);
    assert_eq!(storefront.quantities().get(ProductId(1)), Some(1));
    assert_eq!(storefront.quantities().get(ProductId(5)), None);
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Add,
    Increase,
    Decrease,
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![Just(Step::Add), Just(Step::Increase), Just(Step::Decrease)]
}

proptest! {
    #[test]
    fn quantity_tracks_saturating_model(steps in prop::collection::vec(arb_step(), 0..64)) {
        let mut storefront = storefront_with(&[1]);
        let mut expected: Option<u32> = None;

        for step in steps {
            match step {
                Step::Add => {
                    storefront.add_to_cart(ProductId(1));
                    expected = Some(expected.filter(|qty| *qty > 0).unwrap_or(1));
                }
                Step::Increase => {
                    storefront.increase_quantity(ProductId(1));
                    expected = Some(expected.unwrap_or(0) + 1);
                }
                Step::Decrease => {
                    storefront.decrease_quantity(ProductId(1));
                    expected = Some(expected.unwrap_or(0).saturating_sub(1));
                }
            }
            prop_assert_eq!(storefront.quantities().get(ProductId(1)), expected);
        }
    }

    #[test]
    fn repeated_add_is_idempotent(extra_adds in 1usize..8, increases in 0usize..8) {
        let mut storefront = storefront_with(&[1]);
        storefront.add_to_cart(ProductId(1));
        for _ in 0..increases {
            storefront.increase_quantity(ProductId(1));
        }
        let before = storefront.quantities().get(ProductId(1));
        for _ in 0..extra_adds {
            storefront.add_to_cart(ProductId(1));
        }
        prop_assert_eq!(storefront.quantities().get(ProductId(1)), before);
    }
}

#[test]
fn apply_dispatches_each_action() {
    let mut storefront = storefront_with(&[1, 2]);
    for action in [
        CartAction::Bulk(ProductId(1)),
        CartAction::Increase(ProductId(1)),
        CartAction::Increase(ProductId(1)),
        CartAction::Decrease(ProductId(1)),
        CartAction::AddToCart(ProductId(2)),
        CartAction::Delete(ProductId(2)),
    ] {
        storefront.apply(action);
    }

    assert_eq!(storefront.quantities().get(ProductId(1)), Some(2));
    assert!(!storefront.is_listed(ProductId(2)));
    assert!(!storefront.quantities().contains(ProductId(2)));
    assert_eq!(CartAction::Delete(ProductId(2)).product_id(), ProductId(2));
}
