use super::*;

use crate::cart::Storefront;

fn listed(id: i64, price: f64) -> Product {
    Product {
        id: ProductId(id),
        title: "Essence Mascara Lash Princess".to_string(),
        price,
        discount_percentage: 7.17,
        stock: 5,
        thumbnail: "https://cdn.example/thumb.png".to_string(),
        rating: 4.94,
        category: "beauty".to_string(),
        quantity: 0,
    }
}

#[test]
fn fresh_catalog_shows_add_to_cart_without_stepper() {
    let mut storefront = Storefront::new();
    storefront.replace_catalog(vec![listed(1, 10.0)]);

    let cards = render_cards(storefront.products(), storefront.quantities());
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].cart_button_label, ADD_TO_CART_LABEL);
    assert!(!cards[0].show_stepper);
    assert!(!cards[0].show_delete);
    assert_eq!(cards[0].price_label, "₹10.00/-");
}

#[test]
fn added_product_shows_stepper_with_quantity() {
    let mut storefront = Storefront::new();
    storefront.replace_catalog(vec![listed(1, 10.0)]);
    storefront.add_to_cart(ProductId(1));

    let cards = render_cards(storefront.products(), storefront.quantities());
    assert_eq!(cards[0].cart_button_label, ADDED_TO_CART_LABEL);
    assert!(cards[0].show_stepper);
    assert!(cards[0].show_delete);
    assert_eq!(cards[0].quantity, 1);
}

#[test]
fn zero_entry_renders_like_absent_entry() {
    let mut storefront = Storefront::new();
    storefront.replace_catalog(vec![listed(1, 10.0)]);
    storefront.add_to_cart(ProductId(1));
    storefront.decrease_quantity(ProductId(1));

    let card = &render_cards(storefront.products(), storefront.quantities())[0];
    assert_eq!(card.cart_button_label, ADD_TO_CART_LABEL);
    assert!(!card.show_stepper);
    assert!(!card.show_delete);
}

#[test]
fn deleted_product_has_no_card() {
    let mut storefront = Storefront::new();
    storefront.replace_catalog(vec![listed(1, 10.0), listed(2, 4.5)]);
    storefront.add_to_cart(ProductId(1));
    storefront.delete_product(ProductId(1));

    let cards = render_cards(storefront.products(), storefront.quantities());
    assert_eq!(cards.iter().map(|c| c.id).collect::<Vec<_>>(), vec![ProductId(2)]);
}

#[test]
fn inert_product_quantity_is_not_read() {
    let mut product = listed(1, 10.0);
    product.quantity = 9;

    let card = render_card(&product, &QuantityMap::new());
    assert_eq!(card.quantity, 0);
    assert_eq!(card.cart_button_label, ADD_TO_CART_LABEL);
}

#[test]
fn labels_follow_display_format() {
    assert_eq!(price_label(549.0), "₹549.00/-");
    assert_eq!(price_label(1234.5), "₹1234.50/-");
    assert_eq!(rating_label(4.94), "★ 4.94");
    assert_eq!(rating_label(3.0), "★ 3");
}

#[test]
fn text_rendering_includes_conditional_controls() {
    let mut storefront = Storefront::new();
    storefront.replace_catalog(vec![listed(1, 10.0), listed(2, 2.0)]);
    storefront.increase_quantity(ProductId(2));
    storefront.increase_quantity(ProductId(2));

    let text = render_text(&render_cards(storefront.products(), storefront.quantities()));
    let (first, second) = text.split_once("[2]").expect("second card");
    assert!(first.contains("( Bulk ) ( Add to Cart )"));
    assert!(!first.contains("( - )"));
    assert!(second.contains("( Bulk ) ( Added to Cart )"));
    assert!(second.contains("( - ) 2 ( + )"));
    assert!(second.contains("( Delete )"));
}

#[test]
fn visible_add_to_cart_puts_stepped_down_product_back_in_cart() {
    let mut storefront = Storefront::new();
    storefront.replace_catalog(vec![listed(1, 10.0)]);
    storefront.add_to_cart(ProductId(1));
    storefront.decrease_quantity(ProductId(1));

    let card = &render_cards(storefront.products(), storefront.quantities())[0];
    assert_eq!(card.cart_button_label, ADD_TO_CART_LABEL);

    storefront.add_to_cart(ProductId(1));
    storefront.bulk_add(ProductId(1));

    let card = &render_cards(storefront.products(), storefront.quantities())[0];
    assert_eq!(card.quantity, 1);
    assert_eq!(card.cart_button_label, ADDED_TO_CART_LABEL);
    assert!(card.show_stepper);
}
