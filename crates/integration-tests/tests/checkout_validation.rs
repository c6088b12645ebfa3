//! Integration tests for checkout validation and totals.

#![allow(clippy::unwrap_used)]

use renew_rubber_core::Price;
use renew_rubber_storefront::services::checkout::{
    CheckoutForm, DeliveryMethod, PaymentMethod, SHIPPING_COST,
};

fn filled_form() -> CheckoutForm {
    CheckoutForm {
        email: "climber@example.com".to_owned(),
        first_name: "Alex".to_owned(),
        last_name: "van der Berg".to_owned(),
        phone: "+31 6 12345678".to_owned(),
        delivery_method: DeliveryMethod::GymPickup,
        selected_gym: "Monk Bouldergym Amsterdam".to_owned(),
        payment_method: PaymentMethod::Ideal,
        ..CheckoutForm::default()
    }
}

#[test]
fn missing_postal_code_yields_exactly_one_error() {
    let form = CheckoutForm {
        delivery_method: DeliveryMethod::HomeDelivery,
        selected_gym: String::new(),
        address: "Keizersgracht 123".to_owned(),
        city: "Amsterdam".to_owned(),
        postal_code: "   ".to_owned(),
        ..filled_form()
    };

    let errors = form.validate();
    assert_eq!(errors.len(), 1, "{errors:?}");
    assert_eq!(errors.get("postal_code"), Some(&"Postal code is required"));
}

#[test]
fn genuinely_missing_fields_all_reported_together() {
    // Validation is atomic: one submit reports every failing field at once
    let form = CheckoutForm {
        delivery_method: DeliveryMethod::HomeDelivery,
        payment_method: PaymentMethod::CreditCard,
        ..CheckoutForm::default()
    };

    let errors = form.validate();
    for field in [
        "email",
        "phone",
        "first_name",
        "last_name",
        "address",
        "city",
        "postal_code",
        "card_number",
        "card_expiry",
        "card_cvc",
    ] {
        assert!(errors.contains_key(field), "missing error for {field}");
    }
    // gym selection is not required for home delivery
    assert!(!errors.contains_key("selected_gym"));
}

#[test]
fn card_number_needs_sixteen_digits_after_stripping() {
    let mut form = CheckoutForm {
        payment_method: PaymentMethod::CreditCard,
        card_number: "4242 4242 4242 4242".to_owned(),
        card_expiry: "12/30".to_owned(),
        card_cvc: "123".to_owned(),
        ..filled_form()
    };
    assert!(form.validate().is_empty());

    form.card_cvc = "12".to_owned();
    assert_eq!(
        form.validate().get("card_cvc"),
        Some(&"Valid CVC is required")
    );
}

#[test]
fn shipping_surcharge_applies_only_to_home_delivery() {
    let pickup = filled_form();
    assert_eq!(pickup.shipping_cost(), Price::ZERO);
    assert_eq!(
        pickup.order_total(Price::from_cents(15000)),
        Price::from_cents(15000)
    );

    let delivery = CheckoutForm {
        delivery_method: DeliveryMethod::HomeDelivery,
        address: "Keizersgracht 123".to_owned(),
        city: "Amsterdam".to_owned(),
        postal_code: "1015 AB".to_owned(),
        ..filled_form()
    };
    assert_eq!(delivery.shipping_cost(), SHIPPING_COST);
    assert_eq!(
        delivery.order_total(Price::from_cents(15000)),
        Price::from_cents(15595)
    );
}
