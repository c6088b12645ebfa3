//! Checkout form validation and totals.
//!
//! Validation is atomic: all rules are evaluated on submit and failing
//! fields populate an ordered field->message map. A non-empty map keeps the
//! flow in the editing state; the route only proceeds to the simulated
//! payment step when the map is empty.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::Utc;
use serde::Deserialize;

use renew_rubber_core::{Email, OrderId, Price};

/// Flat surcharge for home delivery, in euro cents.
pub const SHIPPING_COST: Price = Price::from_cents(595);

/// Simulated payment-processing delay.
pub const PAYMENT_PROCESSING_DELAY: Duration = Duration::from_millis(1500);

/// Minimum digits in a credit card number after stripping separators.
const MIN_CARD_DIGITS: usize = 16;

/// Minimum characters in a CVC.
const MIN_CVC_LENGTH: usize = 3;

/// How the resoled shoes get back to the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum DeliveryMethod {
    #[default]
    #[serde(rename = "gym-pickup")]
    GymPickup,
    #[serde(rename = "home-delivery")]
    HomeDelivery,
}

impl DeliveryMethod {
    /// Form value for this method.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GymPickup => "gym-pickup",
            Self::HomeDelivery => "home-delivery",
        }
    }

    /// Shipping surcharge for this method.
    #[must_use]
    pub const fn shipping_cost(&self) -> Price {
        match self {
            Self::GymPickup => Price::ZERO,
            Self::HomeDelivery => SHIPPING_COST,
        }
    }
}

/// How the order is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "credit-card")]
    CreditCard,
    #[default]
    #[serde(rename = "ideal")]
    Ideal,
    #[serde(rename = "bancontact")]
    Bancontact,
}

impl PaymentMethod {
    /// Form value for this method.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CreditCard => "credit-card",
            Self::Ideal => "ideal",
            Self::Bancontact => "bancontact",
        }
    }
}

/// The checkout form payload.
///
/// Transient: validated and discarded, never persisted. Text inputs default
/// to empty strings so a partially filled submission still deserializes and
/// reports per-field errors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CheckoutForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub delivery_method: DeliveryMethod,
    pub selected_gym: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub payment_method: PaymentMethod,
    pub card_number: String,
    pub card_expiry: String,
    pub card_cvc: String,
}

/// Ordered field -> message map produced by validation.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

impl CheckoutForm {
    /// Validate all fields at once.
    ///
    /// Returns an empty map when the form may be submitted.
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if Email::parse(self.email.trim()).is_err() {
            errors.insert("email", "Valid email is required");
        }
        if self.phone.trim().is_empty() {
            errors.insert("phone", "Phone number is required");
        }
        if self.first_name.trim().is_empty() {
            errors.insert("first_name", "First name is required");
        }
        if self.last_name.trim().is_empty() {
            errors.insert("last_name", "Last name is required");
        }

        match self.delivery_method {
            DeliveryMethod::GymPickup => {
                if self.selected_gym.is_empty() {
                    errors.insert("selected_gym", "Please select a gym");
                }
            }
            DeliveryMethod::HomeDelivery => {
                if self.address.trim().is_empty() {
                    errors.insert("address", "Street address is required");
                }
                if self.city.trim().is_empty() {
                    errors.insert("city", "City is required");
                }
                if self.postal_code.trim().is_empty() {
                    errors.insert("postal_code", "Postal code is required");
                }
            }
        }

        if self.payment_method == PaymentMethod::CreditCard {
            let digits: String = self
                .card_number
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            if digits.len() < MIN_CARD_DIGITS {
                errors.insert("card_number", "Valid card number is required");
            }
            if self.card_expiry.trim().is_empty() {
                errors.insert("card_expiry", "Expiry date is required");
            }
            if self.card_cvc.trim().len() < MIN_CVC_LENGTH {
                errors.insert("card_cvc", "Valid CVC is required");
            }
        }

        errors
    }

    /// Shipping cost implied by the selected delivery method.
    #[must_use]
    pub const fn shipping_cost(&self) -> Price {
        self.delivery_method.shipping_cost()
    }

    /// Order total: cart total plus shipping.
    #[must_use]
    pub fn order_total(&self, cart_total: Price) -> Price {
        cart_total + self.shipping_cost()
    }
}

/// Generate a confirmation order id from the current time.
#[must_use]
pub fn generate_order_id() -> OrderId {
    OrderId::new(format!("ORD-{}", Utc::now().timestamp_millis()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_pickup_form() -> CheckoutForm {
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
    fn test_valid_gym_pickup_form_passes() {
        assert!(valid_pickup_form().validate().is_empty());
    }

    #[test]
    fn test_contact_fields_required() {
        let form = CheckoutForm {
            delivery_method: DeliveryMethod::GymPickup,
            selected_gym: "Klimhal Amsterdam".to_owned(),
            ..CheckoutForm::default()
        };
        let errors = form.validate();
        assert_eq!(errors.get("email"), Some(&"Valid email is required"));
        assert_eq!(errors.get("phone"), Some(&"Phone number is required"));
        assert_eq!(errors.get("first_name"), Some(&"First name is required"));
        assert_eq!(errors.get("last_name"), Some(&"Last name is required"));
    }

    #[test]
    fn test_email_must_be_structurally_valid() {
        let form = CheckoutForm {
            email: "not-an-email".to_owned(),
            ..valid_pickup_form()
        };
        let errors = form.validate();
        assert_eq!(errors.get("email"), Some(&"Valid email is required"));
    }

    #[test]
    fn test_gym_pickup_requires_gym_selection() {
        let form = CheckoutForm {
            selected_gym: String::new(),
            ..valid_pickup_form()
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("selected_gym"), Some(&"Please select a gym"));
    }

    #[test]
    fn test_home_delivery_missing_postal_code_only() {
        let form = CheckoutForm {
            delivery_method: DeliveryMethod::HomeDelivery,
            selected_gym: String::new(),
            address: "Keizersgracht 123".to_owned(),
            city: "Amsterdam".to_owned(),
            postal_code: String::new(),
            ..valid_pickup_form()
        };
        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("postal_code"), Some(&"Postal code is required"));
    }

    #[test]
    fn test_home_delivery_does_not_require_gym() {
        let form = CheckoutForm {
            delivery_method: DeliveryMethod::HomeDelivery,
            selected_gym: String::new(),
            address: "Keizersgracht 123".to_owned(),
            city: "Amsterdam".to_owned(),
            postal_code: "1015 AB".to_owned(),
            ..valid_pickup_form()
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_credit_card_requires_card_fields() {
        let form = CheckoutForm {
            payment_method: PaymentMethod::CreditCard,
            ..valid_pickup_form()
        };
        let errors = form.validate();
        assert_eq!(
            errors.get("card_number"),
            Some(&"Valid card number is required")
        );
        assert_eq!(errors.get("card_expiry"), Some(&"Expiry date is required"));
        assert_eq!(errors.get("card_cvc"), Some(&"Valid CVC is required"));
    }

    #[test]
    fn test_card_number_digits_counted_after_stripping_separators() {
        let mut form = CheckoutForm {
            payment_method: PaymentMethod::CreditCard,
            card_number: "4242 4242 4242 4242".to_owned(),
            card_expiry: "12/30".to_owned(),
            card_cvc: "123".to_owned(),
            ..valid_pickup_form()
        };
        assert!(form.validate().is_empty());

        form.card_number = "4242 4242 4242".to_owned();
        assert_eq!(
            form.validate().get("card_number"),
            Some(&"Valid card number is required")
        );
    }

    #[test]
    fn test_ideal_and_bancontact_skip_card_fields() {
        for method in [PaymentMethod::Ideal, PaymentMethod::Bancontact] {
            let form = CheckoutForm {
                payment_method: method,
                ..valid_pickup_form()
            };
            assert!(form.validate().is_empty(), "{method:?}");
        }
    }

    #[test]
    fn test_shipping_only_for_home_delivery() {
        assert_eq!(DeliveryMethod::GymPickup.shipping_cost(), Price::ZERO);
        assert_eq!(DeliveryMethod::HomeDelivery.shipping_cost(), SHIPPING_COST);

        let form = CheckoutForm {
            delivery_method: DeliveryMethod::HomeDelivery,
            ..valid_pickup_form()
        };
        assert_eq!(
            form.order_total(Price::from_cents(4500)),
            Price::from_cents(5095)
        );
    }

    #[test]
    fn test_generated_order_id_shape() {
        let id = generate_order_id();
        assert!(id.as_str().starts_with("ORD-"));
    }

}
