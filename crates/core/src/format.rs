//! Plain-text renderings of domain records.
//!
//! Presentation layers (CLI, desktop, logs) call these instead of relying on
//! `Display` impls on the records themselves.

use crate::types::{Credential, CurrencyCode, Price, Product};

/// One-line summary: `#1 LAP001 Laptop Gaming HP Pavilion - Q8500.00 (5 in stock)`.
#[must_use]
pub fn product_summary(product: &Product) -> String {
    format!(
        "#{} {} {} - {} ({} in stock)",
        product.id,
        product.code,
        product.name,
        Price::new(product.unit_price, CurrencyCode::default()).display(),
        product.quantity
    )
}

/// Multi-line detail block for a single product.
#[must_use]
pub fn product_details(product: &Product) -> String {
    let availability = if product.is_available() {
        "In stock"
    } else {
        "Out of stock"
    };
    format!(
        "Product: {}\nCode: {}\nPrice: {}\nCategory: {}\nAvailable quantity: {} ({availability})\nDescription: {}",
        product.name,
        product.code,
        Price::new(product.unit_price, CurrencyCode::default()).display(),
        product.category,
        product.quantity,
        product.description
    )
}

/// Public identity of a registered user: `ana (Ana López)`.
///
/// Never includes the secret.
#[must_use]
pub fn credential_public_info(credential: &Credential) -> String {
    let full_name = credential.full_name();
    if full_name.is_empty() {
        credential.username.to_string()
    } else {
        format!("{} ({full_name})", credential.username)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use secrecy::SecretString;

    use super::*;
    use crate::types::{CredentialType, ProductDraft, ProductId, Username};

    fn coffee() -> Product {
        ProductDraft {
            code: "COF008".to_string(),
            name: "Café Especialidad Guatemala".to_string(),
            description: "Café de altura".to_string(),
            unit_price: Decimal::from(25),
            quantity: 50,
            category: "Comida".to_string(),
            image: "coffee.jpg".to_string(),
        }
        .with_id(ProductId::new(8))
    }

    #[test]
    fn test_product_summary() {
        assert_eq!(
            product_summary(&coffee()),
            "#8 COF008 Café Especialidad Guatemala - Q25.00 (50 in stock)"
        );
    }

    #[test]
    fn test_product_details_lists_every_field() {
        let details = product_details(&coffee());
        assert_eq!(details.lines().count(), 6);
        assert!(details.contains("Price: Q25.00"));
        assert!(details.contains("Category: Comida"));
        assert!(details.contains("Description: Café de altura"));
        assert!(details.contains("Available quantity: 50 (In stock)"));
    }

    #[test]
    fn test_product_details_flags_sold_out() {
        let mut product = coffee();
        product.quantity = 0;
        assert!(product_details(&product).contains("Available quantity: 0 (Out of stock)"));
    }

    #[test]
    fn test_credential_public_info_hides_secret() {
        let credential = Credential::new(
            Username::parse("ana").unwrap(),
            SecretString::from("hunter2"),
            "Ana".to_string(),
            "López".to_string(),
            CredentialType::Pin,
        );
        let info = credential_public_info(&credential);
        assert_eq!(info, "ana (Ana López)");
        assert!(!info.contains("hunter2"));
    }

    #[test]
    fn test_credential_public_info_without_name() {
        let credential = Credential::new(
            Username::parse("anon").unwrap(),
            SecretString::from("x"),
            String::new(),
            String::new(),
            CredentialType::Password,
        );
        assert_eq!(credential_public_info(&credential), "anon");
    }
}
