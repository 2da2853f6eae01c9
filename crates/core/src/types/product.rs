//! Catalog product types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// Errors that can occur when validating product input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// The SKU code is empty or whitespace.
    #[error("product code cannot be empty")]
    EmptyCode,
    /// The display name is empty or whitespace.
    #[error("product name cannot be empty")]
    EmptyName,
    /// The unit price is below zero.
    #[error("unit price cannot be negative")]
    NegativePrice,
    /// The unit price text is not a non-negative decimal.
    #[error("invalid unit price: {0:?}")]
    InvalidPrice(String),
    /// The quantity text is not a non-negative integer.
    #[error("invalid quantity: {0:?}")]
    InvalidQuantity(String),
    /// Unit price times quantity does not fit in a decimal.
    #[error("stock value of unit price times quantity is too large")]
    ValueOverflow,
}

/// Product fields supplied by a caller, without an id.
///
/// The catalog assigns ids; a draft never carries one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    /// Free-form SKU.
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub category: String,
    /// Opaque image reference (file name or URL).
    #[serde(default)]
    pub image: String,
}

impl ProductDraft {
    /// Check the fields a catalog requires.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::EmptyCode`] or [`ProductError::EmptyName`] for
    /// blank identifiers, [`ProductError::NegativePrice`] for a price below
    /// zero and [`ProductError::ValueOverflow`] when the stock value cannot be
    /// represented.
    pub fn validate(&self) -> Result<(), ProductError> {
        if self.code.trim().is_empty() {
            return Err(ProductError::EmptyCode);
        }
        if self.name.trim().is_empty() {
            return Err(ProductError::EmptyName);
        }
        if self.unit_price.is_sign_negative() && !self.unit_price.is_zero() {
            return Err(ProductError::NegativePrice);
        }
        if stock_value(self.unit_price, self.quantity).is_none() {
            return Err(ProductError::ValueOverflow);
        }
        Ok(())
    }

    /// Attach an id, producing a full product record.
    #[must_use]
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            code: self.code,
            name: self.name,
            description: self.description,
            unit_price: self.unit_price,
            quantity: self.quantity,
            category: self.category,
            image: self.image,
        }
    }
}

/// A sellable catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned id; never changes once assigned.
    pub id: ProductId,
    pub code: String,
    pub name: String,
    pub description: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    pub category: String,
    pub image: String,
}

impl Product {
    /// Whether any units are in stock.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.quantity > 0
    }

    /// Stock value of this record: unit price times quantity.
    ///
    /// `None` if the product would overflow a decimal; validated records
    /// never do.
    #[must_use]
    pub fn inventory_value(&self) -> Option<Decimal> {
        stock_value(self.unit_price, self.quantity)
    }

    /// The caller-editable fields of this product.
    #[must_use]
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            code: self.code.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            unit_price: self.unit_price,
            quantity: self.quantity,
            category: self.category.clone(),
            image: self.image.clone(),
        }
    }
}

fn stock_value(unit_price: Decimal, quantity: u32) -> Option<Decimal> {
    unit_price.checked_mul(Decimal::from(quantity))
}

/// Parse a unit price typed by a user (e.g. `"8500"` or `"12.50"`).
///
/// # Errors
///
/// Returns [`ProductError::InvalidPrice`] for non-numeric text and
/// [`ProductError::NegativePrice`] for values below zero.
pub fn parse_unit_price(input: &str) -> Result<Decimal, ProductError> {
    let trimmed = input.trim();
    let price: Decimal = trimmed
        .parse()
        .map_err(|_| ProductError::InvalidPrice(trimmed.to_string()))?;
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ProductError::NegativePrice);
    }
    Ok(price)
}

/// Parse a stock quantity typed by a user.
///
/// # Errors
///
/// Returns [`ProductError::InvalidQuantity`] unless the input is a
/// non-negative integer that fits in `u32`.
pub fn parse_quantity(input: &str) -> Result<u32, ProductError> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| ProductError::InvalidQuantity(trimmed.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn laptop() -> ProductDraft {
        ProductDraft {
            code: "LAP001".to_string(),
            name: "Laptop Gaming HP Pavilion".to_string(),
            description: "RTX 3060, 16GB RAM".to_string(),
            unit_price: Decimal::from(8500),
            quantity: 5,
            category: "Tecnología".to_string(),
            image: "laptop.jpg".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_complete_draft() {
        assert!(laptop().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_code_and_name() {
        let mut draft = laptop();
        draft.code = "   ".to_string();
        assert_eq!(draft.validate(), Err(ProductError::EmptyCode));

        let mut draft = laptop();
        draft.name = String::new();
        assert_eq!(draft.validate(), Err(ProductError::EmptyName));
    }

    #[test]
    fn test_validate_rejects_negative_price() {
        let mut draft = laptop();
        draft.unit_price = Decimal::new(-1, 2);
        assert_eq!(draft.validate(), Err(ProductError::NegativePrice));
    }

    #[test]
    fn test_validate_accepts_free_items() {
        let mut draft = laptop();
        draft.unit_price = Decimal::ZERO;
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_inventory_value() {
        let product = laptop().with_id(ProductId::new(1));
        assert_eq!(product.inventory_value(), Some(Decimal::from(42_500)));
    }

    #[test]
    fn test_validate_rejects_overflowing_stock_value() {
        let mut draft = laptop();
        draft.unit_price = Decimal::MAX;
        draft.quantity = u32::MAX;
        assert_eq!(draft.validate(), Err(ProductError::ValueOverflow));

        // A single unit at the maximum price still fits
        draft.quantity = 1;
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_is_available() {
        let mut product = laptop().with_id(ProductId::new(1));
        assert!(product.is_available());
        product.quantity = 0;
        assert!(!product.is_available());
    }

    #[test]
    fn test_parse_unit_price() {
        assert_eq!(parse_unit_price(" 12.50 ").unwrap(), Decimal::new(1250, 2));
        assert!(matches!(
            parse_unit_price("doce"),
            Err(ProductError::InvalidPrice(_))
        ));
        assert_eq!(parse_unit_price("-3"), Err(ProductError::NegativePrice));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("25").unwrap(), 25);
        assert!(matches!(
            parse_quantity("-1"),
            Err(ProductError::InvalidQuantity(_))
        ));
        assert!(matches!(
            parse_quantity("2.5"),
            Err(ProductError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn test_product_json_uses_camel_case() {
        let product = laptop().with_id(ProductId::new(3));
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["unitPrice"], "8500");
        assert_eq!(json["quantity"], 5);
    }

    #[test]
    fn test_draft_ignores_supplied_id() {
        let draft: ProductDraft = serde_json::from_str(
            r#"{"id":99,"code":"X1","name":"Thing","unitPrice":"1.5","quantity":2,"category":"Hogar"}"#,
        )
        .unwrap();
        assert_eq!(draft.description, "");
        assert_eq!(draft.unit_price, Decimal::new(15, 1));
    }
}
