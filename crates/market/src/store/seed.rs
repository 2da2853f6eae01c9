//! Sample catalog loaded at startup when `MARKET_SEED_CATALOG` is enabled.

use rust_decimal::Decimal;
use tracing::info;

use rigo_core::ProductDraft;

use super::{CatalogStore, StoreError};

/// The ten demo listings, in the order they are added (ids 1..=10 on an
/// empty catalog).
#[must_use]
pub fn sample_products() -> Vec<ProductDraft> {
    [
        (
            "LAP001",
            "Laptop Gaming HP Pavilion",
            "Laptop de alto rendimiento para gaming con RTX 3060, 16GB RAM, perfecto estado",
            8500,
            5,
            "Tecnología",
            "laptop.jpg",
        ),
        (
            "PHN002",
            "Smartphone Samsung Galaxy S23",
            "Teléfono inteligente de última generación con cámara de 108MP",
            3200,
            10,
            "Tecnología",
            "phone.jpg",
        ),
        (
            "TAB003",
            "iPad Pro 12.9",
            "Tablet profesional con pantalla Liquid Retina XDR",
            4800,
            8,
            "Tecnología",
            "tablet.jpg",
        ),
        (
            "CLT004",
            "Chaqueta de Cuero Genuino",
            "Chaqueta elegante de cuero genuino, perfecta para invierno",
            450,
            15,
            "Ropa",
            "jacket.jpg",
        ),
        (
            "SHO005",
            "Zapatos Nike Air Max",
            "Calzado deportivo cómodo y resistente",
            180,
            25,
            "Ropa",
            "shoes.jpg",
        ),
        (
            "FUR006",
            "Sofá de 3 Plazas",
            "Sofá cómodo de tela en excelente estado",
            1200,
            3,
            "Hogar",
            "sofa.jpg",
        ),
        (
            "LIG007",
            "Lámpara de Pie LED",
            "Lámpara moderna con control de brillo",
            85,
            12,
            "Hogar",
            "lamp.jpg",
        ),
        (
            "COF008",
            "Café Especialidad Guatemala",
            "Café de alta calidad de las montañas guatemaltecas",
            25,
            50,
            "Comida",
            "coffee.jpg",
        ),
        (
            "CHO009",
            "Chocolate Artesanal",
            "Chocolate orgánico de cacao guatemalteco",
            15,
            30,
            "Comida",
            "chocolate.jpg",
        ),
        (
            "WEB010",
            "Desarrollo Web Personalizado",
            "Servicio de desarrollo de sitios web a medida",
            1500,
            100,
            "Servicios",
            "web.jpg",
        ),
    ]
    .into_iter()
    .map(
        |(code, name, description, price, quantity, category, image)| ProductDraft {
            code: code.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            unit_price: Decimal::from(price),
            quantity,
            category: category.to_string(),
            image: image.to_string(),
        },
    )
    .collect()
}

/// Add the sample products to `catalog`. Returns how many were added.
///
/// # Errors
///
/// Returns the first `StoreError` raised by [`CatalogStore::add`].
pub fn seed_catalog(catalog: &CatalogStore) -> Result<usize, StoreError> {
    let products = sample_products();
    let total = products.len();
    for draft in products {
        catalog.add(draft)?;
    }
    info!(products = total, "Sample catalog loaded");
    Ok(total)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rigo_core::ProductId;

    use super::*;

    #[test]
    fn test_seed_assigns_ids_one_through_ten() {
        let catalog = CatalogStore::new();
        assert_eq!(seed_catalog(&catalog).unwrap(), 10);

        let first = catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(first.code, "LAP001");
        let last = catalog.get(ProductId::new(10)).unwrap();
        assert_eq!(last.code, "WEB010");
    }

    #[test]
    fn test_sample_products_are_valid() {
        for draft in sample_products() {
            assert!(draft.validate().is_ok(), "{} should validate", draft.code);
        }
    }

    #[test]
    fn test_seeded_analytics() {
        let catalog = CatalogStore::new();
        seed_catalog(&catalog).unwrap();

        assert_eq!(
            catalog.distinct_categories().unwrap(),
            vec!["Comida", "Hogar", "Ropa", "Servicios", "Tecnología"]
        );
        // Laptop (5) and sofa (3)
        assert_eq!(catalog.low_stock(5).unwrap().len(), 2);
        assert_eq!(
            catalog.total_inventory_value().unwrap(),
            Decimal::from(280_470)
        );
    }
}
