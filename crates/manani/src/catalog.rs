//! Product model and the storefront's fixed collection.

use std::fmt;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const PLACEHOLDER_IMAGE_BASE: &str = "https://via.placeholder.com/200x200?text=Dynamic+Product+";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decimal price kept verbatim as written (`"79.99"`), never converted to a float.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Price(String);

impl Price {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if is_decimal(&raw) {
            Ok(Self(raw))
        } else {
            Err(Error::InvalidPrice(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Price as shown on a card: `$79.99`.
    pub fn label(&self) -> String {
        format!("${}", self.0)
    }
}

fn is_decimal(s: &str) -> bool {
    let (whole, frac) = match s.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (s, None),
    };
    let digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    digits(whole) && frac.map_or(true, digits)
}

impl TryFrom<String> for Price {
    type Error = Error;

    fn try_from(raw: String) -> Result<Self> {
        Price::new(raw)
    }
}

impl From<Price> for String {
    fn from(p: Price) -> String {
        p.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(rename = "image")]
    pub image_url: String,
}

impl Product {
    pub fn new(id: u32, name: &str, price: &str, image_url: &str) -> Result<Self> {
        Ok(Self {
            id: ProductId(id),
            name: name.to_string(),
            price: Price::new(price)?,
            image_url: image_url.to_string(),
        })
    }
}

/// Ordered, immutable product list with unique identifiers.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut index = HashMap::with_capacity(products.len());
        for (i, p) in products.iter().enumerate() {
            if p.name.trim().is_empty() {
                return Err(Error::EmptyProductName(p.id));
            }
            if index.insert(p.id, i).is_some() {
                return Err(Error::DuplicateProductId(p.id));
            }
        }
        Ok(Self { products, index })
    }

    /// The storefront's six-item collection.
    pub fn collection() -> Self {
        let items: [(u32, &str, &str); 6] = [
            (1, "Elegant Dress", "79.99"),
            (2, "Stylish Top", "39.99"),
            (3, "Chic Skirt", "49.99"),
            (4, "Fashionable Bag", "89.99"),
            (5, "Trendy Jeans", "59.99"),
            (6, "Summer Sandals", "34.99"),
        ];

        let products = items
            .iter()
            .map(|&(id, name, price)| Product {
                id: ProductId(id),
                name: name.to_string(),
                price: Price(price.to_string()),
                image_url: format!("{PLACEHOLDER_IMAGE_BASE}{id}"),
            })
            .collect::<Vec<_>>();

        let index = products.iter().enumerate().map(|(i, p)| (p.id, i)).collect();
        Self { products, index }
    }

    /// Loads an ordered product list from a JSON array.
    pub fn from_json(raw: &str) -> Result<Self> {
        let products: Vec<Product> = serde_json::from_str(raw)?;
        Self::new(products)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.products)?)
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).map(|&i| &self.products[i])
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::collection()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_is_ordered_and_unique() {
        let c = Catalog::collection();
        assert_eq!(c.len(), 6);

        let ids: Vec<u32> = c.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

        let skirt = c.get(ProductId(3)).unwrap();
        assert_eq!(skirt.name, "Chic Skirt");
        assert_eq!(skirt.price.as_str(), "49.99");
        assert_eq!(
            skirt.image_url,
            "https://via.placeholder.com/200x200?text=Dynamic+Product+3"
        );

        // Fixed list must also pass the validating constructor.
        let rebuilt = Catalog::new(c.products().to_vec()).unwrap();
        assert_eq!(rebuilt.len(), 6);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let a = Product::new(7, "A", "1.00", "a.png").unwrap();
        let b = Product::new(7, "B", "2.00", "b.png").unwrap();
        match Catalog::new(vec![a, b]) {
            Err(Error::DuplicateProductId(id)) => assert_eq!(id, ProductId(7)),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_blank_names() {
        let p = Product::new(1, "  ", "1.00", "a.png").unwrap();
        assert!(matches!(
            Catalog::new(vec![p]),
            Err(Error::EmptyProductName(ProductId(1)))
        ));
    }

    #[test]
    fn price_validation() {
        for ok in ["0", "7", "79.99", "100.5"] {
            assert!(Price::new(ok).is_ok(), "{ok} should parse");
        }
        for bad in ["", ".", "12.", ".5", "1.2.3", "-1", "$5", "1,00", " 5"] {
            assert!(Price::new(bad).is_err(), "{bad:?} should be rejected");
        }
        assert_eq!(Price::new("34.99").unwrap().label(), "$34.99");
    }

    #[test]
    fn json_catalog_keeps_order_and_validates() {
        let raw = r#"[
            {"id": 9, "name": "Wrap Scarf", "price": "19.50", "image": "scarf.png"},
            {"id": 2, "name": "Linen Shirt", "price": "45", "image": "shirt.png"}
        ]"#;
        let c = Catalog::from_json(raw).unwrap();
        let names: Vec<&str> = c.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Wrap Scarf", "Linen Shirt"]);
        assert_eq!(c.get(ProductId(2)).unwrap().image_url, "shirt.png");

        let bad_price = r#"[{"id": 1, "name": "X", "price": "cheap", "image": "x.png"}]"#;
        assert!(matches!(Catalog::from_json(bad_price), Err(Error::Json(_))));

        let dup = r#"[
            {"id": 1, "name": "X", "price": "1", "image": "x.png"},
            {"id": 1, "name": "Y", "price": "2", "image": "y.png"}
        ]"#;
        assert!(matches!(
            Catalog::from_json(dup),
            Err(Error::DuplicateProductId(ProductId(1)))
        ));
    }

    #[test]
    fn json_uses_image_field_name() {
        let json = Catalog::collection().to_json_pretty().unwrap();
        assert!(json.contains("\"image\""));
        assert!(!json.contains("image_url"));
        let back = Catalog::from_json(&json).unwrap();
        assert_eq!(back.products(), Catalog::collection().products());
    }
}
