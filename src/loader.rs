//! Catalog loading: the input boundary of the catalog.
//!
//! The products document is a JSON array of objects with the fields
//! `id, name, image, price, category, rating`. The catalog never sees a
//! partially decoded document: loading either produces the whole collection or
//! classifies the failure as [`CatalogSource::Unavailable`].
//!
//! Loading is the one asynchronous step. In a bubbletea-rs program it runs as
//! a command ([`load_catalog_cmd`]) whose [`CatalogLoadedMsg`] is handled by
//! the catalog model's `update`.

use crate::catalog::Product;
use crate::error::{Error, Result};
use bubbletea_rs::{Cmd, Msg};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User-facing message for a catalog that could not be loaded.
pub const UNAVAILABLE_MESSAGE: &str = "Failed to load products. Please try again later.";

/// Where the catalog currently stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogSource {
    /// The load has not completed yet.
    #[default]
    Loading,
    /// The full, decoded collection.
    Ready(Vec<Product>),
    /// The load failed; the string is shown to the user.
    Unavailable(String),
}

impl CatalogSource {
    /// The loaded products; empty unless the catalog is ready.
    pub fn products(&self) -> &[Product] {
        match self {
            CatalogSource::Ready(products) => products,
            _ => &[],
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, CatalogSource::Ready(_))
    }

    /// Classifies a load result, logging the underlying error.
    pub fn from_result(result: Result<Vec<Product>>) -> Self {
        match result {
            Ok(products) => {
                tracing::info!("Loaded {} products", products.len());
                CatalogSource::Ready(products)
            }
            Err(err) => {
                tracing::error!("Error fetching products: {}", err);
                CatalogSource::Unavailable(UNAVAILABLE_MESSAGE.to_string())
            }
        }
    }
}

/// Decodes a products document.
///
/// # Examples
///
/// ```rust
/// use catalog_widgets::loader::decode_products;
///
/// let products = decode_products(
///     r#"[{"id":1,"name":"Pen","image":"pen.png","price":20,"category":"Office","rating":4.1}]"#,
/// ).unwrap();
/// assert_eq!(products[0].category, "Office");
///
/// assert!(decode_products(r#"{"id":1}"#).is_err());
/// ```
pub fn decode_products(raw: &str) -> Result<Vec<Product>> {
    Ok(serde_json::from_str(raw)?)
}

/// Reads and decodes a products file.
pub fn read_products(path: &Path) -> Result<Vec<Product>> {
    let raw = std::fs::read_to_string(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            Error::CatalogNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::Io(err)
        }
    })?;
    decode_products(&raw)
}

/// Reads a products file and classifies the outcome.
pub fn load_products(path: &Path) -> CatalogSource {
    CatalogSource::from_result(read_products(path))
}

/// Delivered to the catalog model when a load finishes.
#[derive(Debug, Clone)]
pub struct CatalogLoadedMsg {
    pub source: CatalogSource,
}

/// A command that loads the catalog at `path` and reports a [`CatalogLoadedMsg`].
pub fn load_catalog_cmd(path: PathBuf) -> Cmd {
    bubbletea_rs::tick(Duration::from_nanos(1), move |_| {
        Box::new(CatalogLoadedMsg {
            source: load_products(&path),
        }) as Msg
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"[
        {"id": 1, "name": "Wireless Mouse", "image": "/img/mouse.jpg", "price": 899, "category": "Electronics", "rating": 4.3},
        {"id": 2, "name": "Yoga Mat", "image": "/img/mat.jpg", "price": 1250.5, "category": "Fitness", "rating": 3.8}
    ]"#;

    #[test]
    fn test_decode_products() {
        let products = decode_products(DOC).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[1].price, 1250.5);
        assert_eq!(products[1].image, "/img/mat.jpg");
    }

    #[test]
    fn test_decode_negative_id_is_ready() {
        let source = CatalogSource::from_result(decode_products(
            r#"[
                {"id": -1, "name": "Gift Card", "image": "", "price": 500, "category": "Misc", "rating": 5},
                {"id": 2, "name": "Pen", "image": "", "price": 20, "category": "Office", "rating": 4.1}
            ]"#,
        ));
        assert!(source.is_ready());
        assert_eq!(source.products()[0].id, -1);
    }

    #[test]
    fn test_decode_rejects_missing_fields() {
        let err = decode_products(r#"[{"id": 1, "name": "x"}]"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_decode_empty_array_is_ready_and_empty() {
        let source = CatalogSource::from_result(decode_products("[]"));
        assert!(source.is_ready());
        assert!(source.products().is_empty());
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let err = read_products(&tmp.path().join("products.json")).unwrap_err();
        assert!(matches!(err, Error::CatalogNotFound { .. }));
    }

    #[test]
    fn test_load_products_classifies_failures() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = load_products(&tmp.path().join("nope.json"));
        assert_eq!(
            missing,
            CatalogSource::Unavailable(UNAVAILABLE_MESSAGE.to_string())
        );
        assert!(missing.products().is_empty());

        let bad = tmp.path().join("bad.json");
        std::fs::write(&bad, "[{").unwrap();
        assert!(matches!(load_products(&bad), CatalogSource::Unavailable(_)));
    }

    #[test]
    fn test_load_products_ready() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("products.json");
        std::fs::write(&path, DOC).unwrap();
        let source = load_products(&path);
        assert!(source.is_ready());
        assert_eq!(source.products().len(), 2);
    }

    #[test]
    fn test_default_source_is_loading() {
        assert_eq!(CatalogSource::default(), CatalogSource::Loading);
        assert!(CatalogSource::Loading.products().is_empty());
    }
}
