//! Pure patch functions applied to a cached product list after a mutation succeeds.
//!
//! Each function mirrors the effect the matching remote operation has on a fresh
//! `list()` result, so a patched list stays equal to a refetched one.

use crate::model::{Product, ProductId};

/// A created product is appended at the end, matching insertion order in the store.
/// If the id is already cached the entry is replaced in place instead.
pub fn apply_created(products: &[Product], created: Product) -> Vec<Product> {
    if products.iter().any(|p| p.id == created.id) {
        return apply_updated(products, created);
    }
    let mut next = Vec::with_capacity(products.len() + 1);
    next.extend_from_slice(products);
    next.push(created);
    next
}

/// The entry with the same id is replaced, keeping its position.
///
/// An update can target a soft-deleted record, which is not cached; such a result
/// leaves the list unchanged.
pub fn apply_updated(products: &[Product], updated: Product) -> Vec<Product> {
    products
        .iter()
        .map(|p| {
            if p.id == updated.id {
                updated.clone()
            } else {
                p.clone()
            }
        })
        .filter(|p| !p.is_deleted)
        .collect()
}

/// The entry with `id` is dropped. Unknown ids leave the list unchanged.
pub fn apply_deleted(products: &[Product], id: ProductId) -> Vec<Product> {
    products.iter().filter(|p| p.id != id).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: u64, name: &str) -> Product {
        Product::new(ProductId(id), name, Decimal::from(10), 1)
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn created_is_appended() {
        let cached = vec![product(1, "a"), product(2, "b")];
        let next = apply_created(&cached, product(3, "c"));
        assert_eq!(ids(&next), vec![1, 2, 3]);
        assert_eq!(ids(&cached), vec![1, 2]);
    }

    #[test]
    fn created_with_cached_id_replaces_instead_of_duplicating() {
        let cached = vec![product(1, "a"), product(2, "b")];
        let next = apply_created(&cached, product(1, "again"));
        assert_eq!(ids(&next), vec![1, 2]);
        assert_eq!(next[0].name, "again");
    }

    #[test]
    fn updated_replaces_in_place() {
        let cached = vec![product(1, "a"), product(2, "b"), product(3, "c")];
        let mut renamed = product(2, "bee");
        renamed.stock = 40;

        let next = apply_updated(&cached, renamed.clone());
        assert_eq!(ids(&next), vec![1, 2, 3]);
        assert_eq!(next[1], renamed);
    }

    #[test]
    fn updated_uncached_record_is_ignored() {
        let cached = vec![product(1, "a")];
        let mut hidden = product(9, "gone");
        hidden.is_deleted = true;

        assert_eq!(apply_updated(&cached, hidden), cached);
    }

    #[test]
    fn deleted_is_removed_and_repeat_is_noop() {
        let cached = vec![product(1, "a"), product(2, "b")];
        let once = apply_deleted(&cached, ProductId(1));
        let twice = apply_deleted(&once, ProductId(1));
        assert_eq!(ids(&once), vec![2]);
        assert_eq!(once, twice);
    }
}
