//! Raw form input and its validation into a [`ProductDraft`].

use crate::model::{Product, ProductDraft};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::str::FromStr;

pub const NAME_REQUIRED: &str = "Name is required";
pub const PRICE_NOT_A_NUMBER: &str = "Price must be a number";
pub const PRICE_NOT_POSITIVE: &str = "Price must be positive";
pub const STOCK_NOT_WHOLE: &str = "Stock must be a whole number";
pub const STOCK_NEGATIVE: &str = "Stock must be zero or more";
pub const STOCK_TOO_LARGE: &str = "Stock is too large";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Price,
    Stock,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Price => "price",
            Field::Stock => "stock",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// At most one message per field, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first message recorded for a field.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Text exactly as typed into the three inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub stock: String,
}

impl ProductForm {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        stock: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            stock: stock.into(),
        }
    }

    /// Pre-filled inputs for editing an existing product.
    pub fn from_product(product: &Product) -> Self {
        Self::new(
            product.name.clone(),
            product.price.normalize().to_string(),
            product.stock.to_string(),
        )
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Price => self.price = value,
            Field::Stock => self.stock = value,
        }
    }

    /// Coerces the inputs and checks every rule, reporting all failing fields at once.
    pub fn validate(&self) -> Result<ProductDraft, FieldErrors> {
        let mut errors = FieldErrors::new();

        if self.name.is_empty() {
            errors.insert(Field::Name, NAME_REQUIRED);
        }
        let price = parse_price(&self.price).map_err(|m| errors.insert(Field::Price, m));
        let stock = parse_stock(&self.stock).map_err(|m| errors.insert(Field::Stock, m));

        match (price, stock) {
            (Ok(price), Ok(stock)) if errors.is_empty() => {
                Ok(ProductDraft::new(self.name.clone(), price, stock))
            }
            _ => Err(errors),
        }
    }
}

/// Plain or scientific notation, e.g. `12.5` or `1e3`.
fn parse_number(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

fn parse_price(raw: &str) -> Result<Decimal, &'static str> {
    let price = parse_number(raw).ok_or(PRICE_NOT_A_NUMBER)?;
    if price < Decimal::ONE {
        return Err(PRICE_NOT_POSITIVE);
    }
    Ok(price)
}

fn parse_stock(raw: &str) -> Result<u32, &'static str> {
    let stock = parse_number(raw).ok_or(STOCK_NOT_WHOLE)?;
    if stock.is_sign_negative() && !stock.is_zero() {
        return Err(STOCK_NEGATIVE);
    }
    if !stock.fract().is_zero() {
        return Err(STOCK_NOT_WHOLE);
    }
    stock.to_u32().ok_or(STOCK_TOO_LARGE)
}
