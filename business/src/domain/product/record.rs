//! Conversion between [`Product`] and its structured record form.
//!
//! A record is a JSON object keyed by field name. `category` travels as its
//! upper-case name and `price` as a decimal string so no precision is lost.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde_json::{Map, Value};

use super::errors::ValidationError;
use super::model::{Product, validate_price};
use super::value_objects::Category;

pub type ProductRecord = Map<String, Value>;

/// Parses a textual price, ignoring surrounding whitespace and double quotes.
///
/// The value must fit the stored precision, see [`validate_price`].
pub fn parse_price(raw: &str) -> Result<BigDecimal, ValidationError> {
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == '"');
    let price =
        BigDecimal::from_str(trimmed).map_err(|_| ValidationError::InvalidPrice(raw.to_string()))?;
    validate_price(&price)?;
    Ok(price)
}

impl Product {
    pub fn serialize(&self) -> ProductRecord {
        let mut record = Map::new();
        record.insert(
            "id".to_string(),
            self.id.map(Value::from).unwrap_or(Value::Null),
        );
        record.insert("name".to_string(), Value::from(self.name.as_str()));
        record.insert(
            "description".to_string(),
            Value::from(self.description.as_str()),
        );
        record.insert("price".to_string(), Value::from(self.price.to_string()));
        record.insert("available".to_string(), Value::from(self.available));
        record.insert("category".to_string(), Value::from(self.category.as_str()));
        record
    }

    /// Builds a product from a record, validating every field.
    ///
    /// `id` is optional; every other field is required.
    pub fn deserialize(record: &Value) -> Result<Product, ValidationError> {
        let fields = record.as_object().ok_or(ValidationError::NotAnObject)?;

        let id = match fields.get("id") {
            None | Some(Value::Null) => None,
            Some(value) => Some(value.as_i64().ok_or(ValidationError::InvalidField("id"))?),
        };

        let name = required_str(fields, "name")?;
        if name.trim().is_empty() {
            return Err(ValidationError::InvalidField("name"));
        }
        let description = required_str(fields, "description")?;

        let price = match required(fields, "price")? {
            Value::String(raw) => parse_price(raw)?,
            Value::Number(number) => parse_price(&number.to_string())?,
            other => return Err(ValidationError::InvalidPrice(other.to_string())),
        };

        let available = match required(fields, "available")? {
            Value::Bool(flag) => *flag,
            other => return Err(ValidationError::InvalidAvailable(json_type(other))),
        };

        let category = match required(fields, "category")? {
            Value::String(raw) => Category::from_str(raw)
                .map_err(|_| ValidationError::InvalidCategory(raw.clone()))?,
            other => return Err(ValidationError::InvalidCategory(other.to_string())),
        };

        Ok(Product {
            id,
            name: name.to_string(),
            description: description.to_string(),
            price,
            available,
            category,
        })
    }
}

fn required<'a>(fields: &'a ProductRecord, key: &'static str) -> Result<&'a Value, ValidationError> {
    fields.get(key).ok_or(ValidationError::MissingField(key))
}

fn required_str<'a>(fields: &'a ProductRecord, key: &'static str) -> Result<&'a str, ValidationError> {
    required(fields, key)?
        .as_str()
        .ok_or(ValidationError::InvalidField(key))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
