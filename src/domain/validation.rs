//! Payload validators shared by the dish and order chains.
//!
//! Request bodies arrive as loosely typed JSON envelopes. Every check here
//! inspects the raw `data` object so that presence follows truthiness:
//! `null`, `false`, `0`, and `""` all count as a missing field.

use serde_json::{Map, Value};

use super::errors::DomainError;
use super::order::{OrderLine, OrderStatus};
use super::ports::{Record, Repository};

pub const DISH_FIELDS: [&str; 4] = ["name", "description", "price", "image_url"];
pub const NEW_ORDER_FIELDS: [&str; 3] = ["deliverTo", "mobileNumber", "dishes"];
pub const ORDER_FIELDS: [&str; 4] = ["deliverTo", "mobileNumber", "dishes", "status"];

/// Whether a JSON value counts as present.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Integral JSON numbers above zero; `5.0` qualifies, `"5"` and `5.5` do not.
/// Whole numbers beyond `u64::MAX` (e.g. `1e20`) are accepted and clamped.
pub fn as_positive_integer(value: &Value) -> Option<u64> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(u) = n.as_u64() {
        return (u > 0).then_some(u);
    }
    let f = n.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 && f > 0.0 {
        // `as` saturates at u64::MAX.
        Some(f as u64)
    } else {
        None
    }
}

/// Looks a record up by route id, failing with `missing(id)` on a miss.
pub fn require_existing<T, R>(
    repo: &R,
    id: &str,
    missing: fn(&str) -> DomainError,
) -> Result<T, DomainError>
where
    T: Record,
    R: Repository<T> + ?Sized,
{
    repo.find_by_id(id)?.ok_or_else(|| missing(id))
}

/// The `data` object of a request envelope, tagged with the resource name
/// used in error messages.
#[derive(Debug, Clone)]
pub struct Payload {
    resource: &'static str,
    fields: Map<String, Value>,
}

impl Payload {
    /// A missing or non-object `data` yields an empty payload.
    pub fn from_body(resource: &'static str, body: &Value) -> Self {
        Self::from_data(resource, body.get("data").unwrap_or(&Value::Null))
    }

    /// Wraps an already unwrapped record object, as found in seed files.
    pub fn from_data(resource: &'static str, data: &Value) -> Self {
        let fields = match data {
            Value::Object(map) => map.clone(),
            _ => Map::new(),
        };
        Self { resource, fields }
    }

    fn missing(&self, field: &str) -> DomainError {
        DomainError::InvalidInput(format!("{} must include a {}", self.resource, field))
    }

    pub fn require(&self, field: &str) -> Result<&Value, DomainError> {
        match self.fields.get(field) {
            Some(value) if is_truthy(value) => Ok(value),
            _ => Err(self.missing(field)),
        }
    }

    /// Presence checks in table order; the first missing field wins.
    pub fn require_all(&self, fields: &[&str]) -> Result<(), DomainError> {
        fields.iter().try_for_each(|field| self.require(field).map(|_| ()))
    }

    /// A present field that must also be a JSON string.
    pub fn text(&self, field: &str) -> Result<String, DomainError> {
        match self.require(field)? {
            Value::String(s) => Ok(s.clone()),
            _ => Err(self.missing(field)),
        }
    }

    pub fn price(&self) -> Result<u64, DomainError> {
        self.fields
            .get("price")
            .and_then(as_positive_integer)
            .ok_or_else(|| {
                DomainError::InvalidInput(format!(
                    "{} must have a price that is an integer greater than 0",
                    self.resource
                ))
            })
    }

    /// A body `id` is optional; when it is present it must equal the route id.
    pub fn check_route_id(&self, route_id: &str) -> Result<(), DomainError> {
        let Some(body_id) = self.fields.get("id").filter(|v| is_truthy(v)) else {
            return Ok(());
        };
        if body_id.as_str() == Some(route_id) {
            return Ok(());
        }
        let shown = match body_id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        Err(DomainError::InvalidInput(format!(
            "{} id does not match route id. {}: {}, Route: {}",
            self.resource, self.resource, shown, route_id
        )))
    }

    /// The record id carried by seed entries.
    pub fn id(&self) -> Result<String, DomainError> {
        self.text("id")
    }

    fn dish_entries(&self) -> Result<&Vec<Value>, DomainError> {
        match self.fields.get("dishes") {
            Some(Value::Array(entries)) if !entries.is_empty() => Ok(entries),
            _ => Err(DomainError::InvalidInput(format!(
                "{} must include at least one dish",
                self.resource
            ))),
        }
    }

    /// Non-empty `dishes` array whose every entry has a positive integral
    /// `quantity`; the first offending index is reported. A truthy `dishId`
    /// must be a string. Other line attributes are kept as sent.
    pub fn order_lines(&self) -> Result<Vec<OrderLine>, DomainError> {
        let entries = self.dish_entries()?;
        let mut lines = Vec::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            let quantity = entry
                .get("quantity")
                .and_then(as_positive_integer)
                .ok_or_else(|| {
                    DomainError::InvalidInput(format!(
                        "Dish {} must have a quantity that is an integer greater than 0",
                        i
                    ))
                })?;
            let dish_id = match entry.get("dishId") {
                Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
                Some(value) if is_truthy(value) => {
                    return Err(DomainError::InvalidInput(format!(
                        "Dish {} must include a dishId",
                        i
                    )))
                }
                _ => None,
            };
            let mut extra = entry.as_object().cloned().unwrap_or_default();
            extra.remove("dishId");
            extra.remove("quantity");
            lines.push(OrderLine {
                dish_id,
                quantity,
                extra,
            });
        }
        Ok(lines)
    }

    /// Target status of an update; absent or unknown values are rejected.
    pub fn status(&self) -> Result<OrderStatus, DomainError> {
        self.fields
            .get("status")
            .and_then(Value::as_str)
            .and_then(OrderStatus::parse)
            .ok_or_else(|| {
                let names: Vec<&str> = OrderStatus::ALL.iter().map(|s| s.as_str()).collect();
                DomainError::InvalidInput(format!(
                    "{} must have a status of {}",
                    self.resource,
                    names.join(", ")
                ))
            })
    }

    /// Status of a new record: `pending` unless the client supplies one.
    pub fn initial_status(&self) -> Result<OrderStatus, DomainError> {
        match self.fields.get("status") {
            Some(value) if is_truthy(value) => self.status(),
            _ => Ok(OrderStatus::default()),
        }
    }
}
