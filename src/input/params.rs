use serde_json::{Map, Value};

use crate::error::ServerError;

pub struct Params<'a> {
    data: Option<&'a Map<String, Value>>,
}

impl<'a> Params<'a> {
    pub fn new(data: Option<&'a Map<String, Value>>) -> Self {
        Self { data }
    }

    fn get(&self, field: &str) -> Option<&'a Value> {
        self.data
            .and_then(|data| data.get(field))
            .filter(|value| !value.is_null())
    }

    /// Integer field defaulting to 0. Fractional values are rounded.
    pub fn int_or_zero(&self, field: &str) -> Result<i32, ServerError> {
        let Some(value) = self.get(field) else {
            return Ok(0);
        };
        let number = value
            .as_i64()
            .map(|n| n as f64)
            .or_else(|| value.as_f64())
            .ok_or_else(|| invalid(field, "a number", value))?;
        let rounded = number.round();
        if rounded < i32::MIN as f64 || rounded > i32::MAX as f64 {
            return Err(ServerError::InvalidParameter(format!(
                "'{field}' is out of range: {value}"
            )));
        }
        Ok(rounded as i32)
    }

    /// Boolean field defaulting to false.
    pub fn flag(&self, field: &str) -> Result<bool, ServerError> {
        match self.get(field) {
            None => Ok(false),
            Some(Value::Bool(flag)) => Ok(*flag),
            Some(other) => Err(invalid(field, "a boolean", other)),
        }
    }

    /// String field defaulting to "".
    pub fn text(&self, field: &str) -> Result<&'a str, ServerError> {
        match self.get(field) {
            None => Ok(""),
            Some(Value::String(text)) => Ok(text),
            Some(other) => Err(invalid(field, "a string", other)),
        }
    }

    /// String field that must be present and non-empty.
    pub fn required_text(&self, field: &str) -> Result<&'a str, ServerError> {
        match self.text(field)? {
            "" => Err(ServerError::InvalidParameter(format!("No {field} provided"))),
            text => Ok(text),
        }
    }

    /// Non-empty list of strings.
    pub fn required_list(&self, field: &str) -> Result<Vec<&'a str>, ServerError> {
        let items = match self.get(field) {
            None => &[][..],
            Some(Value::Array(items)) => items.as_slice(),
            Some(other) => return Err(invalid(field, "a list of strings", other)),
        };
        if items.is_empty() {
            return Err(ServerError::InvalidParameter(format!(
                "No {field} provided for combination"
            )));
        }
        items
            .iter()
            .map(|item| {
                item.as_str()
                    .ok_or_else(|| invalid(field, "a list of strings", item))
            })
            .collect()
    }
}

fn invalid(field: &str, expected: &str, got: &Value) -> ServerError {
    ServerError::InvalidParameter(format!("'{field}' must be {expected}, got {got}"))
}
