// Author: Dustin Pilgrim
// License: MIT

use crate::{LexemeError, Value};

fn type_error(expected: &str, value: &Value, hint: &str, code: u32) -> LexemeError {
    LexemeError::TypeError {
        message: format!("Expected {}, got {} {}", expected, value.kind(), value),
        line: None,
        hint: Some(hint.into()),
        code: Some(code),
    }
}

fn out_of_range(n: i64, target: &str, hint: &str, code: u32) -> LexemeError {
    LexemeError::TypeError {
        message: format!("Number {} out of range for {}", n, target),
        line: None,
        hint: Some(hint.into()),
        code: Some(code),
    }
}

impl TryFrom<Value> for String {
    type Error = LexemeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(type_error("string", &value, "Quote the value to keep it a string", 401)),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = LexemeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Boolean(b) => Ok(b),
            _ => Err(type_error("boolean", &value, "Use true or false", 402)),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = LexemeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(n) => Ok(n),
            _ => Err(type_error("integer", &value, "Use an unquoted whole number", 403)),
        }
    }
}

impl TryFrom<Value> for u64 {
    type Error = LexemeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = i64::try_from(value)?;
        u64::try_from(n).map_err(|_| out_of_range(n, "u64", "Use a non-negative number", 404))
    }
}

impl TryFrom<Value> for u32 {
    type Error = LexemeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let n = i64::try_from(value)?;
        u32::try_from(n)
            .map_err(|_| out_of_range(n, "u32", "Use a number between 0 and 4294967295", 405))
    }
}

impl TryFrom<Value> for f64 {
    type Error = LexemeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(f) => Ok(f),
            Value::Integer(n) => Ok(n as f64),
            _ => Err(type_error("number", &value, "Use an unquoted number", 406)),
        }
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = LexemeError>,
{
    type Error = LexemeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => items.into_iter().map(T::try_from).collect(),
            _ => Err(type_error("array", &value, "Use [a, b, c]", 407)),
        }
    }
}
