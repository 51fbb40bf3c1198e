use std::collections::BTreeMap;

use radixbits::{Unit, Value};
use serde::Serialize;
use wasm_bindgen::JsValue;

/// Largest integer a JS number holds exactly (`Number.MAX_SAFE_INTEGER`).
const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

#[derive(Serialize)]
#[serde(untagged)]
pub enum JsValueOut {
    Number(f64),
    Text(String),
}

impl From<&Value> for JsValueOut {
    fn from(value: &Value) -> Self {
        match value {
            Value::Number(_) => match value.to_u64() {
                Some(n) if n <= MAX_SAFE_INTEGER => JsValueOut::Number(n as f64),
                _ => JsValueOut::Text(value.to_string()),
            },
            Value::Digits(s) => JsValueOut::Text(s.clone()),
        }
    }
}

pub fn value_to_js(value: &Value) -> JsValue {
    match JsValueOut::from(value) {
        JsValueOut::Number(n) => JsValue::from_f64(n),
        JsValueOut::Text(s) => JsValue::from_str(&s),
    }
}

pub fn map_to_js(map: BTreeMap<String, Value>) -> Result<JsValue, JsValue> {
    let out: BTreeMap<String, JsValueOut> = map
        .iter()
        .map(|(k, v)| (k.clone(), JsValueOut::from(v)))
        .collect();

    serde_wasm_bindgen::to_value(&out).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Position from a JS number. Saturates at `usize::MAX`; negative and `NaN` become 0.
pub fn index(n: f64) -> usize {
    n as usize
}

/// Length from an optional JS number, defaulting to 1.
pub fn length(n: Option<f64>) -> usize {
    n.map_or(1, index)
}

pub fn unit(name: Option<&str>) -> Result<Unit, JsValue> {
    name.map_or(Ok(Unit::Bits), |s| s.parse().map_err(error_to_js))
}

pub fn error_to_js<E: std::fmt::Display>(e: E) -> JsValue {
    JsValue::from_str(&e.to_string())
}
