//! WASM bindings for the `radixbits` extractor.
//!
//! JavaScript builds an extractor from a digit string and two bases, then pulls
//! bit or byte fields out of it:
//!
//! ```text
//! // const ex = make("zz", 36, 10);
//! // ex.parse(0, 2, "bytes");   // 1295
//! // ex.shift(4);               // 5, cursor moves to bit 4
//! // ex.extract(JSON.stringify({ fields: [{ name: "id", start: 0, length: 2, unit: "bytes" }] }));
//! ```
//!
//! Positions and lengths are JS numbers. Anything beyond `usize` saturates, so it
//! reads as past the end; negative or `NaN` values count as 0.
//!
//! Invalid input never throws: an invalid extractor reports `isValid() === false`
//! and every read returns `0`. Decimal values up to `Number.MAX_SAFE_INTEGER`
//! come back as numbers, larger ones as decimal strings, and other target bases
//! as digit strings.

mod convert;

use radixbits::{Layout, SoftExtractor, serde::LayoutDef};
use wasm_bindgen::prelude::*;

const DEFAULT_FROM: u32 = 16;
const DEFAULT_TO: u32 = 10;

/// Extractor handle exposed to JavaScript.
#[wasm_bindgen]
pub struct WasmExtractor {
    inner: SoftExtractor,
}

/// Builds an extractor; `from` defaults to 16 and `to` to 10.
#[wasm_bindgen]
pub fn make(data: &str, from: Option<u32>, to: Option<u32>) -> WasmExtractor {
    WasmExtractor::new(data, from, to)
}

#[wasm_bindgen]
impl WasmExtractor {
    #[wasm_bindgen(constructor)]
    pub fn new(data: &str, from: Option<u32>, to: Option<u32>) -> WasmExtractor {
        WasmExtractor {
            inner: SoftExtractor::new(
                data,
                from.unwrap_or(DEFAULT_FROM),
                to.unwrap_or(DEFAULT_TO),
            ),
        }
    }

    #[wasm_bindgen(js_name = isValid)]
    pub fn is_valid(&self) -> bool {
        self.inner.is_valid()
    }

    /// Why the input was rejected, or `undefined`.
    pub fn error(&self) -> Option<String> {
        self.inner.error().map(ToString::to_string)
    }

    /// Reads `length` (default 1) units at `start`; `unit` is `"bits"` (default) or `"bytes"`.
    pub fn parse(
        &self,
        start: f64,
        length: Option<f64>,
        unit: Option<String>,
    ) -> Result<JsValue, JsValue> {
        let unit = convert::unit(unit.as_deref())?;
        Ok(convert::value_to_js(&self.inner.parse(
            convert::index(start),
            convert::length(length),
            unit,
        )))
    }

    /// Reads `length` (default 1) units at the cursor and advances it.
    pub fn shift(&mut self, length: Option<f64>, unit: Option<String>) -> Result<JsValue, JsValue> {
        let unit = convert::unit(unit.as_deref())?;
        Ok(convert::value_to_js(
            &self.inner.shift(convert::length(length), unit),
        ))
    }

    #[wasm_bindgen(js_name = parseBits)]
    pub fn parse_bits(&self, start: f64, length: Option<f64>) -> JsValue {
        convert::value_to_js(
            &self
                .inner
                .parse_bits(convert::index(start), convert::length(length)),
        )
    }

    #[wasm_bindgen(js_name = parseBytes)]
    pub fn parse_bytes(&self, start: f64, length: Option<f64>) -> JsValue {
        convert::value_to_js(
            &self
                .inner
                .parse_bytes(convert::index(start), convert::length(length)),
        )
    }

    #[wasm_bindgen(js_name = shiftBits)]
    pub fn shift_bits(&mut self, length: Option<f64>) -> JsValue {
        convert::value_to_js(&self.inner.shift_bits(convert::length(length)))
    }

    #[wasm_bindgen(js_name = shiftBytes)]
    pub fn shift_bytes(&mut self, length: Option<f64>) -> JsValue {
        convert::value_to_js(&self.inner.shift_bytes(convert::length(length)))
    }

    /// The whole value as big-endian bytes (`Uint8Array`); empty when invalid.
    pub fn buffer(&self) -> Vec<u8> {
        self.inner.buffer().to_vec()
    }

    /// Extracts every field of a JSON layout into a `{ name: value }` object.
    ///
    /// An invalid extractor yields `0` for every field.
    pub fn extract(&self, layout_json: &str) -> Result<JsValue, JsValue> {
        let def: LayoutDef = serde_json::from_str(layout_json).map_err(convert::error_to_js)?;
        let layout = Layout::try_from(def).map_err(convert::error_to_js)?;

        let values = match self.inner.get() {
            Some(extractor) => layout.extract(extractor),
            None => layout
                .fields()
                .iter()
                .map(|field| (field.name.clone(), radixbits::Value::from(0u64)))
                .collect(),
        };

        convert::map_to_js(values)
    }
}
