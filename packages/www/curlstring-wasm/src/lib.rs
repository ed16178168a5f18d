use curlstring::web::build_from_json;
use serde_json::Value;
use serde_wasm_bindgen::from_value;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn curl_string(
    address: &str,
    descriptor: JsValue,
    options: JsValue,
) -> Result<String, JsValue> {
    let descriptor = to_json("descriptor", descriptor)?;
    let options = to_json("options", options)?;
    Ok(build_from_json(address, &descriptor, &options))
}

fn to_json(field: &str, value: JsValue) -> Result<Value, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(Value::Null);
    }
    from_value(value).map_err(|err| JsValue::from_str(&format!("Invalid {field}: {err}")))
}
