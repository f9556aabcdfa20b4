use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

pub(crate) fn require_element<T>(document: &Document, id: &str) -> Result<T, JsValue>
where
    T: JsCast,
{
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))?;
    element
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} has unexpected type")))
}

pub(crate) fn set_display(element: &HtmlElement, value: &str) {
    let _ = element.style().set_property("display", value);
}

pub(crate) fn hide(element: &HtmlElement) {
    set_display(element, "none");
}

pub(crate) fn js_err(error: &JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Ok(json) = js_sys::JSON::stringify(error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}
