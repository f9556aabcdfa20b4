use imagelab_core::{parse_generate_response, GenerateResponse};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{FormData, HtmlFormElement, RequestInit, Response};

/// Send the form as multipart data and decode the JSON reply. No headers
/// are set; the runtime picks the multipart boundary. The HTTP status is
/// not consulted: any body that decodes as JSON flows through, anything
/// else is an error.
pub(crate) async fn post_generate(
    endpoint: &str,
    form: &HtmlFormElement,
) -> Result<GenerateResponse, JsValue> {
    let body = FormData::new_with_form(form)?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(body.as_ref());

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("missing window"))?;
    let response = wasm_bindgen_futures::JsFuture::from(window.fetch_with_str_and_init(endpoint, &init))
        .await?;
    let response: Response = response.dyn_into()?;

    let text = wasm_bindgen_futures::JsFuture::from(response.text()?).await?;
    let raw = text.as_string().unwrap_or_default();
    parse_generate_response(&raw).map_err(|err| JsValue::from_str(&err.to_string()))
}
