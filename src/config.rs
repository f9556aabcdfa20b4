use web_sys::{HtmlFormElement, UrlSearchParams};

pub(crate) const DEFAULT_ENDPOINT: &str = "/generate";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct InitConfig {
    pub(crate) endpoint: String,
    pub(crate) debug: bool,
}

pub(crate) fn load_init_config(form: &HtmlFormElement) -> InitConfig {
    InitConfig {
        endpoint: endpoint_from_form(form),
        debug: debug_flag(),
    }
}

/// The form's `action` attribute names the endpoint; an absent or blank
/// attribute falls back to the fixed default.
fn endpoint_from_form(form: &HtmlFormElement) -> String {
    match form.get_attribute("action") {
        Some(action) if !action.trim().is_empty() => action,
        _ => DEFAULT_ENDPOINT.to_string(),
    }
}

fn debug_flag() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(search) = window.location().search() else {
        return false;
    };
    let Ok(params) = UrlSearchParams::new_with_str(&search) else {
        return false;
    };
    matches!(params.get("debug").as_deref(), Some("1") | Some("true"))
}
