use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use imagelab_core::{allowed_file, GenPhase, GenState, GenerateResponse, RequestToken};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Event, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlImageElement,
    HtmlInputElement,
};

use crate::config::{self, InitConfig};
use crate::dom;
use crate::generate;
use crate::preview;

const FORM_ID: &str = "gen-form";
const SUBMIT_BUTTON_ID: &str = "gen-btn";
const RESULTS_ID: &str = "results";
const PREVIEW_IMAGE_ID: &str = "uploaded-img";
const GENERATED_IMAGE_ID: &str = "generated-img";
const SKELETON_ID: &str = "skeleton";
const LOADING_CLASS: &str = "loading";
const FAILURE_ALERT: &str = "Image generation failed. Please try again.";

/// Controller bound to the pre-rendered generation form. Element handles
/// are cached once at mount; listeners stay installed for the page's
/// lifetime.
pub(crate) struct FormApp {
    config: InitConfig,
    form: HtmlFormElement,
    submit_button: HtmlButtonElement,
    file_input: HtmlInputElement,
    results: HtmlElement,
    preview_image: HtmlImageElement,
    generated_image: HtmlImageElement,
    skeleton: HtmlElement,
    state: RefCell<GenState>,
    listeners: RefCell<Vec<EventListener>>,
}

impl FormApp {
    pub(crate) fn mount(document: &Document) -> Result<Rc<Self>, JsValue> {
        let form: HtmlFormElement = dom::require_element(document, FORM_ID)?;
        let config = config::load_init_config(&form);
        let app = Rc::new(Self {
            submit_button: dom::require_element(document, SUBMIT_BUTTON_ID)?,
            file_input: dom::require_element(document, imagelab_core::FIELD_BASE_IMAGE)?,
            results: dom::require_element(document, RESULTS_ID)?,
            preview_image: dom::require_element(document, PREVIEW_IMAGE_ID)?,
            generated_image: dom::require_element(document, GENERATED_IMAGE_ID)?,
            skeleton: dom::require_element(document, SKELETON_ID)?,
            config,
            form,
            state: RefCell::new(GenState::new()),
            listeners: RefCell::new(Vec::new()),
        });
        app.install_listeners();
        app.render();
        Ok(app)
    }

    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();

        let app = Rc::clone(self);
        let listener = EventListener::new(&self.file_input, "change", move |_event: &Event| {
            app.handle_selection_change();
        });
        listeners.push(listener);

        let app = Rc::clone(self);
        let listener = EventListener::new_with_options(
            &self.form,
            "submit",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event: &Event| {
                event.prevent_default();
                app.handle_submit();
            },
        );
        listeners.push(listener);

        *self.listeners.borrow_mut() = listeners;
    }

    fn handle_selection_change(self: &Rc<Self>) {
        let file = self.file_input.files().and_then(|files| files.get(0));
        let Some(file) = file else {
            self.clear_preview();
            return;
        };
        if !allowed_file(&file.name()) {
            console::warn!("extension not in upload whitelist", file.name());
        }
        let app = Rc::clone(self);
        spawn_local(async move {
            match preview::read_as_data_url(&file).await {
                Ok(data_url) => app.show_preview(&data_url),
                Err(err) => console::error!("preview read failed", dom::js_err(&err)),
            }
        });
    }

    fn handle_submit(self: &Rc<Self>) {
        let token = self.state.borrow_mut().begin_request();
        self.size_skeleton_to_preview();
        self.render();

        let app = Rc::clone(self);
        let endpoint = self.config.endpoint.clone();
        let form = self.form.clone();
        spawn_local(async move {
            let outcome = generate::post_generate(&endpoint, &form).await;
            app.finish_request(token, outcome);
        });
    }

    fn finish_request(&self, token: RequestToken, outcome: Result<GenerateResponse, JsValue>) {
        match outcome {
            Ok(response) if response.has_image() => {
                if !self.state.borrow_mut().finish_success(token) {
                    console::warn!("stale generate response dropped");
                    return;
                }
                if let Some(url) = response.image_url.as_deref() {
                    self.generated_image.set_src(url);
                }
                self.render();
            }
            Ok(_) => {
                if !self.state.borrow_mut().finish_empty(token) {
                    console::warn!("stale generate response dropped");
                    return;
                }
                self.render();
            }
            Err(err) => {
                if !self.state.borrow_mut().finish_failure(token) {
                    console::warn!("stale generate failure dropped", dom::js_err(&err));
                    return;
                }
                console::error!("generation failed", dom::js_err(&err));
                self.render();
                gloo::dialogs::alert(FAILURE_ALERT);
            }
        }
    }

    fn show_preview(&self, data_url: &str) {
        self.preview_image.set_src(data_url);
        dom::set_display(&self.results, "flex");
        self.state.borrow_mut().reset_result();
        self.render();
    }

    fn clear_preview(&self) {
        self.preview_image.set_src("");
        dom::hide(&self.results);
        self.state.borrow_mut().reset_result();
        self.render();
    }

    /// Match the placeholder to the preview's rendered size so the result
    /// column does not shift when the image arrives.
    fn size_skeleton_to_preview(&self) {
        let width = self.preview_image.client_width();
        let height = self.preview_image.client_height();
        let style = self.skeleton.style();
        let _ = style.set_property("width", &format!("{width}px"));
        let _ = style.set_property("height", &format!("{height}px"));
    }

    fn render(&self) {
        let phase = self.state.borrow().phase();
        if self.config.debug {
            console::log!("render", format!("{phase:?}"));
        }
        match phase {
            GenPhase::Idle | GenPhase::Empty | GenPhase::Failed => {
                self.set_loading_ui(false);
                dom::hide(&self.skeleton);
                dom::hide(&self.generated_image);
            }
            GenPhase::Loading => {
                self.set_loading_ui(true);
                dom::set_display(&self.skeleton, "block");
                dom::hide(&self.generated_image);
            }
            GenPhase::Success => {
                self.set_loading_ui(false);
                dom::hide(&self.skeleton);
                dom::set_display(&self.generated_image, "block");
            }
        }
    }

    fn set_loading_ui(&self, loading: bool) {
        self.submit_button.set_disabled(loading);
        let classes = self.submit_button.class_list();
        if loading {
            let _ = classes.add_1(LOADING_CLASS);
        } else {
            let _ = classes.remove_1(LOADING_CLASS);
        }
    }
}
