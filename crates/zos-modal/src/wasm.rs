//! Browser bindings
//!
//! [`BrowserHost`] implements [`ModalHost`] over the real page and
//! [`ModalHandle`] exposes the controller to JavaScript. The page forwards
//! document-level `mousedown`/`mousemove`/`mouseup` to the handle and
//! renders the JSON returned by `view()` each frame.

use std::rc::Rc;

use tracing::warn;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::controller::ModalController;
use crate::error::{ModalError, ModalResult};
use crate::host::ModalHost;
use crate::math::Size;
use crate::modal::ModalConfig;

/// Host backed by `window` and `document.body`
pub struct BrowserHost {
    window: web_sys::Window,
    body: HtmlElement,
}

impl BrowserHost {
    /// Attach to the current page
    pub fn attach() -> ModalResult<Self> {
        let window = web_sys::window().ok_or(ModalError::HostUnavailable("window"))?;
        let document = window
            .document()
            .ok_or(ModalError::HostUnavailable("document"))?;
        let body = document.body().ok_or(ModalError::HostUnavailable("body"))?;
        Ok(Self { window, body })
    }

    fn read_dimension(value: Result<JsValue, JsValue>) -> f32 {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    }
}

impl ModalHost for BrowserHost {
    fn viewport_size(&self) -> Size {
        Size::new(
            Self::read_dimension(self.window.inner_width()),
            Self::read_dimension(self.window.inner_height()),
        )
    }

    fn set_text_selection(&self, enabled: bool) {
        let value = if enabled { "auto" } else { "none" };
        if self.body.style().set_property("user-select", value).is_err() {
            warn!(value, "failed to set body user-select");
        }
    }
}

fn to_js(err: ModalError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Parse the optional constructor config, falling back to the defaults
fn load_config(config_json: Option<&str>) -> ModalResult<ModalConfig> {
    match config_json {
        Some(json) => ModalConfig::from_json(json),
        None => Ok(ModalConfig::default()),
    }
}

/// JavaScript handle to a modal controller
#[wasm_bindgen]
pub struct ModalHandle {
    controller: ModalController,
}

#[wasm_bindgen]
impl ModalHandle {
    /// Create a handle attached to the current page
    ///
    /// `config_json` is an optional JSON `ModalConfig`.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<ModalHandle, JsValue> {
        let config = load_config(config_json.as_deref()).map_err(to_js)?;
        let host = Rc::new(BrowserHost::attach().map_err(to_js)?);
        let controller = ModalController::with_config(host, config).map_err(to_js)?;
        Ok(Self { controller })
    }

    /// Show the modal
    pub fn open(&mut self) {
        self.controller.open();
    }

    /// Hide the modal
    pub fn close(&mut self) {
        self.controller.close();
    }

    /// Toggle maximize/restore
    #[wasm_bindgen(js_name = toggleMaximize)]
    pub fn toggle_maximize(&mut self) {
        self.controller.toggle_maximize(js_sys::Date::now());
    }

    /// Forward a mousedown; returns true if the modal consumed it
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f32, y: f32, button: u8) -> bool {
        self.controller
            .handle_pointer_down(x, y, button, js_sys::Date::now())
            .is_handled()
    }

    /// Forward a document-level mousemove
    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.controller.handle_pointer_move(x, y).is_handled()
    }

    /// Forward a document-level mouseup
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) -> bool {
        self.controller.handle_pointer_up().is_handled()
    }

    /// Advance animations; returns true while another frame is needed
    pub fn tick(&mut self) -> bool {
        self.controller.tick(js_sys::Date::now())
    }

    /// Current view as a JSON string
    pub fn view(&self) -> Result<String, JsValue> {
        self.controller
            .view(js_sys::Date::now())
            .to_json()
            .map_err(to_js)
    }
}
