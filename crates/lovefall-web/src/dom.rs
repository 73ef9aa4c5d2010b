//! DOM glue: element lookup, class toggling and event listeners.

use lovefall_engine::{ClassChange, ClassOp, OverlayElement, Viewport};
use serde::{Deserialize, Serialize};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, Event, EventTarget, HtmlCanvasElement, Window,
};

use crate::error::WebError;

/// Element ids the page provides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomConfig {
    pub canvas_id: String,
    pub envelope_id: String,
    pub letter_id: String,
    pub close_button_id: String,
}

impl Default for DomConfig {
    fn default() -> Self {
        Self {
            canvas_id: "fallingSymbolsCanvas".into(),
            envelope_id: "envelope".into(),
            letter_id: "loveLetterContainer".into(),
            close_button_id: "closeLetterButton".into(),
        }
    }
}

impl DomConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

pub fn window() -> Result<Window, WebError> {
    web_sys::window().ok_or(WebError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, WebError> {
    window.document().ok_or(WebError::NoDocument)
}

pub fn element(document: &Document, id: &str) -> Result<Element, WebError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| WebError::MissingElement(id.to_string()))
}

/// Look up the canvas and its 2D context.
pub fn canvas(
    document: &Document,
    id: &str,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), WebError> {
    let canvas = element(document, id)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| WebError::NotACanvas(id.to_string()))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(WebError::js)?
        .ok_or(WebError::NoContext2d)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| WebError::NoContext2d)?;
    Ok((canvas, ctx))
}

/// Current inner size of the browser window.
pub fn window_viewport(window: &Window) -> Result<Viewport, WebError> {
    let width = window.inner_width().map_err(WebError::js)?.as_f64().unwrap_or(0.0);
    let height = window.inner_height().map_err(WebError::js)?.as_f64().unwrap_or(0.0);
    Ok(Viewport::new(width as f32, height as f32)?)
}

/// Run `handler` on every `event` fired at `target`, for the page lifetime.
pub fn listen(target: &EventTarget, event: &str, mut handler: impl FnMut() + 'static) -> Result<(), WebError> {
    let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| handler());
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(WebError::js)?;
    // The listener lives as long as the page does.
    closure.forget();
    Ok(())
}

/// The overlay elements whose classes the scene toggles.
pub struct DomBindings {
    envelope: Element,
    letter: Element,
    close_button: Element,
}

impl DomBindings {
    pub fn bind(document: &Document, config: &DomConfig) -> Result<Self, WebError> {
        Ok(Self {
            envelope: element(document, &config.envelope_id)?,
            letter: element(document, &config.letter_id)?,
            close_button: element(document, &config.close_button_id)?,
        })
    }

    pub fn envelope(&self) -> &Element {
        &self.envelope
    }

    pub fn close_button(&self) -> &Element {
        &self.close_button
    }

    /// Apply one class change. Failures are logged and skipped.
    pub fn apply(&self, change: &ClassChange) {
        let target = match change.element {
            OverlayElement::Envelope => &self.envelope,
            OverlayElement::Letter => &self.letter,
        };
        let classes = target.class_list();
        let result = match change.op {
            ClassOp::Add => classes.add_1(change.class),
            ClassOp::Remove => classes.remove_1(change.class),
        };
        if let Err(err) = result {
            log::warn!("class change {change:?} failed: {err:?}");
        }
    }
}
