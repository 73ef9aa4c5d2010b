pub mod canvas2d;
pub mod dom;
pub mod error;
pub mod runner;

pub use canvas2d::Canvas2d;
pub use dom::{DomBindings, DomConfig};
pub use error::WebError;
pub use runner::SceneRunner;

use std::cell::RefCell;

use lovefall_engine::{SceneConfig, SceneInput, VectorCanvas, Viewport, HEADER_FLOATS};
use wasm_bindgen::prelude::*;

/// The scene plus whatever it paints into.
enum Backend {
    /// Canvas 2D drawing; overlay changes go straight to the DOM.
    Browser {
        runner: SceneRunner<Canvas2d>,
        dom: DomBindings,
    },
    /// Tessellated vertices for a GPU host that reads linear memory.
    Headless(SceneRunner<VectorCanvas>),
}

thread_local! {
    static BACKEND: RefCell<Option<Backend>> = const { RefCell::new(None) };
}

/// Run `f` against the live backend. `None` before init.
fn with_backend<R>(f: impl FnOnce(&mut Backend) -> R) -> Option<R> {
    BACKEND.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(backend) => Some(f(backend)),
            None => {
                log::warn!("scene not initialized; call scene_init() first");
                None
            }
        }
    })
}

fn push_input(event: SceneInput) {
    with_backend(|backend| match backend {
        Backend::Browser { runner, .. } => runner.push_input(event),
        Backend::Headless(runner) => runner.push_input(event),
    });
}

fn install_hooks() {
    console_error_panic_hook::set_once();
    // A second init keeps the logger from the first one.
    let _ = console_log::init_with_level(log::Level::Info);
}

fn scene_config(json: Option<String>) -> Result<SceneConfig, WebError> {
    let mut config = match json {
        Some(json) => SceneConfig::from_json(&json)?,
        None => SceneConfig::default(),
    };
    if config.seed.is_none() {
        config.seed = Some((js_sys::Math::random() * u64::MAX as f64) as u64);
    }
    Ok(config)
}

fn init_browser(config_json: Option<String>, dom_json: Option<String>) -> Result<(), WebError> {
    let config = scene_config(config_json)?;
    let dom_config = match dom_json {
        Some(json) => DomConfig::from_json(&json).map_err(lovefall_engine::SceneError::from)?,
        None => DomConfig::default(),
    };

    let window = dom::window()?;
    let document = dom::document(&window)?;
    let (element, ctx) = dom::canvas(&document, &dom_config.canvas_id)?;
    let bindings = DomBindings::bind(&document, &dom_config)?;
    let viewport = dom::window_viewport(&window)?;

    let runner = SceneRunner::new(config, viewport, Canvas2d::new(element, ctx))?;

    dom::listen(bindings.envelope(), "click", || push_input(SceneInput::Open))?;
    dom::listen(bindings.close_button(), "click", || push_input(SceneInput::Close))?;
    let resize_window = window.clone();
    dom::listen(&window, "resize", move || match dom::window_viewport(&resize_window) {
        Ok(viewport) => push_input(SceneInput::Resize {
            width: viewport.width(),
            height: viewport.height(),
        }),
        Err(err) => log::warn!("ignoring resize: {err}"),
    })?;

    log::info!(
        "lovefall: {} particles on {}x{}",
        runner.field().len(),
        viewport.width(),
        viewport.height()
    );
    BACKEND.with(|cell| *cell.borrow_mut() = Some(Backend::Browser { runner, dom: bindings }));
    Ok(())
}

fn init_headless(width: f32, height: f32, config_json: Option<String>) -> Result<(), WebError> {
    let config = scene_config(config_json)?;
    let viewport = Viewport::new(width, height)?;
    let canvas = VectorCanvas::new(viewport, config.tessellation_tolerance);
    let mut runner = SceneRunner::new(config, viewport, canvas)?;
    runner.publish_header();

    log::info!("lovefall: headless {width}x{height}");
    BACKEND.with(|cell| *cell.borrow_mut() = Some(Backend::Headless(runner)));
    Ok(())
}

/// Bind the page's canvas and overlay elements and start the scene.
/// Both arguments are optional JSON objects; missing fields keep their defaults.
#[wasm_bindgen]
pub fn scene_init(config_json: Option<String>, dom_json: Option<String>) -> Result<(), JsValue> {
    install_hooks();
    init_browser(config_json, dom_json).map_err(|err| {
        log::error!("scene_init failed: {err}");
        err.into()
    })
}

/// Start the scene without a DOM; frames are tessellated into a vertex buffer.
#[wasm_bindgen]
pub fn scene_init_headless(
    width: f32,
    height: f32,
    config_json: Option<String>,
) -> Result<(), JsValue> {
    install_hooks();
    init_headless(width, height, config_json).map_err(|err| {
        log::error!("scene_init_headless failed: {err}");
        err.into()
    })
}

/// Advance and paint one frame. `dt` is in seconds.
#[wasm_bindgen]
pub fn scene_tick(dt: f32) {
    with_backend(|backend| match backend {
        Backend::Browser { runner, dom } => {
            runner.tick(dt);
            for change in runner.drain_class_changes() {
                dom.apply(&change);
            }
        }
        Backend::Headless(runner) => {
            runner.tick(dt);
            // Overlay state reaches the host through the header flags.
            runner.drain_class_changes();
            runner.publish_header();
        }
    });
}

#[wasm_bindgen]
pub fn scene_open() {
    push_input(SceneInput::Open);
}

#[wasm_bindgen]
pub fn scene_close() {
    push_input(SceneInput::Close);
}

#[wasm_bindgen]
pub fn scene_resize(width: f32, height: f32) {
    push_input(SceneInput::Resize { width, height });
}

// ---- Data accessors (headless backend) ----

#[wasm_bindgen]
pub fn get_frame_header_ptr() -> *const f32 {
    with_backend(|backend| match backend {
        Backend::Headless(runner) => runner.header_ptr(),
        Backend::Browser { .. } => std::ptr::null(),
    })
    .unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_frame_header_len() -> u32 {
    HEADER_FLOATS as u32
}

#[wasm_bindgen]
pub fn get_vector_vertices_ptr() -> *const f32 {
    with_backend(|backend| match backend {
        Backend::Headless(runner) => runner.vector_vertices_ptr(),
        Backend::Browser { .. } => std::ptr::null(),
    })
    .unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_vector_vertex_count() -> u32 {
    with_backend(|backend| match backend {
        Backend::Headless(runner) => runner.vector_vertex_count(),
        Backend::Browser { .. } => 0,
    })
    .unwrap_or(0)
}
