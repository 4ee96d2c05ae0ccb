//! Runner - Rust-driven page wiring
//!
//! Owns the canvas, the DOM counters and three loops:
//! - frame loop:  requestAnimationFrame, step + draw every body
//! - spawn loop:  setInterval(spawn_interval_ms), spawn then autoclear
//! - stats loop:  setInterval(stats_interval_ms), recompute + publish
//!
//! `stop()` cancels all three and drops their callbacks.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::domain::config::WorldConfig;
use crate::domain::titles::pick_title;
use crate::simulation::{toggle_label, PositionPolicy, SimulationCore, Statistics, StatsSink};

use super::canvas::CanvasRenderer;
use super::dom::{
    set_text, DomStatsSink, AUTOCLEAR_TOGGLE_ID, AUTOSPAWN_TOGGLE_ID, GRAVITY_TOGGLE_ID, TITLE_ID,
};

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A `setInterval` registration kept alive with its callback
struct IntervalLoop {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl IntervalLoop {
    fn start<F>(window: &Window, period_ms: u32, tick: F) -> Result<Self, JsValue>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::<dyn FnMut()>::new(tick);
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            period_ms.min(i32::MAX as u32) as i32,
        )?;
        Ok(Self {
            handle,
            _callback: callback,
        })
    }

    fn cancel(self, window: &Window) {
        window.clear_interval_with_handle(self.handle);
    }
}

fn js_err(message: impl AsRef<str>) -> JsValue {
    JsValue::from_str(message.as_ref())
}

#[wasm_bindgen]
pub struct Runner {
    window: Window,
    document: Document,
    core: Rc<RefCell<SimulationCore>>,
    renderer: Rc<RefCell<CanvasRenderer>>,
    stats_sink: Rc<RefCell<DomStatsSink>>,

    running: Rc<Cell<bool>>,
    frame_slot: FrameSlot,
    frame_request: Rc<Cell<Option<i32>>>,
    spawn_loop: Option<IntervalLoop>,
    stats_loop: Option<IntervalLoop>,
}

#[wasm_bindgen]
impl Runner {
    /// Bind to the canvas with id `canvas_id`. `config_json` is an optional
    /// camelCase `WorldConfig`; invalid configs are rejected here.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config_json: Option<String>) -> Result<Runner, JsValue> {
        let window = web_sys::window().ok_or_else(|| js_err("no global window"))?;
        let document = window.document().ok_or_else(|| js_err("window has no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| js_err(format!("canvas #{} not found", canvas_id)))?
            .dyn_into()
            .map_err(|_| js_err(format!("#{} is not a canvas", canvas_id)))?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| js_err("2d context unavailable"))?
            .dyn_into()
            .map_err(|_| js_err("unexpected 2d context type"))?;

        let config = match config_json {
            Some(json) => WorldConfig::from_json(&json).map_err(|e| {
                console_warn!("ballpit: config rejected: {}", e);
                js_err(e.to_string())
            })?,
            None => WorldConfig::default(),
        };
        let core = SimulationCore::new(config).map_err(|e| js_err(e.to_string()))?;

        let renderer = CanvasRenderer::new(ctx, canvas.width() as f64, canvas.height() as f64);
        let stats_sink = DomStatsSink::new(document.clone());

        Ok(Runner {
            window,
            document,
            core: Rc::new(RefCell::new(core)),
            renderer: Rc::new(RefCell::new(renderer)),
            stats_sink: Rc::new(RefCell::new(stats_sink)),
            running: Rc::new(Cell::new(false)),
            frame_slot: Rc::new(RefCell::new(None)),
            frame_request: Rc::new(Cell::new(None)),
            spawn_loop: None,
            stats_loop: None,
        })
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.running.get()
    }

    /// Start the frame loop and both cadences. Spawn and stats fire once
    /// immediately, then on their periods. No-op if already running.
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.running.get() {
            return Ok(());
        }
        self.running.set(true);

        let title = pick_title(self.core.borrow_mut().rng_mut());
        set_text(&self.document, TITLE_ID, title);
        self.sync_toggle_labels();

        let (spawn_ms, stats_ms) = {
            let core = self.core.borrow();
            (core.config().spawn_interval_ms, core.config().stats_interval_ms)
        };

        // === SPAWN CADENCE ===
        self.core.borrow_mut().spawn_tick();
        let core = self.core.clone();
        self.spawn_loop = Some(IntervalLoop::start(&self.window, spawn_ms, move || {
            core.borrow_mut().spawn_tick();
        })?);

        // === STATS CADENCE ===
        self.publish_statistics();
        let core = self.core.clone();
        let sink = self.stats_sink.clone();
        self.stats_loop = Some(IntervalLoop::start(&self.window, stats_ms, move || {
            let stats = core.borrow_mut().recompute_statistics();
            sink.borrow_mut().publish(&stats);
        })?);

        // === FRAME LOOP ===
        self.start_frame_loop()?;

        console_log!(
            "ballpit: runner started (spawn every {} ms, stats every {} ms)",
            spawn_ms,
            stats_ms
        );
        Ok(())
    }

    /// Cancel every loop. The population is kept; `start()` resumes.
    pub fn stop(&mut self) {
        if !self.running.replace(false) {
            return;
        }

        if let Some(id) = self.frame_request.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // Dropping the frame closure breaks its self-reference
        self.frame_slot.borrow_mut().take();

        if let Some(spawn) = self.spawn_loop.take() {
            spawn.cancel(&self.window);
        }
        if let Some(stats) = self.stats_loop.take() {
            stats.cancel(&self.window);
        }

        console_log!("ballpit: runner stopped at frame {}", self.core.borrow().frame());
    }

    // === TOGGLES ===

    pub fn toggle_gravity(&mut self) -> String {
        let label = self.core.borrow_mut().toggle_gravity();
        set_text(&self.document, GRAVITY_TOGGLE_ID, &label);
        label
    }

    pub fn toggle_autospawn(&mut self) -> String {
        let label = self.core.borrow_mut().toggle_autospawn();
        set_text(&self.document, AUTOSPAWN_TOGGLE_ID, &label);
        label
    }

    pub fn toggle_autoclear(&mut self) -> String {
        let label = self.core.borrow_mut().toggle_autoclear();
        set_text(&self.document, AUTOCLEAR_TOGGLE_ID, &label);
        label
    }

    pub fn set_max_bodies(&mut self, max_bodies: u32) -> Result<(), JsValue> {
        self.core
            .borrow_mut()
            .set_max_bodies(max_bodies as usize)
            .map_err(|e| js_err(e.to_string()))
    }

    // === ACTIONS ===

    pub fn spawn_ring(&mut self) {
        self.core.borrow_mut().spawn_ring();
    }

    pub fn center_bodies(&mut self) {
        self.core.borrow_mut().set_all_positions(PositionPolicy::Center);
    }

    pub fn scatter_bodies(&mut self) {
        self.core.borrow_mut().set_all_positions(PositionPolicy::Scatter);
    }

    pub fn clear(&mut self) {
        self.core.borrow_mut().clear();
        self.publish_statistics();
    }

    pub fn statistics(&self) -> Statistics {
        self.core.borrow_mut().recompute_statistics()
    }
}

impl Runner {
    fn start_frame_loop(&mut self) -> Result<(), JsValue> {
        let slot = self.frame_slot.clone();
        let window = self.window.clone();
        let core = self.core.clone();
        let renderer = self.renderer.clone();
        let running = self.running.clone();
        let request = self.frame_request.clone();

        *self.frame_slot.borrow_mut() = Some(Closure::new(move || {
            if !running.get() {
                return;
            }
            core.borrow_mut().frame_with(&mut *renderer.borrow_mut());

            if let Some(callback) = slot.borrow().as_ref() {
                request.set(window.request_animation_frame(callback.as_ref().unchecked_ref()).ok());
            }
        }));

        let first = match self.frame_slot.borrow().as_ref() {
            Some(callback) => self
                .window
                .request_animation_frame(callback.as_ref().unchecked_ref())?,
            None => return Ok(()),
        };
        self.frame_request.set(Some(first));
        Ok(())
    }

    fn publish_statistics(&self) {
        let stats = self.core.borrow_mut().recompute_statistics();
        self.stats_sink.borrow_mut().publish(&stats);
    }

    fn sync_toggle_labels(&self) {
        let config = self.core.borrow().config().clone();
        set_text(&self.document, GRAVITY_TOGGLE_ID, &toggle_label("Gravity", config.gravity_enabled));
        set_text(&self.document, AUTOSPAWN_TOGGLE_ID, &toggle_label("Autospawn", config.autospawn_enabled));
        set_text(&self.document, AUTOCLEAR_TOGGLE_ID, &toggle_label("Autoclear", config.autoclear_enabled));
    }
}

impl Drop for Runner {
    fn drop(&mut self) {
        self.stop();
    }
}
