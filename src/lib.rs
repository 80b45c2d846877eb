use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlCanvasElement, HtmlElement, PointerEvent, Window};

pub mod animation;
pub mod config;
pub mod flower;
pub mod math;
pub mod palette;
pub mod particles;
pub mod render;
pub mod scheduler;

pub use animation::Garden;
pub use config::GardenParams;

use render::{CanvasSurface, Viewport};
use scheduler::FrameLoop;

/// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

/// State reachable from the frame callback and the event handlers
struct Shared {
    garden: RefCell<Garden>,
    surface: RefCell<CanvasSurface>,
    hint: RefCell<Option<HtmlElement>>,
}

impl Shared {
    fn tick(&self) -> bool {
        let now = now();
        let mut surface = self.surface.borrow_mut();
        self.garden.borrow_mut().frame(&mut *surface, now)
    }

    fn plant(&self, x: f64, y: f64) {
        self.garden.borrow_mut().plant(x, y, now());
        self.set_hint_opacity("0");
    }

    fn clear(&self) {
        let mut surface = self.surface.borrow_mut();
        let mut garden = self.garden.borrow_mut();
        garden.clear();
        garden.repaint(&mut *surface, now());
        self.set_hint_opacity("1");
    }

    fn resize(&self, viewport: Viewport) {
        let mut surface = self.surface.borrow_mut();
        if let Err(e) = surface.resize(&viewport) {
            log::warn!("{}", e);
        }
        let mut garden = self.garden.borrow_mut();
        garden.resize(viewport);
        garden.repaint(&mut *surface, now());
    }

    fn set_hint_opacity(&self, opacity: &str) {
        if let Some(hint) = self.hint.borrow().as_ref() {
            if let Err(e) = hint.style().set_property("opacity", opacity) {
                log::warn!("failed to update hint: {:?}", e);
            }
        }
    }
}

/// DOM listener removed from its target when dropped
struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn install(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {} listener: {:?}", self.event, e);
        }
    }
}

/// Flower garden mounted on a canvas, exposed to JavaScript.
///
/// Freeing it from JavaScript stops the animation and detaches its listeners.
#[wasm_bindgen]
pub struct FlowerCanvas {
    shared: Rc<Shared>,
    frames: Rc<FrameLoop>,
    _listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl FlowerCanvas {
    /// Mount on `canvas`, size it to the window and start animating
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<FlowerCanvas, JsValue> {
        let params = GardenParams::bundled().map_err(|e| JsValue::from_str(&e))?;
        Self::mount(canvas, params)
    }

    /// Element faded out on the first flower and back in after clear
    #[wasm_bindgen]
    pub fn set_hint(&self, hint: HtmlElement) {
        *self.shared.hint.borrow_mut() = Some(hint);
    }

    /// Plant a flower at canvas-relative CSS pixel coordinates
    #[wasm_bindgen]
    pub fn plant(&self, x: f64, y: f64) -> Result<(), JsValue> {
        self.shared.plant(x, y);
        self.frames.ensure_running()
    }

    /// Remove all flowers and restart the palette cadence
    #[wasm_bindgen]
    pub fn clear(&self) {
        self.shared.clear();
    }

    #[wasm_bindgen]
    pub fn flower_count(&self) -> usize {
        self.shared.garden.borrow().flowers().len()
    }

    /// Whether a frame is currently scheduled
    #[wasm_bindgen]
    pub fn is_animating(&self) -> bool {
        self.frames.is_running()
    }

    /// Background theme for this session ("purple" or "blue")
    #[wasm_bindgen]
    pub fn theme(&self) -> String {
        self.shared.garden.borrow().theme().name().to_string()
    }
}

impl FlowerCanvas {
    fn mount(canvas: HtmlCanvasElement, params: GardenParams) -> Result<FlowerCanvas, JsValue> {
        let window = web_sys::window().ok_or("no global window")?;
        let viewport = window_viewport(&window);

        let mut surface = CanvasSurface::new(canvas.clone()).map_err(|e| JsValue::from_str(&e))?;
        surface.resize(&viewport).map_err(|e| JsValue::from_str(&e))?;

        let garden = Garden::new(viewport, params, session_seed());
        log::info!(
            "flower canvas mounted at {}x{} ({} theme, {} fireflies)",
            viewport.width,
            viewport.height,
            garden.theme().name(),
            garden.fireflies().count()
        );

        let shared = Rc::new(Shared {
            garden: RefCell::new(garden),
            surface: RefCell::new(surface),
            hint: RefCell::new(None),
        });

        let frames = {
            let shared = shared.clone();
            Rc::new(FrameLoop::new(move || shared.tick()))
        };

        let listeners = vec![
            install_pointer_handler(&canvas, &shared, &frames)?,
            install_resize_handler(&window, &shared)?,
        ];

        // Fireflies animate even before the first flower
        frames.ensure_running()?;

        Ok(Self {
            shared,
            frames,
            _listeners: listeners,
        })
    }
}

fn install_pointer_handler(
    canvas: &HtmlCanvasElement,
    shared: &Rc<Shared>,
    frames: &Rc<FrameLoop>,
) -> Result<Listener, JsValue> {
    let shared = shared.clone();
    let frames = frames.clone();
    let target = canvas.clone();

    Listener::install(canvas, "pointerdown", move |event: Event| {
        event.prevent_default();
        let Some(event) = event.dyn_ref::<PointerEvent>() else {
            return;
        };
        let rect = target.get_bounding_client_rect();
        let x = event.client_x() as f64 - rect.left();
        let y = event.client_y() as f64 - rect.top();

        shared.plant(x, y);
        if let Err(e) = frames.ensure_running() {
            log::error!("failed to start animation: {:?}", e);
        }
    })
}

fn install_resize_handler(window: &Window, shared: &Rc<Shared>) -> Result<Listener, JsValue> {
    let shared = shared.clone();

    Listener::install(window, "resize", move |_: Event| {
        if let Some(window) = web_sys::window() {
            shared.resize(window_viewport(&window));
        }
    })
}

fn window_viewport(window: &Window) -> Viewport {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(width, height, window.device_pixel_ratio())
}

/// High-resolution clock in ms
fn now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

fn session_seed() -> u64 {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (hi << 32) | lo
}
