//! `requestAnimationFrame` chain that idles when there is nothing to draw

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Runs `tick` once per display frame while it returns `true`.
///
/// After `tick` returns `false` the chain stops; `ensure_running` restarts it.
/// Dropping the loop cancels the pending frame and releases `tick`.
pub struct FrameLoop {
    callback: FrameCallback,
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn new(mut tick: impl FnMut() -> bool + 'static) -> Self {
        // The closure reschedules itself, so it needs a handle to its own slot
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let running = Rc::new(Cell::new(false));
        let pending = Rc::new(Cell::new(None));

        let next = callback.clone();
        let flag = running.clone();
        let handle = pending.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            handle.set(None);
            if !tick() {
                flag.set(false);
                return;
            }
            match schedule(&next) {
                Ok(id) => handle.set(id),
                Err(e) => {
                    log::error!("failed to schedule next frame: {:?}", e);
                    flag.set(false);
                }
            }
        }) as Box<dyn FnMut()>));

        Self {
            callback,
            running,
            pending,
        }
    }

    /// Start the chain unless a frame is already pending
    pub fn ensure_running(&self) -> Result<(), JsValue> {
        if self.running.get() {
            return Ok(());
        }
        self.running.set(true);
        match schedule(&self.callback) {
            Ok(id) => {
                self.pending.set(id);
                Ok(())
            }
            Err(e) => {
                self.running.set(false);
                Err(e)
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(window)) = (self.pending.take(), web_sys::window()) {
            if let Err(e) = window.cancel_animation_frame(id) {
                log::warn!("failed to cancel pending frame: {:?}", e);
            }
        }
        self.running.set(false);
        // Breaks the closure's reference to its own slot
        self.callback.borrow_mut().take();
    }
}

fn schedule(callback: &FrameCallback) -> Result<Option<i32>, JsValue> {
    let window = web_sys::window().ok_or("no global window")?;
    match callback.borrow().as_ref() {
        Some(closure) => Ok(Some(window.request_animation_frame(closure.as_ref().unchecked_ref())?)),
        None => Ok(None),
    }
}
