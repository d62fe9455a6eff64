//! Interval driver for the simulated processing bar.
//!
//! No real work happens here: a fixed-interval timer walks a
//! [`ProgressTicker`](mediatools_core::ProgressTicker) to 100 and fires a
//! completion callback once. The driver owns the interval handle, so
//! starting a new run always cancels the previous one and a finished run
//! cannot tick again.

use yew::Callback;

/// Milliseconds between ticks.
pub const TICK_INTERVAL_MS: i32 = 200;

#[cfg(target_arch = "wasm32")]
mod active {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen::closure::Closure;

    pub(super) type IntervalId = Rc<Cell<Option<i32>>>;

    pub(super) fn clear_interval(id: &IntervalId) {
        if let Some(handle) = id.take() {
            crate::dom::window().clear_interval_with_handle(handle);
        }
    }

    /// A scheduled run: the interval id plus the closure kept alive for
    /// the browser to call.
    pub(super) struct ActiveRun {
        pub(super) interval_id: IntervalId,
        pub(super) _tick: Closure<dyn FnMut()>,
    }

    impl Drop for ActiveRun {
        fn drop(&mut self) {
            clear_interval(&self.interval_id);
        }
    }
}

/// Owns at most one in-flight simulated run.
#[derive(Default)]
pub struct ProgressDriver {
    #[cfg(target_arch = "wasm32")]
    active: Option<active::ActiveRun>,
}

impl ProgressDriver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a run is scheduled and has not yet completed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            self.active
                .as_ref()
                .is_some_and(|run| run.interval_id.get().is_some())
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            false
        }
    }

    /// Cancel any in-flight run. Idempotent; no tick fires after this
    /// returns.
    pub fn cancel(&mut self) {
        #[cfg(target_arch = "wasm32")]
        {
            self.active = None;
        }
    }

    /// Start a simulated run, cancelling any previous one first.
    ///
    /// `on_tick` receives the percentage after every tick (ending with
    /// 100); `on_complete` fires exactly once, after the interval has
    /// been cleared, so two rapid starts produce a single completion.
    pub fn start(&mut self, on_tick: Callback<u8>, on_complete: Callback<()>) {
        self.cancel();
        #[cfg(target_arch = "wasm32")]
        {
            use std::cell::{Cell, RefCell};
            use std::rc::Rc;

            use mediatools_core::ProgressTicker;
            use mediatools_core::progress::Tick;
            use wasm_bindgen::JsCast;
            use wasm_bindgen::closure::Closure;

            let interval_id: active::IntervalId = Rc::new(Cell::new(None));
            let ticker = Rc::new(RefCell::new(ProgressTicker::new()));
            let tick_id = Rc::clone(&interval_id);
            let tick = Closure::wrap(Box::new(move || {
                let step = ticker.borrow_mut().advance();
                match step {
                    Tick::Running(percent) => on_tick.emit(percent),
                    Tick::Complete => {
                        // Clear first so a queued tick cannot complete twice.
                        active::clear_interval(&tick_id);
                        on_tick.emit(100);
                        on_complete.emit(());
                    }
                    Tick::Finished => {}
                }
            }) as Box<dyn FnMut()>);

            match crate::dom::window().set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                TICK_INTERVAL_MS,
            ) {
                Ok(handle) => {
                    interval_id.set(Some(handle));
                    self.active = Some(active::ActiveRun {
                        interval_id,
                        _tick: tick,
                    });
                }
                Err(err) => {
                    log::error!(
                        "failed to schedule progress timer: {}",
                        crate::dom::js_error_message(&err)
                    );
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (on_tick, on_complete);
        }
    }
}
