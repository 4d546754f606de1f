//! Viewport width capability and the derived narrow signal.
//!
//! The host's width query and resize stream are process-wide browser state;
//! they sit behind [`ViewportHost`] so a mounted component observes them
//! through an injected capability and tests can drive synthetic resize
//! events without a display surface.

use crate::mode::NARROW_VIEWPORT_PX;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;

/// Releases a resize subscription. Called exactly once, on teardown.
pub type Unsubscribe = Box<dyn FnOnce() + Send + Sync>;

/// Injected viewport capability: width query plus resize notifications.
pub trait ViewportHost {
    /// Current viewport width in logical pixels.
    fn current_width(&self) -> f64;

    /// Subscribes to resize notifications; the callback receives the new
    /// width. The returned closure releases the subscription.
    fn on_change(&self, callback: Box<dyn Fn(f64) + Send + Sync>) -> Unsubscribe;
}

/// Whether the given width counts as narrow.
pub fn is_narrow_width(width: f64) -> bool {
    width < NARROW_VIEWPORT_PX
}

/// [`ViewportHost`] backed by the browser window.
///
/// Without a window the width reads as infinite and the subscription is a
/// no-op, so the narrow signal settles on one static evaluation.
#[derive(Clone, Copy, Default)]
pub struct BrowserViewport;

fn window_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(f64::INFINITY)
}

impl ViewportHost for BrowserViewport {
    fn current_width(&self) -> f64 {
        window_width()
    }

    fn on_change(&self, callback: Box<dyn Fn(f64) + Send + Sync>) -> Unsubscribe {
        let Some(win) = window() else {
            return Box::new(|| {});
        };
        let closure = Closure::wrap(Box::new(move || callback(window_width())) as Box<dyn FnMut()>);
        let _ = win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        // The window handle and the closure are not Send; parking them in
        // local storage keeps the returned unsubscribe closure compatible
        // with on_cleanup.
        let registration = StoredValue::new_local(Some((win, closure)));
        Box::new(move || {
            registration.update_value(|reg| {
                if let Some((win, closure)) = reg.take() {
                    let _ = win.remove_event_listener_with_callback(
                        "resize",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            });
        })
    }
}

/// Derives the narrow signal for one mounted instance.
///
/// Evaluates the width once synchronously, then re-evaluates on every resize
/// notification, writing the signal only when the boolean actually flips so
/// dependents re-render on threshold crossings, not on every resize event.
/// The subscription is released on unmount.
pub fn use_narrow_signal(host: &dyn ViewportHost) -> ReadSignal<bool> {
    let (narrow, set_narrow) = signal(is_narrow_width(host.current_width()));
    let unsubscribe = host.on_change(Box::new(move |width| {
        let next = is_narrow_width(width);
        if narrow.get_untracked() != next {
            log::debug!("narrow signal flipped to {}", next);
            set_narrow.set(next);
        }
    }));
    on_cleanup(move || unsubscribe());
    narrow
}
