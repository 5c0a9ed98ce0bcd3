//! Touch listeners feeding a [`SwipeRecognizer`].
//!
//! Registers `touchstart`, `touchmove` and `touchend` on an event target.
//! The move listener runs in the capture phase so a tracked swipe can stop
//! the event before scroll containers see it. `touchcancel` abandons the
//! running gesture without emitting and still returns to the idle state.

use std::cell::RefCell;
use std::rc::Rc;

use neighbour_nav_core::{Propagation, SwipeRecognizer, TouchPoint};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{EventTarget, TouchEvent, TouchList};

type Handler = Closure<dyn FnMut(TouchEvent)>;

/// Convert a DOM touch list into core touch points.
pub fn touch_points(list: &TouchList) -> Vec<TouchPoint> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|touch| {
            TouchPoint::new(
                touch.identifier(),
                f64::from(touch.client_x()),
                f64::from(touch.client_y()),
            )
        })
        .collect()
}

fn apply(event: &TouchEvent, propagation: Propagation) {
    if propagation == Propagation::Suppress {
        event.stop_immediate_propagation();
    }
}

/// Active listener registration. Dropping it removes the listeners.
pub struct SwipeListener {
    target: EventTarget,
    start: Handler,
    moved: Handler,
    end: Handler,
    cancel: Handler,
}

impl SwipeListener {
    /// Attach listeners to `target`.
    pub fn attach(
        target: EventTarget,
        recognizer: Rc<RefCell<SwipeRecognizer>>,
    ) -> Result<Self, JsValue> {
        let start = {
            let recognizer = Rc::clone(&recognizer);
            Closure::wrap(Box::new(move |event: TouchEvent| {
                match recognizer.try_borrow_mut() {
                    Ok(mut recognizer) => recognizer.touch_start(&touch_points(&event.touches())),
                    Err(_) => log::trace!("recognizer busy, dropping touchstart"),
                }
            }) as Box<dyn FnMut(TouchEvent)>)
        };

        let moved = {
            let recognizer = Rc::clone(&recognizer);
            Closure::wrap(Box::new(move |event: TouchEvent| {
                match recognizer.try_borrow_mut() {
                    Ok(mut recognizer) => {
                        let propagation = recognizer.touch_move(&touch_points(&event.touches()));
                        apply(&event, propagation);
                    }
                    Err(_) => log::trace!("recognizer busy, dropping touchmove"),
                }
            }) as Box<dyn FnMut(TouchEvent)>)
        };

        let end = {
            let recognizer = Rc::clone(&recognizer);
            Closure::wrap(Box::new(move |event: TouchEvent| {
                match recognizer.try_borrow_mut() {
                    Ok(mut recognizer) => {
                        let propagation = recognizer.touch_end(
                            &touch_points(&event.touches()),
                            &touch_points(&event.changed_touches()),
                        );
                        apply(&event, propagation);
                    }
                    Err(_) => log::trace!("recognizer busy, dropping touchend"),
                }
            }) as Box<dyn FnMut(TouchEvent)>)
        };

        let cancel = Closure::wrap(Box::new(move |event: TouchEvent| {
            match recognizer.try_borrow_mut() {
                Ok(mut recognizer) => {
                    let propagation = recognizer.touch_cancel(&touch_points(&event.touches()));
                    apply(&event, propagation);
                }
                Err(_) => log::trace!("recognizer busy, dropping touchcancel"),
            }
        }) as Box<dyn FnMut(TouchEvent)>);

        target.add_event_listener_with_callback("touchstart", start.as_ref().unchecked_ref())?;
        target.add_event_listener_with_callback_and_bool(
            "touchmove",
            moved.as_ref().unchecked_ref(),
            true,
        )?;
        target.add_event_listener_with_callback("touchend", end.as_ref().unchecked_ref())?;
        target.add_event_listener_with_callback("touchcancel", cancel.as_ref().unchecked_ref())?;

        Ok(Self {
            target,
            start,
            moved,
            end,
            cancel,
        })
    }

    fn detach(&self) {
        let removals = [
            self.target
                .remove_event_listener_with_callback("touchstart", self.start.as_ref().unchecked_ref()),
            self.target.remove_event_listener_with_callback_and_bool(
                "touchmove",
                self.moved.as_ref().unchecked_ref(),
                true,
            ),
            self.target
                .remove_event_listener_with_callback("touchend", self.end.as_ref().unchecked_ref()),
            self.target
                .remove_event_listener_with_callback("touchcancel", self.cancel.as_ref().unchecked_ref()),
        ];
        if removals.iter().any(Result::is_err) {
            log::warn!("failed to remove touch listeners");
        }
    }
}

impl Drop for SwipeListener {
    fn drop(&mut self) {
        self.detach();
    }
}
