use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_hooks::use_effect_once;

use crate::motion::scroll::{self, Detach, ScrollOffset};

/// Current page scroll offset, re-rendering the caller whenever it changes.
///
/// All callers share one window listener; it is removed when the last
/// subscribed component unmounts.
#[hook]
pub fn use_scroll_offset() -> ScrollOffset {
    let offset = use_state_eq(scroll::current);

    {
        let offset = offset.clone();
        use_effect_once(move || {
            let subscription = scroll::subscribe(
                {
                    let offset = offset.clone();
                    move |value| offset.set(value)
                },
                attach_window_scroll,
            );
            // Another component may have moved the offset since our first render.
            offset.set(scroll::current());

            move || drop(subscription)
        });
    }

    *offset
}

fn attach_window_scroll() -> Option<Detach> {
    let window = web_sys::window()?;

    let scroll_callback = Closure::<dyn Fn()>::new({
        let window = window.clone();
        move || scroll::publish(window.scroll_y().unwrap_or(0.0))
    });

    if let Err(e) = window
        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
    {
        log::warn!("could not listen for scroll events: {:?}", e);
        return None;
    }

    // Initial read, the page may load scrolled (anchor link, restored position).
    scroll::publish(window.scroll_y().unwrap_or(0.0));

    Some(Box::new(move || {
        if let Err(e) = window
            .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
        {
            log::warn!("could not remove scroll listener: {:?}", e);
        }
    }))
}
