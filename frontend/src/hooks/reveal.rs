use gloo_timers::callback::Timeout;
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;
use yew_hooks::use_effect_once;

use crate::motion::{RevealAction, RevealGroup, RevealTransition};

#[derive(Debug, Error)]
enum ObserveError {
    #[error("no window")]
    NoWindow,
    #[error("IntersectionObserver is not supported")]
    Unsupported,
    #[error("reveal target is not mounted")]
    NotMounted,
    #[error("IntersectionObserver rejected its options: {0}")]
    Rejected(String),
}

/// Disconnects on drop so an unmounted section stops receiving callbacks.
struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Drives a [`RevealGroup`] of `len` items. Attach the returned `NodeRef` to
/// the element whose visibility triggers the group; style each item with
/// `group.item_style(i)`.
#[hook]
pub fn use_reveal(
    transition: RevealTransition,
    len: usize,
) -> (NodeRef, UseReducerHandle<RevealGroup>) {
    let node = use_node_ref();
    let group = use_reducer(move || RevealGroup::new(len, transition));

    {
        let node = node.clone();
        let group = group.clone();
        use_effect_once(move || {
            let mut start: Option<Timeout> = None;
            let mut observer: Option<ViewportObserver> = None;

            if let Some(delay_ms) = transition.trigger.start_delay_ms() {
                let group = group.clone();
                start = Some(Timeout::new(delay_ms, move || {
                    group.dispatch(RevealAction::Intersect);
                }));
            } else {
                let margin = transition.trigger.root_margin().unwrap_or_default();
                match observe(&node, &margin, group.clone()) {
                    Ok(viewport) => observer = Some(viewport),
                    Err(e) => {
                        log::warn!("{}, revealing immediately", e);
                        group.dispatch(RevealAction::FailOpen);
                    }
                }
            }

            move || drop((start, observer))
        });
    }

    {
        let fired = group.fired();
        let group = group.clone();
        use_effect_with_deps(
            move |fired| {
                // Dropping a Timeout cancels it, so unmount releases every pending settle.
                let timeouts: Vec<Timeout> = if *fired {
                    group
                        .cues()
                        .into_iter()
                        .map(|cue| {
                            let group = group.clone();
                            Timeout::new(cue.settle_after_ms, move || {
                                group.dispatch(RevealAction::Settle(cue.index));
                            })
                        })
                        .collect()
                } else {
                    Vec::new()
                };

                move || drop(timeouts)
            },
            fired,
        );
    }

    (node, group)
}

fn observe(
    node: &NodeRef,
    root_margin: &str,
    group: UseReducerHandle<RevealGroup>,
) -> Result<ViewportObserver, ObserveError> {
    let window = web_sys::window().ok_or(ObserveError::NoWindow)?;
    if !Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false) {
        return Err(ObserveError::Unsupported);
    }
    let element = node.cast::<Element>().ok_or(ObserveError::NotMounted)?;

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let entered = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());

            if entered {
                log::debug!("reveal group entered viewport");
                group.dispatch(RevealAction::Intersect);
                // Fires once; nothing left to watch for.
                observer.disconnect();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_root_margin(root_margin);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(|e| ObserveError::Rejected(format!("{:?}", e)))?;
    observer.observe(&element);

    Ok(ViewportObserver {
        observer,
        _callback: callback,
    })
}
