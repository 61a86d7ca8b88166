//! Process-wide scroll offset.
//!
//! One registry per thread holds the last published offset and the active
//! listeners. The host signal is attached when the first listener subscribes
//! and detached when the last [`ScrollSubscription`] is dropped, so a page
//! view never leaves a listener behind after unmount.

use std::cell::RefCell;
use std::rc::Rc;

/// Pixels scrolled from the top of the page. Always finite and `>= 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct ScrollOffset(f64);

impl ScrollOffset {
    pub const TOP: ScrollOffset = ScrollOffset(0.0);

    /// Non-finite or negative readings (overscroll bounce, missing host value) become 0.
    pub fn new(raw: f64) -> Self {
        if raw.is_finite() && raw > 0.0 {
            Self(raw)
        } else {
            Self::TOP
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// Undoes whatever `attach` connected.
pub type Detach = Box<dyn FnOnce()>;

type Listener = Rc<dyn Fn(ScrollOffset)>;

#[derive(Default)]
struct ScrollRegistry {
    offset: ScrollOffset,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    detach: Option<Detach>,
}

thread_local! {
    static SCROLL: RefCell<ScrollRegistry> = RefCell::new(ScrollRegistry::default());
}

/// Keeps a listener registered until dropped.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct ScrollSubscription {
    id: u64,
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        let detach = SCROLL.with(|registry| {
            let mut registry = registry.borrow_mut();
            registry.listeners.retain(|(id, _)| *id != self.id);
            if registry.listeners.is_empty() {
                registry.detach.take()
            } else {
                None
            }
        });

        if let Some(detach) = detach {
            log::debug!("last scroll subscriber gone, detaching scroll signal");
            detach();
        }
    }
}

pub fn current() -> ScrollOffset {
    SCROLL.with(|registry| registry.borrow().offset)
}

#[cfg(test)]
pub fn subscriber_count() -> usize {
    SCROLL.with(|registry| registry.borrow().listeners.len())
}

/// Stores a new reading and notifies listeners if the value changed.
pub fn publish(raw: f64) {
    let offset = ScrollOffset::new(raw);

    let listeners: Vec<Listener> = SCROLL.with(|registry| {
        let mut registry = registry.borrow_mut();
        if registry.offset == offset {
            return Vec::new();
        }
        registry.offset = offset;
        registry.listeners.iter().map(|(_, l)| l.clone()).collect()
    });

    // Called outside the borrow: listeners may re-render and (un)subscribe.
    for listener in listeners {
        listener(offset);
    }
}

/// Registers `listener`. The first subscriber runs `attach` to connect the
/// host scroll signal; `None` from `attach` means there is no signal and the
/// offset stays at its last value (0 on a fresh page).
pub fn subscribe<F, A>(listener: F, attach: A) -> ScrollSubscription
where
    F: Fn(ScrollOffset) + 'static,
    A: FnOnce() -> Option<Detach>,
{
    let (id, first) = SCROLL.with(|registry| {
        let mut registry = registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Rc::new(listener)));
        (id, registry.listeners.len() == 1)
    });

    if first {
        // attach may publish the initial reading, so no borrow is held here.
        match attach() {
            Some(detach) => SCROLL.with(|registry| registry.borrow_mut().detach = Some(detach)),
            None => log::warn!("scroll signal unavailable, offset stays at {}", current().get()),
        }
    }

    ScrollSubscription { id }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    #[test]
    fn sanitizes_raw_readings() {
        assert_eq!(ScrollOffset::new(-12.0), ScrollOffset::TOP);
        assert_eq!(ScrollOffset::new(f64::NAN), ScrollOffset::TOP);
        assert_eq!(ScrollOffset::new(f64::INFINITY), ScrollOffset::TOP);
        assert_eq!(ScrollOffset::new(42.5).get(), 42.5);
    }

    #[test]
    fn defaults_to_top_without_a_signal() {
        let _sub = subscribe(|_| {}, || None);
        assert_eq!(current(), ScrollOffset::TOP);
        assert_eq!(subscriber_count(), 1);
    }

    #[test]
    fn attaches_once_and_detaches_with_last_subscriber() {
        let attached = Rc::new(Cell::new(0));
        let detached = Rc::new(Cell::new(0));

        let attach = || {
            let attached = attached.clone();
            let detached = detached.clone();
            move || -> Option<Detach> {
                attached.set(attached.get() + 1);
                Some(Box::new(move || detached.set(detached.get() + 1)))
            }
        };

        let first = subscribe(|_| {}, attach());
        let second = subscribe(|_| {}, attach());
        assert_eq!(attached.get(), 1);

        drop(first);
        assert_eq!(detached.get(), 0);
        drop(second);
        assert_eq!(detached.get(), 1);
        assert_eq!(subscriber_count(), 0);

        let _again = subscribe(|_| {}, attach());
        assert_eq!(attached.get(), 2);
    }

    #[test]
    fn notifies_on_change_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let _sub = subscribe(
            {
                let seen = seen.clone();
                move |offset: ScrollOffset| seen.borrow_mut().push(offset.get())
            },
            || None,
        );

        publish(120.0);
        publish(120.0);
        publish(-5.0);
        publish(450.0);

        assert_eq!(*seen.borrow(), vec![120.0, 0.0, 450.0]);
        assert_eq!(current().get(), 450.0);
    }

    #[test]
    fn attach_can_publish_initial_reading() {
        let _sub = subscribe(|_| {}, || {
            publish(300.0);
            None
        });
        assert_eq!(current().get(), 300.0);
    }

    #[test]
    fn listener_may_unsubscribe_itself() {
        let slot: Rc<RefCell<Option<ScrollSubscription>>> = Rc::new(RefCell::new(None));
        let sub = subscribe(
            {
                let slot = slot.clone();
                move |_| {
                    slot.borrow_mut().take();
                }
            },
            || None,
        );
        *slot.borrow_mut() = Some(sub);

        publish(10.0);
        assert_eq!(subscriber_count(), 0);
    }
}
