//! Timer-backed debouncing on top of the core `Debouncer`.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use tutor_core::Debouncer;
use web_time::{Duration, Instant};

/// Wrap `callback` so bursts of calls collapse into one.
///
/// The callback runs `wait_ms` after the most recent call, with that call's
/// value. Dropping the returned closure cancels a pending run.
pub fn debounce<T, F>(wait_ms: u32, callback: F) -> impl FnMut(T)
where
    T: 'static,
    F: FnMut(T) + 'static,
{
    let debouncer = Rc::new(RefCell::new(Debouncer::new(Duration::from_millis(
        wait_ms.into(),
    ))));
    let callback = Rc::new(RefCell::new(callback));
    let mut timer: Option<Timeout> = None;

    move |value: T| {
        debouncer.borrow_mut().call(value, Instant::now());

        let debouncer = debouncer.clone();
        let callback = callback.clone();
        let next = Timeout::new(wait_ms, move || {
            let pending = debouncer.borrow_mut().flush();
            if let Some(value) = pending {
                (callback.borrow_mut())(value);
            }
        });
        if let Some(previous) = timer.replace(next) {
            let _ = previous.cancel();
        }
    }
}
