//! Page-wide scroll suspension shared by every overlay.
//!
//! The body stays locked while at least one [`ScrollLock`] is alive: the first
//! guard sets `overflow: hidden`, the last one dropped restores it.

use std::cell::Cell;

thread_local! {
    static HOLDERS: Cell<usize> = Cell::new(0);
}

#[must_use = "the page unlocks as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ScrollLock {
    _private: (),
}

impl ScrollLock {
    pub fn acquire() -> Self {
        HOLDERS.with(|holders| {
            let count = holders.get();
            if count == 0 {
                apply(true);
            }
            holders.set(count + 1);
        });
        Self { _private: () }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        HOLDERS.with(|holders| {
            let count = holders.get().saturating_sub(1);
            holders.set(count);
            if count == 0 {
                apply(false);
            }
        });
    }
}

#[cfg(test)]
pub fn is_locked() -> bool {
    HOLDERS.with(|holders| holders.get() > 0)
}

#[cfg(target_arch = "wasm32")]
fn apply(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        log::warn!("No document body, scroll lock not applied");
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(err) = result {
        log::warn!("Failed to update body overflow: {:?}", err);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply(_locked: bool) {}
