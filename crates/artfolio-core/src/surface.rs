//! Access to live UI state from the async flows.
//!
//! The flows in this crate (`contact::submit`, `notify::run_lifecycle`, ...)
//! never own the state they animate. They borrow it through a [`Surface`],
//! which the UI implements over its reactive signals and tests implement
//! over `Rc<RefCell<T>>`.

use std::cell::RefCell;
use std::rc::Rc;

/// Mutable access to a piece of state owned elsewhere.
///
/// Implementations must not hold a borrow across the call: each `update`
/// is a short, synchronous mutation.
pub trait Surface<T> {
    /// Run `f` against the state and return its result.
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R;

    /// Read-only convenience over [`Surface::update`].
    fn inspect<R>(&mut self, f: impl FnOnce(&T) -> R) -> R {
        self.update(|state| f(state))
    }
}

impl<T> Surface<T> for Rc<RefCell<T>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

impl<T, S: Surface<T>> Surface<T> for &mut S {
    fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        (**self).update(f)
    }
}
