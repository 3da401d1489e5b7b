//! String interning for vocabulary words.
//!
//! Every variable's domain starts as a copy of the same word list, so we keep
//! one `Rc<str>` allocation per distinct word and let domains (and their
//! snapshots) share it.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// A vocabulary word; cheap to clone.
pub type Word = Rc<str>;

thread_local! {
    /// Thread-local interner cache.
    /// The solver is single-threaded, so no Mutex is needed.
    static INTERNER: RefCell<HashSet<Rc<str>>> = RefCell::new(HashSet::new());
}

/// Intern a string, returning a shared [`Word`].
///
/// If the string has been interned before, returns a cheap clone of the existing `Rc`.
pub fn intern(s: impl AsRef<str>) -> Word {
    let s = s.as_ref();

    INTERNER.with(|interner| {
        let mut cache = interner.borrow_mut();

        if let Some(existing) = cache.get(s) {
            return Rc::clone(existing);
        }

        let rc: Rc<str> = Rc::from(s);
        cache.insert(Rc::clone(&rc));
        rc
    })
}

/// Clear the interner cache
#[cfg(test)]
pub fn clear() {
    INTERNER.with(|interner| {
        interner.borrow_mut().clear();
    });
}
