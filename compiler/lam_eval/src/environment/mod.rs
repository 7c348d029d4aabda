//! Lexical environments.
//!
//! An environment is a persistent linked chain of frames, one binding per
//! frame. Extending an environment layers a new frame on top and never
//! touches the frames below, so every closure keeps seeing exactly the
//! bindings that existed when it was created.
//!
//! The one exception to "frames are immutable" is the write-once slot used
//! by top-level assignments: the frame is created empty ([`Environment::reserve`]),
//! the right-hand side is evaluated in it, and only then is the slot filled
//! ([`Environment::initialize`]). A closure created by the right-hand side
//! captures the reserved frame and so sees its own definition once the slot
//! is filled. Until then lookups pass over the empty slot as if it were not
//! there.
//!
//! An environment may also carry a fallback environment, consulted only when
//! no frame of the chain binds a name. Applying a quote uses it to make the
//! bindings of the running statement visible to the quoted text.

use std::cell::OnceCell;
use std::fmt;
use std::rc::Rc;

use lam_ir::Name;

use crate::Value;

struct Frame {
    name: Name,
    slot: OnceCell<Value>,
    parent: Environment,
}

/// A chain of bindings, nearest first. Cloning is O(1).
#[derive(Clone, Default)]
pub struct Environment {
    head: Option<Rc<Frame>>,
    fallback: Option<Rc<Environment>>,
}

impl Environment {
    /// The environment with no bindings.
    pub fn new() -> Self {
        Environment {
            head: None,
            fallback: None,
        }
    }

    /// The same chain, with `fallback` consulted for names it does not bind.
    ///
    /// Replaces any fallback this environment already had. Environments
    /// extended from the result keep the fallback.
    #[must_use]
    pub fn with_fallback(&self, fallback: &Environment) -> Self {
        Environment {
            head: self.head.clone(),
            fallback: Some(Rc::new(fallback.clone())),
        }
    }

    /// A new environment with `name` bound to `value` on top of this one.
    #[must_use]
    pub fn bind(&self, name: Name, value: Value) -> Self {
        self.push(name, OnceCell::from(value))
    }

    /// A new environment with an empty slot for `name` on top of this one.
    ///
    /// Fill the slot with [`initialize`](Self::initialize).
    #[must_use]
    pub fn reserve(&self, name: Name) -> Self {
        self.push(name, OnceCell::new())
    }

    /// Fill the slot of the nearest frame.
    ///
    /// Returns `false` (and changes nothing) when the environment is empty
    /// or its nearest slot is already filled.
    pub fn initialize(&self, value: Value) -> bool {
        match &self.head {
            Some(frame) => frame.slot.set(value).is_ok(),
            None => false,
        }
    }

    /// The value bound to `name` in the nearest filled frame, then in the
    /// fallback.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        let mut env = self;
        loop {
            if let Some(value) = env.lookup_chain(name) {
                return Some(value);
            }
            env = env.fallback.as_deref()?;
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Whether both environments are the same chain with the same fallback.
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        fn same<T>(a: Option<&Rc<T>>, b: Option<&Rc<T>>) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
        }
        same(self.head.as_ref(), other.head.as_ref())
            && same(self.fallback.as_ref(), other.fallback.as_ref())
    }

    fn lookup_chain(&self, name: &str) -> Option<Value> {
        let mut current = self.head.as_deref();
        while let Some(frame) = current {
            if frame.name.as_str() == name {
                if let Some(value) = frame.slot.get() {
                    return Some(value.clone());
                }
            }
            current = frame.parent.head.as_deref();
        }
        None
    }

    fn push(&self, name: Name, slot: OnceCell<Value>) -> Self {
        Environment {
            head: Some(Rc::new(Frame {
                name,
                slot,
                parent: self.clone(),
            })),
            fallback: self.fallback.clone(),
        }
    }
}

// Unlink frames one at a time so dropping a long chain does not recurse
// once per frame.
impl Drop for Frame {
    fn drop(&mut self) {
        let mut next = self.parent.head.take();
        while let Some(rc) = next {
            match Rc::try_unwrap(rc) {
                Ok(mut frame) => next = frame.parent.head.take(),
                Err(_) => break,
            }
        }
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut current = self.head.as_deref();
        while let Some(frame) = current {
            if frame.slot.get().is_some() {
                list.entry(&format_args!("{}", frame.name));
            } else {
                list.entry(&format_args!("{}?", frame.name));
            }
            current = frame.parent.head.as_deref();
        }
        if self.fallback.is_some() {
            list.entry(&format_args!(".."));
        }
        list.finish()
    }
}
