//! Thread-local scratch storage: an external convenience the codec
//! itself never reaches for. Parameterized by a `(Type, Slot)` pair so
//! distinct slots refer to independent per-thread cells — two callers
//! staging unrelated scratch buffers of the same `T` under different
//! `Slot`s never collide.
//!
//! A caller who wants to reuse a `Vec<u8>` across repeated [`crate::codec`]
//! calls on the same thread, instead of allocating one per call, can stash
//! it here and take it back out. Nothing in `Encode`/`Decode` consults this
//! module.
use std::cell::RefCell;
use std::collections::HashMap;
use std::marker::PhantomData;

thread_local! {
    static CELLS: RefCell<HashMap<(std::any::TypeId, u32), Box<dyn std::any::Any>>> =
        RefCell::new(HashMap::new());
}

/// A `(Type, Slot)`-addressed per-thread cell holding a `T`.
pub struct Slot<T: 'static> {
    slot: u32,
    _marker: PhantomData<T>,
}

impl<T: 'static> Slot<T> {
    /// Names a slot. Two `Slot<T>::new(n)` calls with the same `n` address
    /// the same per-thread cell; a different `n`, or a different `T`, does
    /// not.
    pub const fn new(slot: u32) -> Self {
        Slot {
            slot,
            _marker: PhantomData,
        }
    }

    /// Take this thread's value out of the slot, if one was left there.
    pub fn take(&self) -> Option<T> {
        CELLS.with(|cells| {
            cells
                .borrow_mut()
                .remove(&(std::any::TypeId::of::<T>(), self.slot))
                .map(|boxed| *boxed.downcast::<T>().expect("slot type mismatch"))
        })
    }

    /// Leave a value in this thread's slot, returning whatever was there
    /// before.
    pub fn replace(&self, value: T) -> Option<T> {
        CELLS.with(|cells| {
            cells
                .borrow_mut()
                .insert((std::any::TypeId::of::<T>(), self.slot), Box::new(value))
        })
        .map(|boxed| *boxed.downcast::<T>().expect("slot type mismatch"))
    }

    /// Take this thread's value if present, or produce and leave a fresh
    /// one via `default`.
    pub fn take_or_else(&self, default: impl FnOnce() -> T) -> T {
        self.take().unwrap_or_else(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn independent_slots_do_not_collide() {
        let a: Slot<Vec<u8>> = Slot::new(0);
        let b: Slot<Vec<u8>> = Slot::new(1);

        a.replace(vec![1, 2, 3]);
        b.replace(vec![9]);

        assert_eq!(a.take(), Some(vec![1, 2, 3]));
        assert_eq!(b.take(), Some(vec![9]));
        assert_eq!(a.take(), None);
    }

    #[test]
    fn independent_types_in_same_slot_number_do_not_collide() {
        let ints: Slot<u32> = Slot::new(0);
        let strs: Slot<String> = Slot::new(0);

        ints.replace(7);
        strs.replace("hi".to_string());

        assert_eq!(ints.take(), Some(7));
        assert_eq!(strs.take(), Some("hi".to_string()));
    }

    #[test]
    fn take_or_else_produces_default_when_empty() {
        let slot: Slot<Vec<u8>> = Slot::new(5);
        let v = slot.take_or_else(|| vec![0u8; 4]);
        assert_eq!(v, vec![0, 0, 0, 0]);
    }
}
