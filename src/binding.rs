//! Two-way bindings to caller-owned state
//!
//! A [`Binding`] pairs a getter and a setter for one value that lives
//! outside the component tree. Controls read through the getter on every
//! render and write through the setter when the user interacts; they never
//! hold a copy of the value.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Accessor pair for a single piece of caller-owned state
pub struct Binding<T> {
    get: Rc<dyn Fn() -> T>,
    set: Rc<dyn Fn(T)>,
}

impl<T: 'static> Binding<T> {
    /// Create a binding from an explicit getter and setter
    pub fn new(get: impl Fn() -> T + 'static, set: impl Fn(T) + 'static) -> Self {
        Self {
            get: Rc::new(get),
            set: Rc::new(set),
        }
    }

    /// A binding that always reads `value` and discards writes
    pub fn constant(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(move || value.clone(), |_| {})
    }

    /// Read the current value
    pub fn get(&self) -> T {
        (self.get)()
    }

    /// Write a new value
    pub fn set(&self, value: T) {
        (self.set)(value)
    }
}

impl<T: Copy + 'static> Binding<T> {
    /// Bind to a shared cell; the binding keeps the cell alive
    pub fn from_cell(cell: &Rc<Cell<T>>) -> Self {
        let read = Rc::clone(cell);
        let write = Rc::clone(cell);
        Self::new(move || read.get(), move |value| write.set(value))
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            get: Rc::clone(&self.get),
            set: Rc::clone(&self.set),
        }
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Binding").field(&self.get()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cell_reads_and_writes_through() {
        let cell = Rc::new(Cell::new(3_i64));
        let binding = Binding::from_cell(&cell);

        assert_eq!(binding.get(), 3);
        binding.set(7);
        assert_eq!(cell.get(), 7);

        cell.set(11);
        assert_eq!(binding.get(), 11);
    }

    #[test]
    fn test_clone_shares_state() {
        let cell = Rc::new(Cell::new(false));
        let a = Binding::from_cell(&cell);
        let b = a.clone();

        a.set(true);
        assert!(b.get());
    }

    #[test]
    fn test_constant_ignores_writes() {
        let binding = Binding::constant(0.5_f64);
        binding.set(0.9);
        assert_eq!(binding.get(), 0.5);
    }

    #[test]
    fn test_custom_accessors() {
        let writes = Rc::new(Cell::new(0_usize));
        let counter = Rc::clone(&writes);
        let binding = Binding::new(|| 1_usize, move |_| counter.set(counter.get() + 1));

        binding.set(2);
        binding.set(3);
        assert_eq!(writes.get(), 2);
        assert_eq!(binding.get(), 1);
    }

    #[test]
    fn test_debug_shows_current_value() {
        let binding = Binding::constant(42_i64);
        assert_eq!(format!("{:?}", binding), "Binding(42)");
    }
}
