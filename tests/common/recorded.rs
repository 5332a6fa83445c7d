use settings_kit::prelude::*;

/// Caller-owned value that counts writes made through its bindings
pub struct Recorded<T: Copy + 'static> {
    value: Rc<Cell<T>>,
    writes: Rc<Cell<usize>>,
}

impl<T: Copy + 'static> Recorded<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(Cell::new(value)),
            writes: Rc::new(Cell::new(0)),
        }
    }

    pub fn binding(&self) -> Binding<T> {
        let read = self.value.clone();
        let write = self.value.clone();
        let writes = self.writes.clone();
        Binding::new(
            move || read.get(),
            move |value| {
                write.set(value);
                writes.set(writes.get() + 1);
            },
        )
    }

    pub fn get(&self) -> T {
        self.value.get()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}
