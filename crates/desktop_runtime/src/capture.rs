//! Scoped ownership of the document-level listeners a pointer gesture needs.
//!
//! A gesture installs its pointer-move/pointer-up listeners into an [`InputCapture`]. Dropping the
//! capture removes them, so ending a gesture, starting another, and unmounting the shell all
//! release listeners through the same path.

/// A listener registration that can be removed.
pub trait CaptureListener {
    fn release(self);
}

/// Listeners owned by one gesture. Released on drop.
pub struct InputCapture<L: CaptureListener> {
    listeners: Vec<L>,
}

impl<L: CaptureListener> InputCapture<L> {
    pub fn new(listeners: Vec<L>) -> Self {
        Self { listeners }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<L: CaptureListener> Drop for InputCapture<L> {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            listener.release();
        }
    }
}

/// Holds the capture of the gesture in progress, if any.
pub struct CaptureSlot<L: CaptureListener> {
    active: Option<InputCapture<L>>,
}

impl<L: CaptureListener> Default for CaptureSlot<L> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<L: CaptureListener> CaptureSlot<L> {
    /// Installs `capture`, releasing any stale capture first.
    pub fn acquire(&mut self, capture: InputCapture<L>) {
        self.active = None;
        self.active = Some(capture);
    }

    /// Releases the active capture. Returns whether one was held.
    pub fn release(&mut self) -> bool {
        self.active.take().is_some()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;

    struct CountingListener(Rc<Cell<u32>>);

    impl CaptureListener for CountingListener {
        fn release(self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn capture(released: &Rc<Cell<u32>>, count: usize) -> InputCapture<CountingListener> {
        InputCapture::new(
            (0..count)
                .map(|_| CountingListener(Rc::clone(released)))
                .collect(),
        )
    }

    #[test]
    fn dropping_capture_releases_every_listener() {
        let released = Rc::new(Cell::new(0));
        let held = capture(&released, 3);
        assert_eq!(held.len(), 3);
        drop(held);
        assert_eq!(released.get(), 3);
    }

    #[test]
    fn acquiring_new_capture_releases_stale_one_first() {
        let stale = Rc::new(Cell::new(0));
        let fresh = Rc::new(Cell::new(0));
        let mut slot = CaptureSlot::default();

        slot.acquire(capture(&stale, 2));
        slot.acquire(capture(&fresh, 2));
        assert_eq!(stale.get(), 2);
        assert_eq!(fresh.get(), 0);
        assert!(slot.is_active());
    }

    #[test]
    fn release_is_idempotent() {
        let released = Rc::new(Cell::new(0));
        let mut slot = CaptureSlot::default();
        slot.acquire(capture(&released, 2));

        assert!(slot.release());
        assert!(!slot.release());
        assert_eq!(released.get(), 2);
    }

    #[test]
    fn dropping_slot_releases_active_capture() {
        let released = Rc::new(Cell::new(0));
        {
            let mut slot = CaptureSlot::default();
            slot.acquire(capture(&released, 2));
        }
        assert_eq!(released.get(), 2);
    }
}
