use std::cell::{Cell, RefCell};

/// Token returned by `subscribe`, used to remove the listener again
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Subscription(u64);

/// A value holder that notifies registered listeners synchronously on
/// every change, in subscription order. Single-threaded by design; a
/// listener must not mutate the observable it is subscribed to.
pub struct Observable<T> {
    value: RefCell<T>,
    listeners: RefCell<Vec<(Subscription, Box<dyn FnMut(&T)>)>>,
    next_token: Cell<u64>,
}

impl<T: Clone> Observable<T> {
    pub fn new(initial: T) -> Self {
        Self {
            value: RefCell::new(initial),
            listeners: RefCell::new(Vec::new()),
            next_token: Cell::new(0),
        }
    }

    /// Snapshot of the current value
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Store a new value, then notify every listener with it
    pub fn set(&self, value: T) {
        *self.value.borrow_mut() = value.clone();
        for (_, listener) in self.listeners.borrow_mut().iter_mut() {
            listener(&value);
        }
    }

    /// Register a change listener
    pub fn subscribe(&self, listener: impl FnMut(&T) + 'static) -> Subscription {
        let token = Subscription(self.next_token.get());
        self.next_token.set(self.next_token.get() + 1);
        self.listeners.borrow_mut().push((token, Box::new(listener)));
        token
    }

    /// Remove a previously registered listener
    pub fn unsubscribe(&self, token: Subscription) {
        self.listeners.borrow_mut().retain(|(t, _)| *t != token);
    }
}

/// A payload-less event channel with a monotonic emission counter.
/// Push-style consumers subscribe; pull-style consumers remember the
/// last count they handled and drain the difference.
pub struct EventSignal {
    emitted: Cell<u64>,
    listeners: RefCell<Vec<(Subscription, Box<dyn FnMut()>)>>,
    next_token: Cell<u64>,
}

impl EventSignal {
    pub fn new() -> Self {
        Self {
            emitted: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
            next_token: Cell::new(0),
        }
    }

    /// Emit one event: bump the counter, then notify listeners
    pub fn emit(&self) {
        self.emitted.set(self.emitted.get() + 1);
        for (_, listener) in self.listeners.borrow_mut().iter_mut() {
            listener();
        }
    }

    /// Total number of emissions so far
    pub fn count(&self) -> u64 {
        self.emitted.get()
    }

    pub fn subscribe(&self, listener: impl FnMut() + 'static) -> Subscription {
        let token = Subscription(self.next_token.get());
        self.next_token.set(self.next_token.get() + 1);
        self.listeners.borrow_mut().push((token, Box::new(listener)));
        token
    }

    pub fn unsubscribe(&self, token: Subscription) {
        self.listeners.borrow_mut().retain(|(t, _)| *t != token);
    }
}

impl Default for EventSignal {
    fn default() -> Self {
        Self::new()
    }
}
