//! Change/start/end notifications.

/// Notification kinds raised by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlEvent {
    /// The camera moved during `update()` (or `reset()` ran).
    Change,
    /// A drag, touch, or wheel gesture began.
    Start,
    /// A drag, touch, or wheel gesture ended.
    End,
}

/// Handle returned by [`EventDispatcher::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(ControlEvent)>;

/// Synchronous fan-out of [`ControlEvent`]s to registered callbacks.
#[derive(Default)]
pub struct EventDispatcher {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl EventDispatcher {
    /// Dispatcher with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`; it runs for every event until removed.
    pub fn add_listener(
        &mut self,
        listener: impl FnMut(ControlEvent) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Unregister a listener. Returns whether it was registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Deliver `event` to every listener, in registration order.
    pub fn dispatch(&mut self, event: ControlEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn listeners_receive_events_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut dispatcher = EventDispatcher::new();
        let sink = Rc::clone(&log);
        let _ = dispatcher.add_listener(move |e| sink.borrow_mut().push(e));

        dispatcher.dispatch(ControlEvent::Start);
        dispatcher.dispatch(ControlEvent::Change);
        dispatcher.dispatch(ControlEvent::End);

        assert_eq!(*log.borrow(), vec![
            ControlEvent::Start,
            ControlEvent::Change,
            ControlEvent::End
        ]);
    }

    #[test]
    fn removed_listener_stops_receiving() {
        let count = Rc::new(RefCell::new(0));
        let mut dispatcher = EventDispatcher::new();
        let sink = Rc::clone(&count);
        let id = dispatcher.add_listener(move |_| *sink.borrow_mut() += 1);

        dispatcher.dispatch(ControlEvent::Change);
        assert!(dispatcher.remove_listener(id));
        assert!(!dispatcher.remove_listener(id));
        dispatcher.dispatch(ControlEvent::Change);

        assert_eq!(*count.borrow(), 1);
        assert!(dispatcher.is_empty());
    }
}
