use crate::actions::Action;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Shared action queue between folio's UI loop and its background work
///
/// The UI loop pops from it between frames. Clones go to the listing task
/// and the tick thread, and middlewares push follow-up actions through it.
#[derive(Clone)]
pub struct Dispatcher {
    queue: Arc<Mutex<VecDeque<Action>>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            queue: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Queue `action` behind everything already pending
    pub fn dispatch(&self, action: Action) {
        if let Ok(mut queue) = self.queue.lock() {
            queue.push_back(action);
        }
    }

    /// Next pending action, oldest first
    pub fn pop(&self) -> Option<Action> {
        self.queue.lock().ok()?.pop_front()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::GlobalAction;

    #[test]
    fn test_fifo_order() {
        let dispatcher = Dispatcher::new();
        dispatcher.dispatch(Action::Global(GlobalAction::Tick));
        dispatcher.dispatch(Action::Global(GlobalAction::Quit));

        assert_eq!(dispatcher.pop(), Some(Action::Global(GlobalAction::Tick)));
        assert_eq!(dispatcher.pop(), Some(Action::Global(GlobalAction::Quit)));
        assert_eq!(dispatcher.pop(), None);
    }

    #[test]
    fn test_clones_share_the_queue() {
        let dispatcher = Dispatcher::new();
        let background = dispatcher.clone();

        std::thread::spawn(move || background.dispatch(Action::Global(GlobalAction::Tick)))
            .join()
            .unwrap();

        assert_eq!(dispatcher.pop(), Some(Action::Global(GlobalAction::Tick)));
    }
}
