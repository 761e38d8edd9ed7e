// Observer: a subject notifies every registered listener when something happens.

use std::io::Write;
use std::rc::Rc;

use crate::error::Result;

pub trait Observer {
    fn update(&self, message: &str, out: &mut dyn Write) -> Result<()>;
}

pub struct NamedObserver {
    name: String,
}

impl NamedObserver {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Observer for NamedObserver {
    fn update(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} received message: {}", self.name, message)?;
        Ok(())
    }
}

/// Handle returned on registration, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

#[derive(Default)]
pub struct Subject {
    observers: Vec<(ObserverId, Rc<dyn Observer>)>,
    next_id: u64,
}

impl Subject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_observer(&mut self, observer: Rc<dyn Observer>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Returns false when `id` was not subscribed.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(registered, _)| *registered != id);
        self.observers.len() != before
    }

    /// Deliver `message` to every observer in registration order.
    pub fn notify_observers(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        tracing::debug!(observers = self.observers.len(), message, "notifying");
        for (_, observer) in &self.observers {
            observer.update(message, out)?;
        }
        Ok(())
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut subject = Subject::new();

    let observer1 = subject.add_observer(Rc::new(NamedObserver::new("Observer 1")));
    subject.add_observer(Rc::new(NamedObserver::new("Observer 2")));

    subject.notify_observers("Hello Observers!", out)?;

    subject.remove_observer(observer1);

    subject.notify_observers("Observer 1 should not receive this", out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;

    // Records deliveries into a shared log tagged with the observer's label
    struct Recorder {
        label: usize,
        log: Log,
    }

    impl Observer for Recorder {
        fn update(&self, message: &str, _out: &mut dyn Write) -> Result<()> {
            self.log.borrow_mut().push((self.label, message.to_string()));
            Ok(())
        }
    }

    type Log = Rc<RefCell<Vec<(usize, String)>>>;

    fn recorders(subject: &mut Subject, n: usize) -> (Vec<ObserverId>, Log) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let ids = (0..n)
            .map(|label| {
                subject.add_observer(Rc::new(Recorder {
                    label,
                    log: Rc::clone(&log),
                }))
            })
            .collect();
        (ids, log)
    }

    #[test]
    fn test_each_observer_gets_identical_payload_in_order() {
        let mut subject = Subject::new();
        let (_, log) = recorders(&mut subject, 4);

        subject.notify_observers("tick", &mut io::sink()).unwrap();

        let expected: Vec<(usize, String)> = (0..4).map(|i| (i, "tick".to_string())).collect();
        assert_eq!(*log.borrow(), expected);
    }

    #[test]
    fn test_removed_observer_misses_later_events_only() {
        let mut subject = Subject::new();
        let (ids, log) = recorders(&mut subject, 3);

        subject.notify_observers("first", &mut io::sink()).unwrap();
        assert!(subject.remove_observer(ids[1]));
        subject.notify_observers("second", &mut io::sink()).unwrap();

        let delivered = log.borrow().clone();
        let expected: Vec<(usize, String)> = [
            (0, "first"),
            (1, "first"),
            (2, "first"),
            (0, "second"),
            (2, "second"),
        ]
        .into_iter()
        .map(|(label, msg)| (label, msg.to_string()))
        .collect();
        assert_eq!(delivered, expected);
    }

    #[test]
    fn test_removing_unknown_id_is_a_no_op() {
        let mut subject = Subject::new();
        let (ids, _) = recorders(&mut subject, 1);

        assert!(subject.remove_observer(ids[0]));
        assert!(!subject.remove_observer(ids[0]));
        assert_eq!(subject.observer_count(), 0);
    }

    #[test]
    fn test_transcript() {
        let mut out: Vec<u8> = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Observer 1 received message: Hello Observers!\n\
             Observer 2 received message: Hello Observers!\n\
             Observer 2 received message: Observer 1 should not receive this\n"
        );
    }
}
