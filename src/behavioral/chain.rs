// Chain of Responsibility: pass a request along a chain of handlers until
// one of them handles it.

use std::io::Write;

use crate::error::Result;

pub trait Handler {
    /// Attach `next` after this link and return it, so chains read left to right:
    /// `first.set_next(second).set_next(third)`.
    fn set_next(&mut self, next: Box<dyn Handler>) -> &mut dyn Handler;

    /// `Some(result)` if some link handled the request, `None` if the chain ran out.
    fn handle(&self, request: &str) -> Option<String>;
}

/// Handles exactly `Request{n}`; forwards everything else unchanged.
pub struct ConcreteHandler {
    id: u32,
    next: Option<Box<dyn Handler>>,
}

impl ConcreteHandler {
    pub fn new(id: u32) -> Self {
        Self { id, next: None }
    }

    fn accepts(&self, request: &str) -> bool {
        request == format!("Request{}", self.id)
    }
}

impl Handler for ConcreteHandler {
    fn set_next(&mut self, next: Box<dyn Handler>) -> &mut dyn Handler {
        &mut **self.next.insert(next)
    }

    fn handle(&self, request: &str) -> Option<String> {
        if self.accepts(request) {
            return Some(format!("ConcreteHandler{} handled {}", self.id, request));
        }
        forward(self.next.as_deref(), request)
    }
}

/// Default link behavior: hand off to the successor, or report unhandled.
pub fn forward(next: Option<&dyn Handler>, request: &str) -> Option<String> {
    match next {
        Some(handler) => handler.handle(request),
        None => {
            tracing::debug!(request, "reached end of chain unhandled");
            None
        }
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut handler1 = ConcreteHandler::new(1);
    handler1
        .set_next(Box::new(ConcreteHandler::new(2)))
        .set_next(Box::new(ConcreteHandler::new(3)));

    let requests = ["Request1", "Request2", "Request3", "Request4"];

    for request in requests {
        match handler1.handle(request) {
            Some(result) => writeln!(out, "{}", result)?,
            None => writeln!(out, "{} was not handled", request)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    // Wraps a link and counts how often each path is taken
    struct Probe {
        inner: ConcreteHandler,
        seen: Rc<Cell<usize>>,
        handled: Rc<Cell<usize>>,
    }

    impl Handler for Probe {
        fn set_next(&mut self, next: Box<dyn Handler>) -> &mut dyn Handler {
            self.inner.set_next(next)
        }

        fn handle(&self, request: &str) -> Option<String> {
            self.seen.set(self.seen.get() + 1);
            if self.inner.accepts(request) {
                self.handled.set(self.handled.get() + 1);
            }
            self.inner.handle(request)
        }
    }

    fn probe(id: u32) -> (Probe, Rc<Cell<usize>>, Rc<Cell<usize>>) {
        let seen = Rc::new(Cell::new(0));
        let handled = Rc::new(Cell::new(0));
        let probe = Probe {
            inner: ConcreteHandler::new(id),
            seen: Rc::clone(&seen),
            handled: Rc::clone(&handled),
        };
        (probe, seen, handled)
    }

    #[test]
    fn test_middle_link_handles_without_touching_last() {
        let (mut first, seen1, handled1) = probe(1);
        let (second, seen2, handled2) = probe(2);
        let (third, seen3, handled3) = probe(3);
        first.set_next(Box::new(second)).set_next(Box::new(third));

        let result = first.handle("Request2");

        assert_eq!(result.as_deref(), Some("ConcreteHandler2 handled Request2"));
        assert_eq!((seen1.get(), handled1.get()), (1, 0));
        assert_eq!((seen2.get(), handled2.get()), (1, 1));
        assert_eq!((seen3.get(), handled3.get()), (0, 0));
    }

    #[test]
    fn test_unmatched_request_yields_sentinel() {
        let mut first = ConcreteHandler::new(1);
        first
            .set_next(Box::new(ConcreteHandler::new(2)))
            .set_next(Box::new(ConcreteHandler::new(3)));

        assert_eq!(first.handle("Request4"), None);
        assert_eq!(first.handle("Request"), None);
        assert_eq!(first.handle(""), None);
    }

    #[test]
    fn test_first_match_wins() {
        let mut first = ConcreteHandler::new(7);
        first.set_next(Box::new(ConcreteHandler::new(7)));
        assert_eq!(
            first.handle("Request7").as_deref(),
            Some("ConcreteHandler7 handled Request7")
        );
    }

    #[test]
    fn test_forward_without_successor() {
        assert_eq!(forward(None, "Request1"), None);
    }

    #[test]
    fn test_transcript() {
        let mut out: Vec<u8> = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ConcreteHandler1 handled Request1\n\
             ConcreteHandler2 handled Request2\n\
             ConcreteHandler3 handled Request3\n\
             Request4 was not handled\n"
        );
    }
}
