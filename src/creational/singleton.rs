// Singleton: one instance for the whole process, with a global access point.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use crate::error::Result;

static INSTANCE: OnceLock<Singleton> = OnceLock::new();
static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
pub struct Singleton {
    _private: (),
}

impl Singleton {
    /// The shared instance, created on first access.
    pub fn instance() -> &'static Singleton {
        INSTANCE.get_or_init(|| {
            CONSTRUCTIONS.fetch_add(1, Ordering::Relaxed);
            tracing::debug!("singleton instance created");
            Singleton { _private: () }
        })
    }

    /// How many times the initializer actually ran (at most once).
    pub fn constructions() -> usize {
        CONSTRUCTIONS.load(Ordering::Relaxed)
    }

    pub fn some_method(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Singleton method called")?;
        Ok(())
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let instance1 = Singleton::instance();
    let instance2 = Singleton::instance();

    writeln!(out, "{}", std::ptr::eq(instance1, instance2))?;

    instance1.some_method(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_access_returns_same_instance() {
        let a = Singleton::instance();
        let b = Singleton::instance();
        assert!(std::ptr::eq(a, b));
        assert_eq!(Singleton::constructions(), 1);
    }

    #[test]
    fn test_transcript() {
        let mut out: Vec<u8> = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "true\nSingleton method called\n"
        );
    }
}
