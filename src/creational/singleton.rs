//! Singleton: one process-wide instance behind a global access point.

use std::sync::OnceLock;

use tracing::debug;

use crate::util::transcript::Transcript;

static INSTANCE: OnceLock<Singleton> = OnceLock::new();

#[derive(Debug)]
pub struct Singleton {
    value: String,
}

impl Singleton {
    /// Return the shared instance, creating it from `value` on first use.
    ///
    /// Later calls ignore their argument.
    pub fn instance(value: &str) -> &'static Singleton {
        INSTANCE.get_or_init(|| {
            debug!(value, "creating singleton");
            Singleton {
                value: value.to_string(),
            }
        })
    }

    pub fn some_business_logic(&self) -> &str {
        &self.value
    }
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();
    let s1 = Singleton::instance("Test 1");
    let s2 = Singleton::instance("Test 2");

    if std::ptr::eq(s1, s2) {
        out.line("Singleton works, both variables contain the same instance.");
    } else {
        out.line("Singleton failed, variables contain different instances.");
    }
    out.line(s1.some_business_logic());
    out.line(s2.some_business_logic());
    out
}
