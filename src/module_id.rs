//! Diagnostic module identifiers
//!
//! Several modules can run in one session; the id tags their log lines so
//! they can be told apart.

use core::cell::Cell;
use core::fmt;

use critical_section::Mutex;

static NEXT_ID: Mutex<Cell<u32>> = Mutex::new(Cell::new(1));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModuleId(u32);

impl ModuleId {
    /// Allocate the next id of this process, starting at 1
    pub fn next() -> Self {
        critical_section::with(|cs| {
            let counter = NEXT_ID.borrow(cs);
            let id = counter.get();
            counter.set(id.wrapping_add(1));
            Self(id)
        })
    }

    /// Use a fixed id, e.g. when replaying a logged module
    pub const fn from_raw(id: u32) -> Self {
        Self(id)
    }

    pub const fn as_raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
