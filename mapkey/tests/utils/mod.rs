#![allow(dead_code)]

use mapkey::StringMap;
use std::cell::Cell;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn dict() -> StringMap<i32> {
    [("abc".to_string(), 1), ("def".to_string(), 2)].into()
}

/// Counts how many times the factories it hands out are invoked.
#[derive(Debug, Default)]
pub struct CallCounter {
    calls: Cell<usize>,
}

impl CallCounter {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn factory<'a, T: 'a>(&'a self, value: T) -> impl FnOnce() -> T + 'a {
        move || {
            self.calls.set(self.calls.get() + 1);
            value
        }
    }
}
