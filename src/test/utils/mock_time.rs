use crate::time::TimeProvider;
use std::sync::atomic::{AtomicI64, Ordering};

#[derive(Debug)]
pub struct MockTimeProvider {
    current_time: AtomicI64,
}

impl MockTimeProvider {
    pub fn new(start_time: i64) -> Self {
        Self { current_time: AtomicI64::new(start_time) }
    }
}

impl TimeProvider for MockTimeProvider {
    fn now(&self) -> i64 {
        self.current_time.load(Ordering::SeqCst)
    }
}
