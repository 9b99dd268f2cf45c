use psirt_annotate::prelude::*;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Fake Clock whose sleeps advance time instantly
#[derive(Clone)]
pub struct FakeClock {
    start: Instant,
    now: Arc<Mutex<Instant>>,
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

#[allow(dead_code)]
impl FakeClock {
    pub fn new() -> Self {
        let start = Instant::now();
        Self {
            start,
            now: Arc::new(Mutex::new(start)),
            sleeps: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn advance(&self, duration: Duration) {
        *self.now.lock().unwrap() += duration;
    }

    pub fn elapsed(&self) -> Duration {
        *self.now.lock().unwrap() - self.start
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.sleeps.lock().unwrap().clone()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap()
    }

    fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
        self.advance(duration);
    }
}
