//! Per-thread capture of `log` records for unit tests.
//!
//! The logger is installed once for the whole test binary. Records are kept
//! in a thread-local buffer, so tests running in parallel never see each
//! other's output.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use std::sync::Once;

/// A captured log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    pub level: Level,
    pub message: String,
}

thread_local! {
    static RECORDS: RefCell<Vec<Captured>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records.borrow_mut().push(Captured {
                level: record.level(),
                message: record.args().to_string(),
            })
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Run `f` and return what it logged on this thread.
pub fn capture<T>(f: impl FnOnce() -> T) -> (T, Vec<Captured>) {
    INIT.call_once(|| {
        // Another logger may already be set; capture then sees nothing.
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });

    RECORDS.with(|records| records.borrow_mut().clear());
    let value = f();
    let logged = RECORDS.with(|records| records.take());
    (value, logged)
}

/// Records at exactly `level`.
pub fn at_level(records: &[Captured], level: Level) -> Vec<&Captured> {
    records.iter().filter(|r| r.level == level).collect()
}
