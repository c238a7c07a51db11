use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

static TIMING_ENABLED: AtomicBool = AtomicBool::new(false);

/// Turns on timing output for the rest of the process.
pub fn enable() {
    TIMING_ENABLED.store(true, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    TIMING_ENABLED.load(Ordering::Relaxed)
}

pub fn log(label: &str, elapsed: Duration) {
    if is_enabled() {
        eprintln!("[TIMING] {label}: {:.3}ms", elapsed.as_secs_f64() * 1000.0);
    }
}

pub fn log_files(label: &str, elapsed: Duration, files: usize) {
    if is_enabled() {
        eprintln!(
            "[TIMING] {label}: {:.3}ms ({files} files)",
            elapsed.as_secs_f64() * 1000.0
        );
    }
}

/// Runs `$block`, logging how long it took under `$label`.
#[macro_export]
macro_rules! time_block {
    ($label:expr, $block:expr) => {{
        let start = std::time::Instant::now();
        let result = $block;
        $crate::timing::log($label, start.elapsed());
        result
    }};
}

/// Like `time_block!`, with the file count taken from the block's result.
#[macro_export]
macro_rules! time_block_with_count {
    ($label:expr, $count:expr, $block:expr) => {{
        let start = std::time::Instant::now();
        let result = $block;
        $crate::timing::log_files($label, start.elapsed(), $count(&result));
        result
    }};
}
