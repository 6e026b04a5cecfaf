use std::time::{Duration, Instant};

use log::info;

use crate::error::Result;

/// Run `f` inside a dedicated worker pool of `num_threads` threads and
/// report the elapsed wall-clock time.
///
/// Passing `0` sizes the pool to the host's hardware concurrency. Array
/// constructors called from `f` split their fills across this pool, so the
/// same closure can be timed under different thread counts.
pub fn benchmark<F>(f: F, num_threads: usize) -> Result<Duration>
where
    F: FnOnce() + Send,
{
    let threads = if num_threads == 0 {
        num_cpus::get()
    } else {
        num_threads
    };
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()?;

    let start = Instant::now();
    pool.install(f);
    let elapsed = start.elapsed();

    info!(
        "execution time: {} ms ({threads} threads)",
        elapsed.as_millis()
    );
    Ok(elapsed)
}
