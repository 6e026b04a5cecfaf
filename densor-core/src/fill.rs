use rayon::iter::{IndexedParallelIterator, ParallelIterator};
use rayon::slice::ParallelSliceMut;

/// Split `data` into one contiguous chunk per worker of the pool in scope
/// and run `write` on each, passing the chunk's starting flat offset.
///
/// Chunk length is `ceil(len / workers)`, so the chunks are disjoint,
/// jointly cover the buffer, and number at most `workers`. No element is
/// ever written by two workers, and the parallel iterator joins every
/// chunk before this function returns.
pub(crate) fn fill_chunked<F>(data: &mut [f64], write: F)
where
    F: Fn(usize, &mut [f64]) + Sync,
{
    let n = data.len();
    if n == 0 {
        return;
    }
    let workers = rayon::current_num_threads().max(1);
    let chunk_len = n.div_ceil(workers);
    data.par_chunks_mut(chunk_len)
        .enumerate()
        .for_each(|(k, chunk)| write(k * chunk_len, chunk));
}
