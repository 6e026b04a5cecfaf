use crate::error::ArgError;
use crate::fill::fill_chunked;
use crate::NdArray;

impl NdArray {
    /// Create an array of the given shape filled with zeros.
    pub fn zeros<S: Into<Vec<usize>>>(shape: S) -> Self {
        // Fresh buffers are already zeroed, no fill pass needed.
        Self::new(shape)
    }

    /// Create an array of the given shape with every element set to `value`.
    pub fn fill<S: Into<Vec<usize>>>(value: f64, shape: S) -> Self {
        let mut arr = Self::new(shape);
        fill_chunked(&mut arr.data, |_, chunk| {
            for slot in chunk {
                *slot = value;
            }
        });
        arr
    }

    /// Create an array of the given shape filled with ones.
    pub fn ones<S: Into<Vec<usize>>>(shape: S) -> Self {
        Self::fill(1.0, shape)
    }

    /// Create an `n` by `n` matrix with ones on the diagonal and zeros
    /// elsewhere.
    pub fn eye(n: usize) -> Self {
        let mut arr = Self::new([n, n]);
        // Diagonal addresses are independent direct writes; not worth
        // chunking n elements across workers.
        for i in 0..n {
            arr.data[i * n + i] = 1.0;
        }
        arr
    }

    /// Create a `rows` by `cols` matrix with ones on the main diagonal and
    /// zeros elsewhere.
    pub fn eye_with_cols(rows: usize, cols: usize) -> Self {
        let mut arr = Self::new([rows, cols]);
        for i in 0..rows.min(cols) {
            arr.data[i * cols + i] = 1.0;
        }
        arr
    }

    /// Square identity matrix, equivalent to [`NdArray::eye`].
    pub fn identity(n: usize) -> Self {
        Self::eye(n)
    }

    /// Create a vector of values stepping from `start` towards `stop`.
    ///
    /// The sign of `step` is forced to match the direction of the range,
    /// so `arange(5.0, 0.0, 1.0)` counts down from 5. The length is
    /// `ceil(|stop - start| / |step|) + 1`, which counts both endpoints and
    /// may land the final element past `stop`: `arange(0.0, 5.0, 1.0)`
    /// yields `[0, 1, 2, 3, 4, 5]` and `arange(0.0, 5.0, 2.0)` yields
    /// `[0, 2, 4, 6]`.
    pub fn arange(start: f64, stop: f64, step: f64) -> Result<Self, ArgError> {
        if step == 0.0 {
            return Err(ArgError::ZeroStep);
        }
        if start == stop {
            return Err(ArgError::EqualBounds { bound: start });
        }

        // Only the sign of the caller's step may flip, never its size.
        let step = if start > stop { -step.abs() } else { step.abs() };
        let len = ((stop - start).abs() / step.abs()).ceil() as usize + 1;

        let mut arr = Self::new([len]);
        fill_chunked(&mut arr.data, |offset, chunk| {
            // Each chunk seeds from its own flat offset, so no worker
            // depends on another's values.
            let mut value = start + offset as f64 * step;
            for slot in chunk {
                *slot = value;
                value += step;
            }
        });
        Ok(arr)
    }
}
