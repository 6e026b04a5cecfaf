use crate::error::IndexError;

/// Row-major layout metadata: per-dimension sizes plus the number of flat
/// elements skipped when advancing each dimension by one.
///
/// Shape and strides always have the same length, and the strides are
/// always the row-major cumulative products of the shape; the pair can
/// only be built together, so the two never disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Layout {
    shape: Vec<usize>,
    strides: Vec<usize>,
}

impl Layout {
    /// Compute the row-major (last dimension fastest) layout for `shape`.
    pub(crate) fn row_major(shape: Vec<usize>) -> Self {
        let mut strides = Vec::with_capacity(shape.len());
        let mut acc = 1;
        // Iterate dims in reverse to accumulate products.
        for dim in shape.iter().rev() {
            strides.push(acc);
            acc *= *dim;
        }
        strides.reverse();
        Self { shape, strides }
    }

    pub(crate) fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub(crate) fn strides(&self) -> &[usize] {
        &self.strides
    }

    pub(crate) fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements: the multiplicative fold of the shape, so
    /// an empty shape yields 1 and any zero-sized dimension yields 0.
    pub(crate) fn size(&self) -> usize {
        self.shape.iter().product()
    }

    /// Check an index tuple against this layout without resolving it.
    ///
    /// Positions beyond the tuple's length are never checked; a tuple
    /// shorter than the rank is valid.
    pub(crate) fn validate(&self, indices: &[usize]) -> Result<(), IndexError> {
        if indices.len() > self.rank() {
            return Err(IndexError::TooManyIndices {
                given: indices.len(),
                rank: self.rank(),
            });
        }
        for (axis, (&index, &size)) in indices.iter().zip(self.shape.iter()).enumerate() {
            if index >= size {
                return Err(IndexError::OutOfBounds { axis, index, size });
            }
        }
        Ok(())
    }

    /// Resolve an index tuple to an offset into the flat buffer.
    ///
    /// A tuple shorter than the rank yields the offset of the first element
    /// of the addressed sub-block: the dot product runs over the leading
    /// dimensions only.
    pub(crate) fn flat_index(&self, indices: &[usize]) -> Result<usize, IndexError> {
        self.validate(indices)?;
        Ok(indices
            .iter()
            .zip(self.strides.iter())
            .map(|(index, stride)| index * stride)
            .sum())
    }

    /// Layout of the trailing dimensions from `axis` onward.
    ///
    /// Under row-major order the stride of a dimension only depends on the
    /// dimensions after it, so the carried-over suffix strides are exactly
    /// the row-major strides of the suffix shape.
    pub(crate) fn tail(&self, axis: usize) -> Layout {
        Layout {
            shape: self.shape[axis..].to_vec(),
            strides: self.strides[axis..].to_vec(),
        }
    }
}
