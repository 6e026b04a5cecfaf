use std::fmt;

use crate::error::IndexError;
use crate::layout::Layout;

/// A dense, heap-allocated n-dimensional array of `f64` values in
/// row-major order.
///
/// Every array exclusively owns its buffer; [`NdArray::get`] copies the
/// selected region out instead of borrowing it, so arrays never share
/// storage.
#[derive(Clone, Debug)]
pub struct NdArray {
    pub(crate) data: Vec<f64>,
    pub(crate) layout: Layout,
}

impl NdArray {
    /// Allocate a zero-initialized array of the given shape.
    ///
    /// Any rank is accepted. The buffer length is the product of the
    /// dimensions: an empty shape holds a single element and a zero-sized
    /// dimension makes the whole buffer empty.
    pub fn new<S: Into<Vec<usize>>>(shape: S) -> Self {
        let layout = Layout::row_major(shape.into());
        Self {
            data: vec![0.0; layout.size()],
            layout,
        }
    }

    /// Per-dimension sizes.
    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }

    /// Flat elements skipped when advancing each dimension by one.
    pub fn strides(&self) -> &[usize] {
        self.layout.strides()
    }

    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        self.layout.rank()
    }

    /// Total number of elements.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// The underlying row-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable access to the underlying row-major buffer.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Select an element or sub-array by a (possibly partial) index tuple.
    ///
    /// A full-rank tuple returns a shape-`[1]` array holding a copy of the
    /// addressed element. A shorter tuple selects the block spanned by the
    /// trailing dimensions and copies it into a fresh array carrying the
    /// suffix shape; an empty tuple copies the whole array unchanged.
    pub fn get(&self, indices: &[usize]) -> Result<NdArray, IndexError> {
        self.layout.validate(indices)?;

        // A tuple as long as the rank addresses a single element.
        if indices.len() == self.rank() {
            let flat = self.layout.flat_index(indices)?;
            return Ok(NdArray {
                data: vec![self.data[flat]],
                layout: Layout::row_major(vec![1]),
            });
        }

        let layout = self.layout.tail(indices.len());
        let base = self.layout.flat_index(indices)?;
        // A prefix of dimensions addresses one contiguous run of the
        // row-major buffer, so the block copies out as a straight slice.
        let data = self.data[base..base + layout.size()].to_vec();
        Ok(NdArray { data, layout })
    }
}

impl PartialEq for NdArray {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.data == other.data
    }
}

impl fmt::Display for NdArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_block(f, &self.data, self.shape())
    }
}

fn fmt_block(f: &mut fmt::Formatter<'_>, data: &[f64], shape: &[usize]) -> fmt::Result {
    match shape.split_first() {
        None => match data.first() {
            Some(value) => write!(f, "{value}"),
            None => write!(f, "[]"),
        },
        Some((&dim, rest)) => {
            let span = rest.iter().product::<usize>();
            write!(f, "[")?;
            for i in 0..dim {
                if i > 0 {
                    write!(f, ", ")?;
                }
                fmt_block(f, &data[i * span..(i + 1) * span], rest)?;
            }
            write!(f, "]")
        }
    }
}
