use densor_core::{IndexError, NdArray};

/// 2x3 grid holding the sequence 0..=5 in row-major order.
fn grid() -> NdArray {
    let mut a = NdArray::new([2, 3]);
    a.as_mut_slice()
        .copy_from_slice(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    a
}

#[test]
fn strides_follow_row_major_products() {
    let a = NdArray::new([2, 3, 4]);
    assert_eq!(a.shape(), &[2, 3, 4]);
    assert_eq!(a.strides(), &[12, 4, 1]);
    assert_eq!(a.size(), 24);
}

#[test]
fn empty_shape_allocates_one_element() {
    let a = NdArray::new(Vec::<usize>::new());
    assert_eq!(a.rank(), 0);
    assert_eq!(a.size(), 1);
}

#[test]
fn zero_sized_dimension_empties_the_buffer() {
    let a = NdArray::new([2, 0, 3]);
    assert_eq!(a.size(), 0);
    assert_eq!(a.strides(), &[0, 3, 1]);
}

#[test]
fn get_full_index_wraps_the_element() {
    let a = grid();
    let elem = a.get(&[1, 2]).unwrap();
    assert_eq!(elem.shape(), &[1]);
    assert_eq!(elem.as_slice(), &[5.0]);
}

#[test]
fn get_partial_index_copies_the_row() {
    let a = grid();
    let row = a.get(&[1]).unwrap();
    assert_eq!(row.shape(), &[3]);
    assert_eq!(row.strides(), &[1]);
    assert_eq!(row.as_slice(), &[3.0, 4.0, 5.0]);
}

#[test]
fn get_partial_index_keeps_trailing_dimensions() {
    let mut a = NdArray::new([2, 2, 2]);
    a.as_mut_slice()
        .copy_from_slice(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);

    let block = a.get(&[1]).unwrap();
    assert_eq!(block.shape(), &[2, 2]);
    assert_eq!(block.strides(), &[2, 1]);
    assert_eq!(block.as_slice(), &[4.0, 5.0, 6.0, 7.0]);

    let pair = a.get(&[1, 0]).unwrap();
    assert_eq!(pair.shape(), &[2]);
    assert_eq!(pair.as_slice(), &[4.0, 5.0]);
}

#[test]
fn get_empty_index_copies_the_whole_array() {
    let a = grid();
    let copy = a.get(&[]).unwrap();
    assert_eq!(copy, a);
    assert_eq!(copy.shape(), &[2, 3]);
}

#[test]
fn get_copies_do_not_alias_the_parent() {
    let a = grid();
    let mut row = a.get(&[0]).unwrap();
    row.as_mut_slice()[0] = 99.0;
    assert_eq!(a.as_slice()[0], 0.0);
}

#[test]
fn get_out_of_bounds() {
    let a = grid();
    assert_eq!(
        a.get(&[5]).unwrap_err(),
        IndexError::OutOfBounds {
            axis: 0,
            index: 5,
            size: 2,
        }
    );
    // The failed lookup leaves the array untouched.
    assert_eq!(a, grid());
}

#[test]
fn get_out_of_bounds_on_inner_axis() {
    let a = grid();
    assert_eq!(
        a.get(&[1, 3]).unwrap_err(),
        IndexError::OutOfBounds {
            axis: 1,
            index: 3,
            size: 3,
        }
    );
}

#[test]
fn get_too_many_indices() {
    let a = grid();
    assert_eq!(
        a.get(&[0, 0, 0]).unwrap_err(),
        IndexError::TooManyIndices { given: 3, rank: 2 }
    );
}

#[test]
fn get_full_index_on_scalar_rank() {
    let a = NdArray::new(Vec::<usize>::new());
    let elem = a.get(&[]).unwrap();
    assert_eq!(elem.shape(), &[1]);
    assert_eq!(elem.as_slice(), &[0.0]);
}

#[test]
fn error_messages_name_the_offending_value() {
    let a = grid();
    let msg = a.get(&[5]).unwrap_err().to_string();
    assert!(msg.contains('5') && msg.contains('2'), "{msg}");

    let msg = a.get(&[0, 0, 0]).unwrap_err().to_string();
    assert!(msg.contains('3') && msg.contains('2'), "{msg}");
}
