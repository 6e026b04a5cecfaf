use densor_core::{benchmark, NdArray, Result};

fn main() -> Result<()> {
    env_logger::init();

    let grid = NdArray::arange(0.0, 5.0, 1.0)?;
    println!("arange(0, 5, 1) = {grid}");

    let eye = NdArray::eye(3);
    println!("eye(3) = {eye}");
    println!("eye(3) row 1 = {}", eye.get(&[1])?);

    let mut table = NdArray::new([2, 3]);
    table
        .as_mut_slice()
        .copy_from_slice(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
    println!("table = {table}");
    println!("table[1, 2] = {}", table.get(&[1, 2])?);

    // Time a large fill on the default pool, then on a single worker.
    let parallel = benchmark(
        || {
            let _ = NdArray::fill(1.0, [2048, 2048]);
        },
        0,
    )?;
    let serial = benchmark(
        || {
            let _ = NdArray::fill(1.0, [2048, 2048]);
        },
        1,
    )?;
    println!(
        "fill(2048x2048): {} ms on the full pool, {} ms on one worker",
        parallel.as_millis(),
        serial.as_millis()
    );

    Ok(())
}
