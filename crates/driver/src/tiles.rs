use bag::{
    random::RngCore,
    Bag,
    Error,
};

/// A frequency table mapping a tile count to the letters that appear that often.
pub type FrequencyTable = [(usize, &'static [&'static str])];

/// The letter distribution of a standard 98 tile set without blanks.
pub const LETTER_FREQUENCIES: &FrequencyTable = &[
    (1, &["K", "J", "X", "Q", "Z"]),
    (2, &["B", "C", "M", "P", "F", "H", "V", "W", "Y"]),
    (3, &["G"]),
    (4, &["L", "S", "U", "D"]),
    (6, &["N", "R", "T"]),
    (8, &["O"]),
    (9, &["A", "I"]),
    (12, &["E"]),
];

/// Adds every letter of the table to the pool as often as its count says.
///
/// # Errors
///
/// If the table contains the vacant (empty) letter.
pub fn fill_pool<B>(pool: &mut B, table: &FrequencyTable) -> Result<(), Error>
where
    B: Bag<&'static str> + ?Sized,
{
    for &(count, letters) in table {
        for &letter in letters {
            for _ in 0..count {
                pool.add(letter)?;
            }
        }
    }
    Ok(())
}

/// Moves up to `count` uniformly drawn tiles from the pool into the rack.
///
/// Stops early once the pool runs dry and returns the number of moved tiles.
///
/// # Errors
///
/// If the rack refuses one of the drawn tiles.
pub fn draw_rack<P, B>(
    pool: &mut P,
    rack: &mut B,
    count: usize,
    rng: &mut dyn RngCore,
) -> Result<usize, Error>
where
    P: Bag<&'static str> + ?Sized,
    B: Bag<&'static str> + ?Sized,
{
    let mut drawn = 0;
    while drawn < count {
        match pool.remove_random_with(rng) {
            Some(tile) => rack.add(tile)?,
            None => break,
        }
        drawn += 1;
    }
    Ok(drawn)
}
