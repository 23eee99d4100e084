use rand::Rng;

use crate::expand::EighthMap;

/// Cell type ids a randomized case may use. Fixed palette, not derived from
/// the source map.
pub const ALLOWED_TYPES: [i32; 4] = [1, 2, 4, 5];

/// Fresh eighth map with every cell redrawn uniformly from [`ALLOWED_TYPES`].
///
/// The row shape is preserved and the source map is left untouched. The
/// center pin never goes through here.
pub fn randomize_eighth<R: Rng + ?Sized>(base: &[Vec<i32>], rng: &mut R) -> EighthMap {
    base.iter()
        .map(|row| {
            row.iter()
                .map(|_| ALLOWED_TYPES[rng.random_range(0..ALLOWED_TYPES.len())])
                .collect()
        })
        .collect()
}
