//! Canned rhythms and a random rhythm picker.
//!
//! Each set is pre-aligned: every line in a set has the same number of
//! tokens, so any combination of lines from one set parses.

use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Eight-beat rhythm lines.
pub const EIGHT_BEAT: [&str; 8] = [
    "BOOM .    .    boom .    .    .    boom",
    "chik chik KAH  chik chik PSS  KAH  chik",
    "tik  .    tik  tik  .    tik  tik  tik",
    "plik .    .    plik .    .    plik .",
    "dang .    .    pss  pss  .    dang .",
    "DOOM .    .    boom DOOM .    .    .",
    ".    .    bum  .    .    tik  bom  bom",
    "goh  .    goh  .    goh  .    goh  .",
];

/// Sixteen-beat rhythm lines.
pub const SIXTEEN_BEAT: [&str; 8] = [
    "chik .    chik .    chik .    chik .    chik .    chik .    chik .    chik .",
    "boom .    .    .    KAH  .    .    boom .    kah  boom .    KAH  .    .    .",
    "dang .    dang dang .    .    dang .    dang .    dang .    dang .    dang .",
    "doom .    .    .    kah  .    .    .    .    .    doom .    .    .    doom .",
    "BOOM .    chik BOOM .    boom chik .    BOOM .    chik BOOM .    boom chik BOOM",
    "tik  .    .    tik  .    .    tik  .    tik  .    .    tik  .    .    tik  .",
    ".    .    dink .    dink .    .    .    dink .    .    dink .    .    dink .",
    "ding .    ding .    dong dong .    ding .    ding .    ding dong .    dong .",
];

/// Fewest lines in a generated rhythm.
pub const MIN_LINES: usize = 2;
/// Most lines in a generated rhythm.
pub const MAX_LINES: usize = 4;

/// Pick 2–4 distinct lines from one randomly chosen set.
///
/// Each line is followed by a newline, ready for [`parse`](crate::dsl::parse).
pub fn random_rhythm<R: Rng>(rng: &mut R) -> String {
    let set: &[&str] = if rng.gen_bool(0.5) {
        &EIGHT_BEAT
    } else {
        &SIXTEEN_BEAT
    };
    let count = rng.gen_range(MIN_LINES..=MAX_LINES);

    let mut result = String::new();
    for i in index::sample(rng, set.len(), count) {
        result.push_str(set[i]);
        result.push('\n');
    }
    result
}

/// Like [`random_rhythm`], reproducible for a given seed.
pub fn random_rhythm_seeded(seed: u64) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random_rhythm(&mut rng)
}
