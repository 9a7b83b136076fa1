//! Sample text generation.
//!
//! When asked to, the tool writes sample texts with interesting compression
//! characteristics into the input directory: a mix of runs, English-like
//! prose and noise.
//!
//! # Design
//!
//! Generated text has:
//! - Some highly compressible sections (runs of one character)
//! - Some moderately compressible sections (words from a small vocabulary)
//! - Some poorly compressible sections (random printable ASCII)
//!
//! Line breaks are sprinkled in so the newline symbol always shows up in
//! the frequency file.

use std::path::{Path, PathBuf};

use huffpack_core::Result;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const VOCABULARY: &[&str] = &[
    "the", "of", "and", "to", "in", "is", "that", "it", "was", "for", "on", "are", "with",
    "as", "his", "they", "be", "at", "one", "have", "this", "from", "word", "but", "what",
    "some", "we", "can", "out", "other", "were", "all", "there", "when", "up", "use", "your",
    "how", "said", "each", "which", "she", "do", "their", "time", "if", "will", "way",
];

/// Generate a sample text of exactly `size_bytes` ASCII bytes.
pub fn generate_sample_text(seed: u64, size_bytes: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut text = String::with_capacity(size_bytes + 64);

    while text.len() < size_bytes {
        let section = rng.gen_range(64..=512);

        match rng.gen_range(0..10u8) {
            // 20% runs
            0..=1 => {
                let c = char::from(rng.gen_range(b'a'..=b'z'));
                text.extend(std::iter::repeat(c).take(section));
            }

            // 60% prose
            2..=7 => {
                let start = text.len();
                while text.len() - start < section {
                    let word = VOCABULARY[rng.gen_range(0..VOCABULARY.len())];
                    text.push_str(word);
                    text.push(if rng.gen_ratio(1, 12) { '\n' } else { ' ' });
                }
            }

            // 20% noise
            _ => {
                for _ in 0..section {
                    text.push(char::from(rng.gen_range(b' '..=b'~')));
                }
            }
        }
        text.push('\n');
    }

    // ASCII only, so byte truncation is a char boundary
    text.truncate(size_bytes);
    text
}

/// Write `count` samples named `sample_NN.txt` into `dir`.
///
/// Sample `i` is generated from `seed + i`.
pub fn write_samples(dir: &Path, seed: u64, count: usize, size_bytes: usize) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut paths = Vec::with_capacity(count);
    for i in 0..count {
        let path = dir.join(format!("sample_{:02}.txt", i));
        let text = generate_sample_text(seed.wrapping_add(i as u64), size_bytes);
        std::fs::write(&path, text)?;
        debug!("wrote sample {}", path.display());
        paths.push(path);
    }
    Ok(paths)
}
