//! Directory-level orchestration: find inputs, encode each one, write its
//! artifacts.
//!
//! Files are independent, so they are encoded in parallel with one rayon
//! task per file. Results come back in input order.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use huffpack_core::{encode_text, verify_artifacts, CompressionStats, Error, Result, TieBreak};
use log::{debug, info};
use rayon::prelude::*;

/// Suffix stripped from input names to form the artifact stem.
const INPUT_SUFFIX: &str = ".txt";

/// Outcome of one successfully processed file.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Artifact stem (input name without `.txt`)
    pub name: String,
    pub compressed_path: PathBuf,
    pub frequency_path: PathBuf,
    pub stats: CompressionStats,
    /// Meaningful bits confirmed by re-reading the artifacts
    pub verified_bits: Option<u64>,
}

/// Regular files of `dir`, sorted by path.
pub fn list_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            inputs.push(entry.path());
        }
    }
    inputs.sort();
    Ok(inputs)
}

/// Artifact stem of `input`: its file name with a trailing `.txt` removed.
pub fn artifact_stem(input: &Path) -> String {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.strip_suffix(INPUT_SUFFIX) {
        Some(stem) => stem.to_string(),
        None => name,
    }
}

/// Reject inputs whose artifacts would overwrite each other.
///
/// `poem.txt` and `poem` share the stem `poem`; encoding both in parallel
/// would race on `poem_comp.bin` and `poem_freq.txt`.
///
/// # Errors
/// `Error::Config` naming the first pair of colliding inputs.
pub fn check_unique_stems(inputs: &[PathBuf]) -> Result<()> {
    let mut seen: BTreeMap<String, &Path> = BTreeMap::new();
    for input in inputs {
        let stem = artifact_stem(input);
        if let Some(previous) = seen.insert(stem.clone(), input) {
            return Err(Error::Config(format!(
                "{} and {} would both write artifacts named {}",
                previous.display(),
                input.display(),
                stem
            )));
        }
    }
    Ok(())
}

/// Paths of the compressed file and the frequency file for `stem`.
pub fn artifact_paths(output_dir: &Path, stem: &str) -> (PathBuf, PathBuf) {
    (
        output_dir.join(format!("{stem}_comp.bin")),
        output_dir.join(format!("{stem}_freq.txt")),
    )
}

/// Encode one file and write its two artifacts.
///
/// # Errors
/// I/O errors, non-UTF-8 input, and encoding errors (an empty file has no
/// symbols to encode).
pub fn process_file(
    input: &Path,
    output_dir: &Path,
    tie_break: TieBreak,
    verify: bool,
) -> Result<FileReport> {
    let text = fs::read_to_string(input)?;
    let encoded = encode_text(&text, tie_break)?;
    let artifacts = encoded.artifacts();

    let name = artifact_stem(input);
    let (compressed_path, frequency_path) = artifact_paths(output_dir, &name);
    fs::write(&compressed_path, &artifacts.compressed)?;
    info!("compressed file for {} written to {}", name, compressed_path.display());
    fs::write(&frequency_path, &artifacts.frequency_file)?;
    info!("frequency file for {} written to {}", name, frequency_path.display());

    let verified_bits = if verify {
        let frequency_file = fs::read_to_string(&frequency_path)?;
        let compressed = fs::read(&compressed_path)?;
        let bits = verify_artifacts::<char>(&frequency_file, &compressed, tie_break)?;
        debug!("{}: artifacts verified ({} bits)", name, bits);
        Some(bits)
    } else {
        None
    };

    Ok(FileReport {
        stats: encoded.stats(text.len() as u64),
        name,
        compressed_path,
        frequency_path,
        verified_bits,
    })
}

/// Process every input in parallel.
///
/// Per-file failures are returned alongside their input; only a batch-wide
/// problem fails the whole call.
///
/// # Errors
/// `Error::Config` when two inputs map to the same artifact stem. Nothing
/// is written in that case.
pub fn process_all(
    inputs: &[PathBuf],
    output_dir: &Path,
    tie_break: TieBreak,
    verify: bool,
) -> Result<Vec<(PathBuf, Result<FileReport>)>> {
    check_unique_stems(inputs)?;

    Ok(inputs
        .par_iter()
        .map(|input| {
            let result = process_file(input, output_dir, tie_break, verify);
            (input.clone(), result)
        })
        .collect())
}
