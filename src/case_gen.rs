use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::cfg_read::{CfgError, read_cfg};
use crate::cfg_write::{format_full_cfg, splice_full_cfg};
use crate::expand::{EighthMap, ExpandError, FullMap, expand_eighth_to_full};
use crate::randomize::randomize_eighth;

#[derive(Debug, thiserror::Error)]
pub enum CaseError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Cfg(#[from] CfgError),

    #[error(transparent)]
    Expand(#[from] ExpandError),
}

/// Artifacts of one generated case, kept around so the driver can plot or
/// inspect the last one.
#[derive(Debug, Clone)]
pub struct CaseOutput {
    pub case_dir: PathBuf,
    pub eighth: EighthMap,
    pub full: FullMap,
}

/// One randomize -> expand -> serialize pass.
///
/// Writes `KARMA_FULL.CFG` (standalone dump) and `KARMA_FULL.IN` (base
/// document with the CFG block replaced) under `output_dir/case_{id:03}`.
/// Both artifacts are rendered before anything is written, so a failed case
/// leaves no output files behind.
pub fn generate_case<R: Rng + ?Sized>(
    case_id: usize,
    base_text: &str,
    base_eighth: &[Vec<i32>],
    center_pin: i32,
    output_dir: &Path,
    rng: &mut R,
) -> Result<CaseOutput, CaseError> {
    let eighth = randomize_eighth(base_eighth, rng);
    let full = expand_eighth_to_full(&eighth, center_pin)?;

    let dump = format_full_cfg(&full);
    let spliced = splice_full_cfg(base_text, &full)?;

    let case_dir = output_dir.join(format!("case_{case_id:03}"));
    fs::create_dir_all(&case_dir)?;
    fs::write(case_dir.join("KARMA_FULL.CFG"), dump)?;
    fs::write(case_dir.join("KARMA_FULL.IN"), spliced)?;

    Ok(CaseOutput {
        case_dir,
        eighth,
        full,
    })
}

/// Run `num_cases` sequential cases from a base KARMA document. Case ids
/// start at 1; each case is independent apart from the shared RNG stream.
pub fn generate_cases<R: Rng + ?Sized>(
    base_text: &str,
    num_cases: usize,
    output_dir: &Path,
    rng: &mut R,
) -> Result<Vec<CaseOutput>, CaseError> {
    let (center_pin, base_eighth) = read_cfg(base_text)?;

    let mut outputs = Vec::with_capacity(num_cases);
    for case_id in 1..=num_cases {
        outputs.push(generate_case(
            case_id,
            base_text,
            &base_eighth,
            center_pin,
            output_dir,
            rng,
        )?);
    }
    Ok(outputs)
}

/// Hands out `KARMA_{n:05}.IN` paths in a directory without colliding with
/// files already there.
///
/// The directory is scanned once at construction for the highest existing
/// suffix; after that the allocator only increments an internal counter.
/// Single-owner by design: two allocators over the same directory, or outside
/// writers, would need external coordination.
#[derive(Debug)]
pub struct FileNumberAllocator {
    dir: PathBuf,
    next: u32,
}

impl FileNumberAllocator {
    pub fn scan(dir: &Path) -> Result<Self, std::io::Error> {
        let mut highest = 0u32;
        for entry in fs::read_dir(dir)?.filter_map(Result::ok) {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            let Some(num) = name
                .strip_prefix("KARMA_")
                .and_then(|s| s.strip_suffix(".IN"))
            else {
                continue;
            };
            if let Ok(n) = num.parse::<u32>() {
                highest = highest.max(n);
            }
        }
        Ok(Self {
            dir: dir.to_path_buf(),
            next: highest + 1,
        })
    }

    pub fn next_path(&mut self) -> PathBuf {
        let path = self.dir.join(format!("KARMA_{:05}.IN", self.next));
        self.next += 1;
        path
    }
}
