//! Check command implementation

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::SheetConfig;
use crate::decoder::SpriteSheetDecoder;
use crate::error::DecodeError;

use super::{find_sheet_files, is_sheet_file, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Outcome of decoding one sheet
struct CheckOutcome {
    path: PathBuf,
    result: Result<usize, DecodeError>,
}

/// Collect explicit files plus everything found under `dir`.
///
/// Explicit arguments that are not `.json` files are skipped with a warning.
fn collect_inputs(files: &[PathBuf], dir: Option<&Path>) -> Vec<PathBuf> {
    let mut inputs: Vec<PathBuf> = files
        .iter()
        .filter(|path| {
            let keep = is_sheet_file(path);
            if !keep {
                tracing::warn!(path = %path.display(), "skipping non-JSON input");
            }
            keep
        })
        .cloned()
        .collect();
    if let Some(dir) = dir {
        inputs.extend(find_sheet_files(dir));
    }
    inputs.sort();
    inputs.dedup();
    inputs
}

/// Execute the check command
pub fn run_check(files: &[PathBuf], dir: Option<&Path>, settings: &SheetConfig) -> ExitCode {
    if let Some(dir) = dir {
        if !dir.is_dir() {
            eprintln!("Error: '{}' is not a directory", dir.display());
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    }

    let inputs = collect_inputs(files, dir);
    if inputs.is_empty() {
        eprintln!("Error: No sheet files to check");
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let decoder = SpriteSheetDecoder::new(settings.decode.to_options());
    let outcomes: Vec<CheckOutcome> = inputs
        .par_iter()
        .map(|path| CheckOutcome {
            path: path.clone(),
            result: decoder.decode_path(path).map(|set| set.len()),
        })
        .collect();

    let mut failed = 0;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(tags) => println!("OK    {} ({} tag(s))", outcome.path.display(), tags),
            Err(e) => {
                failed += 1;
                println!("FAIL  {} [{}] {}", outcome.path.display(), e.category(), e);
            }
        }
    }

    println!();
    println!("{} checked, {} failed", outcomes.len(), failed);
    tracing::debug!(checked = outcomes.len(), failed, "check finished");

    if failed > 0 {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}
