//! Info command implementation

use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

use crate::config::SheetConfig;
use crate::decoder::SpriteSheetDecoder;
use crate::models::AnimationSet;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Per-tag summary line
#[derive(Debug, Serialize)]
struct TagSummary<'a> {
    tag: &'a str,
    direction: &'a str,
    frames: usize,
    total_ticks: u64,
    frame_indices: Vec<usize>,
    slices: Vec<&'a str>,
}

fn summarize(set: &AnimationSet) -> Vec<TagSummary<'_>> {
    set.iter()
        .map(|(tag, animation)| TagSummary {
            tag,
            direction: animation.direction.as_str(),
            frames: animation.len(),
            total_ticks: animation.total_ticks(),
            frame_indices: animation.frame_indices(),
            slices: animation.slice_names(),
        })
        .collect()
}

/// Execute the info command
pub fn run_info(input: &Path, format: &str, settings: &SheetConfig) -> ExitCode {
    if format != "text" && format != "json" {
        eprintln!("Error: Unknown format '{}'. Use 'text' or 'json'.", format);
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let decoder = SpriteSheetDecoder::new(settings.decode.to_options());
    let animations = match decoder.decode_path(input) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    let summaries = summarize(&animations);

    if format == "json" {
        match serde_json::to_string_pretty(&summaries) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: failed to serialize output: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
        return ExitCode::from(EXIT_SUCCESS);
    }

    println!("{}: {} tag(s)", input.display(), summaries.len());
    for summary in &summaries {
        println!();
        println!("  {} ({})", summary.tag, summary.direction);
        println!("    frames:  {} {:?}", summary.frames, summary.frame_indices);
        println!("    ticks:   {}", summary.total_ticks);
        if summary.slices.is_empty() {
            println!("    slices:  -");
        } else {
            println!("    slices:  {}", summary.slices.join(", "));
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}
