//! Decode command implementation

use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

use crate::config::SheetConfig;
use crate::decoder::SpriteSheetDecoder;
use crate::keys::canonical_key;
use crate::mirror::mirror_set;
use crate::sprites::project_to_sprites;

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Execute the decode command
pub fn run_decode(
    input: &Path,
    output: Option<&Path>,
    tag: Option<&str>,
    mirror: bool,
    sprites: bool,
    settings: &SheetConfig,
) -> ExitCode {
    let decoder = SpriteSheetDecoder::new(settings.decode.to_options());
    let mut animations = match decoder.decode_path(input) {
        Ok(set) => set,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if let Some(name) = tag {
        match animations.select(&canonical_key(name)) {
            Some(selected) => animations = selected,
            None => {
                eprintln!("Error: tag '{}' not found in {}", name, input.display());
                let available: Vec<&str> = animations.names().collect();
                if !available.is_empty() {
                    eprintln!("Available tags: {}", available.join(", "));
                }
                return ExitCode::from(EXIT_INVALID_ARGS);
            }
        }
    }

    if mirror {
        animations = mirror_set(&animations, &settings.output.mirror_suffix);
    }

    let rendered = if sprites {
        to_json(&project_to_sprites(&animations), settings.output.pretty)
    } else {
        to_json(&animations, settings.output.pretty)
    };
    let text = match rendered {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: failed to serialize output: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, format!("{}\n", text)) {
                eprintln!("Error: Cannot write '{}': {}", path.display(), e);
                return ExitCode::from(EXIT_ERROR);
            }
            tracing::info!(path = %path.display(), tags = animations.len(), "wrote animations");
        }
        None => println!("{}", text),
    }

    ExitCode::from(EXIT_SUCCESS)
}
