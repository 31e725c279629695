//! Renderer configuration for the CLI.
//!
//! Options come from an optional TOML file (same shape as `RenderOptions`),
//! then command-line flags are layered on top.
//!
//! ```toml
//! escape_prose = true
//! words_per_minute = 250
//!
//! [parse]
//! unterminated_fence = "drop"
//! ```

use std::path::Path;

use folio_markdown::FencePolicy;
use folio_render::RenderOptions;
use tracing::debug;

use crate::error::CliError;

/// Flags that override values from the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub escape_prose: bool,
    pub drop_unterminated: bool,
    pub words_per_minute: Option<usize>,
}

/// Load options from `path` (or defaults) and apply `overrides`.
pub fn load(path: Option<&Path>, overrides: Overrides) -> Result<RenderOptions, CliError> {
    let options = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let options = parse(&text).map_err(|source| CliError::Config {
                path: path.to_path_buf(),
                source,
            })?;
            debug!(path = %path.display(), "loaded config");
            options
        }
        None => RenderOptions::default(),
    };
    Ok(apply(options, overrides))
}

pub fn parse(text: &str) -> Result<RenderOptions, toml::de::Error> {
    toml::from_str(text)
}

/// Flags only ever switch behavior on; they never reset a value the file set.
pub fn apply(mut options: RenderOptions, overrides: Overrides) -> RenderOptions {
    if overrides.escape_prose {
        options.escape_prose = true;
    }
    if overrides.drop_unterminated {
        options.parse.unterminated_fence = FencePolicy::Drop;
    }
    if let Some(wpm) = overrides.words_per_minute {
        options.words_per_minute = wpm;
    }
    options
}
