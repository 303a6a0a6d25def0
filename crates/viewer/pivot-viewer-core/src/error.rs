//! Load-path errors. The only explicitly handled failure in the viewer is
//! "clip-set failed to load"; everything past loading is programmer error and
//! surfaces as-is.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("clip-set parse failed: {0}")]
    Parse(String),
    #[error("required clip '{0}' missing from clip-set")]
    MissingClip(&'static str),
}
