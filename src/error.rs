//! Crate error type.
//!
//! Nothing here is fatal to a caller: load failures degrade to an empty
//! catalog and selection failures leave session state unchanged.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A catalog file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A catalog document could not be parsed as JSON.
    #[error("failed to parse catalog {source_name}: {source}")]
    Json {
        /// File name or `"embedded"` for the built-in data.
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    /// No catalog source was found in the data directory.
    #[error("no catalog data found in {0}")]
    MissingCatalog(PathBuf),

    /// An add-to-list request arrived without an equipment id.
    #[error("no equipment selected")]
    NoEquipmentSelected,

    /// The given id resolved to nothing in the catalog.
    #[error("unknown equipment: {0}")]
    UnknownEquipment(String),

    /// The simulator loadout already holds the maximum number of rings.
    #[error("all ring slots are in use")]
    RingSlotsFull,
}
