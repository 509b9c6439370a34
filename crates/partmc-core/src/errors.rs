use thiserror::Error;

pub type PartMcResult<T> = anyhow::Result<T, PartMcError>;

/// Errors raised by the marshalling layer.
///
/// All of these are detected on the Rust side before (or, for
/// [`PartMcError::UnconsumedKeys`], after) the corresponding boundary call;
/// the engine ABI itself has no error channel.
#[derive(Error, Debug)]
pub enum PartMcError {
    /// A configuration document fails required-key, type, or cross-field
    /// validation. Raised before any foreign call.
    #[error("invalid configuration: {0}")]
    Schema(String),

    /// A caller-supplied array disagrees with the entity's expected
    /// dimension. Raised before crossing the boundary.
    #[error("{context}: expected {expected} elements, got {actual}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An index outside the entity's current extent.
    #[error("index {index} out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// A variant name outside the known set was supplied by the caller.
    #[error("unknown variant name {0:?}")]
    UnknownVariantName(String),

    /// The engine reported a variant code outside the known set. This is an
    /// internal-consistency failure (binding and engine disagree on the
    /// variant table), not a user error.
    #[error("unknown variant code {0} (binding out of sync with the engine)")]
    UnknownVariantCode(i32),

    /// A species name not present in the species table.
    #[error("unknown species {0:?}")]
    UnknownSpecies(String),

    /// Construction succeeded but the document contained keys the schema
    /// never read, most likely a typo.
    #[error("unrecognized configuration keys: {}", .0.join(", "))]
    UnconsumedKeys(Vec<String>),

    /// A foreign constructor produced a null handle.
    #[error("foreign constructor returned a null handle")]
    NullHandle,

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
