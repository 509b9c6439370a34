//! Name ↔ 1-based code dispatch for the engine's closed variant sets.
//!
//! Each set is an enum deriving `num_enum` conversions plus a single ordered
//! name table; position in the table defines the engine code (index + 1), so
//! name→code and code→name can never drift apart.

use crate::errors::{PartMcError, PartMcResult};
use num_enum::TryFromPrimitive;

/// A closed set of engine variants addressed by name on the host side and by
/// 1-based integer code on the engine side.
pub trait VariantSet: Sized + Copy + Into<i32> + TryFromPrimitive<Primitive = i32> {
    /// Names ordered by engine code; `NAMES[i]` has code `i + 1`.
    const NAMES: &'static [&'static str];

    /// Engine code for this variant.
    fn code(self) -> i32 {
        self.into()
    }

    /// Host-facing name for this variant.
    fn name(self) -> &'static str {
        Self::NAMES[(self.code() - 1) as usize]
    }

    /// A bad name is a caller error.
    fn from_name(name: &str) -> PartMcResult<Self> {
        let pos = Self::NAMES
            .iter()
            .position(|n| *n == name)
            .ok_or_else(|| PartMcError::UnknownVariantName(name.to_string()))?;
        Self::from_code(pos as i32 + 1)
    }

    /// A bad code means the binding and the engine disagree on the table.
    fn from_code(code: i32) -> PartMcResult<Self> {
        Self::try_from_primitive(code).map_err(|_| PartMcError::UnknownVariantCode(code))
    }
}
