//! Gas species names.

use crate::boundary::{get_i32, read_string, str_arg, to_foreign_index};
use crate::errors::{PartMcError, PartMcResult};
use crate::handle::ForeignHandle;
use partmc_sys as sys;
use serde_json::Value;
use std::ffi::c_void;
use std::fmt;

/// The ordered gas species name table.
#[derive(Debug)]
pub struct GasData {
    handle: ForeignHandle,
}

impl GasData {
    /// Builds the table from a JSON list of species names.
    pub fn from_json(value: &Value) -> PartMcResult<Self> {
        let list = value.as_array().ok_or_else(|| {
            PartMcError::Schema("gas species data must be a list of names".into())
        })?;
        let mut names = Vec::with_capacity(list.len());
        for item in list {
            let name = item.as_str().ok_or_else(|| {
                PartMcError::Schema("gas species names must be strings".into())
            })?;
            names.push(name);
        }

        let mut handle = ForeignHandle::acquire(sys::f_gas_data_ctor, sys::f_gas_data_dtor)?;
        for name in names {
            let (ptr, len) = str_arg(name);
            unsafe { sys::f_gas_data_add_species(handle.borrow_mut(), ptr, &len) };
        }
        Ok(GasData { handle })
    }

    pub(crate) fn as_ptr(&self) -> *const c_void {
        self.handle.borrow()
    }

    pub fn len(&self) -> usize {
        get_i32(|p| unsafe { sys::f_gas_data_n_spec(self.handle.borrow(), p) }) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Host (0-based) index of the named species.
    pub fn spec_by_name(&self, name: &str) -> PartMcResult<usize> {
        let (ptr, len) = str_arg(name);
        let idx =
            get_i32(|p| unsafe { sys::f_gas_data_spec_by_name(self.handle.borrow(), ptr, &len, p) });
        if idx < 1 {
            Err(PartMcError::UnknownSpecies(name.to_string()))
        } else {
            Ok(idx as usize - 1)
        }
    }

    /// All species names, in table order.
    pub fn species(&self) -> PartMcResult<Vec<String>> {
        (0..self.len())
            .map(|i| {
                let f_idx = to_foreign_index(i);
                read_string(
                    || {
                        get_i32(|p| unsafe {
                            sys::f_gas_data_spec_name_size(self.handle.borrow(), &f_idx, p)
                        }) as usize
                    },
                    |buf, n| unsafe {
                        sys::f_gas_data_spec_name(self.handle.borrow(), &f_idx, buf, n)
                    },
                )
            })
            .collect()
    }
}

impl fmt::Display for GasData {
    /// Renders the species list as a JSON array, matching the construction
    /// document shape.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.species().map_err(|_| fmt::Error)?;
        write!(f, "{}", Value::from(names))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn names_round_trip() {
        let data = GasData::from_json(&json!(["SO2", "NO2", "O3"])).unwrap();
        assert_eq!(data.len(), 3);
        assert_eq!(data.species().unwrap(), vec!["SO2", "NO2", "O3"]);
        assert_eq!(data.spec_by_name("NO2").unwrap(), 1);
        assert!(matches!(
            data.spec_by_name("CH4"),
            Err(PartMcError::UnknownSpecies(_))
        ));
    }

    #[test]
    fn display_is_the_json_name_list() {
        let data = GasData::from_json(&json!(["SO2", "O3"])).unwrap();
        assert_eq!(data.to_string(), r#"["SO2","O3"]"#);
    }

    #[test]
    fn non_string_name_rejected() {
        assert!(GasData::from_json(&json!(["SO2", 3])).is_err());
    }
}
