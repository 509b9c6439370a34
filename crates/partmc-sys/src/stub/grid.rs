use super::{fill_f64, install, state, state_mut, teardown};
use crate::diag;
use std::ffi::{c_int, c_void};

// Spacing codes: 1 log, 2 linear.
#[derive(Debug, Clone)]
pub(crate) struct StubBinGrid {
    pub kind: i32,
    pub edges: Vec<f64>,
}

impl StubBinGrid {
    pub fn centers(&self) -> Vec<f64> {
        self.edges
            .windows(2)
            .map(|w| match self.kind {
                1 => (w[0] * w[1]).sqrt(),
                _ => 0.5 * (w[0] + w[1]),
            })
            .collect()
    }

    pub fn widths(&self) -> Vec<f64> {
        self.edges
            .windows(2)
            .map(|w| match self.kind {
                1 => (w[1] / w[0]).log10(),
                _ => w[1] - w[0],
            })
            .collect()
    }
}

pub unsafe extern "C" fn f_bin_grid_ctor(ptr: *mut *mut c_void) {
    diag::hit("f_bin_grid_ctor");
    unsafe {
        install(
            ptr,
            StubBinGrid {
                kind: 1,
                edges: Vec::new(),
            },
        )
    }
}

pub unsafe extern "C" fn f_bin_grid_dtor(ptr: *mut *mut c_void) {
    diag::hit("f_bin_grid_dtor");
    unsafe { teardown::<StubBinGrid>(ptr) }
}

pub unsafe extern "C" fn f_bin_grid_init(
    ptr: *mut c_void,
    n_bin: *const c_int,
    kind: *const c_int,
    min: *const f64,
    max: *const f64,
) {
    diag::hit("f_bin_grid_init");
    unsafe {
        let n = *n_bin as usize;
        let grid = state_mut::<StubBinGrid>(ptr);
        grid.kind = *kind;
        grid.edges = (0..=n)
            .map(|i| {
                let frac = i as f64 / n as f64;
                match *kind {
                    1 => *min * (*max / *min).powf(frac),
                    _ => *min + frac * (*max - *min),
                }
            })
            .collect();
    }
}

pub unsafe extern "C" fn f_bin_grid_size(ptr: *const c_void, len: *mut c_int) {
    diag::hit("f_bin_grid_size");
    unsafe { *len = (state::<StubBinGrid>(ptr).edges.len().max(1) - 1) as c_int }
}

pub unsafe extern "C" fn f_bin_grid_edges(ptr: *const c_void, arr: *mut f64, arr_size: *const c_int) {
    diag::hit("f_bin_grid_edges");
    unsafe { fill_f64(arr, arr_size, &state::<StubBinGrid>(ptr).edges) }
}

pub unsafe extern "C" fn f_bin_grid_centers(
    ptr: *const c_void,
    arr: *mut f64,
    arr_size: *const c_int,
) {
    diag::hit("f_bin_grid_centers");
    unsafe { fill_f64(arr, arr_size, &state::<StubBinGrid>(ptr).centers()) }
}

pub unsafe extern "C" fn f_bin_grid_widths(
    ptr: *const c_void,
    arr: *mut f64,
    arr_size: *const c_int,
) {
    diag::hit("f_bin_grid_widths");
    unsafe { fill_f64(arr, arr_size, &state::<StubBinGrid>(ptr).widths()) }
}
