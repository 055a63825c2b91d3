//! Zero-run segmentation.
//!
//! Rewrites a signal as alternating run lengths: non-zero run, zero run,
//! non-zero run, ... Only zero stretches of at least [`MIN_ZERO_RUN`]
//! samples count as zero runs; shorter ones stay inside the surrounding
//! non-zero run. The run list is collected in `u32` and narrowed afterwards
//! to the smallest unsigned width that holds its maximum.

pub mod sparse;

use serde::{Deserialize, Serialize};

use crate::core::{Sample, MIN_ZERO_RUN};

pub use sparse::{merge_sparse, split_sparse};

/// element width of a run-length sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunWidth {
    U8,
    U16,
    U32,
}

impl RunWidth {
    /// narrowest width that can hold `max_run`
    pub fn for_max(max_run: u32) -> Self {
        if max_run < 256 {
            RunWidth::U8
        } else if max_run < 65536 {
            RunWidth::U16
        } else {
            RunWidth::U32
        }
    }

    pub fn bits(self) -> u8 {
        match self {
            RunWidth::U8 => 8,
            RunWidth::U16 => 16,
            RunWidth::U32 => 32,
        }
    }
}

/// Run-length sequence stored at its narrowest width
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunLengths {
    U8(Vec<u8>),
    U16(Vec<u16>),
    U32(Vec<u32>),
}

impl RunLengths {
    /// narrow a wide run list to the smallest width holding its maximum
    pub fn from_wide(runs: Vec<u32>) -> Self {
        let max_run = runs.iter().copied().max().unwrap_or(0);
        match RunWidth::for_max(max_run) {
            RunWidth::U8 => RunLengths::U8(runs.iter().map(|&r| r as u8).collect()),
            RunWidth::U16 => RunLengths::U16(runs.iter().map(|&r| r as u16).collect()),
            RunWidth::U32 => RunLengths::U32(runs),
        }
    }

    pub fn width(&self) -> RunWidth {
        match self {
            RunLengths::U8(_) => RunWidth::U8,
            RunLengths::U16(_) => RunWidth::U16,
            RunLengths::U32(_) => RunWidth::U32,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RunLengths::U8(v) => v.len(),
            RunLengths::U16(v) => v.len(),
            RunLengths::U32(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, idx: usize) -> Option<u32> {
        match self {
            RunLengths::U8(v) => v.get(idx).map(|&r| r as u32),
            RunLengths::U16(v) => v.get(idx).map(|&r| r as u32),
            RunLengths::U32(v) => v.get(idx).copied(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    pub fn max(&self) -> u32 {
        self.iter().max().unwrap_or(0)
    }

    pub fn to_u32_vec(&self) -> Vec<u32> {
        self.iter().collect()
    }

    /// total number of samples the runs cover
    pub fn total(&self) -> usize {
        self.iter().map(|r| r as usize).sum()
    }

    /// samples covered by non-zero runs (even positions)
    pub fn non_zero_total(&self) -> usize {
        self.iter().step_by(2).map(|r| r as usize).sum()
    }
}

/// Segment `signal` into alternating non-zero / zero run lengths.
///
/// A zero run starts only where a full window of [`MIN_ZERO_RUN`] zeros
/// begins; it then extends over every following zero. A trailing zero tail
/// shorter than the window is counted in the final non-zero run. Every run
/// must fit in `u32`.
///
/// # Example
/// ```
/// # use libzia::runs::{segment_runs, RunLengths};
/// let mut signal = vec![5i16; 10];
/// signal.extend([0; 10]);
/// signal.extend([7, 7]);
/// assert_eq!(segment_runs(&signal), RunLengths::U8(vec![10, 10, 2]));
/// ```
pub fn segment_runs<T: Sample>(signal: &[T]) -> RunLengths {
    RunLengths::from_wide(collect_runs(signal))
}

fn collect_runs<T: Sample>(signal: &[T]) -> Vec<u32> {
    let n = signal.len();
    let mut runs = Vec::new();
    let mut non_zero_run: u32 = 0;
    let mut i = 0;

    while i < n {
        if starts_zero_run(signal, i) {
            runs.push(non_zero_run);
            non_zero_run = 0;

            let end = signal[i..]
                .iter()
                .position(|s| !s.is_zero())
                .map_or(n, |offset| i + offset);
            debug_assert!(end - i <= u32::MAX as usize);
            runs.push((end - i) as u32);
            i = end;
        } else {
            non_zero_run += 1;
            i += 1;
        }
    }

    if non_zero_run > 0 {
        runs.push(non_zero_run);
    }

    runs
}

#[inline]
fn starts_zero_run<T: Sample>(signal: &[T], i: usize) -> bool {
    signal
        .get(i..i + MIN_ZERO_RUN)
        .is_some_and(|window| window.iter().all(|s| s.is_zero()))
}
