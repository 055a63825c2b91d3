//! First-order delta transform, the baseline the markov predictor is
//! measured against.

use serde::{Deserialize, Serialize};

use crate::core::Sample;

/// First sample plus wrapping differences of a signal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "T: Sample")]
pub struct DeltaFrame<T> {
    /// `None` for an empty signal
    pub first: Option<T>,
    /// `diffs[i] = x[i + 1] - x[i]`, wrapping in the native width
    pub diffs: Vec<T>,
}

impl<T: Sample> DeltaFrame<T> {
    pub fn signal_len(&self) -> usize {
        match self.first {
            Some(_) => self.diffs.len() + 1,
            None => 0,
        }
    }
}

pub fn delta_encode<T: Sample>(signal: &[T]) -> DeltaFrame<T> {
    DeltaFrame {
        first: signal.first().copied(),
        diffs: signal.windows(2).map(|w| w[1].wrapping_sub(w[0])).collect(),
    }
}

/// cumulative sum of the diffs, starting from `first`
pub fn delta_decode<T: Sample>(frame: &DeltaFrame<T>) -> Vec<T> {
    let Some(first) = frame.first else {
        return Vec::new();
    };

    let mut samples = Vec::with_capacity(frame.diffs.len() + 1);
    let mut acc = first;
    samples.push(acc);
    for &d in &frame.diffs {
        acc = acc.wrapping_add(d);
        samples.push(acc);
    }
    samples
}
