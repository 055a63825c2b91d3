use serde::{Deserialize, Serialize};

use crate::core::{Sample, ZiaResult};
use crate::markov::MarkovFrame;
use crate::runs::{merge_sparse, RunLengths};

/// samples of the non-zero runs, predicted when long enough
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Sample")]
pub enum DenseBody<T> {
    Markov(MarkovFrame<T>),
    /// dense part shorter than the model order
    Raw(Vec<T>),
}

/// markov-sparse payload: run lengths plus the predicted dense samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "T: Sample")]
pub struct SparseFrame<T> {
    pub run_lengths: RunLengths,
    pub dense: DenseBody<T>,
}

impl<T: Sample> SparseFrame<T> {
    pub fn signal_len(&self) -> usize {
        self.run_lengths.total()
    }

    pub fn reconstruct(&self) -> ZiaResult<Vec<T>> {
        let dense = match &self.dense {
            DenseBody::Markov(frame) => frame.reconstruct()?,
            DenseBody::Raw(samples) => samples.clone(),
        };
        merge_sparse(&dense, &self.run_lengths)
    }
}
