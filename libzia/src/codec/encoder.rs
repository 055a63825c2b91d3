use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{FrameKind, Sample, ZiaResult};
use crate::delta::delta_encode;
use crate::markov::MarkovConfig;
use crate::runs::{segment_runs, split_sparse};
use crate::Writer;

use super::frame::{DenseBody, SparseFrame};

/// which transform chain the encoder applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// predictor over the whole signal
    #[default]
    Markov,
    /// zero-run segmentation, then the predictor over the non-zero runs
    MarkovSparse,
    /// first-order differences
    Delta,
}

impl Mode {
    pub fn kind(self) -> FrameKind {
        match self {
            Mode::Markov => FrameKind::Markov,
            Mode::MarkovSparse => FrameKind::MarkovSparse,
            Mode::Delta => FrameKind::Delta,
        }
    }
}

pub struct Encoder {
    config: MarkovConfig,
    mode: Mode,
}

impl Encoder {
    pub fn new(order: usize) -> Self {
        Encoder {
            config: MarkovConfig::new(order),
            mode: Mode::Markov,
        }
    }

    pub fn with_training_samples(mut self, training_samples: usize) -> Self {
        self.config = self.config.with_training_samples(training_samples);
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn config(&self) -> MarkovConfig {
        self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// encode a signal into a zia container
    pub fn encode<T: Sample>(&self, signal: &[T]) -> ZiaResult<Vec<u8>> {
        let payload = match self.mode {
            Mode::Markov => rmp_serde::to_vec_named(&self.config.fit_predict(signal)?)?,
            Mode::MarkovSparse => rmp_serde::to_vec_named(&self.encode_sparse(signal)?)?,
            Mode::Delta => rmp_serde::to_vec_named(&delta_encode(signal))?,
        };

        let writer = Writer::new();
        Ok(writer.write(T::WIDTH, self.mode.kind(), signal.len() as u64, &payload))
    }

    /// segment, keep the non-zero runs and predict them
    pub fn encode_sparse<T: Sample>(&self, signal: &[T]) -> ZiaResult<SparseFrame<T>> {
        self.config.check()?;

        let run_lengths = segment_runs(signal);
        let dense = split_sparse(signal, &run_lengths)?;
        debug!(
            "sparse split: {} runs ({}-bit), {} of {} samples kept",
            run_lengths.len(),
            run_lengths.width().bits(),
            dense.len(),
            signal.len()
        );

        let dense = if dense.len() >= self.config.order {
            DenseBody::Markov(self.config.fit_predict(&dense)?)
        } else {
            DenseBody::Raw(dense)
        };

        Ok(SparseFrame { run_lengths, dense })
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Encoder {
            config: MarkovConfig::default(),
            mode: Mode::default(),
        }
    }
}
