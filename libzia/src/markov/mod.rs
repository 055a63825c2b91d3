//! Order-M linear predictive transform.
//!
//! Models an integer signal as an autoregressive process: a least-squares fit
//! on evenly strided windows yields M-1 weights plus a bias, and every window
//! of the signal leaves one integer residual. Reconstruction replays the same
//! f32 prediction over already rebuilt samples, so the round trip is
//! bit-exact.

pub mod predictor;
pub mod reconstruct;
pub mod solver;

pub use predictor::{compute_residuals, fit_predict, MarkovConfig, MarkovFrame};
pub use reconstruct::reconstruct;
pub use solver::{solve_least_squares, LeastSquares};
