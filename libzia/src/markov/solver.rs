//! Least-squares solve by column-pivoted Householder QR in f32.
//!
//! This is the pinned solver behind every coefficient vector the crate
//! produces. Rank-deficient systems (a perfectly linear ramp, a constant
//! signal) have many least-squares minimisers; the one returned here is the
//! basic solution of the pivoted factorisation, with the coefficients of
//! columns beyond the numerical rank set to zero.
//!
//! Pivot rule: at step `k` pick the remaining column with the largest
//! squared 2-norm over rows `k..`, recomputed from scratch each step, lowest
//! index on ties. Rank cutoff: `|R[k,k]| <= eps * min(m, n) * |R[0,0]|`.

use nalgebra::{DMatrix, DVector};

/// Solution of `min ||A x - b||²`
#[derive(Debug, Clone, PartialEq)]
pub struct LeastSquares {
    pub solution: Vec<f32>,
    /// numerical rank detected during factorisation
    pub rank: usize,
}

/// Solve `min ||a * x - b||²` for `x`.
///
/// # Panics
///
/// Panics if `b.len() != a.nrows()`.
pub fn solve_least_squares(mut a: DMatrix<f32>, mut b: DVector<f32>) -> LeastSquares {
    let rows = a.nrows();
    let cols = a.ncols();
    assert_eq!(b.len(), rows, "right-hand side must have one entry per row");

    let size = rows.min(cols);
    let mut perm: Vec<usize> = (0..cols).collect();
    let mut max_pivot = 0.0f32;

    for k in 0..size {
        // pivot column
        let mut best = k;
        let mut best_norm = column_norm_sq(&a, k, k);
        for j in (k + 1)..cols {
            let norm = column_norm_sq(&a, j, k);
            if norm > best_norm {
                best = j;
                best_norm = norm;
            }
        }
        if best != k {
            a.swap_columns(k, best);
            perm.swap(k, best);
        }
        if k == 0 {
            max_pivot = best_norm.sqrt();
        }

        householder_step(&mut a, &mut b, k, best_norm.sqrt());
    }

    let threshold = f32::EPSILON * size as f32 * max_pivot;
    let rank = (0..size)
        .take_while(|&k| a[(k, k)].abs() > threshold)
        .count();

    // back substitution on the leading rank x rank block of R
    let mut z = vec![0.0f32; cols];
    for i in (0..rank).rev() {
        let mut acc = b[i];
        for j in (i + 1)..rank {
            acc -= a[(i, j)] * z[j];
        }
        z[i] = acc / a[(i, i)];
    }

    let mut solution = vec![0.0f32; cols];
    for (k, &col) in perm.iter().enumerate() {
        solution[col] = z[k];
    }

    LeastSquares { solution, rank }
}

fn column_norm_sq(a: &DMatrix<f32>, col: usize, from_row: usize) -> f32 {
    let mut sum = 0.0f32;
    for i in from_row..a.nrows() {
        let v = a[(i, col)];
        sum += v * v;
    }
    sum
}

/// Reflect column `k` (rows `k..`) onto `beta * e_k` and apply the same
/// reflector to the trailing columns and to `b`.
fn householder_step(a: &mut DMatrix<f32>, b: &mut DVector<f32>, k: usize, norm: f32) {
    let rows = a.nrows();
    let cols = a.ncols();
    if norm == 0.0 {
        return;
    }

    let x0 = a[(k, k)];
    let beta = if x0 >= 0.0 { -norm } else { norm };
    let tau = (beta - x0) / beta;
    let scale = 1.0 / (x0 - beta);

    // v = [1, x[k+1..] * scale]
    let mut v = Vec::with_capacity(rows - k);
    v.push(1.0f32);
    for i in (k + 1)..rows {
        v.push(a[(i, k)] * scale);
    }

    for j in (k + 1)..cols {
        let mut dot = 0.0f32;
        for (offset, &vi) in v.iter().enumerate() {
            dot += vi * a[(k + offset, j)];
        }
        let s = tau * dot;
        for (offset, &vi) in v.iter().enumerate() {
            a[(k + offset, j)] -= s * vi;
        }
    }

    let mut dot = 0.0f32;
    for (offset, &vi) in v.iter().enumerate() {
        dot += vi * b[k + offset];
    }
    let s = tau * dot;
    for (offset, &vi) in v.iter().enumerate() {
        b[k + offset] -= s * vi;
    }

    a[(k, k)] = beta;
    for i in (k + 1)..rows {
        a[(i, k)] = 0.0;
    }
}
