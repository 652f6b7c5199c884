//! Non-negative matrix factorization with multiplicative updates.

use log::debug;
use rand::prelude::*;

use super::TopicModel;
use super::vectorizer::DocumentTermMatrix;

const DIVISION_EPSILON: f64 = 1e-10;
const CONVERGENCE_TOL: f64 = 1e-4;

/// Factorizes `X ≈ W H` under the Frobenius norm; `H` holds the topics.
#[derive(Clone, Debug)]
pub struct NonNegativeMatrixFactorization {
    n_components: usize,
    max_iter: usize,
    seed: u64,
}

impl NonNegativeMatrixFactorization {
    pub fn new(n_components: usize) -> Self {
        NonNegativeMatrixFactorization {
            n_components,
            max_iter: 200,
            seed: 0,
        }
    }

    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Return the fitted `(W, H)` pair.
    fn factorize(&self, matrix: &DocumentTermMatrix) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
        let k = self.n_components;
        let v = matrix.n_terms();
        let n = matrix.n_documents();
        if k == 0 || v == 0 || n == 0 {
            return (vec![Vec::new(); n], vec![Vec::new(); k]);
        }
        let x = &matrix.counts;

        let mean = x.iter().flatten().sum::<f64>() / (n * v) as f64;
        let scale = (mean / k as f64).sqrt();
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut w: Vec<Vec<f64>> = (0..n)
            .map(|_| (0..k).map(|_| scale * rng.random_range(0.0..1.0)).collect())
            .collect();
        let mut h: Vec<Vec<f64>> = (0..k)
            .map(|_| (0..v).map(|_| scale * rng.random_range(0.0..1.0)).collect())
            .collect();

        let mut previous_error = reconstruction_error(x, &w, &h);
        for iteration in 0..self.max_iter {
            // H <- H * (W^T X) / (W^T W H)
            let wtx = mat_mul(&transpose(&w), x);
            let wtwh = mat_mul(&mat_mul(&transpose(&w), &w), &h);
            for t in 0..k {
                for j in 0..v {
                    h[t][j] *= wtx[t][j] / (wtwh[t][j] + DIVISION_EPSILON);
                }
            }

            // W <- W * (X H^T) / (W H H^T)
            let ht = transpose(&h);
            let xht = mat_mul(x, &ht);
            let whht = mat_mul(&w, &mat_mul(&h, &ht));
            for i in 0..n {
                for t in 0..k {
                    w[i][t] *= xht[i][t] / (whht[i][t] + DIVISION_EPSILON);
                }
            }

            let error = reconstruction_error(x, &w, &h);
            if previous_error > 0.0 && (previous_error - error) / previous_error < CONVERGENCE_TOL {
                debug!("nmf converged after {} iterations", iteration + 1);
                break;
            }
            previous_error = error;
        }

        (w, h)
    }
}

impl TopicModel for NonNegativeMatrixFactorization {
    fn fit(&self, matrix: &DocumentTermMatrix) -> Vec<Vec<f64>> {
        self.factorize(matrix).1
    }

    fn name(&self) -> &'static str {
        "nmf"
    }
}

fn transpose(m: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let cols = m.first().map_or(0, Vec::len);
    (0..cols).map(|j| m.iter().map(|row| row[j]).collect()).collect()
}

fn mat_mul(a: &[Vec<f64>], b: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let cols = b.first().map_or(0, Vec::len);
    a.iter()
        .map(|row| {
            let mut out = vec![0.0; cols];
            for (l, &a_il) in row.iter().enumerate() {
                for (j, &b_lj) in b[l].iter().enumerate() {
                    out[j] += a_il * b_lj;
                }
            }
            out
        })
        .collect()
}

fn reconstruction_error(x: &[Vec<f64>], w: &[Vec<f64>], h: &[Vec<f64>]) -> f64 {
    let wh = mat_mul(w, h);
    x.iter()
        .zip(&wh)
        .flat_map(|(xr, wr)| xr.iter().zip(wr).map(|(a, b)| (a - b) * (a - b)))
        .sum::<f64>()
        .sqrt()
}
