//! Latent Dirichlet Allocation fitted with batch variational Bayes.

use log::debug;
use rand::prelude::*;

use super::TopicModel;
use super::vectorizer::DocumentTermMatrix;

const MEAN_CHANGE_TOL: f64 = 1e-3;
const MAX_DOC_UPDATE_ITER: usize = 100;
const EPSILON: f64 = 1e-100;

/// Batch variational LDA with symmetric `1 / n_components` priors.
#[derive(Clone, Debug)]
pub struct LatentDirichletAllocation {
    n_components: usize,
    max_iter: usize,
    seed: u64,
}

impl LatentDirichletAllocation {
    pub fn new(n_components: usize) -> Self {
        LatentDirichletAllocation {
            n_components,
            max_iter: 10,
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

    /// Infer the document-topic posterior of one document and accumulate
    /// its sufficient statistics into `sstats`.
    fn update_document(
        &self,
        counts: &[f64],
        exp_topic_word: &[Vec<f64>],
        prior: f64,
        sstats: &mut [Vec<f64>],
    ) {
        let k = self.n_components;
        let nonzero: Vec<(usize, f64)> = counts
            .iter()
            .enumerate()
            .filter(|(_, c)| **c > 0.0)
            .map(|(w, c)| (w, *c))
            .collect();

        let mut gamma = vec![1.0; k];
        let mut exp_doc_topic = exp_dirichlet_expectation(&gamma);
        let mut norm_phi = vec![0.0; nonzero.len()];

        for _ in 0..MAX_DOC_UPDATE_ITER {
            for (slot, &(w, _)) in nonzero.iter().enumerate() {
                norm_phi[slot] = (0..k)
                    .map(|t| exp_doc_topic[t] * exp_topic_word[t][w])
                    .sum::<f64>()
                    + EPSILON;
            }

            let last_gamma = gamma.clone();
            for t in 0..k {
                let weighted: f64 = nonzero
                    .iter()
                    .enumerate()
                    .map(|(slot, &(w, c))| c / norm_phi[slot] * exp_topic_word[t][w])
                    .sum();
                gamma[t] = prior + exp_doc_topic[t] * weighted;
            }
            exp_doc_topic = exp_dirichlet_expectation(&gamma);

            let mean_change = gamma
                .iter()
                .zip(&last_gamma)
                .map(|(a, b)| (a - b).abs())
                .sum::<f64>()
                / k as f64;
            if mean_change < MEAN_CHANGE_TOL {
                break;
            }
        }

        for (slot, &(w, _)) in nonzero.iter().enumerate() {
            norm_phi[slot] = (0..k)
                .map(|t| exp_doc_topic[t] * exp_topic_word[t][w])
                .sum::<f64>()
                + EPSILON;
        }
        for t in 0..k {
            for (slot, &(w, c)) in nonzero.iter().enumerate() {
                sstats[t][w] += exp_doc_topic[t] * c / norm_phi[slot];
            }
        }
    }
}

impl TopicModel for LatentDirichletAllocation {
    fn fit(&self, matrix: &DocumentTermMatrix) -> Vec<Vec<f64>> {
        let k = self.n_components;
        let v = matrix.n_terms();
        if k == 0 || v == 0 {
            return vec![Vec::new(); k];
        }

        let prior = 1.0 / k as f64;
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut components: Vec<Vec<f64>> = (0..k)
            .map(|_| (0..v).map(|_| rng.random_range(0.9..1.1)).collect())
            .collect();

        for iteration in 0..self.max_iter {
            let exp_topic_word: Vec<Vec<f64>> = components
                .iter()
                .map(|row| exp_dirichlet_expectation(row))
                .collect();

            let mut sstats = vec![vec![0.0; v]; k];
            for counts in &matrix.counts {
                self.update_document(counts, &exp_topic_word, prior, &mut sstats);
            }

            for t in 0..k {
                for w in 0..v {
                    components[t][w] = prior + sstats[t][w] * exp_topic_word[t][w];
                }
            }
            debug!("lda iteration {} of {}", iteration + 1, self.max_iter);
        }

        components
    }

    fn name(&self) -> &'static str {
        "lda"
    }
}

/// `exp(E[log x])` for `x ~ Dirichlet(alpha)`.
fn exp_dirichlet_expectation(alpha: &[f64]) -> Vec<f64> {
    let total = digamma(alpha.iter().sum());
    alpha.iter().map(|&a| (digamma(a) - total).exp()).collect()
}

/// The digamma function for positive arguments.
pub(crate) fn digamma(mut x: f64) -> f64 {
    let mut result = 0.0;
    while x < 10.0 {
        result -= 1.0 / x;
        x += 1.0;
    }
    let inv = 1.0 / x;
    let inv2 = inv * inv;
    result + x.ln()
        - 0.5 * inv
        - inv2
            * (1.0 / 12.0
                - inv2 * (1.0 / 120.0 - inv2 * (1.0 / 252.0 - inv2 * (1.0 / 240.0 - inv2 / 132.0))))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(vocabulary: &[&str], counts: Vec<Vec<f64>>) -> DocumentTermMatrix {
        DocumentTermMatrix {
            vocabulary: vocabulary.iter().map(|s| s.to_string()).collect(),
            counts,
        }
    }

    #[test]
    fn test_digamma() {
        const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;
        assert!((digamma(1.0) + EULER_GAMMA).abs() < 1e-10);
        assert!((digamma(2.0) - (1.0 - EULER_GAMMA)).abs() < 1e-10);
        assert!((digamma(0.5) + EULER_GAMMA + 2.0 * 2f64.ln()).abs() < 1e-10);
        assert!((digamma(1.0) + EULER_GAMMA).abs() < 1e-12);
    }

    #[test]
    fn test_digamma_recurrence() {
        for x in [0.25, 3.7, 9.5, 12.0, 40.0] {
            assert!((digamma(x + 1.0) - digamma(x) - 1.0 / x).abs() < 1e-12);
        }
    }

    #[test]
    fn test_fit_shape_and_positivity() {
        let m = matrix(&["apple", "pear", "plum"], vec![vec![3.0, 1.0, 0.0]]);
        let components = LatentDirichletAllocation::new(2).fit(&m);
        assert_eq!(components.len(), 2);
        for row in &components {
            assert_eq!(row.len(), 3);
            assert!(row.iter().all(|w| *w > 0.0 && w.is_finite()));
        }
    }

    #[test]
    fn test_frequent_terms_weigh_more() {
        let m = matrix(&["apple", "pear", "plum"], vec![vec![10.0, 1.0, 0.0]]);
        let components = LatentDirichletAllocation::new(1).fit(&m);
        assert!(components[0][0] > components[0][1]);
        assert!(components[0][1] > components[0][2]);
    }

    #[test]
    fn test_seeded_fit_is_deterministic() {
        let m = matrix(&["a1", "b2", "c3"], vec![vec![1.0, 2.0, 3.0]]);
        let model = LatentDirichletAllocation::new(3).with_seed(7);
        assert_eq!(model.fit(&m), model.fit(&m));
    }

    #[test]
    fn test_empty_vocabulary() {
        let m = matrix(&[], vec![vec![]]);
        let components = LatentDirichletAllocation::new(2).fit(&m);
        assert_eq!(components, vec![Vec::<f64>::new(), Vec::new()]);
    }
}
