use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::Vector;
use crate::error::{Error, Result};

/// Records at or above this government expenditure share are dropped.
pub const GOV_EXPENDITURE_CUTOFF: f64 = 80.0;

/// One country-year observation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Record {
    gov_expenditure_percent: f64,
    unemployment_percent: f64,
}

impl Record {
    pub fn new(gov_expenditure_percent: f64, unemployment_percent: f64) -> Self {
        Self {
            gov_expenditure_percent,
            unemployment_percent,
        }
    }

    pub fn gov_expenditure_percent(&self) -> f64 {
        self.gov_expenditure_percent
    }

    pub fn unemployment_percent(&self) -> f64 {
        self.unemployment_percent
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Government expenditure column (the predictor).
    pub fn features(&self) -> Vector {
        self.records
            .iter()
            .map(Record::gov_expenditure_percent)
            .collect()
    }

    /// Unemployment column (the target).
    pub fn labels(&self) -> Vector {
        self.records
            .iter()
            .map(Record::unemployment_percent)
            .collect()
    }

    /// Keep records whose government expenditure is strictly below `cutoff`,
    /// preserving their order.
    pub fn filter_below(&self, cutoff: f64) -> Self {
        let records = self
            .records
            .iter()
            .filter(|r| r.gov_expenditure_percent < cutoff)
            .copied()
            .collect();
        Self { records }
    }

    /// Shuffle-split into `(train, test)`.
    ///
    /// The test set takes `ceil(test_size * n)` records. Both subsets come out
    /// in permuted order, and the permutation depends only on `seed` and the
    /// number of records.
    pub fn train_test_split(&self, test_size: f64, seed: u64) -> Result<(Self, Self)> {
        if !(test_size > 0.0 && test_size < 1.0) {
            return Err(Error::InvalidSplit(format!(
                "test_size must be between 0 and 1, got {test_size}"
            )));
        }

        let n_samples = self.len();
        let n_test = (n_samples as f64 * test_size).ceil() as usize;
        let n_train = n_samples.saturating_sub(n_test);

        if n_test == 0 || n_train == 0 {
            return Err(Error::InvalidSplit(format!(
                "{n_samples} samples with test_size={test_size} leaves {n_train} training and {n_test} test samples"
            )));
        }

        let mut indices: Vec<usize> = (0..n_samples).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);

        let (test_idx, train_idx) = indices.split_at(n_test);
        let pick = |idx: &[usize]| Self {
            records: idx.iter().map(|&i| self.records[i]).collect(),
        };

        Ok((pick(train_idx), pick(test_idx)))
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
