//! Dataset splits: on-disk format, shuffling, and synthetic generation.
use anyhow::{anyhow, bail, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Row-major matrix type.
pub type Matrix = Vec<Vec<f64>>;

/// One split of the classification dataset: a feature matrix paired
/// row-for-row with a one-hot label matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSplit {
    pub features: Matrix,
    pub labels: Matrix,
}

impl DatasetSplit {
    /// Number of instances in the split.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Check the row-pairing invariant and rectangularity.
    pub fn validate(&self) -> Result<()> {
        if self.features.len() != self.labels.len() {
            bail!(
                "feature/label row count mismatch: {} vs {}",
                self.features.len(),
                self.labels.len()
            );
        }
        if self.features.is_empty() {
            bail!("split is empty");
        }
        let feat_width = self.features[0].len();
        let label_width = self.labels[0].len();
        for (i, (f, l)) in self.features.iter().zip(&self.labels).enumerate() {
            if f.len() != feat_width {
                bail!("ragged feature row {} (width {})", i, f.len());
            }
            if l.len() != label_width {
                bail!("ragged label row {} (width {})", i, l.len());
            }
        }
        Ok(())
    }

    /// Feature width (0 for an empty split).
    pub fn num_features(&self) -> usize {
        self.features.first().map_or(0, |r| r.len())
    }

    /// Label width (0 for an empty split).
    pub fn num_classes(&self) -> usize {
        self.labels.first().map_or(0, |r| r.len())
    }
}

/// One-hot encode
pub fn one_hot(label: usize, num_classes: usize) -> Vec<f64> {
    let mut v = vec![0.0; num_classes];
    if label < num_classes {
        v[label] = 1.0;
    }
    v
}

/// Save a split as gzipped JSON.
pub fn save_split<P: AsRef<Path>>(split: &DatasetSplit, path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_vec(split)?;
    let file = File::create(path)?;
    let mut enc = GzEncoder::new(file, Compression::default());
    enc.write_all(&json)?;
    enc.finish()?;
    Ok(())
}

/// Load a split from gzipped JSON and validate it.
pub fn load_split<P: AsRef<Path>>(path: P) -> Result<DatasetSplit> {
    let path = path.as_ref();
    let file =
        File::open(path).map_err(|e| anyhow!("failed to open {}: {}", path.display(), e))?;
    let mut dec = GzDecoder::new(file);
    let mut buf = Vec::new();
    dec.read_to_end(&mut buf)
        .map_err(|e| anyhow!("gzip read error on {}: {}", path.display(), e))?;
    let split: DatasetSplit = serde_json::from_slice(&buf)
        .map_err(|e| anyhow!("bad split format in {}: {}", path.display(), e))?;
    split.validate()?;
    Ok(split)
}

/// Permute the rows of a split in place, keeping feature row i paired with
/// label row i. One shared permutation is applied to both matrices.
pub fn shuffle_split<R: Rng>(split: &mut DatasetSplit, rng: &mut R) {
    let mut indices: Vec<usize> = (0..split.len()).collect();
    indices.as_mut_slice().shuffle(rng);
    split.features = indices.iter().map(|&i| split.features[i].clone()).collect();
    split.labels = indices.iter().map(|&i| split.labels[i].clone()).collect();
}

// Class centers far enough apart that the three blobs barely overlap.
const BLOB_CENTERS: [[f64; 3]; 3] = [
    [2.0, 0.0, -2.0],
    [-2.0, 2.0, 0.0],
    [0.0, -2.0, 2.0],
];
const BLOB_STDDEV: f64 = 0.5;

fn generate_blob_split<R: Rng>(per_class: usize, rng: &mut R) -> DatasetSplit {
    let noise = Normal::new(0.0, BLOB_STDDEV).expect("valid normal parameters");
    let mut features = Vec::with_capacity(per_class * BLOB_CENTERS.len());
    let mut labels = Vec::with_capacity(per_class * BLOB_CENTERS.len());
    // Class-contiguous on purpose: the training loop is expected to shuffle.
    for (class, center) in BLOB_CENTERS.iter().enumerate() {
        for _ in 0..per_class {
            let row: Vec<f64> = center.iter().map(|&c| c + noise.sample(rng)).collect();
            features.push(row);
            labels.push(one_hot(class, BLOB_CENTERS.len()));
        }
    }
    DatasetSplit { features, labels }
}

/// Generate separable synthetic train/validation/test splits: three Gaussian
/// blobs in 3-D, one-hot labeled, rows ordered class by class.
pub fn generate_classification_splits<R: Rng>(
    train_per_class: usize,
    validation_per_class: usize,
    test_per_class: usize,
    rng: &mut R,
) -> (DatasetSplit, DatasetSplit, DatasetSplit) {
    (
        generate_blob_split(train_per_class, rng),
        generate_blob_split(validation_per_class, rng),
        generate_blob_split(test_per_class, rng),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::thread_rng;

    fn sample_split() -> DatasetSplit {
        DatasetSplit {
            features: vec![
                vec![1.0, 2.0, 3.0],
                vec![4.0, 5.0, 6.0],
                vec![7.0, 8.0, 9.0],
                vec![10.0, 11.0, 12.0],
            ],
            labels: vec![
                one_hot(0, 3),
                one_hot(1, 3),
                one_hot(2, 3),
                one_hot(0, 3),
            ],
        }
    }

    #[test]
    fn one_hot_sets_exactly_one_entry() {
        let v = one_hot(1, 3);
        assert_eq!(v, vec![0.0, 1.0, 0.0]);
        assert_eq!(one_hot(5, 3), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn shuffle_preserves_feature_label_pairs() {
        let original = sample_split();
        let mut shuffled = original.clone();
        let mut rng = thread_rng();
        shuffle_split(&mut shuffled, &mut rng);

        assert_eq!(shuffled.len(), original.len());
        let mut before: Vec<(Vec<u64>, Vec<u64>)> = original
            .features
            .iter()
            .zip(&original.labels)
            .map(|(f, l)| (bits(f), bits(l)))
            .collect();
        let mut after: Vec<(Vec<u64>, Vec<u64>)> = shuffled
            .features
            .iter()
            .zip(&shuffled.labels)
            .map(|(f, l)| (bits(f), bits(l)))
            .collect();
        before.sort();
        after.sort();
        assert_eq!(before, after, "shuffle must permute pairs, not break them");
    }

    fn bits(row: &[f64]) -> Vec<u64> {
        row.iter().map(|v| v.to_bits()).collect()
    }

    #[test]
    fn validate_rejects_mismatched_rows() {
        let mut split = sample_split();
        split.labels.pop();
        assert!(split.validate().is_err());
    }

    #[test]
    fn validate_rejects_ragged_features() {
        let mut split = sample_split();
        split.features[2].pop();
        assert!(split.validate().is_err());
    }

    #[test]
    fn save_and_load_round_trip() {
        let split = sample_split();
        let dir = std::env::temp_dir().join("shallow_ml_split_test");
        let path = dir.join("train.gz");
        save_split(&split, &path).unwrap();
        let loaded = load_split(&path).unwrap();
        assert_eq!(loaded.features, split.features);
        assert_eq!(loaded.labels, split.labels);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn generated_splits_are_well_formed() {
        let mut rng = thread_rng();
        let (train, val, test) = generate_classification_splits(10, 5, 5, &mut rng);
        for split in [&train, &val, &test] {
            split.validate().unwrap();
            assert_eq!(split.num_features(), 3);
            assert_eq!(split.num_classes(), 3);
        }
        assert_eq!(train.len(), 30);
        assert_eq!(val.len(), 15);
        // First ten training labels share a class: generation is contiguous.
        assert!(train.labels[..10].iter().all(|l| l == &train.labels[0]));
    }
}
