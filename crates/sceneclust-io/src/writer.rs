//! JSON and CSV result writers for reordering, assessment, and scaling outputs.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use sceneclust_labels::ReorderResult;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::domain::{ExperimentName, StatsDataset};
use crate::report::AssessReport;
use crate::IoError;

/// Writes reordering, assessment, and scaled-data results to files.
///
/// Creates the output directory on construction if it does not exist.
/// Output files are named `{experiment}_remap.json`,
/// `{experiment}_assess.json`, and `{experiment}_scaled.csv`.
pub struct ResultWriter {
    output_dir: PathBuf,
    experiment: ExperimentName,
}

impl ResultWriter {
    /// Create a new writer targeting the given directory and experiment name.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::OutputDirCreate`] if the directory cannot be created.
    #[instrument(skip_all, fields(dir = %output_dir.display(), experiment = %experiment))]
    pub fn new(output_dir: &Path, experiment: ExperimentName) -> Result<Self, IoError> {
        fs::create_dir_all(output_dir).map_err(|e| IoError::OutputDirCreate {
            path: output_dir.to_path_buf(),
            source: e,
        })?;
        debug!("output directory ready");
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            experiment,
        })
    }

    /// Return the path of the file with the given suffix for this experiment.
    #[must_use]
    pub fn path_for(&self, suffix: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}_{suffix}", self.experiment.as_str()))
    }

    /// Write a reordering result to `{experiment}_remap.json`.
    ///
    /// `original` must be the sequence the result was fitted on.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::WriteFile`] if the file cannot be written.
    #[instrument(skip_all)]
    pub fn write_remap(
        &self,
        partition: usize,
        original: &[i64],
        result: &ReorderResult,
    ) -> Result<PathBuf, IoError> {
        let path = self.path_for("remap.json");
        let artifact = RemapArtifact::new(self.experiment.as_str(), partition, original, result);
        self.write_json(&path, &artifact)?;
        info!(path = %path.display(), "remap result written");
        Ok(path)
    }

    /// Write a reordering result with its scenario assessment to
    /// `{experiment}_assess.json`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::WriteFile`] if the file cannot be written.
    #[instrument(skip_all)]
    pub fn write_assess(
        &self,
        partition: usize,
        original: &[i64],
        result: &ReorderResult,
        report: &AssessReport,
    ) -> Result<PathBuf, IoError> {
        let path = self.path_for("assess.json");

        let per_label: Vec<LabelScenarioEntry> = report
            .crosstab
            .labels()
            .map(|label| LabelScenarioEntry {
                label,
                counts: report.counts_for(label),
                purity: report.crosstab.purity(label),
            })
            .collect();

        let artifact = AssessArtifact {
            remap: RemapArtifact::new(self.experiment.as_str(), partition, original, result),
            scenario_ids: &report.scenario_ids,
            per_label,
            agreement: report.agreement,
        };
        self.write_json(&path, &artifact)?;
        info!(path = %path.display(), "assessment written");
        Ok(path)
    }

    /// Write `dataset` as CSV (header + rows) to `{experiment}_scaled.csv`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::CsvWrite`] if the file cannot be written.
    #[instrument(skip_all, fields(n_samples = dataset.n_samples()))]
    pub fn write_scaled_csv(&self, dataset: &StatsDataset) -> Result<PathBuf, IoError> {
        let path = self.path_for("scaled.csv");
        let csv_err = |e| IoError::CsvWrite {
            path: path.clone(),
            source: e,
        };

        let mut wtr = csv::Writer::from_path(&path).map_err(csv_err)?;
        wtr.write_record(dataset.columns()).map_err(csv_err)?;
        for row in dataset.rows() {
            wtr.write_record(row.iter().map(|v| v.to_string()))
                .map_err(csv_err)?;
        }
        wtr.flush().map_err(|e| IoError::WriteFile {
            path: path.clone(),
            source: e,
        })?;

        info!(path = %path.display(), "scaled dataset written");
        Ok(path)
    }

    fn write_json<T: Serialize>(&self, path: &Path, artifact: &T) -> Result<(), IoError> {
        let json = serde_json::to_string_pretty(artifact).expect("serialization cannot fail");
        fs::write(path, &json).map_err(|e| IoError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

// --- Shadow structs for JSON serialization ---

#[derive(Serialize)]
struct RemapArtifact<'a> {
    experiment: &'a str,
    partition: usize,
    n_samples: usize,
    segment_len: usize,
    remainder_len: usize,
    dominants: &'a [Option<i64>],
    mapping: BTreeMap<i64, i64>,
    n_unmapped: usize,
    cluster_sizes: BTreeMap<i64, usize>,
    noise: usize,
    original_labels: &'a [i64],
    labels: &'a [i64],
}

impl<'a> RemapArtifact<'a> {
    fn new(
        experiment: &'a str,
        partition: usize,
        original: &'a [i64],
        result: &'a ReorderResult,
    ) -> Self {
        let sizes = result.cluster_sizes();
        Self {
            experiment,
            partition,
            n_samples: result.labels.len(),
            segment_len: result.segment_len,
            remainder_len: result.remainder_len,
            dominants: &result.dominants,
            mapping: result.mapping.iter().collect(),
            n_unmapped: result.n_unmapped(original),
            cluster_sizes: sizes.iter().collect(),
            noise: sizes.noise(),
            original_labels: original,
            labels: &result.labels,
        }
    }
}

#[derive(Serialize)]
struct AssessArtifact<'a> {
    #[serde(flatten)]
    remap: RemapArtifact<'a>,
    scenario_ids: &'a [i64],
    per_label: Vec<LabelScenarioEntry>,
    agreement: f64,
}

#[derive(Serialize)]
struct LabelScenarioEntry {
    label: i64,
    counts: Vec<usize>,
    purity: Option<f64>,
}
