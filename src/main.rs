use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};

use sceneclust_io::{
    AssessReport, ExperimentName, LabelReader, MinMaxScaler, PreprocessConfig, ResultWriter,
    StatsReader,
};
use sceneclust_labels::{parse_labels, ReorderConfig};

#[derive(Parser)]
#[command(name = "sceneclust")]
#[command(about = "Cluster label reordering and assessment for wireless network scenarios")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose (debug-level) logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(long, global = true)]
    quiet: bool,
}

/// Where to read cluster labels from.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
struct LabelSource {
    /// Labels as text, e.g. "[3 3 0 1 ...]"; every digit run is one label
    #[arg(long)]
    labels: Option<String>,

    /// File holding a textual label dump
    #[arg(long)]
    labels_file: Option<PathBuf>,
}

/// Cell preprocessing applied while reading a statistics CSV.
#[derive(Args, Debug, Clone)]
struct PreprocessArgs {
    /// Column whose "192.168.x." prefix is stripped, leaving the host octet
    #[arg(long, default_value = "address")]
    address_column: String,

    /// Disable address prefix stripping
    #[arg(long, default_value_t = false)]
    no_address: bool,

    /// Address prefix pattern (regular expression)
    #[arg(long)]
    address_prefix: Option<String>,

    /// Extra categorical mapping as RAW=VALUE (repeatable), added to the
    /// defaults A..E=1..5, STA=1, AP=2
    #[arg(long = "category", value_name = "RAW=VALUE")]
    categories: Vec<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a textual label dump and print the labels as JSON
    Parse {
        /// Labels as text
        #[arg(long)]
        labels: String,
    },

    /// Reorder labels so that the label dominating segment i becomes i
    Remap {
        #[command(flatten)]
        source: LabelSource,

        /// Number of contiguous equal-size segments
        #[arg(long)]
        partition: usize,

        /// Experiment name for output files (must match [a-zA-Z0-9_-]+)
        #[arg(long)]
        experiment: String,

        /// Output directory for result files
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },

    /// Preprocess a statistics CSV and min-max scale every column
    Scale {
        /// Path to the statistics CSV file
        #[arg(long)]
        data: PathBuf,

        /// Keep only these columns, in this order (comma-separated)
        #[arg(long, value_delimiter = ',')]
        columns: Vec<String>,

        /// Experiment name for output files (must match [a-zA-Z0-9_-]+)
        #[arg(long)]
        experiment: String,

        /// Output directory for result files
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,

        #[command(flatten)]
        preprocess: PreprocessArgs,
    },

    /// Reorder labels and cross-tabulate them against the dataset's scenarios
    Assess {
        /// Path to the statistics CSV file the labels were produced from
        #[arg(long)]
        data: PathBuf,

        #[command(flatten)]
        source: LabelSource,

        /// Number of contiguous equal-size segments (usually the scenario count)
        #[arg(long)]
        partition: usize,

        /// Column holding the ground-truth scenario id
        #[arg(long, default_value = "scenario")]
        scenario_column: String,

        /// Scenario ids to report, comma-separated (defaults to those observed)
        #[arg(long, value_delimiter = ',')]
        scenarios: Vec<i64>,

        /// Experiment name for output files (must match [a-zA-Z0-9_-]+)
        #[arg(long)]
        experiment: String,

        /// Output directory for result files
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,

        #[command(flatten)]
        preprocess: PreprocessArgs,
    },
}

// --- JSON stdout output structs ---

#[derive(Serialize)]
struct RemapOutput {
    experiment: String,
    n_samples: usize,
    partition: usize,
    segment_len: usize,
    remainder_len: usize,
    n_mapped: usize,
    n_unmapped: usize,
    artifact: PathBuf,
}

#[derive(Serialize)]
struct ScaleOutput {
    experiment: String,
    n_samples: usize,
    columns: Vec<String>,
    artifact: PathBuf,
}

#[derive(Serialize)]
struct AssessOutput {
    experiment: String,
    n_samples: usize,
    partition: usize,
    agreement: f64,
    cluster_sizes: Vec<(i64, usize)>,
    artifact: PathBuf,
}

fn read_labels(source: &LabelSource) -> Result<Vec<i64>> {
    match (&source.labels, &source.labels_file) {
        (Some(text), _) => {
            let labels = parse_labels(text).context("failed to parse --labels")?;
            if labels.is_empty() {
                anyhow::bail!("--labels contains no digits");
            }
            Ok(labels)
        }
        (None, Some(path)) => LabelReader::new(path)
            .read()
            .context("failed to read label file"),
        (None, None) => anyhow::bail!("one of --labels or --labels-file is required"),
    }
}

fn parse_category(s: &str) -> Result<(String, f64)> {
    let (raw, value) = s
        .split_once('=')
        .with_context(|| format!("category mapping must be RAW=VALUE, got {s}"))?;
    let value: f64 = value
        .trim()
        .parse()
        .with_context(|| format!("category value for {raw} is not a number: {value}"))?;
    Ok((raw.trim().to_string(), value))
}

fn build_preprocess(args: &PreprocessArgs) -> Result<PreprocessConfig> {
    let address_column = (!args.no_address).then(|| args.address_column.clone());
    let mut config = PreprocessConfig::new().with_address_column(address_column);
    if let Some(pattern) = &args.address_prefix {
        config = config.with_address_prefix(pattern)?;
    }
    for mapping in &args.categories {
        let (raw, value) = parse_category(mapping)?;
        config = config.with_category(&raw, value);
    }
    Ok(config)
}

fn read_stats(data: &Path, preprocess: &PreprocessArgs) -> Result<sceneclust_io::StatsDataset> {
    let config = build_preprocess(preprocess)?;
    let dataset = StatsReader::new(data)
        .with_preprocess(config)
        .read()
        .context("failed to read statistics CSV")?;
    info!(n_samples = dataset.n_samples(), "dataset loaded");
    Ok(dataset)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match (cli.verbose, cli.quiet) {
        (true, _) => "debug",
        (_, true) => "error",
        _ => "info",
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Parse { labels } => {
            let parsed = parse_labels(&labels).context("failed to parse labels")?;
            info!(n_labels = parsed.len(), "labels parsed");
            println!("{}", serde_json::to_string(&parsed)?);
        }

        Command::Remap {
            source,
            partition,
            experiment,
            output_dir,
        } => {
            let experiment_name = ExperimentName::new(experiment.clone())?;
            let labels = read_labels(&source)?;

            let config = ReorderConfig::new(partition)?;
            let result = config.fit(&labels).context("reordering failed")?;
            let n_unmapped = result.n_unmapped(&labels);
            if n_unmapped > 0 {
                warn!(n_unmapped, "labels without a dominant segment were left unchanged");
            }

            let writer = ResultWriter::new(&output_dir, experiment_name)?;
            let artifact = writer.write_remap(partition, &labels, &result)?;

            let output = RemapOutput {
                experiment,
                n_samples: labels.len(),
                partition,
                segment_len: result.segment_len,
                remainder_len: result.remainder_len,
                n_mapped: result.mapping.len(),
                n_unmapped,
                artifact,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Command::Scale {
            data,
            columns,
            experiment,
            output_dir,
            preprocess,
        } => {
            let experiment_name = ExperimentName::new(experiment.clone())?;
            let mut dataset = read_stats(&data, &preprocess)?;

            if !columns.is_empty() {
                let names: Vec<&str> = columns.iter().map(String::as_str).collect();
                dataset = dataset.select(&names).context("failed to select columns")?;
            }

            let scaled = MinMaxScaler::fit_transform(&dataset);
            let writer = ResultWriter::new(&output_dir, experiment_name)?;
            let artifact = writer.write_scaled_csv(&scaled)?;

            let output = ScaleOutput {
                experiment,
                n_samples: scaled.n_samples(),
                columns: scaled.columns().to_vec(),
                artifact,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Command::Assess {
            data,
            source,
            partition,
            scenario_column,
            scenarios,
            experiment,
            output_dir,
            preprocess,
        } => {
            let experiment_name = ExperimentName::new(experiment.clone())?;

            // 1. Ground-truth scenarios from the dataset
            let dataset = read_stats(&data, &preprocess)?;
            let scenario_ids = dataset
                .scenario_ids(&scenario_column)
                .context("failed to read scenario column")?;

            // 2. Labels and reordering
            let labels = read_labels(&source)?;
            if labels.len() != dataset.n_samples() {
                anyhow::bail!(
                    "label count {} does not match dataset rows {}",
                    labels.len(),
                    dataset.n_samples()
                );
            }
            let result = ReorderConfig::new(partition)?
                .fit(&labels)
                .context("reordering failed")?;

            // 3. Cross-tabulate
            let report = AssessReport::new(&result.labels, &scenario_ids, &scenarios)
                .context("assessment failed")?;
            for label in report.crosstab.labels() {
                info!(label, counts = ?report.counts_for(label), "assignment per scenario");
            }

            // 4. Write artifact and summary
            let writer = ResultWriter::new(&output_dir, experiment_name)?;
            let artifact = writer.write_assess(partition, &labels, &result, &report)?;

            let output = AssessOutput {
                experiment,
                n_samples: labels.len(),
                partition,
                agreement: report.agreement,
                cluster_sizes: result.cluster_sizes().iter().collect(),
                artifact,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses() {
        let (raw, value) = parse_category("F=6").unwrap();
        assert_eq!(raw, "F");
        assert!((value - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn category_rejects_missing_equals() {
        assert!(parse_category("F6").is_err());
        assert!(parse_category("F=six").is_err());
    }

    #[test]
    fn labels_from_text() {
        let source = LabelSource {
            labels: Some("[1 -2 3]".into()),
            labels_file: None,
        };
        assert_eq!(read_labels(&source).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn labels_text_without_digits_rejected() {
        let source = LabelSource {
            labels: Some("[]".into()),
            labels_file: None,
        };
        assert!(read_labels(&source).is_err());
    }

    #[test]
    fn preprocess_flags_applied() {
        let args = PreprocessArgs {
            address_column: "ip".into(),
            no_address: false,
            address_prefix: Some(r"10\.\d+\.\d+\.".into()),
            categories: vec!["F=6".into()],
        };
        let config = build_preprocess(&args).unwrap();
        assert_eq!(config.address_column(), Some("ip"));
        assert_eq!(config.n_categories(), 8);
    }

    #[test]
    fn no_address_disables_stripping() {
        let args = PreprocessArgs {
            address_column: "address".into(),
            no_address: true,
            address_prefix: None,
            categories: Vec::new(),
        };
        let config = build_preprocess(&args).unwrap();
        assert_eq!(config.address_column(), None);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
