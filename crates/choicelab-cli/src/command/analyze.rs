use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::{Context, ensure};
use choicelab_analysis::{
    inference::ExperimentInference,
    record::{ChoiceCounts, ExperimentRecord},
};
use chrono::Utc;

use crate::{
    report::{AnalysisReport, ExperimentReport, FileReport, experiment_sort_key},
    util::{self, Output},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AnalyzeArg {
    /// `.dat` files, or directories scanned for them
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Output file path (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let paths = collect_dat_files(&arg.inputs)?;
    ensure!(!paths.is_empty(), "No .dat files found in the given inputs");

    let files = paths
        .iter()
        .map(|path| analyze_file(path))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let report = AnalysisReport {
        generated_at: Utc::now(),
        files,
    };
    Output::create(arg.output.clone())?.write_json(&report)
}

fn analyze_file(path: &Path) -> anyhow::Result<FileReport> {
    let entries: BTreeMap<String, ChoiceCounts> = util::read_json_file("experiment data", path)?;

    let mut ids = entries.keys().cloned().collect::<Vec<_>>();
    ids.sort_by_key(|id| experiment_sort_key(id));

    let experiments = ids
        .into_iter()
        .map(|id| {
            let counts = entries[&id];
            let record = ExperimentRecord::new(id, counts);
            let inference = ExperimentInference::analyze(&record);
            ExperimentReport { record, inference }
        })
        .collect::<Vec<_>>();

    eprintln!(
        "Analyzed {} experiment(s) from {}",
        experiments.len(),
        path.display()
    );

    let source = path.file_stem().map_or_else(
        || path.display().to_string(),
        |stem| stem.to_string_lossy().into_owned(),
    );
    Ok(FileReport {
        source,
        experiments,
    })
}

fn collect_dat_files(inputs: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = vec![];
    for input in inputs {
        if input.is_dir() {
            let mut found = std::fs::read_dir(input)
                .with_context(|| format!("Failed to read directory: {}", input.display()))?
                .map(|entry| Ok(entry?.path()))
                .collect::<anyhow::Result<Vec<_>>>()?;
            found.retain(|path| path.extension().is_some_and(|ext| ext == "dat"));
            found.sort();
            paths.extend(found);
        } else {
            paths.push(input.clone());
        }
    }
    Ok(paths)
}
