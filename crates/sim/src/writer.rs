use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use egg_scramble_shared::config::{CSV_HEADER, CSV_PRECISION};
use egg_scramble_shared::result::{AggregateResult, ResultSet};
use egg_scramble_shared::SimError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Start a fresh file.
    Truncate,
    /// Keep existing rows and add after them.
    Append,
}

pub struct ResultWriter {
    out: BufWriter<File>,
    path: PathBuf,
    rows_written: usize,
}

impl ResultWriter {
    /// Opens `path`, writing the header only if the file is empty afterwards.
    pub fn open(path: impl AsRef<Path>, mode: WriteMode) -> Result<Self, SimError> {
        let path = path.as_ref();
        let mut options = OpenOptions::new();
        options.create(true);
        match mode {
            WriteMode::Truncate => options.write(true).truncate(true),
            WriteMode::Append => options.append(true),
        };
        let file = options.open(path)?;
        let needs_header = file.metadata()?.len() == 0;

        let mut out = BufWriter::new(file);
        if needs_header {
            writeln!(out, "{}", CSV_HEADER)?;
        }
        Ok(Self {
            out,
            path: path.to_path_buf(),
            rows_written: 0,
        })
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn write_result(&mut self, result: &AggregateResult) -> Result<(), SimError> {
        writeln!(self.out, "{}", format_row(result))?;
        self.rows_written += 1;
        Ok(())
    }

    /// Writes rows in order and flushes.
    pub fn write_results(&mut self, results: &[AggregateResult]) -> Result<(), SimError> {
        for result in results {
            self.write_result(result)?;
        }
        self.flush()?;
        info!(rows = results.len(), path = %self.path.display(), "results written");
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), SimError> {
        self.out.flush()?;
        Ok(())
    }
}

/// Appends `results` to `path`, creating it with a header if needed.
pub fn append_results(
    path: impl AsRef<Path>,
    results: &[AggregateResult],
) -> Result<(), SimError> {
    let mut writer = ResultWriter::open(path, WriteMode::Append)?;
    writer.write_results(results)
}

pub fn format_row(result: &AggregateResult) -> String {
    format!(
        "{},{:.prec$},{:.prec$}",
        result.box_size,
        result.mean_fixed_points,
        result.derangement_probability,
        prec = CSV_PRECISION,
    )
}

/// Parses one data line. `line_no` is 1-based and only used for errors.
pub fn parse_row(line: &str, line_no: usize) -> Result<AggregateResult, SimError> {
    let err = |message: String| SimError::Parse {
        line: line_no,
        message,
    };

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 3 {
        return Err(err(format!("expected 3 fields, found {}", fields.len())));
    }
    let box_size = fields[0]
        .parse::<usize>()
        .map_err(|e| err(format!("box size {:?}: {}", fields[0], e)))?;
    let mean_fixed_points = fields[1]
        .parse::<f64>()
        .map_err(|e| err(format!("mean {:?}: {}", fields[1], e)))?;
    let derangement_probability = fields[2]
        .parse::<f64>()
        .map_err(|e| err(format!("probability {:?}: {}", fields[2], e)))?;

    Ok(AggregateResult {
        box_size,
        num_trials: 0,
        total_fixed_points: 0,
        derangement_count: 0,
        mean_fixed_points,
        derangement_probability,
    })
}

/// Reads a results file back. The first non-blank line is skipped when it is
/// the header; every other non-blank line must be a data row.
pub fn read_results(path: impl AsRef<Path>) -> Result<ResultSet, SimError> {
    let reader = BufReader::new(File::open(path.as_ref())?);
    let mut results = Vec::new();
    let mut seen_first = false;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if !seen_first {
            seen_first = true;
            if line.trim() == CSV_HEADER {
                continue;
            }
        }
        results.push(parse_row(&line, idx + 1)?);
    }
    Ok(results)
}
