use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::config::InputConfig;
use crate::error::{Result, TimemapError};

/// Header names of the three columns the chart needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnNames {
    pub function: String,
    pub total: String,
    pub mean: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self::from(&InputConfig::default())
    }
}

impl From<&InputConfig> for ColumnNames {
    fn from(input: &InputConfig) -> Self {
        Self {
            function: input.function_column.clone(),
            total: input.total_column.clone(),
            mean: input.mean_column.clone(),
        }
    }
}

/// One profiled function.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRow {
    pub function: String,
    /// Cumulative seconds attributed to the function.
    pub total_time: f64,
    /// Average seconds per call.
    pub mean_time: f64,
}

/// Rows of a profile CSV in file order.
///
/// Row order is the x-axis order of the chart: rows are never sorted or merged,
/// so a function listed twice shows up twice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileTable {
    rows: Vec<ProfileRow>,
}

/// Positions of the required columns within the header record.
struct ColumnIndices {
    function: usize,
    total: usize,
    mean: usize,
    /// Chronos writes the function signature last and unquoted, so commas in a
    /// parameter list spill into extra trailing fields.
    function_is_last: bool,
}

impl ProfileTable {
    #[must_use]
    pub const fn new(rows: Vec<ProfileRow>) -> Self {
        Self { rows }
    }

    /// Read a profile table from a CSV file.
    ///
    /// # Errors
    /// `InputNotFound` if the file is missing or cannot be opened,
    /// `MalformedInput` if the header or any value is unusable.
    pub fn read_path(path: &Path, columns: &ColumnNames) -> Result<Self> {
        if path.is_dir() {
            return Err(TimemapError::InputNotFound {
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "path is a directory",
                ),
            });
        }

        let file = File::open(path).map_err(|source| TimemapError::InputNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::from_reader(BufReader::new(file), path, columns)?;
        tracing::debug!(
            path = %path.display(),
            rows = table.len(),
            "read profile table"
        );
        Ok(table)
    }

    /// Parse CSV content. `source` only labels error messages.
    ///
    /// # Errors
    /// `MalformedInput` if a required column is missing, a time value is not a
    /// finite number, the CSV structure is broken, or there are no data rows.
    pub fn from_reader<R: Read>(reader: R, source: &Path, columns: &ColumnNames) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::Headers)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| TimemapError::malformed(source, format!("unreadable header: {e}")))?
            .clone();
        let indices = locate_columns(&headers, columns, source)?;
        let width = headers.len();

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| TimemapError::malformed(source, e.to_string()))?;
            let line = record
                .position()
                .map_or(index as u64 + 2, csv::Position::line);
            let spills = indices.function_is_last && record.len() > width;
            if record.len() != width && !spills {
                return Err(TimemapError::malformed(
                    source,
                    format!(
                        "line {line}: expected {width} fields, found {}",
                        record.len()
                    ),
                ));
            }
            rows.push(parse_row(&record, &indices, columns, source, line)?);
        }

        if rows.is_empty() {
            return Err(TimemapError::malformed(source, "no data rows"));
        }

        Ok(Self { rows })
    }

    #[must_use]
    pub fn rows(&self) -> &[ProfileRow] {
        &self.rows
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Function names in file order.
    pub fn functions(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.function.as_str())
    }
}

fn locate_columns(
    headers: &StringRecord,
    columns: &ColumnNames,
    source: &Path,
) -> Result<ColumnIndices> {
    let position = |name: &str| headers.iter().position(|header| header == name);

    let function = position(&columns.function);
    let total = position(&columns.total);
    let mean = position(&columns.mean);

    if let (Some(function), Some(total), Some(mean)) = (function, total, mean) {
        return Ok(ColumnIndices {
            function,
            total,
            mean,
            function_is_last: function + 1 == headers.len(),
        });
    }

    let missing: Vec<String> = [
        (function, &columns.function),
        (total, &columns.total),
        (mean, &columns.mean),
    ]
    .into_iter()
    .filter(|(index, _)| index.is_none())
    .map(|(_, name)| format!("'{name}'"))
    .collect();
    let found: Vec<&str> = headers.iter().collect();

    Err(TimemapError::malformed(
        source,
        format!(
            "missing required column(s) {} (header has: {})",
            missing.join(", "),
            if found.is_empty() {
                "nothing".to_string()
            } else {
                found.join(", ")
            }
        ),
    ))
}

fn parse_row(
    record: &StringRecord,
    indices: &ColumnIndices,
    columns: &ColumnNames,
    source: &Path,
    line: u64,
) -> Result<ProfileRow> {
    let field = |index: usize| record.get(index).unwrap_or_default().trim();
    let function = if indices.function_is_last {
        record
            .iter()
            .skip(indices.function)
            .collect::<Vec<_>>()
            .join(",")
            .trim()
            .to_string()
    } else {
        field(indices.function).to_string()
    };

    Ok(ProfileRow {
        function,
        total_time: parse_time(field(indices.total), &columns.total, source, line)?,
        mean_time: parse_time(field(indices.mean), &columns.mean, source, line)?,
    })
}

fn parse_time(value: &str, column: &str, source: &Path, line: u64) -> Result<f64> {
    let malformed = |what: &str| {
        TimemapError::malformed(
            PathBuf::from(source),
            format!("line {line}: '{column}' {what}"),
        )
    };

    if value.is_empty() {
        return Err(malformed("is empty"));
    }
    let parsed: f64 = value
        .parse()
        .map_err(|_| malformed(&format!("is not a number: {value:?}")))?;
    if !parsed.is_finite() {
        return Err(malformed(&format!("is not finite: {value:?}")));
    }
    Ok(parsed)
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
