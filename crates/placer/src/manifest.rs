//! JSON report manifests
//!
//! A manifest lists tables (with their data source, position and conditional
//! formats) and charts drawn from them:
//!
//! ```json
//! {
//!   "output": "report.xlsx",
//!   "tables": [
//!     {
//!       "id": "revenue",
//!       "title": "Monthly revenue",
//!       "sheet": "Data",
//!       "start": "D3",
//!       "source": { "csv": "revenue.csv" },
//!       "formatting": {
//!         "Revenue": [{ "criteria": ">", "value": 1000, "background": "green", "font_color": "white" }]
//!       }
//!     }
//!   ],
//!   "charts": [
//!     { "table": "revenue", "kind": "line", "name": "Revenue", "anchor": "J2", "values": "Revenue" }
//!   ]
//! }
//! ```
//!
//! Relative paths resolve against the manifest's directory. Tables are placed
//! in manifest order, then charts.

use std::collections::{BTreeMap, HashSet};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info};
use placer_chart::{ChartDescriptor, ChartKind, ResolvedChart};
use placer_core::{
    CellAddress, CellStyle, CellValue, CfTest, Color, ConditionalFormatRule, Dataset, Error,
    Placement, TableDescriptor,
};
use placer_csv::{CsvReadOptions, CsvReader};
use placer_fetch::{FetchOptions, TableFetcher};
use placer_xlsx::WorkbookWriter;
use serde::Deserialize;

use crate::error::{BuildError, BuildResult};

/// A whole report: tables, then charts
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Workbook path, relative to the manifest
    #[serde(default)]
    pub output: Option<PathBuf>,
    pub tables: Vec<TableSpec>,
    #[serde(default)]
    pub charts: Vec<ChartSpec>,
    #[serde(default)]
    pub fetch: FetchSettings,
    #[serde(skip)]
    base_dir: PathBuf,
}

/// One table of the report
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableSpec {
    /// Name charts use to refer to this table
    pub id: String,
    pub title: String,
    #[serde(default = "default_sheet")]
    pub sheet: String,
    pub source: SourceSpec,
    /// Title cell in A1 notation; defaults to `A1`
    #[serde(default)]
    pub start: Option<String>,
    /// Emit the leading row index column
    #[serde(default = "default_true")]
    pub index: bool,
    /// Conditional formats keyed by column name
    #[serde(default)]
    pub formatting: BTreeMap<String, Vec<RuleSpec>>,
}

/// Where a table's data comes from
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SourceSpec {
    /// A CSV file with a header row
    Csv {
        csv: PathBuf,
        #[serde(default)]
        index_column: Option<usize>,
    },
    /// The first `<table>` of a web page
    Url {
        url: String,
        #[serde(default)]
        username: Option<String>,
        /// Variable holding the password
        #[serde(default)]
        password_env: Option<String>,
    },
    /// Values written straight into the manifest
    Inline {
        columns: Vec<String>,
        rows: Vec<Vec<CellValue>>,
    },
}

/// A conditional format rule
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSpec {
    /// `>`, `<=`, `between`, `not equal to`, ...
    pub criteria: String,
    #[serde(default)]
    pub value: Option<CellValue>,
    #[serde(default)]
    pub minimum: Option<CellValue>,
    #[serde(default)]
    pub maximum: Option<CellValue>,
    /// Hex (`#FF0000`) or a colour name
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub font_color: Option<String>,
    #[serde(default)]
    pub bold: bool,
}

/// A single-series chart
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartSpec {
    /// Id of the source table
    pub table: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    pub name: String,
    /// Top-left cell in A1 notation
    pub anchor: String,
    /// Category column name, or `index`
    #[serde(default = "default_categories")]
    pub categories: String,
    pub values: String,
}

/// HTTP settings for `url` sources
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchSettings {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub verify_certs: bool,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            verify_certs: false,
        }
    }
}

impl FetchSettings {
    fn options(&self) -> FetchOptions {
        FetchOptions::default()
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .verify_certs(self.verify_certs)
    }
}

fn default_sheet() -> String {
    "Sheet1".to_string()
}

fn default_true() -> bool {
    true
}

fn default_kind() -> String {
    "column".to_string()
}

fn default_categories() -> String {
    "index".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// What a build wrote
#[derive(Debug, Clone, Default)]
pub struct BuildSummary {
    /// Table id and where it landed, in placement order
    pub placements: Vec<(String, Placement)>,
    pub charts: Vec<ResolvedChart>,
}

impl RuleSpec {
    /// Turn into a typed rule
    pub fn to_rule(&self) -> placer_core::Result<ConditionalFormatRule> {
        let test = match (&self.value, &self.minimum, &self.maximum) {
            (Some(value), None, None) => CfTest::value(&self.criteria, value.clone())?,
            (None, Some(minimum), Some(maximum)) => {
                CfTest::range(&self.criteria, minimum.clone(), maximum.clone())?
            }
            _ => {
                return Err(Error::InvalidCriteria(format!(
                    "'{}' needs either a value or a minimum and maximum",
                    self.criteria
                )))
            }
        };

        let mut style = CellStyle::new().bold(self.bold);
        if let Some(background) = &self.background {
            style = style.background(background.parse::<Color>()?);
        }
        if let Some(font_color) = &self.font_color {
            style = style.font_color(font_color.parse::<Color>()?);
        }
        Ok(ConditionalFormatRule::new(test).with_style(style))
    }
}

impl Manifest {
    /// Load a manifest file
    pub fn from_path<P: AsRef<Path>>(path: P) -> BuildResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| BuildError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut manifest = Self::from_json(&json)?;
        manifest.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(manifest)
    }

    /// Parse a manifest; relative paths resolve against the working directory
    pub fn from_json(json: &str) -> BuildResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Directory relative paths resolve against
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// The `output` entry resolved against the manifest directory
    pub fn output_path(&self) -> Option<PathBuf> {
        self.output.as_ref().map(|output| self.base_dir.join(output))
    }

    /// Load every table's data and build its descriptor, in manifest order
    pub fn load_tables(&self) -> BuildResult<Vec<(String, TableDescriptor)>> {
        let mut seen = HashSet::new();
        let mut tables = Vec::with_capacity(self.tables.len());

        for spec in &self.tables {
            if !seen.insert(spec.id.as_str()) {
                return Err(BuildError::DuplicateTable(spec.id.clone()));
            }
            let data = self.load_source(&spec.source)?;
            debug!(
                "loaded '{}': {} columns, {} rows",
                spec.id,
                data.column_count(),
                data.row_count()
            );

            let mut table =
                TableDescriptor::new(&spec.title, data, &spec.sheet).with_row_index(spec.index);
            for (column, rules) in &spec.formatting {
                let rules = rules
                    .iter()
                    .map(RuleSpec::to_rule)
                    .collect::<placer_core::Result<Vec<_>>>()?;
                table = table.with_formatting(column, rules);
            }
            if let Some(start) = &spec.start {
                let cell = CellAddress::parse(start)?;
                table.reposition(cell.row, cell.col);
            }
            tables.push((spec.id.clone(), table));
        }
        Ok(tables)
    }

    /// Place every table, then every chart, and save the workbook to `output`.
    ///
    /// Nothing is written when any step fails.
    pub fn build<P: AsRef<Path>>(&self, output: P) -> BuildResult<BuildSummary> {
        for chart in &self.charts {
            if !self.tables.iter().any(|t| t.id == chart.table) {
                return Err(BuildError::UnknownTable {
                    chart: chart.name.clone(),
                    table: chart.table.clone(),
                });
            }
        }
        let tables = self.load_tables()?;

        let mut writer = WorkbookWriter::create(output);
        let mut summary = BuildSummary::default();

        for (id, table) in &tables {
            let placement = writer.place_table(table)?;
            summary.placements.push((id.clone(), placement));
        }

        for spec in &self.charts {
            let (_, table) = tables
                .iter()
                .find(|(id, _)| *id == spec.table)
                .ok_or_else(|| BuildError::UnknownTable {
                    chart: spec.name.clone(),
                    table: spec.table.clone(),
                })?;
            let kind: ChartKind = spec.kind.parse()?;
            let chart = ChartDescriptor::new(
                table,
                kind,
                &spec.name,
                &spec.anchor,
                spec.categories.as_str(),
                &spec.values,
            );
            summary.charts.push(writer.place_chart(&chart)?);
        }

        writer.finalize()?;
        info!(
            "wrote {} tables and {} charts to {}",
            summary.placements.len(),
            summary.charts.len(),
            writer.path().display()
        );
        Ok(summary)
    }

    fn load_source(&self, source: &SourceSpec) -> BuildResult<Dataset> {
        match source {
            SourceSpec::Csv { csv, index_column } => {
                let path = self.base_dir.join(csv);
                let options = CsvReadOptions {
                    index_column: *index_column,
                    ..Default::default()
                };
                Ok(CsvReader::read_file(path, &options)?)
            }
            SourceSpec::Url {
                url,
                username,
                password_env,
            } => {
                let password = password_env
                    .as_deref()
                    .map(|var| env::var(var).map_err(|_| BuildError::MissingEnv(var.to_string())))
                    .transpose()?;
                let fetcher = TableFetcher::new(self.fetch.options())?;
                Ok(fetcher.fetch(url, username.as_deref(), password.as_deref())?)
            }
            SourceSpec::Inline { columns, rows } => {
                Ok(Dataset::from_rows(columns.clone(), rows.clone())?)
            }
        }
    }
}
