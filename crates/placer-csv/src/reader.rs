//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;
use placer_core::{CellValue, Dataset};

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a dataset
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Dataset> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a dataset.
    ///
    /// Without a header row, columns are named `0`, `1`, ...
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Dataset> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(options.has_header)
            .from_reader(reader);

        let mut names: Vec<String> = if options.has_header {
            csv_reader.headers()?.iter().map(|h| h.trim().to_string()).collect()
        } else {
            Vec::new()
        };

        let mut rows = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            let row: Vec<CellValue> = record
                .iter()
                .map(|field| Self::convert(field, options.auto_detect_types))
                .collect();
            rows.push(row);
        }

        if !options.has_header {
            let width = rows.first().map_or(0, Vec::len);
            names = (0..width).map(|i| i.to_string()).collect();
        }
        debug!("read {} columns and {} rows of CSV", names.len(), rows.len());

        let Some(index) = options.index_column else {
            return Ok(Dataset::from_rows(names, rows)?);
        };
        if index >= names.len() {
            return Err(CsvError::IndexColumn {
                index,
                width: names.len(),
            });
        }

        let index_name = names.remove(index);
        let labels: Vec<CellValue> = rows.iter_mut().map(|row| row.remove(index)).collect();
        let mut dataset = Dataset::from_rows(names, rows)?.with_index(labels)?;
        if !index_name.is_empty() {
            dataset = dataset.with_index_name(index_name);
        }
        Ok(dataset)
    }

    fn convert(field: &str, auto_detect_types: bool) -> CellValue {
        if auto_detect_types {
            CellValue::infer(field)
        } else if field.is_empty() {
            CellValue::Empty
        } else {
            CellValue::string(field)
        }
    }
}
