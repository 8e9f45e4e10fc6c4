//! CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use placer_core::Dataset;

use crate::error::CsvResult;
use crate::options::{CsvWriteOptions, LineTerminator};

/// CSV file writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write a dataset to a CSV file
    pub fn write_file<P: AsRef<Path>>(
        dataset: &Dataset,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(dataset, file, options)
    }

    /// Write a dataset to a writer
    pub fn write<W: Write>(
        dataset: &Dataset,
        writer: W,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(terminator)
            .from_writer(writer);

        if options.write_header {
            let mut header = Vec::with_capacity(dataset.column_count() + 1);
            if options.write_index {
                header.push(dataset.index_name().unwrap_or_default().to_string());
            }
            header.extend(dataset.column_names().map(str::to_string));
            csv_writer.write_record(&header)?;
        }

        for (row_idx, row) in dataset.rows().enumerate() {
            let mut record = Vec::with_capacity(row.len() + 1);
            if options.write_index {
                record.push(dataset.index_label(row_idx).to_string());
            }
            record.extend(row.into_iter().map(|value| value.to_string()));
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
