//! Workbook writer
//!
//! [`WorkbookWriter`] owns one output workbook. Tables are placed first;
//! each placement is recorded so charts can later reference the exact cells
//! their source table was written to.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use placer_chart::{ChartDescriptor, ChartKind, ResolvedChart};
use placer_core::{
    CellStyle, CellValue, CfTest, Error, Placement, RangeOperator, TableDescriptor, TableId,
    TableLayout, ValueOperator,
};
use rust_xlsxwriter::{
    Chart, ChartType, Color, ConditionalFormatCell, ConditionalFormatCellRule,
    ConditionalFormatValue, Format, FormatAlign, FormatBorder, Formula, Workbook, Worksheet,
    XlsxError,
};

use crate::error::{FinalizeError, WriteResult};

/// Places tables and charts onto the sheets of one XLSX workbook
pub struct WorkbookWriter {
    path: PathBuf,
    book: Option<Workbook>,
    placements: HashMap<TableId, Placement>,
    header_format: Format,
}

impl WorkbookWriter {
    /// Start a workbook that will be saved to `path` on [`finalize`](Self::finalize).
    ///
    /// Nothing is written to disk before then.
    pub fn create<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            book: Some(Workbook::new()),
            placements: HashMap::new(),
            header_format: Format::new()
                .set_bold()
                .set_border(FormatBorder::Thin)
                .set_align(FormatAlign::Center),
        }
    }

    /// Destination path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where a table was placed, if it has been
    pub fn placement(&self, table: &TableDescriptor) -> Option<&Placement> {
        self.placements.get(&table.id())
    }

    /// Move a table to `(start_row, start_col)` and place it there
    pub fn place_table_at(
        &mut self,
        table: &mut TableDescriptor,
        start_row: u32,
        start_col: u16,
    ) -> WriteResult<Placement> {
        table.reposition(start_row, start_col);
        self.place_table(table)
    }

    /// Write a table's title, header, body and conditional formats.
    ///
    /// The title goes on the descriptor's start cell and the header one row
    /// below. The layout is fully computed before anything is written, so a
    /// layout error leaves the sheet untouched.
    pub fn place_table(&mut self, table: &TableDescriptor) -> WriteResult<Placement> {
        let layout = table.layout()?;
        let placement = layout.placement.clone();

        if self.placements.contains_key(&table.id()) {
            warn!("table '{}' is being placed again; charts will use the new position", table.title);
        }
        for (id, other) in &self.placements {
            if *id != table.id() && placement.overlaps(other) {
                warn!(
                    "table '{}' on sheet '{}' overlaps an earlier table",
                    table.title, placement.sheet
                );
            }
        }

        let book = open_book(&mut self.book, &self.path)?;
        let sheet = ensure_sheet(book, &table.sheet)?;
        write_table(sheet, table, &layout, &self.header_format)?;

        debug!(
            "placed '{}' on '{}': header row {}, rows {}..={}, cols {}..={}",
            table.title,
            placement.sheet,
            placement.start_row,
            placement.start_row + 1,
            placement.end_row,
            placement.start_col,
            placement.end_col
        );

        self.placements.insert(table.id(), placement.clone());
        Ok(placement)
    }

    /// Draw a chart from an already placed table.
    ///
    /// Fails with [`Error::PlacementOrder`] when the source table has not been placed.
    pub fn place_chart(&mut self, chart: &ChartDescriptor<'_>) -> WriteResult<ResolvedChart> {
        let placement = self
            .placements
            .get(&chart.source.id())
            .ok_or_else(|| Error::PlacementOrder(chart.source.title.clone()))?;
        let resolved = chart.resolve(placement)?;

        let book = open_book(&mut self.book, &self.path)?;
        let sheet = ensure_sheet(book, &chart.source.sheet)?;

        let mut xlsx_chart = Chart::new(chart_type(resolved.kind));
        xlsx_chart.title().set_name(resolved.name.as_str());
        xlsx_chart
            .add_series()
            .set_name(resolved.name.as_str())
            .set_categories(resolved.categories.range().as_str())
            .set_values(resolved.values.range().as_str());

        sheet.insert_chart(resolved.anchor.row, resolved.anchor.col, &xlsx_chart)?;

        debug!(
            "chart '{}' at {}: categories {}, values {}",
            resolved.name, resolved.anchor, resolved.categories, resolved.values
        );
        Ok(resolved)
    }

    /// Save the workbook and release it. Only the first call succeeds.
    pub fn finalize(&mut self) -> WriteResult<()> {
        let mut book = self
            .book
            .take()
            .ok_or_else(|| FinalizeError::AlreadyFinalized(self.path.display().to_string()))?;

        info!("Saving workbook {} . . .", self.path.display());
        book.save(&self.path).map_err(|source| FinalizeError::Save {
            path: self.path.display().to_string(),
            source,
        })?;

        info!("Closing workbook . . .");
        drop(book);

        info!("Success!");
        Ok(())
    }

    /// Whether the workbook has been saved and released
    pub fn is_finalized(&self) -> bool {
        self.book.is_none()
    }
}

fn open_book<'a>(book: &'a mut Option<Workbook>, path: &Path) -> Result<&'a mut Workbook, FinalizeError> {
    book.as_mut()
        .ok_or_else(|| FinalizeError::AlreadyFinalized(path.display().to_string()))
}

/// Get a sheet by name, adding an empty one if absent
fn ensure_sheet<'a>(book: &'a mut Workbook, name: &str) -> WriteResult<&'a mut Worksheet> {
    if book.worksheet_from_name(name).is_err() {
        debug!("adding sheet '{}'", name);
        let mut sheet = Worksheet::new();
        sheet.set_name(name)?;
        book.push_worksheet(sheet);
    }
    Ok(book.worksheet_from_name(name)?)
}

fn write_table(
    sheet: &mut Worksheet,
    table: &TableDescriptor,
    layout: &TableLayout,
    header_format: &Format,
) -> Result<(), XlsxError> {
    let placement = &layout.placement;
    let data = &table.data;

    sheet.write_string(layout.title.row, layout.title.col, &table.title)?;

    let header_row = placement.start_row;
    if placement.row_index {
        if let Some(name) = data.index_name() {
            sheet.write_string_with_format(header_row, placement.start_col, name, header_format)?;
        }
    }
    for (position, name) in data.column_names().enumerate() {
        sheet.write_string_with_format(
            header_row,
            placement.data_col(position),
            name,
            header_format,
        )?;
    }

    for (offset, row) in data.rows().enumerate() {
        let sheet_row = header_row + 1 + offset as u32;
        if placement.row_index {
            write_value(
                sheet,
                sheet_row,
                placement.start_col,
                &data.index_label(offset),
                Some(header_format),
            )?;
        }
        for (position, value) in row.into_iter().enumerate() {
            write_value(sheet, sheet_row, placement.data_col(position), value, None)?;
        }
    }

    for range in &layout.conditional_formats {
        let rule = conditional_format(&range.rule.test, style_format(&range.rule.style));
        sheet.add_conditional_format(range.first_row, range.col, range.last_row, range.col, &rule)?;
        debug!("conditional format on '{}' {}", range.column, range.a1_range());
    }

    Ok(())
}

fn write_value(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &CellValue,
    format: Option<&Format>,
) -> Result<(), XlsxError> {
    match (value, format) {
        (CellValue::Empty, _) => {}
        (CellValue::Number(n), None) => {
            sheet.write_number(row, col, *n)?;
        }
        (CellValue::Number(n), Some(f)) => {
            sheet.write_number_with_format(row, col, *n, f)?;
        }
        (CellValue::String(s), None) => {
            sheet.write_string(row, col, s)?;
        }
        (CellValue::String(s), Some(f)) => {
            sheet.write_string_with_format(row, col, s, f)?;
        }
        (CellValue::Boolean(b), None) => {
            sheet.write_boolean(row, col, *b)?;
        }
        (CellValue::Boolean(b), Some(f)) => {
            sheet.write_boolean_with_format(row, col, *b, f)?;
        }
    }
    Ok(())
}

fn style_format(style: &CellStyle) -> Format {
    let mut format = Format::new();
    if let Some(color) = style.background {
        format = format.set_background_color(Color::RGB(color.to_rgb_u32()));
    }
    if let Some(color) = style.font_color {
        format = format.set_font_color(Color::RGB(color.to_rgb_u32()));
    }
    if style.bold {
        format = format.set_bold();
    }
    format
}

/// Operand of a cell-value test in the form the encoder writes it.
///
/// Strings are quoted here; booleans go through as the bare `TRUE`/`FALSE`
/// literals so they compare against boolean cells.
fn operand(value: &CellValue) -> ConditionalFormatValue {
    match value {
        CellValue::Number(n) => ConditionalFormatValue::from(*n),
        CellValue::Boolean(b) => Formula::new(if *b { "TRUE" } else { "FALSE" }).into(),
        CellValue::String(s) => format!("\"{}\"", s.replace('"', "\"\"")).into(),
        CellValue::Empty => "\"\"".into(),
    }
}

fn conditional_format(test: &CfTest, format: Format) -> ConditionalFormatCell {
    let rule = match test {
        CfTest::Value { operator, value } => value_rule(*operator, operand(value)),
        CfTest::Range {
            operator,
            minimum,
            maximum,
        } => range_rule(*operator, operand(minimum), operand(maximum)),
    };
    ConditionalFormatCell::new().set_rule(rule).set_format(format)
}

fn value_rule(
    operator: ValueOperator,
    value: ConditionalFormatValue,
) -> ConditionalFormatCellRule<ConditionalFormatValue> {
    match operator {
        ValueOperator::Equal => ConditionalFormatCellRule::EqualTo(value),
        ValueOperator::NotEqual => ConditionalFormatCellRule::NotEqualTo(value),
        ValueOperator::GreaterThan => ConditionalFormatCellRule::GreaterThan(value),
        ValueOperator::GreaterThanOrEqual => ConditionalFormatCellRule::GreaterThanOrEqualTo(value),
        ValueOperator::LessThan => ConditionalFormatCellRule::LessThan(value),
        ValueOperator::LessThanOrEqual => ConditionalFormatCellRule::LessThanOrEqualTo(value),
    }
}

fn range_rule(
    operator: RangeOperator,
    minimum: ConditionalFormatValue,
    maximum: ConditionalFormatValue,
) -> ConditionalFormatCellRule<ConditionalFormatValue> {
    match operator {
        RangeOperator::Between => ConditionalFormatCellRule::Between(minimum, maximum),
        RangeOperator::NotBetween => ConditionalFormatCellRule::NotBetween(minimum, maximum),
    }
}

fn chart_type(kind: ChartKind) -> ChartType {
    match kind {
        ChartKind::Column => ChartType::Column,
        ChartKind::ColumnStacked => ChartType::ColumnStacked,
        ChartKind::Bar => ChartType::Bar,
        ChartKind::BarStacked => ChartType::BarStacked,
        ChartKind::Line => ChartType::Line,
        ChartKind::Pie => ChartType::Pie,
        ChartKind::Doughnut => ChartType::Doughnut,
        ChartKind::Area => ChartType::Area,
        ChartKind::AreaStacked => ChartType::AreaStacked,
        ChartKind::Scatter => ChartType::Scatter,
        ChartKind::Radar => ChartType::Radar,
    }
}
