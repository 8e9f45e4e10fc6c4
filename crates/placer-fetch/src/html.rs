//! HTML table extraction

use log::debug;
use placer_core::{CellValue, Dataset};
use scraper::{ElementRef, Html};

use crate::error::{FetchError, FetchResult};

/// Upper bound on a single cell's `colspan`
const MAX_COLSPAN: usize = 1000;

/// Read the first `<table>` of a document into a dataset.
///
/// The header is the first `<thead>` row, or else a leading row made only of
/// `<th>` cells. Without one, columns are named `0`, `1`, ... Cell text is
/// trimmed with inner whitespace collapsed, then type-detected with
/// [`CellValue::infer`]. Short rows are padded with empty cells and cells
/// past the header width are dropped.
pub fn parse_first_table(html: &str) -> FetchResult<Dataset> {
    let document = Html::parse_document(html);
    let table = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "table")
        .ok_or(FetchError::NoTable)?;

    let mut head = Vec::new();
    let mut body = Vec::new();
    for child in child_elements(table) {
        match child.value().name() {
            "thead" => head.extend(rows_of(child)),
            "tbody" | "tfoot" => body.extend(rows_of(child)),
            "tr" => body.push(read_row(child)),
            _ => {}
        }
    }
    body.retain(|row| !row.cells.is_empty());

    if head.len() > 1 {
        debug!("using the first of {} header rows", head.len());
    }
    let header = match head.into_iter().next() {
        Some(row) => Some(row.cells),
        None if body.first().is_some_and(|row| row.header_only) => Some(body.remove(0).cells),
        None => None,
    };

    let width = match &header {
        Some(names) => names.len(),
        None => body.iter().map(|row| row.cells.len()).max().unwrap_or(0),
    };
    let names: Vec<String> = match header {
        Some(names) => names,
        None => (0..width).map(|i| i.to_string()).collect(),
    };

    let rows: Vec<Vec<CellValue>> = body
        .iter()
        .map(|row| {
            let mut values: Vec<CellValue> = row
                .cells
                .iter()
                .take(width)
                .map(|text| CellValue::infer(text))
                .collect();
            values.resize(width, CellValue::Empty);
            values
        })
        .collect();

    debug!("parsed table with {} columns and {} rows", width, rows.len());
    Ok(Dataset::from_rows(names, rows)?)
}

/// One `<tr>` with `colspan` expanded
struct RawRow {
    /// Every cell is a `<th>`
    header_only: bool,
    cells: Vec<String>,
}

fn child_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    element.children().filter_map(ElementRef::wrap)
}

fn rows_of<'a>(section: ElementRef<'a>) -> impl Iterator<Item = RawRow> + 'a {
    child_elements(section)
        .filter(|el| el.value().name() == "tr")
        .map(read_row)
}

fn read_row(tr: ElementRef<'_>) -> RawRow {
    let mut cells = Vec::new();
    let mut header_only = true;

    for cell in child_elements(tr) {
        let tag = cell.value().name();
        if tag != "td" && tag != "th" {
            continue;
        }
        header_only &= tag == "th";

        let span = cell
            .value()
            .attr("colspan")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(1)
            .clamp(1, MAX_COLSPAN);
        cells.extend(std::iter::repeat(cell_text(cell)).take(span));
    }

    RawRow {
        header_only: header_only && !cells.is_empty(),
        cells,
    }
}

fn cell_text(cell: ElementRef<'_>) -> String {
    let raw: String = cell.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
