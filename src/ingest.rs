// Upload ingestion: detect the spreadsheet format from the filename and
// parse the raw bytes into a Table. Rejection happens here, before any
// analysis runs.

use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Reader, Xls, Xlsx};
use csv::ReaderBuilder;

use crate::table::{CellValue, Column, Table};
use crate::types::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Xlsx,
    Xls,
}

impl FileFormat {
    /// Case-insensitive extension match. Anything outside the recognized
    /// set is rejected without touching the file contents.
    pub fn from_filename(filename: &str) -> AppResult<Self> {
        let ext = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("csv") => Ok(FileFormat::Csv),
            Some("xlsx") => Ok(FileFormat::Xlsx),
            Some("xls") => Ok(FileFormat::Xls),
            _ => Err(AppError::UnsupportedFormat(filename.to_string())),
        }
    }
}

pub fn parse_table(format: FileFormat, bytes: &[u8]) -> AppResult<Table> {
    match format {
        FileFormat::Csv => parse_csv(bytes),
        FileFormat::Xlsx => {
            let mut workbook =
                Xlsx::new(Cursor::new(bytes)).map_err(|e| AppError::Parse(e.to_string()))?;
            let range = workbook
                .worksheet_range_at(0)
                .ok_or_else(|| AppError::Parse("workbook has no sheets".to_string()))?
                .map_err(|e| AppError::Parse(e.to_string()))?;
            table_from_range(&range)
        }
        FileFormat::Xls => {
            let mut workbook =
                Xls::new(Cursor::new(bytes)).map_err(|e| AppError::Parse(e.to_string()))?;
            let range = workbook
                .worksheet_range_at(0)
                .ok_or_else(|| AppError::Parse("workbook has no sheets".to_string()))?
                .map_err(|e| AppError::Parse(e.to_string()))?;
            table_from_range(&range)
        }
    }
}

fn parse_csv(bytes: &[u8]) -> AppResult<Table> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| AppError::Parse(e.to_string()))?
        .iter()
        .map(|h| h.to_string())
        .collect();
    if headers.is_empty() {
        return Err(AppError::Parse("dataset has no columns".to_string()));
    }

    let mut cells: Vec<Vec<CellValue>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record.map_err(|e| AppError::Parse(e.to_string()))?;
        for (idx, column) in cells.iter_mut().enumerate() {
            // Short records pad with Missing; extra fields are dropped
            column.push(record.get(idx).map_or(CellValue::Missing, parse_csv_cell));
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, cells)| Column::new(name, cells))
        .collect();
    Table::new(columns)
}

fn parse_csv_cell(raw: &str) -> CellValue {
    if raw.is_empty() {
        return CellValue::Missing;
    }
    if let Ok(v) = raw.parse::<i64>() {
        return CellValue::Int(v);
    }
    if let Ok(v) = raw.parse::<f64>() {
        if v.is_finite() {
            return CellValue::Float(v);
        }
    }
    if raw.eq_ignore_ascii_case("true") {
        return CellValue::Bool(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return CellValue::Bool(false);
    }
    CellValue::Text(raw.to_string())
}

fn table_from_range(range: &calamine::Range<Data>) -> AppResult<Table> {
    let mut rows = range.rows();
    let header_row = rows
        .next()
        .ok_or_else(|| AppError::Parse("sheet has no header row".to_string()))?;
    let headers: Vec<String> = header_row
        .iter()
        .enumerate()
        .map(|(idx, cell)| header_name(idx, cell))
        .collect();
    if headers.is_empty() {
        return Err(AppError::Parse("dataset has no columns".to_string()));
    }

    let mut cells: Vec<Vec<CellValue>> = vec![Vec::new(); headers.len()];
    for row in rows {
        for (idx, column) in cells.iter_mut().enumerate() {
            column.push(row.get(idx).map_or(CellValue::Missing, excel_cell));
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, cells)| Column::new(name, cells))
        .collect();
    Table::new(columns)
}

fn header_name(idx: usize, cell: &Data) -> String {
    match cell {
        Data::String(s) if !s.trim().is_empty() => s.trim().to_string(),
        Data::Int(v) => v.to_string(),
        Data::Float(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => v.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        _ => format!("column_{}", idx + 1),
    }
}

fn excel_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Missing,
        Data::String(s) => {
            if s.trim().is_empty() {
                CellValue::Missing
            } else {
                CellValue::Text(s.clone())
            }
        }
        Data::Int(v) => CellValue::Int(*v),
        Data::Float(v) => CellValue::Float(*v),
        Data::Bool(v) => CellValue::Bool(*v),
        // Excel serial dates stay numeric; classification is name-driven
        Data::DateTime(v) => CellValue::Float(v.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
