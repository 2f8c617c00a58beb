use std::path::Path;

use calamine::{DataType, Reader, Xlsx, open_workbook};

use crate::error::{Result, ToolError};

/// Reads the data rows of the workbook's first sheet, skipping the header row.
///
/// Cells are coerced to strings and trailing blank cells are stripped, so the
/// length of each returned row is its usable column count rather than the
/// sheet width.
pub fn read_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ToolError::InvalidWorkbook("workbook contains no sheets".into()))?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .ok_or_else(|| ToolError::InvalidWorkbook(format!("missing sheet '{sheet_name}'")))?
        .map_err(ToolError::from)?;

    let mut rows = Vec::new();
    for row in range.rows().skip(1) {
        let mut cells: Vec<String> = row.iter().map(|cell| cell_to_string(Some(cell))).collect();
        while cells.last().is_some_and(|cell| cell.trim().is_empty()) {
            cells.pop();
        }
        rows.push(cells);
    }

    Ok(rows)
}

fn cell_to_string(cell: Option<&DataType>) -> String {
    match cell {
        Some(DataType::String(value)) => value.clone(),
        Some(DataType::Float(value)) => value.to_string(),
        Some(DataType::Int(value)) => value.to_string(),
        Some(DataType::Bool(value)) => value.to_string(),
        Some(DataType::Empty) | None => String::new(),
        Some(other) => other.to_string(),
    }
}
