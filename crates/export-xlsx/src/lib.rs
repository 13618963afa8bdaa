//! Tabular spreadsheet export: one worksheet per metrics grouping, two
//! columns each. Groupings are fully independent tables with no joins.

use activa_types::MetricsBundle;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabularError {
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] XlsxError),
}

/// Worksheet identifiers are capped at 31 characters by the xlsx format.
const MAX_SHEET_NAME: usize = 31;

/// Writes the four groupings as independent category/value sheets and
/// returns the workbook bytes. Row order follows each grouping's own
/// iteration order; this backend does not promise sorted output.
pub fn export_tabular(metrics: &MetricsBundle) -> Result<Vec<u8>, TabularError> {
    let mut workbook = Workbook::new();

    write_sheet(
        workbook.add_worksheet(),
        "equipment_by_status",
        metrics.equipment_by_status.iter().map(|(k, v)| (k.as_str(), *v as f64)),
    )?;
    write_sheet(
        workbook.add_worksheet(),
        "equipment_by_location",
        metrics.equipment_by_location.iter().map(|(k, v)| (k.as_str(), *v as f64)),
    )?;
    write_sheet(
        workbook.add_worksheet(),
        "maintenance_costs",
        metrics.maintenance_costs.iter().map(|(k, v)| (k.as_str(), *v)),
    )?;
    write_sheet(
        workbook.add_worksheet(),
        "aging_profile",
        metrics.aging_profile.rows().into_iter().map(|(k, v)| (k, v as f64)),
    )?;

    let bytes = workbook.save_to_buffer()?;
    log::debug!("wrote workbook, {} bytes", bytes.len());
    Ok(bytes)
}

fn write_sheet<'a>(
    sheet: &mut Worksheet,
    name: &str,
    rows: impl Iterator<Item = (&'a str, f64)>,
) -> Result<(), TabularError> {
    sheet.set_name(truncate_sheet_name(name))?;
    sheet.write_string(0, 0, "category")?;
    sheet.write_string(0, 1, "value")?;
    for (idx, (category, value)) in rows.enumerate() {
        let row = idx as u32 + 1;
        sheet.write_string(row, 0, category)?;
        sheet.write_number(row, 1, value)?;
    }
    Ok(())
}

fn truncate_sheet_name(name: &str) -> &str {
    match name.char_indices().nth(MAX_SHEET_NAME) {
        Some((idx, _)) => &name[..idx],
        None => name,
    }
}
