use crate::blocks::{Card, PlannedDocument};
use crate::format::{currency, period_label, status_label};
use crate::planner::PagePlanner;
use activa_types::{CountBucket, MetricsBundle, PageGeometry};
use chrono::NaiveDateTime;
use itertools::Itertools;

/// Document title shown in every page banner.
pub const REPORT_TITLE: &str = "Reporte de Activos y Mantenimiento";
/// Right-aligned caption in the banner.
pub const REPORT_TAGLINE: &str = "Vista general";
/// Placeholder row for a section with no data.
pub const NO_DATA_LABEL: &str = "Sin datos disponibles";

/// Plans the full report: header, summary cards, then the fixed section
/// sequence. Empty groupings plan a no-data row rather than dropping the
/// section; the planner never fails.
pub fn plan_report(
    metrics: &MetricsBundle,
    geometry: PageGeometry,
    generated_at: NaiveDateTime,
) -> PlannedDocument {
    let mut planner = PagePlanner::new(geometry);

    planner.cards(&[
        Card::new("Equipos totales", metrics.total_equipment().to_string()),
        Card::new("Operacionales", metrics.operational_count().to_string()),
        Card::new("Obsoletos", metrics.obsolete_count().to_string()),
        Card::new("Ubicaciones activas", metrics.location_count().to_string()),
    ]);

    planner.section(
        "Equipos por estado",
        count_rows_desc(&metrics.equipment_by_status)
            .into_iter()
            .map(|(name, count)| (status_label(&name), count.to_string()))
            .collect(),
    );

    planner.section(
        "Equipos por ubicación",
        count_rows_desc(&metrics.equipment_by_location)
            .into_iter()
            .map(|(name, count)| (name, count.to_string()))
            .collect(),
    );

    // Most recent month first.
    planner.section(
        "Costos de mantenimiento por mes",
        metrics
            .maintenance_costs
            .iter()
            .sorted_by(|a, b| b.0.cmp(a.0))
            .map(|(period, amount)| (period_label(period), currency(*amount)))
            .collect(),
    );

    // An all-zero profile means no equipment had a purchase date; present
    // that as "no data" rather than three zero rows.
    let aging_rows = if metrics.aging_profile.total() == 0 {
        Vec::new()
    } else {
        metrics
            .aging_profile
            .rows()
            .into_iter()
            .map(|(label, count)| (format!("{label} años"), count.to_string()))
            .collect()
    };
    planner.section("Perfil de antigüedad (años)", aging_rows);

    let months = metrics.months_with_costs();
    if months > 0 {
        let total = metrics.total_cost();
        planner.section(
            "Resumen financiero",
            vec![
                ("Meses con registro".to_string(), months.to_string()),
                ("Costo promedio mensual".to_string(), currency(total / months as f64)),
                ("Costo total registrado".to_string(), currency(total)),
            ],
        );
    }

    PlannedDocument {
        geometry,
        title: REPORT_TITLE.to_string(),
        generated: format!("Generado: {}", generated_at.format("%d/%m/%Y %H:%M")),
        tagline: REPORT_TAGLINE.to_string(),
        pages: planner.finish(),
    }
}

/// Count-descending rows; ties break by label so plans are deterministic
/// even though the bucket itself is unordered.
fn count_rows_desc(bucket: &CountBucket) -> Vec<(String, u64)> {
    bucket
        .iter()
        .map(|(label, count)| (label.clone(), *count))
        .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
        .collect()
}
