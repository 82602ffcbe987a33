//! Report rendering with `comfy-table`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use enroll_metrics::DashboardData;
use enroll_model::schema::TableKind;
use enroll_model::{DashboardOptions, SiteActivationMetrics};

pub fn print_report(data: &DashboardData, options: &DashboardOptions) {
    println!("Enrollment dashboard (as of {})", options.as_of);
    print_overview(data);
    if let Some(points) = &data.monthly_enrollment {
        println!();
        println!("Monthly randomizations:");
        let mut table = new_table(vec!["Month", "Randomized", "Cumulative"]);
        for idx in 1..=2 {
            align_column(&mut table, idx, CellAlignment::Right);
        }
        for point in points {
            table.add_row(vec![
                Cell::new(&point.month_label),
                Cell::new(fmt_count(point.randomized)),
                Cell::new(fmt_count(point.cumulative)),
            ]);
        }
        println!("{table}");
    }
    if !data.projections.is_empty() {
        println!();
        println!(
            "Projections through {} (target {}/month):",
            options.projection_end, options.target_per_month
        );
        let mut table = new_table(vec![
            "Month",
            "Target",
            "Cumulative Target",
            "Screenings Needed",
        ]);
        for idx in 1..=3 {
            align_column(&mut table, idx, CellAlignment::Right);
        }
        for point in &data.projections {
            table.add_row(vec![
                Cell::new(&point.month_label),
                Cell::new(point.target_randomizations),
                Cell::new(point.cumulative_target),
                Cell::new(point.screenings_needed),
            ]);
        }
        println!("{table}");
    }
    if !data.supervisor_metrics.is_empty() {
        println!();
        println!("COSL performance:");
        let mut table = new_table(vec![
            "COSL",
            "Sites",
            "Screened",
            "Not Screened",
            "Randomized",
            "Not Randomized",
            "Avg Days to 1st Screening",
            "SF Rate %",
        ]);
        for idx in 1..=7 {
            align_column(&mut table, idx, CellAlignment::Right);
        }
        for group in &data.supervisor_metrics {
            table.add_row(vec![
                Cell::new(&group.supervisor),
                Cell::new(group.sites_assigned),
                Cell::new(group.sites_screened),
                Cell::new(group.sites_not_screened),
                Cell::new(group.sites_randomized),
                Cell::new(group.sites_not_randomized),
                optional_cell(group.avg_days_to_first_screening),
                optional_cell(group.screen_failure_rate),
            ]);
        }
        println!("{table}");
    }
}

fn print_overview(data: &DashboardData) {
    let mut table = new_table(vec!["Metric", "Value"]);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Screen failure rate (%)"),
        Cell::new(format!("{:.1}", data.screen_failure_rate)),
    ]);
    if let Some(metrics) = &data.site_metrics {
        add_site_rows(&mut table, metrics);
    }
    println!("{table}");
}

fn add_site_rows(table: &mut Table, metrics: &SiteActivationMetrics) {
    table.add_row(vec![
        Cell::new("Total sites"),
        Cell::new(metrics.total_sites),
    ]);
    table.add_row(vec![
        Cell::new("Active sites"),
        Cell::new(with_pct(metrics.active_sites, metrics.pct_active)),
    ]);
    table.add_row(vec![
        Cell::new("Sites not screening"),
        Cell::new(with_pct(metrics.sites_not_screening, metrics.pct_not_screening)),
    ]);
    table.add_row(vec![
        Cell::new("Sites not randomizing"),
        Cell::new(with_pct(
            metrics.sites_not_randomizing,
            metrics.pct_not_randomizing,
        )),
    ]);
    table.add_row(vec![
        Cell::new("Avg days to first screening"),
        optional_cell(metrics.avg_days_to_first_screening),
    ]);
    table.add_row(vec![
        Cell::new("Median days to first screening"),
        optional_cell(metrics.median_days_to_first_screening),
    ]);
}

/// Lists every logical table's canonical columns and accepted synonyms.
pub fn print_schema() {
    for kind in [TableKind::Enrollment, TableKind::Monthly, TableKind::Site] {
        println!("{}:", kind.label());
        let mut table = new_table(vec!["Canonical Column", "Accepted Synonyms", "Coercion"]);
        for (canonical, synonyms) in kind.synonym_map() {
            table.add_row(vec![
                Cell::new(*canonical),
                Cell::new(synonyms.join(", ")),
                coercion_cell(kind, canonical),
            ]);
        }
        println!("{table}");
        println!();
    }
}

fn coercion_cell(kind: TableKind, canonical: &str) -> Cell {
    if kind.numeric_columns().contains(&canonical) {
        Cell::new("numeric").fg(Color::Cyan)
    } else if kind.date_columns().contains(&canonical) {
        Cell::new("date").fg(Color::Cyan)
    } else {
        dim_cell("text")
    }
}

fn new_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    table.set_header(headers.into_iter().map(header_cell).collect::<Vec<_>>());
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn optional_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format!("{value:.1}")),
        None => dim_cell("-"),
    }
}

fn with_pct(count: usize, pct: Option<f64>) -> String {
    match pct {
        Some(pct) => format!("{count} ({pct:.1}%)"),
        None => count.to_string(),
    }
}

fn fmt_count(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value:.1}")
    }
}
