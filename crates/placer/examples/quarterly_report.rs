//! Example: two tables side by side with shading and a chart

use placer::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let revenue = Dataset::from_rows(
        vec!["Month", "Revenue", "Cost"],
        vec![
            vec!["Jan".into(), 1000.into(), 640.into()],
            vec!["Feb".into(), 1200.into(), 700.into()],
            vec!["Mar".into(), 950.into(), 720.into()],
            vec!["Apr".into(), 1500.into(), 810.into()],
        ],
    )?;
    let mut revenue = TableDescriptor::new("Monthly revenue", revenue, "Report").with_formatting(
        "Revenue",
        vec![
            cell_shading(Color::RED, Color::WHITE, "<", 1000)?,
            cell_shading_range(Color::GRAY, Color::BLACK, "between", 1000, 1299)?,
        ],
    );

    let regions = Dataset::from_rows(
        vec!["Sales"],
        vec![vec![120.into()], vec![95.into()], vec![143.into()]],
    )?
    .with_index(vec!["North".into(), "South".into(), "East".into()])?
    .with_index_name("Region");
    let mut regions = TableDescriptor::new("Sales by region", regions, "Report");

    let mut writer = WorkbookWriter::create("/tmp/quarterly_report.xlsx");
    let placed = writer.place_table_at(&mut revenue, 1, 1)?;
    // one blank column to the right of the first table
    writer.place_table_at(&mut regions, 1, placed.end_col + 2)?;

    let trend = ChartDescriptor::new(&revenue, ChartKind::Line, "Revenue", "B10", "Month", "Revenue");
    let share = ChartDescriptor::new(&regions, ChartKind::Pie, "Sales", "H10", "index", "Sales");
    for chart in [&trend, &share] {
        let resolved = writer.place_chart(chart)?;
        println!("{}: {} against {}", resolved.name, resolved.values, resolved.categories);
    }

    writer.finalize()?;
    println!("Created /tmp/quarterly_report.xlsx");
    Ok(())
}
