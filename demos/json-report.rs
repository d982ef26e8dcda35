//! Builds a report entirely from JSON: a configuration file and the table
//! data as the query layer would hand it over.
//!
//! ```sh
//! cargo run --example json-report -- demos/theme.json demos/contracts.json
//! ```

use report_gen::report::{Report, ReportConfig, ReportHeader, TableData};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config_path = args.next().unwrap_or_else(|| "demos/theme.json".to_string());
    let data_path = args.next().unwrap_or_else(|| "demos/contracts.json".to_string());

    let config = ReportConfig::from_path(&config_path).expect("can load configuration");
    let data: TableData = serde_json::from_str(
        &std::fs::read_to_string(&data_path).expect("can read table data"),
    )
    .expect("table data is valid JSON");

    let mut header = ReportHeader::new("Contratos vigentes");
    header.subtitle(format!("Origen: {data_path}"));

    let mut report = Report::new(config, header).expect("can start report");
    let top = report.content_top();
    let cursor = report.add_table(&data, top).expect("can paint table");
    report
        .add_summary("", &[("Contratos", data.rows.len())], cursor.y)
        .expect("can paint summary");

    let mut out = std::fs::File::create("json-report.pdf").unwrap();
    report.write(&mut out).unwrap();
}
