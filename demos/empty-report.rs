use report_gen::report::{Report, ReportConfig, ReportHeader, TableData};

fn main() {
    env_logger::init();

    let mut header = ReportHeader::new("Ausencias");
    header.subtitle("Tipo: baja médica · Desde 01/01/2024");

    let mut report = Report::new(ReportConfig::default(), header).expect("can start report");
    let data = TableData::new(&["Nombre Completo", "Tipo Ausencia", "Fecha Inicio", "Fecha Fin", "Días"]);
    let top = report.content_top();
    report.add_table(&data, top).expect("can paint placeholder");

    let mut out = std::fs::File::create("empty-report.pdf").unwrap();
    report.write(&mut out).unwrap();
}
