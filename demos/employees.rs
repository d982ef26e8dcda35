use report_gen::report::{CellValue, Report, ReportConfig, ReportHeader, TableData};

const CENTRES: [&str; 3] = ["Madrid - Sede Central", "Valencia", "Bilbao Polígono Industrial"];

fn main() {
    env_logger::init();

    let mut employees = TableData::new(&[
        "Nombre Completo",
        "DNI/NIE",
        "Email",
        "Centro",
        "Puesto",
        "Fecha Alta",
        "Fecha Baja",
        "Estado",
    ]);
    for i in 0..64 {
        let puesto = if i % 7 == 0 {
            lipsum::lipsum(12)
        } else {
            "Técnico de sistemas".to_string()
        };
        let baja = if i % 5 == 0 { Some("31/12/2023") } else { None };
        employees.push_row([
            CellValue::from(format!("García López Martínez, Juan Carlos {i}")),
            CellValue::from(format!("{:08}Z", 10_000_000 + i * 7919)),
            CellValue::from(format!("empleado.numero.{i}@empresa-ejemplo.es")),
            CellValue::from(CENTRES[i % CENTRES.len()]),
            CellValue::from(puesto),
            CellValue::from("01/02/2021"),
            CellValue::from(baja),
            CellValue::from(if baja.is_some() { "Baja" } else { "Activo" }),
        ]);
    }

    let mut header = ReportHeader::new("Listado de empleados");
    header.subtitle("Centro: todos · Estado: activos");

    let mut config = ReportConfig::default();
    config.author = Some("Recursos Humanos".into());
    config.labels.page_of = "Página {page} de {pages}".into();

    let mut report = Report::new(config, header).expect("can start report");
    let top = report.content_top();
    let cursor = report
        .add_section_title("Plantilla", top)
        .expect("can paint section title");
    let cursor = report
        .add_table(&employees, cursor.y)
        .expect("can paint table");
    report
        .add_summary(
            "Resumen",
            &[
                ("Total empleados", employees.rows.len().to_string()),
                ("Centros", CENTRES.len().to_string()),
            ],
            cursor.y,
        )
        .expect("can paint summary");

    let mut out = std::fs::File::create("employees.pdf").unwrap();
    report.write(&mut out).unwrap();
}
