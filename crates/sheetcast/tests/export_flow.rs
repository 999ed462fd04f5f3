//! End-to-end export tests (schema -> build_sheet -> document verification)

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use sheetcast::prelude::*;

struct Employee {
    name: String,
    salary: f64,
    hired: Option<NaiveDate>,
    active: bool,
}

fn employee_schema() -> SheetSchema<Employee> {
    SheetSchema::builder()
        .title(
            TitleSpec::new()
                .title("직원 목록")
                .title_alt("Employees"),
        )
        .column(
            ColumnDef::new("name", |e: &Employee| (&e.name).into())
                .header("이름")
                .header_alt("Name"),
        )
        .column(
            ColumnDef::new("salary", |e: &Employee| e.salary.into())
                .header("연봉")
                .header_alt("Salary")
                .format("#,##0.00"),
        )
        .column(
            ColumnDef::new("hired", |e: &Employee| e.hired.into())
                .header("입사일")
                .header_alt("Hired")
                .format("yyyy-mm-dd")
                .default_text("-"),
        )
        .column(
            ColumnDef::new("active", |e: &Employee| e.active.into())
                .header("재직")
                .header_alt("Active"),
        )
        .build()
        .unwrap()
}

fn ann() -> Employee {
    Employee {
        name: "Ann".to_string(),
        salary: 5000.5,
        hired: NaiveDate::from_ymd_opt(2021, 4, 1),
        active: true,
    }
}

#[test]
fn test_employee_export_primary_locale() {
    let records = vec![ann()];
    let doc = build_sheet(
        &records,
        &employee_schema(),
        &StyleRegistry::new(),
        &ExportOptions::new(),
    )
    .unwrap();

    // title, total, header, 1 body row
    assert_eq!(doc.row_count(), 4);
    assert_eq!(doc.name(), "직원 목록");
    assert_eq!(doc.value_at(0, 0), CellValue::text("직원 목록"));
    assert_eq!(doc.value_at(1, 0), CellValue::text("전체 : 1"));

    // header row in declaration order, primary-language labels
    assert_eq!(doc.value_at(2, 0), CellValue::text("이름"));
    assert_eq!(doc.value_at(2, 1), CellValue::text("연봉"));

    // body values coerced per kind
    assert_eq!(doc.value_at(3, 0), CellValue::text("Ann"));
    assert_eq!(doc.value_at(3, 1), CellValue::Number(5000.5));
    assert_eq!(
        doc.value_at(3, 2),
        CellValue::Date(NaiveDate::from_ymd_opt(2021, 4, 1).unwrap())
    );
    assert_eq!(doc.value_at(3, 3), CellValue::Boolean(true));

    // salary body cell carries the declared number format
    let salary_style = doc.style_at(3, 1).unwrap();
    assert_eq!(salary_style.number_format.format_string(), "#,##0.00");
}

#[test]
fn test_alternate_locale_selects_alternate_text() {
    let records = vec![ann()];
    let doc = build_sheet(
        &records,
        &employee_schema(),
        &StyleRegistry::new(),
        &ExportOptions::new().locale(Locale::Alternate),
    )
    .unwrap();

    assert_eq!(doc.name(), "Employees");
    assert_eq!(doc.value_at(1, 0), CellValue::text("Total : 1"));
    assert_eq!(doc.value_at(2, 0), CellValue::text("Name"));
    assert_eq!(doc.value_at(2, 1), CellValue::text("Salary"));
}

#[test]
fn test_empty_record_list_ends_after_header() {
    let doc = build_sheet(
        &[],
        &employee_schema(),
        &StyleRegistry::new(),
        &ExportOptions::new(),
    )
    .unwrap();

    assert_eq!(doc.row_count(), 3);
    assert_eq!(doc.value_at(1, 0), CellValue::text("전체 : 0"));
    assert_eq!(doc.value_at(2, 0), CellValue::text("이름"));
}

#[test]
fn test_absent_value_renders_default_text() {
    let records = vec![Employee {
        hired: None,
        ..ann()
    }];
    let doc = build_sheet(
        &records,
        &employee_schema(),
        &StyleRegistry::new(),
        &ExportOptions::new(),
    )
    .unwrap();

    assert_eq!(doc.value_at(3, 2), CellValue::text("-"));
}

#[test]
fn test_present_empty_string_is_not_defaulted() {
    struct Note {
        body: String,
    }
    let schema: SheetSchema<Note> = SheetSchema::builder()
        .column(
            ColumnDef::new("body", |n: &Note| (&n.body).into())
                .header("Body")
                .default_text("N/A"),
        )
        .build()
        .unwrap();

    let doc = build_sheet(
        &[Note { body: String::new() }],
        &schema,
        &StyleRegistry::new(),
        &ExportOptions::new(),
    )
    .unwrap();

    assert_eq!(doc.value_at(1, 0), CellValue::text(""));
}

#[test]
fn test_title_suffix_and_file_name_fallback() {
    let registry = StyleRegistry::new();
    let records = vec![ann()];

    let doc = build_sheet(
        &records,
        &employee_schema(),
        &registry,
        &ExportOptions::new().title_suffix(" (2024)"),
    )
    .unwrap();
    assert_eq!(doc.value_at(0, 0), CellValue::text("직원 목록 (2024)"));

    // A schema whose title text is empty falls back to the file name
    struct Blank {
        v: i64,
    }
    let schema: SheetSchema<Blank> = SheetSchema::builder()
        .title(TitleSpec::new().use_total(false))
        .column(ColumnDef::new("v", |b: &Blank| b.v.into()))
        .build()
        .unwrap();
    let doc = build_sheet(
        &[Blank { v: 1 }],
        &schema,
        &registry,
        &ExportOptions::new().file_name("report"),
    )
    .unwrap();
    assert_eq!(doc.value_at(0, 0), CellValue::text("report"));
    assert_eq!(doc.name(), "report");
}

#[test]
fn test_repeated_builds_are_identical() {
    let records = vec![ann()];
    let registry = StyleRegistry::new();
    let schema = employee_schema();

    let a = build_sheet(&records, &schema, &registry, &ExportOptions::new()).unwrap();
    let b = build_sheet(&records, &schema, &registry, &ExportOptions::new()).unwrap();

    assert_eq!(a.row_count(), b.row_count());
    for row in 0..a.row_count() {
        for col in 0..schema.column_count() {
            assert_eq!(a.value_at(row, col), b.value_at(row, col));
        }
    }
    assert_eq!(a.name(), b.name());
}

#[test]
fn test_cached_schema_exports() {
    impl RecordSchema for Employee {
        fn schema() -> std::result::Result<SheetSchema<Self>, SchemaError> {
            SheetSchema::builder()
                .column(
                    ColumnDef::new("name", |e: &Employee| (&e.name).into())
                        .header("이름")
                        .header_alt("Name"),
                )
                .column(
                    ColumnDef::new("salary", |e: &Employee| e.salary.into())
                        .header("연봉")
                        .header_alt("Salary"),
                )
                .build()
        }
    }

    let schema = schema_of::<Employee>().unwrap();
    let schema_again = schema_of::<Employee>().unwrap();
    assert!(std::sync::Arc::ptr_eq(&schema, &schema_again));

    let doc = build_sheet(
        &[ann()],
        &schema,
        &StyleRegistry::new(),
        &ExportOptions::new(),
    )
    .unwrap();
    assert_eq!(doc.value_at(0, 0), CellValue::text("이름"));
    assert_eq!(doc.value_at(1, 1), CellValue::Number(5000.5));
}
