//! Header/locale selection and style isolation tests

use pretty_assertions::assert_eq;
use sheetcast::prelude::*;
use sheetcast::registry::{DEFAULT_BODY, DEFAULT_HEADER};

struct Metric {
    revenue: f64,
    cost: f64,
}

#[test]
fn test_header_fallback_matrix() {
    // revenue declares only the alternate label, cost only the primary one
    let schema: SheetSchema<Metric> = SheetSchema::builder()
        .column(
            ColumnDef::new("revenue", |m: &Metric| m.revenue.into()).header_alt("Revenue"),
        )
        .column(ColumnDef::new("cost", |m: &Metric| m.cost.into()).header("매출원가"))
        .build()
        .unwrap();
    let registry = StyleRegistry::new();

    let primary = build_sheet(&[], &schema, &registry, &ExportOptions::new()).unwrap();
    assert_eq!(primary.value_at(0, 0), CellValue::text("Revenue"));
    assert_eq!(primary.value_at(0, 1), CellValue::text("매출원가"));

    let alternate = build_sheet(
        &[],
        &schema,
        &registry,
        &ExportOptions::new().locale(Locale::Alternate),
    )
    .unwrap();
    assert_eq!(alternate.value_at(0, 0), CellValue::text("Revenue"));
    assert_eq!(alternate.value_at(0, 1), CellValue::text("매출원가"));
}

#[test]
fn test_blank_header_uses_column_default_text() {
    let schema: SheetSchema<Metric> = SheetSchema::builder()
        .column(ColumnDef::new("revenue", |m: &Metric| m.revenue.into()).default_text("(col)"))
        .build()
        .unwrap();

    let doc = build_sheet(&[], &schema, &StyleRegistry::new(), &ExportOptions::new()).unwrap();
    assert_eq!(doc.value_at(0, 0), CellValue::text("(col)"));
}

#[test]
fn test_format_on_one_column_does_not_leak_to_another() {
    // Both columns share DEFAULT_BODY, only revenue declares a format
    let schema: SheetSchema<Metric> = SheetSchema::builder()
        .column(
            ColumnDef::new("revenue", |m: &Metric| m.revenue.into())
                .header("Revenue")
                .body_style(DEFAULT_BODY)
                .format("#,##0.00"),
        )
        .column(
            ColumnDef::new("cost", |m: &Metric| m.cost.into())
                .header("Cost")
                .body_style(DEFAULT_BODY),
        )
        .build()
        .unwrap();

    let records = [Metric {
        revenue: 5000.5,
        cost: 120.0,
    }];
    let doc = build_sheet(
        &records,
        &schema,
        &StyleRegistry::new(),
        &ExportOptions::new(),
    )
    .unwrap();

    let revenue_style = doc.style_at(1, 0).unwrap();
    let cost_style = doc.style_at(1, 1).unwrap();

    assert_eq!(revenue_style.number_format.format_string(), "#,##0.00");
    assert!(cost_style.number_format.is_general());

    // Same recipe otherwise: only the format differs
    assert_eq!(revenue_style.border, cost_style.border);
    assert_eq!(revenue_style.alignment, cost_style.alignment);
}

#[test]
fn test_header_styles_shared_within_document() {
    let schema: SheetSchema<Metric> = SheetSchema::builder()
        .column(
            ColumnDef::new("revenue", |m: &Metric| m.revenue.into())
                .header("Revenue")
                .header_style(DEFAULT_HEADER),
        )
        .column(
            ColumnDef::new("cost", |m: &Metric| m.cost.into())
                .header("Cost")
                .header_style(DEFAULT_HEADER),
        )
        .build()
        .unwrap();

    let doc = build_sheet(&[], &schema, &StyleRegistry::new(), &ExportOptions::new()).unwrap();

    // Deduplicated to one pooled style, same index for both header cells
    let a = doc.row(0).unwrap().cell(0).unwrap().style_index;
    let b = doc.row(0).unwrap().cell(1).unwrap().style_index;
    assert_eq!(a, b);
}

#[test]
fn test_styles_do_not_cross_documents() {
    let schema: SheetSchema<Metric> = SheetSchema::builder()
        .column(
            ColumnDef::new("revenue", |m: &Metric| m.revenue.into())
                .header("Revenue")
                .format("0.00"),
        )
        .build()
        .unwrap();
    let registry = StyleRegistry::new();

    let records = [Metric {
        revenue: 1.0,
        cost: 0.0,
    }];
    let doc1 = build_sheet(&records, &schema, &registry, &ExportOptions::new()).unwrap();
    let doc2 = build_sheet(&records, &schema, &registry, &ExportOptions::new()).unwrap();

    // Equivalent styles, but each document owns its own pool
    assert_eq!(
        doc1.style_at(1, 0).unwrap(),
        doc2.style_at(1, 0).unwrap()
    );
    assert!(!std::ptr::eq(
        doc1.style_at(1, 0).unwrap(),
        doc2.style_at(1, 0).unwrap()
    ));
}

#[test]
fn test_unknown_style_aborts_export() {
    let schema: SheetSchema<Metric> = SheetSchema::builder()
        .column(
            ColumnDef::new("revenue", |m: &Metric| m.revenue.into())
                .header("Revenue")
                .body_style(StyleId::new("not-registered")),
        )
        .build()
        .unwrap();

    let result = build_sheet(&[], &schema, &StyleRegistry::new(), &ExportOptions::new());
    assert!(matches!(result, Err(ExportError::UnknownStyle(_))));
}

#[test]
fn test_zero_column_schema_exports_empty_sheet() {
    struct Nothing;
    let schema: SheetSchema<Nothing> = SheetSchema::builder().build().unwrap();

    let doc = build_sheet(
        &[Nothing, Nothing],
        &schema,
        &StyleRegistry::new(),
        &ExportOptions::new(),
    )
    .unwrap();

    // Header row and body rows exist but carry no cells
    assert_eq!(doc.row_count(), 3);
    assert_eq!(doc.row(0).unwrap().cell_count(), 0);
    assert_eq!(doc.row(1).unwrap().cell_count(), 0);
}
