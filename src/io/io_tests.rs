use std::path::Path;

use crate::chartab::registry;
use crate::io::format::{format_constituents, print_reduction};
use crate::io::{load_table, parse_table_records, resolve_table_path, TableSource};
use crate::pointgroup::{PointGroup, Representation};

const C2V_RECORDS: &[&str] = &[
    "C2v;1;1;1;1",
    "A1;1;1;1;1;z;x2+y2,z2",
    "A2;1;1;-1;-1;Rz;xy",
    "B1;1;-1;1;-1;x,Ry;xz",
    "B2;1;-1;-1;1;y,Rx;yz",
];

#[test]
fn test_parse_table_records_with_basis_functions() {
    let table = parse_table_records(C2V_RECORDS).unwrap();
    assert_eq!(table.name(), "C2v");
    assert_eq!(table.n_classes(), 4);
    assert_eq!(
        table.working_table(),
        registry::get("C2v").unwrap().working_table()
    );
    assert_eq!(table.basis_functions()[0], vec!["z", "x2+y2,z2"]);
    assert_eq!(table.basis_functions()[1], vec!["Rz", "xy"]);
}

#[test]
fn test_parse_table_records_without_basis_functions() {
    let records = ["Cs;1;1", "A';1;1", "A'';1;-1"];
    let table = parse_table_records(&records).unwrap();
    assert_eq!(table.irrep_names(), vec!["A'", "A''"]);
    assert!(table.basis_functions().iter().all(Vec::is_empty));
}

#[test]
fn test_parse_table_records_rejects_mixed_numeric_column() {
    let records = ["C2v;1;1;1;1", "A1;1;x;1;1"];
    let err = parse_table_records(&records).unwrap_err();
    assert!(err.to_string().contains("Non-numeric character"));
}

#[test]
fn test_parse_table_records_rejects_non_numeric_multiplicity() {
    let records = ["C2v;1;E;1;1", "A1;1;1;1;1"];
    let err = parse_table_records(&records).unwrap_err();
    assert!(err.to_string().contains("Non-numeric multiplicity"));
}

#[test]
fn test_parse_table_records_rejects_short_record() {
    let records = ["C2v;1;1;1;1", "A1;1;1"];
    assert!(parse_table_records(&records).is_err());
}

#[test]
fn test_parse_table_records_rejects_empty_resource() {
    assert!(parse_table_records(&[]).is_err());
    assert!(parse_table_records(&["", "   "]).is_err());
}

#[test]
fn test_parse_table_records_rejects_duplicate_irreps() {
    let records = ["C2v;1;1;1;1", "A1;1;1;1;1", "A1;1;1;-1;-1"];
    assert!(parse_table_records(&records).is_err());
}

#[test]
fn test_resolve_table_path_reports_attempted_locations() {
    let err = resolve_table_path(Path::new("no_such_table")).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("tables/no_such_table.csv") || message.contains("tables\\no_such_table.csv"));
    assert!(message.contains("`no_such_table`"));
}

#[test]
fn test_load_table_sources() {
    let literal = registry::get("Td").unwrap().clone();
    let loaded = load_table(TableSource::Table(literal.clone())).unwrap();
    assert_eq!(loaded, literal);

    let named = load_table(TableSource::Name("Td".to_string())).unwrap();
    assert_eq!(named, literal);

    let err = load_table(TableSource::Name("C7v".to_string())).unwrap_err();
    assert!(err.to_string().contains("not supported"));
}

#[test]
fn test_format_constituents() {
    let group = PointGroup::from_name("C2v").unwrap();
    let result = group
        .reduction(&Representation::from(vec![4.0, 0.0, 4.0, 0.0]))
        .unwrap();
    assert_eq!(format_constituents(&result), "2A1 + 2B1");
}

#[test]
fn test_format_constituents_omits_unit_counts() {
    let group = PointGroup::from_name("C3v").unwrap();
    let result = group
        .reduction(&Representation::from(vec![5.0, -1.0, 1.0]))
        .unwrap();
    assert_eq!(format_constituents(&result), "A1 + 2E");
}

#[test]
fn test_format_constituents_empty_for_zero_table() {
    let group = PointGroup::from_name("C2v").unwrap();
    let result = group
        .reduction(&Representation::from(vec![0.0, 0.0, 0.0, 0.0]))
        .unwrap();
    assert_eq!(format_constituents(&result), "");
    assert_eq!(print_reduction(&result, "result"), vec![0, 0, 0, 0]);
}
