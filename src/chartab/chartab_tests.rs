use ndarray::array;

use crate::chartab::CharacterTable;

fn c2v_rows() -> Vec<(&'static str, Vec<f64>)> {
    vec![
        ("A1", vec![1.0, 1.0, 1.0, 1.0]),
        ("A2", vec![1.0, 1.0, -1.0, -1.0]),
        ("B1", vec![1.0, -1.0, 1.0, -1.0]),
        ("B2", vec![1.0, -1.0, -1.0, 1.0]),
    ]
}

#[test]
fn test_chartab_construction() {
    let table = CharacterTable::new("C2v", &[1.0, 1.0, 1.0, 1.0], &c2v_rows()).unwrap();
    assert_eq!(table.name(), "C2v");
    assert_eq!(table.n_classes(), 4);
    assert_eq!(table.n_irreps(), 4);
    assert_eq!(table.order(), 4.0);
    assert_eq!(table.irrep_names(), vec!["A1", "A2", "B1", "B2"]);
    assert_eq!(table.irrep_row("B1").unwrap(), array![1.0, -1.0, 1.0, -1.0]);
    assert!(table.irrep_row("E").is_none());
    assert!(table.basis_functions().iter().all(Vec::is_empty));
}

#[test]
fn test_chartab_duplicate_irrep_rejected() {
    let mut rows = c2v_rows();
    rows[1].0 = "A1";
    let err = CharacterTable::new("C2v", &[1.0, 1.0, 1.0, 1.0], &rows).unwrap_err();
    assert!(err.to_string().contains("duplicated irreducible representation"));
}

#[test]
fn test_chartab_ragged_row_rejected() {
    let mut rows = c2v_rows();
    rows[2].1.pop();
    assert!(CharacterTable::new("C2v", &[1.0, 1.0, 1.0, 1.0], &rows).is_err());
}

#[test]
fn test_chartab_no_classes_rejected() {
    assert!(CharacterTable::new("C1", &[], &[("A", vec![])]).is_err());
}

#[test]
fn test_chartab_no_irreps_rejected() {
    assert!(CharacterTable::new("C2v", &[1.0, 1.0, 1.0, 1.0], &[]).is_err());
}

#[test]
fn test_chartab_non_numeric_cell_rejected() {
    let mut rows = c2v_rows();
    rows[0].1[2] = f64::NAN;
    assert!(CharacterTable::new("C2v", &[1.0, 1.0, 1.0, 1.0], &rows).is_err());
}

#[test]
fn test_chartab_non_positive_multiplicity_rejected() {
    assert!(CharacterTable::new("C2v", &[1.0, 0.0, 1.0, 1.0], &c2v_rows()).is_err());
}

#[test]
fn test_chartab_basis_function_shape_rejected() {
    let basis = vec![vec!["z".to_string()]];
    assert!(
        CharacterTable::with_basis_functions("C2v", &[1.0, 1.0, 1.0, 1.0], &c2v_rows(), basis)
            .is_err()
    );
}

#[test]
fn test_working_table_rows() {
    let table = CharacterTable::new("C2v", &[1.0, 1.0, 1.0, 1.0], &c2v_rows()).unwrap();
    let working = table.working_table();
    assert_eq!(working.row_count(), 5);
    assert_eq!(working.n_columns(), 4);
    assert_eq!(working.row(0).unwrap(), array![1.0, 1.0, 1.0, 1.0]);
    assert_eq!(working.row(2).unwrap(), array![1.0, 1.0, -1.0, -1.0]);
    assert!(working.row(5).is_none());
}
