use crate::chartab::registry::{self, REGISTRY};

#[test]
fn test_registry_supported_groups() {
    let supported = registry::supported_groups();
    assert_eq!(
        supported,
        vec![
            "Cs", "C2v", "C3v", "C4v", "C6v", "C2h", "D2h", "D3h", "D4h", "D6h", "D2d",
            "D3d", "D4d", "D6d", "Td", "O", "Oh"
        ]
    );
    assert!(registry::get("C2v").is_some());
    assert!(registry::get("C7v").is_none());
}

#[test]
fn test_registry_working_table_row_counts() {
    for (name, table) in REGISTRY.iter() {
        let working = table.working_table();
        assert_eq!(
            working.row_count(),
            table.n_irreps() + 1,
            "row count mismatch for {name}"
        );
        assert_eq!(
            working.n_columns(),
            table.n_classes(),
            "column count mismatch for {name}"
        );
        // Square tables: as many irreducible representations as classes.
        assert_eq!(table.n_irreps(), table.n_classes(), "{name} is not square");
    }
}

#[test]
fn test_registry_group_orders() {
    let orders = [
        ("Cs", 2.0),
        ("C2v", 4.0),
        ("C3v", 6.0),
        ("C6v", 12.0),
        ("D3h", 12.0),
        ("D4d", 16.0),
        ("D6d", 24.0),
        ("Td", 24.0),
        ("O", 24.0),
        ("Oh", 48.0),
    ];
    for (name, order) in orders {
        assert_eq!(registry::get(name).unwrap().order(), order, "order of {name}");
    }
}

#[test]
fn test_registry_c6v_wiring() {
    // The C6v entry must hold the genuine six-class C6v table, not the
    // eight-fold C8v data.
    let c6v = registry::get("C6v").unwrap();
    assert_eq!(c6v.n_classes(), 6);
    assert_eq!(
        c6v.irrep_names(),
        vec!["A1", "A2", "B1", "B2", "E1", "E2"]
    );
    assert_eq!(c6v.order(), 12.0);
}

#[test]
fn test_registry_first_class_is_identity() {
    // The first symmetry-operation class of every table is the identity,
    // whose multiplicity is one and whose characters give the irreducible
    // representations' dimensionalities.
    for (name, table) in REGISTRY.iter() {
        assert_eq!(table.class_multiplicities()[0], 1.0, "identity class of {name}");
        assert!(
            table.characters().column(0).iter().all(|&chi| chi >= 1.0),
            "non-positive dimensionality in {name}"
        );
    }
}
