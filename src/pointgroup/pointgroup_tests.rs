use indexmap::indexmap;
use ndarray::array;
use proptest::prelude::*;

use crate::chartab::{registry, CharacterTable};
use crate::pointgroup::{
    MatchedRepresentation, PointGroup, PointGroupError, Representation,
};

#[test]
fn test_pointgroup_from_name() {
    let group = PointGroup::from_name("C2v").unwrap();
    assert_eq!(group.character_table().name(), "C2v");
    assert_eq!(group.threshold(), 1e-7);
}

#[test]
fn test_pointgroup_from_unknown_name() {
    let err = PointGroup::from_name("C7v").unwrap_err();
    match &err {
        PointGroupError::UnsupportedGroup {
            requested,
            supported,
        } => {
            assert_eq!(requested, "C7v");
            assert_eq!(supported.len(), registry::REGISTRY.len());
        }
        other => panic!("Unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("C2v"));
}

#[test]
fn test_pointgroup_from_table_roundtrip() {
    // Loading by name and loading the same table as an in-memory literal must
    // yield identical working tables.
    let literal = CharacterTable::new(
        "C2v",
        &[1.0, 1.0, 1.0, 1.0],
        &[
            ("A1", vec![1.0, 1.0, 1.0, 1.0]),
            ("A2", vec![1.0, 1.0, -1.0, -1.0]),
            ("B1", vec![1.0, -1.0, 1.0, -1.0]),
            ("B2", vec![1.0, -1.0, -1.0, 1.0]),
        ],
    )
    .unwrap();
    let from_table = PointGroup::from_table(literal);
    let from_name = PointGroup::from_name("C2v").unwrap();
    assert_eq!(from_table.working_table(), from_name.working_table());
}

#[test]
fn test_reduction_worked_example() {
    let group = PointGroup::from_name("C2v").unwrap();
    let result = group
        .reduction(&Representation::from(vec![4.0, 0.0, 4.0, 0.0]))
        .unwrap();
    assert_eq!(result.appearances(), &[2, 0, 2, 0]);
    assert_eq!(result.products().row(0), array![4.0, 0.0, 4.0, 0.0]);
    assert_eq!(result.products().row(1), array![4.0, 0.0, -4.0, 0.0]);
    assert_eq!(
        result.appearance_counts(),
        indexmap! {
            "A1".to_string() => 2,
            "A2".to_string() => 0,
            "B1".to_string() => 2,
            "B2".to_string() => 0,
        }
    );
}

#[test]
fn test_reduction_uses_class_multiplicities() {
    // Γ = A1 + 2E = [5, -1, 1] in C3v, whose classes have multiplicities
    // [1, 2, 3].
    let group = PointGroup::from_name("C3v").unwrap();
    let result = group
        .reduction(&Representation::from(vec![5.0, -1.0, 1.0]))
        .unwrap();
    assert_eq!(result.appearances(), &[1, 0, 2]);
}

#[test]
fn test_reduction_length_mismatch() {
    for name in registry::supported_groups() {
        let group = PointGroup::from_name(&name).unwrap();
        let too_long =
            Representation::from(vec![1.0; group.character_table().n_classes() + 1]);
        assert!(
            matches!(
                group.reduction(&too_long),
                Err(PointGroupError::LengthMismatch { .. })
            ),
            "no length-mismatch condition for {name}"
        );
    }
}

#[test]
fn test_reduction_non_numeric_element() {
    let group = PointGroup::from_name("C2v").unwrap();
    let err = group
        .reduction(&Representation::from(vec![4.0, f64::NAN, 4.0, 0.0]))
        .unwrap_err();
    assert_eq!(err, PointGroupError::NonNumericElement { index: 1 });
}

#[test]
fn test_constituents() {
    let group = PointGroup::from_name("C2v").unwrap();
    let counts = group
        .constituents(&Representation::from(vec![4.0, 0.0, 4.0, 0.0]))
        .unwrap();
    assert_eq!(counts["A1"], 2);
    assert_eq!(counts["B1"], 2);
    assert_eq!(counts["A2"], 0);
}

#[test]
fn test_convolution() {
    let group = PointGroup::from_name("C2v").unwrap();
    let product = group.convolution(&["A1", "A2"]).unwrap();
    assert_eq!(product.characters(), array![1.0, 1.0, -1.0, -1.0]);
    assert_eq!(product.label(), Some("A1 × A2"));
}

#[test]
fn test_convolution_label_includes_all_names() {
    let group = PointGroup::from_name("C2v").unwrap();
    let product = group.convolution(&["A2", "B1", "B2"]).unwrap();
    assert_eq!(product.label(), Some("A2 × B1 × B2"));
    // A2 ⊗ B1 = B2, and B2 ⊗ B2 = A1.
    assert_eq!(product.characters(), array![1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn test_convolution_missing_arguments() {
    let group = PointGroup::from_name("C2v").unwrap();
    assert_eq!(
        group.convolution(&["A1"]).unwrap_err(),
        PointGroupError::MissingArguments { given: 1 }
    );
    assert_eq!(
        group.convolution(&[]).unwrap_err(),
        PointGroupError::MissingArguments { given: 0 }
    );
}

#[test]
fn test_convolution_unknown_irrep() {
    let group = PointGroup::from_name("C2v").unwrap();
    let err = group.convolution(&["A1", "E"]).unwrap_err();
    match &err {
        PointGroupError::UnknownIrrep { requested, valid } => {
            assert_eq!(requested, "E");
            assert_eq!(valid, &["A1", "A2", "B1", "B2"]);
        }
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn test_match_representation_exact() {
    let group = PointGroup::from_name("C2v").unwrap();
    let matched = group
        .match_representation(&Representation::from(vec![1.0, 1.0, 1.0, 1.0]))
        .unwrap();
    match matched {
        MatchedRepresentation::Irreducible(representation) => {
            assert_eq!(representation.label(), Some("A1"));
            assert_eq!(representation.characters(), array![1.0, 1.0, 1.0, 1.0]);
        }
        other => panic!("Expected an exact match, got {other:?}"),
    }
}

#[test]
fn test_match_representation_reducible() {
    let group = PointGroup::from_name("C2v").unwrap();
    let matched = group
        .match_representation(&Representation::from(vec![2.0, 2.0, 2.0, 2.0]))
        .unwrap();
    match matched {
        MatchedRepresentation::Reducible(table) => {
            assert_eq!(table.appearances(), &[2, 0, 0, 0]);
        }
        other => panic!("Expected a reduction, got {other:?}"),
    }
}

#[test]
fn test_match_representation_length_mismatch() {
    let group = PointGroup::from_name("C2v").unwrap();
    assert!(matches!(
        group.match_representation(&Representation::from(vec![1.0, 1.0])),
        Err(PointGroupError::LengthMismatch {
            expected: 4,
            actual: 2
        })
    ));
}

#[test]
fn test_match_representation_degenerate_tolerance() {
    // The E1 and E3 rows of D4d carry ±√2; matching must not classify them as
    // reducible because of floating-point drift.
    let group = PointGroup::from_name("D4d").unwrap();
    let e1 = group
        .character_table()
        .irrep_row("E1")
        .unwrap()
        .to_owned();
    let drifted = Representation::new(e1.mapv(|chi| chi + 1e-10));
    match group.match_representation(&drifted).unwrap() {
        MatchedRepresentation::Irreducible(representation) => {
            assert_eq!(representation.label(), Some("E1"));
        }
        other => panic!("Expected an exact match, got {other:?}"),
    }
}

#[test]
fn test_show_matched_representation_returns_raw_result() {
    let group = PointGroup::from_name("C2v").unwrap();
    let labelled = Representation::labelled("Γ", ndarray::array![4.0, 0.0, 4.0, 0.0]);
    match group.show_matched_representation(&labelled).unwrap() {
        MatchedRepresentation::Reducible(table) => {
            assert_eq!(table.appearances(), &[2, 0, 2, 0]);
        }
        other => panic!("Expected a reduction, got {other:?}"),
    }
}

#[test]
fn test_convolution_results() {
    let group = PointGroup::from_name("C2v").unwrap();
    match group.convolution_results(&["B1", "B2"]).unwrap() {
        MatchedRepresentation::Irreducible(representation) => {
            assert_eq!(representation.label(), Some("A2"));
        }
        other => panic!("Expected an exact match, got {other:?}"),
    }
}

#[test]
fn test_convolution_results_degenerate() {
    // E ⊗ E = A1 + A2 + E in C3v.
    let group = PointGroup::from_name("C3v").unwrap();
    match group.convolution_results(&["E", "E"]).unwrap() {
        MatchedRepresentation::Reducible(table) => {
            assert_eq!(table.appearances(), &[1, 1, 1]);
        }
        other => panic!("Expected a reduction, got {other:?}"),
    }
}

proptest! {
    #[test]
    fn reduction_is_idempotent(values in proptest::collection::vec(-6i64..=6i64, 4)) {
        let group = PointGroup::from_name("C2v").unwrap();
        let representation =
            Representation::from(values.iter().map(|&v| v as f64).collect::<Vec<f64>>());
        prop_assert_eq!(
            group.reduction(&representation),
            group.reduction(&representation)
        );
    }

    #[test]
    fn reduction_rejects_wrong_lengths(len in 0usize..=8) {
        prop_assume!(len != 4);
        let group = PointGroup::from_name("C2v").unwrap();
        let representation = Representation::from(vec![1.0; len]);
        prop_assert!(
            matches!(
                group.reduction(&representation),
                Err(PointGroupError::LengthMismatch { .. })
            ),
            "expected a length-mismatch error"
        );
    }
}
