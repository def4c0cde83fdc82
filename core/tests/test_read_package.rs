use fitness_core::metrics::metrics;
use fitness_core::{parse_packages_json, read_package, Training, TrainingError, Workout, WorkoutKind};

#[test]
fn test_unknown_code() {
    let err = read_package("XYZ", &[1.0, 1.0, 1.0]).unwrap_err();
    match err {
        TrainingError::UnknownWorkoutCode { code, valid } => {
            assert_eq!(code, "XYZ");
            assert_eq!(valid.len(), 3);
            for c in ["SWM", "RUN", "WLK"] {
                assert!(valid.contains(&c));
            }
        }
        other => panic!("forventet UnknownWorkoutCode, fikk {other:?}"),
    }
}

#[test]
fn test_negative_value() {
    let err = read_package("RUN", &[-5.0, 1.0, 75.0]).unwrap_err();
    assert_eq!(err, TrainingError::NegativeValue { values: vec![-5.0] });
}

#[test]
fn test_negative_wins_over_unknown_code() {
    let err = read_package("XYZ", &[1.0, -2.0, -2.0]).unwrap_err();
    assert_eq!(err, TrainingError::NegativeValue { values: vec![-2.0] });

    // også før antall-sjekken
    let err = read_package("SWM", &[-1.0]).unwrap_err();
    assert!(matches!(err, TrainingError::NegativeValue { .. }));
}

#[test]
fn test_wrong_arity() {
    let err = read_package("WLK", &[9000.0, 1.0, 75.0]).unwrap_err();
    assert_eq!(
        err,
        TrainingError::WrongArity { code: "WLK", expected: 4, got: 3 }
    );
    assert!(read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]).is_err());
}

#[test]
fn test_fields_are_assigned_in_declaration_order() {
    match read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap() {
        Workout::Swimming(s) => {
            assert_eq!(s.base.action, 720);
            assert_eq!(s.base.duration_h, 1.0);
            assert_eq!(s.base.weight_kg, 80.0);
            assert_eq!(s.length_pool_m, 25.0);
            assert_eq!(s.count_pool, 40.0);
        }
        other => panic!("forventet Swimming, fikk {other:?}"),
    }

    match read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap() {
        Workout::SportsWalking(w) => assert_eq!(w.height, 180.0),
        other => panic!("forventet SportsWalking, fikk {other:?}"),
    }
}

#[test]
fn test_each_code_maps_to_its_kind() {
    for kind in WorkoutKind::ALL {
        let data = vec![100.0; kind.arity()];
        let w = read_package(kind.code(), &data).unwrap();
        assert_eq!(w.kind(), kind);
    }
}

#[test]
fn test_zero_duration_is_accepted_by_factory() {
    // 0 er ikke negativ; feilen kommer først ved snittfart
    let w = read_package("RUN", &[15000.0, 0.0, 75.0]).unwrap();
    assert!(matches!(
        w.show_training_info(),
        Err(TrainingError::InvalidDuration { .. })
    ));
}

#[test]
fn test_fractional_action_rejected() {
    let err = read_package("RUN", &[10.5, 1.0, 75.0]).unwrap_err();
    assert_eq!(err, TrainingError::InvalidActionCount { value: 10.5 });
}

#[test]
fn test_metrics_are_counted() {
    let before = metrics().rejected_count("unknown_workout_code");
    let _ = read_package("NOPE", &[1.0, 1.0, 1.0]);
    assert!(metrics().rejected_count("unknown_workout_code") > before);

    let before = metrics().accepted_count("RUN");
    read_package("RUN", &[1.0, 1.0, 1.0]).unwrap();
    assert!(metrics().accepted_count("RUN") > before);
}

#[test]
fn test_parse_packages_json() {
    let packages = parse_packages_json(
        r#"[{"code": "RUN", "data": [15000, 1, 75]}, {"workout_type": "SWM", "values": [720, 1, 80, 25, 40]}]"#,
    )
    .unwrap();
    assert_eq!(packages.len(), 2);
    assert_eq!(packages[1].code, "SWM");
    assert_eq!(packages[1].data, vec![720.0, 1.0, 80.0, 25.0, 40.0]);
}

#[test]
fn test_parse_error_reports_path() {
    let err = parse_packages_json(r#"[{"code": "RUN", "data": [15000, "x", 75]}]"#).unwrap_err();
    match err {
        TrainingError::Parse { path, .. } => assert_eq!(path, "[0].data[1]"),
        other => panic!("forventet Parse, fikk {other:?}"),
    }
}

#[test]
fn test_unknown_code_wins_over_non_finite() {
    // +inf er ikke negativ, så koden sjekkes først
    let err = read_package("XYZ", &[f64::INFINITY, 1.0, 1.0]).unwrap_err();
    assert!(matches!(err, TrainingError::UnknownWorkoutCode { .. }), "{err:?}");

    let err = read_package("XYZ", &[f64::NAN, 1.0, 1.0]).unwrap_err();
    assert!(matches!(err, TrainingError::UnknownWorkoutCode { .. }), "{err:?}");

    // men negativ verdi vinner fortsatt
    let err = read_package("XYZ", &[f64::NEG_INFINITY, f64::NAN, 1.0]).unwrap_err();
    assert_eq!(err, TrainingError::NegativeValue { values: vec![f64::NEG_INFINITY] });
}

#[test]
fn test_non_finite_value_rejected() {
    let err = read_package("RUN", &[15000.0, f64::NAN, 75.0]).unwrap_err();
    assert_eq!(err, TrainingError::NonFiniteValue { index: 1 });

    let err = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, f64::INFINITY]).unwrap_err();
    assert_eq!(err, TrainingError::NonFiniteValue { index: 4 });

    // antall-sjekken kommer før
    let err = read_package("WLK", &[f64::INFINITY, 1.0, 75.0]).unwrap_err();
    assert!(matches!(err, TrainingError::WrongArity { .. }), "{err:?}");
}

#[test]
fn test_action_count_out_of_range() {
    let err = read_package("RUN", &[18_446_744_073_709_551_616.0, 1.0, 75.0]).unwrap_err();
    assert!(matches!(err, TrainingError::InvalidActionCount { .. }), "{err:?}");
}
