use graspfit::{Grasp, GraspError};

#[test]
fn zero_variance_actual_is_degenerate() {
    let err = Grasp::new(vec![5.0, 5.0, 5.0, 5.0], vec![1.0, 2.0, 3.0, 4.0]).unwrap_err();
    assert!(matches!(err, GraspError::DegenerateInput));
}

#[test]
fn length_mismatch_is_rejected_before_any_computation() {
    let err = Grasp::new(vec![1.0, 2.0], vec![1.0, 2.0, 3.0]).unwrap_err();
    assert!(matches!(
        err,
        GraspError::LengthMismatch {
            actual: 2,
            perceived: 3
        }
    ));
}

#[test]
fn single_pair_is_insufficient_for_regression() {
    let err = Grasp::new(vec![4.0], vec![4.2]).unwrap_err();
    assert!(matches!(
        err,
        GraspError::InsufficientData { needed: 2, got: 1 }
    ));
}

#[test]
fn empty_input_is_insufficient() {
    let err = Grasp::new(vec![], vec![]).unwrap_err();
    assert!(matches!(
        err,
        GraspError::InsufficientData { needed: 2, got: 0 }
    ));
}

#[test]
fn error_messages_name_the_failure() {
    let err = Grasp::new(vec![5.0, 5.0], vec![1.0, 2.0]).unwrap_err();
    assert!(err.to_string().contains("degenerate input"));

    let err = Grasp::new(vec![1.0], vec![1.0, 2.0]).unwrap_err();
    assert!(err.to_string().contains("length mismatch"));
}
