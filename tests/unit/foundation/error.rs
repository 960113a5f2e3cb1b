use super::*;

#[test]
fn input_errors_name_their_kind() {
    let cases = [
        (FramecurveError::validation("domain[1] must be finite"), "validation error: domain[1]"),
        (FramecurveError::animation("Loop period"), "animation error: Loop period"),
        (FramecurveError::evaluation("property 'x'"), "evaluation error: property 'x'"),
        (FramecurveError::serde("trailing comma"), "serialization error: trailing comma"),
    ];
    for (err, expected) in cases {
        assert_eq!(err.to_string(), expected);
    }
}

#[test]
fn io_failure_keeps_path_and_cause() {
    let path = Path::new("sheets/title.json");
    let err = FramecurveError::io(
        "open property sheet JSON",
        path,
        std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    );
    let msg = err.to_string();
    assert!(msg.contains("open property sheet JSON 'sheets/title.json'"), "{msg}");
    assert!(msg.contains("no such file"), "{msg}");

    let FramecurveError::Other(inner) = &err else {
        panic!("expected Other, got {err:?}");
    };
    let io = inner.root_cause().downcast_ref::<std::io::Error>().unwrap();
    assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn json_errors_convert_to_serde_variant() {
    let bad = serde_json::from_str::<serde_json::Value>("{ \"fps\": ").unwrap_err();
    let err: FramecurveError = bad.into();
    assert!(matches!(err, FramecurveError::Serde(_)));
}

#[test]
fn errors_cross_threads() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<FramecurveError>();
}
