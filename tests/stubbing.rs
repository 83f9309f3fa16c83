use serde_json::json;
use stubkit::{create_stub, when, CallPattern, Failure, StubError};

#[test]
fn test_unconfigured_operation_fails_with_unstubbed() {
    let stub = create_stub("fetch");

    let err = stub.call("get", json!(["url/1"])).unwrap_err();
    assert!(matches!(err, StubError::Unstubbed { .. }));

    // Every operation is unconfigured, not just `get`.
    let err = stub.call("post", json!({"body": "x"})).unwrap_err();
    assert!(matches!(err, StubError::Unstubbed { .. }));
}

#[test]
fn test_then_return_replays_the_same_value_every_time() {
    let stub = create_stub("fetch");
    when(&stub, CallPattern::operation("get").with_args(json!(["url/1"])))
        .then_return(json!({"status": 200}));

    for _ in 0..10 {
        let response = stub.call("get", json!(["url/1"])).unwrap();
        assert_eq!(response, json!({"status": 200}));
    }
}

#[test]
fn test_last_registered_expectation_wins() {
    let stub = create_stub("fetch");
    let pattern = CallPattern::operation("get").with_args(json!(["url/1"]));

    when(&stub, pattern.clone()).then_return(json!(1));
    when(&stub, pattern).then_return(json!(2));

    assert_eq!(stub.call("get", json!(["url/1"])).unwrap(), json!(2));
}

#[test]
fn test_reconfiguration_mid_test_overrides_without_reset() {
    let stub = create_stub("fetch");
    when(&stub, CallPattern::operation("get")).then_return(json!("first"));
    assert_eq!(stub.call("get", json!([])).unwrap(), json!("first"));

    // No reset call between the two setups; the later one simply wins.
    when(&stub, CallPattern::operation("get")).then_return(json!("second"));
    assert_eq!(stub.call("get", json!([])).unwrap(), json!("second"));
}

#[test]
fn test_then_fail_raises_the_configured_failure() {
    let stub = create_stub("fetch");
    when(&stub, CallPattern::operation("get").with_args(json!(["url/1"])))
        .then_fail("NotFoundError", "missing");

    let err = stub.call("get", json!(["url/1"])).unwrap_err();
    assert_eq!(
        err,
        StubError::Configured(Failure::new("NotFoundError", "missing"))
    );
    assert_eq!(err.to_string(), "NotFoundError: missing");

    // A different argument matches nothing and is unstubbed, not NotFound.
    let err = stub.call("get", json!(["url/2"])).unwrap_err();
    assert!(matches!(err, StubError::Unstubbed { .. }));
}

#[test]
fn test_then_answer_computes_from_actual_arguments() {
    let stub = create_stub("fetch");
    when(&stub, CallPattern::operation("get")).then_answer(|args| {
        let url = args[0].as_str().unwrap_or_default();
        Ok(json!({ "requested": url, "status": 200 }))
    });

    let response = stub.call("get", json!(["https://x/42"])).unwrap();
    assert_eq!(response["requested"], "https://x/42");
}

#[test]
fn test_wildcard_and_exact_patterns_compose() {
    let stub = create_stub("fetch");
    when(&stub, CallPattern::operation("get")).then_return(json!("fallback"));
    when(&stub, CallPattern::operation("get").with_args(json!(["special"])))
        .then_return(json!("special-case"));

    assert_eq!(stub.call("get", json!(["special"])).unwrap(), json!("special-case"));
    assert_eq!(stub.call("get", json!(["anything"])).unwrap(), json!("fallback"));
}

#[test]
fn test_predicate_pattern() {
    let stub = create_stub("fetch");
    when(
        &stub,
        CallPattern::operation("get").matching("https_only", |args| {
            args[0].as_str().is_some_and(|u| u.starts_with("https://"))
        }),
    )
    .then_return(json!(200));

    assert_eq!(stub.call("get", json!(["https://x/1"])).unwrap(), json!(200));

    let err = stub.call("get", json!(["http://x/1"])).unwrap_err();
    assert!(err.to_string().contains("predicate(https_only)"));
}

#[test]
fn test_unstubbed_message_lists_available_patterns() {
    let stub = create_stub("fetch");
    when(&stub, CallPattern::operation("get").with_args(json!(["url/1"]))).then_return(json!(1));
    when(&stub, CallPattern::operation("get").with_args(json!(["url/2"]))).then_return(json!(2));

    let err = stub.call("get", json!(["url/3"])).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("unstubbed call fetch.get"), "{}", message);
    assert!(message.contains("exact([\"url/1\"])"), "{}", message);
    assert!(message.contains("exact([\"url/2\"])"), "{}", message);
}

#[test]
fn test_operations_are_stubbed_independently() {
    let stub = create_stub("api");
    when(&stub, CallPattern::operation("get")).then_return(json!("got"));
    when(&stub, CallPattern::operation("delete")).then_fail("Forbidden", "read-only");

    assert_eq!(stub.call("get", json!([])).unwrap(), json!("got"));
    assert!(stub.call("delete", json!([])).is_err());
    assert!(matches!(
        stub.call("put", json!([])).unwrap_err(),
        StubError::Unstubbed { .. }
    ));
}
