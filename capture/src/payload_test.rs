use super::*;

#[test]
fn parse_reads_string_message() {
    let payload = ResponsePayload::parse(r#"{"mensaje": "Saldo capturado"}"#).unwrap();
    assert_eq!(payload.display_text(), "Saldo capturado");
}

#[test]
fn display_keeps_non_ascii_text_verbatim() {
    let payload =
        ResponsePayload::parse(r#"{"mensaje":"Saldo capturado y guardado en CSV con éxito."}"#).unwrap();
    assert_eq!(payload.display_text(), "Saldo capturado y guardado en CSV con éxito.");
}

#[test]
fn missing_field_displays_undefined() {
    let payload = ResponsePayload::parse("{}").unwrap();
    assert!(payload.message().is_none());
    assert_eq!(payload.display_text(), "undefined");
}

#[test]
fn non_object_body_displays_undefined() {
    for body in ["[]", "42", "\"texto\"", "true"] {
        let payload = ResponsePayload::parse(body).unwrap();
        assert_eq!(payload.display_text(), ABSENT_TEXT, "body {body}");
    }
}

#[test]
fn null_field_displays_null() {
    let payload = ResponsePayload::parse(r#"{"mensaje": null}"#).unwrap();
    assert_eq!(payload.display_text(), "null");
}

#[test]
fn non_string_field_displays_js_string() {
    let payload = ResponsePayload::parse(r#"{"mensaje": 12.5}"#).unwrap();
    assert_eq!(payload.display_text(), "12.5");

    let payload = ResponsePayload::parse(r#"{"mensaje": false}"#).unwrap();
    assert_eq!(payload.display_text(), "false");
}

#[test]
fn numbers_render_like_js() {
    let cases = [
        ("1.0", "1"),
        ("-0", "0"),
        ("100", "100"),
        ("0.000001", "0.000001"),
        ("1.5e-7", "1.5e-7"),
        ("1e21", "1e+21"),
        ("12345678901234567890", "12345678901234567000"),
    ];
    for (literal, expected) in cases {
        let payload = ResponsePayload::parse(&format!(r#"{{"mensaje":{literal}}}"#)).unwrap();
        assert_eq!(payload.display_text(), expected, "literal {literal}");
    }
}

#[test]
fn out_of_range_number_is_not_a_parse_error() {
    let payload = ResponsePayload::parse(r#"{"mensaje":1e400}"#).unwrap();
    assert_eq!(payload.display_text(), "Infinity");

    let payload = ResponsePayload::parse(r#"{"mensaje":-1e400}"#).unwrap();
    assert_eq!(payload.display_text(), "-Infinity");
}

#[test]
fn out_of_range_number_in_other_field_still_shows_message() {
    let payload = ResponsePayload::parse(r#"{"otro":1e400,"mensaje":"ok"}"#).unwrap();
    assert_eq!(payload.display_text(), "ok");
}

#[test]
fn array_field_joins_elements() {
    let payload = ResponsePayload::parse(r#"{"mensaje":[1,2,null,"tres",[4,5]]}"#).unwrap();
    assert_eq!(payload.display_text(), "1,2,,tres,4,5");
}

#[test]
fn object_field_displays_object_tag() {
    let payload = ResponsePayload::parse(r#"{"mensaje":{"a":1}}"#).unwrap();
    assert_eq!(payload.display_text(), "[object Object]");
}

#[test]
fn extra_fields_are_ignored() {
    let payload = ResponsePayload::parse(r#"{"success": true, "mensaje": "ok"}"#).unwrap();
    assert_eq!(payload.display_text(), "ok");
}

#[test]
fn malformed_body_is_parse_error() {
    let err = ResponsePayload::parse("<html>500</html>").unwrap_err();
    assert!(matches!(err, TriggerError::Parse(_)));
    assert_eq!(err.error_code(), "E_PARSE");
}

#[test]
fn empty_body_is_parse_error() {
    assert!(matches!(ResponsePayload::parse(""), Err(TriggerError::Parse(_))));
}

#[test]
fn null_body_is_parse_error() {
    let err = ResponsePayload::parse("null").unwrap_err();
    assert_eq!(err, TriggerError::Parse("cannot read 'mensaje' of null".into()));
}
