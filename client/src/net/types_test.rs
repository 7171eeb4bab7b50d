use super::*;

#[test]
fn login_response_parses_server_shape() {
    let raw = r#"{"token":"abc.def.ghi","profile":{"first_name":"Ana","last_name":"Popescu","email":"ana@example.com","username":"ana_p"}}"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.token, "abc.def.ghi");
    assert_eq!(resp.profile.username, "ana_p");
}

#[test]
fn update_request_uses_snake_case_fields() {
    let body = serde_json::to_value(UpdatePasswordRequest {
        old_password: "old".into(),
        new_password: "new".into(),
    })
    .unwrap();
    assert_eq!(body, serde_json::json!({ "old_password": "old", "new_password": "new" }));
}

#[test]
fn ads_response_reads_numeric_category() {
    let resp: AdsResponse = serde_json::from_str(r#"{"category":3}"#).unwrap();
    assert_eq!(resp.category, 3);
}

#[test]
fn error_response_reads_message() {
    let resp: ErrorResponse = serde_json::from_str(r#"{"error":"Invalid token"}"#).unwrap();
    assert_eq!(resp.error, "Invalid token");
}
