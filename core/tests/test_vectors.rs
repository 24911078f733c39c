//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and either an expected parse result or an expected error kind. Comparing
//! parsed JSON (not raw strings) avoids false negatives from field ordering.

use employee_core::{
    ApiError, Employee, EmployeeClient, EmployeeDraft, HttpMethod, HttpRequest, HttpResponse,
};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:3000";

fn client() -> EmployeeClient {
    EmployeeClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn load(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

fn simulated_response(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

/// Check method and path, and the body only when the vector has one.
fn assert_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.path, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: path");

    match expected.get("body") {
        Some(expected_body) => {
            let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&body, expected_body, "{name}: body");

            let expected_headers: Vec<(String, String)> = expected["headers"]
                .as_array()
                .unwrap()
                .iter()
                .map(|h| {
                    let pair = h.as_array().unwrap();
                    (pair[0].as_str().unwrap().to_string(), pair[1].as_str().unwrap().to_string())
                })
                .collect();
            assert_eq!(req.headers, expected_headers, "{name}: headers");
        }
        None => {
            assert!(req.body.is_none(), "{name}: body should be None");
            assert!(req.headers.is_empty(), "{name}: headers should be empty");
        }
    }
}

/// Compare a parse outcome with `expected_result` or `expected_error`.
fn assert_outcome<T>(name: &str, case: &Value, result: Result<T, ApiError>)
where
    T: PartialEq + std::fmt::Debug + serde::de::DeserializeOwned,
{
    match case.get("expected_error") {
        Some(kind) => {
            let err = result.unwrap_err();
            match kind.as_str().unwrap() {
                "NotFound" => assert!(matches!(err, ApiError::NotFound), "{name}: expected NotFound, got {err:?}"),
                "Decode" => assert!(matches!(err, ApiError::Decode(_)), "{name}: expected Decode, got {err:?}"),
                "Http" => {
                    let status = case["expected_status"].as_u64().unwrap() as u16;
                    assert!(
                        matches!(err, ApiError::Http { status: s, .. } if s == status),
                        "{name}: expected Http {status}, got {err:?}"
                    );
                }
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        }
        None => {
            let value = result.unwrap();
            let expected: T = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(value, expected, "{name}: parsed result");
        }
    }
}

#[test]
fn list_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/list.json")) {
        let name = case["name"].as_str().unwrap();
        assert_request(name, &c.build_list_employees(), &case["expected_request"]);
        let result = c.parse_list_employees(simulated_response(&case));
        assert_outcome::<Vec<Employee>>(name, &case, result);
    }
}

#[test]
fn get_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/get.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_u64().unwrap();
        assert_request(name, &c.build_get_employee(id), &case["expected_request"]);
        let result = c.parse_get_employee(simulated_response(&case));
        assert_outcome::<Employee>(name, &case, result);
    }
}

#[test]
fn create_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/create.json")) {
        let name = case["name"].as_str().unwrap();
        let input: EmployeeDraft = serde_json::from_value(case["input"].clone()).unwrap();
        let req = c.build_create_employee(&input).unwrap();
        assert_request(name, &req, &case["expected_request"]);
        let result = c.parse_create_employee(simulated_response(&case));
        assert_outcome::<Employee>(name, &case, result);
    }
}

#[test]
fn update_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/update.json")) {
        let name = case["name"].as_str().unwrap();
        let input: Employee = serde_json::from_value(case["input"].clone()).unwrap();
        let req = c.build_update_employee(&input).unwrap();
        assert_request(name, &req, &case["expected_request"]);
        let result = c.parse_update_employee(simulated_response(&case));
        assert_outcome::<Employee>(name, &case, result);
    }
}

#[test]
fn delete_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/delete.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_u64().unwrap();
        assert_request(name, &c.build_delete_employee(id), &case["expected_request"]);

        let result = c.parse_delete_employee(simulated_response(&case));
        match case.get("expected_error") {
            Some(_) => {
                let status = case["expected_status"].as_u64().unwrap() as u16;
                let err = result.unwrap_err();
                assert_eq!(err.status(), Some(status), "{name}: status");
                assert!(matches!(err, ApiError::Http { .. }), "{name}: expected Http, got {err:?}");
            }
            None => assert!(result.is_ok(), "{name}: expected success"),
        }
    }
}
