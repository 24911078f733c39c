//! C-ABI wrapper around `employee-core`.
//!
//! # Overview
//! Exposes the employee CRUD API through `extern "C"` functions so a native
//! mobile front end (or anything else with a C FFI) can build and parse HTTP
//! requests/responses while doing the network I/O with its own stack.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - Per-operation `build_*` / `parse_*` mirrors the core API 1:1.
//! - A single `FfiEmployeeResult` envelope with `FfiDataTag` + `void* data`
//!   conveys success payloads and errors uniformly.
//! - The C caller owns all returned pointers and must call the matching
//!   `employee_free_*` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use employee_core::http::HttpResponse;
use employee_core::types::{Employee, EmployeeDraft};
use employee_core::ApiError;

use types::*;

/// Copy a caller-owned C string. Invalid UTF-8 is replaced, not rejected.
fn read_str(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned())
}

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new `EmployeeClient` bound to `base_url` (without `/api/v1`).
///
/// Returns null if `base_url` is null or if an internal panic occurs.
/// The caller must free the returned pointer with `employee_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn employee_client_new(base_url: *const c_char) -> *mut FfiEmployeeClient {
    catch_unwind(|| match read_str(base_url) {
        Some(url) => {
            let client = employee_core::EmployeeClient::new(&url);
            Box::into_raw(Box::new(FfiEmployeeClient { inner: client }))
        }
        None => std::ptr::null_mut(),
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a client created by `employee_client_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn employee_client_free(client: *mut FfiEmployeeClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

// ---------------------------------------------------------------------------
// Build request functions
// ---------------------------------------------------------------------------

/// Build an HTTP request for listing all employees.
///
/// Returns null if `client` is null.
/// The caller must free the returned pointer with `employee_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn employee_build_list(client: *const FfiEmployeeClient) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        FfiHttpRequest::from_core(client.inner.build_list_employees())
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request for fetching a single employee by id.
///
/// Returns null if `client` is null.
#[unsafe(no_mangle)]
pub extern "C" fn employee_build_get(client: *const FfiEmployeeClient, id: u64) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        FfiHttpRequest::from_core(client.inner.build_get_employee(id))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request for creating a new employee.
///
/// `profile_image` may be null, meaning no image. Returns null if `client`
/// or `employee_name` is null, or if serialization fails.
#[unsafe(no_mangle)]
pub extern "C" fn employee_build_create(
    client: *const FfiEmployeeClient,
    employee_name: *const c_char,
    employee_age: u32,
    employee_salary: u64,
    profile_image: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let Some(employee_name) = read_str(employee_name) else {
            return std::ptr::null_mut();
        };
        let client = unsafe { &*client };
        let draft = EmployeeDraft {
            employee_name,
            employee_age,
            employee_salary,
            profile_image: read_str(profile_image).unwrap_or_default(),
        };
        match client.inner.build_create_employee(&draft) {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request that replaces employee `id` with the given fields.
///
/// The full record is sent as the body. `profile_image` may be null, meaning
/// no image. Returns null if `client` or `employee_name` is null.
#[unsafe(no_mangle)]
pub extern "C" fn employee_build_update(
    client: *const FfiEmployeeClient,
    id: u64,
    employee_name: *const c_char,
    employee_age: u32,
    employee_salary: u64,
    profile_image: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let Some(employee_name) = read_str(employee_name) else {
            return std::ptr::null_mut();
        };
        let client = unsafe { &*client };
        let employee = Employee {
            id,
            employee_name,
            employee_age,
            employee_salary,
            profile_image: read_str(profile_image).unwrap_or_default(),
        };
        match client.inner.build_update_employee(&employee) {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Build an HTTP request for deleting an employee by id.
///
/// Returns null if `client` is null.
#[unsafe(no_mangle)]
pub extern "C" fn employee_build_delete(client: *const FfiEmployeeClient, id: u64) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        FfiHttpRequest::from_core(client.inner.build_delete_employee(id))
    })
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Parse response functions
// ---------------------------------------------------------------------------

/// Convert an `FfiHttpResponse` to a core `HttpResponse`.
///
/// A null body is treated as an empty string.
fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    HttpResponse {
        status: resp.status,
        headers: Vec::new(),
        body: read_str(resp.body).unwrap_or_default(),
    }
}

/// Shared body of every `employee_parse_*` function: null checks, conversion,
/// and mapping the core result into the C envelope.
fn parse_with<T>(
    op: &str,
    client: *const FfiEmployeeClient,
    response: *const FfiHttpResponse,
    parse: impl Fn(&employee_core::EmployeeClient, HttpResponse) -> Result<T, ApiError>
        + std::panic::UnwindSafe,
    ok: impl Fn(T) -> *mut FfiEmployeeResult + std::panic::UnwindSafe,
) -> *mut FfiEmployeeResult {
    catch_unwind(move || {
        if client.is_null() {
            return FfiEmployeeResult::null_arg("client");
        }
        if response.is_null() {
            return FfiEmployeeResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        match parse(&client.inner, ffi_response_to_core(resp)) {
            Ok(value) => ok(value),
            Err(e) => FfiEmployeeResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiEmployeeResult::panic(&format!("panic in employee_parse_{op}")))
}

/// Parse an HTTP response from a list request.
///
/// Returns a result with `data_tag = EmployeeList` on success.
#[unsafe(no_mangle)]
pub extern "C" fn employee_parse_list(
    client: *const FfiEmployeeClient,
    response: *const FfiHttpResponse,
) -> *mut FfiEmployeeResult {
    parse_with(
        "list",
        client,
        response,
        |c, r| c.parse_list_employees(r),
        FfiEmployeeResult::ok_employee_list,
    )
}

/// Parse an HTTP response from a get request.
///
/// Returns a result with `data_tag = Employee` on success, or `NotFound`
/// for a 404.
#[unsafe(no_mangle)]
pub extern "C" fn employee_parse_get(
    client: *const FfiEmployeeClient,
    response: *const FfiHttpResponse,
) -> *mut FfiEmployeeResult {
    parse_with(
        "get",
        client,
        response,
        |c, r| c.parse_get_employee(r),
        FfiEmployeeResult::ok_employee,
    )
}

/// Parse an HTTP response from a create request.
///
/// Returns a result with `data_tag = Employee` on any 2xx.
#[unsafe(no_mangle)]
pub extern "C" fn employee_parse_create(
    client: *const FfiEmployeeClient,
    response: *const FfiHttpResponse,
) -> *mut FfiEmployeeResult {
    parse_with(
        "create",
        client,
        response,
        |c, r| c.parse_create_employee(r),
        FfiEmployeeResult::ok_employee,
    )
}

/// Parse an HTTP response from an update request.
#[unsafe(no_mangle)]
pub extern "C" fn employee_parse_update(
    client: *const FfiEmployeeClient,
    response: *const FfiHttpResponse,
) -> *mut FfiEmployeeResult {
    parse_with(
        "update",
        client,
        response,
        |c, r| c.parse_update_employee(r),
        FfiEmployeeResult::ok_employee,
    )
}

/// Parse an HTTP response from a delete request.
///
/// Returns a result with `data_tag = None` on any 2xx.
#[unsafe(no_mangle)]
pub extern "C" fn employee_parse_delete(
    client: *const FfiEmployeeClient,
    response: *const FfiHttpResponse,
) -> *mut FfiEmployeeResult {
    parse_with(
        "delete",
        client,
        response,
        |c, r| c.parse_delete_employee(r),
        |()| FfiEmployeeResult::ok_empty(),
    )
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by any `employee_build_*` function.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn employee_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        free_c_string(req.path);
        free_c_string(req.body);
        if !req.headers.is_null() && req.headers_len > 0 {
            let headers = unsafe {
                Box::from_raw(std::ptr::slice_from_raw_parts_mut(
                    req.headers,
                    req.headers_len as usize,
                ))
            };
            for h in headers.iter() {
                free_c_string(h.key);
                free_c_string(h.value);
            }
        }
    });
}

/// Free an `FfiEmployeeResult` returned by any `employee_parse_*` function.
/// Safe to call with null. Uses `data_tag` to determine what `data` points to.
#[unsafe(no_mangle)]
pub extern "C" fn employee_free_result(result: *mut FfiEmployeeResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        free_c_string(result.error_message);
        if result.data.is_null() {
            return;
        }
        match result.data_tag {
            FfiDataTag::Employee => {
                let employee = unsafe { Box::from_raw(result.data as *mut FfiEmployee) };
                free_ffi_employee_fields(&employee);
            }
            FfiDataTag::EmployeeList => {
                let list = unsafe { Box::from_raw(result.data as *mut FfiEmployeeList) };
                if !list.items.is_null() && list.len > 0 {
                    let items = unsafe {
                        Box::from_raw(std::ptr::slice_from_raw_parts_mut(list.items, list.len as usize))
                    };
                    for item in items.iter() {
                        free_ffi_employee_fields(item);
                    }
                }
            }
            FfiDataTag::None => {}
        }
    });
}

/// Free the C-string fields of an `FfiEmployee` (but not the struct itself).
fn free_ffi_employee_fields(employee: &FfiEmployee) {
    free_c_string(employee.employee_name);
    free_c_string(employee.profile_image);
}

fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn employee_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| free_c_string(s));
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
