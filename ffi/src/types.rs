//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, raw pointers instead of `Vec`, and
//! tagged enums with explicit discriminants. Conversion functions live here
//! to keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use employee_core::error::ApiError;
use employee_core::http::HttpMethod;
use employee_core::Employee;

/// Opaque handle to an `EmployeeClient`. C callers receive a pointer to this
/// and pass it back into every FFI function.
pub struct FfiEmployeeClient {
    pub(crate) inner: employee_core::EmployeeClient,
}

/// Copy `s` into a heap C string owned by the caller.
///
/// Interior NUL bytes cannot be represented and are dropped.
pub(crate) fn c_string(s: String) -> *mut c_char {
    let bytes: Vec<u8> = s.into_bytes().into_iter().filter(|b| *b != 0).collect();
    CString::new(bytes).unwrap_or_default().into_raw()
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
pub enum FfiHttpMethod {
    Get = 0,
    Post = 1,
    Put = 2,
    Delete = 3,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
            HttpMethod::Post => FfiHttpMethod::Post,
            HttpMethod::Put => FfiHttpMethod::Put,
            HttpMethod::Delete => FfiHttpMethod::Delete,
        }
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request described as C-compatible plain data.
///
/// Built by `employee_build_*` functions. The C caller executes the request
/// and passes the response back through `employee_parse_*`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub path: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
    pub body: *mut c_char,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: employee_core::HttpRequest) -> *mut Self {
        let path = c_string(req.path);
        let body = match req.body {
            Some(b) => c_string(b),
            None => std::ptr::null_mut(),
        };

        let headers_len = req.headers.len() as u32;
        let headers = if req.headers.is_empty() {
            std::ptr::null_mut()
        } else {
            let ffi_headers: Box<[FfiHeader]> = req
                .headers
                .into_iter()
                .map(|(k, v)| FfiHeader {
                    key: c_string(k),
                    value: c_string(v),
                })
                .collect();
            Box::into_raw(ffi_headers) as *mut FfiHeader
        };

        Box::into_raw(Box::new(FfiHttpRequest {
            method: req.method.into(),
            path,
            headers,
            headers_len,
            body,
        }))
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The C caller constructs this on the stack after executing an HTTP request,
/// then passes a pointer to an `employee_parse_*` function. The FFI layer
/// reads but does not free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiEmployeeResult`.
#[repr(C)]
pub enum FfiErrorCode {
    Ok = 0,
    NotFound = 1,
    Http = 2,
    Decode = 3,
    Encode = 4,
    Network = 5,
    Panic = 6,
    NullArg = 7,
}

/// Tag that tells `employee_free_result` what `FfiEmployeeResult::data` points to.
#[repr(C)]
pub enum FfiDataTag {
    None = 0,
    Employee = 1,
    EmployeeList = 2,
}

/// A single employee exposed to C.
#[repr(C)]
pub struct FfiEmployee {
    pub id: u64,
    pub employee_name: *mut c_char,
    pub employee_age: u32,
    pub employee_salary: u64,
    pub profile_image: *mut c_char,
}

impl FfiEmployee {
    fn from_core(employee: Employee) -> Self {
        FfiEmployee {
            id: employee.id,
            employee_name: c_string(employee.employee_name),
            employee_age: employee.employee_age,
            employee_salary: employee.employee_salary,
            profile_image: c_string(employee.profile_image),
        }
    }
}

/// A list of employees exposed to C.
#[repr(C)]
pub struct FfiEmployeeList {
    pub items: *mut FfiEmployee,
    pub len: u32,
}

/// Result envelope for all parse operations.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `data`
/// points to the parsed payload (tagged by `data_tag`).
/// On failure `error_code` describes the category, `error_message` is a
/// human-readable C string, and `data` is null.
#[repr(C)]
pub struct FfiEmployeeResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub data_tag: FfiDataTag,
    pub data: *mut std::ffi::c_void,
}

impl FfiEmployeeResult {
    fn ok(data_tag: FfiDataTag, data: *mut std::ffi::c_void) -> *mut Self {
        Box::into_raw(Box::new(FfiEmployeeResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            data_tag,
            data,
        }))
    }

    fn err(error_code: FfiErrorCode, http_status: u16, msg: String) -> *mut Self {
        Box::into_raw(Box::new(FfiEmployeeResult {
            error_code,
            error_message: c_string(msg),
            http_status,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        }))
    }

    /// Build a success result carrying a single `FfiEmployee`.
    pub(crate) fn ok_employee(employee: Employee) -> *mut Self {
        let ffi = Box::new(FfiEmployee::from_core(employee));
        Self::ok(FfiDataTag::Employee, Box::into_raw(ffi) as *mut std::ffi::c_void)
    }

    /// Build a success result carrying an `FfiEmployeeList`.
    pub(crate) fn ok_employee_list(employees: Vec<Employee>) -> *mut Self {
        let len = employees.len() as u32;
        let items = if employees.is_empty() {
            std::ptr::null_mut()
        } else {
            let ffi: Box<[FfiEmployee]> = employees.into_iter().map(FfiEmployee::from_core).collect();
            Box::into_raw(ffi) as *mut FfiEmployee
        };

        let list = Box::new(FfiEmployeeList { items, len });
        Self::ok(FfiDataTag::EmployeeList, Box::into_raw(list) as *mut std::ffi::c_void)
    }

    /// Build a success result with no data payload (delete).
    pub(crate) fn ok_empty() -> *mut Self {
        Self::ok(FfiDataTag::None, std::ptr::null_mut())
    }

    /// Build an error result from an `ApiError`.
    pub(crate) fn from_error(err: ApiError) -> *mut Self {
        let code = match &err {
            ApiError::NotFound => FfiErrorCode::NotFound,
            ApiError::Http { .. } => FfiErrorCode::Http,
            ApiError::Decode(_) => FfiErrorCode::Decode,
            ApiError::Encode(_) => FfiErrorCode::Encode,
            ApiError::Network(_) => FfiErrorCode::Network,
        };
        Self::err(code, err.status().unwrap_or(0), err.to_string())
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::err(FfiErrorCode::NullArg, 0, format!("null argument: {name}"))
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::err(FfiErrorCode::Panic, 0, msg.to_string())
    }
}
