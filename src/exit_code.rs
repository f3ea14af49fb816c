use crate::error::ApiError;

pub fn exit_code_for_error(err: &ApiError) -> i32 {
    match err {
        ApiError::InvalidUrl(_) => 3,
        ApiError::Config(_) => 2,
        ApiError::Timeout => 28,
        ApiError::Status { .. } => 22,
        ApiError::PermissionDenied(_) | ApiError::FileNotFound(_) => 37,
        ApiError::Io(_) => 23,
        ApiError::Json(_) | ApiError::CookieFile(_) => 26,
        ApiError::Http(err) => http_exit_code(err),
    }
}

fn http_exit_code(err: &reqwest::Error) -> i32 {
    if err.is_timeout() {
        return 28;
    }
    if err.is_connect() {
        return 7;
    }
    if err.is_status() {
        return 22;
    }
    if err.is_request() {
        return 2;
    }
    43
}
