use http::StatusCode;
use session_tracker::SessionError;

/// Helper trait for converting errors to a standard response error format
pub(super) trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)>;
}

/// Implementation for SessionError to map variants to appropriate status codes
impl<T> IntoResponseError<T> for Result<T, SessionError> {
    fn into_response_error(self) -> Result<T, (StatusCode, String)> {
        self.map_err(|e| {
            let status = match e {
                SessionError::Unauthenticated => StatusCode::UNAUTHORIZED,
                SessionError::CsrfMissing => StatusCode::FORBIDDEN,
                SessionError::CsrfMismatch => StatusCode::FORBIDDEN,
                // A store miss behind a validated cookie means the session
                // died mid-request; to the client that is an auth failure.
                SessionError::NotFound => StatusCode::UNAUTHORIZED,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthenticated_maps_to_401() {
        let result: Result<(), SessionError> = Err(SessionError::Unauthenticated);

        let response_error = result.into_response_error();

        assert!(response_error.is_err());
        if let Err((status, _)) = response_error {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_csrf_missing_maps_to_403() {
        let result: Result<(), SessionError> = Err(SessionError::CsrfMissing);

        let response_error = result.into_response_error();

        assert!(response_error.is_err());
        if let Err((status, _)) = response_error {
            assert_eq!(status, StatusCode::FORBIDDEN);
        }
    }

    #[test]
    fn test_csrf_mismatch_maps_to_403() {
        let result: Result<(), SessionError> = Err(SessionError::CsrfMismatch);

        let response_error = result.into_response_error();

        assert!(response_error.is_err());
        if let Err((status, _)) = response_error {
            assert_eq!(status, StatusCode::FORBIDDEN);
        }
    }

    #[test]
    fn test_not_found_maps_to_401() {
        let result: Result<(), SessionError> = Err(SessionError::NotFound);

        let response_error = result.into_response_error();

        assert!(response_error.is_err());
        if let Err((status, _)) = response_error {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_duplicate_key_maps_to_500() {
        let result: Result<(), SessionError> = Err(SessionError::DuplicateKey);

        let response_error = result.into_response_error();

        assert!(response_error.is_err());
        if let Err((status, _)) = response_error {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_success_case() {
        let result: Result<String, SessionError> = Ok("Success".to_string());

        let response_error = result.into_response_error();

        assert!(response_error.is_ok());
        if let Ok(value) = response_error {
            assert_eq!(value, "Success");
        }
    }
}
