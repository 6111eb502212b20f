#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<crate::date::DateError> for AppError {
    fn from(err: crate::date::DateError) -> Self {
        AppError::new(2, err.to_string())
    }
}

impl From<crate::store::LookupError> for AppError {
    fn from(err: crate::store::LookupError) -> Self {
        match err {
            crate::store::LookupError::InvalidDate(e) => e.into(),
            crate::store::LookupError::RecordNotFound(_) => AppError::new(3, err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::DateError;
    use crate::store::LookupError;

    #[test]
    fn lookup_errors_map_to_exit_codes() {
        let err: AppError = LookupError::RecordNotFound("2022-05-23".to_string()).into();
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.to_string(), "no data for this date: 2022-05-23");

        let err: AppError = LookupError::InvalidDate(DateError::InvalidDay(40)).into();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "invalid day: 40");
    }
}
