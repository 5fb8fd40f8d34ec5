//! Authentication result types
//!
//! Envelopes returned by the validator and by remote calls.

/// Result of structural validation of a login request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationOutcome {
    errors: Vec<String>,
}

impl ValidationOutcome {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self { errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

/// Success/failure envelope of a remote call.
///
/// A successful outcome always carries a body and no errors; a failed one
/// never carries a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationOutcome<T> {
    success: bool,
    errors: Vec<String>,
    body: Option<T>,
}

impl<T> OperationOutcome<T> {
    pub fn success(body: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            body: Some(body),
        }
    }

    pub fn failure(errors: Vec<String>) -> Self {
        Self {
            success: false,
            errors,
            body: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn body(&self) -> Option<&T> {
        self.body.as_ref()
    }

    /// Splits the envelope into the body or the error messages.
    pub fn into_result(self) -> Result<T, Vec<String>> {
        match self.body {
            Some(body) if self.success => Ok(body),
            _ => Err(self.errors),
        }
    }
}
