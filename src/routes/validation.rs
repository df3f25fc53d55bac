use crate::constants::*;
use crate::error::{AppError, Result};

/// Validate an opaque identifier (user or workspace id)
pub fn validate_identifier(value: &str, empty_message: &str) -> Result<()> {
    if value.is_empty() {
        return Err(AppError::InvalidInput(empty_message.to_string()));
    }
    if value.len() > MAX_ID_LEN {
        return Err(AppError::InvalidInput(ERR_ID_TOO_LONG.to_string()));
    }
    Ok(())
}

/// Validate the writable template fields
pub fn validate_template_fields(subject: &str, content: &str) -> Result<()> {
    if subject.is_empty() {
        return Err(AppError::InvalidInput(ERR_EMPTY_SUBJECT.to_string()));
    }
    if subject.len() > MAX_SUBJECT_LEN {
        return Err(AppError::InvalidInput(ERR_SUBJECT_TOO_LONG.to_string()));
    }
    if content.is_empty() {
        return Err(AppError::InvalidInput(ERR_EMPTY_CONTENT.to_string()));
    }
    if content.len() > MAX_CONTENT_SIZE_BYTES {
        return Err(AppError::InvalidInput(ERR_CONTENT_TOO_LARGE.to_string()));
    }
    Ok(())
}

/// Validate a category tag
pub fn validate_category(category: &str) -> Result<()> {
    if category.is_empty() {
        return Err(AppError::InvalidInput(ERR_EMPTY_CATEGORY.to_string()));
    }
    if category.len() > MAX_CATEGORY_LEN {
        return Err(AppError::InvalidInput(ERR_CATEGORY_TOO_LONG.to_string()));
    }
    Ok(())
}

/// Validate pagination parameters
pub fn validate_page_params(page: u64, page_size: u64) -> Result<()> {
    if page < 1 {
        return Err(AppError::InvalidInput(ERR_INVALID_PAGE.to_string()));
    }
    if page_size < 1 {
        return Err(AppError::InvalidInput(ERR_INVALID_PAGE_SIZE.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("user-1", ERR_EMPTY_USER_ID).is_ok());
        assert!(validate_identifier("", ERR_EMPTY_USER_ID).is_err());
        assert!(validate_identifier(&"a".repeat(MAX_ID_LEN + 1), ERR_EMPTY_USER_ID).is_err());
    }

    #[test]
    fn test_validate_template_fields() {
        assert!(validate_template_fields("Hello", "body").is_ok());
        assert!(validate_template_fields("", "body").is_err());
        assert!(validate_template_fields("Hello", "").is_err());
        assert!(validate_template_fields(&"s".repeat(MAX_SUBJECT_LEN + 1), "body").is_err());
    }

    #[test]
    fn test_validate_page_params() {
        assert!(validate_page_params(1, 8).is_ok());
        assert!(validate_page_params(0, 8).is_err());
        assert!(validate_page_params(1, 0).is_err());
    }
}
