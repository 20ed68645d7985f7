use crate::utils::error::{DocgenError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DocgenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DocgenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DocgenError::ValidationError {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

/// Rejects values that cannot stand as a single file or directory name.
pub fn validate_path_component(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if value == "." || value == ".." {
        return Err(DocgenError::ValidationError {
            message: format!("{} cannot be '{}'", field_name, value),
        });
    }

    if let Some(bad) = value.chars().find(|c| matches!(c, '/' | '\\' | '\0')) {
        return Err(DocgenError::ValidationError {
            message: format!(
                "{} '{}' contains '{}', which is not allowed in a file name",
                field_name,
                value,
                bad.escape_default()
            ),
        });
    }

    Ok(())
}

pub fn validate_min_len<T>(field_name: &str, values: &[T], min_len: usize) -> Result<()> {
    if values.len() < min_len {
        return Err(DocgenError::ValidationError {
            message: format!(
                "{} needs at least {} entries, found {}",
                field_name,
                min_len,
                values.len()
            ),
        });
    }
    Ok(())
}
