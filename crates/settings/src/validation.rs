//! Construction-time validation of the settings record
//!
//! Validation runs once, after every source has been applied. Any failure is
//! startup-fatal; there is no per-request error path because the record is
//! never rebuilt while the process runs.

use common::error::{Error, Result};

use crate::schema::UiSettings;

/// Validates a fully resolved settings record
pub fn validate(settings: &UiSettings) -> Result<()> {
    if settings.file_per_page == 0 {
        return Err(Error::InvalidArgument(
            "filePerPage must be at least 1".to_string(),
        ));
    }

    if settings.max_file_size == 0 {
        return Err(Error::InvalidArgument(
            "maxFileSize must be at least 1 MB".to_string(),
        ));
    }

    if settings.default_picture_size == 0 {
        return Err(Error::InvalidArgument(
            "defaultPictureSize must be at least 1 px".to_string(),
        ));
    }

    validate_folder_name("deleteDefaultFolder", &settings.delete_default_folder)?;
    validate_folder_name("selectedPath", &settings.selected_path)?;
    validate_folder_name("notSelectedPath", &settings.not_selected_path)?;
    validate_folder_name("unclassifiedPath", &settings.unclassified_path)?;

    Ok(())
}

/// Checks that a configured folder name is a single path component
///
/// These folders are created directly under a workspace root; a separator or
/// a dot component would escape it.
fn validate_folder_name(option: &str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidArgument(format!(
            "{} must not be empty",
            option
        )));
    }

    if name == "." || name == ".." {
        return Err(Error::InvalidArgument(format!(
            "{} must name a folder, got {:?}",
            option, name
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::InvalidArgument(format!(
            "{} must not contain path separators, got {:?}",
            option, name
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_file_per_page_is_rejected() {
        let mut settings = UiSettings::default();
        settings.file_per_page = 0;

        let err = validate(&settings).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_zero_max_file_size_is_rejected() {
        let mut settings = UiSettings::default();
        settings.max_file_size = 0;

        assert!(validate(&settings).is_err());
    }

    #[test]
    fn test_zero_picture_size_is_rejected() {
        let mut settings = UiSettings::default();
        settings.default_picture_size = 0;

        assert!(validate(&settings).is_err());
    }

    #[test]
    fn test_folder_names_must_be_single_components() {
        for bad in ["", ".", "..", "a/b", "a\\b", "/absolute"] {
            let mut settings = UiSettings::default();
            settings.selected_path = bad.to_string();

            let err = validate(&settings).unwrap_err();
            assert!(err.is_invalid_argument(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_every_folder_field_is_checked() {
        for field in 0..4 {
            let mut settings = UiSettings::default();
            match field {
                0 => settings.delete_default_folder = String::new(),
                1 => settings.selected_path = String::new(),
                2 => settings.not_selected_path = String::new(),
                _ => settings.unclassified_path = String::new(),
            }
            assert!(validate(&settings).is_err());
        }
    }

    #[test]
    fn test_unusual_but_valid_names_pass() {
        let mut settings = UiSettings::default();
        settings.selected_path = "Sélection 2024".to_string();
        validate(&settings).unwrap();
    }
}
