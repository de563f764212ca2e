//! Default values for the UI settings record
//!
//! The literals here mirror the manifest shipped to existing deployments;
//! changing one changes the behavior of every installation that does not
//! override it.

use common::types::{CssLength, ForwardLocation};

use crate::schema::{RightMenuSettings, UiSettings};

/// Default right menu width in pixels
pub const DEFAULT_RIGHT_MENU_WIDTH: u32 = 250;

/// Default right menu margin in pixels
pub const DEFAULT_RIGHT_MENU_MARGIN: u32 = 5;

/// Default number of files shown per page
pub const DEFAULT_FILE_PER_PAGE: u32 = 15;

/// Default upload size limit in megabytes
pub const DEFAULT_MAX_FILE_SIZE_MB: u32 = 10;

/// Default thumbnail edge length in pixels
pub const DEFAULT_PICTURE_SIZE: u32 = 200;

/// Default spacing between image tiles in pixels
pub const DEFAULT_IMAGE_SPACING: u32 = 10;

/// Folder that receives deleted files
pub const DEFAULT_DELETE_FOLDER: &str = "Deleted_files";

/// Folder that receives selected files
pub const DEFAULT_SELECTED_FOLDER: &str = "Selected_new";

/// Folder that receives rejected files
pub const DEFAULT_NOT_SELECTED_FOLDER: &str = "Not_Selected";

/// Folder that receives files not classified yet
pub const DEFAULT_UNCLASSIFIED_FOLDER: &str = "Unclassified";

fn css(value: &str) -> CssLength {
    value.parse().expect("default CSS length literal")
}

impl Default for RightMenuSettings {
    fn default() -> Self {
        Self {
            width: DEFAULT_RIGHT_MENU_WIDTH,
            margin: DEFAULT_RIGHT_MENU_MARGIN,
            font_size: css("1rem"),
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            right_menu: RightMenuSettings::default(),
            file_per_page: DEFAULT_FILE_PER_PAGE,
            filter_files: false,
            sort_files: false,
            show_file_name: false,
            import_files: false,
            add_image_data: false,
            old_filename_ignore: false,
            max_file_size: DEFAULT_MAX_FILE_SIZE_MB,
            use_shortcuts: true,
            request_before_delete: true,
            default_picture_size: DEFAULT_PICTURE_SIZE,
            delete_default_folder: DEFAULT_DELETE_FOLDER.to_string(),
            selected_path: DEFAULT_SELECTED_FOLDER.to_string(),
            not_selected_path: DEFAULT_NOT_SELECTED_FOLDER.to_string(),
            unclassified_path: DEFAULT_UNCLASSIFIED_FOLDER.to_string(),
            forward_only: false,
            button_font_size: css("1rem"),
            title_font_size: css("1rem"),
            forward_location: ForwardLocation::default(),
            move_menu: true,
            new_folder: true,
            new_workspace: true,
            image_spacing: DEFAULT_IMAGE_SPACING,
            workspace_font_size: css("25px"),
            sub_folder_font_size: css("16px"),
            show_navigation_icon: false,
            change_pwd_uri: None,
            kc_management_uri: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_manifest() {
        let settings = UiSettings::default();

        assert_eq!(settings.right_menu.width, 250);
        assert_eq!(settings.right_menu.margin, 5);
        assert_eq!(settings.right_menu.font_size.as_str(), "1rem");
        assert_eq!(settings.file_per_page, 15);
        assert!(!settings.filter_files);
        assert!(!settings.sort_files);
        assert!(!settings.show_file_name);
        assert!(!settings.import_files);
        assert!(!settings.add_image_data);
        assert!(!settings.old_filename_ignore);
        assert_eq!(settings.max_file_size, 10);
        assert!(settings.use_shortcuts);
        assert!(settings.request_before_delete);
        assert_eq!(settings.default_picture_size, 200);
        assert_eq!(settings.delete_default_folder, "Deleted_files");
        assert_eq!(settings.selected_path, "Selected_new");
        assert_eq!(settings.not_selected_path, "Not_Selected");
        assert_eq!(settings.unclassified_path, "Unclassified");
        assert!(!settings.forward_only);
        assert_eq!(settings.button_font_size.as_str(), "1rem");
        assert_eq!(settings.title_font_size.as_str(), "1rem");
        assert_eq!(settings.forward_location, ForwardLocation::Right);
        assert!(settings.move_menu);
        assert!(settings.new_folder);
        assert!(settings.new_workspace);
        assert_eq!(settings.image_spacing, 10);
        assert_eq!(settings.workspace_font_size.as_str(), "25px");
        assert_eq!(settings.sub_folder_font_size.as_str(), "16px");
        assert!(!settings.show_navigation_icon);
        assert_eq!(settings.change_pwd_uri, None);
        assert_eq!(settings.kc_management_uri, None);
    }

    #[test]
    fn test_defaults_pass_validation() {
        crate::validation::validate(&UiSettings::default()).unwrap();
    }
}
