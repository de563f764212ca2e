//! Override documents for the UI settings record
//!
//! Every field is optional; a field that is not named keeps its current
//! value. Unknown keys are rejected so a misspelled option fails at startup
//! instead of silently doing nothing.

use serde::{Deserialize, Serialize};

use common::types::{CssLength, ForwardLocation};

use crate::schema::{RightMenuSettings, UiSettings};

/// Partial overrides for the right menu block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RightMenuOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<CssLength>,
}

impl RightMenuOverrides {
    /// Applies the overrides onto a right menu block
    pub fn apply(&self, menu: &mut RightMenuSettings) {
        if let Some(width) = self.width {
            menu.width = width;
        }
        if let Some(margin) = self.margin {
            menu.margin = margin;
        }
        if let Some(font_size) = &self.font_size {
            menu.font_size = font_size.clone();
        }
    }
}

/// Partial overrides for the UI settings record
///
/// Serialized with the same key spellings as [`UiSettings`], so a dumped
/// record loads back as an override document unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SettingsOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_menu: Option<RightMenuOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_files: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_files: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_file_name: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_files: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_image_data: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_filename_ignore: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_file_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_shortcuts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_before_delete: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_picture_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_default_folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_selected_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unclassified_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_font_size: Option<CssLength>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_font_size: Option<CssLength>,
    #[serde(rename = "forwardLocaltion", skip_serializing_if = "Option::is_none")]
    pub forward_location: Option<ForwardLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_menu: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_folder: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_workspace: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_spacing: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_font_size: Option<CssLength>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_folder_font_size: Option<CssLength>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_navigation_icon: Option<bool>,
    #[serde(rename = "changePWDUri", skip_serializing_if = "Option::is_none")]
    pub change_pwd_uri: Option<String>,
    #[serde(rename = "KCManagementUri", skip_serializing_if = "Option::is_none")]
    pub kc_management_uri: Option<String>,
}

impl SettingsOverrides {
    /// Applies the overrides onto a settings record
    pub fn apply(&self, settings: &mut UiSettings) {
        if let Some(right_menu) = &self.right_menu {
            right_menu.apply(&mut settings.right_menu);
        }
        if let Some(file_per_page) = self.file_per_page {
            settings.file_per_page = file_per_page;
        }
        if let Some(filter_files) = self.filter_files {
            settings.filter_files = filter_files;
        }
        if let Some(sort_files) = self.sort_files {
            settings.sort_files = sort_files;
        }
        if let Some(show_file_name) = self.show_file_name {
            settings.show_file_name = show_file_name;
        }
        if let Some(import_files) = self.import_files {
            settings.import_files = import_files;
        }
        if let Some(add_image_data) = self.add_image_data {
            settings.add_image_data = add_image_data;
        }
        if let Some(old_filename_ignore) = self.old_filename_ignore {
            settings.old_filename_ignore = old_filename_ignore;
        }
        if let Some(max_file_size) = self.max_file_size {
            settings.max_file_size = max_file_size;
        }
        if let Some(use_shortcuts) = self.use_shortcuts {
            settings.use_shortcuts = use_shortcuts;
        }
        if let Some(request_before_delete) = self.request_before_delete {
            settings.request_before_delete = request_before_delete;
        }
        if let Some(default_picture_size) = self.default_picture_size {
            settings.default_picture_size = default_picture_size;
        }
        if let Some(delete_default_folder) = &self.delete_default_folder {
            settings.delete_default_folder = delete_default_folder.clone();
        }
        if let Some(selected_path) = &self.selected_path {
            settings.selected_path = selected_path.clone();
        }
        if let Some(not_selected_path) = &self.not_selected_path {
            settings.not_selected_path = not_selected_path.clone();
        }
        if let Some(unclassified_path) = &self.unclassified_path {
            settings.unclassified_path = unclassified_path.clone();
        }
        if let Some(forward_only) = self.forward_only {
            settings.forward_only = forward_only;
        }
        if let Some(button_font_size) = &self.button_font_size {
            settings.button_font_size = button_font_size.clone();
        }
        if let Some(title_font_size) = &self.title_font_size {
            settings.title_font_size = title_font_size.clone();
        }
        if let Some(forward_location) = self.forward_location {
            settings.forward_location = forward_location;
        }
        if let Some(move_menu) = self.move_menu {
            settings.move_menu = move_menu;
        }
        if let Some(new_folder) = self.new_folder {
            settings.new_folder = new_folder;
        }
        if let Some(new_workspace) = self.new_workspace {
            settings.new_workspace = new_workspace;
        }
        if let Some(image_spacing) = self.image_spacing {
            settings.image_spacing = image_spacing;
        }
        if let Some(workspace_font_size) = &self.workspace_font_size {
            settings.workspace_font_size = workspace_font_size.clone();
        }
        if let Some(sub_folder_font_size) = &self.sub_folder_font_size {
            settings.sub_folder_font_size = sub_folder_font_size.clone();
        }
        if let Some(show_navigation_icon) = self.show_navigation_icon {
            settings.show_navigation_icon = show_navigation_icon;
        }
        if let Some(change_pwd_uri) = &self.change_pwd_uri {
            settings.change_pwd_uri = Some(change_pwd_uri.clone());
        }
        if let Some(kc_management_uri) = &self.kc_management_uri {
            settings.kc_management_uri = Some(kc_management_uri.clone());
        }
    }
}

impl From<&UiSettings> for SettingsOverrides {
    fn from(settings: &UiSettings) -> Self {
        Self {
            right_menu: Some(RightMenuOverrides {
                width: Some(settings.right_menu.width),
                margin: Some(settings.right_menu.margin),
                font_size: Some(settings.right_menu.font_size.clone()),
            }),
            file_per_page: Some(settings.file_per_page),
            filter_files: Some(settings.filter_files),
            sort_files: Some(settings.sort_files),
            show_file_name: Some(settings.show_file_name),
            import_files: Some(settings.import_files),
            add_image_data: Some(settings.add_image_data),
            old_filename_ignore: Some(settings.old_filename_ignore),
            max_file_size: Some(settings.max_file_size),
            use_shortcuts: Some(settings.use_shortcuts),
            request_before_delete: Some(settings.request_before_delete),
            default_picture_size: Some(settings.default_picture_size),
            delete_default_folder: Some(settings.delete_default_folder.clone()),
            selected_path: Some(settings.selected_path.clone()),
            not_selected_path: Some(settings.not_selected_path.clone()),
            unclassified_path: Some(settings.unclassified_path.clone()),
            forward_only: Some(settings.forward_only),
            button_font_size: Some(settings.button_font_size.clone()),
            title_font_size: Some(settings.title_font_size.clone()),
            forward_location: Some(settings.forward_location),
            move_menu: Some(settings.move_menu),
            new_folder: Some(settings.new_folder),
            new_workspace: Some(settings.new_workspace),
            image_spacing: Some(settings.image_spacing),
            workspace_font_size: Some(settings.workspace_font_size.clone()),
            sub_folder_font_size: Some(settings.sub_folder_font_size.clone()),
            show_navigation_icon: Some(settings.show_navigation_icon),
            change_pwd_uri: settings.change_pwd_uri.clone(),
            kc_management_uri: settings.kc_management_uri.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_overrides_change_only_named_fields() {
        let overrides = SettingsOverrides {
            file_per_page: Some(50),
            forward_location: Some(ForwardLocation::Top),
            right_menu: Some(RightMenuOverrides {
                width: Some(300),
                ..Default::default()
            }),
            ..Default::default()
        };

        let mut settings = UiSettings::default();
        overrides.apply(&mut settings);

        assert_eq!(settings.file_per_page, 50);
        assert_eq!(settings.forward_location, ForwardLocation::Top);
        assert_eq!(settings.right_menu.width, 300);
        // Everything else keeps its default
        assert_eq!(settings.right_menu.margin, 5);
        assert_eq!(settings.right_menu.font_size.as_str(), "1rem");
        assert_eq!(settings.max_file_size, 10);
        assert_eq!(settings.selected_path, "Selected_new");
    }

    #[test]
    fn test_empty_overrides_are_a_no_op() {
        let mut settings = UiSettings::default();
        SettingsOverrides::default().apply(&mut settings);
        assert_eq!(settings, UiSettings::default());
    }

    #[test]
    fn test_to_overrides_round_trips() {
        let mut original = UiSettings::default();
        original.file_per_page = 42;
        original.kc_management_uri = Some("https://sso.example.com/admin".to_string());

        let mut rebuilt = UiSettings::default();
        original.to_overrides().apply(&mut rebuilt);

        assert_eq!(rebuilt, original);
    }

    #[test]
    fn test_variant_does_not_touch_the_base_record() {
        let base = UiSettings::default();

        let mut overrides = base.to_overrides();
        overrides.file_per_page = Some(100);

        let mut variant = UiSettings::default();
        overrides.apply(&mut variant);

        assert_eq!(variant.file_per_page, 100);
        assert_eq!(base.file_per_page, 15);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result = serde_json::from_str::<SettingsOverrides>("{\"filesPerPage\": 20}");
        assert!(result.is_err());
    }
}
