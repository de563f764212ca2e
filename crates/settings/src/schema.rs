//! The UI settings record
//!
//! This module defines the typed settings record consumed by the File Station
//! UI. Serialized field names follow the manifest shipped to existing
//! deployments, including the historical `forwardLocaltion` spelling, so
//! documents written by older tooling keep loading.

use serde::{Deserialize, Serialize};

use common::types::{CssLength, ForwardLocation};

use crate::overrides::SettingsOverrides;

/// Dimensions of the right-hand context menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RightMenuSettings {
    /// Panel width in pixels
    pub width: u32,
    /// Panel margin in pixels
    pub margin: u32,
    /// Panel font size
    pub font_size: CssLength,
}

/// The process-wide UI settings record
///
/// Built once during process initialization and shared read-only afterwards.
/// Consumers that need a variant derive one through [`UiSettings::to_overrides`]
/// instead of mutating the shared record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UiSettings {
    /// Right-hand context menu dimensions
    pub right_menu: RightMenuSettings,
    /// Number of files shown per page
    pub file_per_page: u32,
    /// Whether the file filter bar is shown
    pub filter_files: bool,
    /// Whether the file sort controls are shown
    pub sort_files: bool,
    /// Whether file names are shown under thumbnails
    pub show_file_name: bool,
    /// Whether the import action is available
    pub import_files: bool,
    /// Whether EXIF data is attached to imported images
    pub add_image_data: bool,
    /// Whether original file names are discarded on import
    pub old_filename_ignore: bool,
    /// Upload size limit in megabytes
    pub max_file_size: u32,
    /// Whether keyboard shortcuts are active
    pub use_shortcuts: bool,
    /// Whether deletion asks for confirmation first
    pub request_before_delete: bool,
    /// Default thumbnail edge length in pixels
    pub default_picture_size: u32,
    /// Folder that receives deleted files
    pub delete_default_folder: String,
    /// Folder that receives selected files
    pub selected_path: String,
    /// Folder that receives rejected files
    pub not_selected_path: String,
    /// Folder that receives files not classified yet
    pub unclassified_path: String,
    /// Whether the browser only moves forward through files
    pub forward_only: bool,
    /// Button font size
    pub button_font_size: CssLength,
    /// Title font size
    pub title_font_size: CssLength,
    /// Placement of the forward controls
    #[serde(rename = "forwardLocaltion")]
    pub forward_location: ForwardLocation,
    /// Whether the move menu is available
    pub move_menu: bool,
    /// Whether new folders can be created from the UI
    pub new_folder: bool,
    /// Whether new workspaces can be created from the UI
    pub new_workspace: bool,
    /// Spacing between image tiles in pixels
    pub image_spacing: u32,
    /// Workspace heading font size
    pub workspace_font_size: CssLength,
    /// Sub-folder heading font size
    pub sub_folder_font_size: CssLength,
    /// Whether the navigation icon is shown
    pub show_navigation_icon: bool,
    /// Keycloak account-console link, absent when the integration is disabled
    #[serde(rename = "changePWDUri", default, skip_serializing_if = "Option::is_none")]
    pub change_pwd_uri: Option<String>,
    /// Keycloak management-console link, absent when the integration is disabled
    #[serde(rename = "KCManagementUri", default, skip_serializing_if = "Option::is_none")]
    pub kc_management_uri: Option<String>,
}

impl UiSettings {
    /// Returns true when the Keycloak account-console link is configured
    pub fn password_change_enabled(&self) -> bool {
        self.change_pwd_uri.is_some()
    }

    /// Returns true when the Keycloak management-console link is configured
    pub fn account_management_enabled(&self) -> bool {
        self.kc_management_uri.is_some()
    }

    /// Produces a fully populated override document from this record
    ///
    /// This is the supported way for a consumer to derive a variant: copy the
    /// shared record into overrides, change what it needs, and build its own
    /// record from them.
    pub fn to_overrides(&self) -> SettingsOverrides {
        SettingsOverrides::from(self)
    }
}
