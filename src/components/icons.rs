//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCheck as Success, LuFile as File, LuFilePlus as AddFile, LuFolderPlus as AddFolder,
        LuInfo as Failure, LuUpload as Upload, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCheckLg as Success, BsExclamationCircle as Failure, BsFileEarmark as File,
        BsFileEarmarkPlus as AddFile, BsFolderPlus as AddFolder, BsUpload as Upload,
        BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(FILE, File);
themed_icon!(ADD_FILE, AddFile);
themed_icon!(ADD_FOLDER, AddFolder);
themed_icon!(UPLOAD, Upload);
themed_icon!(SUCCESS, Success);
themed_icon!(FAILURE, Failure);
themed_icon!(CLOSE, Close);
