pub mod story_index;
pub mod story_view;

use crate::stories::Layout;

pub const PAGE: &str =
    "block p-8 bg-fiddle-elements-background-depth-1 text-fiddle-elements-textPrimary transition-theme";
pub const STORY_LINK: &str =
    "flex items-center gap-2 p-2 rounded text-fiddle-elements-textPrimary hover:bg-fiddle-elements-background-depth-2";
pub const PANEL: &str =
    "block mt-4 p-4 rounded border border-fiddle-elements-borderColor text-fiddle-elements-textPrimary";
pub const CONTROL_ROW: &str = "flex items-center gap-2 py-1 text-sm";
pub const ACTION_ENTRY: &str = "block py-1 text-xs text-gray-500";
pub const CANVAS: &str = "rounded bg-fiddle-elements-background-depth-2 transition-theme";

/// Class strings rendered by the explorer pages, so the stylesheet covers them.
pub const EXPLORER_CLASSES: &[&str] = &[
    PAGE,
    STORY_LINK,
    PANEL,
    CONTROL_ROW,
    ACTION_ENTRY,
    CANVAS,
    Layout::Centered.canvas_classes(),
    Layout::Padded.canvas_classes(),
    Layout::Fullscreen.canvas_classes(),
];
