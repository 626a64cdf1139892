pub mod chip;
pub mod theme;

pub use chip::{ChipArgs, ChipClasses, ChipVariant};
pub use theme::{ThemeColors, ThemeMode};
