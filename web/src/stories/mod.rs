//! Catalog of named example configurations for the repository chip.

use shared_types::chip::ChipArgsPatch;
use shared_types::ChipArgs;

use crate::error::ExplorerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Centered,
    Padded,
    Fullscreen,
}

impl Layout {
    pub const fn canvas_classes(self) -> &'static str {
        match self {
            Layout::Centered => "flex items-center justify-center p-8",
            Layout::Padded => "block p-4",
            Layout::Fullscreen => "block",
        }
    }
}

/// How an arg is edited in the controls panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Text,
    Boolean,
    /// Not editable; invocations are recorded in the action log under this label.
    Action(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgType {
    pub name: &'static str,
    pub control: Control,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryMeta {
    pub title: &'static str,
    pub layout: Layout,
    pub arg_types: &'static [ArgType],
}

impl StoryMeta {
    pub fn control(&self, name: &str) -> Option<Control> {
        self.arg_types
            .iter()
            .find(|arg| arg.name == name)
            .map(|arg| arg.control)
    }

    /// Label under which `name` invocations are logged, if it is an action.
    pub fn action_label(&self, name: &str) -> Option<&'static str> {
        match self.control(name)? {
            Control::Action(label) => Some(label),
            _ => None,
        }
    }
}

pub const CHIP_META: StoryMeta = StoryMeta {
    title: "UnoCSS/GithubChip",
    layout: Layout::Centered,
    arg_types: &[
        ArgType {
            name: "repoName",
            control: Control::Text,
        },
        ArgType {
            name: "onRemove",
            control: Control::Action("removed"),
        },
        ArgType {
            name: "chatStarted",
            control: Control::Boolean,
        },
        ArgType {
            name: "isInChat",
            control: Control::Boolean,
        },
    ],
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    pub id: String,
    pub name: &'static str,
    pub args: ChipArgs,
}

impl Story {
    fn new(name: &'static str, args: ChipArgs) -> Self {
        Self {
            id: story_id(name),
            name,
            args,
        }
    }

    pub fn href(&self) -> String {
        format!("/story/{}", self.id)
    }

    /// The story's args with a JSON object of partial overrides applied, as
    /// carried in the `args` query parameter.
    pub fn args_with_overrides(&self, overrides: Option<&str>) -> Result<ChipArgs, ExplorerError> {
        match overrides.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => {
                let patch: ChipArgsPatch = serde_json::from_str(raw)?;
                Ok(self.args.clone().merge(patch))
            }
            None => Ok(self.args.clone()),
        }
    }
}

/// `InChat` -> `in-chat`.
pub fn story_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() && i > 0 {
            id.push('-');
        }
        id.push(ch.to_ascii_lowercase());
    }
    id
}

/// All stories, in display order.
pub fn catalog() -> Vec<Story> {
    vec![
        Story::new("Default", ChipArgs::new("fiddle-website", false, false)),
        Story::new("InChat", ChipArgs::new("storybook-unocss-repro", true, true)),
    ]
}

pub fn find(id: &str) -> Result<Story, ExplorerError> {
    catalog()
        .into_iter()
        .find(|story| story.id.eq_ignore_ascii_case(id.trim()))
        .ok_or_else(|| ExplorerError::UnknownStory(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ChipVariant;

    #[test]
    fn catalog_order_and_ids() {
        let ids: Vec<String> = catalog().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, ["default", "in-chat"]);
    }

    #[test]
    fn default_story_args() {
        let story = find("default").unwrap();
        assert_eq!(story.name, "Default");
        assert_eq!(story.args.repo_name, "fiddle-website");
        assert_eq!(story.args.variant(), ChipVariant::DefaultLarge);
        assert_eq!(story.href(), "/story/default");
    }

    #[test]
    fn in_chat_story_ignores_chat_started() {
        let story = find("IN-CHAT").unwrap();
        assert_eq!(story.args.repo_name, "storybook-unocss-repro");
        assert!(story.args.chat_started);
        assert_eq!(story.args.variant(), ChipVariant::Compact);
    }

    #[test]
    fn unknown_story() {
        let err = find("missing").unwrap_err();
        assert!(matches!(err, ExplorerError::UnknownStory(ref id) if id == "missing"));
    }

    #[test]
    fn overrides_patch_story_args() {
        let story = find("in-chat").unwrap();
        let args = story
            .args_with_overrides(Some(r#"{"isInChat":false,"repoName":"other"}"#))
            .unwrap();
        assert_eq!(args.repo_name, "other");
        assert_eq!(args.variant(), ChipVariant::DefaultSmall);

        assert_eq!(story.args_with_overrides(Some("  ")).unwrap(), story.args);
        assert_eq!(story.args_with_overrides(None).unwrap(), story.args);
    }

    #[test]
    fn malformed_overrides() {
        let story = find("default").unwrap();
        let err = story.args_with_overrides(Some("{not json")).unwrap_err();
        assert!(matches!(err, ExplorerError::InvalidArgs(_)));
    }

    #[test]
    fn meta_controls() {
        assert_eq!(CHIP_META.title, "UnoCSS/GithubChip");
        assert_eq!(CHIP_META.layout, Layout::Centered);
        assert_eq!(CHIP_META.control("repoName"), Some(Control::Text));
        assert_eq!(CHIP_META.control("isInChat"), Some(Control::Boolean));
        assert_eq!(CHIP_META.action_label("onRemove"), Some("removed"));
        assert_eq!(CHIP_META.action_label("chatStarted"), None);
        assert_eq!(CHIP_META.control("missing"), None);
    }
}
