use serde::{Deserialize, Serialize};

pub const REMOVE_TITLE: &str = "Remove Repository";

/// Sizing variant of a repository chip.
///
/// `is_in_chat` is a strict override: once it is set, `chat_started` has no
/// effect on the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChipVariant {
    Compact,
    DefaultLarge,
    DefaultSmall,
}

impl ChipVariant {
    pub fn resolve(chat_started: bool, is_in_chat: bool) -> Self {
        if is_in_chat {
            ChipVariant::Compact
        } else if chat_started {
            ChipVariant::DefaultSmall
        } else {
            ChipVariant::DefaultLarge
        }
    }

    fn sizing(self) -> &'static str {
        match self {
            ChipVariant::Compact => "h-6 px-2 py-1 text-xs",
            ChipVariant::DefaultSmall => "px-3 py-2 text-sm",
            ChipVariant::DefaultLarge => "px-3 py-2 text-base",
        }
    }

    fn button_size(self) -> &'static str {
        match self {
            ChipVariant::Compact => "w-4 h-4",
            _ => "w-6 h-6",
        }
    }

    fn close_icon(self) -> &'static str {
        match self {
            ChipVariant::Compact => "i-ph:x text-[10px]",
            _ => "i-ph:x",
        }
    }

    pub fn all() -> [ChipVariant; 3] {
        [
            ChipVariant::Compact,
            ChipVariant::DefaultLarge,
            ChipVariant::DefaultSmall,
        ]
    }
}

/// Class strings for every element of a chip, resolved for one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipClasses {
    pub wrapper: &'static str,
    pub label: String,
    pub repo_icon: &'static str,
    pub dismiss_button: String,
    pub close_icon: &'static str,
}

impl ChipClasses {
    pub fn for_variant(variant: ChipVariant) -> Self {
        Self {
            wrapper: "relative mr-2 group",
            label: format!(
                "inline-flex items-center gap-1 {} rounded-full bg-fiddle-elements-background-depth-2 border border-fiddle-elements-borderColor text-fiddle-elements-textPrimary",
                variant.sizing()
            ),
            repo_icon: "i-ph:github-logo-fill",
            dismiss_button: format!(
                "absolute -top-2 -right-2 bg-fiddle-elements-code-background text-white rounded-full {} flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity",
                variant.button_size()
            ),
            close_icon: variant.close_icon(),
        }
    }

    /// Every individual class token, in element order. May contain repeats.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        [
            self.wrapper,
            self.label.as_str(),
            self.repo_icon,
            self.dismiss_button.as_str(),
            self.close_icon,
        ]
        .into_iter()
        .flat_map(str::split_whitespace)
    }
}

/// The serializable part of the chip props. The removal callback is supplied
/// by whoever renders the chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChipArgs {
    pub repo_name: String,
    pub chat_started: bool,
    #[serde(default)]
    pub is_in_chat: bool,
}

impl ChipArgs {
    pub fn new(repo_name: impl Into<String>, chat_started: bool, is_in_chat: bool) -> Self {
        Self {
            repo_name: repo_name.into(),
            chat_started,
            is_in_chat,
        }
    }

    pub fn variant(&self) -> ChipVariant {
        ChipVariant::resolve(self.chat_started, self.is_in_chat)
    }

    pub fn merge(mut self, patch: ChipArgsPatch) -> Self {
        if let Some(repo_name) = patch.repo_name {
            self.repo_name = repo_name;
        }
        if let Some(chat_started) = patch.chat_started {
            self.chat_started = chat_started;
        }
        if let Some(is_in_chat) = patch.is_in_chat {
            self.is_in_chat = is_in_chat;
        }
        self
    }
}

/// Partial args, as edited through the explorer controls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChipArgsPatch {
    pub repo_name: Option<String>,
    pub chat_started: Option<bool>,
    pub is_in_chat: Option<bool>,
}
