use leptos::callback::Callable;
use leptos::prelude::*;
use shared_types::chip::REMOVE_TITLE;
use shared_types::{ChipClasses, ChipVariant};

/// A removable label for a linked repository.
///
/// The dismiss button sits over the top-right corner and only becomes visible
/// while the chip is hovered. Removal itself is up to the caller.
#[component]
pub fn RepositoryChip(
    #[prop(into)] repo_name: String,
    /// Called once per click on the dismiss button.
    #[prop(into)]
    on_remove: Callback<()>,
    /// Selects the smaller text size, unless `is_in_chat` is set.
    chat_started: bool,
    /// Compact sizing for chips shown inside the chat. Overrides `chat_started`.
    #[prop(optional)]
    is_in_chat: bool,
) -> impl IntoView {
    let classes = ChipClasses::for_variant(ChipVariant::resolve(chat_started, is_in_chat));

    view! {
        <div class=classes.wrapper>
            <div class=classes.label>
                <span class=classes.repo_icon />
                {repo_name}
            </div>
            <button
                class=classes.dismiss_button
                title=REMOVE_TITLE
                on:click=move |_| request_removal(&on_remove)
            >
                <span class=classes.close_icon />
            </button>
        </div>
    }
}

fn request_removal(on_remove: &Callback<()>) {
    on_remove.run(());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn removal_runs_callback_once_per_activation() {
        let owner = Owner::new();
        owner.with(|| {
            let calls = Arc::new(AtomicUsize::new(0));
            let counter = Arc::clone(&calls);
            let on_remove = Callback::new(move |()| {
                counter.fetch_add(1, Ordering::SeqCst);
            });

            request_removal(&on_remove);
            assert_eq!(calls.load(Ordering::SeqCst), 1);

            request_removal(&on_remove);
            assert_eq!(calls.load(Ordering::SeqCst), 2);
        });
    }

    #[cfg(feature = "ssr")]
    fn render(repo_name: &str, chat_started: bool, is_in_chat: Option<bool>) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let on_remove = Callback::new(|()| {});
            match is_in_chat {
                Some(is_in_chat) => view! {
                    <RepositoryChip
                        repo_name=repo_name.to_string()
                        on_remove=on_remove
                        chat_started=chat_started
                        is_in_chat=is_in_chat
                    />
                }
                .to_html(),
                None => view! {
                    <RepositoryChip
                        repo_name=repo_name.to_string()
                        on_remove=on_remove
                        chat_started=chat_started
                    />
                }
                .to_html(),
            }
        })
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn default_story_renders_large_text() {
        let html = render("fiddle-website", false, Some(false));
        assert!(html.contains("fiddle-website"));
        assert!(html.contains("px-3 py-2 text-base"));
        assert!(html.contains("w-6 h-6"));
        assert!(html.contains("title=\"Remove Repository\""));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn in_chat_story_renders_compact_and_ignores_chat_started() {
        let html = render("storybook-unocss-repro", true, Some(true));
        assert!(html.contains("storybook-unocss-repro"));
        assert!(html.contains("h-6 px-2 py-1 text-xs"));
        assert!(html.contains("w-4 h-4"));
        assert!(html.contains("i-ph:x text-[10px]"));
        assert!(!html.contains("text-sm"));
        assert!(!html.contains("text-base"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn omitted_in_chat_uses_default_sizing() {
        let html = render("fiddle-website", true, None);
        assert!(html.contains("px-3 py-2 text-sm"));
        assert!(!html.contains("text-xs"));
    }
}
