use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};
use shared_types::ChipArgs;
use thaw::{Button, Input, Switch};

use super::{ACTION_ENTRY, CANVAS, CONTROL_ROW, PAGE, PANEL};
use crate::components::error::ErrorView;
use crate::components::RepositoryChip;
use crate::stories::{self, Control, Story, CHIP_META};

/// `/story/:id` — renders one story with its controls and action log.
///
/// Arg overrides can be passed as a JSON object in the `args` query parameter,
/// e.g. `/story/default?args={"isInChat":true}`.
#[component]
pub fn StoryView() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();

    move || {
        let id = params.read().get("id").unwrap_or_default();
        let overrides = query.read().get("args");

        let resolved = stories::find(&id).and_then(|story| {
            let args = story.args_with_overrides(overrides.as_deref())?;
            Ok((story, args))
        });

        match resolved {
            Ok((story, args)) => view! { <StoryCanvas story=story args=args /> }.into_any(),
            Err(e) => {
                leptos::logging::warn!("cannot render story `{}`: {}", id, e);
                view! {
                    <div class=PAGE>
                        <ErrorView message=Some(e.to_string()) />
                    </div>
                }
                .into_any()
            }
        }
    }
}

#[component]
fn StoryCanvas(story: Story, args: ChipArgs) -> impl IntoView {
    let initial = args.clone();
    let repo_name = RwSignal::new(args.repo_name);
    let chat_started = RwSignal::new(args.chat_started);
    let is_in_chat = RwSignal::new(args.is_in_chat);
    let actions = RwSignal::new(Vec::<String>::new());

    let action_label = CHIP_META.action_label("onRemove").unwrap_or("onRemove");
    let on_remove = Callback::new(move |()| {
        actions.update(|log| log.push(action_label.to_string()));
    });

    let reset = move |_| {
        repo_name.set(initial.repo_name.clone());
        chat_started.set(initial.chat_started);
        is_in_chat.set(initial.is_in_chat);
        actions.set(Vec::new());
    };

    let controls = CHIP_META
        .arg_types
        .iter()
        .filter_map(|arg| {
            let row = match (arg.control, arg.name) {
                (Control::Text, "repoName") => view! {
                    <label class=CONTROL_ROW>
                        <span>{arg.name}</span>
                        <Input value=repo_name />
                    </label>
                }
                .into_any(),
                (Control::Boolean, "chatStarted") => view! {
                    <label class=CONTROL_ROW>
                        <Switch checked=chat_started />
                        <span>{arg.name}</span>
                    </label>
                }
                .into_any(),
                (Control::Boolean, "isInChat") => view! {
                    <label class=CONTROL_ROW>
                        <Switch checked=is_in_chat />
                        <span>{arg.name}</span>
                    </label>
                }
                .into_any(),
                _ => return None,
            };
            Some(row)
        })
        .collect_view();

    view! {
        <div class=PAGE>
            <h1>{CHIP_META.title} " / " {story.name}</h1>
            <div class=format!("{} {}", CHIP_META.layout.canvas_classes(), CANVAS)>
                {move || {
                    view! {
                        <RepositoryChip
                            repo_name=repo_name.get()
                            on_remove=on_remove
                            chat_started=chat_started.get()
                            is_in_chat=is_in_chat.get()
                        />
                    }
                }}
            </div>
            <section class=PANEL>
                <h2>"Controls"</h2>
                {controls}
                <Button on_click=reset>"Reset args"</Button>
            </section>
            <section class=PANEL>
                <h2>"Actions"</h2>
                <ul>
                    {move || {
                        actions
                            .get()
                            .into_iter()
                            .map(|action| view! { <li class=ACTION_ENTRY>{action}</li> })
                            .collect_view()
                    }}
                </ul>
            </section>
        </div>
    }
}
