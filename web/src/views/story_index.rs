use leptos::prelude::*;
use leptos_router::components::A;

use super::{PAGE, PANEL, STORY_LINK};
use crate::stories::{catalog, CHIP_META};

/// Landing page listing every story in the catalog.
#[component]
pub fn StoryIndex() -> impl IntoView {
    view! {
        <div class=PAGE>
            <h1>{CHIP_META.title}</h1>
            <nav class=PANEL>
                {catalog()
                    .into_iter()
                    .map(|story| {
                        view! {
                            <A href=story.href()>
                                <span class=STORY_LINK>{story.name}</span>
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
        </div>
    }
}
