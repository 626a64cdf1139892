use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

#[component]
pub fn ErrorView(message: Option<String>) -> impl IntoView {
    view! {
        <MessageBar intent=MessageBarIntent::Error>
            {message.unwrap_or_else(|| "Something went wrong while loading this story.".to_string())}
        </MessageBar>
    }
}
