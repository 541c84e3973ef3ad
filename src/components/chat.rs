use dioxus::prelude::*;
use futures_util::StreamExt;
use std::time::Duration;
use tokio::time::sleep;

use crate::api::ApiClient;
use crate::conversation::{ChatTurn, Conversation, Sender, TurnBody};
use crate::models::DisplayProduct;

#[derive(Clone)]
enum ChatAction {
    Send(String),
}

// The chat surface: transcript on top, input row at the bottom. All request
// sequencing lives in `Conversation`; this component only renders it and
// forwards submissions.
#[component]
pub fn ChatView() -> Element {
    let api = use_context::<ApiClient>();
    let mut conversation = use_signal(Conversation::new);
    let mut draft = use_signal(String::new);

    // Keep the transcript pinned to the newest turn. The short delay lets
    // the DOM render the appended turn before we scroll.
    use_effect(move || {
        let _ = conversation.read();
        spawn(async move {
            sleep(Duration::from_millis(20)).await;
            let _ = document::eval(
                r#"
                const el = document.getElementById('transcript');
                if (el) { el.scrollTop = el.scrollHeight; }
            "#,
            )
            .await;
        });
    });

    // One action per submission; the coroutine lives in this component's
    // scope, so navigating away drops any in-flight request with it.
    let search = use_coroutine(move |mut rx: UnboundedReceiver<ChatAction>| {
        let api = api.clone();
        async move {
            while let Some(ChatAction::Send(text)) = rx.next().await {
                let prompt = conversation.write().begin_search(&text);
                let Some(prompt) = prompt else { continue };
                match api.recommend(&prompt).await {
                    Ok(response) => {
                        conversation.write().resolve_success(response.recommendations);
                    }
                    Err(err) => {
                        tracing::error!("Recommendation request failed: {err}");
                        conversation.write().resolve_failure();
                    }
                }
            }
        }
    });

    let pending = conversation.read().is_pending();

    // Send button and plain Enter both land here. The pending check repeats
    // the `Conversation` guard so a second Enter arriving before the input
    // re-renders as disabled is rejected now, not queued behind the
    // in-flight request.
    let mut submit = move || {
        let text = draft.read().clone();
        if text.trim().is_empty() || conversation.read().is_pending() {
            return;
        }
        draft.set(String::new());
        search.send(ChatAction::Send(text));
    };

    rsx! {
        div {
            class: "flex flex-col h-full bg-white rounded-lg shadow-lg overflow-hidden",
            div {
                class: "p-4 border-b border-gray-200 text-center text-xl font-semibold",
                "Recommendation Chat"
            }
            div {
                id: "transcript",
                class: "flex-1 min-h-0 overflow-y-auto p-4 flex flex-col gap-4",
                for turn in conversation.read().turns().iter() {
                    TurnView {
                        key: "{turn.id}",
                        turn: turn.clone()
                    }
                }
                if pending {
                    ThinkingIndicator {}
                }
            }
            div {
                class: "p-4 border-t border-gray-200 flex items-center gap-3",
                input {
                    class: "flex-1 py-2 px-4 rounded-xl border border-gray-300",
                    placeholder: "Type your request...",
                    value: "{draft}",
                    disabled: pending,
                    oninput: move |event| draft.set(event.value()),
                    onkeydown: move |event| {
                        if event.key() == Key::Enter && !event.data.modifiers().contains(Modifiers::SHIFT) {
                            event.prevent_default();
                            submit();
                        }
                    },
                }
                button {
                    class: "px-5 py-2 bg-brand rounded-full text-white font-semibold",
                    disabled: pending,
                    onclick: move |_| submit(),
                    "Send"
                }
            }
        }
    }
}

#[component]
fn TurnView(turn: ChatTurn) -> Element {
    match &turn.body {
        TurnBody::Text(text) => {
            let is_user = turn.sender == Sender::User;
            let container_classes = if is_user { "flex justify-end" } else { "flex justify-start" };
            let bubble_classes = if is_user {
                "bg-brand text-white"
            } else {
                "bg-brand-light text-gray-900"
            };
            rsx! {
                div {
                    class: "{container_classes}",
                    div {
                        class: "px-4 py-2 rounded-2xl max-w-lg {bubble_classes}",
                        "{text}"
                    }
                }
            }
        }
        TurnBody::Recommendations(items) => rsx! {
            div {
                class: "w-full",
                div {
                    class: "text-lg font-semibold mb-2",
                    "Here's what I found for you:"
                }
                div {
                    class: "grid grid-cols-3 gap-3",
                    for item in items.iter() {
                        ProductCard {
                            key: "{item.uniq_id}",
                            card: DisplayProduct::from(item)
                        }
                    }
                }
            }
        },
    }
}

#[component]
fn ProductCard(card: DisplayProduct) -> Element {
    rsx! {
        div {
            class: "flex flex-col h-full bg-white border border-gray-200 rounded-lg overflow-hidden",
            img {
                class: "product-image",
                src: "{card.image}",
                alt: "{card.title}"
            }
            div {
                class: "p-3 flex flex-col flex-1 gap-1",
                div { class: "font-semibold", "{card.title}" }
                div { class: "text-sm text-gray-500", "Brand: {card.brand}" }
                div { class: "text-brand font-bold", "{card.price}" }
                div { class: "text-sm italic description-quote", "{card.description}" }
            }
        }
    }
}

#[component]
fn ThinkingIndicator() -> Element {
    rsx! {
        div {
            class: "flex justify-start",
            div {
                class: "px-4 py-2 rounded-2xl bg-brand-light flex items-center gap-1",
                span { class: "dot animate-pulse-fast" }
                span { class: "dot animate-pulse-medium" }
                span { class: "dot animate-pulse-slow" }
            }
        }
    }
}
