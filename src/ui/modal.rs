use dioxus::prelude::*;

use crate::state::i18n::{self, Language};
use crate::state::ingestion::IngestionCoordinator;
use crate::state::status::NotificationStatus;

#[component]
pub fn Modal(mut coordinator: Signal<IngestionCoordinator>, language: Signal<Language>) -> Element {
    let modal = coordinator.read().modal_status().clone();
    let (true, Some(id)) = (modal.is_open, modal.message_id) else {
        return rsx! {};
    };

    let current_language = *language.read();
    let message = i18n::message(current_language, id, modal.params);
    let close_label = i18n::tr(current_language, "modal.close");

    rsx! {
        div { class: "modal-backdrop", id: "modal-{id.as_str()}",
            div { class: "modal",
                h2 { "{message.title}" }
                p { "{message.body}" }
                button {
                    class: "toolbar-btn",
                    id: "btn-close-modal",
                    onclick: move |_| coordinator.with_mut(|state| state.reset_modal(false)),
                    "{close_label}"
                }
            }
        }
    }
}

#[component]
pub fn Notification(status: Signal<NotificationStatus>, language: Signal<Language>) -> Element {
    let current = status.read().clone();
    let (true, Some(id)) = (current.is_visible, current.message_id) else {
        return rsx! {};
    };

    let message = i18n::message(*language.read(), id, None);
    rsx! {
        div { class: "notification", id: "notification-{id.as_str()}",
            strong { "{message.title}" }
            span { " {message.body}" }
        }
    }
}
