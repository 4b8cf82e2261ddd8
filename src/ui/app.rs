use dioxus::prelude::*;
use std::path::PathBuf;

use crate::io::config::IngestConfig;
use crate::state::i18n::{self, Language};
use crate::state::ingestion::IngestionCoordinator;
use crate::state::status::NotificationStatus;
use crate::ui::actions;
use crate::ui::modal::{Modal, Notification};
use crate::ui::table::DataTable;
use crate::ui::toolbar::Toolbar;

const STYLES: Asset = asset!("/assets/styles.css");

pub const OPEN_ENV: &str = "CSVSHEET_OPEN";

#[component]
pub fn App() -> Element {
    let coordinator = use_signal(|| {
        let config = IngestConfig::from_env().unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to default config");
            IngestConfig::default()
        });
        IngestionCoordinator::from_config(&config)
    });
    let language = use_signal(Language::default);
    let file_name = use_signal::<Option<String>>(|| None);
    let error_message = use_signal::<Option<String>>(|| None);
    let show_table = use_signal(|| false);
    let mut notification = use_signal(NotificationStatus::default);

    use_effect(move || {
        if let Some(path) = std::env::var_os(OPEN_ENV) {
            actions::load_path(
                coordinator,
                file_name,
                error_message,
                show_table,
                &PathBuf::from(path),
            );
        }
    });

    use_future(move || async move {
        let mut receiver = coordinator.peek().subscribe_notifications();
        while receiver.changed().await.is_ok() {
            let status = receiver.borrow_and_update().clone();
            notification.set(status);
        }
    });

    let current_language = *language.read();
    let title = i18n::tr(current_language, "app.title");
    let description = i18n::tr(current_language, "app.description");
    let instructions = i18n::tr(current_language, "app.instructions");

    rsx! {
        document::Stylesheet { href: STYLES }
        div { class: "app",
            header { class: "app-header",
                h1 { "{title}" }
                p { class: "app-description", "{description}" }
                p { class: "app-instructions", "{instructions}" }
            }
            Toolbar { coordinator, language, file_name, error_message, show_table }
            Notification { status: notification, language }
            if *show_table.read() {
                DataTable { coordinator, language }
            }
            Modal { coordinator, language }
        }
    }
}
