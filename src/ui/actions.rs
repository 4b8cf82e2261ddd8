use dioxus::prelude::*;
use std::path::Path;

use crate::io::raw_file::RawFile;
use crate::state::ingestion::{IngestOutcome, IngestionCoordinator};

pub async fn open_file(
    coordinator: Signal<IngestionCoordinator>,
    file_name: Signal<Option<String>>,
    error_message: Signal<Option<String>>,
    show_table: Signal<bool>,
) {
    // No extension filter here: the admission check reports unsupported files.
    let task = rfd::AsyncFileDialog::new().pick_file().await;

    if let Some(handle) = task {
        load_path(
            coordinator,
            file_name,
            error_message,
            show_table,
            handle.path(),
        );
    }
}

pub fn load_path(
    mut coordinator: Signal<IngestionCoordinator>,
    mut file_name: Signal<Option<String>>,
    mut error_message: Signal<Option<String>>,
    mut show_table: Signal<bool>,
    path: &Path,
) {
    let file = match RawFile::from_path(path) {
        Ok(file) => file,
        Err(err) => {
            tracing::warn!(%err, "could not read selected file");
            error_message.set(Some(err.to_string()));
            return;
        }
    };

    let outcome = coordinator.with_mut(|state| state.add_file(Some(&file)));
    error_message.set(None);
    if let IngestOutcome::Loaded { .. } = outcome {
        file_name.set(Some(file.name().to_string()));
        show_table.set(false);
        coordinator.with_mut(|state| state.set_launch_visible(true));
    }
}

pub fn clear_file(
    mut coordinator: Signal<IngestionCoordinator>,
    mut file_name: Signal<Option<String>>,
    mut error_message: Signal<Option<String>>,
    mut show_table: Signal<bool>,
) {
    coordinator.with_mut(|state| {
        state.add_file(None);
        state.set_launch_visible(false);
    });
    file_name.set(None);
    error_message.set(None);
    show_table.set(false);
}
