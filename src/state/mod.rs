pub mod data_model;
pub mod i18n;
pub mod ingestion;
pub mod notifier;
pub mod options;
pub mod status;
pub mod validation;
