//! Owner of all ingestion state.
//!
//! `add_file` runs admission, row building and validation synchronously and
//! only then publishes the table, so readers never see a partial one. The
//! timed notification is the only thing that outlives the call.

use tokio::sync::watch;
use tracing::{debug, info};

use crate::io::admission::{AdmissionController, AdmissionError, AdmissionResult};
use crate::io::config::IngestConfig;
use crate::io::csv_io;
use crate::io::raw_file::RawFile;
use crate::state::data_model::{Row, Table};
use crate::state::notifier::{NotificationHandle, NotificationSequencer};
use crate::state::options::{self, ValidationOption, HAS_HEADER};
use crate::state::status::{MessageId, ModalStatus, NotificationStatus};
use crate::state::validation::{self, ValidationResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settled {
    Cleared,
    Rejected,
    Loaded,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IngestPhase {
    #[default]
    Idle,
    Admitting,
    Building,
    Validating,
    Settled(Settled),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IngestOutcome {
    Cleared,
    Rejected(AdmissionError),
    Loaded {
        rows: usize,
        validation: ValidationResult,
    },
}

/// Column indices feeding the chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChartInputs {
    pub labels: Option<usize>,
    pub values: Option<usize>,
}

#[derive(Debug)]
pub struct IngestionCoordinator {
    admission: AdmissionController,
    validation_target: String,
    notifier: NotificationSequencer,
    pending_notification: Option<NotificationHandle>,
    table: Option<Table>,
    options: Vec<ValidationOption>,
    modal: ModalStatus,
    chart_inputs: ChartInputs,
    launch_visible: bool,
    phase: IngestPhase,
}

impl Default for IngestionCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl IngestionCoordinator {
    pub fn new() -> Self {
        Self::from_config(&IngestConfig::default())
    }

    pub fn from_config(config: &IngestConfig) -> Self {
        Self {
            admission: AdmissionController::from_config(config),
            validation_target: config.validation_target.clone(),
            notifier: NotificationSequencer::from_config(config),
            pending_notification: None,
            table: None,
            options: options::default_options(),
            modal: ModalStatus::default(),
            chart_inputs: ChartInputs::default(),
            launch_visible: false,
            phase: IngestPhase::Idle,
        }
    }

    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    pub fn modal_status(&self) -> &ModalStatus {
        &self.modal
    }

    pub fn notification_status(&self) -> NotificationStatus {
        self.notifier.status()
    }

    pub fn subscribe_notifications(&self) -> watch::Receiver<NotificationStatus> {
        self.notifier.subscribe()
    }

    pub fn validation_options(&self) -> &[ValidationOption] {
        &self.options
    }

    pub fn phase(&self) -> IngestPhase {
        self.phase
    }

    pub fn chart_inputs(&self) -> ChartInputs {
        self.chart_inputs
    }

    pub fn launch_visible(&self) -> bool {
        self.launch_visible
    }

    /// First row, when the "has header" option is on.
    pub fn header(&self) -> Option<&Row> {
        if !options::is_enabled(&self.options, HAS_HEADER) {
            return None;
        }
        self.table.as_ref().and_then(|table| table.first())
    }

    /// Rows after the header, or every row without one.
    pub fn body_rows(&self) -> &[Row] {
        let Some(table) = self.table.as_ref() else {
            return &[];
        };
        match self.header() {
            Some(_) => &table[1..],
            None => table,
        }
    }

    /// Handles a new file selection. `None` means the selection was cleared.
    pub fn add_file(&mut self, file: Option<&RawFile>) -> IngestOutcome {
        self.enter(IngestPhase::Admitting);

        let file = match self.admission.admit(file) {
            AdmissionResult::Cleared => {
                self.cancel_notification();
                self.table = None;
                self.chart_inputs = ChartInputs::default();
                info!("table cleared");
                self.enter(IngestPhase::Settled(Settled::Cleared));
                return IngestOutcome::Cleared;
            }
            AdmissionResult::Rejected(err) => {
                info!(%err, "file rejected");
                self.modal = ModalStatus::open(err.message_id(), None);
                self.enter(IngestPhase::Settled(Settled::Rejected));
                return IngestOutcome::Rejected(err);
            }
            AdmissionResult::Accepted(file) => file,
        };

        self.enter(IngestPhase::Building);
        let table = csv_io::build_table(file.contents().unwrap_or_default());

        self.enter(IngestPhase::Validating);
        let validation = validation::validate(&table, &self.options, &self.validation_target);
        if let ValidationResult::Completed { max_width, .. } = &validation {
            if validation.has_short_rows() {
                self.modal = ModalStatus::open(MessageId::Msg0, Some(*max_width));
            }
        }

        let rows = table.len();
        self.table = Some(table);
        self.chart_inputs = ChartInputs::default();

        self.cancel_notification();
        self.pending_notification = self.notifier.schedule(file.byte_size());

        info!(name = file.name(), bytes = file.byte_size(), rows, "file loaded");
        self.enter(IngestPhase::Settled(Settled::Loaded));
        IngestOutcome::Loaded { rows, validation }
    }

    /// Toggles a named option. Already loaded tables are not re-validated.
    pub fn update_validation_option(&mut self, name: &str, enabled: bool) -> bool {
        let updated = options::update_option(&mut self.options, name, enabled);
        if !updated {
            debug!(option = name, "unknown validation option");
        }
        updated
    }

    pub fn reset_modal(&mut self, is_open: bool) {
        self.modal.is_open = is_open;
    }

    pub fn set_launch_visible(&mut self, visible: bool) {
        self.launch_visible = visible;
    }

    /// Picks the label and value columns for the chart. Picking the same
    /// column twice opens the duplicate-selection modal and keeps the
    /// previous choice.
    pub fn select_chart_inputs(&mut self, labels: usize, values: usize) -> bool {
        if labels == values {
            info!(column = labels, "labels and values use the same column");
            self.modal = ModalStatus::open(MessageId::Msg4, None);
            return false;
        }

        self.chart_inputs = ChartInputs {
            labels: Some(labels),
            values: Some(values),
        };
        true
    }

    fn cancel_notification(&mut self) {
        if let Some(handle) = self.pending_notification.take() {
            if !handle.is_finished() {
                debug!("pending notification cancelled");
                handle.cancel();
                self.notifier.hide();
            }
        }
    }

    fn enter(&mut self, phase: IngestPhase) {
        debug!(from = ?self.phase, to = ?phase, "ingest phase");
        self.phase = phase;
    }
}
