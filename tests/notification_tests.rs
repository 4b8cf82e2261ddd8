use std::time::Duration;

use tokio::time::Instant;

use csvsheet::io::raw_file::RawFile;
use csvsheet::state::ingestion::IngestionCoordinator;
use csvsheet::state::notifier::NotificationSequencer;
use csvsheet::state::status::{MessageId, NotificationStatus};

fn sized_csv(byte_size: u64) -> RawFile {
    RawFile::new("data.csv", byte_size, Some("a,b\nc,d".to_string()))
}

#[tokio::test(start_paused = true)]
async fn test_show_then_hide_for_2000_bytes() {
    let sequencer = NotificationSequencer::default();
    let mut receiver = sequencer.subscribe();
    let start = Instant::now();

    let _handle = sequencer.schedule(2000).unwrap();

    receiver.changed().await.unwrap();
    let shown_at = Instant::now();
    assert_eq!(
        *receiver.borrow_and_update(),
        NotificationStatus::shown(MessageId::Msg3)
    );

    receiver.changed().await.unwrap();
    let hidden_at = Instant::now();
    assert_eq!(
        *receiver.borrow_and_update(),
        NotificationStatus::hidden(MessageId::Msg3)
    );

    let show_delay = shown_at - start;
    assert!(show_delay >= Duration::from_millis(1), "{show_delay:?}");
    assert!(show_delay < Duration::from_millis(3), "{show_delay:?}");

    let hide_delay = hidden_at - shown_at;
    assert!(hide_delay >= Duration::from_millis(6666), "{hide_delay:?}");
    assert!(hide_delay <= Duration::from_millis(6669), "{hide_delay:?}");
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_sequence_never_fires() {
    let sequencer = NotificationSequencer::default();
    let handle = sequencer.schedule(2000).unwrap();
    handle.cancel();

    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(sequencer.status(), NotificationStatus::default());
    assert!(handle.is_finished());
}

#[tokio::test(start_paused = true)]
async fn test_load_returns_before_notification() {
    let mut state = IngestionCoordinator::new();
    state.add_file(Some(&sized_csv(2000)));

    assert!(state.table().is_some());
    assert!(!state.notification_status().is_visible);

    let mut receiver = state.subscribe_notifications();
    receiver.changed().await.unwrap();
    assert!(state.notification_status().is_visible);
}

#[tokio::test(start_paused = true)]
async fn test_new_file_cancels_pending_sequence() {
    let mut state = IngestionCoordinator::new();
    let mut receiver = state.subscribe_notifications();

    state.add_file(Some(&sized_csv(20_000)));
    let start = Instant::now();
    state.add_file(Some(&sized_csv(2000)));

    receiver.changed().await.unwrap();
    assert!(receiver.borrow_and_update().is_visible);
    assert!(Instant::now() - start < Duration::from_millis(3));

    receiver.changed().await.unwrap();
    assert!(!receiver.borrow_and_update().is_visible);

    // The first file would have shown at 10ms and hidden ~66.7s later.
    let quiet = tokio::time::timeout(Duration::from_secs(120), receiver.changed()).await;
    assert!(quiet.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_clear_hides_visible_notification() {
    let mut state = IngestionCoordinator::new();
    let mut receiver = state.subscribe_notifications();

    state.add_file(Some(&sized_csv(2000)));
    receiver.changed().await.unwrap();
    assert!(state.notification_status().is_visible);

    state.add_file(None);
    assert_eq!(
        state.notification_status(),
        NotificationStatus::hidden(MessageId::Msg3)
    );

    let quiet = tokio::time::timeout(Duration::from_secs(60), receiver.changed()).await;
    assert!(matches!(quiet, Ok(Ok(()))));
    assert!(!receiver.borrow_and_update().is_visible);
    let quiet = tokio::time::timeout(Duration::from_secs(60), receiver.changed()).await;
    assert!(quiet.is_err());
}
