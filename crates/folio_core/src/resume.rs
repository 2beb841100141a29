//! Resume download tracking.
//!
//! # Responsibility
//! - Count resume downloads in the persisted store and surface the
//!   download notice.
//!
//! # Invariants
//! - A malformed stored count resets to zero instead of failing the
//!   download action.

use crate::contact::form::{Notice, NoticeKind};
use crate::storage::KeyValueStore;
use log::info;

/// Persisted counter key.
pub const DOWNLOAD_COUNT_KEY: &str = "resumeDownloads";

const DOWNLOAD_NOTICE_DISMISS_MS: u64 = 3000;

/// Records one download and returns the running total.
pub fn record_download(store: &mut dyn KeyValueStore) -> u64 {
    let previous = store
        .get(DOWNLOAD_COUNT_KEY)
        .and_then(|raw| raw.parse::<u64>().ok())
        .unwrap_or(0);
    let total = previous + 1;
    store.set(DOWNLOAD_COUNT_KEY, &total.to_string());
    info!("event=resume_download total={total}");
    total
}

/// The transient notice shown while the download starts.
pub fn download_notice() -> Notice {
    Notice {
        kind: NoticeKind::Success,
        message: "Downloading resume...".to_string(),
        dismiss_after_ms: DOWNLOAD_NOTICE_DISMISS_MS,
    }
}
