//! Notices for a terminal.

use flashnote_engine::notice::{Notice, NoticeLevel, Notifier};
use tracing::debug;

/// Prints notices to stderr and logs them.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        debug!(level = ?notice.level, message = %notice.message, "notice");
        eprintln!("{} {}", prefix(notice.level), notice.message);
    }
}

fn prefix(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "[info]",
        NoticeLevel::Success => "[ok]",
        NoticeLevel::Error => "[error]",
    }
}
