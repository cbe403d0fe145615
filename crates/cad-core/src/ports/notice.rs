use crate::registration::Notice;

/// Where user notices (alerts, toasts, console lines) are surfaced.
pub trait NoticePort: Send + Sync {
    fn notify(&self, notice: Notice);
}
