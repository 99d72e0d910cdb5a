pub mod send_due_dispatches;
pub mod sync_reminder_dispatches;
