//! Collaborator surface: file dialogs and status notices
//!
//! The conversion workflow talks to the outside world only through these
//! traits. Front ends implement them; the preset and recording variants give
//! tests and the command line deterministic answers.

pub mod dialog;
pub mod notice;

pub use dialog::{FileDialogAdapter, FileFilter, PresetDialogs};
pub use notice::{LogNotifier, Notice, NoticeKind, Notifier, RecordingNotifier};
