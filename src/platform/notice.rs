/// User-facing status notices

use crate::{Error, Result};
use std::path::PathBuf;

pub const SUCCESS_MESSAGE: &str = "Image saved successfully.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A blocking message box: title plus text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success() -> Self {
        Notice {
            kind: NoticeKind::Success,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn error(err: &Error) -> Self {
        Notice {
            kind: NoticeKind::Error,
            message: err.to_string(),
        }
    }

    pub fn from_result(res: &Result<PathBuf>) -> Self {
        match res {
            Ok(_) => Notice::success(),
            Err(e) => Notice::error(e),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "Success",
            NoticeKind::Error => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

pub trait Notifier {
    fn notify(&mut self, notice: &Notice);
}

/// Reports notices through the `log` facade and on the terminal.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notice: &Notice) {
        match notice.kind {
            NoticeKind::Success => {
                log::info!("{}: {}", notice.title(), notice.message);
                println!("{}", notice.message);
            }
            NoticeKind::Error => {
                log::warn!("{}: {}", notice.title(), notice.message);
                eprintln!("{}", notice.message);
            }
        }
    }
}

/// Keeps every notice in memory for tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notices: Vec<Notice>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}
