/// File selection dialogs as seen by the conversion workflow

use std::path::PathBuf;

/// Extension filter offered by the open dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub description: String,
    pub pattern: String,
}

impl FileFilter {
    pub fn text_files() -> Self {
        FileFilter {
            description: "Text Files".to_string(),
            pattern: "*.txt".to_string(),
        }
    }
}

/// Modal open/save dialogs. `None` means the user dismissed the dialog.
pub trait FileDialogAdapter {
    fn pick_open_path(&mut self, filter: &FileFilter) -> Option<PathBuf>;
    fn pick_save_path(&mut self, default_name: &str) -> Option<PathBuf>;
}

/// Dialogs whose answers are decided up front.
///
/// The command-line front end fills this from its arguments; tests use it to
/// script user choices. With `save_to_default` set, a missing save answer
/// falls back to the suggested default name instead of a cancel.
#[derive(Debug, Clone, Default)]
pub struct PresetDialogs {
    pub open: Option<PathBuf>,
    pub save: Option<PathBuf>,
    pub save_to_default: bool,
    /// Requests seen so far, for assertions
    pub save_requests: Vec<String>,
}

impl PresetDialogs {
    pub fn new(open: Option<PathBuf>, save: Option<PathBuf>) -> Self {
        PresetDialogs {
            open,
            save,
            ..Default::default()
        }
    }
}

impl FileDialogAdapter for PresetDialogs {
    fn pick_open_path(&mut self, filter: &FileFilter) -> Option<PathBuf> {
        log::debug!("open dialog ({} {})", filter.description, filter.pattern);
        self.open.clone()
    }

    fn pick_save_path(&mut self, default_name: &str) -> Option<PathBuf> {
        self.save_requests.push(default_name.to_string());
        match &self.save {
            Some(p) => Some(p.clone()),
            None if self.save_to_default => Some(PathBuf::from(default_name)),
            None => None,
        }
    }
}
