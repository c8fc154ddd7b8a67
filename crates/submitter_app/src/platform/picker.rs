use std::path::PathBuf;

use async_trait::async_trait;
use rfd::AsyncFileDialog;
use submitter_core::FileSpec;
use submitter_engine::{open_selection, ExtensionFilter, FileSelector, SelectionError};
use submitter_logging::submit_debug;

const DIALOG_TITLE: &str = "Select the file to submit";

/// Native file dialog restricted to the configured extensions.
///
/// Multi-select is left on so that choosing several files is reported as a
/// failure instead of silently keeping one.
pub(crate) struct RfdFileSelector {
    filter: ExtensionFilter,
}

impl RfdFileSelector {
    pub fn new(filter: ExtensionFilter) -> Self {
        Self { filter }
    }

    fn dialog(&self) -> AsyncFileDialog {
        let dialog = AsyncFileDialog::new().set_title(DIALOG_TITLE);
        if self.filter.extensions().is_empty() {
            dialog
        } else {
            dialog.add_filter(filter_label(&self.filter), self.filter.extensions())
        }
    }
}

#[async_trait]
impl FileSelector for RfdFileSelector {
    async fn select(&self) -> Result<FileSpec, SelectionError> {
        let picked = self.dialog().pick_files().await;
        let paths = chosen_paths(picked.map(|handles| {
            handles
                .into_iter()
                .map(|handle| handle.path().to_path_buf())
                .collect()
        }));
        submit_debug!("File dialog returned {} path(s)", paths.len());
        open_selection(&paths, &self.filter).await
    }
}

/// Label shown next to the filter in the dialog, e.g. `Exam files (*.py)`.
fn filter_label(filter: &ExtensionFilter) -> String {
    format!("Exam files ({})", filter.describe())
}

/// A dismissed dialog counts as choosing nothing.
fn chosen_paths(picked: Option<Vec<PathBuf>>) -> Vec<PathBuf> {
    picked.unwrap_or_default()
}
