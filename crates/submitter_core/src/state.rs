use crate::view_model::AppViewModel;
use crate::FileSpec;

pub const STATUS_ENTER_NAME_AND_FILE: &str = "Please enter your name and upload a file.";
pub const STATUS_INPUT_FILE: &str = "Please input a file.";
pub const STATUS_INPUT_NAME: &str = "Please input a Name.";
pub const STATUS_READY: &str = "Ready To Submit.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    destination_path: String,
    status_text: String,
    user_name: Option<String>,
    file_to_submit: Option<FileSpec>,
    ready_to_submit: bool,
    submitted: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            destination_path: String::new(),
            status_text: STATUS_ENTER_NAME_AND_FILE.to_string(),
            user_name: None,
            file_to_submit: None,
            ready_to_submit: false,
            submitted: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn destination_path(&self) -> &str {
        &self.destination_path
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn file_to_submit(&self) -> Option<&FileSpec> {
        self.file_to_submit.as_ref()
    }

    pub fn ready_to_submit(&self) -> bool {
        self.ready_to_submit
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// Both a name and a file are present.
    pub fn has_name_and_file(&self) -> bool {
        self.user_name.is_some() && self.file_to_submit.is_some()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            status_text: self.status_text.clone(),
            user_name: self.user_name.clone(),
            file_name: self.file_to_submit.as_ref().map(|f| f.name().to_string()),
            has_destination: !self.destination_path.is_empty(),
            ready_to_submit: self.ready_to_submit,
            submitted: self.submitted,
            can_submit: self.ready_to_submit && !self.submitted,
        }
    }

    pub(crate) fn set_destination_path(&mut self, path: String) {
        self.destination_path = path;
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>) {
        self.status_text = text.into();
    }

    pub(crate) fn set_user_name(&mut self, name: Option<String>) {
        if name.is_none() {
            self.ready_to_submit = false;
        }
        self.user_name = name;
    }

    pub(crate) fn set_file(&mut self, file: FileSpec) {
        self.file_to_submit = Some(file);
    }

    pub(crate) fn mark_ready(&mut self) {
        self.ready_to_submit = self.has_name_and_file();
    }

    pub(crate) fn set_submitted(&mut self, submitted: bool) {
        self.submitted = submitted;
    }
}
