/// Snapshot handed to the rendering layer; never written back.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub status_text: String,
    pub user_name: Option<String>,
    pub file_name: Option<String>,
    pub has_destination: bool,
    pub ready_to_submit: bool,
    pub submitted: bool,
    /// Submit control enabled: ready and not yet submitted.
    pub can_submit: bool,
}
