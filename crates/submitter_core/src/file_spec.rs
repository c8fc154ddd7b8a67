/// A user-selected file held in memory: display name plus full text contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    name: String,
    contents: String,
}

impl FileSpec {
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }
}
