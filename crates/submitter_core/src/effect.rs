use crate::FileSpec;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Read the destination path from the configured location.
    LoadConfig,
    /// Same-tick check resolved by `settle`; never leaves the core.
    CheckReadiness,
    /// Ask the user to choose exactly one file.
    SelectFile,
    WriteExam {
        destination: String,
        user_name: String,
        file: FileSpec,
    },
}
