use super::types::{Phase, UploadRecord};
use crate::utils::file_size::FileSizeUtils;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    Spinner,
    Check,
    Cross,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Indigo,
    Emerald,
    Red,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub icon: StatusIcon,
    pub tone: Tone,
    pub text: String,
}

impl StatusView {
    pub fn for_record(record: &UploadRecord) -> Self {
        match record.phase() {
            Phase::Uploading => Self {
                icon: StatusIcon::Spinner,
                tone: Tone::Indigo,
                text: format!(
                    "Processing and Uploading to IBM Orchestrate... ({}%)",
                    record.progress_percent()
                ),
            },
            Phase::Processed => Self {
                icon: StatusIcon::Check,
                tone: Tone::Emerald,
                text: "Success! Data extracted and workflow initiated.".to_string(),
            },
            Phase::Error => Self {
                icon: StatusIcon::Cross,
                tone: Tone::Red,
                text: "Workflow Error. Please check file format or retry upload.".to_string(),
            },
        }
    }
}

/// "PDF (1.5 KB)"
pub fn subtitle(record: &UploadRecord) -> String {
    format!(
        "{} ({})",
        record.file_type(),
        FileSizeUtils::format_size(record.size_bytes())
    )
}

#[cfg(test)]
#[path = "presentation_test.rs"]
mod tests;
