use serde::Serialize;
use std::fmt;

/// Progress never passes this value until the completion step runs.
pub const PROGRESS_CEILING: u8 = 99;
pub const PROGRESS_DONE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FileType {
    #[serde(rename = "PDF")]
    Pdf,
    Image,
    Email,
    Other,
}

impl FileType {
    /// Classifies by the lowercased text after the last `.`.
    pub fn from_name(name: &str) -> Self {
        let Some((_, ext)) = name.rsplit_once('.') else {
            return FileType::Other;
        };

        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "jpg" | "jpeg" | "png" | "gif" => FileType::Image,
            "eml" | "msg" => FileType::Email,
            _ => FileType::Other,
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FileType::Pdf => "PDF",
            FileType::Image => "Image",
            FileType::Email => "Email",
            FileType::Other => "Other",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Uploading,
    Processed,
    Error,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Processed | Phase::Error)
    }
}

/// What a dropped or picked file looks like before it becomes a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    pub size_bytes: u64,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }
}

/// The single upload tracked by the simulator.
///
/// Name, type and size are fixed at creation. Only the simulator moves
/// `phase` and `progress_percent`, through the `pub(super)` mutators below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRecord {
    file_name: String,
    file_type: FileType,
    size_bytes: u64,
    phase: Phase,
    progress_percent: u8,
}

impl UploadRecord {
    pub fn new(file: FileCandidate) -> Self {
        Self {
            file_type: FileType::from_name(&file.name),
            file_name: file.name,
            size_bytes: file.size_bytes,
            phase: Phase::Uploading,
            progress_percent: 0,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn file_type(&self) -> FileType {
        self.file_type
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn progress_percent(&self) -> u8 {
        self.progress_percent
    }

    /// Adds `step`, capped at [`PROGRESS_CEILING`]. Returns true once the
    /// ceiling is reached.
    pub(super) fn advance_progress(&mut self, step: u8) -> bool {
        self.progress_percent = self
            .progress_percent
            .saturating_add(step)
            .min(PROGRESS_CEILING);
        self.progress_percent >= PROGRESS_CEILING
    }

    pub(super) fn finish(&mut self, success: bool) {
        self.phase = if success {
            Phase::Processed
        } else {
            Phase::Error
        };
        self.progress_percent = PROGRESS_DONE;
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
