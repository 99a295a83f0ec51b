mod entropy;
pub mod intake;
mod presentation;
mod simulator;
mod types;

pub use entropy::{Entropy, SeededEntropy, ThreadEntropy};
pub use presentation::{subtitle, StatusIcon, StatusView, Tone};
pub use simulator::UploadSimulator;
pub use types::{FileCandidate, Phase, UploadRecord};

#[cfg(test)]
pub use entropy::ScriptedEntropy;
