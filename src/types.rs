//! Progress events emitted by the long-running extraction so that frontends
//! (the CLI progress bar) can follow along without the library knowing how
//! progress gets displayed.

#[derive(Debug)]
pub struct AnalysisEvent {
    pub stage: Stage,
    pub progress: StageProgress,
}

#[derive(Debug)]
pub enum Stage {
    ListingClasses,
    ExtractingBytecode,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::ListingClasses => "Listing Classes",
            Stage::ExtractingBytecode => "Extracting Bytecode",
        }
    }
}

impl From<Stage> for AnalysisEvent {
    fn from(value: Stage) -> Self {
        AnalysisEvent {
            stage: value,
            progress: StageProgress::Unknown,
        }
    }
}

#[derive(Debug)]
pub enum StageProgress {
    Unknown,
    Percentage(f32),
    Done,
}
