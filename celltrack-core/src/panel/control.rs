use params::TrackingParams;

/// Where the window sits in the edit/commit cycle. `Rejected` keeps the
/// error count so the action strip can summarize without re-validating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitState {
    #[default]
    Editable,
    Committed,
    Rejected {
        errors: usize,
    },
}

/// Handed to the tracking engine after a successful commit. The engine
/// itself lives outside this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRequest {
    pub params: TrackingParams,
}

/// Action strip under the tabs. Owns no validated fields; it only tracks
/// the commit cycle and builds run requests.
#[derive(Debug, Clone, Default)]
pub struct ControlPanel {
    state: CommitState,
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &'static str {
        "Control"
    }

    pub fn state(&self) -> CommitState {
        self.state
    }

    pub fn note_edit(&mut self) {
        self.state = CommitState::Editable;
    }

    pub fn note_committed(&mut self) {
        self.state = CommitState::Committed;
    }

    pub fn note_rejected(&mut self, errors: usize) {
        self.state = CommitState::Rejected { errors };
    }

    /// A run can only start from committed parameters.
    pub fn run_request(&self, params: &TrackingParams) -> Option<RunRequest> {
        if self.state == CommitState::Committed {
            Some(RunRequest {
                params: params.clone(),
            })
        } else {
            None
        }
    }
}
