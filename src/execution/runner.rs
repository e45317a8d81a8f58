//! Sequential stage runner - drives the whole deploy run
//!
//! Stages execute strictly in order; a stage's result is decided exactly
//! once, the first failure short-circuits the run, and progress messages
//! reach the observers in emission order with no buffering.

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info};

use crate::core::stage::{Progress, Stage};
use crate::core::state::{PipelineStatus, StageRecord, StageState};

/// Events observed during a pipeline run
#[derive(Debug, Clone)]
pub enum ExecutionEvent {
    PipelineStarted {
        total_stages: usize,
    },
    StageStarted {
        stage: String,
    },
    StageSkipped {
        stage: String,
    },
    StageProgress {
        stage: String,
        message: String,
    },
    StageCompleted {
        stage: String,
    },
    StageFailed {
        stage: String,
        error: String,
    },
    PipelineCompleted {
        status: PipelineStatus,
    },
}

/// Type for event handlers
pub type EventHandler = Arc<dyn Fn(ExecutionEvent) + Send + Sync>;

/// Outcome of a whole run
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub status: PipelineStatus,
    pub stages: Vec<StageRecord>,
}

impl PipelineOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.status, PipelineStatus::Succeeded)
    }

    /// The first (and only) failed stage, if any
    pub fn failure(&self) -> Option<&StageRecord> {
        self.stages
            .iter()
            .find(|record| matches!(record.state, StageState::Failed { .. }))
    }
}

/// Runs an ordered list of stages to a single outcome
pub struct PipelineRunner {
    stages: Vec<Box<dyn Stage>>,
    event_handlers: Vec<EventHandler>,
}

impl PipelineRunner {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self {
            stages,
            event_handlers: Vec::new(),
        }
    }

    /// Register an observer for execution events
    pub fn add_event_handler<F>(&mut self, handler: F)
    where
        F: Fn(ExecutionEvent) + Send + Sync + 'static,
    {
        self.event_handlers.push(Arc::new(handler));
    }

    fn emit(&self, event: ExecutionEvent) {
        for handler in &self.event_handlers {
            handler(event.clone());
        }
    }

    /// Execute every stage in order.
    ///
    /// A stage whose `should_run` is false is recorded as Skipped and
    /// contributes no progress. The first failing stage stops the run;
    /// stages after it stay Pending and never execute. The run succeeds
    /// iff every stage succeeded or was skipped.
    pub async fn run(&self) -> PipelineOutcome {
        info!("starting deploy run with {} stages", self.stages.len());
        self.emit(ExecutionEvent::PipelineStarted {
            total_stages: self.stages.len(),
        });

        let mut records = Vec::with_capacity(self.stages.len());
        let mut failed = false;

        for stage in &self.stages {
            let name = stage.name().to_string();

            if failed {
                records.push(StageRecord {
                    name,
                    state: StageState::Pending,
                });
                continue;
            }

            if !stage.should_run() {
                info!("skipping stage: {name}");
                self.emit(ExecutionEvent::StageSkipped {
                    stage: name.clone(),
                });
                records.push(StageRecord {
                    name,
                    state: StageState::Skipped,
                });
                continue;
            }

            info!("running stage: {name}");
            self.emit(ExecutionEvent::StageStarted {
                stage: name.clone(),
            });

            let started_at = Instant::now();
            let mut record = StageRecord {
                name: name.clone(),
                state: StageState::Running { started_at },
            };

            let progress = self.progress_for(&name);
            match stage.execute(&progress).await {
                Ok(()) => {
                    self.emit(ExecutionEvent::StageCompleted {
                        stage: name.clone(),
                    });
                    record.state = StageState::Succeeded {
                        duration: started_at.elapsed(),
                    };
                }
                Err(err) => {
                    error!("stage {name} failed: {err}");
                    self.emit(ExecutionEvent::StageFailed {
                        stage: name.clone(),
                        error: err.to_string(),
                    });
                    record.state = StageState::Failed {
                        error: err.to_string(),
                    };
                    failed = true;
                }
            }
            records.push(record);
        }

        let status = if failed {
            PipelineStatus::Failed
        } else {
            PipelineStatus::Succeeded
        };

        info!("deploy run finished: {status:?}");
        self.emit(ExecutionEvent::PipelineCompleted { status });

        PipelineOutcome {
            status,
            stages: records,
        }
    }

    /// Progress handle that forwards a stage's messages to the observers
    fn progress_for(&self, stage_name: &str) -> Progress {
        let handlers = self.event_handlers.clone();
        let stage = stage_name.to_string();
        Progress::new(move |message| {
            let event = ExecutionEvent::StageProgress {
                stage: stage.clone(),
                message: message.to_string(),
            };
            for handler in &handlers {
                handler(event.clone());
            }
        })
    }
}
