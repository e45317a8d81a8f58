//! End-to-end pipeline scenarios: skip/succeed/fail ordering, the first
//! failure short-circuiting the run, and progress reaching observers in
//! emission order.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use riodeploy::{
    ExecutionEvent, PipelineRunner, PipelineStatus, Progress, Stage, StageError, StageState,
};

/// Scripted stage: skip, succeed, or fail, with canned progress messages
struct ScriptedStage {
    name: &'static str,
    run: bool,
    messages: Vec<&'static str>,
    error: Option<&'static str>,
    executed: Arc<AtomicBool>,
}

impl ScriptedStage {
    fn succeed(name: &'static str, messages: Vec<&'static str>) -> Self {
        Self {
            name,
            run: true,
            messages,
            error: None,
            executed: Arc::new(AtomicBool::new(false)),
        }
    }

    fn fail(name: &'static str, messages: Vec<&'static str>, error: &'static str) -> Self {
        Self {
            error: Some(error),
            ..Self::succeed(name, messages)
        }
    }

    fn skip(name: &'static str) -> Self {
        Self {
            run: false,
            ..Self::succeed(name, Vec::new())
        }
    }

    fn executed_flag(&self) -> Arc<AtomicBool> {
        self.executed.clone()
    }
}

#[async_trait]
impl Stage for ScriptedStage {
    fn name(&self) -> &str {
        self.name
    }

    fn should_run(&self) -> bool {
        self.run
    }

    async fn execute(&self, progress: &Progress) -> Result<(), StageError> {
        self.executed.store(true, Ordering::SeqCst);
        for message in &self.messages {
            progress.emit(message);
        }
        match self.error {
            Some(error) => Err(StageError::new(error)),
            None => Ok(()),
        }
    }
}

fn collect_events(runner: &mut PipelineRunner) -> Arc<Mutex<Vec<ExecutionEvent>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    runner.add_event_handler(move |event| sink.lock().unwrap().push(event));
    seen
}

#[tokio::test]
async fn test_skip_succeed_fail_succeed_yields_the_failing_stages_reason() {
    let a = ScriptedStage::skip("a");
    let b = ScriptedStage::succeed("b", vec!["b-1", "b-2"]);
    let c = ScriptedStage::fail("c", vec!["c-1"], "c went sideways");
    let d = ScriptedStage::succeed("d", vec!["d-1"]);
    let d_executed = d.executed_flag();

    let mut runner = PipelineRunner::new(vec![
        Box::new(a),
        Box::new(b),
        Box::new(c),
        Box::new(d),
    ]);
    let events = collect_events(&mut runner);

    let outcome = runner.run().await;

    // Overall failure carries c's reason; d never executed.
    assert_eq!(outcome.status, PipelineStatus::Failed);
    let failure = outcome.failure().expect("run must record the failure");
    assert_eq!(failure.name, "c");
    assert_eq!(
        failure.state,
        StageState::Failed {
            error: "c went sideways".to_string()
        }
    );
    assert!(!d_executed.load(Ordering::SeqCst));
    assert_eq!(outcome.stages[3].state, StageState::Pending);

    // Only b's and c's pre-failure progress was observed, in order.
    let progress: Vec<(String, String)> = events
        .lock()
        .unwrap()
        .iter()
        .filter_map(|event| match event {
            ExecutionEvent::StageProgress { stage, message } => {
                Some((stage.clone(), message.clone()))
            }
            _ => None,
        })
        .collect();
    assert_eq!(
        progress,
        vec![
            ("b".to_string(), "b-1".to_string()),
            ("b".to_string(), "b-2".to_string()),
            ("c".to_string(), "c-1".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_all_skipped_or_succeeded_is_a_success() {
    let mut runner = PipelineRunner::new(vec![
        Box::new(ScriptedStage::skip("net-check")) as Box<dyn Stage>,
        Box::new(ScriptedStage::succeed("deploy", vec!["working"])),
    ]);
    let events = collect_events(&mut runner);

    let outcome = runner.run().await;

    assert!(outcome.is_success());
    assert_eq!(outcome.stages[0].state, StageState::Skipped);
    assert!(matches!(
        outcome.stages[1].state,
        StageState::Succeeded { .. }
    ));

    let events = events.lock().unwrap();
    assert!(matches!(
        events.first(),
        Some(ExecutionEvent::PipelineStarted { total_stages: 2 })
    ));
    assert!(matches!(
        events.last(),
        Some(ExecutionEvent::PipelineCompleted {
            status: PipelineStatus::Succeeded
        })
    ));
}

#[tokio::test]
async fn test_skipped_stage_contributes_no_progress_events() {
    let mut runner = PipelineRunner::new(vec![Box::new(ScriptedStage::skip("quiet")) as Box<dyn Stage>]);
    let events = collect_events(&mut runner);

    let outcome = runner.run().await;
    assert!(outcome.is_success());

    let saw_progress = events
        .lock()
        .unwrap()
        .iter()
        .any(|event| matches!(event, ExecutionEvent::StageProgress { .. }));
    assert!(!saw_progress);
}

#[tokio::test]
async fn test_failure_in_the_first_stage_stops_everything_after_it() {
    let first = ScriptedStage::fail("first", vec![], "no network");
    let second = ScriptedStage::succeed("second", vec![]);
    let second_executed = second.executed_flag();

    let runner = PipelineRunner::new(vec![Box::new(first), Box::new(second)]);
    let outcome = runner.run().await;

    assert_eq!(outcome.status, PipelineStatus::Failed);
    assert_eq!(outcome.failure().unwrap().name, "first");
    assert!(!second_executed.load(Ordering::SeqCst));
}
