use super::actions::{Action, MutationOrigin};
use crate::api::ApiError;
use crate::table::EntityKind;
use std::collections::HashMap;
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: Instant,
}

impl BackgroundTask {
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

/// Runs API calls off the UI task and reports their outcome as actions.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn a background fetch whose result is delivered as an action
    pub fn spawn_fetch<F, Fut>(&mut self, description: String, operation: F) -> TaskId
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Action> + Send + 'static,
    {
        self.spawn(description, async move { operation().await })
    }

    /// Spawn a row mutation (update, status change, delete)
    ///
    /// Success yields [`Action::MutationSucceeded`] carrying the returned
    /// message; failure yields [`Action::MutationFailed`] prefixed with
    /// `failure_message`.
    pub fn spawn_mutation<F, Fut>(
        &mut self,
        kind: EntityKind,
        origin: MutationOrigin,
        failure_message: &'static str,
        operation: F,
    ) -> TaskId
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<String, ApiError>> + Send + 'static,
    {
        let description = format!("{} mutation", kind);

        self.spawn(description, async move {
            match operation().await {
                Ok(message) => Action::MutationSucceeded { kind, origin, message },
                Err(e) => {
                    log::error!("{}: {}", failure_message, e);
                    Action::MutationFailed {
                        origin,
                        message: format!("{}: {}", failure_message, e),
                    }
                }
            }
        })
    }

    fn spawn<Fut>(&mut self, description: String, future: Fut) -> TaskId
    where
        Fut: Future<Output = Action> + Send + 'static,
    {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let action_sender = self.action_sender.clone();
        let handle = tokio::spawn(async move {
            let action = future.await;
            // receiver is gone once the app has quit
            let _ = action_sender.send(action);
        });

        log::debug!("Task {}: started '{}'", task_id, description);
        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                handle,
                description,
                started_at: Instant::now(),
            },
        );
        task_id
    }

    /// Drop finished tasks, returning how many were removed
    pub fn cleanup_finished_tasks(&mut self) -> usize {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for task_id in &finished {
            if let Some(task) = self.tasks.remove(task_id) {
                log::debug!("Task {}: '{}' finished after {:?}", task.id, task.description, task.elapsed());
            }
        }

        finished.len()
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
