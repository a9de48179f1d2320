//! Bounded group of fallible tasks
//!
//! Runs independently submitted units of work on a capped number of
//! threads and reports a single combined outcome once every task has
//! finished.

use crossbeam::channel;
use std::thread;

type Task<'env, E> = Box<dyn FnOnce() -> Result<(), E> + Send + 'env>;

/// Runs submitted tasks with at most `limit` in flight at once.
///
/// Tasks are queued with [`TaskGroup::submit`] and executed by
/// [`TaskGroup::wait`], which blocks until every task has run to
/// completion. A failing task never cancels its siblings. If several
/// tasks fail, the failure of the earliest-submitted one is returned and
/// the rest are discarded; completion order plays no part in the choice.
///
/// `wait` consumes the group, so submitting after the results are in is
/// ruled out at compile time.
pub struct TaskGroup<'env, E> {
  limit: usize,
  tasks: Vec<Task<'env, E>>,
}

impl<'env, E: Send + 'env> TaskGroup<'env, E> {
  /// Create a group with a concurrency ceiling; a limit of zero means
  /// unbounded (every task is admitted immediately)
  pub fn new(limit: usize) -> Self {
    Self {
      limit,
      tasks: Vec::new(),
    }
  }

  /// Queue one unit of work
  pub fn submit<F>(&mut self, task: F)
  where
    F: FnOnce() -> Result<(), E> + Send + 'env,
  {
    self.tasks.push(Box::new(task));
  }

  /// Number of tasks queued so far
  pub fn len(&self) -> usize {
    self.tasks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }

  /// Run every queued task and block until all of them finish.
  ///
  /// Returns `Ok(())` when every task succeeded, otherwise the error of
  /// the first failing task in submission order.
  pub fn wait(self) -> Result<(), E> {
    if self.tasks.is_empty() {
      return Ok(());
    }

    let workers = match self.limit {
      0 => self.tasks.len(),
      limit => limit.min(self.tasks.len()),
    };

    let (task_tx, task_rx) = channel::unbounded();
    let (failure_tx, failure_rx) = channel::unbounded();
    for task in self.tasks.into_iter().enumerate() {
      // task_rx is still alive, the send cannot fail
      let _ = task_tx.send(task);
    }
    drop(task_tx);

    thread::scope(|scope| {
      for _ in 0..workers {
        let task_rx = task_rx.clone();
        let failure_tx = failure_tx.clone();
        scope.spawn(move || {
          // keep draining after a failure; siblings always run
          while let Ok((index, task)) = task_rx.recv() {
            if let Err(error) = task() {
              let _ = failure_tx.send((index, error));
            }
          }
        });
      }
    });
    drop(failure_tx);

    let mut first: Option<(usize, E)> = None;
    for (index, error) in failure_rx.try_iter() {
      match &first {
        Some((winner, _)) if *winner <= index => {}
        _ => first = Some((index, error)),
      }
    }
    match first {
      Some((_, error)) => Err(error),
      None => Ok(()),
    }
  }
}
