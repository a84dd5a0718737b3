use std::time::Duration;

use dioxus::prelude::*;
use quiz_core::Clock;
use quiz_core::attempt::QuizAttempt;

const TICK: Duration = Duration::from_secs(1);

/// Samples the dwell time of one question index once per second.
///
/// Dropping the timer cancels its task, so replacing it on navigation or dropping
/// the owning scope stops the sampling. A tick that lands after the attempt moved
/// to another index writes nothing.
pub struct QuestionTimer {
    task: Task,
}

impl QuestionTimer {
    /// Spawn the sampling task for `index` in the current scope.
    pub fn start(index: usize, mut attempt: Signal<Option<QuizAttempt>>, clock: Signal<Clock>) -> Self {
        let task = spawn(async move {
            loop {
                tokio::time::sleep(TICK).await;
                let now = clock.peek().now();
                let mut guard = attempt.write();
                if let Some(attempt) = guard.as_mut() {
                    if attempt.current_index() == index {
                        attempt.record_dwell(now);
                    }
                }
            }
        });
        Self { task }
    }
}

impl Drop for QuestionTimer {
    fn drop(&mut self) {
        self.task.cancel();
    }
}

/// Keep one `QuestionTimer` running for the current question of `attempt`.
pub fn use_question_timer(attempt: Signal<Option<QuizAttempt>>, clock: Signal<Clock>) {
    let current_index = use_memo(move || attempt.read().as_ref().map(QuizAttempt::current_index));
    let mut timer = use_signal(|| None::<QuestionTimer>);

    use_effect(move || {
        let index = current_index();
        // Replacing the old value drops it, which cancels its task.
        timer.set(index.map(|index| QuestionTimer::start(index, attempt, clock)));
    });
}
