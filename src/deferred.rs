//! Single-shot deferred tasks.
//!
//! Work scheduled here runs after the current dispatch completes, when the
//! host next calls into the drain path. Tasks are tagged with the epoch at
//! schedule time; bumping the epoch cancels everything still pending, so a
//! recomputation queued before the panel closed is discarded instead of
//! writing a stale position.

#[derive(Debug)]
pub struct TickQueue<T> {
    epoch: u64,
    tasks: Vec<(u64, T)>,
}

impl<T> Default for TickQueue<T> {
    fn default() -> Self {
        Self {
            epoch: 0,
            tasks: Vec::new(),
        }
    }
}

impl<T> TickQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, task: T) {
        self.tasks.push((self.epoch, task));
    }

    /// Invalidate every task scheduled so far.
    pub fn bump_epoch(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.tasks.clear();
    }

    /// Take the pending tasks that are still current, in scheduling order.
    pub fn drain(&mut self) -> Vec<T> {
        let epoch = self.epoch;
        self.tasks
            .drain(..)
            .filter_map(|(tagged, task)| (tagged == epoch).then_some(task))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
