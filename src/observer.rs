//! Step observer trait for monitoring simulation progress.

/// Trait for observing simulation steps.
///
/// Implement this to watch ground contacts or per-spring progress (debugging,
/// visualization, profiling). All methods have default no-op implementations.
pub trait StepObserver {
    /// Called when a particle was found below the floor and clamped onto it.
    fn on_ground_contact(&mut self, _particle: usize) {}

    /// Called after one spring of a particle has been integrated.
    fn on_spring_integrated(&mut self, _particle: usize, _spring: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Use as default when no observation is needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Observer that reports contacts through `tracing`.
///
/// Emits a `trace` event per contact and a `debug` summary per step.
#[derive(Debug, Default)]
pub struct TracingObserver {
    steps: u64,
    contacts_this_step: usize,
    total_contacts: u64,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> u64 { self.steps }
    pub fn total_contacts(&self) -> u64 { self.total_contacts }
}

impl StepObserver for TracingObserver {
    fn on_ground_contact(&mut self, particle: usize) {
        tracing::trace!(step = self.steps, particle, "ground contact");
        self.contacts_this_step += 1;
    }

    fn on_step_complete(&mut self) {
        tracing::debug!(step = self.steps, contacts = self.contacts_this_step, "step complete");
        self.total_contacts += self.contacts_this_step as u64;
        self.contacts_this_step = 0;
        self.steps += 1;
    }
}
