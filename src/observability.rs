use biometrics::{Collector, Counter, Moments};

pub(crate) static CLIENT_REQUESTS: Counter = Counter::new("ragline.client.requests");
pub(crate) static CLIENT_REQUEST_ERRORS: Counter = Counter::new("ragline.client.request_errors");
pub(crate) static CLIENT_REQUEST_DURATION: Moments =
    Moments::new("ragline.client.request_duration_seconds");

pub(crate) static SUBMITS: Counter = Counter::new("ragline.controller.submits");
pub(crate) static SUBMITS_EMPTY: Counter = Counter::new("ragline.controller.submits_empty");
pub(crate) static SUBMITS_BUSY: Counter = Counter::new("ragline.controller.submits_busy");
pub(crate) static TURNS_ANSWERED: Counter = Counter::new("ragline.controller.turns_answered");
pub(crate) static TURNS_FAILED: Counter = Counter::new("ragline.controller.turns_failed");

/// Register this crate's biometrics with the provided collector.
pub fn register_biometrics(collector: Collector) {
    collector.register_counter(&CLIENT_REQUESTS);
    collector.register_counter(&CLIENT_REQUEST_ERRORS);
    collector.register_moments(&CLIENT_REQUEST_DURATION);

    collector.register_counter(&SUBMITS);
    collector.register_counter(&SUBMITS_EMPTY);
    collector.register_counter(&SUBMITS_BUSY);
    collector.register_counter(&TURNS_ANSWERED);
    collector.register_counter(&TURNS_FAILED);
}
