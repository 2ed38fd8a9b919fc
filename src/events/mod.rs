mod event;
#[cfg(test)]
mod recording;
mod tracing_observer;

pub use event::Event;
#[cfg(test)]
pub use recording::RecordingObserver;
pub use tracing_observer::TracingObserver;

/// Receives the events the pipeline components emit while they work.
///
/// Components never log through a global; the binary decides where events go by
/// choosing the observer it injects.
pub trait Observer {
    fn notify(&self, event: &Event);
}

impl<O: Observer + ?Sized> Observer for &O {
    fn notify(&self, event: &Event) {
        (**self).notify(event)
    }
}
