mod tracing_progress;

pub use tracing_progress::TracingProgress;
