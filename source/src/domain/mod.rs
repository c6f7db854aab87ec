//! Recording loop and observation value policy

pub mod recorder;
pub mod ticker;
pub mod values;

pub use recorder::ObservationSink;
