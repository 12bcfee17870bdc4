//! Impls - port implementations.
//!
//! - **NearestUnit**: the dispatcher's assignment policy
//! - **TracingEventSink** / **ChannelEventSink** / **FanoutEventSink** / **NoopEventSink**

pub mod nearest;
pub mod sinks;

pub use self::nearest::NearestUnit;
pub use self::sinks::{ChannelEventSink, FanoutEventSink, NoopEventSink, TracingEventSink};
