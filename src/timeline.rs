pub mod completion;
pub mod plan;
pub mod sequencer;
pub mod timings;
