// Report assembly and delivery.
// Flow: normalise → rank catalog → aggregate buckets → assemble → optional enhancement.

pub mod assembler;
pub mod enhancer;
pub mod handlers;
pub mod pipeline;
