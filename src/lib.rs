#[macro_use]
extern crate tracing;

pub mod dns;
pub mod extract;
pub mod pipeline;
pub mod report;
pub mod resources;
