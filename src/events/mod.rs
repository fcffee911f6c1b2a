pub mod controls;
pub mod pointer;

pub use controls::{wire_resize, wire_sliders};
pub use pointer::wire_input_handlers;
