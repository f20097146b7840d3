//! Rendering of the annealing demo.
//!
//! Each frame shows the current tour on the left and the running
//! energy trace on the right. The animation is written as a GIF, with
//! an optional PNG snapshot of any single state.

mod animate;
mod frame;

pub use animate::{animate_gif, render_png, FRAME_SIZE};
pub use frame::draw_frame;
