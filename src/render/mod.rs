//! Text rendering of round state.
//!
//! Everything here is a pure function of its inputs. Rendering never
//! touches the round, so it can be called any number of times.

mod stages;
mod view;

pub use stages::{render_stage, STAGES};
pub use view::{render_progress, render_progress_with, RoundView};
