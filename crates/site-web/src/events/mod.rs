pub mod keyboard;
pub mod pointer;
pub mod scroll;
pub mod ui;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_cells, wire_particle_pointer};
pub use scroll::{measure_and_dispatch, wire_scroll};
pub use ui::wire_ui;
