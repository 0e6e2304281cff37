pub mod cells;
pub mod hero;
pub mod markup;
pub mod modal;
pub mod nav;
pub mod style;
