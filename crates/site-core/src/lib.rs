pub mod constants;
pub mod content;
pub mod error;
pub mod ignite;
pub mod interaction;
pub mod modal;
pub mod nav;
pub mod page;
pub mod particles;
pub mod sound;
pub mod tracker;
pub mod typing;

pub use constants::*;
pub use content::*;
pub use error::*;
pub use ignite::*;
pub use interaction::*;
pub use modal::*;
pub use nav::*;
pub use page::*;
pub use particles::*;
pub use sound::*;
pub use tracker::*;
pub use typing::*;

// Shaders bundled as string constants
pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");
pub static HAZE_WGSL: &str = include_str!("../shaders/haze.wgsl");
