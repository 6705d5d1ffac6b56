pub mod carousel;
pub mod constants;
pub mod contact;
pub mod fps;
pub mod input;
pub mod mesh;
pub mod nav;
pub mod state;
pub mod tween;

pub use carousel::*;
pub use constants::*;
pub use state::*;
