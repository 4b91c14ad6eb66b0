pub mod constants;
pub mod contact;
pub mod content;
pub mod interaction;
pub mod markup;
pub mod particles;
pub mod reveal;

pub use contact::*;
pub use interaction::*;
pub use particles::*;
pub use reveal::*;
