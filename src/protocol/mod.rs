pub mod filters;
pub mod payloads;
pub mod tracks;

pub use filters::*;
pub use payloads::*;
pub use tracks::*;
