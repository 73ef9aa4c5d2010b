pub mod rng;
pub mod viewport;

pub use rng::Rng;
pub use viewport::Viewport;
