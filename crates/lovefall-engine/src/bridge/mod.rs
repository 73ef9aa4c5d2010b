pub mod protocol;

pub use protocol::{FrameHeader, HEADER_FLOATS, PROTOCOL_VERSION};
