/// Single-block decode command.
pub mod decode;
/// Decoder registry listing command.
pub mod decoders;
/// Block-dump decode command.
pub mod dump;
/// Block-dump summary command.
pub mod info;
/// Shared CLI parsing and rendering helpers.
pub mod util;
