//! Public library API for decoding captured game-stream packet blocks.

/// Block cursor, value tree, decoder registry, and block-dump reading.
pub mod packet;
