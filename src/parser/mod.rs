//! Doodle Reader Module
//!
//! Parses token sequences into expression trees.

mod reader;

pub use reader::{
    read_atom, read_block, read_blocks, read_expression, read_hash_map, read_sequence, read_str,
    read_string_literal, try_read_str, BlockKind, Reader, StatementKind, MAX_DEPTH,
};
