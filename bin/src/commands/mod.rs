//! CLI command implementations.

pub(crate) mod candle;
pub(crate) mod columns;
pub(crate) mod reverse;
