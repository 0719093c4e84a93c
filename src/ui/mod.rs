//! Console presentation: colours, capability detection, styled text

pub mod context;
pub mod primitives;
pub mod terminal;
pub mod theme;
