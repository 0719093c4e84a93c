use crossterm::style::Color;

/// Semantic colours for menu output.
///
/// Everything styled goes through these tokens so a palette change stays in
/// one place.
pub mod colors {
    use super::Color;

    /// Breadcrumb line
    pub const INFO: Color = Color::Cyan;
    /// Failed action messages
    pub const ERROR: Color = Color::Red;
    /// Farewell and hints
    pub const DIM: Color = Color::DarkGrey;
}
