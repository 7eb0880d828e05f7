// Presentation layer - Display surface trait and terminal renderer
pub mod surface;
pub mod terminal;
