// Domain layer - Zone reports, merging, clock formatting
pub mod clock;
pub mod zone;
