mod positions;

pub use positions::{normalize, CursorPosition, Select};
