// Vasudeva Translation Direction

use strum_macros::{AsRefStr, Display, EnumString};

/// Which way a translation runs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    /// Source letters to glyphs
    #[default]
    #[strum(to_string = "forward", serialize = "encode")]
    Forward,
    /// Glyphs to source letters
    #[strum(to_string = "reverse", serialize = "decode")]
    Reverse,
}
