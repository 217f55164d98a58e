/// Difficulty preset, fixed for a session at the mode-select screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Impossible,
}

impl Mode {
    /// Starting tick rate in ticks per second.
    pub fn initial_speed(self) -> u32 {
        match self {
            Self::Normal => 5,
            Self::Impossible => 15,
        }
    }

    /// Segments prepended per food eaten.
    pub fn growth(self) -> usize {
        match self {
            Self::Normal => 1,
            Self::Impossible => 5,
        }
    }

    /// Whether eating food raises the tick rate.
    pub fn speed_ramps(self) -> bool {
        matches!(self, Self::Normal)
    }
}
