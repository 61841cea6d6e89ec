use crate::error::ConfigError;

/// Half-open `[lower, upper)` range of template indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexRange {
    lower: u32,
    upper: u32,
}

impl IndexRange {
    pub fn new(lower: u32, upper: u32) -> Result<Self, ConfigError> {
        if upper < lower {
            return Err(ConfigError::UpperBelowLower { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> u32 {
        self.lower
    }

    pub fn upper(&self) -> u32 {
        self.upper
    }

    pub fn len(&self) -> usize {
        (self.upper - self.lower) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.upper == self.lower
    }

    pub fn to_iter(&self) -> impl Iterator<Item = u32> + use<> {
        self.lower..self.upper
    }
}
