//! Bounded line counter used to sweep one side of the image

/// Direction a stepper moves when advancing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward larger indices
    Forward,
    /// Toward smaller indices
    Backward,
}

/// Counter that advances one step at a time toward a bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedStepper {
    value: u32,
    bound: u32,
    direction: Direction,
}

impl BoundedStepper {
    /// Stepper counting up from `start` to at most `bound`
    pub fn forward(start: u32, bound: u32) -> Self {
        Self {
            value: start,
            bound,
            direction: Direction::Forward,
        }
    }

    /// Stepper counting down from `start` to at least `bound`
    pub fn backward(start: u32, bound: u32) -> Self {
        Self {
            value: start,
            bound,
            direction: Direction::Backward,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether another advance would pass the bound
    pub fn at_bound(&self) -> bool {
        match self.direction {
            Direction::Forward => self.value >= self.bound,
            Direction::Backward => self.value <= self.bound,
        }
    }

    /// Move one step toward the bound. Returns false, without moving, when
    /// the stepper already sits on its bound.
    pub fn advance(&mut self) -> bool {
        if self.at_bound() {
            return false;
        }
        self.value = match self.direction {
            Direction::Forward => self.value + 1,
            Direction::Backward => self.value - 1,
        };
        true
    }

    /// Move one step away from the bound
    pub fn retreat(&mut self) {
        self.value = match self.direction {
            Direction::Forward => self.value.saturating_sub(1),
            Direction::Backward => self.value.saturating_add(1),
        };
    }
}
