/// One of the four axis-aligned steps on the cell lattice.
///
/// Discriminants run clockwise starting at `Up`, so turning is index
/// arithmetic modulo four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    /// All directions in clockwise order, starting at `Up`.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    const STEPS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

    /// Position of this direction in [`Direction::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the direction a quarter turn clockwise.
    #[must_use]
    pub const fn clockwise(self) -> Self {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// Returns the direction a quarter turn counter-clockwise.
    #[must_use]
    pub const fn counter_clockwise(self) -> Self {
        Self::ALL[(self.index() + 3) % 4]
    }

    /// Returns the direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::ALL[(self.index() + 2) % 4]
    }

    /// Unit step `(dx, dy)`. `Up` increases `y`.
    #[must_use]
    pub const fn vector(self) -> (i32, i32) {
        Self::STEPS[self.index()]
    }

    /// Classifies a unit axis-aligned step, or `None` for anything else.
    #[must_use]
    pub fn from_step(dx: i64, dy: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|d| {
            let (x, y) = d.vector();
            (i64::from(x), i64::from(y)) == (dx, dy)
        })
    }
}
