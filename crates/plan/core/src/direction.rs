//! The eight-point compass ring.
//!
//! Directions are stored in ring order, so rotating a layout is a modular
//! shift of ring indices. Adjacent members are 45° apart.

/// One of the eight compass points, declared in ring order.
///
/// Display and parse names are the variant names exactly (`"Northeast"`,
/// not `"NorthEast"`), matching the option values the plan wizard offers.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompassDirection {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl CompassDirection {
    /// Number of members in the rotation ring.
    pub const RING_LEN: usize = 8;

    /// Ring index of South, the fixed point every rotation aligns the road to.
    pub const SOUTH_INDEX: usize = 4;

    /// The rotation ring. Order is significant.
    pub const RING: [CompassDirection; Self::RING_LEN] = [
        CompassDirection::North,
        CompassDirection::Northeast,
        CompassDirection::East,
        CompassDirection::Southeast,
        CompassDirection::South,
        CompassDirection::Southwest,
        CompassDirection::West,
        CompassDirection::Northwest,
    ];

    /// Position of this direction in [`Self::RING`].
    pub const fn index(self) -> usize {
        match self {
            CompassDirection::North => 0,
            CompassDirection::Northeast => 1,
            CompassDirection::East => 2,
            CompassDirection::Southeast => 3,
            CompassDirection::South => 4,
            CompassDirection::Southwest => 5,
            CompassDirection::West => 6,
            CompassDirection::Northwest => 7,
        }
    }

    /// Ring member at `index`, wrapping past the end of the ring.
    pub const fn from_index(index: usize) -> Self {
        Self::RING[index % Self::RING_LEN]
    }

    /// Moves `shift` steps clockwise around the ring (negative is
    /// counter-clockwise).
    pub const fn shifted(self, shift: i32) -> Self {
        let len = Self::RING_LEN as i32;
        let index = ((self.index() as i32 + shift) % len + len) % len;
        Self::from_index(index as usize)
    }

    /// Shift that carries `road` onto South.
    pub const fn shift_to_south(road: CompassDirection) -> i32 {
        Self::SOUTH_INDEX as i32 - road.index() as i32
    }

    pub const fn opposite(self) -> Self {
        self.shifted(4)
    }

    /// Heading in degrees, clockwise from North.
    pub const fn degrees(self) -> u16 {
        self.index() as u16 * 45
    }

    /// Exact, case-sensitive lookup of a ring name.
    pub fn parse_exact(token: &str) -> Option<Self> {
        token.parse().ok()
    }

    /// Ring lookup after upper-casing the first character of `token`.
    ///
    /// Only the first character is touched: `"south"` resolves, `"SOUTH"`
    /// and `"northEast"` do not.
    pub fn parse_normalized(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let first = chars.next()?;
        let mut normalized = String::with_capacity(token.len());
        normalized.extend(first.to_uppercase());
        normalized.push_str(chars.as_str());
        Self::parse_exact(&normalized)
    }
}
