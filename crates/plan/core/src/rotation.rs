//! Re-orienting zone placements so the road side becomes South.
//!
//! A placement is free text entered by the user: a compass name, a compass
//! name followed by a positional suffix (`"South wall"`), or one of the
//! directionless sentinels. Rotation never fails. Anything that does not
//! resolve to the ring comes back exactly as it went in.

use core::fmt;

use crate::direction::CompassDirection;

/// Placement values that carry no spatial direction and are never rotated.
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
pub enum Sentinel {
    /// Middle of the plot.
    Center,
    /// Joined to another room (e.g. an en-suite bathroom).
    Attached,
}

/// Parsed view of a placement string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QualifiedDirection<'a> {
    Empty,
    Sentinel(Sentinel),
    /// A ring direction plus opaque trailing text. A non-empty `suffix`
    /// starts with the space that separated it from the base token.
    Compass {
        base: CompassDirection,
        suffix: &'a str,
    },
    /// Base token is not a ring name. Holds the full original input.
    Unmapped(&'a str),
}

impl<'a> QualifiedDirection<'a> {
    pub fn parse(input: &'a str) -> Self {
        if input.is_empty() {
            return Self::Empty;
        }
        if let Ok(sentinel) = input.parse::<Sentinel>() {
            return Self::Sentinel(sentinel);
        }

        let (token, suffix) = match input.find(' ') {
            Some(split) => input.split_at(split),
            None => (input, ""),
        };

        match CompassDirection::parse_normalized(token) {
            Some(base) => Self::Compass { base, suffix },
            None => Self::Unmapped(input),
        }
    }
}

impl fmt::Display for QualifiedDirection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Sentinel(sentinel) => write!(f, "{sentinel}"),
            Self::Compass { base, suffix } => write!(f, "{base}{suffix}"),
            Self::Unmapped(raw) => f.write_str(raw),
        }
    }
}

/// What [`Rotation::apply_traced`] did with its input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum RotationOutcome {
    /// A ring direction was moved by the rotation shift.
    Rotated,
    /// Sentinel or empty input; rotation does not apply.
    PassedThrough,
    /// The base token (or the road) was not a ring name; input returned as-is.
    Unrecognized,
}

/// A layout rotation that turns the road-facing side into South.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rotation {
    road: CompassDirection,
    shift: i32,
}

impl Rotation {
    pub const fn new(road: CompassDirection) -> Self {
        Self {
            road,
            shift: CompassDirection::shift_to_south(road),
        }
    }

    /// Resolves the road by exact ring name. `None` for anything else.
    pub fn from_road_name(road: &str) -> Option<Self> {
        CompassDirection::parse_exact(road).map(Self::new)
    }

    pub const fn road(&self) -> CompassDirection {
        self.road
    }

    pub const fn shift(&self) -> i32 {
        self.shift
    }

    pub const fn apply_direction(&self, direction: CompassDirection) -> CompassDirection {
        direction.shifted(self.shift)
    }

    pub fn apply(&self, direction: &str) -> String {
        self.apply_traced(direction).0
    }

    /// Rotates `direction` and reports whether a rotation actually happened.
    pub fn apply_traced(&self, direction: &str) -> (String, RotationOutcome) {
        match QualifiedDirection::parse(direction) {
            QualifiedDirection::Compass { base, suffix } => {
                let rotated = self.apply_direction(base);
                (format!("{rotated}{suffix}"), RotationOutcome::Rotated)
            }
            QualifiedDirection::Empty | QualifiedDirection::Sentinel(_) => {
                (direction.to_string(), RotationOutcome::PassedThrough)
            }
            QualifiedDirection::Unmapped(raw) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(placement = raw, road = %self.road, "placement not on compass ring, left unrotated");
                (raw.to_string(), RotationOutcome::Unrecognized)
            }
        }
    }

    /// `(original, rotated)` for every ring member.
    pub fn table(&self) -> [(CompassDirection, CompassDirection); CompassDirection::RING_LEN] {
        CompassDirection::RING.map(|dir| (dir, self.apply_direction(dir)))
    }
}

/// Rotates a placement string for a plot whose road side is `road_facing`.
///
/// Sentinels and empty input are returned unchanged, as is any input whose
/// base token or road is not one of the eight ring names. A suffix after the
/// first space is reattached verbatim.
///
/// ```
/// use plan_core::rotate;
///
/// assert_eq!(rotate("East", "East"), "South");
/// assert_eq!(rotate("South wall", "East"), "West wall");
/// assert_eq!(rotate("Center", "North"), "Center");
/// assert_eq!(rotate("Upward", "East"), "Upward");
/// ```
pub fn rotate(direction: &str, road_facing: &str) -> String {
    rotate_traced(direction, road_facing).0
}

/// Like [`rotate`], also reporting the [`RotationOutcome`].
pub fn rotate_traced(direction: &str, road_facing: &str) -> (String, RotationOutcome) {
    let parsed = QualifiedDirection::parse(direction);
    if matches!(parsed, QualifiedDirection::Empty | QualifiedDirection::Sentinel(_)) {
        return (direction.to_string(), RotationOutcome::PassedThrough);
    }

    match Rotation::from_road_name(road_facing) {
        Some(rotation) => rotation.apply_traced(direction),
        None => {
            #[cfg(feature = "tracing")]
            tracing::debug!(road = road_facing, "road not on compass ring, placement left unrotated");
            (direction.to_string(), RotationOutcome::Unrecognized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_at_first_space() {
        assert_eq!(
            QualifiedDirection::parse("South wall"),
            QualifiedDirection::Compass {
                base: CompassDirection::South,
                suffix: " wall"
            }
        );
        assert_eq!(
            QualifiedDirection::parse("north east corner"),
            QualifiedDirection::Compass {
                base: CompassDirection::North,
                suffix: " east corner"
            }
        );
    }

    #[test]
    fn parse_recognizes_sentinels_and_empty() {
        assert_eq!(QualifiedDirection::parse(""), QualifiedDirection::Empty);
        assert_eq!(
            QualifiedDirection::parse("Center"),
            QualifiedDirection::Sentinel(Sentinel::Center)
        );
        assert_eq!(
            QualifiedDirection::parse("Attached"),
            QualifiedDirection::Sentinel(Sentinel::Attached)
        );
        // Sentinels match exactly; lowercase falls through to the ring lookup.
        assert_eq!(QualifiedDirection::parse("center"), QualifiedDirection::Unmapped("center"));
    }

    #[test]
    fn parse_keeps_unmapped_input_whole() {
        assert_eq!(
            QualifiedDirection::parse("Upward slope"),
            QualifiedDirection::Unmapped("Upward slope")
        );
    }

    #[test]
    fn display_round_trips_text() {
        for input in ["", "Center", "West wall", "Upward", "Northeast"] {
            assert_eq!(QualifiedDirection::parse(input).to_string(), input);
        }
        assert_eq!(QualifiedDirection::parse("west wall").to_string(), "West wall");
    }

    #[test]
    fn east_road_table() {
        let rotation = Rotation::new(CompassDirection::East);
        assert_eq!(rotation.shift(), 2);

        let expected = [
            ("North", "East"),
            ("Northeast", "Southeast"),
            ("East", "South"),
            ("Southeast", "Southwest"),
            ("South", "West"),
            ("Southwest", "Northwest"),
            ("West", "North"),
            ("Northwest", "Northeast"),
        ];
        for (input, output) in expected {
            assert_eq!(rotation.apply(input), output, "rotating {input}");
            assert_eq!(rotate(input, "East"), output);
        }
    }

    #[test]
    fn suffix_is_reattached_verbatim() {
        assert_eq!(rotate("South wall", "East"), "West wall");
        assert_eq!(rotate("north  double  space", "West"), "West  double  space");
        assert_eq!(rotate("North wall", "South"), "North wall");
    }

    #[test]
    fn first_letter_is_normalized() {
        assert_eq!(rotate("southwest", "East"), "Northwest");
        assert_eq!(rotate("southwest wall", "East"), "Northwest wall");
    }

    #[test]
    fn sentinels_and_empty_pass_through() {
        for road in ["North", "East", "Nowhere", ""] {
            assert_eq!(rotate("Center", road), "Center");
            assert_eq!(rotate("Attached", road), "Attached");
            assert_eq!(rotate("", road), "");
        }
    }

    #[test]
    fn unknown_tokens_fall_back_to_input() {
        assert_eq!(rotate("Upward", "East"), "Upward");
        assert_eq!(rotate("SOUTH", "East"), "SOUTH");
        assert_eq!(rotate("North", "east"), "North");
        assert_eq!(rotate("North wall", "Sideways"), "North wall");
    }

    #[test]
    fn traced_outcomes() {
        assert_eq!(rotate_traced("East", "East").1, RotationOutcome::Rotated);
        assert_eq!(rotate_traced("Center", "East").1, RotationOutcome::PassedThrough);
        assert_eq!(rotate_traced("Upward", "East").1, RotationOutcome::Unrecognized);
        assert_eq!(rotate_traced("East", "Upward").1, RotationOutcome::Unrecognized);
        assert_eq!(RotationOutcome::PassedThrough.to_string(), "passed_through");
    }

    #[test]
    fn table_covers_ring() {
        let table = Rotation::new(CompassDirection::North).table();
        assert_eq!(table[0], (CompassDirection::North, CompassDirection::South));
        assert_eq!(table[4], (CompassDirection::South, CompassDirection::North));
    }
}
