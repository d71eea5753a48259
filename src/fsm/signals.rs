//! Signal lines, light patterns, and sensor samples.
//!
//! The FSM speaks in two small value types:
//!
//! - [`LightPattern`] is the Moore output of a state: one bit per lamp,
//!   set bits are driven high, clear bits are driven low.
//! - [`SensorSample`] is the raw level of the two car detectors, read
//!   once after each dwell expires.
//!
//! ```text
//!  bit   7     6     5     4     3     2     1     0
//!      ┌─────┬─────┬─────┬─────┬─────┬─────┬─────┬─────┐
//!      │ P.G │ P.R │ S.G │ S.Y │ S.R │ W.G │ W.Y │ W.R │
//!      └─────┴─────┴─────┴─────┴─────┴─────┴─────┴─────┘
//!        pedestrian      south             west
//! ```

use core::fmt;

// ---------------------------------------------------------------------------
// Signal lines
// ---------------------------------------------------------------------------

/// One physical lamp at the intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Signal {
    WestRed = 0b0000_0001,
    WestYellow = 0b0000_0010,
    WestGreen = 0b0000_0100,
    SouthRed = 0b0000_1000,
    SouthYellow = 0b0001_0000,
    SouthGreen = 0b0010_0000,
    PedestrianRed = 0b0100_0000,
    PedestrianGreen = 0b1000_0000,
}

impl Signal {
    /// Number of lamps driven by the controller.
    pub const COUNT: usize = 8;

    /// Every lamp, in bit order.  Adapters index their pin arrays with this.
    pub const ALL: [Signal; Self::COUNT] = [
        Self::WestRed,
        Self::WestYellow,
        Self::WestGreen,
        Self::SouthRed,
        Self::SouthYellow,
        Self::SouthGreen,
        Self::PedestrianRed,
        Self::PedestrianGreen,
    ];

    /// Return the bitmask for this lamp.
    pub const fn mask(self) -> u8 {
        self as u8
    }

    /// Position of this lamp in [`Signal::ALL`].
    pub const fn index(self) -> usize {
        (self as u8).trailing_zeros() as usize
    }

    /// The light group this lamp belongs to.
    pub const fn group(self) -> SignalGroup {
        match self {
            Self::WestRed | Self::WestYellow | Self::WestGreen => SignalGroup::West,
            Self::SouthRed | Self::SouthYellow | Self::SouthGreen => SignalGroup::South,
            Self::PedestrianRed | Self::PedestrianGreen => SignalGroup::Pedestrian,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WestRed => write!(f, "west red"),
            Self::WestYellow => write!(f, "west yellow"),
            Self::WestGreen => write!(f, "west green"),
            Self::SouthRed => write!(f, "south red"),
            Self::SouthYellow => write!(f, "south yellow"),
            Self::SouthGreen => write!(f, "south green"),
            Self::PedestrianRed => write!(f, "pedestrian red"),
            Self::PedestrianGreen => write!(f, "pedestrian green"),
        }
    }
}

/// A set of lamps that face the same approach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalGroup {
    West,
    South,
    Pedestrian,
}

impl SignalGroup {
    /// Bits owned by this group.
    pub const fn mask(self) -> u8 {
        match self {
            Self::West => 0b0000_0111,
            Self::South => 0b0011_1000,
            Self::Pedestrian => 0b1100_0000,
        }
    }
}

// ---------------------------------------------------------------------------
// Light pattern (FSM output)
// ---------------------------------------------------------------------------

/// The complete set of lamps asserted while a state is current.
///
/// Lamps not in the pattern are driven low, so writing a pattern always
/// commits every line the controller owns.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LightPattern(u8);

impl LightPattern {
    /// All lamps dark.
    pub const DARK: Self = Self(0);

    /// Build a pattern from a list of lit lamps.
    pub const fn lit(signals: &[Signal]) -> Self {
        let mut bits = 0u8;
        let mut i = 0;
        while i < signals.len() {
            bits |= signals[i].mask();
            i += 1;
        }
        Self(bits)
    }

    /// Raw bitfield, one bit per [`Signal`].
    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_lit(self, signal: Signal) -> bool {
        self.0 & signal.mask() != 0
    }

    /// The bits of this pattern that fall inside `group`.
    pub const fn group_bits(self, group: SignalGroup) -> u8 {
        self.0 & group.mask()
    }

    /// Iterate every lamp with the level it must be driven to.
    pub fn levels(self) -> impl Iterator<Item = (Signal, bool)> {
        Signal::ALL.into_iter().map(move |s| (s, self.is_lit(s)))
    }
}

impl fmt::Debug for LightPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LightPattern(0b{:08b})", self.0)
    }
}

impl fmt::Display for LightPattern {
    /// Compact `W:G S:R P:R` rendering for log lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head = |red: Signal, yellow: Option<Signal>, green: Signal| -> char {
            let mut lit = [' '; 3];
            let mut n = 0;
            if self.is_lit(red) {
                lit[n] = 'R';
                n += 1;
            }
            if yellow.is_some_and(|y| self.is_lit(y)) {
                lit[n] = 'Y';
                n += 1;
            }
            if self.is_lit(green) {
                lit[n] = 'G';
                n += 1;
            }
            match n {
                0 => '-',
                1 => lit[0],
                _ => '*', // more than one lamp in a head is lit
            }
        };
        write!(
            f,
            "W:{} S:{} P:{}",
            head(Signal::WestRed, Some(Signal::WestYellow), Signal::WestGreen),
            head(Signal::SouthRed, Some(Signal::SouthYellow), Signal::SouthGreen),
            head(Signal::PedestrianRed, None, Signal::PedestrianGreen),
        )
    }
}

// ---------------------------------------------------------------------------
// Sensor sample (FSM input)
// ---------------------------------------------------------------------------

/// Raw level of both car detectors.  No debouncing, no edge detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SensorSample {
    /// A car is waiting on the west approach.
    pub west: bool,
    /// A car is waiting on the south approach.
    pub south: bool,
}

impl SensorSample {
    /// Every possible sample, ordered by [`SensorSample::index`].
    pub const ALL: [SensorSample; 4] = [
        Self::new(false, false),
        Self::new(false, true),
        Self::new(true, false),
        Self::new(true, true),
    ];

    pub const fn new(west: bool, south: bool) -> Self {
        Self { west, south }
    }

    /// Two-bit code `west:south`, in `0..4`.
    pub const fn index(self) -> usize {
        ((self.west as usize) << 1) | self.south as usize
    }
}

impl fmt::Display for SensorSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", u8::from(self.west), u8::from(self.south))
    }
}
