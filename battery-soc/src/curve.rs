//! Voltage to state-of-charge curves.
//!
//! A [`Curve`] is a `'static` table of [`Knot`]s sorted by strictly
//! increasing voltage. Lookups clamp to the first and last knot and
//! interpolate linearly in between using Q8 fixed point, so every knot
//! voltage maps back to its own percentage exactly.

use core::fmt;

/// One calibration point: cell voltage and the charge it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Knot {
    pub mv: u16,
    pub pct: u8,
}

impl Knot {
    pub const fn new(mv: u16, pct: u8) -> Self {
        Self { mv, pct }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    /// Fewer than two knots; there is nothing to interpolate between.
    TooShort,
    /// Knot voltage is not above the previous knot's.
    NotIncreasing { index: usize },
    /// Knot percentage is below the previous knot's.
    PercentDecreasing { index: usize },
    /// Knot percentage is above 100.
    PercentOutOfRange { index: usize },
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurveError::TooShort => write!(f, "curve needs at least two knots"),
            CurveError::NotIncreasing { index } => {
                write!(f, "knot {} voltage not above knot {}", index, index - 1)
            }
            CurveError::PercentDecreasing { index } => {
                write!(f, "knot {} percentage below knot {}", index, index - 1)
            }
            CurveError::PercentOutOfRange { index } => {
                write!(f, "knot {} percentage above 100", index)
            }
        }
    }
}

/// Validated, immutable knot table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Curve {
    knots: &'static [Knot],
}

impl Curve {
    pub const fn new(knots: &'static [Knot]) -> Result<Self, CurveError> {
        if knots.len() < 2 {
            return Err(CurveError::TooShort);
        }
        let mut i = 0;
        while i < knots.len() {
            if knots[i].pct > 100 {
                return Err(CurveError::PercentOutOfRange { index: i });
            }
            if i > 0 {
                if knots[i].mv <= knots[i - 1].mv {
                    return Err(CurveError::NotIncreasing { index: i });
                }
                if knots[i].pct < knots[i - 1].pct {
                    return Err(CurveError::PercentDecreasing { index: i });
                }
            }
            i += 1;
        }
        Ok(Self { knots })
    }

    /// Build a curve from a table known at compile time.
    ///
    /// Panics on an invalid table; in a `const` item that is a build error.
    pub const fn from_table(knots: &'static [Knot]) -> Self {
        match Self::new(knots) {
            Ok(curve) => curve,
            Err(_) => panic!("invalid battery curve table"),
        }
    }

    pub const fn knots(&self) -> &'static [Knot] {
        self.knots
    }

    pub const fn first(&self) -> Knot {
        self.knots[0]
    }

    pub const fn last(&self) -> Knot {
        self.knots[self.knots.len() - 1]
    }

    /// State of charge in percent for a cell voltage.
    pub fn lookup(&self, mv: u16) -> u8 {
        let first = self.first();
        let last = self.last();
        if mv <= first.mv {
            return first.pct;
        }
        if mv >= last.mv {
            return last.pct;
        }

        // invariant: knots[lo].mv <= mv < knots[hi].mv
        let mut lo = 0;
        let mut hi = self.knots.len() - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if mv < self.knots[mid].mv {
                hi = mid;
            } else {
                lo = mid;
            }
        }

        interpolate(self.knots[lo], self.knots[hi], mv)
    }
}

// Q8 linear interpolation; rounds to nearest with +128 before the shift.
fn interpolate(low: Knot, high: Knot, mv: u16) -> u8 {
    let span_mv = (high.mv - low.mv) as u32;
    let off_mv = (mv - low.mv) as u32;
    let span_pct_q8 = (high.pct - low.pct) as u32 * 256;
    let interp_q8 = span_pct_q8 * off_mv / span_mv;
    let pct_q8 = low.pct as u32 * 256 + interp_q8;
    ((pct_q8 + 128) >> 8) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curves;

    const THREE: Curve = Curve::from_table(&[
        Knot { mv: 3000, pct: 0 },
        Knot { mv: 3500, pct: 20 },
        Knot { mv: 4200, pct: 100 },
    ]);

    fn all_curves() -> [Curve; 4] {
        [
            THREE,
            curves::DISCHARGE_DENSE,
            curves::CHARGING,
            curves::DISCHARGING,
        ]
    }

    #[test]
    fn interpolates_inside_bracket() {
        // 20 + 80 * 250 / 700 = 48.57
        assert_eq!(THREE.lookup(3750), 49);
    }

    #[test]
    fn clamps_outside_table() {
        for curve in all_curves() {
            let (first, last) = (curve.first(), curve.last());
            assert_eq!(curve.lookup(0), first.pct);
            assert_eq!(curve.lookup(first.mv), first.pct);
            assert_eq!(curve.lookup(first.mv.saturating_sub(1)), first.pct);
            assert_eq!(curve.lookup(last.mv), last.pct);
            assert_eq!(curve.lookup(last.mv + 1), last.pct);
            assert_eq!(curve.lookup(u16::MAX), last.pct);
        }
    }

    #[test]
    fn knots_map_back_exactly() {
        for curve in all_curves() {
            for knot in curve.knots() {
                assert_eq!(curve.lookup(knot.mv), knot.pct, "knot {}mV", knot.mv);
            }
        }
    }

    #[test]
    fn lookup_is_monotonic() {
        for curve in all_curves() {
            let mut prev = 0;
            for mv in 2800..=4400 {
                let pct = curve.lookup(mv);
                assert!(pct >= prev, "{}mV gave {}% after {}%", mv, pct, prev);
                assert!(pct <= 100);
                prev = pct;
            }
        }
    }

    #[test]
    fn rounds_to_nearest() {
        // 0 + 20 * 12 / 500 = 0.48 -> 0, 0 + 20 * 13 / 500 = 0.52 -> 1
        assert_eq!(THREE.lookup(3012), 0);
        assert_eq!(THREE.lookup(3013), 1);
    }

    #[test]
    fn rejects_bad_tables() {
        static SHORT: [Knot; 1] = [Knot { mv: 3000, pct: 0 }];
        static FLAT: [Knot; 3] = [
            Knot { mv: 3000, pct: 0 },
            Knot { mv: 3400, pct: 10 },
            Knot { mv: 3400, pct: 20 },
        ];
        static FALLING: [Knot; 2] = [Knot { mv: 3000, pct: 30 }, Knot { mv: 3400, pct: 10 }];
        static OVER: [Knot; 2] = [Knot { mv: 3000, pct: 0 }, Knot { mv: 4200, pct: 101 }];

        assert_eq!(Curve::new(&SHORT), Err(CurveError::TooShort));
        assert_eq!(Curve::new(&FLAT), Err(CurveError::NotIncreasing { index: 2 }));
        assert_eq!(
            Curve::new(&FALLING),
            Err(CurveError::PercentDecreasing { index: 1 })
        );
        assert_eq!(
            Curve::new(&OVER),
            Err(CurveError::PercentOutOfRange { index: 1 })
        );
    }
}
