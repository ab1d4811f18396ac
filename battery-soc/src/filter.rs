//! Trimmed-mean voltage sampling.
//!
//! One burst reads `samples` conversions back to back, drops the lowest
//! and the highest reading and averages the rest. The pin voltage is then
//! scaled up through the resistor divider to the cell voltage and
//! saturated to `u16`.

/// Burst length used by both board variants.
pub const DEFAULT_SAMPLES: usize = 8;

/// A calibrated millivolt reading from one ADC channel.
///
/// Errors are hardware faults; the estimator hands them straight back to
/// its caller.
pub trait MilliVoltSource {
    type Error: core::fmt::Debug;

    fn read_mv(&mut self) -> Result<u16, Self::Error>;
}

impl<T: MilliVoltSource + ?Sized> MilliVoltSource for &mut T {
    type Error = T::Error;

    #[inline]
    fn read_mv(&mut self) -> Result<u16, Self::Error> {
        (**self).read_mv()
    }
}

/// Resistor divider between the cell and the ADC pin, as `num / den`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Divider {
    pub num: u32,
    pub den: u32,
}

impl Divider {
    /// Pin wired straight to the cell.
    pub const DIRECT: Self = Self::new(1, 1);
    /// Two equal resistors; the pin sees half the cell voltage.
    pub const HALF: Self = Self::new(2, 1);

    pub const fn new(num: u32, den: u32) -> Self {
        assert!(den != 0, "divider denominator must be non-zero");
        Self { num, den }
    }

    /// Scale a pin voltage to the cell voltage, saturating at `u16::MAX`.
    pub const fn scale(self, pin_mv: u32) -> u16 {
        let mv = pin_mv as u64 * self.num as u64 / self.den as u64;
        if mv > u16::MAX as u64 {
            u16::MAX
        } else {
            mv as u16
        }
    }
}

/// Running sum and extrema over one sample burst.
#[derive(Debug, Clone, Copy)]
pub struct TrimmedMean {
    sum: u32,
    min: u16,
    max: u16,
    count: u32,
}

impl Default for TrimmedMean {
    fn default() -> Self {
        Self::new()
    }
}

impl TrimmedMean {
    pub const fn new() -> Self {
        Self {
            sum: 0,
            min: u16::MAX,
            max: 0,
            count: 0,
        }
    }

    pub fn push(&mut self, mv: u16) {
        self.sum += mv as u32;
        if mv < self.min {
            self.min = mv;
        }
        if mv > self.max {
            self.max = mv;
        }
        self.count += 1;
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Mean with one minimum and one maximum removed.
    ///
    /// Bursts of fewer than three samples have nothing left to trim to, so
    /// they fall back to the plain mean (0 when empty).
    pub fn mean(&self) -> u32 {
        match self.count {
            0 => 0,
            1 | 2 => self.sum / self.count,
            n => (self.sum - self.min as u32 - self.max as u32) / (n - 2),
        }
    }
}

/// Burst sampler: trimmed mean, then divider compensation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleFilter {
    samples: usize,
    divider: Divider,
}

impl SampleFilter {
    pub const fn new(samples: usize, divider: Divider) -> Self {
        assert!(samples >= 3, "trimmed mean needs at least three samples");
        Self { samples, divider }
    }

    pub const fn samples(&self) -> usize {
        self.samples
    }

    pub const fn divider(&self) -> Divider {
        self.divider
    }

    /// Read one burst from `source` and return the cell voltage in mV.
    pub fn read<S: MilliVoltSource + ?Sized>(&self, source: &mut S) -> Result<u16, S::Error> {
        let mut acc = TrimmedMean::new();
        for _ in 0..self.samples {
            acc.push(source.read_mv()?);
        }
        Ok(self.divider.scale(acc.mean()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Burst<'a> {
        samples: &'a [u16],
        next: usize,
    }

    impl<'a> Burst<'a> {
        fn new(samples: &'a [u16]) -> Self {
            Self { samples, next: 0 }
        }
    }

    impl MilliVoltSource for Burst<'_> {
        type Error = ();

        fn read_mv(&mut self) -> Result<u16, ()> {
            let mv = *self.samples.get(self.next).ok_or(())?;
            self.next += 1;
            Ok(mv)
        }
    }

    #[test]
    fn outliers_are_dropped_regardless_of_magnitude() {
        let clean = [1850u16, 1852, 1848, 1851, 1849, 1850];
        let expected = clean.iter().map(|&v| v as u32).sum::<u32>() / 6;

        for (low, high) in [(0u16, 4095u16), (1700, 1990), (1, u16::MAX)] {
            let mut samples = [0u16; 8];
            samples[0] = high;
            samples[1..7].copy_from_slice(&clean);
            samples[7] = low;

            let filter = SampleFilter::new(8, Divider::DIRECT);
            let mv = filter.read(&mut Burst::new(&samples)).unwrap();
            assert_eq!(mv as u32, expected, "outliers {low}/{high}");
        }
    }

    #[test]
    fn extrema_track_every_sample() {
        // Descending then ascending: min and max both move late in the burst.
        let mut acc = TrimmedMean::new();
        for mv in [2000u16, 1990, 1980, 1500, 1985, 1995, 2600, 1990] {
            acc.push(mv);
        }
        let expected = (2000 + 1990 + 1980 + 1985 + 1995 + 1990) / 6;
        assert_eq!(acc.mean(), expected);
    }

    #[test]
    fn flat_burst_is_unchanged() {
        let filter = SampleFilter::new(8, Divider::DIRECT);
        let mv = filter.read(&mut Burst::new(&[1900; 8])).unwrap();
        assert_eq!(mv, 1900);
    }

    #[test]
    fn divider_doubles_pin_voltage() {
        let filter = SampleFilter::new(8, Divider::HALF);
        let mv = filter.read(&mut Burst::new(&[1875; 8])).unwrap();
        assert_eq!(mv, 3750);
    }

    #[test]
    fn divider_saturates_instead_of_wrapping() {
        assert_eq!(Divider::HALF.scale(40_000), u16::MAX);
        assert_eq!(Divider::new(3, 1).scale(u16::MAX as u32), u16::MAX);
        assert_eq!(Divider::HALF.scale(32_767), 65_534);

        let filter = SampleFilter::new(8, Divider::HALF);
        let mv = filter.read(&mut Burst::new(&[60_000; 8])).unwrap();
        assert_eq!(mv, 65_535);
    }

    #[test]
    fn source_fault_propagates() {
        let filter = SampleFilter::new(8, Divider::HALF);
        assert_eq!(filter.read(&mut Burst::new(&[1900; 5])), Err(()));
    }

    #[test]
    fn short_bursts_fall_back_to_plain_mean() {
        let mut acc = TrimmedMean::new();
        assert_eq!(acc.mean(), 0);
        acc.push(10);
        acc.push(20);
        assert_eq!(acc.mean(), 15);
    }
}
