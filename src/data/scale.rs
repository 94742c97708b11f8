//! Invertible linear mapping between a data interval and a display interval.
//!
//! The histogram keeps two of these per frame: one from the data domain onto
//! the `[0, 100]` slider space, and one from counts onto bar heights. Both
//! directions are exposed so slider positions can be converted back into data
//! values without any caller-side arithmetic.

/// A monotonic linear mapping from a `domain` interval onto a `range`
/// interval, with the inverse available via [`LinearScale::invert`].
///
/// Zero-width intervals do not blow up: mapping through a zero-width domain
/// returns the range start, and inverting through a zero-width range returns
/// the domain start.
///
/// ```
/// use rangehist::LinearScale;
///
/// let x = LinearScale::new((2.0, 12.0), (0.0, 100.0));
/// assert_eq!(x.map(7.0), 50.0);
/// assert_eq!(x.invert(50.0), 7.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Scale from `domain` onto the percentage interval `[0, 100]`.
    pub fn percent(domain: (f64, f64)) -> Self {
        Self::new(domain, (0.0, 100.0))
    }

    /// Map a domain value into the range. Does not clamp: values outside the
    /// domain extrapolate linearly.
    pub fn map(&self, value: f64) -> f64 {
        let d = self.domain.1 - self.domain.0;
        if d == 0.0 {
            return self.range.0;
        }
        let t = (value - self.domain.0) / d;
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    /// Map a range value back into the domain. Does not clamp.
    pub fn invert(&self, value: f64) -> f64 {
        let r = self.range.1 - self.range.0;
        if r == 0.0 {
            return self.domain.0;
        }
        let t = (value - self.range.0) / r;
        self.domain.0 + t * (self.domain.1 - self.domain.0)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}
