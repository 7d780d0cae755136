//! Clamp caller-supplied result limits.
//!
//! Limits arrive from query strings and CLI flags. Bad values never fail a
//! request: zero, negative, missing and non-numeric limits fall back to the
//! default, and anything above the maximum is clamped.

/// Default and maximum for one kind of result list.
///
/// # Examples
/// ```
/// use huddle_core::LimitPolicy;
///
/// let policy = LimitPolicy::new(5, 20);
/// assert_eq!(policy.resolve(Some(1000)), 20);
/// assert_eq!(policy.resolve(Some(-3)), 5);
/// assert_eq!(policy.parse(Some("seven")), 5);
/// assert_eq!(policy.parse(Some("7")), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitPolicy {
    default: usize,
    max: usize,
}

impl LimitPolicy {
    /// Build a policy. A default above `max` is clamped to `max`.
    #[must_use]
    pub const fn new(default: usize, max: usize) -> Self {
        let clamped_default = if default > max { max } else { default };
        Self {
            default: clamped_default,
            max,
        }
    }

    /// The value used when no usable limit is supplied.
    #[must_use]
    pub const fn default_limit(self) -> usize {
        self.default
    }

    /// The largest limit that will ever be honoured.
    #[must_use]
    pub const fn max_limit(self) -> usize {
        self.max
    }

    /// Resolve a numeric request into an effective limit.
    #[must_use]
    pub fn resolve(self, requested: Option<i64>) -> usize {
        requested
            .and_then(|value| usize::try_from(value).ok())
            .map_or(self.default, |value| self.clamp(value))
    }

    /// Clamp an already-unsigned limit: zero means the default.
    #[must_use]
    pub const fn clamp(self, limit: usize) -> usize {
        match limit {
            0 => self.default,
            value if value > self.max => self.max,
            value => value,
        }
    }

    /// Resolve a textual request (for example a query parameter).
    #[must_use]
    pub fn parse(self, requested: Option<&str>) -> usize {
        self.resolve(requested.and_then(|raw| raw.trim().parse::<i64>().ok()))
    }
}

/// Limits for similar-member lists.
pub const SIMILAR_MEMBERS_LIMIT: LimitPolicy = LimitPolicy::new(5, 20);

/// Limits for hometown map points.
pub const HOMETOWN_POINTS_LIMIT: LimitPolicy = LimitPolicy::new(500, 2000);
