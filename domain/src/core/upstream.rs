//! Live/degraded marker for data obtained from another service.

/// A value produced by a remote call, tagged with where it really came from.
///
/// `Live` values are authoritative answers from the remote service.
/// `Degraded` values were synthesized by a fallback because the remote could
/// not be used; they keep the response shape intact but must never be
/// persisted or trusted as real data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upstream<T> {
    Live(T),
    Degraded(T),
}

impl<T> Upstream<T> {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Upstream::Degraded(_))
    }

    /// Borrow the carried value regardless of origin.
    pub fn value(&self) -> &T {
        match self {
            Upstream::Live(v) | Upstream::Degraded(v) => v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_and_tag() {
        let up = Upstream::Degraded("placeholder".to_string());
        assert!(up.is_degraded());
        assert_eq!(up.value(), "placeholder");
        assert!(!Upstream::Live(5).is_degraded());
        assert_eq!(Upstream::Live(5).value(), &5);
    }
}
