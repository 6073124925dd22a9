/// Trait for providing lightweight logging summaries of waypoint types
///
/// This trait allows collections (paths with many waypoints) to provide
/// compact string representations for logging without dumping every element.
///
/// For small types: implementation can use Debug formatting
/// For large types: implementation should only include metadata
pub trait LogSummary {
    /// Return a compact string representation suitable for logging
    fn log_summary(&self) -> String;
}

impl<T: LogSummary> LogSummary for [T] {
    fn log_summary(&self) -> String {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) if self.len() > 1 => format!(
                "[{} items: {} .. {}]",
                self.len(),
                first.log_summary(),
                last.log_summary()
            ),
            (Some(only), _) => format!("[{}]", only.log_summary()),
            _ => "[]".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tick(u32);

    impl LogSummary for Tick {
        fn log_summary(&self) -> String {
            format!("t{}", self.0)
        }
    }

    #[test]
    fn test_slice_summary() {
        let empty: [Tick; 0] = [];
        assert_eq!(empty.log_summary(), "[]");
        assert_eq!([Tick(1)].log_summary(), "[t1]");
        assert_eq!([Tick(1), Tick(2), Tick(3)].log_summary(), "[3 items: t1 .. t3]");
    }
}
