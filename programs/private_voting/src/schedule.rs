//! Deadline arithmetic shared by the program and its clients.
//!
//! A voting is open while `now < deadline` and finished from the deadline on.

/// Deadline for a voting created at `now` that lasts `duration_seconds`.
///
/// Returns `None` for a zero duration or when the result does not fit an `i64`.
pub fn deadline_after(now: i64, duration_seconds: u64) -> Option<i64> {
    if duration_seconds == 0 {
        return None;
    }
    let duration = i64::try_from(duration_seconds).ok()?;
    now.checked_add(duration)
}

pub fn is_finished(now: i64, deadline: i64) -> bool {
    now >= deadline
}

pub fn accepts_ballots(now: i64, deadline: i64) -> bool {
    !is_finished(now, deadline)
}

pub fn can_reveal(now: i64, deadline: i64) -> bool {
    is_finished(now, deadline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_is_now_plus_duration() {
        assert_eq!(deadline_after(1_700_000_000, 3), Some(1_700_000_003));
    }

    #[test]
    fn zero_duration_is_rejected() {
        assert_eq!(deadline_after(10, 0), None);
    }

    #[test]
    fn overflowing_duration_is_rejected() {
        assert_eq!(deadline_after(1, u64::MAX), None);
        assert_eq!(deadline_after(i64::MAX, 1), None);
    }

    #[test]
    fn finished_exactly_at_deadline() {
        assert!(!is_finished(99, 100));
        assert!(is_finished(100, 100));
        assert!(accepts_ballots(99, 100));
        assert!(!accepts_ballots(100, 100));
        assert!(can_reveal(101, 100));
    }
}
