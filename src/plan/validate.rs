//! Ordering and completeness checks over a segment list.

use chrono::NaiveDateTime;
use scenesplit_common::{Error, Result, Segment};
use std::time::Duration;

/// Check the kept segments of a list before anything is planned.
///
/// Positions must never go backwards. Dates must not go backwards unless
/// `tolerate_out_of_order_dates` is set. Every kept segment needs a subject.
/// Discarded and merged segments are not inspected.
pub fn validate(segments: &[Segment], tolerate_out_of_order_dates: bool) -> Result<()> {
    let mut last_date: Option<NaiveDateTime> = None;
    let mut last_position: Option<Duration> = None;

    for segment in segments.iter().filter(|s| s.is_keep()) {
        if let Some(previous) = last_date {
            if segment.date < previous && !tolerate_out_of_order_dates {
                return Err(Error::OutOfOrderDate {
                    previous,
                    found: segment.date,
                });
            }
        }

        if let Some(previous) = last_position {
            if segment.position < previous {
                return Err(Error::OutOfOrderPosition {
                    previous,
                    found: segment.position,
                });
            }
        }

        if segment.subject.trim().is_empty() {
            return Err(Error::MissingSubject {
                position: segment.position,
            });
        }

        last_date = Some(segment.date);
        last_position = Some(segment.position);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::test_fixtures::*;

    #[test]
    fn test_accepts_ordered_list() {
        assert!(validate(&party_and_cake(), false).is_ok());
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert!(validate(&[], false).is_ok());
    }

    #[test]
    fn test_descending_dates_need_tolerance() {
        let segments = vec![
            keep(secs(0), day(2020, 1, 2), "Party"),
            keep(secs(30), day(2020, 1, 1), "Cake"),
        ];

        let err = validate(&segments, false).unwrap_err();
        assert!(matches!(err, Error::OutOfOrderDate { .. }));

        assert!(validate(&segments, true).is_ok());
    }

    #[test]
    fn test_descending_positions_never_tolerated() {
        let segments = vec![
            keep(secs(30), day(2020, 1, 1), "Party"),
            keep(secs(10), day(2020, 1, 1), "Cake"),
        ];

        for tolerate in [false, true] {
            let err = validate(&segments, tolerate).unwrap_err();
            assert!(matches!(err, Error::OutOfOrderPosition { .. }));
        }
    }

    #[test]
    fn test_missing_subject() {
        let segments = vec![keep(secs(0), day(2020, 1, 1), "   ")];
        let err = validate(&segments, false).unwrap_err();
        assert!(matches!(err, Error::MissingSubject { position } if position == secs(0)));
    }

    #[test]
    fn test_only_kept_segments_are_checked() {
        // A discard row with no subject, an earlier date and an earlier position.
        let segments = vec![
            keep(secs(10), day(2020, 1, 2), "Party"),
            discard(secs(5)),
            merge(secs(7)),
            keep(secs(20), day(2020, 1, 2), "Cake"),
        ];
        assert!(validate(&segments, false).is_ok());
    }

    #[test]
    fn test_equal_dates_and_positions_allowed() {
        let segments = vec![
            keep(secs(10), day(2020, 1, 1), "Party"),
            keep(secs(10), day(2020, 1, 1), "Cake"),
        ];
        assert!(validate(&segments, false).is_ok());
    }
}
