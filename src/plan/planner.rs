//! Turning a validated segment list into scenes.

use scenesplit_common::{Disposition, Error, Result, Scene, Segment};
use std::time::Duration;

/// Trimmed off a scene's end so it stops one frame short of the next segment.
///
/// One NTSC frame (33.37 ms), rounded up.
pub const TRAILING_TRIM: Duration = Duration::from_millis(34);

/// Find where the scene starting at `segments[index]` ends.
///
/// Segments marked [`Disposition::AddToPrevious`] are absorbed into the
/// scene. The first segment after them ends the scene, one trim constant
/// before its position. If the list runs out first, the scene runs to `total`.
pub fn resolve_end(segments: &[Segment], index: usize, total: Duration) -> Duration {
    for next in segments.iter().skip(index + 1) {
        match next.disposition {
            Disposition::AddToPrevious => continue,
            Disposition::Keep | Disposition::Discard => {
                return next.position.saturating_sub(TRAILING_TRIM);
            }
        }
    }
    total
}

/// Plan one scene per kept segment, in list order.
///
/// Ordinals are left at zero; see [`super::assign_ordinals`]. A list without
/// kept segments yields no scenes.
///
/// # Errors
///
/// [`Error::DegenerateScene`] if a scene would not end after it starts.
pub fn plan_scenes(segments: &[Segment], total: Duration) -> Result<Vec<Scene>> {
    let mut scenes = Vec::new();

    for (index, segment) in segments.iter().enumerate() {
        match segment.disposition {
            Disposition::Keep => {}
            Disposition::Discard | Disposition::AddToPrevious => continue,
        }

        let start = segment.position;
        let end = resolve_end(segments, index, total);
        if end <= start {
            return Err(Error::DegenerateScene { start, end });
        }

        scenes.push(Scene {
            ordinal: 0,
            start,
            end,
            date: segment.date,
            subject: segment.subject.clone(),
            title: segment.title.clone(),
        });
    }

    Ok(scenes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::test_fixtures::*;

    #[test]
    fn test_party_and_cake() {
        let scenes = plan_scenes(&party_and_cake(), secs(120)).unwrap();
        assert_eq!(scenes.len(), 2);

        assert_eq!(scenes[0].start, secs(0));
        assert_eq!(scenes[0].end, secs(60) - TRAILING_TRIM);
        assert_eq!(scenes[0].subject, "Party");

        assert_eq!(scenes[1].start, secs(65));
        assert_eq!(scenes[1].end, secs(120));
        assert_eq!(scenes[1].subject, "Cake");
    }

    #[test]
    fn test_merge_run_extends_to_next_boundary() {
        for merges in 0..5u64 {
            let mut segments = vec![keep(secs(0), day(2020, 1, 1), "Party")];
            for i in 0..merges {
                segments.push(merge(secs(10 + i)));
            }
            segments.push(discard(secs(100)));

            assert_eq!(
                resolve_end(&segments, 0, secs(500)),
                secs(100) - TRAILING_TRIM,
                "with {} merge segments",
                merges
            );
        }
    }

    #[test]
    fn test_trailing_merges_run_to_total() {
        let segments = vec![
            keep(secs(0), day(2020, 1, 1), "Party"),
            merge(secs(30)),
            merge(secs(60)),
        ];
        let scenes = plan_scenes(&segments, secs(90)).unwrap();
        assert_eq!(scenes.len(), 1);
        assert_eq!(scenes[0].end, secs(90));
    }

    #[test]
    fn test_no_kept_segments() {
        let segments = vec![discard(secs(0)), merge(secs(10))];
        assert!(plan_scenes(&segments, secs(60)).unwrap().is_empty());
        assert!(plan_scenes(&[], secs(60)).unwrap().is_empty());
    }

    #[test]
    fn test_next_segment_within_trim_is_degenerate() {
        let segments = vec![
            keep(secs(10), day(2020, 1, 1), "Party"),
            discard(secs(10) + Duration::from_millis(20)),
        ];
        let err = plan_scenes(&segments, secs(60)).unwrap_err();
        assert!(matches!(err, Error::DegenerateScene { start, .. } if start == secs(10)));
    }

    #[test]
    fn test_keep_at_end_of_media_is_degenerate() {
        let segments = vec![keep(secs(60), day(2020, 1, 1), "Party")];
        let err = plan_scenes(&segments, secs(60)).unwrap_err();
        assert!(matches!(err, Error::DegenerateScene { .. }));
    }

    #[test]
    fn test_end_saturates_at_zero() {
        let segments = vec![
            keep(Duration::ZERO, day(2020, 1, 1), "Party"),
            discard(Duration::from_millis(10)),
        ];
        assert_eq!(resolve_end(&segments, 0, secs(60)), Duration::ZERO);
    }

    #[test]
    fn test_scenes_never_end_before_start() {
        let segments = vec![
            keep(secs(0), day(2020, 1, 1), "A"),
            merge(secs(5)),
            keep(secs(9), day(2020, 1, 1), "B"),
            discard(secs(20)),
            keep(secs(40), day(2020, 1, 2), "C"),
        ];
        for scene in plan_scenes(&segments, secs(45)).unwrap() {
            assert!(scene.end > scene.start);
        }
    }
}
