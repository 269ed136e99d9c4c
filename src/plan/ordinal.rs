//! Per-capture-day sequence numbers.

use chrono::NaiveDate;
use scenesplit_common::Scene;

/// Number scenes within each capture day, starting at 1.
///
/// Scenes are visited in ascending `start` order. The count restarts whenever
/// a scene's calendar day differs from the previous scene's day, in either
/// direction, so a tolerated step back to an earlier day also starts over.
/// Time of day is ignored.
pub fn assign_ordinals(scenes: &mut [Scene]) {
    scenes.sort_by_key(|s| s.start);

    let mut last_day: Option<NaiveDate> = None;
    let mut ordinal = 0u32;

    for scene in scenes.iter_mut() {
        let scene_day = scene.date.date();
        if last_day != Some(scene_day) {
            ordinal = 0;
        }
        ordinal += 1;
        scene.ordinal = ordinal;
        last_day = Some(scene_day);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::plan_scenes;
    use crate::plan::test_fixtures::*;
    use scenesplit_common::Segment;

    fn ordinals(segments: &[Segment]) -> Vec<u32> {
        let mut scenes = plan_scenes(segments, secs(1000)).unwrap();
        assign_ordinals(&mut scenes);
        scenes.iter().map(|s| s.ordinal).collect()
    }

    #[test]
    fn test_same_day_increments() {
        assert_eq!(ordinals(&party_and_cake()), vec![1, 2]);
    }

    #[test]
    fn test_new_day_restarts() {
        let segments = vec![
            keep(secs(0), day(2020, 1, 1), "A"),
            keep(secs(10), day(2020, 1, 1), "B"),
            keep(secs(20), day(2020, 1, 2), "C"),
            keep(secs(30), day(2020, 1, 2), "D"),
            keep(secs(40), day(2020, 1, 2), "E"),
        ];
        assert_eq!(ordinals(&segments), vec![1, 2, 1, 2, 3]);
    }

    #[test]
    fn test_time_of_day_does_not_restart() {
        let segments = vec![
            keep(secs(0), at(2020, 1, 1, 9, 0, 0), "A"),
            keep(secs(10), at(2020, 1, 1, 14, 30, 0), "B"),
        ];
        assert_eq!(ordinals(&segments), vec![1, 2]);
    }

    #[test]
    fn test_tolerated_step_back_restarts() {
        let segments = vec![
            keep(secs(0), day(2020, 1, 2), "A"),
            keep(secs(10), day(2020, 1, 1), "B"),
            keep(secs(20), day(2020, 1, 2), "C"),
        ];
        assert_eq!(ordinals(&segments), vec![1, 1, 1]);
    }

    #[test]
    fn test_rerun_is_stable() {
        let segments = vec![
            keep(secs(0), day(2020, 1, 1), "A"),
            keep(secs(10), day(2020, 1, 2), "B"),
            keep(secs(20), day(2020, 1, 2), "C"),
        ];
        let mut scenes = plan_scenes(&segments, secs(100)).unwrap();
        assign_ordinals(&mut scenes);
        let first: Vec<u32> = scenes.iter().map(|s| s.ordinal).collect();
        assign_ordinals(&mut scenes);
        let second: Vec<u32> = scenes.iter().map(|s| s.ordinal).collect();
        assert_eq!(first, second);
        assert_eq!(first, ordinals(&segments));
    }

    #[test]
    fn test_visits_in_start_order() {
        let mut scenes = plan_scenes(&party_and_cake(), secs(120)).unwrap();
        scenes.reverse();
        assign_ordinals(&mut scenes);
        assert_eq!(scenes[0].subject, "Party");
        assert_eq!(scenes[0].ordinal, 1);
        assert_eq!(scenes[1].ordinal, 2);
    }
}
