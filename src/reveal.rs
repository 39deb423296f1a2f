//! Scroll-triggered reveal groups and their staggered sub-animations.

use std::f64::consts::PI;

use crate::config::MotionConfig;
use crate::counter::CounterId;
use crate::timeline::Millis;

pub const RING_RADIUS: f64 = 54.0;

pub fn ring_circumference() -> f64 {
    2.0 * PI * RING_RADIUS
}

/// Stroke-dash offset that leaves `progress` percent of the ring drawn.
pub fn ring_offset(progress: u8) -> f64 {
    let circumference = ring_circumference();
    let progress = f64::from(progress.min(100));
    circumference - (progress / 100.0) * circumference
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId(pub usize);

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub target: u8,
    pub width: Option<u8>,
    pub settled: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    pub target: u8,
    pub offset: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Meter {
    pub target: u8,
    pub width: Option<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealJob {
    FillBar { group: GroupId, index: usize },
    SettleBar { group: GroupId, index: usize },
    FillRing { group: GroupId, index: usize },
    FillMeter { group: GroupId, index: usize },
}

impl RevealJob {
    pub fn group(self) -> GroupId {
        match self {
            Self::FillBar { group, .. }
            | Self::SettleBar { group, .. }
            | Self::FillRing { group, .. }
            | Self::FillMeter { group, .. } => group,
        }
    }
}

/// Jobs to schedule (with their delays) and counters to start.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealPlan {
    pub jobs: Vec<(RevealJob, Millis)>,
    pub counters: Vec<CounterId>,
}

#[derive(Clone, Debug, Default)]
pub struct RevealGroup {
    pub key: String,
    pub revealed: bool,
    pub bars: Vec<Bar>,
    pub rings: Vec<Ring>,
    pub meters: Vec<Meter>,
    pub counters: Vec<CounterId>,
}

impl RevealGroup {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_bars(mut self, targets: impl IntoIterator<Item = u8>) -> Self {
        self.bars = targets
            .into_iter()
            .map(|target| Bar {
                target: target.min(100),
                width: None,
                settled: false,
            })
            .collect();
        self
    }

    pub fn with_rings(mut self, targets: impl IntoIterator<Item = u8>) -> Self {
        self.rings = targets
            .into_iter()
            .map(|target| Ring {
                target: target.min(100),
                offset: ring_circumference(),
            })
            .collect();
        self
    }

    pub fn with_meters(mut self, targets: impl IntoIterator<Item = u8>) -> Self {
        self.meters = targets
            .into_iter()
            .map(|target| Meter {
                target: target.min(100),
                width: None,
            })
            .collect();
        self
    }

    pub fn with_counters(mut self, counters: impl IntoIterator<Item = CounterId>) -> Self {
        self.counters = counters.into_iter().collect();
        self
    }

    /// Stagger follows document order, not target value.
    fn plan(&self, id: GroupId, motion: &MotionConfig) -> RevealPlan {
        let bars = (0..self.bars.len()).map(|index| {
            (
                RevealJob::FillBar { group: id, index },
                motion.bar_stagger.delay_for(index),
            )
        });
        let rings = (0..self.rings.len()).map(|index| {
            (
                RevealJob::FillRing { group: id, index },
                motion.ring_stagger.delay_for(index),
            )
        });
        let meters = (0..self.meters.len()).map(|index| {
            (
                RevealJob::FillMeter { group: id, index },
                motion.meter_stagger.delay_for(index),
            )
        });

        RevealPlan {
            jobs: bars.chain(rings).chain(meters).collect(),
            counters: self.counters.clone(),
        }
    }

    fn reset_fills(&mut self) {
        for bar in &mut self.bars {
            bar.width = None;
            bar.settled = false;
        }
        for ring in &mut self.rings {
            ring.offset = ring_circumference();
        }
        for meter in &mut self.meters {
            meter.width = None;
        }
    }

    fn apply(&mut self, job: RevealJob) {
        match job {
            RevealJob::FillBar { index, .. } => {
                if let Some(bar) = self.bars.get_mut(index) {
                    bar.width = Some(bar.target);
                }
            }
            RevealJob::SettleBar { index, .. } => {
                if let Some(bar) = self.bars.get_mut(index) {
                    bar.settled = true;
                }
            }
            RevealJob::FillRing { index, .. } => {
                if let Some(ring) = self.rings.get_mut(index) {
                    ring.offset = ring_offset(ring.target);
                }
            }
            RevealJob::FillMeter { index, .. } => {
                if let Some(meter) = self.meters.get_mut(index) {
                    meter.width = Some(meter.target);
                }
            }
        }
    }
}

/// One IntersectionObserver entry for a group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    pub ratio: f64,
}

#[derive(Clone, Debug, Default)]
pub struct RevealTrigger {
    groups: Vec<RevealGroup>,
    intersecting: Vec<bool>,
}

impl RevealTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, group: RevealGroup) -> GroupId {
        self.groups.push(group);
        self.intersecting.push(false);
        GroupId(self.groups.len() - 1)
    }

    pub fn group(&self, id: GroupId) -> Option<&RevealGroup> {
        self.groups.get(id.0)
    }

    pub fn find(&self, key: &str) -> Option<GroupId> {
        self.groups
            .iter()
            .position(|group| group.key == key)
            .map(GroupId)
    }

    /// Feeds one intersection sample. Returns a plan only on the first
    /// not-intersecting to intersecting transition of the session. The
    /// observer delivering samples owns the threshold, so `ratio` is not
    /// compared again here.
    pub fn intersect(
        &mut self,
        id: GroupId,
        sample: IntersectionSample,
        motion: &MotionConfig,
    ) -> Option<RevealPlan> {
        let entering = sample.is_intersecting;
        let was_intersecting = std::mem::replace(self.intersecting.get_mut(id.0)?, entering);

        if !entering || was_intersecting {
            return None;
        }

        let group = self.groups.get_mut(id.0)?;
        if group.revealed {
            return None;
        }

        group.revealed = true;
        Some(group.plan(id, motion))
    }

    /// Re-runs the group's animations regardless of prior reveal state,
    /// starting every fill from empty again.
    pub fn force(&mut self, id: GroupId, motion: &MotionConfig) -> Option<RevealPlan> {
        let group = self.groups.get_mut(id.0)?;
        group.revealed = true;
        group.reset_fills();
        Some(group.plan(id, motion))
    }

    pub fn apply(&mut self, job: RevealJob) {
        if let Some(group) = self.groups.get_mut(job.group().0) {
            group.apply(job);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IN_VIEW: IntersectionSample = IntersectionSample {
        is_intersecting: true,
        ratio: 0.5,
    };
    const OUT_OF_VIEW: IntersectionSample = IntersectionSample {
        is_intersecting: false,
        ratio: 0.0,
    };

    fn trigger_with_bars(targets: [u8; 3]) -> (RevealTrigger, GroupId) {
        let mut trigger = RevealTrigger::new();
        let id = trigger.observe(RevealGroup::new("skills").with_bars(targets));
        (trigger, id)
    }

    #[test]
    fn ring_offset_matches_circumference_fraction() {
        assert!((ring_circumference() - 339.292).abs() < 0.001);
        assert!((ring_offset(0) - ring_circumference()).abs() < f64::EPSILON);
        assert!(ring_offset(100).abs() < 1e-9);
        assert!((ring_offset(75) - ring_circumference() * 0.25).abs() < 1e-9);
        assert!(ring_offset(250).abs() < 1e-9);
    }

    #[test]
    fn first_entry_plans_staggered_bars_in_document_order() {
        let (mut trigger, id) = trigger_with_bars([80, 20, 50]);
        let plan = trigger
            .intersect(id, IN_VIEW, &MotionConfig::default())
            .expect("first entry reveals");

        assert_eq!(
            plan.jobs,
            vec![
                (RevealJob::FillBar { group: id, index: 0 }, 200),
                (RevealJob::FillBar { group: id, index: 1 }, 350),
                (RevealJob::FillBar { group: id, index: 2 }, 500),
            ]
        );
        assert!(trigger.group(id).is_some_and(|group| group.revealed));
    }

    #[test]
    fn reentry_does_not_replan() {
        let (mut trigger, id) = trigger_with_bars([20, 50, 80]);
        let motion = MotionConfig::default();

        assert!(trigger.intersect(id, IN_VIEW, &motion).is_some());
        assert!(trigger.intersect(id, IN_VIEW, &motion).is_none());
        assert!(trigger.intersect(id, OUT_OF_VIEW, &motion).is_none());
        assert!(trigger.intersect(id, IN_VIEW, &motion).is_none());
    }

    #[test]
    fn crossing_entry_reported_just_under_threshold_reveals() {
        let (mut trigger, id) = trigger_with_bars([20, 50, 80]);
        let crossing = IntersectionSample {
            is_intersecting: true,
            ratio: 0.099_999_99,
        };

        let plan = trigger.intersect(id, crossing, &MotionConfig::default());

        assert!(plan.is_some_and(|plan| plan.jobs.len() == 3));
        assert!(trigger.group(id).is_some_and(|group| group.revealed));
    }

    #[test]
    fn leaving_sample_never_reveals() {
        let (mut trigger, id) = trigger_with_bars([20, 50, 80]);

        assert!(trigger.intersect(id, OUT_OF_VIEW, &MotionConfig::default()).is_none());
        assert!(trigger.group(id).is_some_and(|group| !group.revealed));
    }

    #[test]
    fn force_resets_fills_and_replans() {
        let mut trigger = RevealTrigger::new();
        let id = trigger.observe(
            RevealGroup::new("technical")
                .with_rings([90, 60])
                .with_meters([70])
                .with_counters([CounterId(3)]),
        );
        let motion = MotionConfig::default();

        let plan = trigger.force(id, &motion).expect("known group");
        for (job, _) in &plan.jobs {
            trigger.apply(*job);
        }
        assert_eq!(trigger.group(id).map(|g| g.meters[0].width), Some(Some(70)));

        let replan = trigger.force(id, &motion).expect("known group");
        let group = trigger.group(id).expect("known group");
        assert_eq!(group.meters[0].width, None);
        assert!((group.rings[0].offset - ring_circumference()).abs() < f64::EPSILON);
        assert_eq!(replan.counters, vec![CounterId(3)]);
        assert_eq!(
            replan.jobs,
            vec![
                (RevealJob::FillRing { group: id, index: 0 }, 100),
                (RevealJob::FillRing { group: id, index: 1 }, 250),
                (RevealJob::FillMeter { group: id, index: 0 }, 100),
            ]
        );
    }

    #[test]
    fn unknown_group_is_ignored() {
        let (mut trigger, _) = trigger_with_bars([1, 2, 3]);

        assert!(trigger.intersect(GroupId(9), IN_VIEW, &MotionConfig::default()).is_none());
        assert!(trigger.force(GroupId(9), &MotionConfig::default()).is_none());
        trigger.apply(RevealJob::FillBar { group: GroupId(9), index: 0 });
    }
}
