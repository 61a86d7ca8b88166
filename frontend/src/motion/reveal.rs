//! One-shot entrance reveals for groups of elements.
//!
//! Every item in a [`RevealGroup`] walks `Unrevealed -> Revealing -> Revealed`
//! exactly once. The group fires on its first qualifying trigger; later
//! triggers are ignored, so scrolling a section out of view and back never
//! hides it again.

use std::rc::Rc;

use serde::Deserialize;
use yew::Reducible;

use super::stagger::Stagger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Unrevealed,
    Revealing,
    Revealed,
}

/// What starts a group's reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RevealTrigger {
    /// Fires as soon as the group mounts.
    Mount,
    /// Fires when the group enters the viewport. A negative margin shrinks
    /// the viewport, so `-100` waits until the group is 100px inside.
    InView { root_margin_px: i32 },
}

/// Mount reveals start two frames late so the hidden style is painted first;
/// switching styles within the same tick skips the CSS transition.
pub const MOUNT_START_DELAY_MS: u32 = 34;

impl RevealTrigger {
    /// How long after mount a group fires without waiting for the viewport.
    pub fn start_delay_ms(&self) -> Option<u32> {
        match self {
            RevealTrigger::Mount => Some(MOUNT_START_DELAY_MS),
            RevealTrigger::InView { .. } => None,
        }
    }

    pub fn root_margin(&self) -> Option<String> {
        match self {
            RevealTrigger::Mount => None,
            RevealTrigger::InView { root_margin_px } => Some(format!("{root_margin_px}px")),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "ease-in",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

/// Initial offset, timing and trigger for a group's entrance.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RevealTransition {
    /// Vertical offset of an unrevealed item, settling to 0.
    pub offset_px: f64,
    pub duration_ms: u32,
    #[serde(default)]
    pub stagger: Stagger,
    #[serde(default)]
    pub easing: Easing,
    pub trigger: RevealTrigger,
}

impl RevealTransition {
    pub const HERO_INTRO: RevealTransition = RevealTransition {
        offset_px: 20.0,
        duration_ms: 700,
        stagger: Stagger::NONE,
        easing: Easing::EaseOut,
        trigger: RevealTrigger::Mount,
    };

    pub const HERO_CHIPS: RevealTransition = RevealTransition {
        offset_px: 10.0,
        duration_ms: 400,
        stagger: Stagger::new(100),
        easing: Easing::EaseOut,
        trigger: RevealTrigger::Mount,
    };

    pub const EXPERTISE_CARDS: RevealTransition = RevealTransition {
        offset_px: 20.0,
        duration_ms: 500,
        stagger: Stagger::new(50),
        easing: Easing::EaseOut,
        trigger: RevealTrigger::InView { root_margin_px: -100 },
    };

    pub const CASE_STUDIES: RevealTransition = RevealTransition {
        offset_px: 20.0,
        duration_ms: 500,
        stagger: Stagger::new(80),
        easing: Easing::EaseOut,
        trigger: RevealTrigger::InView { root_margin_px: -100 },
    };
}

/// When item `index` starts moving and when it should be marked settled,
/// both measured from the moment the group fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealCue {
    pub index: usize,
    pub delay_ms: u32,
    pub settle_after_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// The trigger condition was observed.
    Intersect,
    /// Item finished its entrance animation.
    Settle(usize),
    /// No way to observe the trigger; show everything now.
    FailOpen,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealGroup {
    transition: RevealTransition,
    phases: Vec<RevealPhase>,
    fired: bool,
}

impl RevealGroup {
    pub fn new(len: usize, transition: RevealTransition) -> Self {
        Self {
            transition,
            phases: vec![RevealPhase::Unrevealed; len],
            fired: false,
        }
    }

    pub fn fired(&self) -> bool {
        self.fired
    }

    /// Out-of-range indices read as revealed so a late item is never hidden.
    pub fn phase(&self, index: usize) -> RevealPhase {
        self.phases
            .get(index)
            .copied()
            .unwrap_or(RevealPhase::Revealed)
    }

    /// Applies `action`, returning whether anything changed.
    pub fn apply(&mut self, action: RevealAction) -> bool {
        match action {
            RevealAction::Intersect => {
                if self.fired {
                    return false;
                }
                self.fired = true;
                for phase in &mut self.phases {
                    *phase = RevealPhase::Revealing;
                }
                true
            }
            RevealAction::Settle(index) => match self.phases.get_mut(index) {
                Some(phase) if *phase == RevealPhase::Revealing => {
                    *phase = RevealPhase::Revealed;
                    true
                }
                _ => false,
            },
            RevealAction::FailOpen => {
                let was_fired = self.fired;
                self.fired = true;
                let mut changed = !was_fired;
                for phase in &mut self.phases {
                    if *phase == RevealPhase::Unrevealed {
                        *phase = RevealPhase::Revealed;
                        changed = true;
                    }
                }
                changed
            }
        }
    }

    /// Settle schedule for items still in `Revealing`.
    pub fn cues(&self) -> Vec<RevealCue> {
        self.phases
            .iter()
            .enumerate()
            .filter(|(_, phase)| **phase == RevealPhase::Revealing)
            .map(|(index, _)| {
                let delay_ms = self.transition.stagger.delay_ms(index);
                RevealCue {
                    index,
                    delay_ms,
                    settle_after_ms: delay_ms.saturating_add(self.transition.duration_ms),
                }
            })
            .collect()
    }

    /// Inline CSS for item `index` in its current phase.
    pub fn item_style(&self, index: usize) -> String {
        let t = &self.transition;
        match self.phase(index) {
            RevealPhase::Unrevealed => format!(
                "opacity: 0; transform: translate3d(0, {}px, 0);",
                t.offset_px
            ),
            RevealPhase::Revealing => {
                let timing = format!(
                    "{}ms {} {}ms",
                    t.duration_ms,
                    t.easing.css(),
                    t.stagger.delay_ms(index)
                );
                format!(
                    "opacity: 1; transform: translate3d(0, 0px, 0); \
                     transition: opacity {timing}, transform {timing};"
                )
            }
            RevealPhase::Revealed => "opacity: 1; transform: translate3d(0, 0px, 0);".to_string(),
        }
    }
}

impl Reducible for RevealGroup {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn phases(group: &RevealGroup) -> Vec<RevealPhase> {
        group.phases.clone()
    }

    fn is_settled(group: &RevealGroup) -> bool {
        group.phases.iter().all(|p| *p == RevealPhase::Revealed)
    }

    #[test]
    fn starts_unrevealed() {
        let group = RevealGroup::new(3, RevealTransition::EXPERTISE_CARDS);
        assert!(!group.fired());
        assert_eq!(phases(&group), vec![RevealPhase::Unrevealed; 3]);
        assert!(group.cues().is_empty());
    }

    #[test]
    fn second_intersection_is_ignored() {
        let mut group = RevealGroup::new(5, RevealTransition::EXPERTISE_CARDS);

        let transitions = [RevealAction::Intersect, RevealAction::Intersect]
            .into_iter()
            .filter(|action| group.apply(*action))
            .count();

        assert_eq!(transitions, 1);
        assert_eq!(phases(&group), vec![RevealPhase::Revealing; 5]);
    }

    #[test]
    fn five_item_group_cascades_by_a_tenth_of_a_second() {
        let transition = RevealTransition {
            stagger: Stagger::new(100),
            ..RevealTransition::EXPERTISE_CARDS
        };
        let mut group = RevealGroup::new(5, transition);
        group.apply(RevealAction::Intersect);
        group.apply(RevealAction::Intersect);

        let delays: Vec<f64> = group
            .cues()
            .iter()
            .map(|cue| f64::from(cue.delay_ms) / 1000.0)
            .collect();
        assert_eq!(delays, vec![0.0, 0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn mount_groups_wait_past_the_first_paint() {
        let delay = RevealTrigger::Mount.start_delay_ms().unwrap();
        assert!(delay > 16, "must outlast one 60Hz frame, got {delay}ms");
        assert_eq!(
            RevealTransition::EXPERTISE_CARDS.trigger.start_delay_ms(),
            None
        );
    }

    #[test]
    fn cues_follow_stagger_then_duration() {
        let mut group = RevealGroup::new(3, RevealTransition::CASE_STUDIES);
        group.apply(RevealAction::Intersect);

        assert_eq!(
            group.cues(),
            vec![
                RevealCue { index: 0, delay_ms: 0, settle_after_ms: 500 },
                RevealCue { index: 1, delay_ms: 80, settle_after_ms: 580 },
                RevealCue { index: 2, delay_ms: 160, settle_after_ms: 660 },
            ]
        );
    }

    #[test]
    fn settles_item_by_item_and_stays_revealed() {
        let mut group = RevealGroup::new(2, RevealTransition::HERO_CHIPS);

        assert!(!group.apply(RevealAction::Settle(0)), "cannot settle before firing");

        group.apply(RevealAction::Intersect);
        assert!(group.apply(RevealAction::Settle(1)));
        assert_eq!(phases(&group), vec![RevealPhase::Revealing, RevealPhase::Revealed]);
        assert!(group.apply(RevealAction::Settle(0)));
        assert!(!group.apply(RevealAction::Settle(0)));
        assert!(!group.apply(RevealAction::Settle(7)));
        assert!(is_settled(&group));

        // scrolled away and back
        assert!(!group.apply(RevealAction::Intersect));
        assert!(is_settled(&group));
        assert!(group.cues().is_empty());
    }

    #[test]
    fn fail_open_reveals_without_animation() {
        let mut group = RevealGroup::new(4, RevealTransition::EXPERTISE_CARDS);

        assert!(group.apply(RevealAction::FailOpen));
        assert!(group.fired());
        assert!(is_settled(&group));
        assert!(!group.apply(RevealAction::Intersect));
        assert!(!group.apply(RevealAction::FailOpen));
    }

    #[test]
    fn fail_open_mid_reveal_leaves_animating_items_alone() {
        let mut group = RevealGroup::new(2, RevealTransition::HERO_CHIPS);
        group.apply(RevealAction::Intersect);

        assert!(!group.apply(RevealAction::FailOpen));
        assert_eq!(phases(&group), vec![RevealPhase::Revealing; 2]);
    }

    #[test]
    fn empty_group_fires_once() {
        let mut group = RevealGroup::new(0, RevealTransition::HERO_INTRO);
        assert!(group.apply(RevealAction::Intersect));
        assert!(!group.apply(RevealAction::Intersect));
        assert!(is_settled(&group));
    }

    #[test]
    fn styles_per_phase() {
        let mut group = RevealGroup::new(2, RevealTransition::HERO_CHIPS);
        assert_eq!(group.item_style(1), "opacity: 0; transform: translate3d(0, 10px, 0);");

        group.apply(RevealAction::Intersect);
        assert_eq!(
            group.item_style(1),
            "opacity: 1; transform: translate3d(0, 0px, 0); \
             transition: opacity 400ms ease-out 100ms, transform 400ms ease-out 100ms;"
        );

        group.apply(RevealAction::Settle(1));
        assert_eq!(group.item_style(1), "opacity: 1; transform: translate3d(0, 0px, 0);");
    }

    #[test]
    fn reducer_keeps_the_same_state_when_nothing_changes() {
        let state = Rc::new(RevealGroup::new(1, RevealTransition::HERO_INTRO));

        let fired = state.clone().reduce(RevealAction::Intersect);
        assert!(!Rc::ptr_eq(&state, &fired));

        let again = fired.clone().reduce(RevealAction::Intersect);
        assert!(Rc::ptr_eq(&fired, &again));
    }

    #[test]
    fn trigger_margin_and_config_shape() {
        assert_eq!(
            RevealTransition::EXPERTISE_CARDS.trigger.root_margin().as_deref(),
            Some("-100px")
        );
        assert_eq!(RevealTrigger::Mount.root_margin(), None);

        let parsed: RevealTransition = serde_json::from_str(
            r#"{"offset_px":20,"duration_ms":500,"stagger":{"step_ms":50},
                "trigger":{"kind":"in_view","root_margin_px":-100}}"#,
        )
        .unwrap();
        assert_eq!(parsed, RevealTransition::EXPERTISE_CARDS);
    }
}
