//! Audio feedback planning.
//!
//! Decides which cues play and when. Every append plays the part's own
//! cue right away ([`Part::cue`]). Finishing a tower plays it back one
//! syllable at a time, or a single celebration cue when the tower is
//! made of nothing but one kind of part ([`plan_finish`]).
//!
//! Playback itself is the browser's job (see `oreo-io`); this module
//! only produces the plan.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::FeedbackConfig;
use crate::part::Part;

/// A named audio clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cue {
    /// Short "O".
    O,
    /// Long "OOO".
    Ooo,
    /// Short "RE".
    Re,
    /// Long "REE".
    Ree,
}

impl Cue {
    /// Every cue, in a fixed order usable for indexing.
    pub const ALL: [Self; 4] = [Self::O, Self::Ooo, Self::Re, Self::Ree];

    /// Stable lowercase key, also the default file stem.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::O => "o",
            Self::Ooo => "ooo",
            Self::Re => "re",
            Self::Ree => "ree",
        }
    }

    /// Position of this cue in [`Cue::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::O => 0,
            Self::Ooo => 1,
            Self::Re => 2,
            Self::Ree => 3,
        }
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Part {
    /// Cue played when this part is appended, and for this part in the
    /// finish sequence.
    #[must_use]
    pub const fn cue(self) -> Cue {
        match self {
            Self::Dark => Cue::O,
            Self::White => Cue::Re,
        }
    }
}

/// A cue and when it starts, relative to the finish action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledCue {
    /// What to play.
    pub cue: Cue,
    /// Milliseconds after the finish action.
    pub offset_ms: u32,
}

/// What to play when the tower is finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CuePlan {
    /// Play this one cue immediately and nothing else.
    Celebration(Cue),
    /// Play each cue at its offset. Empty for an empty tower.
    Sequence(Vec<ScheduledCue>),
}

impl CuePlan {
    /// Every cue the plan plays, with its offset. A celebration is a
    /// single cue at offset 0.
    #[must_use]
    pub fn scheduled(&self) -> Vec<ScheduledCue> {
        match self {
            Self::Celebration(cue) => vec![ScheduledCue {
                cue: *cue,
                offset_ms: 0,
            }],
            Self::Sequence(cues) => cues.clone(),
        }
    }

    /// Returns `true` if the plan plays nothing.
    #[must_use]
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::Sequence(cues) if cues.is_empty())
    }
}

/// Plan the cues for finishing a tower made of `parts`.
///
/// A tower of only cookies with more than
/// [`celebration_threshold`](FeedbackConfig::celebration_threshold)
/// layers plays [`Cue::Ooo`]; a tower of only filling past the same
/// threshold plays [`Cue::Ree`]. Otherwise each part's cue plays in
/// order, the `k`-th one starting `k * cue_interval_ms` after the
/// finish action. Offsets saturate at `u32::MAX`.
///
/// # Examples
///
/// ```
/// use oreo_stack::{Cue, CuePlan, FeedbackConfig, Part, plan_finish};
///
/// let plan = plan_finish(&[Part::Dark; 6], &FeedbackConfig::default());
/// assert_eq!(plan, CuePlan::Celebration(Cue::Ooo));
/// ```
#[must_use]
pub fn plan_finish(parts: &[Part], config: &FeedbackConfig) -> CuePlan {
    let dark = Part::Dark.count_in(parts);
    let white = Part::White.count_in(parts);
    let threshold = config.celebration_threshold;

    if dark > threshold && white == 0 {
        return CuePlan::Celebration(Cue::Ooo);
    }
    if white > threshold && dark == 0 {
        return CuePlan::Celebration(Cue::Ree);
    }

    let cues = parts
        .iter()
        .enumerate()
        .map(|(k, part)| ScheduledCue {
            cue: part.cue(),
            offset_ms: u32::try_from(k)
                .map_or(u32::MAX, |k| k.saturating_mul(config.cue_interval_ms)),
        })
        .collect();
    CuePlan::Sequence(cues)
}

#[cfg(test)]
mod tests {
    use super::*;

    use Part::{Dark, White};

    fn plan(parts: &[Part]) -> CuePlan {
        plan_finish(parts, &FeedbackConfig::default())
    }

    fn offsets(plan: &CuePlan) -> Vec<u32> {
        plan.scheduled().iter().map(|s| s.offset_ms).collect()
    }

    #[test]
    fn press_cues() {
        assert_eq!(Dark.cue(), Cue::O);
        assert_eq!(White.cue(), Cue::Re);
    }

    #[test]
    fn six_darks_celebrate_once() {
        let plan = plan(&[Dark; 6]);
        assert_eq!(plan, CuePlan::Celebration(Cue::Ooo));
        assert_eq!(plan.scheduled().len(), 1);
    }

    #[test]
    fn six_whites_celebrate_once() {
        assert_eq!(plan(&[White; 6]), CuePlan::Celebration(Cue::Ree));
    }

    #[test]
    fn threshold_is_strict() {
        let plan = plan(&[Dark; 5]);
        assert_eq!(plan.scheduled().len(), 5);
        assert!(plan.scheduled().iter().all(|s| s.cue == Cue::O));
    }

    #[test]
    fn mixed_tower_never_celebrates() {
        let mut parts = vec![Dark; 10];
        parts.push(White);
        assert!(matches!(plan(&parts), CuePlan::Sequence(cues) if cues.len() == 11));
    }

    #[test]
    fn alternating_sequence_offsets() {
        let plan = plan(&[Dark, White, Dark, White]);
        assert_eq!(offsets(&plan), vec![0, 300, 600, 900]);
        let cues: Vec<Cue> = plan.scheduled().iter().map(|s| s.cue).collect();
        assert_eq!(cues, vec![Cue::O, Cue::Re, Cue::O, Cue::Re]);
    }

    #[test]
    fn empty_tower_is_silent() {
        let plan = plan(&[]);
        assert!(plan.is_silent());
        assert!(plan.scheduled().is_empty());
    }

    #[test]
    fn custom_interval_and_threshold() {
        let config = FeedbackConfig {
            cue_interval_ms: 125,
            celebration_threshold: 1,
            ..FeedbackConfig::default()
        };
        assert_eq!(
            plan_finish(&[White, White], &config),
            CuePlan::Celebration(Cue::Ree)
        );
        assert_eq!(offsets(&plan_finish(&[Dark], &config)), vec![0]);
        assert_eq!(
            offsets(&plan_finish(&[Dark, White, White], &config)),
            vec![0, 125, 250]
        );
    }

    #[test]
    fn offsets_saturate() {
        let config = FeedbackConfig {
            cue_interval_ms: u32::MAX,
            ..FeedbackConfig::default()
        };
        assert_eq!(
            offsets(&plan_finish(&[Dark, White, Dark], &config)),
            vec![0, u32::MAX, u32::MAX]
        );
    }

    #[test]
    fn cue_indices_match_all() {
        for (i, cue) in Cue::ALL.into_iter().enumerate() {
            assert_eq!(cue.index(), i);
        }
    }
}
