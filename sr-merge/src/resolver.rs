//! Resolution rule for annotation-heavy notes.
//!
//! Only the ancestor and the incoming revision are normalized; the local
//! revision is never stripped because its scheduling state is what we keep
//! when upstream changed nothing else.

use similar::{ChangeTag, TextDiff};

use crate::annotations::strip_annotations;
use crate::types::{MergeScenario, Resolution, ResolutionStrategy};

/// Picks the merged text for one conflicted note.
#[derive(Debug, Default, Clone, Copy)]
pub struct Resolver;

impl Resolver {
    pub fn new() -> Self {
        Self
    }

    /// Choose between the local and the incoming revision.
    ///
    /// Keeps `current` verbatim when `base` and `other` are equal once
    /// annotations are stripped, otherwise takes `other` verbatim.
    pub fn resolve(&self, scenario: &MergeScenario<&str>) -> Resolution {
        let base_clean = strip_annotations(scenario.base);
        let other_clean = strip_annotations(scenario.other);

        if base_clean == other_clean {
            return Resolution {
                content: scenario.current.to_string(),
                strategy: ResolutionStrategy::KeepCurrent,
                discarded_lines: 0,
            };
        }

        Resolution {
            content: scenario.other.to_string(),
            strategy: ResolutionStrategy::TakeOther,
            discarded_lines: changed_lines(scenario.current, scenario.other),
        }
    }
}

/// Number of local lines that do not survive when `current` is replaced by `other`.
fn changed_lines(current: &str, other: &str) -> usize {
    TextDiff::from_lines(current, other)
        .iter_all_changes()
        .filter(|change| change.tag() == ChangeTag::Delete)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_only_upstream_change_keeps_current() {
        let resolver = Resolver::new();
        let current = "Q\nA\n<!--SR:!2024-03-10,9,270-->\nlocal extra\n";
        let resolution = resolver.resolve(&MergeScenario::new(
            "Q\nA\n<!--SR:!2024-01-01,1,230-->\n",
            current,
            "Q\nA\n<!--SR:!2024-02-01,3,250-->\n",
        ));
        assert_eq!(resolution.strategy, ResolutionStrategy::KeepCurrent);
        assert_eq!(resolution.content, current);
        assert_eq!(resolution.discarded_lines, 0);
    }

    #[test]
    fn test_current_annotations_are_never_stripped() {
        let resolver = Resolver::new();
        let current = "<!--SR:!2024-03-10,9,270-->";
        let resolution = resolver.resolve(&MergeScenario::new("", current, ""));
        assert_eq!(resolution.strategy, ResolutionStrategy::KeepCurrent);
        assert_eq!(resolution.content, current);
    }

    #[test]
    fn test_content_change_upstream_takes_other() {
        let resolver = Resolver::new();
        let other = "Q\nB\n<!--SR:!2024-01-01,1,230-->\n";
        let resolution = resolver.resolve(&MergeScenario::new(
            "Q\nA\n<!--SR:!2024-01-01,1,230-->\n",
            "Q\nA (local edit)\n<!--SR:!2024-01-09,5,250-->\n",
            other,
        ));
        assert_eq!(resolution.strategy, ResolutionStrategy::TakeOther);
        assert_eq!(resolution.content, other);
        assert_eq!(resolution.discarded_lines, 2);
    }

    #[test]
    fn test_owned_scenario_can_be_borrowed() {
        let scenario = MergeScenario::new("a".to_string(), "b".to_string(), "a".to_string());
        let resolution = Resolver::new().resolve(&scenario.as_deref());
        assert_eq!(resolution.content, "b");
    }
}
