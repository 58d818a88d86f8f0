//! Community header overlay state
//!
//! The sort dialog, the "Top" sort dialog and the overflow menu share one
//! slot, so two of them can never be open at once.

use tracing::debug;

use super::types::SortType;
use crate::features::navigation::NavTarget;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderOverlay {
    #[default]
    Closed,
    SortOptions,
    TopOptions,
    MoreOptions,
}

#[derive(Clone, Debug, PartialEq)]
pub enum HeaderEvent {
    ToggleSort,
    ToggleMore,
    Dismiss,
    PickSort(SortType),
    OpenTopOptions,
    Refresh,
    CommunityInfo,
    BlockCommunity,
}

/// Side effects the header asks its host to perform.
#[derive(Clone, Debug, PartialEq)]
pub enum HeaderEffect {
    SelectSort(SortType),
    Refresh,
    Navigate(NavTarget),
    Block,
}

impl HeaderOverlay {
    /// Apply an event, returning the next overlay and the effect to run, if any.
    ///
    /// Events that do not belong to the current overlay are ignored.
    pub fn transition(self, event: HeaderEvent) -> (HeaderOverlay, Option<HeaderEffect>) {
        use HeaderOverlay::*;

        let (next, effect) = match (self, event) {
            (SortOptions, HeaderEvent::ToggleSort) => (Closed, None),
            (_, HeaderEvent::ToggleSort) => (SortOptions, None),
            (MoreOptions, HeaderEvent::ToggleMore) => (Closed, None),
            (_, HeaderEvent::ToggleMore) => (MoreOptions, None),
            (_, HeaderEvent::Dismiss) => (Closed, None),
            (SortOptions | TopOptions, HeaderEvent::PickSort(sort)) => {
                (Closed, Some(HeaderEffect::SelectSort(sort)))
            }
            (SortOptions, HeaderEvent::OpenTopOptions) => (TopOptions, None),
            (MoreOptions, HeaderEvent::Refresh) => (Closed, Some(HeaderEffect::Refresh)),
            (MoreOptions, HeaderEvent::CommunityInfo) => (
                Closed,
                Some(HeaderEffect::Navigate(NavTarget::CommunitySidebar)),
            ),
            (MoreOptions, HeaderEvent::BlockCommunity) => (Closed, Some(HeaderEffect::Block)),
            (current, ignored) => {
                debug!("header event {:?} ignored while {:?}", ignored, current);
                (current, None)
            }
        };
        (next, effect)
    }

    pub fn is_open(self) -> bool {
        self != HeaderOverlay::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_dialog_toggles() {
        let (overlay, effect) = HeaderOverlay::Closed.transition(HeaderEvent::ToggleSort);
        assert_eq!(overlay, HeaderOverlay::SortOptions);
        assert!(effect.is_none());

        let (overlay, _) = overlay.transition(HeaderEvent::ToggleSort);
        assert_eq!(overlay, HeaderOverlay::Closed);
    }

    #[test]
    fn test_pick_sort_closes_and_emits() {
        let (overlay, effect) =
            HeaderOverlay::SortOptions.transition(HeaderEvent::PickSort(SortType::New));
        assert_eq!(overlay, HeaderOverlay::Closed);
        assert_eq!(effect, Some(HeaderEffect::SelectSort(SortType::New)));
    }

    #[test]
    fn test_top_options_flow() {
        let (overlay, _) = HeaderOverlay::SortOptions.transition(HeaderEvent::OpenTopOptions);
        assert_eq!(overlay, HeaderOverlay::TopOptions);

        let (overlay, effect) = overlay.transition(HeaderEvent::PickSort(SortType::TopWeek));
        assert_eq!(overlay, HeaderOverlay::Closed);
        assert_eq!(effect, Some(HeaderEffect::SelectSort(SortType::TopWeek)));
    }

    #[test]
    fn test_more_options_actions() {
        let (overlay, effect) = HeaderOverlay::MoreOptions.transition(HeaderEvent::Refresh);
        assert_eq!((overlay, effect), (HeaderOverlay::Closed, Some(HeaderEffect::Refresh)));

        let (overlay, effect) = HeaderOverlay::MoreOptions.transition(HeaderEvent::CommunityInfo);
        assert_eq!(overlay, HeaderOverlay::Closed);
        assert_eq!(effect, Some(HeaderEffect::Navigate(NavTarget::CommunitySidebar)));

        let (overlay, effect) = HeaderOverlay::MoreOptions.transition(HeaderEvent::BlockCommunity);
        assert_eq!((overlay, effect), (HeaderOverlay::Closed, Some(HeaderEffect::Block)));
    }

    #[test]
    fn test_opening_one_overlay_replaces_another() {
        let (overlay, _) = HeaderOverlay::SortOptions.transition(HeaderEvent::ToggleMore);
        assert_eq!(overlay, HeaderOverlay::MoreOptions);

        let (overlay, _) = HeaderOverlay::TopOptions.transition(HeaderEvent::ToggleSort);
        assert_eq!(overlay, HeaderOverlay::SortOptions);
    }

    #[test]
    fn test_dismiss_always_closes() {
        for overlay in [
            HeaderOverlay::Closed,
            HeaderOverlay::SortOptions,
            HeaderOverlay::TopOptions,
            HeaderOverlay::MoreOptions,
        ] {
            assert_eq!(overlay.transition(HeaderEvent::Dismiss), (HeaderOverlay::Closed, None));
        }
    }

    #[test]
    fn test_events_for_closed_overlays_are_ignored() {
        assert_eq!(
            HeaderOverlay::Closed.transition(HeaderEvent::PickSort(SortType::Hot)),
            (HeaderOverlay::Closed, None)
        );
        assert_eq!(
            HeaderOverlay::SortOptions.transition(HeaderEvent::BlockCommunity),
            (HeaderOverlay::SortOptions, None)
        );
        assert_eq!(
            HeaderOverlay::MoreOptions.transition(HeaderEvent::OpenTopOptions),
            (HeaderOverlay::MoreOptions, None)
        );
    }
}
