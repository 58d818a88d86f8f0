// Community data as handed to the presentation layer by the host
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Community {
    pub name: String,
    pub title: String,
    pub icon: Option<String>,
    pub banner: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CommunityAggregates {
    pub users_active_month: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscribedType {
    Subscribed,
    NotSubscribed,
    Pending,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CommunityView {
    pub community: Community,
    pub counts: CommunityAggregates,
    pub subscribed: SubscribedType,
}

impl CommunityView {
    /// Placeholder community for hosts that have no data source wired in.
    pub fn sample() -> Self {
        Self {
            community: Community {
                name: "rust".to_string(),
                title: "Rust Programming Language".to_string(),
                icon: None,
                banner: None,
            },
            counts: CommunityAggregates {
                users_active_month: 1204,
            },
            subscribed: SubscribedType::NotSubscribed,
        }
    }

    pub fn active_users_label(&self) -> String {
        format!("{} users / month", self.counts.users_active_month)
    }
}

/// How the follow button renders for a subscription state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowButton {
    pub label: &'static str,
    /// Outlined with a check mark instead of filled.
    pub joined: bool,
}

impl SubscribedType {
    pub fn follow_button(self) -> FollowButton {
        match self {
            SubscribedType::Subscribed => FollowButton { label: "Joined", joined: true },
            SubscribedType::NotSubscribed => FollowButton { label: "Subscribe", joined: false },
            SubscribedType::Pending => FollowButton { label: "Pending", joined: false },
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortType {
    Active,
    Hot,
    New,
    Old,
    MostComments,
    NewComments,
    TopHour,
    TopSixHour,
    TopTwelveHour,
    TopDay,
    TopWeek,
    TopMonth,
    TopYear,
    TopAll,
}

impl SortType {
    /// Offered directly by the sort dialog.
    pub const MAIN: [SortType; 6] = [
        SortType::Active,
        SortType::Hot,
        SortType::New,
        SortType::Old,
        SortType::MostComments,
        SortType::NewComments,
    ];

    /// Offered by the "Top" sub-dialog.
    pub const TOP: [SortType; 8] = [
        SortType::TopHour,
        SortType::TopSixHour,
        SortType::TopTwelveHour,
        SortType::TopDay,
        SortType::TopWeek,
        SortType::TopMonth,
        SortType::TopYear,
        SortType::TopAll,
    ];

    pub fn is_top(self) -> bool {
        Self::TOP.contains(&self)
    }

    pub fn label(self) -> &'static str {
        match self {
            SortType::Active => "Active",
            SortType::Hot => "Hot",
            SortType::New => "New",
            SortType::Old => "Old",
            SortType::MostComments => "Most Comments",
            SortType::NewComments => "New Comments",
            SortType::TopHour => "Top Hour",
            SortType::TopSixHour => "Top Six Hours",
            SortType::TopTwelveHour => "Top Twelve Hours",
            SortType::TopDay => "Top Day",
            SortType::TopWeek => "Top Week",
            SortType::TopMonth => "Top Month",
            SortType::TopYear => "Top Year",
            SortType::TopAll => "Top All Time",
        }
    }
}

impl fmt::Display for SortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_button_labels() {
        assert_eq!(SubscribedType::Subscribed.follow_button(), FollowButton { label: "Joined", joined: true });
        assert_eq!(SubscribedType::NotSubscribed.follow_button().label, "Subscribe");
        assert_eq!(SubscribedType::Pending.follow_button().label, "Pending");
        assert!(!SubscribedType::Pending.follow_button().joined);
    }

    #[test]
    fn test_sort_groups_are_disjoint() {
        for sort in SortType::MAIN {
            assert!(!sort.is_top());
        }
        for sort in SortType::TOP {
            assert!(sort.is_top());
        }
    }

    #[test]
    fn test_active_users_label() {
        let mut view = CommunityView::sample();
        view.counts.users_active_month = 42;
        assert_eq!(view.active_users_label(), "42 users / month");
    }
}
