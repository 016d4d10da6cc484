//! End-of-game achievement tiers.

use serde::{Deserialize, Serialize};

/// Tier earned by a final score. Thresholds are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Achievement {
    /// Below 25.
    Seedling,
    Sprout,
    Sapling,
    Grower,
    Harvester,
    Orchardist,
    /// 50 and above.
    MasterOrchardist,
}

const TIERS: [(i32, Achievement); 6] = [
    (50, Achievement::MasterOrchardist),
    (45, Achievement::Orchardist),
    (40, Achievement::Harvester),
    (35, Achievement::Grower),
    (30, Achievement::Sapling),
    (25, Achievement::Sprout),
];

impl Achievement {
    /// Tier for a final score.
    ///
    /// ```
    /// use orchard::session::Achievement;
    ///
    /// assert_eq!(Achievement::for_score(24), Achievement::Seedling);
    /// assert_eq!(Achievement::for_score(25), Achievement::Sprout);
    /// assert_eq!(Achievement::for_score(50), Achievement::MasterOrchardist);
    /// ```
    #[must_use]
    pub fn for_score(score: i32) -> Self {
        TIERS
            .iter()
            .find(|(threshold, _)| score >= *threshold)
            .map_or(Achievement::Seedling, |(_, tier)| *tier)
    }

    /// Display name.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Achievement::Seedling => "Seedling",
            Achievement::Sprout => "Sprout",
            Achievement::Sapling => "Sapling",
            Achievement::Grower => "Grower",
            Achievement::Harvester => "Harvester",
            Achievement::Orchardist => "Orchardist",
            Achievement::MasterOrchardist => "Master Orchardist",
        }
    }

    /// Announcement shown when the game ends.
    #[must_use]
    pub fn announcement(self, score: i32) -> String {
        format!("Harvest complete: {score} points. You earned the title \"{}\".", self.title())
    }
}

impl std::fmt::Display for Achievement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}
