// Core algorithm exports
pub mod matcher;
pub mod normalizer;
pub mod reason;
pub mod scoring;
pub mod skills;

pub use matcher::{Matcher, RankedList};
pub use normalizer::{SkillNormalizer, SynonymCluster, SynonymTable};
pub use reason::{generate_match_reason, SectorKeywords};
pub use scoring::{calculate_match_score, MatchScore, WeightsError};
pub use skills::{match_skills, matched_required, SkillMatch};
