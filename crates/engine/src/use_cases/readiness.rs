//! Readiness classification and scoring.
//!
//! Every entry is classified from live state and scored with integer
//! arithmetic, so the same inputs always give the same order.

use std::cmp::Reverse;
use std::sync::Arc;

use ironpath_domain::common::none_if_blank;
use ironpath_domain::{
    PlanSnapshot, QuestBlocker, QuestEntry, QuestReadiness, QuestRow, QuestState,
};

use crate::entities::{LiveState, PlannerData};

const BASE_SCORE: i64 = 10_000;
const IN_PROGRESS_STATE_BONUS: i64 = 1_000;
const READY_BONUS: i64 = 500;
const BLOCKED_PENALTY: i64 = -250;
const DONE_PENALTY: i64 = -10_000;
const IN_PROGRESS_BONUS: i64 = 750;
const DEFICIT_WEIGHT: i64 = 40;
/// Deficit charged per missing prerequisite quest
const PREREQUISITE_DEFICIT: i64 = 3;

const TAG_BONUSES: [(&str, i64); 5] = [
    ("combatxp", 200),
    ("unlock", 200),
    ("capstone", -150),
    ("grandmaster", -100),
    ("early", 100),
];

/// Score for one classified entry at `route_index`.
pub fn score(
    entry: &QuestEntry,
    state: QuestState,
    readiness: QuestReadiness,
    blockers: &[QuestBlocker],
    route_index: usize,
) -> i64 {
    let index = i64::try_from(route_index).unwrap_or(i64::MAX);
    let mut score = BASE_SCORE.saturating_sub(index);

    if state.is_in_progress() {
        score += IN_PROGRESS_STATE_BONUS;
    }

    score += match readiness {
        QuestReadiness::Ready => READY_BONUS,
        QuestReadiness::Blocked => BLOCKED_PENALTY,
        QuestReadiness::Done => DONE_PENALTY,
        QuestReadiness::InProgress => IN_PROGRESS_BONUS,
    };

    let deficit: i64 = blockers
        .iter()
        .map(|blocker| match blocker {
            QuestBlocker::SkillLevel { have, need, .. } => i64::from((need - have).max(0)),
            QuestBlocker::PrerequisiteQuest { .. } => PREREQUISITE_DEFICIT,
        })
        .sum();
    score -= deficit * DEFICIT_WEIGHT;

    score
        + TAG_BONUSES
            .iter()
            .filter(|(tag, _)| entry.has_tag(tag))
            .map(|(_, bonus)| bonus)
            .sum::<i64>()
}

/// Classifies, scores and buckets quest entries.
pub struct ComputeReadinessSnapshot {
    data: Arc<PlannerData>,
    live: LiveState,
}

impl ComputeReadinessSnapshot {
    pub fn new(data: Arc<PlannerData>, live: LiveState) -> Self {
        Self { data, live }
    }

    pub fn execute(&self, entries: &[QuestEntry]) -> PlanSnapshot {
        let mut snapshot = PlanSnapshot {
            total: entries.len(),
            ..PlanSnapshot::default()
        };

        for (route_index, entry) in entries.iter().enumerate() {
            let row = self.row_for(entry, route_index);
            if row.state.is_finished() {
                snapshot.completed += 1;
            }
            match row.readiness {
                QuestReadiness::Done => snapshot.done.push(row),
                QuestReadiness::InProgress => snapshot.in_progress.push(row),
                QuestReadiness::Ready => snapshot.ready.push(row),
                QuestReadiness::Blocked => snapshot.blocked.push(row),
            }
        }

        for bucket in [
            &mut snapshot.in_progress,
            &mut snapshot.ready,
            &mut snapshot.blocked,
        ] {
            bucket.sort_by_key(|row| (Reverse(row.score), row.route_index));
        }
        snapshot.done.sort_by_key(|row| row.route_index);

        snapshot.recommended = snapshot
            .in_progress
            .first()
            .or_else(|| snapshot.ready.first())
            .or_else(|| snapshot.blocked.first())
            .cloned();

        tracing::debug!(
            total = snapshot.total,
            completed = snapshot.completed,
            recommended = ?snapshot.recommended.as_ref().map(|row| row.entry.name.as_str()),
            "Readiness snapshot computed"
        );
        snapshot
    }

    /// Entries whose quest is finished.
    pub fn count_completed(&self, entries: &[QuestEntry]) -> usize {
        entries
            .iter()
            .filter(|entry| self.state_of(entry).is_finished())
            .count()
    }

    /// First entry, in list order, whose quest is not finished.
    pub fn find_next<'e>(&self, entries: &'e [QuestEntry]) -> Option<&'e QuestEntry> {
        entries
            .iter()
            .find(|entry| !self.state_of(entry).is_finished())
    }

    fn row_for(&self, entry: &QuestEntry, route_index: usize) -> QuestRow {
        let state = self.state_of(entry);
        let blockers = self.blockers_for(entry);
        let readiness = QuestReadiness::classify(state, &blockers);
        let score = score(entry, state, readiness, &blockers, route_index);
        QuestRow {
            entry: entry.clone(),
            state,
            readiness,
            blockers,
            score,
            route_index,
        }
    }

    fn state_of(&self, entry: &QuestEntry) -> QuestState {
        match &entry.quest_id {
            Some(quest) => self.live.quest_state(quest),
            None => self.live.quest_state_by_name(&self.data.registry, &entry.name),
        }
    }

    /// Unfinished prerequisites first, then unmet skill levels.
    fn blockers_for(&self, entry: &QuestEntry) -> Vec<QuestBlocker> {
        let prerequisites = entry
            .prerequisite_quests
            .iter()
            .filter_map(|name| none_if_blank(name))
            .filter(|name| {
                !self
                    .live
                    .quest_state_by_name(&self.data.registry, name)
                    .is_finished()
            })
            .map(QuestBlocker::prerequisite);

        let skills = entry
            .min_skills
            .iter()
            .filter(|(_, need)| **need > 0)
            .filter_map(|(skill, need)| {
                let have = self.live.skill_level(*skill);
                (have < *need).then(|| QuestBlocker::skill(*skill, have, *need))
            });

        prerequisites.chain(skills).collect()
    }
}
