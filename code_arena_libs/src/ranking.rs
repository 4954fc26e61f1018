//! Leaderboard ranking.
//!
//! Standard competition ranking: users sharing a solved count share a rank, and the next distinct
//! count skips as many ranks as the previous tie group had members (1, 1, 3, 4, 4, 6).

use crate::models::{RankedUser, User};

/// Running state of the rank fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RankState {
    rank: u32,
    previous_count: Option<usize>,
    tie_size: u32,
}

impl Default for RankState {
    fn default() -> Self {
        // tie_size must start at 0 so the first user keeps rank 1.
        Self {
            rank: 1,
            previous_count: None,
            tie_size: 0,
        }
    }
}

impl RankState {
    fn advance(&mut self, solved_count: usize) -> u32 {
        if self.previous_count == Some(solved_count) {
            self.tie_size += 1;
        } else {
            self.rank += self.tie_size;
            self.tie_size = 1;
        }
        self.previous_count = Some(solved_count);
        self.rank
    }
}

/// Attach a competition rank and solved count to every user.
///
/// `sorted_users` must already be ordered by descending solved count (see
/// [`sort_by_solved_desc`]). The order is not checked; an unsorted input still yields a rank per
/// user, just not a meaningful one.
pub fn compute_ranks<I>(sorted_users: I) -> Vec<RankedUser>
where
    I: IntoIterator<Item = User>,
{
    sorted_users
        .into_iter()
        .scan(RankState::default(), |state, user| {
            let solved_count = user.solved_count();
            let rank = state.advance(solved_count);
            Some(RankedUser {
                user,
                rank,
                solved_count,
            })
        })
        .collect()
}

/// Stable sort by descending solved count, the order `compute_ranks` expects.
pub fn sort_by_solved_desc(users: &mut [User]) {
    users.sort_by(|a, b| b.solved_count().cmp(&a.solved_count()));
}
