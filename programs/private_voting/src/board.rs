//! Client-side view of the votings registered in the factory.
//!
//! Mirrors what a dashboard needs: every voting's address, whether it is
//! finished, whether the viewer already voted, and the public results split
//! into the viewer's own votings and everybody else's.

use std::{fmt, str::FromStr};

use anchor_lang::prelude::Pubkey;
use thiserror::Error;

use crate::{
    constants::BALLOT_SEED,
    schedule,
    state::{Voting, VotingFactory},
};

pub fn factory_address() -> Pubkey {
    VotingFactory::address()
}

pub fn voting_address(index: u64) -> Pubkey {
    VotingFactory::voting_address(&factory_address(), index)
}

/// Address of the receipt that exists iff `voter` has voted in `voting`.
pub fn ballot_address(voting: &Pubkey, voter: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[BALLOT_SEED, voting.as_ref(), voter.as_ref()], &crate::ID).0
}

/// Every voting address for a factory holding `voting_count` votings.
pub fn all_voting_addresses(voting_count: u64) -> Vec<Pubkey> {
    let factory = factory_address();
    (0..voting_count)
        .map(|index| VotingFactory::voting_address(&factory, index))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Argument --value is not an integer: {0}")]
    NotAnInteger(String),
    #[error("Argument --value does not fit in 32 bits: {0}")]
    OutOfRange(String),
    #[error("Argument --address is not a valid address: {0}")]
    InvalidAddress(String),
    #[error("Unknown time unit: {0}")]
    UnknownUnit(String),
    #[error("Duration is too large")]
    DurationOverflow,
}

/// Voting a command targets: an explicit `--address` wins over the voting
/// at `index` in the default factory.
pub fn resolve_voting(address: Option<&str>, index: u64) -> Result<Pubkey, BoardError> {
    match address {
        Some(raw) => Pubkey::from_str(raw.trim())
            .map_err(|_| BoardError::InvalidAddress(raw.to_string())),
        None => Ok(voting_address(index)),
    }
}

/// Parses the plaintext ballot given on a command line before encryption.
pub fn parse_vote_value(raw: &str) -> Result<u32, BoardError> {
    let trimmed = raw.trim();
    let value: i128 = trimmed
        .parse()
        .map_err(|_| BoardError::NotAnInteger(raw.to_string()))?;
    u32::try_from(value).map_err(|_| BoardError::OutOfRange(raw.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationUnit {
    #[default]
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl DurationUnit {
    pub fn seconds_per_unit(self) -> u64 {
        match self {
            DurationUnit::Seconds => 1,
            DurationUnit::Minutes => 60,
            DurationUnit::Hours => 3_600,
            DurationUnit::Days => 86_400,
        }
    }

    pub fn to_seconds(self, amount: u64) -> Result<u64, BoardError> {
        amount
            .checked_mul(self.seconds_per_unit())
            .ok_or(BoardError::DurationOverflow)
    }
}

impl FromStr for DurationUnit {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "sec" | "second" | "seconds" => Ok(DurationUnit::Seconds),
            "m" | "min" | "minute" | "minutes" => Ok(DurationUnit::Minutes),
            "h" | "hour" | "hours" => Ok(DurationUnit::Hours),
            "d" | "day" | "days" => Ok(DurationUnit::Days),
            _ => Err(BoardError::UnknownUnit(s.to_string())),
        }
    }
}

/// Yes/no share of the revealed ballots, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percentages {
    pub yes: f64,
    pub no: f64,
}

impl Percentages {
    /// Both shares are zero when no ballot was counted.
    pub fn of(yes: u64, no: u64) -> Self {
        let total = yes as f64 + no as f64;
        if total == 0.0 {
            return Percentages { yes: 0.0, no: 0.0 };
        }
        Percentages {
            yes: yes as f64 * 100.0 / total,
            no: no as f64 * 100.0 / total,
        }
    }
}

/// One row of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct VotingSummary {
    pub address: Pubkey,
    pub description: String,
    pub deadline: i64,
    pub creator: Pubkey,
    pub finished: bool,
    pub user_voted: bool,
    pub results_revealed: bool,
    pub yes: u64,
    pub no: u64,
}

impl VotingSummary {
    /// Builds a row from a fetched voting account.
    ///
    /// Tallies stay at zero until the creator reveals them, so a finished but
    /// unrevealed voting shows `0 / 0`.
    pub fn from_account(address: Pubkey, voting: &Voting, user_voted: bool, now: i64) -> Self {
        let (yes, no) = voting.public_results().unwrap_or((0, 0));
        VotingSummary {
            address,
            description: voting.description.clone(),
            deadline: voting.deadline,
            creator: voting.creator,
            finished: schedule::is_finished(now, voting.deadline),
            user_voted,
            results_revealed: voting.results_revealed,
            yes,
            no,
        }
    }

    pub fn percentages(&self) -> Percentages {
        Percentages::of(self.yes, self.no)
    }

    /// Whether `viewer` can still cast a ballot here.
    pub fn can_vote(&self, viewer: &Pubkey) -> bool {
        !self.finished && !self.user_voted && self.creator != *viewer
    }
}

impl fmt::Display for VotingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.finished { "finished" } else { "ongoing" };
        write!(f, "{} [{}] deadline={}", self.description, status, self.deadline)?;
        if self.finished {
            let share = self.percentages();
            write!(
                f,
                " yes: {} ({:.1}%) no: {} ({:.1}%)",
                self.yes, share.yes, self.no, share.no
            )?;
        } else if self.user_voted {
            write!(f, " voted")?;
        }
        Ok(())
    }
}

/// Votings split by who created them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    /// Created by the viewer
    pub mine: Vec<VotingSummary>,
    /// Created by anybody else
    pub community: Vec<VotingSummary>,
}

impl Board {
    pub fn split(summaries: Vec<VotingSummary>, viewer: &Pubkey) -> Self {
        let (mine, community) = summaries
            .into_iter()
            .partition(|summary| summary.creator == *viewer);
        Board { mine, community }
    }

    pub fn visible_mine(&self, hide_finished: bool) -> impl Iterator<Item = &VotingSummary> {
        Self::visible(&self.mine, hide_finished)
    }

    pub fn visible_community(&self, hide_finished: bool) -> impl Iterator<Item = &VotingSummary> {
        Self::visible(&self.community, hide_finished)
    }

    fn visible(
        summaries: &[VotingSummary],
        hide_finished: bool,
    ) -> impl Iterator<Item = &VotingSummary> {
        summaries
            .iter()
            .filter(move |summary| !(hide_finished && summary.finished))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(creator: Pubkey, deadline: i64) -> Voting {
        Voting {
            bump: 255,
            encrypted_tally: [[7; 32]; 2],
            nonce: 1,
            index: 0,
            creator,
            description: "Vote YES or NO".to_string(),
            created_at: deadline - 60,
            deadline,
            ballots_cast: 3,
            tally_ready: true,
            pending: None,
            pending_computation: Pubkey::default(),
            pending_since: 0,
            results_revealed: false,
            yes: 0,
            no: 0,
        }
    }

    #[test]
    fn vote_value_must_be_an_integer() {
        assert_eq!(parse_vote_value("1"), Ok(1));
        assert_eq!(parse_vote_value(" 0 "), Ok(0));
        assert!(matches!(parse_vote_value("yes"), Err(BoardError::NotAnInteger(_))));
        assert!(matches!(parse_vote_value("1.5"), Err(BoardError::NotAnInteger(_))));
        assert!(matches!(parse_vote_value("-1"), Err(BoardError::OutOfRange(_))));
        assert!(matches!(parse_vote_value("4294967296"), Err(BoardError::OutOfRange(_))));
    }

    #[test]
    fn explicit_address_overrides_index() {
        let explicit = Pubkey::new_unique();
        assert_eq!(
            resolve_voting(Some(&explicit.to_string()), 4),
            Ok(explicit)
        );
        assert_eq!(resolve_voting(None, 4), Ok(voting_address(4)));
        assert!(matches!(
            resolve_voting(Some("not-an-address"), 0),
            Err(BoardError::InvalidAddress(_))
        ));
    }

    #[test]
    fn errors_read_like_cli_messages() {
        assert_eq!(
            parse_vote_value("abc").unwrap_err().to_string(),
            "Argument --value is not an integer: abc"
        );
        assert_eq!(BoardError::DurationOverflow.to_string(), "Duration is too large");
    }

    #[test]
    fn duration_units_convert_to_seconds() {
        assert_eq!(DurationUnit::Seconds.to_seconds(45), Ok(45));
        assert_eq!(DurationUnit::Minutes.to_seconds(2), Ok(120));
        assert_eq!(DurationUnit::Hours.to_seconds(1), Ok(3_600));
        assert_eq!(DurationUnit::Days.to_seconds(3), Ok(259_200));
        assert_eq!(
            DurationUnit::Days.to_seconds(u64::MAX),
            Err(BoardError::DurationOverflow)
        );
        assert_eq!("Hours".parse::<DurationUnit>(), Ok(DurationUnit::Hours));
        assert!("weeks".parse::<DurationUnit>().is_err());
    }

    #[test]
    fn percentages_handle_empty_tally() {
        assert_eq!(Percentages::of(0, 0), Percentages { yes: 0.0, no: 0.0 });
        let share = Percentages::of(1, 3);
        assert_eq!(share.yes, 25.0);
        assert_eq!(share.no, 75.0);
    }

    #[test]
    fn unrevealed_results_read_as_zero() {
        let creator = Pubkey::new_unique();
        let mut voting = account(creator, 1_000);
        voting.yes = 5;

        let summary = VotingSummary::from_account(Pubkey::new_unique(), &voting, false, 2_000);
        assert!(summary.finished);
        assert!(!summary.results_revealed);
        assert_eq!((summary.yes, summary.no), (0, 0));

        voting.publish_results(2, 1);
        let summary = VotingSummary::from_account(Pubkey::new_unique(), &voting, false, 2_000);
        assert_eq!((summary.yes, summary.no), (2, 1));
        assert_eq!(
            summary.to_string(),
            "Vote YES or NO [finished] deadline=1000 yes: 2 (66.7%) no: 1 (33.3%)"
        );
    }

    #[test]
    fn board_splits_by_creator_and_hides_finished() {
        let viewer = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let now = 500;

        let summaries = vec![
            VotingSummary::from_account(voting_address(0), &account(viewer, 100), false, now),
            VotingSummary::from_account(voting_address(1), &account(other, 1_000), true, now),
            VotingSummary::from_account(voting_address(2), &account(other, 200), false, now),
        ];

        let board = Board::split(summaries, &viewer);
        assert_eq!(board.mine.len(), 1);
        assert_eq!(board.community.len(), 2);

        assert_eq!(board.visible_mine(true).count(), 0);
        let open: Vec<_> = board.visible_community(true).collect();
        assert_eq!(open.len(), 1);
        assert_eq!(open[0].address, voting_address(1));
        assert!(!open[0].can_vote(&viewer));
        assert_eq!(open[0].to_string(), "Vote YES or NO [ongoing] deadline=1000 voted");
    }

    #[test]
    fn addresses_are_stable_and_distinct() {
        let all = all_voting_addresses(3);
        assert_eq!(all, vec![voting_address(0), voting_address(1), voting_address(2)]);

        let voter = Pubkey::new_unique();
        assert_ne!(ballot_address(&all[0], &voter), ballot_address(&all[1], &voter));
        assert_eq!(ballot_address(&all[0], &voter), ballot_address(&all[0], &voter));
    }
}
