use anchor_lang::prelude::*;

use crate::constants::{FACTORY_SEED, VOTING_SEED};

/// Registry of every voting created through this program.
///
/// Votings are PDAs indexed by creation order, so the list of addresses is
/// derived from `voting_count` rather than stored.
#[account]
#[derive(InitSpace)]
pub struct VotingFactory {
    /// PDA bump seed
    pub bump: u8,
    /// Account that initialized the factory
    pub admin: Pubkey,
    /// Number of votings created so far
    pub voting_count: u64,
}

impl VotingFactory {
    pub fn address() -> Pubkey {
        Pubkey::find_program_address(&[FACTORY_SEED], &crate::ID).0
    }

    /// Address of the voting created at position `index`.
    pub fn voting_address(factory: &Pubkey, index: u64) -> Pubkey {
        Pubkey::find_program_address(
            &[VOTING_SEED, factory.as_ref(), index.to_le_bytes().as_ref()],
            &crate::ID,
        )
        .0
    }

    /// Addresses of all votings, oldest first.
    pub fn voting_addresses(&self, factory: &Pubkey) -> Vec<Pubkey> {
        (0..self.voting_count)
            .map(|index| Self::voting_address(factory, index))
            .collect()
    }

    /// Reserves the next voting index.
    pub fn next_index(&mut self) -> Option<u64> {
        let index = self.voting_count;
        self.voting_count = index.checked_add(1)?;
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_index_counts_up() {
        let mut factory = VotingFactory {
            bump: 255,
            admin: Pubkey::new_unique(),
            voting_count: 0,
        };
        assert_eq!(factory.next_index(), Some(0));
        assert_eq!(factory.next_index(), Some(1));
        assert_eq!(factory.voting_count, 2);
    }

    #[test]
    fn next_index_refuses_to_wrap() {
        let mut factory = VotingFactory {
            bump: 255,
            admin: Pubkey::new_unique(),
            voting_count: u64::MAX,
        };
        assert_eq!(factory.next_index(), None);
        assert_eq!(factory.voting_count, u64::MAX);
    }

    #[test]
    fn voting_addresses_follow_creation_order() {
        let factory_key = VotingFactory::address();
        let factory = VotingFactory {
            bump: 255,
            admin: Pubkey::new_unique(),
            voting_count: 3,
        };
        let addresses = factory.voting_addresses(&factory_key);
        assert_eq!(addresses.len(), 3);
        assert_eq!(addresses[2], VotingFactory::voting_address(&factory_key, 2));
        assert_ne!(addresses[0], addresses[1]);
    }
}
