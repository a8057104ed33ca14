use arcis_imports::*;

#[encrypted]
mod circuits {
    use arcis_imports::*;

    /// Encrypted yes/no tallies of one voting.
    /// Field order matches the on-chain layout: `[no, yes]`.
    pub struct Tally {
        no: u64,
        yes: u64,
    }

    /// A single encrypted ballot. 1 = yes, 0 = no.
    pub struct Ballot {
        choice: u32,
    }

    /// Creates zeroed tallies for a freshly created voting.
    ///
    /// The tallies stay owned by the MXE, so nobody (the creator included)
    /// can read them until `share_results` or `reveal_results` runs.
    #[instruction]
    pub fn init_tally(mxe: Mxe) -> Enc<Mxe, Tally> {
        let tally = Tally { no: 0, yes: 0 };
        mxe.from_arcis(tally)
    }

    /// Adds one ballot to the running tallies.
    ///
    /// A ballot that is neither 0 nor 1 is spoiled and changes neither counter.
    /// Both comparisons always run so the branch taken does not leak the choice.
    ///
    /// # Arguments
    /// * `ballot_ctx` - The voter's encrypted ballot
    /// * `tally_ctx` - Current encrypted tallies
    #[instruction]
    pub fn cast_ballot(ballot_ctx: Enc<Shared, Ballot>, tally_ctx: Enc<Mxe, Tally>) -> Enc<Mxe, Tally> {
        let ballot = ballot_ctx.to_arcis();
        let mut tally = tally_ctx.to_arcis();

        if ballot.choice == 1 {
            tally.yes += 1;
        } else if ballot.choice == 0 {
            tally.no += 1;
        }

        tally_ctx.owner.from_arcis(tally)
    }

    /// Re-encrypts the current tallies for `receiver` without revealing them.
    ///
    /// Lets the creator follow the result privately while the voting is open.
    #[instruction]
    pub fn share_results(receiver: Shared, tally_ctx: Enc<Mxe, Tally>) -> Enc<Shared, Tally> {
        let tally = tally_ctx.to_arcis();
        receiver.from_arcis(tally)
    }

    /// Decrypts both tallies and returns them in plaintext as `(yes, no)`.
    #[instruction]
    pub fn reveal_results(tally_ctx: Enc<Mxe, Tally>) -> (u64, u64) {
        let tally = tally_ctx.to_arcis();

        // Both reveals must be unconditional
        let yes = tally.yes.reveal();
        let no = tally.no.reveal();

        (yes, no)
    }
}
