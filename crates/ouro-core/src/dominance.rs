//! The cyclic dominance rule that decides contests.
//!
//! Breeds sit on a conceptual circle of size `num_breeds`. Between two
//! distinct breeds, whichever reaches the other along the shorter arc
//! wins: each breed beats the breeds just behind it on the circle and
//! loses to the ones just ahead. Three breeds give exactly
//! rock-paper-scissors; larger counts generalize the same
//! non-transitive structure.

use crate::breed::Breed;

/// Outcome of a single challenger-versus-defender contest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The challenger dominates: the defender's cell is overwritten.
    ChallengerWins,
    /// The defender dominates: the challenger's cell is overwritten.
    DefenderWins,
    /// Equal breeds: the contest leaves the grid untouched.
    Tie,
}

/// Resolve a contest between a challenger and a defender.
///
/// Computes both cyclic distances on the breed circle:
/// `clockwise = (defender - challenger) mod n` and
/// `counter_clockwise = (challenger - defender) mod n`, with `n =
/// num_breeds` and the modulo normalized to be non-negative. The
/// challenger wins when the clockwise distance is strictly larger;
/// otherwise the defender wins. Equal breeds tie.
///
/// For odd `n` every pair of distinct breeds has a winner. For even `n`
/// the breed exactly `n / 2` steps away is equidistant both ways, and
/// that contest resolves to the defender; in particular, with two
/// breeds the defender always wins. This bias is part of the engine's
/// observable behavior.
///
/// `num_breeds` must be at least 1 and both breed values must lie in
/// `[0, num_breeds)`.
pub fn resolve(challenger: Breed, defender: Breed, num_breeds: u8) -> Outcome {
    debug_assert!(num_breeds >= 1, "num_breeds must be >= 1");
    debug_assert!(
        challenger.0 < num_breeds && defender.0 < num_breeds,
        "breeds {challenger}, {defender} out of range for {num_breeds} breeds"
    );
    if challenger == defender {
        return Outcome::Tie;
    }
    let n = i32::from(num_breeds);
    let clockwise = (i32::from(defender.0) - i32::from(challenger.0)).rem_euclid(n);
    let counter_clockwise = (i32::from(challenger.0) - i32::from(defender.0)).rem_euclid(n);
    if clockwise > counter_clockwise {
        Outcome::ChallengerWins
    } else {
        Outcome::DefenderWins
    }
}
