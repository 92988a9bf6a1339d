//! Random selection of an unused domain.

use rand::{seq::IndexedRandom, Rng};

use crate::{model::dispense::SelectedDomain, util::domain::with_scheme};

/// Picks a domain the user hasn't received yet, uniformly at random.
///
/// # Arguments
/// - `group_domains` - Stored domain names of the group
/// - `used_domains` - Domains already handed to the user
/// - `rng` - Random source; tests pass a seeded `StdRng`
///
/// # Returns
/// - `Some(SelectedDomain)` - The picked domain as a URL plus its stored form
/// - `None` - Every domain in the group has been used
pub fn select<'d, R: Rng + ?Sized>(
    group_domains: impl IntoIterator<Item = &'d str>,
    used_domains: &[String],
    rng: &mut R,
) -> Option<SelectedDomain> {
    let candidates: Vec<&str> = group_domains
        .into_iter()
        .filter(|domain| !used_domains.iter().any(|used| used == domain))
        .collect();

    candidates.choose(rng).map(|raw| SelectedDomain {
        url: with_scheme(raw),
        raw: raw.to_string(),
    })
}
