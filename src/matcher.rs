//! Checks a list of required names (extensions or layers) against the names a
//! host actually reports.
//!
//! Matching is existence-based: an available name can satisfy any number of
//! requirements, and a requirement listed twice is satisfied by the same
//! available entry both times.

use ahash::AHashSet;
use std::hash::Hash;

/// How much detail [`verify_all_present()`] should collect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportMode {
    /// Only decide the outcome. Stops at the first missing requirement.
    #[default]
    Silent,
    /// Also classify every scanned available entry, for printing.
    Verbose,
}

/// How an available entry relates to the requirements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchStatus {
    Matched,
    NotRequired,
}

/// One line of a verbose listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Listing<'a, T> {
    pub name: &'a T,
    pub status: MatchStatus,
}

/// Outcome of [`verify_all_present()`].
#[derive(Clone, Debug)]
pub struct MatchResult<'a, T> {
    missing: Vec<&'a T>,
    listing: Vec<Listing<'a, T>>,
}

impl<'a, T> MatchResult<'a, T> {
    /// True iff every required name was found.
    #[inline]
    pub fn all_present(&self) -> bool {
        self.missing.is_empty()
    }

    /// Required names that weren't found.
    ///
    /// In [`ReportMode::Silent`] this holds at most the first one; in
    /// [`ReportMode::Verbose`] it holds every distinct missing name, in the
    /// order they were required.
    pub fn missing(&self) -> &[&'a T] {
        &self.missing
    }

    /// Classification of the available entries. Empty unless the check ran
    /// in [`ReportMode::Verbose`] with at least one requirement.
    pub fn listing(&self) -> &[Listing<'a, T>] {
        &self.listing
    }
}

/// Decide whether every name in `required` appears in `available`.
///
/// Comparison is plain equality, so for [`crate::util::VkExtensionName`] it is
/// byte-exact and case-sensitive. Neither slice is modified.
pub fn verify_all_present<'a, T>(
    required: &'a [T],
    available: &'a [T],
    mode: ReportMode,
) -> MatchResult<'a, T>
where
    T: Eq + Hash,
{
    if required.is_empty() {
        return MatchResult {
            missing: Vec::new(),
            listing: Vec::new(),
        };
    }

    match mode {
        ReportMode::Silent => verify_silent(required, available),
        ReportMode::Verbose => verify_verbose(required, available),
    }
}

fn verify_silent<'a, T: Eq + Hash>(required: &'a [T], available: &'a [T]) -> MatchResult<'a, T> {
    let available_set = available.iter().collect::<AHashSet<_>>();

    let missing = required
        .iter()
        .find(|name| !available_set.contains(name))
        .into_iter()
        .collect();

    MatchResult {
        missing,
        listing: Vec::new(),
    }
}

fn verify_verbose<'a, T: Eq + Hash>(required: &'a [T], available: &'a [T]) -> MatchResult<'a, T> {
    let required_set = required.iter().collect::<AHashSet<_>>();
    let mut satisfied = AHashSet::with_capacity(required_set.len());
    let mut listing = Vec::with_capacity(available.len());

    for name in available {
        // Once everything is satisfied there's nothing left to look up
        let status = if satisfied.len() < required_set.len() && required_set.contains(name) {
            satisfied.insert(name);
            MatchStatus::Matched
        } else {
            MatchStatus::NotRequired
        };

        listing.push(Listing { name, status });
    }

    let mut reported = AHashSet::new();
    let missing = required
        .iter()
        .filter(|name| !satisfied.contains(name) && reported.insert(*name))
        .collect();

    MatchResult { missing, listing }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(required: &[&str], available: &[&str]) -> bool {
        let silent = verify_all_present(required, available, ReportMode::Silent).all_present();
        let verbose = verify_all_present(required, available, ReportMode::Verbose).all_present();
        assert_eq!(silent, verbose, "modes disagree on {required:?} vs {available:?}");
        silent
    }

    #[test]
    fn empty_requirements_are_always_met() {
        assert!(check(&[], &[]));
        assert!(check(&[], &["A", "B"]));
    }

    #[test]
    fn empty_requirements_produce_no_listing() {
        let result = verify_all_present::<&str>(&[], &["A"], ReportMode::Verbose);
        assert!(result.listing().is_empty());
    }

    #[test]
    fn one_missing_name_fails_the_match() {
        assert!(!check(&["A", "B"], &["B"]));
    }

    #[test]
    fn order_of_available_names_is_irrelevant() {
        assert!(check(&["A", "B"], &["B", "C", "A"]));
    }

    #[test]
    fn repeated_available_name_satisfies_one_requirement() {
        assert!(check(&["A"], &["A", "A"]));
    }

    #[test]
    fn repeated_requirement_is_satisfied_by_one_entry() {
        assert!(check(&["A", "A"], &["A"]));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert!(!check(&["a"], &["A"]));
    }

    #[test]
    fn nothing_available_fails_nonempty_requirements() {
        assert!(!check(&["A"], &[]));
    }

    #[test]
    fn silent_mode_reports_first_missing_only() {
        let result = verify_all_present(&["A", "B", "C"], &["B"], ReportMode::Silent);
        assert_eq!(result.missing(), &[&"A"]);
        assert!(result.listing().is_empty());
    }

    #[test]
    fn verbose_mode_reports_every_missing_name_once() {
        let result = verify_all_present(&["A", "B", "A", "C"], &["B"], ReportMode::Verbose);
        assert_eq!(result.missing(), &[&"A", &"C"]);
    }

    #[test]
    fn verbose_listing_classifies_available_entries_in_order() {
        let result = verify_all_present(&["B", "D"], &["A", "B", "C", "D"], ReportMode::Verbose);

        let statuses = result
            .listing()
            .iter()
            .map(|l| (*l.name, l.status))
            .collect::<Vec<_>>();
        assert_eq!(
            statuses,
            vec![
                ("A", MatchStatus::NotRequired),
                ("B", MatchStatus::Matched),
                ("C", MatchStatus::NotRequired),
                ("D", MatchStatus::Matched),
            ]
        );
    }

    #[test]
    fn verbose_listing_stops_matching_once_everything_is_found() {
        let result = verify_all_present(&["A"], &["A", "A", "B"], ReportMode::Verbose);

        let statuses = result.listing().iter().map(|l| l.status).collect::<Vec<_>>();
        assert_eq!(
            statuses,
            vec![
                MatchStatus::Matched,
                MatchStatus::NotRequired,
                MatchStatus::NotRequired
            ]
        );
        assert!(result.all_present());
    }

    #[test]
    fn membership_matches_set_semantics() {
        let universe = ["A", "B", "C", "D"];

        // every subset of `universe` as required, against a few available lists
        for mask in 0u8..16 {
            let required = universe
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, n)| *n)
                .collect::<Vec<_>>();

            for available in [&["A", "C"][..], &["D", "B", "A", "C"], &["C", "C"], &[]] {
                let expected = required.iter().all(|r| available.contains(r));
                assert_eq!(check(&required, available), expected);
            }
        }
    }
}
