//! Likelihood of k-mers under a profile.

use cyanea_core::{CyaneaError, Result};

use crate::alphabet::base_index;
use crate::profile::Profile;

impl Profile {
    /// Probability of `kmer` under this profile: the product of
    /// `profile[base][pos]` over all positions.
    ///
    /// A k-mer whose length differs from the profile, or that contains a byte
    /// outside uppercase `ACGT`, has probability 0.
    pub fn probability(&self, kmer: &[u8]) -> f64 {
        if kmer.len() != self.len() {
            return 0.0;
        }
        let mut p = 1.0;
        for (col, &b) in self.matrix().iter().zip(kmer) {
            match base_index(b) {
                Some(idx) => p *= col[idx],
                None => return 0.0,
            }
        }
        p
    }
}

/// Find the profile-most-probable k-mer in `text`.
///
/// Every window is scored left to right and the first one with the highest
/// probability wins. The running best starts below zero so a window is
/// returned even when every probability is 0.
///
/// # Errors
///
/// Returns an error if `k` is zero, longer than `text`, or different from
/// the profile length.
pub fn profile_most_probable_kmer<'a>(text: &'a [u8], k: usize, profile: &Profile) -> Result<&'a [u8]> {
    check_window(text, k, profile)?;

    let mut best_p = -1.0;
    let mut best = &text[..k];
    for window in text.windows(k) {
        let p = profile.probability(window);
        if p > best_p {
            best_p = p;
            best = window;
        }
    }
    Ok(best)
}

/// Shared argument checks for window scans over `text`.
pub(crate) fn check_window(text: &[u8], k: usize, profile: &Profile) -> Result<()> {
    if k == 0 {
        return Err(CyaneaError::InvalidInput(
            "k-mer size must be at least 1".into(),
        ));
    }
    if k > text.len() {
        return Err(CyaneaError::InvalidInput(format!(
            "k-mer size {} exceeds sequence length {}",
            k,
            text.len()
        )));
    }
    if k != profile.len() {
        return Err(CyaneaError::InvalidInput(format!(
            "k-mer size {} does not match profile length {}",
            k,
            profile.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::profile_with_pseudocounts;

    fn worked_profile() -> Profile {
        // Columns are [A, C, G, T].
        Profile::from_matrix(vec![
            [0.8, 0.0, 0.2, 0.0],
            [0.0, 0.6, 0.2, 0.2],
            [0.0, 0.2, 0.8, 0.0],
            [0.2, 0.0, 0.0, 0.8],
        ])
        .unwrap()
    }

    #[test]
    fn probability_is_product_of_entries() {
        let p = worked_profile();
        // A(0.8) C(0.6) G(0.8) T(0.8)
        assert!((p.probability(b"ACGT") - 0.8 * 0.6 * 0.8 * 0.8).abs() < 1e-12);
        assert_eq!(p.probability(b"TCGG"), 0.0);
    }

    #[test]
    fn probability_of_mismatched_length_is_zero() {
        let p = worked_profile();
        assert_eq!(p.probability(b"ACG"), 0.0);
        assert_eq!(p.probability(b"ACGNA"), 0.0);
    }

    #[test]
    fn most_probable_worked_example() {
        // Every window of TCGGTA hits a zero entry under the worked profile,
        // so the sentinel hands the win to the first window.
        let p = worked_profile();
        assert_eq!(profile_most_probable_kmer(b"TCGGTA", 4, &p).unwrap(), b"TCGG");

        // With C allowed at position 0, CGGT is the only window with mass.
        let p = Profile::from_matrix(vec![
            [0.2, 0.6, 0.2, 0.0],
            [0.0, 0.6, 0.2, 0.2],
            [0.0, 0.2, 0.8, 0.0],
            [0.2, 0.0, 0.0, 0.8],
        ])
        .unwrap();
        assert_eq!(profile_most_probable_kmer(b"TCGGTA", 4, &p).unwrap(), b"CGGT");
    }

    #[test]
    fn scans_past_the_first_window() {
        let p = worked_profile();
        // First window has probability 0; the best one is last.
        assert_eq!(profile_most_probable_kmer(b"TTTTACGT", 4, &p).unwrap(), b"ACGT");
    }

    #[test]
    fn all_zero_returns_first_window() {
        let p = worked_profile();
        assert_eq!(profile_most_probable_kmer(b"TTTTTT", 4, &p).unwrap(), b"TTTT");
    }

    #[test]
    fn ties_keep_earliest_window() {
        let p = Profile::from_matrix(vec![[0.25; 4]; 2]).unwrap();
        assert_eq!(profile_most_probable_kmer(b"GATC", 2, &p).unwrap(), b"GA");
    }

    #[test]
    fn bad_arguments_rejected() {
        let p = worked_profile();
        assert!(profile_most_probable_kmer(b"ACGTAC", 0, &p).is_err());
        assert!(profile_most_probable_kmer(b"ACG", 4, &p).is_err());
        assert!(profile_most_probable_kmer(b"ACGTAC", 3, &p).is_err());
    }

    #[test]
    fn pseudocount_profile_never_gives_zero() {
        let p = profile_with_pseudocounts(&["AAAA", "AAAA"]).unwrap();
        assert!(p.probability(b"TTTT") > 0.0);
    }
}
