//! Length-dependent typo tolerance policy.

/// Builds the auto-fuzziness setting for a pair of length thresholds.
///
/// The engine interprets `AUTO:one,two` as: 0 edits for query terms shorter
/// than `one` characters, 1 edit for terms of `one` up to (but excluding)
/// `two` characters, and 2 edits at `two` characters or more. The compiler
/// only forwards the thresholds; the edit-distance policy itself lives in
/// the engine.
pub fn auto_fuzziness(one_typo_chars: usize, two_typo_chars: usize) -> String {
    format!("AUTO:{one_typo_chars},{two_typo_chars}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_thresholds() {
        assert_eq!(auto_fuzziness(3, 6), "AUTO:3,6");
    }

    #[test]
    fn higher_thresholds_delay_tolerance() {
        // The setting string carries the thresholds verbatim; larger values
        // mean a longer term is needed before edits are permitted.
        assert_eq!(auto_fuzziness(5, 10), "AUTO:5,10");
    }
}
