//! Shortage-list tier classification from raw list designation strings.
//!
//! Published occupation tables tag each occupation with the lists it appears
//! on (e.g. "MLTSSL + CSOL", "STSOL", "ROL only"). The classifier turns that
//! free-form designation into an `EligibilityTier` once, at catalog load.

use crate::types::EligibilityTier;

const TOP_LIST: &str = "mltssl";
const SHORT_LIST: &str = "stsol";
const EMPLOYER_LIST: &str = "csol";
const REGIONAL_LIST: &str = "rol";

/// Classify a raw shortage-list designation into an eligibility tier.
///
/// Tokens are tested most-permissive-combination first, so an occupation on
/// several lists always lands in its best tier. Total: unknown or empty
/// input maps to `None`, never an error.
pub fn classify(raw: &str) -> EligibilityTier {
  let s = raw.to_ascii_lowercase();
  let top = s.contains(TOP_LIST);
  let short = s.contains(SHORT_LIST);
  let employer = s.contains(EMPLOYER_LIST);
  let regional = s.contains(REGIONAL_LIST);

  if top && employer {
    EligibilityTier::BothTopLists
  } else if top {
    EligibilityTier::TopListOnly
  } else if short && employer {
    EligibilityTier::ShortListBoth
  } else if short {
    EligibilityTier::ShortListOnly
  } else if employer {
    EligibilityTier::EmployerListOnly
  } else if regional {
    EligibilityTier::RegionalListOnly
  } else {
    EligibilityTier::None
  }
}
