//! Migration points-test score from a profile.

use crate::config::PointsConfig;
use crate::types::Profile;

/// Sum the official points-test contributions for a profile.
///
/// Overseas and domestic experience are summed then capped at the combined
/// ceiling; everything else is independent. Absent fields contribute zero, so
/// a partially filled form is a valid input.
pub fn compute_points(profile: &Profile, config: &PointsConfig) -> u32 {
  let age = profile.age.map(|a| a.points()).unwrap_or(0);
  let english = profile.english.map(|e| e.points()).unwrap_or(0);
  let education = profile.education.map(|e| e.points()).unwrap_or(0);
  let partner = profile.partner_status.map(|p| p.points()).unwrap_or(0);

  let overseas = profile
    .overseas_experience
    .map(|x| x.overseas_points())
    .unwrap_or(0);
  let domestic = profile
    .domestic_experience
    .map(|x| x.domestic_points())
    .unwrap_or(0);
  let experience = (overseas + domestic).min(config.combined_experience_cap);

  age + english + experience + education + partner + profile.bonus.points()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::*;

  fn full_profile() -> Profile {
    let mut p = Profile::new(Situation::Experienced);
    p.age = Some(AgeBand::Age33To39);
    p.english = Some(EnglishBand::Proficient);
    p.overseas_experience = Some(ExperienceBand::Years8Plus);
    p.domestic_experience = Some(ExperienceBand::Years8Plus);
    p.education = Some(Education::Bachelor);
    p.partner_status = Some(PartnerStatus::Single);
    p
  }

  #[test]
  fn empty_profile_scores_zero() {
    let p = Profile::new(Situation::Experienced);
    assert_eq!(compute_points(&p, &PointsConfig::default()), 0);
  }

  #[test]
  fn worked_example_with_capped_experience() {
    // 25 (age) + 10 (english) + 20 (15 + 20 experience, capped) + 15
    // (bachelor) + 10 (single) = 80.
    let p = full_profile();
    assert_eq!(compute_points(&p, &PointsConfig::default()), 80);
  }

  #[test]
  fn combined_experience_never_exceeds_cap() {
    let config = PointsConfig::default();
    let mut p = full_profile();
    p.english = None;
    p.education = None;
    p.partner_status = None;
    p.age = None;
    // Both bands maximal: 15 + 20 would be 35 uncapped.
    assert_eq!(compute_points(&p, &config), config.combined_experience_cap);
  }

  #[test]
  fn bonus_flags_are_independent() {
    let mut p = Profile::new(Situation::Experienced);
    p.bonus = BonusFlags {
      destination_study: true,
      stem_qualification: true,
      professional_year: true,
      community_language: true,
      regional_study: true,
    };
    // 5 + 10 + 5 + 5 + 5, no interaction cap.
    assert_eq!(compute_points(&p, &PointsConfig::default()), 30);
  }

  #[test]
  fn theoretical_maximum_is_130() {
    let mut p = full_profile();
    p.age = Some(AgeBand::Age25To32);
    p.english = Some(EnglishBand::Superior);
    p.education = Some(Education::Phd);
    p.bonus = BonusFlags {
      destination_study: true,
      stem_qualification: true,
      professional_year: true,
      community_language: true,
      regional_study: true,
    };
    assert_eq!(compute_points(&p, &PointsConfig::default()), 130);
  }
}
