//! Engine configuration with official defaults.
//!
//! The suitability and matching constants are policy choices, not algorithmic
//! necessities; they are held here so tests can substitute values and worked
//! examples can pin the defaults.

/// Points-test thresholds and caps.
#[derive(Debug, Clone)]
pub struct PointsConfig {
  /// Ceiling on overseas + domestic experience points combined.
  pub combined_experience_cap: u32,
  /// Minimum score to lodge a skilled expression of interest.
  pub pass_mark: u32,
  /// Points added by a state nomination.
  pub state_nomination_bonus: u32,
  /// Points added by a regional nomination.
  pub regional_bonus: u32,
}

impl Default for PointsConfig {
  fn default() -> Self {
    Self {
      combined_experience_cap: 20,
      pass_mark: 65,
      state_nomination_bonus: 5,
      regional_bonus: 15,
    }
  }
}

/// Base scores and ceilings for the per-pathway suitability formulas.
///
/// Every cap sits strictly below 100 where a sponsor, state, or invitation
/// round remains outside the applicant's control.
#[derive(Debug, Clone)]
pub struct SuitabilityConfig {
  pub employer_base: u32,
  pub employer_cap: u8,
  pub independent_base: u32,
  pub independent_cap: u8,
  pub state_base: u32,
  pub state_cap: u8,
  pub regional_base: u32,
  pub regional_cap: u8,
  pub student_base: u32,
  pub student_cap: u8,
  /// Fallback when a student has not chosen a destination occupation.
  pub student_generic: u8,
  pub partner_base: u32,
  pub partner_cap: u8,
  pub exploratory_low: u8,
  pub exploratory_high: u8,
}

impl Default for SuitabilityConfig {
  fn default() -> Self {
    Self {
      employer_base: 55,
      employer_cap: 90,
      independent_base: 40,
      independent_cap: 93,
      state_base: 38,
      state_cap: 90,
      regional_base: 45,
      regional_cap: 75,
      student_base: 60,
      student_cap: 90,
      student_generic: 75,
      partner_base: 70,
      partner_cap: 95,
      exploratory_low: 40,
      exploratory_high: 95,
    }
  }
}

/// Country-matching adjustments and output bounds.
#[derive(Debug, Clone)]
pub struct MatchConfig {
  /// Multiplier when the occupation is in demand in the country.
  pub hot_job_boost: f64,
  /// Multiplier when it is not.
  pub cold_job_penalty: f64,
  /// Cost index above which affordability is checked.
  pub high_cost_index: u32,
  /// Monthly income (home currency) treated as 1.0 on the income scale.
  pub income_reference: u32,
  /// Normalized income below which expensive countries are penalized.
  pub income_comfort: f64,
  pub cost_penalty: f64,
  /// Penalty for the oldest age band in age-restricted countries.
  pub senior_age_penalty: f64,
  /// Countries with stricter age rules for skilled migration.
  pub age_restricted: Vec<String>,
  pub floor_pct: u8,
  pub ceiling_pct: u8,
  pub top_n: usize,
}

impl Default for MatchConfig {
  fn default() -> Self {
    Self {
      hot_job_boost: 1.12,
      cold_job_penalty: 0.92,
      high_cost_index: 250,
      income_reference: 30_000,
      income_comfort: 1.5,
      cost_penalty: 0.95,
      senior_age_penalty: 0.90,
      age_restricted: vec!["australia".into(), "canada".into(), "newzealand".into()],
      floor_pct: 15,
      ceiling_pct: 97,
      top_n: 5,
    }
  }
}

/// Full engine configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
  pub points: PointsConfig,
  pub suitability: SuitabilityConfig,
  pub matching: MatchConfig,
}
