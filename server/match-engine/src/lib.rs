//! Migration Match Engine — deterministic, rule-based (V1).
//!
//! Scores self-reported migrant profiles against official points-test
//! brackets, recommends visa pathways with bounded suitability percentages,
//! and ranks destination countries by goal-weighted criteria.
//!
//! No AI, no DB, no network, no clock; pure computation over injected
//! reference catalogs.

pub mod config;
pub mod countries;
pub mod eligibility;
pub mod error;
pub mod matcher;
pub mod occupations;
pub mod points;
pub mod recommend;
pub mod types;

pub use config::Config;
pub use eligibility::classify;
pub use error::EngineError;
pub use types::{Catalog, MatchParams, MatchResult, Profile, VisaCandidate};

impl Catalog {
  /// The built-in reference tables.
  pub fn builtin() -> Self {
    Self {
      occupations: occupations::builtin(),
      countries: countries::builtin(),
    }
  }
}

/// The engine: reference catalogs plus policy configuration. Stateless
/// between calls; every method is a pure function of its arguments.
pub struct Engine {
  catalog: Catalog,
  config: Config,
}

impl Engine {
  pub fn new(catalog: Catalog, config: Config) -> Self {
    Self { catalog, config }
  }

  /// Built-in catalogs and default policy constants.
  pub fn with_defaults() -> Self {
    Self::new(Catalog::builtin(), Config::default())
  }

  pub fn catalog(&self) -> &Catalog {
    &self.catalog
  }

  /// Official points-test score for a profile.
  pub fn compute_points(&self, profile: &Profile) -> u32 {
    points::compute_points(profile, &self.config.points)
  }

  /// Visa pathway candidates for a profile, best first.
  pub fn recommend(&self, profile: &Profile) -> Vec<VisaCandidate> {
    recommend::recommend(profile, &self.catalog, &self.config)
  }

  /// Ranked destination shortlist for the given goals and constraints.
  pub fn match_countries(&self, params: &MatchParams) -> Vec<MatchResult> {
    matcher::match_countries(params, &self.catalog, &self.config.matching)
  }
}
