//! Core types for the match engine (JSON contracts + internal models).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Profile enumerations (JSON contract — what the caller sends)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Situation {
  Experienced,
  Student,
  Partner,
  WorkingHoliday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeBand {
  #[serde(rename = "18-24")]
  Age18To24,
  #[serde(rename = "25-32")]
  Age25To32,
  #[serde(rename = "33-39")]
  Age33To39,
  #[serde(rename = "40-44")]
  Age40To44,
  #[serde(rename = "45+")]
  Age45Plus,
}

impl AgeBand {
  /// Official points-test contribution.
  pub fn points(self) -> u32 {
    match self {
      Self::Age18To24 => 25,
      Self::Age25To32 => 30,
      Self::Age33To39 => 25,
      Self::Age40To44 => 15,
      Self::Age45Plus => 0,
    }
  }

  /// Working-holiday programs only accept the two youngest bands.
  pub fn working_holiday_eligible(self) -> bool {
    matches!(self, Self::Age18To24 | Self::Age25To32)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnglishBand {
  Superior,
  Proficient,
  Competent,
  Low,
}

impl EnglishBand {
  pub fn points(self) -> u32 {
    match self {
      Self::Superior => 20,
      Self::Proficient => 10,
      Self::Competent | Self::Low => 0,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ExperienceBand {
  #[serde(rename = "0-2")]
  Years0To2,
  #[serde(rename = "3-4")]
  Years3To4,
  #[serde(rename = "5-7")]
  Years5To7,
  #[serde(rename = "8+")]
  Years8Plus,
}

impl ExperienceBand {
  /// Skilled employment outside the destination.
  pub fn overseas_points(self) -> u32 {
    match self {
      Self::Years0To2 => 0,
      Self::Years3To4 => 5,
      Self::Years5To7 => 10,
      Self::Years8Plus => 15,
    }
  }

  /// Skilled employment in the destination (worth more per year).
  pub fn domestic_points(self) -> u32 {
    match self {
      Self::Years0To2 => 5,
      Self::Years3To4 => 10,
      Self::Years5To7 => 15,
      Self::Years8Plus => 20,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Education {
  Phd,
  Masters,
  Bachelor,
  Trade,
  Highschool,
}

impl Education {
  pub fn points(self) -> u32 {
    match self {
      Self::Phd => 20,
      Self::Masters | Self::Bachelor => 15,
      Self::Trade => 10,
      Self::Highschool => 0,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PartnerStatus {
  Single,
  PartnerCitizen,
  PartnerSkilled,
  PartnerEnglishOnly,
  PartnerUnskilled,
}

impl PartnerStatus {
  pub fn points(self) -> u32 {
    match self {
      Self::Single | Self::PartnerCitizen | Self::PartnerSkilled => 10,
      Self::PartnerEnglishOnly => 5,
      Self::PartnerUnskilled => 0,
    }
  }
}

/// Independent bonus flags. Each contributes a fixed amount; no mutual cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusFlags {
  #[serde(default)]
  pub destination_study: bool,
  #[serde(default)]
  pub stem_qualification: bool,
  #[serde(default)]
  pub professional_year: bool,
  #[serde(default)]
  pub community_language: bool,
  #[serde(default)]
  pub regional_study: bool,
}

impl BonusFlags {
  pub fn points(self) -> u32 {
    let mut total = 0;
    if self.destination_study {
      total += 5;
    }
    if self.stem_qualification {
      total += 10;
    }
    if self.professional_year {
      total += 5;
    }
    if self.community_language {
      total += 5;
    }
    if self.regional_study {
      total += 5;
    }
    total
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Relationship {
  Married,
  DeFacto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
  HomeCountry,
  Destination,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FamilySize {
  Single,
  Couple,
  Family,
}

/// A self-reported applicant profile. Every field except `situation` is
/// optional: the UI calls the engine on partially completed forms, and absent
/// values contribute nothing rather than failing.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
  pub situation: Situation,
  #[serde(default)]
  pub age: Option<AgeBand>,
  #[serde(default)]
  pub english: Option<EnglishBand>,
  #[serde(default)]
  pub overseas_experience: Option<ExperienceBand>,
  #[serde(default)]
  pub domestic_experience: Option<ExperienceBand>,
  #[serde(default)]
  pub education: Option<Education>,
  #[serde(default)]
  pub partner_status: Option<PartnerStatus>,
  #[serde(default)]
  pub bonus: BonusFlags,
  /// Occupation catalog key. Absent means "no occupation chosen".
  #[serde(default)]
  pub occupation: Option<String>,
  #[serde(default)]
  pub study_level: Option<Education>,
  #[serde(default)]
  pub relationship: Option<Relationship>,
  #[serde(default)]
  pub location: Option<Location>,
  #[serde(default)]
  pub family: Option<FamilySize>,
}

impl Profile {
  /// An empty profile for the given situation.
  pub fn new(situation: Situation) -> Self {
    Self {
      situation,
      age: None,
      english: None,
      overseas_experience: None,
      domestic_experience: None,
      education: None,
      partner_status: None,
      bonus: BonusFlags::default(),
      occupation: None,
      study_level: None,
      relationship: None,
      location: None,
      family: None,
    }
  }
}

// ---------------------------------------------------------------------------
// Occupation reference data
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DemandLevel {
  Low,
  Moderate,
  High,
  VeryHigh,
}

impl DemandLevel {
  /// Pathway-specific demand bonus (`Low` always contributes zero).
  pub fn scaled(self, very_high: u32, high: u32, moderate: u32) -> u32 {
    match self {
      Self::VeryHigh => very_high,
      Self::High => high,
      Self::Moderate => moderate,
      Self::Low => 0,
    }
  }
}

/// Annual salary distribution (10th percentile / median / 90th percentile).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SalaryRange {
  pub p10: u32,
  pub median: u32,
  pub p90: u32,
}

/// Shortage-list eligibility tier, ordered most to least favorable.
///
/// Derived once from the raw list designation at catalog load; decision logic
/// switches on the variant and never re-parses strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EligibilityTier {
  BothTopLists,
  TopListOnly,
  ShortListBoth,
  ShortListOnly,
  EmployerListOnly,
  RegionalListOnly,
  None,
}

impl EligibilityTier {
  /// Rank for monotonicity checks: lower is more favorable.
  pub fn rank(self) -> u8 {
    match self {
      Self::BothTopLists => 0,
      Self::TopListOnly => 1,
      Self::ShortListBoth => 2,
      Self::ShortListOnly => 3,
      Self::EmployerListOnly => 4,
      Self::RegionalListOnly => 5,
      Self::None => 6,
    }
  }

  /// Gate for the independent-skilled pathway: the occupation must sit on the
  /// top list, regardless of points.
  pub fn includes_top_list(self) -> bool {
    matches!(self, Self::BothTopLists | Self::TopListOnly)
  }

  /// On some list, but not the top one.
  pub fn lower_list_only(self) -> bool {
    matches!(
      self,
      Self::ShortListBoth | Self::ShortListOnly | Self::EmployerListOnly | Self::RegionalListOnly
    )
  }
}

/// One recognized occupation. Immutable reference data, looked up by key.
#[derive(Debug, Clone, Serialize)]
pub struct OccupationRecord {
  pub key: String,
  pub title: String,
  /// Grouped category id (used for country demand-tag matching).
  pub category: String,
  /// ANZSCO-style occupation code.
  pub code: String,
  /// Raw shortage-list designation as published (e.g. "MLTSSL + CSOL").
  pub shortage_list: String,
  /// Tier derived from `shortage_list` at load time.
  pub tier: EligibilityTier,
  pub demand: DemandLevel,
  pub salary: SalaryRange,
  /// Realistic invitation cutoff for the most selective pathway.
  pub min_points: u32,
  /// Lower cutoff for the regional variant, where one exists.
  pub min_points_regional: Option<u32>,
  pub path_to_pr: String,
}

// ---------------------------------------------------------------------------
// Visa recommendation output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisaCategory {
  Skilled,
  Employer,
  Student,
  WorkingHoliday,
  Partner,
}

/// One additive term of a suitability score, kept for explainability.
#[derive(Debug, Clone, Serialize)]
pub struct Factor {
  pub label: String,
  pub earned: u32,
  pub max: u32,
}

/// One recommended visa pathway. Created fresh per call, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct VisaCandidate {
  /// Pathway code, e.g. "482-186" or "189".
  pub code: String,
  pub name: String,
  /// Suitability percentage, clamped below 100 wherever a sponsor, state, or
  /// examiner decision remains outside the applicant's control.
  pub pct: u8,
  pub tips: Vec<String>,
  /// Milestone labels from application to permanent residence.
  pub journey: Vec<String>,
  pub category: VisaCategory,
  /// Present whenever the score is built from more than one additive term.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub factors: Option<Vec<Factor>>,
}

// ---------------------------------------------------------------------------
// Country reference data
// ---------------------------------------------------------------------------

/// The ten match criteria. Each country scores 1-10 on every criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Criterion {
  CostOfLiving,
  Safety,
  Healthcare,
  Education,
  WorkLifeBalance,
  TaxFriendliness,
  ImmigrationEase,
  JobMarket,
  Climate,
  PoliticalStability,
}

impl Criterion {
  pub const ALL: [Criterion; 10] = [
    Criterion::CostOfLiving,
    Criterion::Safety,
    Criterion::Healthcare,
    Criterion::Education,
    Criterion::WorkLifeBalance,
    Criterion::TaxFriendliness,
    Criterion::ImmigrationEase,
    Criterion::JobMarket,
    Criterion::Climate,
    Criterion::PoliticalStability,
  ];

  pub fn label(self) -> &'static str {
    match self {
      Self::CostOfLiving => "cost of living",
      Self::Safety => "safety",
      Self::Healthcare => "healthcare",
      Self::Education => "education",
      Self::WorkLifeBalance => "work-life balance",
      Self::TaxFriendliness => "tax friendliness",
      Self::ImmigrationEase => "immigration ease",
      Self::JobMarket => "job market",
      Self::Climate => "climate",
      Self::PoliticalStability => "political stability",
    }
  }
}

/// Per-criterion scores (1-10; 10 is best, so cost_of_living 10 = affordable).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CountryScores {
  pub cost_of_living: u8,
  pub safety: u8,
  pub healthcare: u8,
  pub education: u8,
  pub work_life_balance: u8,
  pub tax_friendliness: u8,
  pub immigration_ease: u8,
  pub job_market: u8,
  pub climate: u8,
  pub political_stability: u8,
}

impl CountryScores {
  pub fn get(&self, criterion: Criterion) -> u8 {
    match criterion {
      Criterion::CostOfLiving => self.cost_of_living,
      Criterion::Safety => self.safety,
      Criterion::Healthcare => self.healthcare,
      Criterion::Education => self.education,
      Criterion::WorkLifeBalance => self.work_life_balance,
      Criterion::TaxFriendliness => self.tax_friendliness,
      Criterion::ImmigrationEase => self.immigration_ease,
      Criterion::JobMarket => self.job_market,
      Criterion::Climate => self.climate,
      Criterion::PoliticalStability => self.political_stability,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommunitySize {
  Small,
  Medium,
  Large,
}

/// One destination country. Immutable reference data.
#[derive(Debug, Clone, Serialize)]
pub struct CountryRecord {
  pub id: String,
  pub name: String,
  pub scores: CountryScores,
  pub avg_salary_usd: u32,
  /// Cost of living relative to the applicant's home country (home = 100).
  pub cost_index: u32,
  /// Demand tags matched against occupation categories.
  pub hot_jobs: Vec<String>,
  pub visa_paths: Vec<String>,
  pub pros: Vec<String>,
  pub cons: Vec<String>,
  pub expat_community: CommunitySize,
}

// ---------------------------------------------------------------------------
// Country matching input/output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
  MoneyJob,
  Balance,
  Family,
  Stable,
  Lifestyle,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchParams {
  #[serde(default)]
  pub goals: Vec<Goal>,
  /// Occupation category id (or catalog key). Absent or unknown simply fails
  /// the demand-boost test.
  #[serde(default)]
  pub occupation: Option<String>,
  /// Monthly income in the applicant's home currency.
  #[serde(default)]
  pub monthly_income: u32,
  #[serde(default)]
  pub age: Option<AgeBand>,
  #[serde(default)]
  pub family: Option<FamilySize>,
}

/// One ranked destination. Freshly computed per call.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
  pub country: CountryRecord,
  pub match_pct: u8,
  pub highlights: Vec<String>,
  /// The country's cons, surfaced as-is.
  pub challenges: Vec<String>,
  #[serde(skip_serializing_if = "String::is_empty")]
  pub occupation_note: String,
}

// ---------------------------------------------------------------------------
// Reference catalog (injected into the engine)
// ---------------------------------------------------------------------------

/// Static lookup data the engine reads. Loaded once, never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
  pub occupations: BTreeMap<String, OccupationRecord>,
  pub countries: Vec<CountryRecord>,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
    }
  }
}
