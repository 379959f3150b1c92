//! Occupation catalog: shortage-list designations, demand, salaries, cutoffs.
//!
//! Sources: published skilled occupation lists and invitation-round cutoffs,
//! salary percentiles from public salary aggregators. Snapshot data — this is
//! not a live legal service.

use std::collections::BTreeMap;

use crate::eligibility::classify;
use crate::types::{DemandLevel, OccupationRecord, SalaryRange};

/// Grouped occupation categories: (id, label, demand-tag match ids).
///
/// The match ids map a category onto the demand tags countries declare, so
/// e.g. "engineering" also matches countries that list "trades" as hot.
pub const GROUPS: &[(&str, &str, &[&str])] = &[
  ("software", "Tech & IT roles", &["software", "data-ai"]),
  ("engineering", "Engineers & trades", &["engineering", "trades"]),
  ("accounting", "Finance & business roles", &["accounting", "business", "marketing"]),
  ("healthcare", "Healthcare workers", &["healthcare"]),
  ("chef", "Chefs & hospitality", &["chef"]),
  ("other", "Your field", &["other", "teaching", "creative"]),
];

/// Demand-tag match ids for a category (or occupation group) id.
pub fn match_ids(category: &str) -> Option<&'static [&'static str]> {
  GROUPS
    .iter()
    .find(|(id, _, _)| *id == category)
    .map(|(_, _, ids)| *ids)
}

/// Display label for a category id.
pub fn group_label(category: &str) -> Option<&'static str> {
  GROUPS
    .iter()
    .find(|(id, _, _)| *id == category)
    .map(|(_, label, _)| *label)
}

#[allow(clippy::too_many_arguments)]
fn record(
  key: &str,
  title: &str,
  category: &str,
  code: &str,
  shortage_list: &str,
  demand: DemandLevel,
  salary: (u32, u32, u32),
  min_points: u32,
  min_points_regional: Option<u32>,
  path_to_pr: &str,
) -> (String, OccupationRecord) {
  (
    key.to_string(),
    OccupationRecord {
      key: key.to_string(),
      title: title.to_string(),
      category: category.to_string(),
      code: code.to_string(),
      shortage_list: shortage_list.to_string(),
      tier: classify(shortage_list),
      demand,
      salary: SalaryRange {
        p10: salary.0,
        median: salary.1,
        p90: salary.2,
      },
      min_points,
      min_points_regional,
      path_to_pr: path_to_pr.to_string(),
    },
  )
}

/// Build the built-in occupation catalog.
pub fn builtin() -> BTreeMap<String, OccupationRecord> {
  [
    record(
      "software-engineer",
      "Software Engineer",
      "software",
      "261313",
      "MLTSSL + CSOL",
      DemandLevel::VeryHigh,
      (75_000, 110_000, 160_000),
      85,
      Some(70),
      "189/190 direct, or 482 then 186 after two years",
    ),
    record(
      "data-scientist",
      "Data Scientist",
      "software",
      "224115",
      "MLTSSL + CSOL",
      DemandLevel::VeryHigh,
      (80_000, 115_000, 165_000),
      90,
      Some(75),
      "189 competitive; employer sponsorship common",
    ),
    record(
      "civil-engineer",
      "Civil Engineer",
      "engineering",
      "233211",
      "MLTSSL + CSOL",
      DemandLevel::High,
      (70_000, 100_000, 140_000),
      80,
      Some(65),
      "189/190 after skills assessment",
    ),
    record(
      "mechanical-engineer",
      "Mechanical Engineer",
      "engineering",
      "233512",
      "MLTSSL",
      DemandLevel::Moderate,
      (70_000, 95_000, 135_000),
      85,
      None,
      "189 possible; 482 route more common",
    ),
    record(
      "electrician",
      "Electrician",
      "engineering",
      "341111",
      "MLTSSL + ROL",
      DemandLevel::High,
      (65_000, 85_000, 130_000),
      70,
      Some(65),
      "Trade recognition, then 189/491",
    ),
    record(
      "registered-nurse",
      "Registered Nurse",
      "healthcare",
      "254499",
      "MLTSSL + CSOL",
      DemandLevel::VeryHigh,
      (72_000, 88_000, 110_000),
      65,
      Some(65),
      "Fast-tracked: 189/190 at pass mark, wide 482 availability",
    ),
    record(
      "general-practitioner",
      "General Practitioner",
      "healthcare",
      "253111",
      "MLTSSL",
      DemandLevel::VeryHigh,
      (110_000, 160_000, 240_000),
      65,
      None,
      "189/190 after medical registration",
    ),
    record(
      "accountant",
      "Accountant (General)",
      "accounting",
      "221111",
      "MLTSSL + CSOL",
      DemandLevel::Moderate,
      (60_000, 80_000, 115_000),
      95,
      Some(80),
      "189 cutoffs very high; 190/491 more realistic",
    ),
    record(
      "marketing-specialist",
      "Marketing Specialist",
      "accounting",
      "225113",
      "STSOL",
      DemandLevel::Moderate,
      (60_000, 78_000, 110_000),
      90,
      None,
      "State-nominated or employer-sponsored routes only",
    ),
    record(
      "chef",
      "Chef",
      "chef",
      "351311",
      "MLTSSL + ROL",
      DemandLevel::High,
      (55_000, 70_000, 95_000),
      70,
      Some(65),
      "482 common; 189/491 with trade assessment",
    ),
    record(
      "cafe-manager",
      "Cafe or Restaurant Manager",
      "chef",
      "141111",
      "ROL only",
      DemandLevel::Moderate,
      (55_000, 68_000, 90_000),
      75,
      Some(65),
      "Regional nomination only; 491 then 191",
    ),
    record(
      "secondary-teacher",
      "Secondary School Teacher",
      "other",
      "241411",
      "MLTSSL",
      DemandLevel::High,
      (65_000, 85_000, 110_000),
      75,
      Some(65),
      "189/190 after teaching registration",
    ),
    record(
      "graphic-designer",
      "Graphic Designer",
      "other",
      "232411",
      "STSOL + CSOL",
      DemandLevel::Low,
      (55_000, 70_000, 95_000),
      95,
      None,
      "Employer sponsorship or state nomination only",
    ),
  ]
  .into_iter()
  .collect()
}
