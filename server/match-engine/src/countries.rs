//! Destination country catalog and goal weighting tables.
//!
//! Criterion scores are 1-10 composites of public indices (OECD Better Life,
//! Numbeo, Global Peace Index, WHO, World Bank). Cost index is relative to
//! the applicant's home country at 100. Snapshot data, refreshed by hand.

use crate::occupations;
use crate::types::{CommunitySize, CountryRecord, CountryScores, Criterion, Goal};

/// Criterion weights contributed by each stated goal. Criteria a goal does
/// not name fall back to the baseline weight of 1 during matching.
pub fn goal_weights(goal: Goal) -> &'static [(Criterion, u32)] {
  match goal {
    Goal::MoneyJob => &[
      (Criterion::JobMarket, 4),
      (Criterion::TaxFriendliness, 3),
      (Criterion::CostOfLiving, 2),
    ],
    Goal::Balance => &[(Criterion::WorkLifeBalance, 4), (Criterion::Safety, 3)],
    Goal::Family => &[(Criterion::Education, 4), (Criterion::Healthcare, 3)],
    Goal::Stable => &[(Criterion::PoliticalStability, 4), (Criterion::Safety, 2)],
    Goal::Lifestyle => &[
      (Criterion::Climate, 3),
      (Criterion::ImmigrationEase, 3),
      (Criterion::CostOfLiving, 2),
    ],
  }
}

/// Per-country occupation notes: (country id, occupation or demand-tag id,
/// note). The "default" id is the country-wide fallback.
const OCCUPATION_NOTES: &[(&str, &str, &str)] = &[
  (
    "australia",
    "software",
    "IT and AI roles sit on the skill shortage list: 189/190 open, data/AI demand very high",
  ),
  (
    "australia",
    "engineering",
    "Engineers and trades in heavy shortage; Engineers Australia assessment required",
  ),
  (
    "australia",
    "accounting",
    "On the skill list; CPA Australia qualification assessment required",
  ),
  (
    "australia",
    "healthcare",
    "Severe nursing shortage with fast-tracked visas",
  ),
  (
    "australia",
    "chef",
    "Chef is on the shortage list; 482 sponsorship available",
  ),
  (
    "australia",
    "other",
    "Check the current skill shortage list with Home Affairs",
  ),
  (
    "canada",
    "software",
    "Express Entry NOC 21232: IT/AI demand high, Toronto and Montreal are hubs",
  ),
  (
    "canada",
    "healthcare",
    "Acute nursing shortage; provincial nomination fast track",
  ),
  (
    "canada",
    "engineering",
    "Engineers Canada assessment; Red Seal trades in very high demand",
  ),
  ("canada", "default", "Uses the Express Entry CRS points system"),
  (
    "usa",
    "software",
    "Highest IT/AI salaries worldwide, but the H-1B lottery is a hard gate",
  ),
  ("usa", "default", "H-1B lottery odds around 25 percent"),
  (
    "uk",
    "software",
    "Skilled Worker visa; Tech Nation endorsement route available",
  ),
  ("uk", "healthcare", "NHS shortage roles are fast-tracked"),
  ("uk", "default", "Points-based system post-Brexit"),
  (
    "germany",
    "software",
    "EU Blue Card; German not required at first in most tech firms",
  ),
  (
    "germany",
    "engineering",
    "Engineers in strong demand across automotive and manufacturing",
  ),
  ("germany", "default", "EU Blue Card or Job Seeker visa"),
  (
    "japan",
    "software",
    "Engineer visa available, but many employers expect Japanese",
  ),
  (
    "japan",
    "chef",
    "Restaurant demand qualifies for the Specified Skilled Worker visa",
  ),
  ("japan", "default", "Japanese matters: JLPT N2 or better recommended"),
  (
    "singapore",
    "software",
    "Employment Pass; the region's tech hub, though quotas are tightening",
  ),
  (
    "singapore",
    "accounting",
    "Financial hub with steady demand for finance and management roles",
  ),
  (
    "singapore",
    "default",
    "Employment Pass has a salary floor around $5,000/month",
  ),
  (
    "uae",
    "software",
    "Middle East tech hub around Dubai Internet City; salaries competitive",
  ),
  (
    "uae",
    "engineering",
    "Construction and oil & gas demand high, income tax-free",
  ),
  (
    "uae",
    "accounting",
    "Financial hub with steady demand for finance and management roles",
  ),
  (
    "uae",
    "healthcare",
    "Nurses and doctors in shortage; salaries competitive",
  ),
  (
    "uae",
    "default",
    "Two-year Employment Visa or ten-year Golden Visa",
  ),
  (
    "norway",
    "software",
    "Solid tech demand in Bergen and Oslo; among Europe's best salaries",
  ),
  (
    "norway",
    "engineering",
    "Oil & gas engineering demand high, offshore and onshore",
  ),
  (
    "norway",
    "healthcare",
    "Nurses and doctors in shortage; fast permanent-residence track",
  ),
  (
    "norway",
    "trades",
    "Electricians and plumbers in demand at high wages",
  ),
  (
    "norway",
    "default",
    "Skilled Worker Permit; Norwegian helps long-term",
  ),
];

/// Occupation note for a country, resolved through the fallback chain:
/// direct id, then the category's demand-tag match ids, then the country
/// default, then empty.
pub fn occupation_note(country_id: &str, occupation: &str) -> String {
  let lookup = |id: &str| {
    OCCUPATION_NOTES
      .iter()
      .find(|(c, o, _)| *c == country_id && *o == id)
      .map(|(_, _, note)| (*note).to_string())
  };
  if let Some(note) = lookup(occupation) {
    return note;
  }
  if let Some(ids) = occupations::match_ids(occupation) {
    for id in ids {
      if let Some(note) = lookup(id) {
        return note;
      }
    }
  }
  lookup("default").unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn country(
  id: &str,
  name: &str,
  scores: [u8; 10],
  avg_salary_usd: u32,
  cost_index: u32,
  hot_jobs: &[&str],
  visa_paths: &[&str],
  pros: &[&str],
  cons: &[&str],
  expat_community: CommunitySize,
) -> CountryRecord {
  let [cost_of_living, safety, healthcare, education, work_life_balance, tax_friendliness, immigration_ease, job_market, climate, political_stability] =
    scores;
  CountryRecord {
    id: id.to_string(),
    name: name.to_string(),
    scores: CountryScores {
      cost_of_living,
      safety,
      healthcare,
      education,
      work_life_balance,
      tax_friendliness,
      immigration_ease,
      job_market,
      climate,
      political_stability,
    },
    avg_salary_usd,
    cost_index,
    hot_jobs: hot_jobs.iter().map(|s| s.to_string()).collect(),
    visa_paths: visa_paths.iter().map(|s| s.to_string()).collect(),
    pros: pros.iter().map(|s| s.to_string()).collect(),
    cons: cons.iter().map(|s| s.to_string()).collect(),
    expat_community,
  }
}

/// Build the built-in country catalog, in its canonical (tie-breaking) order.
pub fn builtin() -> Vec<CountryRecord> {
  vec![
    country(
      "australia",
      "Australia",
      [4, 8, 9, 9, 8, 5, 7, 8, 8, 9],
      68_000,
      250,
      &["software", "data-ai", "engineering", "healthcare", "trades", "chef", "accounting"],
      &["Skilled 189/190", "Regional 491", "Employer 482", "WHV 417"],
      &[
        "Very high salaries",
        "Free Medicare",
        "Great weather",
        "Long skill shortage list",
        "Large expat community",
      ],
      &["High cost of living (Sydney)", "Long flight home (~9h)"],
      CommunitySize::Large,
    ),
    country(
      "newzealand",
      "New Zealand",
      [4, 9, 8, 8, 9, 5, 6, 6, 6, 9],
      55_000,
      230,
      &["software", "engineering", "healthcare", "trades"],
      &["Skilled Migrant", "Essential Skills", "WHV"],
      &[
        "Stunning nature",
        "Excellent work-life balance",
        "Relaxed people",
        "Very safe",
      ],
      &["Salaries ~20% below Australia", "Small cities, fewer jobs"],
      CommunitySize::Small,
    ),
    country(
      "canada",
      "Canada",
      [5, 8, 8, 9, 7, 4, 7, 7, 3, 9],
      60_000,
      220,
      &["software", "data-ai", "healthcare", "engineering", "trades"],
      &["Express Entry", "PNP", "LMIA Work Permit"],
      &[
        "Diverse and welcoming to migrants",
        "Transparent Express Entry system",
        "Excellent education",
      ],
      &["Brutally cold winters (-30°C)", "Toronto/Vancouver very expensive"],
      CommunitySize::Medium,
    ),
    country(
      "usa",
      "USA",
      [5, 5, 5, 9, 4, 6, 3, 9, 7, 6],
      80_000,
      260,
      &["software", "data-ai", "healthcare", "engineering"],
      &["H1B (lottery)", "L-1", "EB Green Card", "O-1 Extraordinary"],
      &[
        "Highest salaries in the world",
        "The world's tech hub",
        "World-class universities",
      ],
      &[
        "H-1B lottery is a long shot",
        "No universal healthcare",
        "Safety varies widely",
      ],
      CommunitySize::Large,
    ),
    country(
      "uk",
      "United Kingdom",
      [3, 7, 8, 9, 7, 4, 5, 7, 4, 8],
      55_000,
      250,
      &["software", "data-ai", "healthcare", "engineering", "accounting"],
      &["Skilled Worker", "Global Talent", "Youth Mobility"],
      &[
        "Large job market",
        "NHS universal healthcare",
        "Oxford/Cambridge",
        "28 days annual leave",
      ],
      &["London very expensive", "Grey, rainy weather", "High taxes"],
      CommunitySize::Medium,
    ),
    country(
      "germany",
      "Germany",
      [6, 8, 9, 10, 9, 3, 5, 7, 4, 9],
      58_000,
      200,
      &["software", "engineering", "data-ai", "healthcare"],
      &["EU Blue Card", "Job Seeker Visa", "Skilled Worker"],
      &[
        "Free universities",
        "Excellent work-life balance",
        "Strong labor law",
        "Berlin still affordable",
      ],
      &[
        "German language essential",
        "Tax plus social insurance ~42%",
        "Grey winters",
      ],
      CommunitySize::Small,
    ),
    country(
      "japan",
      "Japan",
      [6, 10, 9, 8, 4, 5, 4, 6, 6, 9],
      45_000,
      190,
      &["software", "engineering", "chef"],
      &["Engineer/Specialist", "Specified Skilled Worker", "Highly Skilled Professional"],
      &[
        "Safest country in the world",
        "Amazing food",
        "Everything works",
        "Short flight home (6h)",
      ],
      &[
        "Japanese language essential",
        "Intense work culture",
        "Salaries below AU/US",
      ],
      CommunitySize::Large,
    ),
    country(
      "singapore",
      "Singapore",
      [3, 10, 9, 9, 4, 9, 5, 8, 5, 9],
      58_000,
      270,
      &["software", "data-ai", "accounting", "business"],
      &["Employment Pass", "S Pass", "EntrePass"],
      &[
        "Very low taxes",
        "Extremely safe",
        "Two hours from home",
        "Financial hub",
      ],
      &[
        "Housing extremely expensive",
        "Hot and humid year-round",
        "Strict rules",
      ],
      CommunitySize::Large,
    ),
    country(
      "netherlands",
      "Netherlands",
      [4, 8, 9, 9, 9, 4, 5, 7, 4, 9],
      55_000,
      220,
      &["software", "data-ai", "engineering", "business"],
      &["Highly Skilled Migrant", "DAFT (freelancers)", "EU Blue Card"],
      &[
        "Great work-life balance",
        "Cycle everywhere",
        "English spoken everywhere",
        "Open culture",
      ],
      &["Rain and wind", "Severe housing shortage", "High taxes"],
      CommunitySize::Small,
    ),
    country(
      "sweden",
      "Sweden",
      [5, 7, 9, 10, 10, 2, 4, 6, 2, 9],
      50_000,
      220,
      &["software", "engineering", "healthcare"],
      &["Work Permit", "EU Blue Card"],
      &[
        "World's best work-life balance",
        "Free education at every level",
        "480 days parental leave",
        "Full welfare coverage",
      ],
      &[
        "Very high taxes (50%+)",
        "Long dark winters",
        "Swedish takes learning",
      ],
      CommunitySize::Small,
    ),
    country(
      "uae",
      "UAE (Dubai)",
      [5, 9, 8, 7, 5, 10, 7, 8, 4, 8],
      55_000,
      250,
      &["software", "data-ai", "engineering", "accounting", "healthcare"],
      &["Employment Visa 2-year", "Golden Visa 10-year"],
      &[
        "No income tax",
        "Easy to save money",
        "Very safe",
        "Six hours from home",
        "Modern everything",
      ],
      &[
        "Extreme heat (45°C+)",
        "Visa tied to employer",
        "No conventional permanent residence",
        "Expensive for a western lifestyle",
      ],
      CommunitySize::Large,
    ),
    country(
      "norway",
      "Norway",
      [2, 10, 10, 9, 9, 4, 5, 7, 2, 10],
      70_000,
      300,
      &["software", "engineering", "data-ai", "healthcare", "trades"],
      &["Skilled Worker Permit", "Permanent Residence"],
      &[
        "Highest salaries in Europe",
        "Spectacular nature",
        "Free healthcare",
        "Great work-life balance",
        "Five weeks leave",
      ],
      &[
        "Most expensive in Europe",
        "Bitter winters (-20°C)",
        "Long dark season",
        "Alcohol costs a fortune",
      ],
      CommunitySize::Small,
    ),
    country(
      "portugal",
      "Portugal",
      [7, 8, 7, 7, 8, 6, 8, 4, 9, 8],
      28_000,
      140,
      &["software", "data-ai", "creative"],
      &["D7 Passive Income", "Digital Nomad Visa", "Golden Visa"],
      &[
        "Cheapest in the EU",
        "Beautiful weather",
        "Easy Digital Nomad Visa",
        "Friendly people",
      ],
      &[
        "Very low salaries",
        "Small job market",
        "Portuguese helps a lot",
      ],
      CommunitySize::Small,
    ),
    country(
      "korea",
      "South Korea",
      [5, 9, 9, 8, 3, 6, 4, 6, 5, 7],
      42_000,
      190,
      &["software", "engineering", "creative"],
      &["E-7 Skilled Worker", "D-10 Job Seeker", "F-2 Points System"],
      &[
        "Very safe",
        "Excellent cheap healthcare",
        "World's fastest internet",
        "K-culture",
      ],
      &[
        "Punishing work culture",
        "Korean language essential",
        "High social pressure",
      ],
      CommunitySize::Medium,
    ),
    country(
      "ireland",
      "Ireland",
      [3, 8, 7, 8, 8, 5, 6, 8, 4, 9],
      60_000,
      240,
      &["software", "data-ai", "accounting", "business"],
      &["Critical Skills Permit", "General Work Permit", "Stamp 4"],
      &[
        "EU tech hub (Google, Meta, Apple)",
        "English speaking",
        "Good salaries",
        "Gateway to the EU",
      ],
      &["Dublin housing very expensive", "Rain and wind", "Small cities"],
      CommunitySize::Small,
    ),
    country(
      "switzerland",
      "Switzerland",
      [2, 9, 10, 9, 8, 7, 3, 7, 5, 10],
      95_000,
      350,
      &["software", "engineering", "accounting", "healthcare"],
      &["L Permit (short-term)", "B Permit (work)", "C Permit (permanent)"],
      &[
        "Highest salaries in Europe",
        "World's best healthcare",
        "Low taxes for Europe",
        "Spectacular nature",
      ],
      &[
        "Most expensive in the world",
        "Very hard visa for non-EU",
        "Need French, German, or Italian",
      ],
      CommunitySize::Small,
    ),
  ]
}
