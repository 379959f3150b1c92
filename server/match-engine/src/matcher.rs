//! Multi-criteria country matcher.
//!
//! Weighted-sum scoring over the ten criteria, followed by a small set of
//! multiplicative adjustments (occupation demand, cost feasibility, age),
//! normalized to a bounded match percentage. The floor and ceiling keep the
//! output honest: no destination is ever a perfect match or a total zero.

use std::collections::BTreeMap;

use crate::config::MatchConfig;
use crate::countries;
use crate::occupations;
use crate::types::{Catalog, CountryRecord, Criterion, MatchParams, MatchResult};

const BASELINE_WEIGHT: u32 = 1;

/// Criterion weight vector for the stated goals. Goals accumulate; criteria
/// no goal names keep the baseline so nothing is ignored outright.
fn weight_vector(params: &MatchParams) -> BTreeMap<Criterion, u32> {
  let mut weights = BTreeMap::new();
  for goal in &params.goals {
    for (criterion, weight) in countries::goal_weights(*goal) {
      *weights.entry(*criterion).or_insert(0) += weight;
    }
  }
  for criterion in Criterion::ALL {
    weights.entry(criterion).or_insert(BASELINE_WEIGHT);
  }
  weights
}

/// Whether the applicant's occupation is in demand in the country. Grouped
/// category ids resolve through their demand-tag match ids; a raw tag or an
/// unknown id falls back to a direct tag comparison.
fn is_hot_job(params: &MatchParams, country: &CountryRecord) -> bool {
  let Some(occupation) = params.occupation.as_deref() else {
    return false;
  };
  match occupations::match_ids(occupation) {
    Some(ids) => ids.iter().any(|id| country.hot_jobs.iter().any(|h| h == id)),
    None => country.hot_jobs.iter().any(|h| h == occupation),
  }
}

fn score_country(
  params: &MatchParams,
  country: &CountryRecord,
  weights: &BTreeMap<Criterion, u32>,
  config: &MatchConfig,
) -> u8 {
  let mut score = 0.0;
  let mut max_possible = 0.0;
  for (criterion, weight) in weights {
    score += f64::from(country.scores.get(*criterion)) * f64::from(*weight);
    max_possible += 10.0 * f64::from(*weight);
  }

  if is_hot_job(params, country) {
    score *= config.hot_job_boost;
  } else {
    score *= config.cold_job_penalty;
  }

  let income_level = f64::from(params.monthly_income) / f64::from(config.income_reference);
  if country.cost_index > config.high_cost_index && income_level < config.income_comfort {
    score *= config.cost_penalty;
  }

  if params.age == Some(crate::types::AgeBand::Age45Plus)
    && config.age_restricted.contains(&country.id)
  {
    score *= config.senior_age_penalty;
  }

  let raw_pct = (score / max_possible * 100.0).round() as i64;
  raw_pct.clamp(i64::from(config.floor_pct), i64::from(config.ceiling_pct)) as u8
}

fn highlights(params: &MatchParams, country: &CountryRecord) -> Vec<String> {
  let mut scored: Vec<(Criterion, u8)> = Criterion::ALL
    .iter()
    .map(|c| (*c, country.scores.get(*c)))
    .collect();
  // Stable: equal scores keep criterion declaration order.
  scored.sort_by(|a, b| b.1.cmp(&a.1));

  let mut out = Vec::new();
  for (criterion, value) in scored {
    if value >= 8 && out.len() < 3 {
      let grade = match value {
        10 => "Outstanding",
        9 => "Excellent",
        _ => "Strong",
      };
      out.push(format!("{grade} {}", criterion.label()));
    }
  }

  if is_hot_job(params, country) {
    if let Some(occupation) = params.occupation.as_deref() {
      let label = occupations::group_label(occupation).unwrap_or(occupation);
      out.push(format!("{label} in demand here"));
    }
  }

  out.truncate(4);
  out
}

/// Rank the catalog's destinations for the given parameters, best first.
///
/// The sort is stable, so countries with equal percentages keep catalog
/// order. Returns at most `top_n` results.
pub fn match_countries(
  params: &MatchParams,
  catalog: &Catalog,
  config: &MatchConfig,
) -> Vec<MatchResult> {
  let weights = weight_vector(params);

  let mut results: Vec<MatchResult> = catalog
    .countries
    .iter()
    .map(|country| {
      let occupation_note = params
        .occupation
        .as_deref()
        .map(|occ| countries::occupation_note(&country.id, occ))
        .unwrap_or_default();
      MatchResult {
        match_pct: score_country(params, country, &weights, config),
        highlights: highlights(params, country),
        challenges: country.cons.clone(),
        occupation_note,
        country: country.clone(),
      }
    })
    .collect();

  results.sort_by(|a, b| b.match_pct.cmp(&a.match_pct));
  results.truncate(config.top_n);
  results
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::{AgeBand, CommunitySize, CountryScores, Goal};

  fn params(goals: &[Goal], occupation: Option<&str>, income: u32) -> MatchParams {
    MatchParams {
      goals: goals.to_vec(),
      occupation: occupation.map(|s| s.to_string()),
      monthly_income: income,
      age: None,
      family: None,
    }
  }

  fn catalog() -> Catalog {
    Catalog::builtin()
  }

  #[test]
  fn zero_goals_still_ranks_with_baseline_weights() {
    let results = match_countries(&params(&[], None, 0), &catalog(), &MatchConfig::default());
    assert_eq!(results.len(), 5);
    for pair in results.windows(2) {
      assert!(pair[0].match_pct >= pair[1].match_pct);
    }
  }

  #[test]
  fn worked_example_money_job_software_australia() {
    // Australia, money-job weights (job 4, tax 3, cost 2, rest 1):
    // 32 + 15 + 8 + 58 = 113 of 160, boosted x1.12 for a hot occupation,
    // no cost or age penalty at this income: round(79.09) = 79.
    let results = match_countries(
      &params(&[Goal::MoneyJob], Some("software"), 100_000),
      &catalog(),
      &MatchConfig::default(),
    );
    let australia = results.iter().find(|r| r.country.id == "australia").unwrap();
    assert_eq!(australia.match_pct, 79);
  }

  #[test]
  fn goals_accumulate_weights() {
    // balance + stable both touch safety: 3 + 2 on top of nothing.
    let p = params(&[Goal::Balance, Goal::Stable], None, 0);
    let weights = weight_vector(&p);
    assert_eq!(weights[&Criterion::Safety], 5);
    assert_eq!(weights[&Criterion::WorkLifeBalance], 4);
    assert_eq!(weights[&Criterion::PoliticalStability], 4);
    assert_eq!(weights[&Criterion::Climate], 1);
  }

  #[test]
  fn all_percentages_are_bounded() {
    let config = MatchConfig {
      top_n: 16,
      ..MatchConfig::default()
    };
    for goals in [&[][..], &[Goal::MoneyJob][..], &[Goal::Lifestyle, Goal::Family][..]] {
      for occupation in [None, Some("software"), Some("chef"), Some("unknown-field")] {
        let results = match_countries(&params(goals, occupation, 20_000), &catalog(), &config);
        assert_eq!(results.len(), 16);
        for r in &results {
          assert!((15..=97).contains(&r.match_pct), "{} = {}", r.country.id, r.match_pct);
        }
      }
    }
  }

  #[test]
  fn cost_penalty_applies_only_when_income_is_low() {
    let config = MatchConfig::default();
    let cheap = match_countries(
      &params(&[], Some("software"), 100_000),
      &catalog(),
      &MatchConfig { top_n: 16, ..config.clone() },
    );
    let tight = match_countries(
      &params(&[], Some("software"), 20_000),
      &catalog(),
      &MatchConfig { top_n: 16, ..config },
    );
    let find = |rs: &[MatchResult], id: &str| {
      rs.iter().find(|r| r.country.id == id).map(|r| r.match_pct).unwrap()
    };
    // Switzerland's cost index is over the threshold, Germany's is not.
    assert!(find(&tight, "switzerland") < find(&cheap, "switzerland"));
    assert_eq!(find(&tight, "germany"), find(&cheap, "germany"));
  }

  #[test]
  fn senior_age_penalty_hits_restricted_countries_only() {
    let config = MatchConfig { top_n: 16, ..MatchConfig::default() };
    let mut young = params(&[], None, 100_000);
    young.age = Some(AgeBand::Age25To32);
    let mut senior = params(&[], None, 100_000);
    senior.age = Some(AgeBand::Age45Plus);

    let young_r = match_countries(&young, &catalog(), &config);
    let senior_r = match_countries(&senior, &catalog(), &config);
    let find = |rs: &[MatchResult], id: &str| {
      rs.iter().find(|r| r.country.id == id).map(|r| r.match_pct).unwrap()
    };
    assert!(find(&senior_r, "australia") < find(&young_r, "australia"));
    assert_eq!(find(&senior_r, "portugal"), find(&young_r, "portugal"));
  }

  #[test]
  fn ties_keep_catalog_order() {
    let flat = CountryScores {
      cost_of_living: 5,
      safety: 5,
      healthcare: 5,
      education: 5,
      work_life_balance: 5,
      tax_friendliness: 5,
      immigration_ease: 5,
      job_market: 5,
      climate: 5,
      political_stability: 5,
    };
    let make = |id: &str| CountryRecord {
      id: id.to_string(),
      name: id.to_string(),
      scores: flat,
      avg_salary_usd: 50_000,
      cost_index: 150,
      hot_jobs: vec![],
      visa_paths: vec!["Some Permit".to_string()],
      pros: vec![],
      cons: vec![],
      expat_community: CommunitySize::Small,
    };
    let catalog = Catalog {
      occupations: Default::default(),
      countries: vec![make("alpha"), make("beta"), make("gamma")],
    };
    let results = match_countries(&params(&[], None, 0), &catalog, &MatchConfig::default());
    let ids: Vec<_> = results.iter().map(|r| r.country.id.as_str()).collect();
    assert_eq!(ids, ["alpha", "beta", "gamma"]);
  }

  #[test]
  fn permuted_catalog_ranks_identically() {
    let config = MatchConfig {
      top_n: 16,
      ..MatchConfig::default()
    };
    let p = params(&[Goal::MoneyJob], Some("software"), 60_000);
    let forward = match_countries(&p, &Catalog::builtin(), &config);
    let mut permuted = Catalog::builtin();
    permuted.countries.reverse();
    let reversed = match_countries(&p, &permuted, &config);

    let pcts = |rs: &[MatchResult]| rs.iter().map(|r| r.match_pct).collect::<Vec<_>>();
    assert_eq!(pcts(&forward), pcts(&reversed));

    // Catalog order only breaks ties, so countries may trade places within
    // an equal-percentage group but never across groups.
    let grouped = |rs: &[MatchResult]| -> BTreeMap<u8, Vec<String>> {
      let mut m: BTreeMap<u8, Vec<String>> = BTreeMap::new();
      for r in rs {
        m.entry(r.match_pct).or_default().push(r.country.id.clone());
      }
      for ids in m.values_mut() {
        ids.sort();
      }
      m
    };
    assert_eq!(grouped(&forward), grouped(&reversed));
  }

  #[test]
  fn highlights_grade_by_score_and_cap_at_four() {
    let results = match_countries(
      &params(&[Goal::MoneyJob], Some("software"), 100_000),
      &catalog(),
      &MatchConfig { top_n: 16, ..MatchConfig::default() },
    );
    let australia = results.iter().find(|r| r.country.id == "australia").unwrap();
    assert_eq!(
      australia.highlights,
      vec![
        "Excellent healthcare",
        "Excellent education",
        "Excellent political stability",
        "Tech & IT roles in demand here",
      ]
    );
    for r in &results {
      assert!(r.highlights.len() <= 4);
    }
  }

  #[test]
  fn occupation_note_travels_with_the_result() {
    let results = match_countries(
      &params(&[], Some("healthcare"), 0),
      &catalog(),
      &MatchConfig { top_n: 16, ..MatchConfig::default() },
    );
    let australia = results.iter().find(|r| r.country.id == "australia").unwrap();
    assert!(australia.occupation_note.contains("nursing"));
    let portugal = results.iter().find(|r| r.country.id == "portugal").unwrap();
    assert!(portugal.occupation_note.is_empty());
  }
}
