//! Visa pathway recommender.
//!
//! Branches on the applicant's situation and emits every pathway worth
//! considering, each with a bounded suitability percentage and, where the
//! score sums several terms, a factor breakdown. Suitability is a planning
//! heuristic: caps sit below 100 wherever a sponsor, state, or invitation
//! round remains outside the applicant's control.

use crate::config::Config;
use crate::points::compute_points;
use crate::types::{
  Catalog, Education, EligibilityTier, Factor, Location, OccupationRecord, Profile, Relationship,
  Situation, VisaCandidate, VisaCategory,
};

/// Accumulates additive score terms so the breakdown and the total cannot
/// drift apart.
struct ScoreBuilder {
  factors: Vec<Factor>,
  total: u32,
}

impl ScoreBuilder {
  fn new() -> Self {
    Self {
      factors: Vec::new(),
      total: 0,
    }
  }

  fn add(&mut self, label: &str, earned: u32, max: u32) -> &mut Self {
    self.total += earned;
    self.factors.push(Factor {
      label: label.to_string(),
      earned,
      max,
    });
    self
  }

  fn pct(&self, cap: u8) -> u8 {
    self.total.min(u32::from(cap)) as u8
  }

  /// Breakdown, present only when more than one term contributed.
  fn factors(self) -> Option<Vec<Factor>> {
    if self.factors.len() > 1 {
      Some(self.factors)
    } else {
      None
    }
  }
}

fn candidate(
  code: &str,
  name: &str,
  pct: u8,
  category: VisaCategory,
  tips: &[String],
  journey: &[&str],
  factors: Option<Vec<Factor>>,
) -> VisaCandidate {
  VisaCandidate {
    code: code.to_string(),
    name: name.to_string(),
    pct,
    tips: tips.to_vec(),
    journey: journey.iter().map(|s| s.to_string()).collect(),
    category,
    factors,
  }
}

fn owned(tips: &[&str]) -> Vec<String> {
  tips.iter().map(|s| s.to_string()).collect()
}

/// Margin band against an invitation cutoff: comfortable margins score far
/// better than scraping past, and falling short nearly zeroes the term.
fn margin_band(points: u32, cutoff: u32) -> u32 {
  let margin = i64::from(points) - i64::from(cutoff);
  if margin >= 10 {
    35
  } else if margin >= 5 {
    28
  } else if margin >= 0 {
    22
  } else {
    8
  }
}

fn employer_tier_bonus(tier: EligibilityTier) -> u32 {
  match tier {
    EligibilityTier::BothTopLists => 15,
    EligibilityTier::TopListOnly => 12,
    EligibilityTier::ShortListBoth => 10,
    EligibilityTier::ShortListOnly | EligibilityTier::EmployerListOnly => 8,
    EligibilityTier::RegionalListOnly => 4,
    EligibilityTier::None => 0,
  }
}

fn skilled_tier_bonus(tier: EligibilityTier) -> u32 {
  match tier {
    EligibilityTier::BothTopLists => 12,
    EligibilityTier::TopListOnly => 8,
    _ => 0,
  }
}

fn student_tier_bonus(tier: EligibilityTier) -> u32 {
  match tier {
    EligibilityTier::BothTopLists | EligibilityTier::TopListOnly => 10,
    EligibilityTier::ShortListBoth | EligibilityTier::ShortListOnly => 6,
    EligibilityTier::EmployerListOnly => 4,
    EligibilityTier::RegionalListOnly => 3,
    EligibilityTier::None => 0,
  }
}

fn study_level_bonus(level: Education) -> u32 {
  match level {
    Education::Phd => 12,
    Education::Masters => 10,
    Education::Bachelor => 8,
    Education::Trade => 6,
    Education::Highschool => 0,
  }
}

/// Recommend visa pathways for a profile, best first.
///
/// Total over all inputs: missing fields and unknown occupation keys degrade
/// to fewer or more generic candidates, never an error. The returned order is
/// a stable descending sort, so equal scores keep emission order.
pub fn recommend(profile: &Profile, catalog: &Catalog, config: &Config) -> Vec<VisaCandidate> {
  let occupation = profile
    .occupation
    .as_deref()
    .and_then(|key| catalog.occupations.get(key));

  let mut out = match profile.situation {
    Situation::Experienced => experienced(profile, occupation, config),
    Situation::Student => student(profile, occupation, config),
    Situation::Partner => partner(profile, config),
    Situation::WorkingHoliday => working_holiday(profile, occupation, config),
  };

  // Stable: ties keep emission order.
  out.sort_by(|a, b| b.pct.cmp(&a.pct));
  out
}

fn experienced(
  profile: &Profile,
  occupation: Option<&OccupationRecord>,
  config: &Config,
) -> Vec<VisaCandidate> {
  let mut out = Vec::new();
  let s = &config.suitability;
  let points = compute_points(profile, &config.points);

  // Employer sponsorship needs no points test, so it is always on the table.
  match occupation {
    Some(occ) => {
      // Sponsors care about the deeper of the two experience tracks.
      let experience = profile
        .overseas_experience
        .max(profile.domestic_experience)
        .map(|band| match band {
          crate::types::ExperienceBand::Years8Plus => 8,
          crate::types::ExperienceBand::Years5To7 => 6,
          crate::types::ExperienceBand::Years3To4 => 4,
          crate::types::ExperienceBand::Years0To2 => 0,
        })
        .unwrap_or(0);

      let mut score = ScoreBuilder::new();
      score
        .add("Sponsorship route", s.employer_base, s.employer_base)
        .add("Shortage-list standing", employer_tier_bonus(occ.tier), 15)
        .add("Occupation demand", occ.demand.scaled(10, 7, 4), 10)
        .add("Work experience", experience, 8);
      out.push(candidate(
        "482-186",
        "Employer Sponsored (TSS to PR)",
        score.pct(s.employer_cap),
        VisaCategory::Employer,
        &owned(&[
          "No points test at all",
          "Minimum English requirement only (IELTS 5.0)",
          "Start working and earning immediately",
          "Clear PR route: two years on 482, then 186",
        ]),
        &[
          "Find a sponsoring employer",
          "Visa in 3-6 months",
          "Work two years",
          "Apply for 186",
          "Permanent residence",
        ],
        score.factors(),
      ));

      if occ.tier.includes_top_list() {
        // Independent stream: top-list occupation and the pass mark, both.
        if points >= config.points.pass_mark {
          let mut score = ScoreBuilder::new();
          score
            .add("Skilled stream", s.independent_base, s.independent_base)
            .add("Cutoff margin", margin_band(points, occ.min_points), 35)
            .add("Shortage-list standing", skilled_tier_bonus(occ.tier), 12)
            .add("Occupation demand", occ.demand.scaled(6, 4, 2), 6);
          out.push(candidate(
            "189",
            "Skilled Independent",
            score.pct(s.independent_cap),
            VisaCategory::Skilled,
            &[
              format!("{points} points on the official test"),
              "Immediate PR, no employer or state ties".to_string(),
              "Live and work anywhere in the country".to_string(),
              format!("Competitive: recent cutoffs near {}", occ.min_points),
            ],
            &[
              "Skills assessment",
              "Lodge expression of interest",
              "Wait for invitation",
              "Lodge application",
              "Permanent residence",
            ],
            score.factors(),
          ));
        }

        let nominated = points + config.points.state_nomination_bonus;
        if nominated >= config.points.pass_mark {
          let mut score = ScoreBuilder::new();
          score
            .add("Nominated stream", s.state_base, s.state_base)
            .add("Cutoff margin", margin_band(nominated, occ.min_points), 35)
            .add("Shortage-list standing", skilled_tier_bonus(occ.tier), 12)
            .add("Occupation demand", occ.demand.scaled(6, 4, 2), 6);
          out.push(candidate(
            "190",
            "Skilled Nominated",
            score.pct(s.state_cap),
            VisaCategory::Skilled,
            &[
              format!(
                "{points} points + {} state nomination = {nominated}",
                config.points.state_nomination_bonus
              ),
              "Permanent residence on grant".to_string(),
              "Two years in the nominating state".to_string(),
              "Lower cutoffs than the independent stream".to_string(),
            ],
            &[
              "Skills assessment",
              "State nomination",
              "Lodge expression of interest",
              "Invitation",
              "Permanent residence",
            ],
            score.factors(),
          ));
        }

        // Second chance: the regional bonus lifts a below-pass-mark score
        // over the line.
        let regional = points + config.points.regional_bonus;
        if points < config.points.pass_mark && regional >= config.points.pass_mark {
          let mut score = ScoreBuilder::new();
          score
            .add("Regional stream", s.regional_base, s.regional_base)
            .add(
              "Regional nomination bonus",
              config.points.regional_bonus,
              config.points.regional_bonus,
            )
            .add("Occupation demand", occ.demand.scaled(8, 5, 2), 8);
          out.push(candidate(
            "491-191",
            "Skilled Work Regional",
            score.pct(s.regional_cap),
            VisaCategory::Skilled,
            &[
              format!(
                "{points} points + {} regional = {regional}",
                config.points.regional_bonus
              ),
              "Cheaper living than the big cities".to_string(),
              "Three years regional, then 191 PR".to_string(),
            ],
            &[
              "Skills assessment",
              "Regional nomination",
              "Three years regional",
              "Apply for 191",
              "Permanent residence",
            ],
            score.factors(),
          ));
        }
      } else if occ.tier.lower_list_only() {
        // Cautionary: the occupation is listed, but not on the top list, so
        // the independent stream is closed no matter the points.
        out.push(candidate(
          "491-191",
          "Skilled Work Regional",
          45,
          VisaCategory::Skilled,
          &owned(&[
            "Occupation sits on a secondary list only",
            "Independent 189 is not available for it",
            "Regional nomination or employer sponsorship are the realistic routes",
          ]),
          &[
            "Skills assessment",
            "Regional or employer nomination",
            "Provisional visa",
            "Permanent residence",
          ],
          None,
        ));
      }
    }
    None => {
      // No occupation chosen yet: sponsorship is the only scorable route.
      out.push(candidate(
        "482-186",
        "Employer Sponsored (TSS to PR)",
        s.employer_base.min(u32::from(s.employer_cap)) as u8,
        VisaCategory::Employer,
        &owned(&[
          "No points test at all",
          "Pick an occupation to sharpen this estimate",
          "Clear PR route: two years on 482, then 186",
        ]),
        &[
          "Find a sponsoring employer",
          "Visa in 3-6 months",
          "Work two years",
          "Apply for 186",
          "Permanent residence",
        ],
        None,
      ));
    }
  }

  if profile.age.is_some_and(|a| a.working_holiday_eligible()) {
    out.push(candidate(
      "462",
      "Work & Holiday (exploratory)",
      s.exploratory_low,
      VisaCategory::WorkingHoliday,
      &owned(&[
        "Cheapest visa by far",
        "Fast entry to test real life there",
        "Use the year to find an employer sponsor",
      ]),
      &[
        "Apply for 462",
        "Work and meet employers",
        "Switch to 482",
        "Two years to 186",
        "Permanent residence",
      ],
      None,
    ));
  }

  out
}

fn student(
  profile: &Profile,
  occupation: Option<&OccupationRecord>,
  config: &Config,
) -> Vec<VisaCandidate> {
  let mut out = Vec::new();
  let s = &config.suitability;

  match occupation {
    Some(occ) => {
      let level = profile
        .study_level
        .map(study_level_bonus)
        .unwrap_or(0);
      let mut score = ScoreBuilder::new();
      score
        .add("Study route", s.student_base, s.student_base)
        .add("Study level", level, 12)
        .add("Shortage-list standing", student_tier_bonus(occ.tier), 10)
        .add("Occupation demand", occ.demand.scaled(8, 5, 2), 8);
      out.push(candidate(
        "500-485",
        "Student to Graduate to PR",
        score.pct(s.student_cap),
        VisaCategory::Student,
        &owned(&[
          "No work experience needed to start",
          "Graduate visa allows full-time work afterwards",
          "A local qualification adds points later",
          "Find an employer sponsor while on the 485",
        ]),
        &[
          "Study (500)",
          "Graduate visa (485)",
          "Full-time work",
          "482 to 186, or 189/190",
          "Permanent residence",
        ],
        score.factors(),
      ));
    }
    None => {
      out.push(candidate(
        "500-485",
        "Student to Graduate to PR",
        s.student_generic,
        VisaCategory::Student,
        &owned(&[
          "No work experience needed to start",
          "Graduate visa allows full-time work afterwards",
          "Pick a shortage-list field to sharpen this estimate",
        ]),
        &[
          "Study (500)",
          "Graduate visa (485)",
          "Full-time work",
          "482 to 186, or 189/190",
          "Permanent residence",
        ],
        None,
      ));
    }
  }

  out.push(candidate(
    "482-186",
    "Employer Sponsored (after graduating)",
    68,
    VisaCategory::Employer,
    &owned(&[
      "Find a sponsor after graduating",
      "No points test",
      "IELTS 5.0 suffices",
    ]),
    &[
      "Graduate",
      "Job hunt on 485",
      "Employer sponsors 482",
      "Two years to 186",
      "Permanent residence",
    ],
    None,
  ));

  if profile.age.is_some_and(|a| a.working_holiday_eligible()) {
    out.push(candidate(
      "462",
      "Working holiday first (try before you commit)",
      50,
      VisaCategory::WorkingHoliday,
      &owned(&[
        "Try living there before paying tuition",
        "Cheap visa",
        "Real information before the big decision",
      ]),
      &[
        "462, work a year",
        "Decide, then study (500)",
        "Graduate to 485",
        "Sponsor to PR",
      ],
      None,
    ));
  }

  out
}

fn partner(profile: &Profile, config: &Config) -> Vec<VisaCandidate> {
  let s = &config.suitability;
  let onshore = profile.location == Some(Location::Destination);

  let evidence = match profile.relationship {
    Some(Relationship::Married) => 15,
    Some(Relationship::DeFacto) => 8,
    None => 0,
  };
  let mut score = ScoreBuilder::new();
  score
    .add("Partner route", s.partner_base, s.partner_base)
    .add("Relationship evidence", evidence, 15)
    .add("No skills or points test", 10, 10);

  let evidence_tip = match profile.relationship {
    Some(Relationship::Married) => "Marriage certificate is the core evidence",
    Some(Relationship::DeFacto) => "Twelve months of cohabitation evidence",
    None => "Confirm the relationship category before lodging",
  };
  let (code, name, lodge_tip, wait_step) = if onshore {
    (
      "820-801",
      "Partner Visa (Onshore)",
      "Bridging visa with work rights on lodgement",
      "Bridging visa, work while waiting",
    )
  } else {
    (
      "309-100",
      "Partner Visa (Offshore)",
      "Apply from home, no prior visa needed",
      "Move over on the provisional stage",
    )
  };

  vec![candidate(
    code,
    name,
    score.pct(s.partner_cap),
    VisaCategory::Partner,
    &owned(&[
      "No skills, points, or English test",
      lodge_tip,
      evidence_tip,
      "Expensive application, but a certain PR route",
    ]),
    &[
      "Prepare relationship evidence",
      "Lodge first stage",
      "12-24 month wait",
      wait_step,
      "Permanent stage",
    ],
    score.factors(),
  )]
}

fn working_holiday(
  profile: &Profile,
  occupation: Option<&OccupationRecord>,
  config: &Config,
) -> Vec<VisaCandidate> {
  let mut out = Vec::new();
  let s = &config.suitability;
  // Unknown age degrades permissively: the exploratory route stays open.
  let age_eligible = profile.age.map_or(true, |a| a.working_holiday_eligible());

  if age_eligible {
    out.push(candidate(
      "462",
      "Work & Holiday",
      s.exploratory_high,
      VisaCategory::WorkingHoliday,
      &owned(&[
        "Cheapest visa of all",
        "IELTS 4.5 is enough",
        "Full-time work in any occupation",
        "Extendable to three years with regional work",
        "Build experience toward 482 and PR",
      ]),
      &[
        "Apply for 462",
        "Go and work",
        "Find an employer sponsor",
        "482, two years",
        "Permanent residence",
      ],
      None,
    ));

    let demand = occupation
      .map(|occ| occ.demand.scaled(15, 10, 5))
      .unwrap_or(0);
    let mut score = ScoreBuilder::new();
    score
      .add("Sponsorship follow-on", 55, 55)
      .add("Occupation demand", demand, 15);
    out.push(candidate(
      "482",
      "Employer Sponsored (follow-on)",
      score.pct(80),
      VisaCategory::Employer,
      &owned(&[
        "Use the working-holiday year to find a sponsor",
        "482 accepts applicants up to age 45",
        "No points test",
      ]),
      &[
        "Work on the 462",
        "Employer sponsors 482",
        "Two years",
        "Apply for 186",
        "Permanent residence",
      ],
      score.factors(),
    ));
  } else {
    out.push(candidate(
      "482",
      "Employer Sponsored (instead of WHV)",
      80,
      VisaCategory::Employer,
      &owned(&[
        "Over the working-holiday age limit",
        "482 accepts applicants up to age 45",
        "No points test",
        "PR route: 482, two years, then 186",
      ]),
      &[
        "Find a sponsoring employer",
        "Get the 482",
        "Work two years",
        "Apply for 186",
        "Permanent residence",
      ],
      None,
    ));
    out.push(candidate(
      "500",
      "Student Visa",
      60,
      VisaCategory::Student,
      &owned(&[
        "No age limit up to 50",
        "Study plus part-time work",
        "Graduate visa afterwards",
      ]),
      &[
        "Study (500)",
        "Graduate to 485",
        "Find a sponsor",
        "482 to 186",
        "Permanent residence",
      ],
      None,
    ));
  }

  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::*;

  fn catalog() -> Catalog {
    Catalog::builtin()
  }

  fn experienced_profile(occupation: &str) -> Profile {
    let mut p = Profile::new(Situation::Experienced);
    p.age = Some(AgeBand::Age33To39);
    p.english = Some(EnglishBand::Proficient);
    p.overseas_experience = Some(ExperienceBand::Years8Plus);
    p.domestic_experience = Some(ExperienceBand::Years8Plus);
    p.education = Some(Education::Bachelor);
    p.partner_status = Some(PartnerStatus::Single);
    p.occupation = Some(occupation.to_string());
    p // 80 points
  }

  #[test]
  fn experienced_top_list_gets_independent_and_state() {
    let recs = recommend(&experienced_profile("software-engineer"), &catalog(), &Config::default());
    let codes: Vec<_> = recs.iter().map(|r| r.code.as_str()).collect();
    assert!(codes.contains(&"482-186"));
    assert!(codes.contains(&"189"));
    assert!(codes.contains(&"190"));
    // 80 points is at the pass mark band, not below it.
    assert!(!codes.contains(&"491-191"));
  }

  #[test]
  fn below_pass_mark_hides_independent_but_offers_regional() {
    // Age 40-44 (15) + competent (0) + overseas 5-7 (10) + bachelor (15) +
    // partner-english (5) + STEM (10) = 55: below 65, but 55 + 15 >= 65.
    let mut p = Profile::new(Situation::Experienced);
    p.age = Some(AgeBand::Age40To44);
    p.english = Some(EnglishBand::Competent);
    p.overseas_experience = Some(ExperienceBand::Years5To7);
    p.education = Some(Education::Bachelor);
    p.partner_status = Some(PartnerStatus::PartnerEnglishOnly);
    p.bonus.stem_qualification = true;
    p.occupation = Some("software-engineer".to_string());

    let recs = recommend(&p, &catalog(), &Config::default());
    let codes: Vec<_> = recs.iter().map(|r| r.code.as_str()).collect();
    assert!(!codes.contains(&"189"), "independent must be absent below the pass mark");
    assert!(codes.contains(&"491-191"));
  }

  #[test]
  fn lower_list_occupation_gets_cautionary_regional() {
    let recs = recommend(&experienced_profile("marketing-specialist"), &catalog(), &Config::default());
    let codes: Vec<_> = recs.iter().map(|r| r.code.as_str()).collect();
    assert!(!codes.contains(&"189"));
    assert!(!codes.contains(&"190"));
    let regional = recs.iter().find(|r| r.code == "491-191").unwrap();
    assert_eq!(regional.pct, 45);
    assert!(regional.factors.is_none());
  }

  #[test]
  fn employer_candidate_is_always_present_and_capped() {
    let config = Config::default();
    for key in ["software-engineer", "graphic-designer", "cafe-manager"] {
      let recs = recommend(&experienced_profile(key), &catalog(), &config);
      let employer = recs.iter().find(|r| r.code == "482-186").unwrap();
      assert!(employer.pct <= config.suitability.employer_cap);
      assert!(employer.factors.as_ref().is_some_and(|f| f.len() == 4));
    }
  }

  #[test]
  fn employer_score_worked_example() {
    // software-engineer: 55 base + 15 (both top lists) + 10 (very high
    // demand) + 8 (8+ years) = 88, under the 90 cap.
    let recs = recommend(&experienced_profile("software-engineer"), &catalog(), &Config::default());
    let employer = recs.iter().find(|r| r.code == "482-186").unwrap();
    assert_eq!(employer.pct, 88);
  }

  #[test]
  fn independent_score_worked_example() {
    // 80 points vs min 85: short of the cutoff. 40 + 8 + 12 + 6 = 66.
    let recs = recommend(&experienced_profile("software-engineer"), &catalog(), &Config::default());
    let independent = recs.iter().find(|r| r.code == "189").unwrap();
    assert_eq!(independent.pct, 66);
  }

  #[test]
  fn missing_occupation_degrades_to_generic_employer() {
    let mut p = Profile::new(Situation::Experienced);
    p.age = Some(AgeBand::Age25To32);
    let recs = recommend(&p, &catalog(), &Config::default());
    let employer = recs.iter().find(|r| r.code == "482-186").unwrap();
    assert_eq!(employer.pct, 55);
    assert!(employer.factors.is_none());
    // Young enough for the exploratory route too.
    assert!(recs.iter().any(|r| r.code == "462"));
  }

  #[test]
  fn student_with_occupation_scores_the_study_route() {
    let mut p = Profile::new(Situation::Student);
    p.study_level = Some(Education::Masters);
    p.occupation = Some("registered-nurse".to_string());
    p.age = Some(AgeBand::Age18To24);
    let recs = recommend(&p, &catalog(), &Config::default());
    // 60 + 10 (masters) + 10 (top list) + 8 (very high) = 88.
    let study = recs.iter().find(|r| r.code == "500-485").unwrap();
    assert_eq!(study.pct, 88);
    assert!(recs.iter().any(|r| r.code == "482-186" && r.pct == 68));
    assert!(recs.iter().any(|r| r.code == "462" && r.pct == 50));
  }

  #[test]
  fn student_without_occupation_is_generic() {
    let p = Profile::new(Situation::Student);
    let recs = recommend(&p, &catalog(), &Config::default());
    let study = recs.iter().find(|r| r.code == "500-485").unwrap();
    assert_eq!(study.pct, 75);
    assert!(study.factors.is_none());
  }

  #[test]
  fn partner_married_onshore_hits_the_cap() {
    let mut p = Profile::new(Situation::Partner);
    p.relationship = Some(Relationship::Married);
    p.location = Some(Location::Destination);
    let recs = recommend(&p, &catalog(), &Config::default());
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].code, "820-801");
    // 70 + 15 + 10 = 95, exactly the cap.
    assert_eq!(recs[0].pct, 95);
  }

  #[test]
  fn partner_de_facto_offshore() {
    let mut p = Profile::new(Situation::Partner);
    p.relationship = Some(Relationship::DeFacto);
    p.location = Some(Location::HomeCountry);
    let recs = recommend(&p, &catalog(), &Config::default());
    assert_eq!(recs[0].code, "309-100");
    assert_eq!(recs[0].pct, 88);
  }

  #[test]
  fn working_holiday_age_eligible() {
    let mut p = Profile::new(Situation::WorkingHoliday);
    p.age = Some(AgeBand::Age25To32);
    p.occupation = Some("chef".to_string());
    let recs = recommend(&p, &catalog(), &Config::default());
    assert_eq!(recs[0].code, "462");
    assert_eq!(recs[0].pct, 95);
    // Follow-on: 55 + 10 (high demand) = 65.
    let follow = recs.iter().find(|r| r.code == "482").unwrap();
    assert_eq!(follow.pct, 65);
  }

  #[test]
  fn working_holiday_over_age_pivots_to_employer_and_study() {
    let mut p = Profile::new(Situation::WorkingHoliday);
    p.age = Some(AgeBand::Age33To39);
    let recs = recommend(&p, &catalog(), &Config::default());
    assert_eq!(recs[0].code, "482");
    assert_eq!(recs[0].pct, 80);
    assert_eq!(recs[1].code, "500");
    assert_eq!(recs[1].pct, 60);
    assert!(!recs.iter().any(|r| r.code == "462"));
  }

  #[test]
  fn regional_breakdown_tracks_a_substituted_bonus() {
    // 15 (age) + 0 (competent) + 10 (overseas 5-7) + 15 (bachelor) +
    // 10 (single) = 50: only a 20-point regional bonus reaches the pass mark,
    // and the breakdown must carry that same configured value.
    let mut config = Config::default();
    config.points.regional_bonus = 20;
    let mut p = Profile::new(Situation::Experienced);
    p.age = Some(AgeBand::Age40To44);
    p.english = Some(EnglishBand::Competent);
    p.overseas_experience = Some(ExperienceBand::Years5To7);
    p.education = Some(Education::Bachelor);
    p.partner_status = Some(PartnerStatus::Single);
    p.occupation = Some("software-engineer".to_string());

    let recs = recommend(&p, &catalog(), &config);
    let regional = recs.iter().find(|r| r.code == "491-191").unwrap();
    let factors = regional.factors.as_ref().unwrap();
    let bonus = factors
      .iter()
      .find(|f| f.label == "Regional nomination bonus")
      .unwrap();
    assert_eq!(bonus.earned, 20);
    assert_eq!(bonus.max, 20);
  }

  #[test]
  fn results_are_sorted_descending() {
    let recs = recommend(&experienced_profile("registered-nurse"), &catalog(), &Config::default());
    for pair in recs.windows(2) {
      assert!(pair[0].pct >= pair[1].pct);
    }
  }

  #[test]
  fn every_score_is_bounded() {
    let config = Config::default();
    let keys: Vec<String> = catalog().occupations.keys().cloned().collect();
    for key in keys {
      for situation in [
        Situation::Experienced,
        Situation::Student,
        Situation::WorkingHoliday,
      ] {
        let mut p = experienced_profile(&key);
        p.situation = situation;
        p.study_level = Some(Education::Phd);
        for rec in recommend(&p, &catalog(), &config) {
          assert!(rec.pct <= 95, "{} {:?} scored {}", key, situation, rec.pct);
        }
      }
    }
  }
}
