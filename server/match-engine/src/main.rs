//! Binary entrypoint: read JSON lines from stdin, write JSON lines to stdout.
//!
//! Each input line is a tagged request:
//! - `{"op": "points", "situation": ..., ...}` → `{"points": N}`
//! - `{"op": "classify", "shortage_list": "..."}` → `{"tier": "..."}`
//! - `{"op": "recommend", "situation": ..., ...}` → `{"candidates": [...]}`
//! - `{"op": "match", "goals": [...], ...}` → `{"matches": [...]}`
//!
//! Malformed lines produce a structured ErrorOutput; blank lines are skipped.

use match_engine::types::{EligibilityTier, ErrorOutput};
use match_engine::{Engine, EngineError, MatchParams, MatchResult, Profile, VisaCandidate};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};

#[derive(Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
enum Request {
  Points {
    #[serde(flatten)]
    profile: Profile,
  },
  Classify {
    shortage_list: String,
  },
  Recommend {
    #[serde(flatten)]
    profile: Profile,
  },
  Match {
    #[serde(flatten)]
    params: MatchParams,
  },
}

#[derive(Serialize)]
#[serde(untagged)]
enum Response {
  Points { points: u32 },
  Classify { tier: EligibilityTier },
  Recommend { candidates: Vec<VisaCandidate> },
  Match { matches: Vec<MatchResult> },
}

fn handle(engine: &Engine, request: Request) -> Response {
  match request {
    Request::Points { profile } => Response::Points {
      points: engine.compute_points(&profile),
    },
    Request::Classify { shortage_list } => Response::Classify {
      tier: match_engine::classify(&shortage_list),
    },
    Request::Recommend { profile } => Response::Recommend {
      candidates: engine.recommend(&profile),
    },
    Request::Match { params } => Response::Match {
      matches: engine.match_countries(&params),
    },
  }
}

fn main() {
  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());
  let engine = Engine::with_defaults();

  for line in stdin.lock().lines() {
    let line = match line {
      Ok(l) => l,
      Err(e) => {
        let _ = writeln!(io::stderr(), "match-engine: read error: {}", e);
        std::process::exit(1);
      }
    };

    // Skip blank lines.
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    let request: Request = match serde_json::from_str(trimmed).map_err(EngineError::from) {
      Ok(v) => v,
      Err(e) => {
        let err = ErrorOutput::new(e.to_string());
        let _ = serde_json::to_writer(&mut out, &err);
        let _ = writeln!(out);
        continue;
      }
    };

    let response = handle(&engine, request);
    let _ = serde_json::to_writer(&mut out, &response);
    let _ = writeln!(out);
  }

  let _ = out.flush();
}
