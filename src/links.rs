//! Workout link selection
//!
//! Maps an exercise name and the weight jump to the next session onto a
//! fixed search link. The keyword table is ordered: the first keyword found
//! in the name decides the family, so "curl press" resolves to `press`.

use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Classification
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseFamily {
  Bench,
  Squat,
  Deadlift,
  Press,
  Row,
  Pullup,
  Curl,
  Default,
}

/// Size of the jump between this session and the suggested target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JumpCategory {
  Small,
  Medium,
  Large,
}

impl JumpCategory {
  /// Upper bounds are exclusive: exactly 5 is medium, exactly 15 is large
  pub fn from_difference(weight_difference: f64) -> Self {
    match weight_difference {
      d if d < 5.0 => JumpCategory::Small,
      d if d < 15.0 => JumpCategory::Medium,
      _ => JumpCategory::Large,
    }
  }

  fn index(self) -> usize {
    match self {
      JumpCategory::Small => 0,
      JumpCategory::Medium => 1,
      JumpCategory::Large => 2,
    }
  }
}

/// Checked in order, first match wins
pub const FAMILY_KEYWORDS: [(&str, ExerciseFamily); 7] = [
  ("bench", ExerciseFamily::Bench),
  ("squat", ExerciseFamily::Squat),
  ("deadlift", ExerciseFamily::Deadlift),
  ("press", ExerciseFamily::Press),
  ("row", ExerciseFamily::Row),
  ("pullup", ExerciseFamily::Pullup),
  ("curl", ExerciseFamily::Curl),
];

impl ExerciseFamily {
  /// Case-insensitive substring match against `FAMILY_KEYWORDS`
  pub fn from_exercise_name(name: &str) -> Self {
    let lower = name.to_lowercase();
    FAMILY_KEYWORDS
      .iter()
      .find(|(keyword, _)| lower.contains(keyword))
      .map(|(_, family)| *family)
      .unwrap_or(ExerciseFamily::Default)
  }
}

/// ---------------------------------------------------------------------------
/// Link Table
/// ---------------------------------------------------------------------------

pub const SEARCH_HOST: &str = "www.youtube.com";

type LinkRow = [(&'static str, &'static str); 3];

fn link_row(family: ExerciseFamily) -> &'static LinkRow {
  match family {
    ExerciseFamily::Bench => &[
      ("https://www.youtube.com/results?search_query=progressive+overload+bench+press+tips", "Bench Press Progressive Overload Tips"),
      ("https://www.youtube.com/results?search_query=increase+bench+press+strength+program", "Bench Press Strength Program"),
      ("https://www.youtube.com/results?search_query=bench+press+strength+building+routine", "Advanced Bench Press Training"),
    ],
    ExerciseFamily::Squat => &[
      ("https://www.youtube.com/results?search_query=squat+progressive+overload+technique", "Squat Progressive Overload Tips"),
      ("https://www.youtube.com/results?search_query=increase+squat+strength+program", "Squat Strength Program"),
      ("https://www.youtube.com/results?search_query=advanced+squat+training+program", "Advanced Squat Training"),
    ],
    ExerciseFamily::Deadlift => &[
      ("https://www.youtube.com/results?search_query=deadlift+progressive+overload+tips", "Deadlift Progressive Overload Tips"),
      ("https://www.youtube.com/results?search_query=increase+deadlift+strength", "Deadlift Strength Program"),
      ("https://www.youtube.com/results?search_query=advanced+deadlift+training", "Advanced Deadlift Training"),
    ],
    ExerciseFamily::Press => &[
      ("https://www.youtube.com/results?search_query=overhead+press+progressive+overload", "Shoulder Press Progressive Tips"),
      ("https://www.youtube.com/results?search_query=increase+shoulder+press+strength", "Shoulder Press Strength Program"),
      ("https://www.youtube.com/results?search_query=advanced+shoulder+training", "Advanced Shoulder Training"),
    ],
    ExerciseFamily::Row => &[
      ("https://www.youtube.com/results?search_query=row+progressive+overload+tips", "Row Progressive Overload Tips"),
      ("https://www.youtube.com/results?search_query=increase+rowing+strength", "Row Strength Program"),
      ("https://www.youtube.com/results?search_query=advanced+back+training", "Advanced Back Training"),
    ],
    ExerciseFamily::Pullup => &[
      ("https://www.youtube.com/results?search_query=pullup+progression+tips", "Pull-up Progression Tips"),
      ("https://www.youtube.com/results?search_query=increase+pullup+strength", "Pull-up Strength Program"),
      ("https://www.youtube.com/results?search_query=advanced+pullup+training", "Advanced Pull-up Training"),
    ],
    ExerciseFamily::Curl => &[
      ("https://www.youtube.com/results?search_query=bicep+curl+progressive+overload", "Curl Progressive Overload Tips"),
      ("https://www.youtube.com/results?search_query=build+bigger+biceps+program", "Bicep Strength Program"),
      ("https://www.youtube.com/results?search_query=advanced+arm+training", "Advanced Arm Training"),
    ],
    ExerciseFamily::Default => &[
      ("https://www.youtube.com/results?search_query=progressive+overload+training+tips", "Progressive Overload Training Tips"),
      ("https://www.youtube.com/results?search_query=strength+training+program", "Strength Training Program"),
      ("https://www.youtube.com/results?search_query=advanced+strength+training", "Advanced Strength Training"),
    ],
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutLink {
  pub url: String,
  pub label: String,
  pub family: ExerciseFamily,
  pub category: JumpCategory,
}

/// Picks the link for an exercise name and the weight jump to its target
pub fn classify_workout(exercise_name: &str, weight_difference: f64) -> WorkoutLink {
  let family = ExerciseFamily::from_exercise_name(exercise_name);
  let category = JumpCategory::from_difference(weight_difference);
  let (url, label) = link_row(family)[category.index()];

  WorkoutLink {
    url: url.to_string(),
    label: label.to_string(),
    family,
    category,
  }
}

/// True when `raw` is an https URL on the search host used by the table.
/// Gate for anything handed to the system browser.
pub fn is_trusted_link(raw: &str) -> bool {
  match url::Url::parse(raw) {
    Ok(parsed) => parsed.scheme() == "https" && parsed.host_str() == Some(SEARCH_HOST),
    Err(_) => false,
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_category_boundaries() {
    assert_eq!(JumpCategory::from_difference(4.99), JumpCategory::Small);
    assert_eq!(JumpCategory::from_difference(5.0), JumpCategory::Medium);
    assert_eq!(JumpCategory::from_difference(14.99), JumpCategory::Medium);
    assert_eq!(JumpCategory::from_difference(15.0), JumpCategory::Large);
    assert_eq!(JumpCategory::from_difference(0.0), JumpCategory::Small);
  }

  #[test]
  fn test_family_matching_is_case_insensitive() {
    assert_eq!(ExerciseFamily::from_exercise_name("Incline BENCH"), ExerciseFamily::Bench);
    assert_eq!(ExerciseFamily::from_exercise_name("Front Squat"), ExerciseFamily::Squat);
    assert_eq!(ExerciseFamily::from_exercise_name("Weighted Pullup"), ExerciseFamily::Pullup);
    assert_eq!(ExerciseFamily::from_exercise_name("Lunges"), ExerciseFamily::Default);
  }

  #[test]
  fn test_first_keyword_wins() {
    // "press" sits before "curl" in the table
    assert_eq!(ExerciseFamily::from_exercise_name("curl press"), ExerciseFamily::Press);
    // "bench" sits before "press"
    assert_eq!(ExerciseFamily::from_exercise_name("Bench Press"), ExerciseFamily::Bench);
    // "deadlift" sits before "row"
    assert_eq!(
      ExerciseFamily::from_exercise_name("Deadlift to row"),
      ExerciseFamily::Deadlift
    );
  }

  #[test]
  fn test_classify_bench_small() {
    let link = classify_workout("Bench Press", 2.5);
    assert_eq!(link.family, ExerciseFamily::Bench);
    assert_eq!(link.category, JumpCategory::Small);
    assert_eq!(link.label, "Bench Press Progressive Overload Tips");
    assert_eq!(
      link.url,
      "https://www.youtube.com/results?search_query=progressive+overload+bench+press+tips"
    );
  }

  #[test]
  fn test_classify_default_large() {
    let link = classify_workout("Hip Thrust", 20.0);
    assert_eq!(link.family, ExerciseFamily::Default);
    assert_eq!(link.label, "Advanced Strength Training");
  }

  #[test]
  fn test_every_table_url_is_trusted() {
    let families = [
      ExerciseFamily::Bench,
      ExerciseFamily::Squat,
      ExerciseFamily::Deadlift,
      ExerciseFamily::Press,
      ExerciseFamily::Row,
      ExerciseFamily::Pullup,
      ExerciseFamily::Curl,
      ExerciseFamily::Default,
    ];
    for family in families {
      for (url, label) in link_row(family) {
        assert!(is_trusted_link(url), "{} should be trusted", url);
        assert!(!label.is_empty());
      }
    }
  }

  #[test]
  fn test_untrusted_links() {
    assert!(!is_trusted_link("http://www.youtube.com/results?search_query=x"));
    assert!(!is_trusted_link("https://example.com/"));
    assert!(!is_trusted_link("not a url"));
    assert!(!is_trusted_link("file:///etc/passwd"));
  }
}
