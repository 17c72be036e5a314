//! Wake-up trivia shown when the alarm rings.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriviaCategory {
    Health,
    Nature,
    Emotion,
}

impl TriviaCategory {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "health" => Some(Self::Health),
            "nature" => Some(Self::Nature),
            "emotion" => Some(Self::Emotion),
            _ => None,
        }
    }
}

/// Button that reveals the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriviaPrompt {
    Why,
    What,
    How,
}

impl TriviaPrompt {
    /// Unknown prompts read as `What?`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "why" => Self::Why,
            "how" => Self::How,
            _ => Self::What,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Why => "Why?",
            Self::What => "What?",
            Self::How => "How?",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriviaItem {
    pub category: TriviaCategory,
    pub time_label: &'static str,
    pub question: &'static str,
    pub prompt: TriviaPrompt,
    pub answer: &'static str,
}

pub static TRIVIA_ITEMS: [TriviaItem; 3] = [
    TriviaItem {
        category: TriviaCategory::Health,
        time_label: "08:00 AM",
        question: "DON'T YOU KNOW THAT JUST EATING CARROTS WON'T IMPROVE YOUR EXISTING EYESIGHT?",
        prompt: TriviaPrompt::Why,
        answer: "While carrots do contain a nutrient called beta-carotene that is good for the eyes, \
                 eating them will not improve existing eyesight. Nature and exposure to natural light \
                 play vital roles in enhancing vision and reducing risks like digital eye strain and \
                 myopia progression.",
    },
    TriviaItem {
        category: TriviaCategory::Nature,
        time_label: "12:30 PM",
        question: "DO YOU KNOW WHAT SITTING INDOORS ALL DAY DOES TO YOUR BRAIN?",
        prompt: TriviaPrompt::What,
        answer: "Spending too long indoors can increase stress and make it harder to focus. \
                 A short walk outside helps reset your mind.",
    },
    TriviaItem {
        category: TriviaCategory::Emotion,
        time_label: "06:30 PM",
        question: "DID YOU KNOW A 10-MINUTE WALK CAN LIFT YOUR MOOD?",
        prompt: TriviaPrompt::How,
        answer: "Short walks can reduce stress hormones and boost endorphins, helping you feel \
                 calmer and more positive.",
    },
];

/// Random item of `category`, or of the whole pool when the category is
/// absent or has no items.
pub fn random_trivia(category: Option<TriviaCategory>) -> &'static TriviaItem {
    random_trivia_with(&mut rand::thread_rng(), category)
}

pub fn random_trivia_with<R: Rng + ?Sized>(
    rng: &mut R,
    category: Option<TriviaCategory>,
) -> &'static TriviaItem {
    let pool: Vec<&'static TriviaItem> = TRIVIA_ITEMS
        .iter()
        .filter(|t| category.map_or(true, |c| t.category == c))
        .collect();
    let pool = if pool.is_empty() {
        TRIVIA_ITEMS.iter().collect()
    } else {
        pool
    };
    pool[rng.gen_range(0..pool.len())]
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_category_filter() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let item = random_trivia_with(&mut rng, Some(TriviaCategory::Nature));
            assert_eq!(item.category, TriviaCategory::Nature);
            assert_eq!(item.prompt, TriviaPrompt::What);
        }
    }

    #[test]
    fn test_no_category_draws_from_all() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(random_trivia_with(&mut rng, None).category);
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_names() {
        assert_eq!(TriviaCategory::from_name("emotion"), Some(TriviaCategory::Emotion));
        assert_eq!(TriviaCategory::from_name("sports"), None);
        assert_eq!(TriviaPrompt::from_name("how").label(), "How?");
        assert_eq!(TriviaPrompt::from_name("when").label(), "What?");
    }

    #[test]
    fn test_thread_rng_entry_point() {
        let item = random_trivia(Some(TriviaCategory::Health));
        assert_eq!(item.time_label, "08:00 AM");
    }
}
