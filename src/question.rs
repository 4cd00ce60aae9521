//! Picks the next yes/no question from the profiles still in play.

use crate::store::{Field, ProfileStore};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// A yes/no question together with the data needed to apply its answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub field: Field,
    pub keyword: String,
    pub text: String,
}

impl Question {
    pub fn new(field: Field, keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        let text = match field {
            Field::Company => format!("Has this person worked at {keyword}?"),
            Field::Role => format!("Has this person worked as a {keyword}?"),
            Field::Major => format!("Did this person study {keyword}?"),
            Field::Name => format!("Does this person's name include {keyword}?"),
        };
        Self {
            field,
            keyword,
            text,
        }
    }
}

/// Draw a company or role question from the remaining profiles.
///
/// Returns `None` once at most one profile is left, or when the remaining
/// profiles have no work history to ask about. A keyword is drawn from each
/// non-empty pool first, then one of those candidates is picked.
pub fn choose_next_question<R>(store: &ProfileStore, rng: &mut R) -> Option<Question>
where
    R: Rng + ?Sized,
{
    if store.remaining_count() <= 1 {
        return None;
    }

    let pools = [
        (Field::Company, store.unique_companies()),
        (Field::Role, store.unique_roles()),
    ];

    let mut candidates: Vec<(Field, &String)> = Vec::with_capacity(pools.len());
    for (field, pool) in &pools {
        if let Some(keyword) = pool.choose(rng) {
            candidates.push((*field, keyword));
        }
    }

    let &(field, keyword) = candidates.choose(rng)?;
    debug!(%field, keyword = keyword.as_str(), "Chose next question");
    Some(Question::new(field, keyword.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileRecord;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn two_people() -> ProfileStore {
        ProfileStore::new(vec![
            ProfileRecord::named("A").with_experience("Acme", "Engineer"),
            ProfileRecord::named("B").with_experience("Globex", "Manager"),
        ])
        .unwrap()
    }

    #[test]
    fn test_question_text() {
        assert_eq!(
            Question::new(Field::Company, "Acme").text,
            "Has this person worked at Acme?"
        );
        assert_eq!(
            Question::new(Field::Role, "Engineer").text,
            "Has this person worked as a Engineer?"
        );
        assert_eq!(
            Question::new(Field::Major, "Physics").text,
            "Did this person study Physics?"
        );
    }

    #[test]
    fn test_keyword_with_delimiter_words_is_kept_intact() {
        let question = Question::new(Field::Company, "Worked at Home? Inc");
        assert_eq!(question.keyword, "Worked at Home? Inc");
        assert_eq!(question.field, Field::Company);
    }

    #[test]
    fn test_no_question_for_single_profile() {
        let store = ProfileStore::new(vec![
            ProfileRecord::named("Solo").with_experience("Acme", "Engineer"),
        ])
        .unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(choose_next_question(&store, &mut rng), None);
    }

    #[test]
    fn test_no_question_for_empty_remaining_set() {
        let mut store = two_people();
        store.apply_filter(true, Field::Company, "Initech");
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(choose_next_question(&store, &mut rng), None);
    }

    #[test]
    fn test_no_question_without_work_history() {
        let store =
            ProfileStore::new(vec![ProfileRecord::named("A"), ProfileRecord::named("B")]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(choose_next_question(&store, &mut rng), None);
    }

    #[test]
    fn test_question_keyword_comes_from_remaining_pools() {
        let store = two_people();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let question = choose_next_question(&store, &mut rng).unwrap();
            let pool = match question.field {
                Field::Company => store.unique_companies(),
                Field::Role => store.unique_roles(),
                other => panic!("unexpected field {other}"),
            };
            assert!(pool.contains(&question.keyword));
        }
    }

    #[test]
    fn test_both_fields_get_asked() {
        let store = two_people();
        let mut rng = StdRng::seed_from_u64(3);
        let fields: Vec<Field> = (0..64)
            .filter_map(|_| choose_next_question(&store, &mut rng))
            .map(|q| q.field)
            .collect();
        assert!(fields.contains(&Field::Company));
        assert!(fields.contains(&Field::Role));
    }

    #[test]
    fn test_only_company_pool_available() {
        let mut a = ProfileRecord::named("A").with_experience("Acme", "");
        a.experiences[0].role = None;
        let b = ProfileRecord::named("B").with_experience("Globex", "   ");
        let store = ProfileStore::new(vec![a, b]).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..10 {
            assert_eq!(
                choose_next_question(&store, &mut rng).unwrap().field,
                Field::Company
            );
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let store = two_people();
        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..10)
                .map(|_| choose_next_question(&store, &mut rng).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(draw(42), draw(42));
    }
}
