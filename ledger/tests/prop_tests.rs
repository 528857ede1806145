use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use proptest::prelude::*;

use scrutin_ledger::keys::{vote_key, vote_prefix};
use scrutin_ledger::{ElectionRegistry, LedgerError, TallyEngine, VoteLedger};
use scrutin_nullables::NullStateStore;
use scrutin_types::{Candidate, ElectionId, StudentId};

fn id_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,12}"
}

proptest! {
    /// Distinct (election, student) pairs always map to distinct keys.
    #[test]
    fn vote_keys_are_injective(
        e1 in id_strategy(), s1 in id_strategy(),
        e2 in id_strategy(), s2 in id_strategy(),
    ) {
        let k1 = vote_key(&ElectionId::new(&e1).unwrap(), &StudentId::new(&s1).unwrap());
        let k2 = vote_key(&ElectionId::new(&e2).unwrap(), &StudentId::new(&s2).unwrap());
        prop_assert_eq!(k1 == k2, (e1, s1) == (e2, s2));
    }

    /// A vote key always lies under its own election's scan prefix and
    /// under no other election's.
    #[test]
    fn vote_keys_respect_prefix_boundaries(
        e1 in id_strategy(), e2 in id_strategy(), s in id_strategy(),
    ) {
        let key = vote_key(&ElectionId::new(&e1).unwrap(), &StudentId::new(&s).unwrap());
        prop_assert!(key.starts_with(&vote_prefix(&ElectionId::new(&e1).unwrap())));
        if e1 != e2 {
            prop_assert!(!key.starts_with(&vote_prefix(&ElectionId::new(&e2).unwrap())));
        }
    }

    /// After an arbitrary sequence of casts: each (election, student) pair
    /// keeps its first vote, later casts fail with AlreadyVoted, and the
    /// tally for each election counts exactly the successful casts.
    #[test]
    fn exactly_once_and_tally_consistency(
        casts in prop::collection::vec(
            (0usize..2, 0usize..4, 0usize..3),
            0..40,
        ),
    ) {
        let elections = [
            ElectionId::new("spring").unwrap(),
            ElectionId::new("fall").unwrap(),
        ];
        let students: Vec<StudentId> = (0..4)
            .map(|i| StudentId::new(format!("student{i}")).unwrap())
            .collect();
        let candidates = [
            Candidate::new("Alice"),
            Candidate::new("Bob"),
            Candidate::new("Carol"),
        ];

        let store = Arc::new(NullStateStore::new());
        let registry = ElectionRegistry::new(Arc::clone(&store));
        let ledger = VoteLedger::new(Arc::clone(&store));
        let tally = TallyEngine::new(Arc::clone(&store));
        for election in &elections {
            registry.init_election(election, "test").unwrap();
        }

        // first_votes mirrors what the ledger must keep.
        let mut first_votes: HashMap<(usize, usize), usize> = HashMap::new();
        for &(e, s, c) in &casts {
            let result = ledger.cast_vote(&elections[e], &students[s], &candidates[c]);
            match first_votes.entry((e, s)) {
                std::collections::hash_map::Entry::Vacant(entry) => {
                    prop_assert!(result.is_ok());
                    entry.insert(c);
                }
                std::collections::hash_map::Entry::Occupied(_) => {
                    let is_already_voted = matches!(result, Err(LedgerError::AlreadyVoted { .. }));
                    prop_assert!(is_already_voted);
                }
            }
        }

        for (e, election) in elections.iter().enumerate() {
            let mut expected: BTreeMap<Candidate, u64> = BTreeMap::new();
            for (&(cast_e, _), &c) in &first_votes {
                if cast_e == e {
                    *expected.entry(candidates[c].clone()).or_insert(0) += 1;
                }
            }
            let results = tally.query_results(election).unwrap();
            prop_assert_eq!(&results, &expected);
            prop_assert!(results.values().all(|&count| count >= 1));

            let total: u64 = results.values().sum();
            let successes = first_votes.keys().filter(|&&(cast_e, _)| cast_e == e).count();
            prop_assert_eq!(total, successes as u64);
        }

        // Every first vote is readable and unchanged.
        for (&(e, s), &c) in &first_votes {
            let vote = ledger.get_vote(&elections[e], &students[s]).unwrap();
            prop_assert_eq!(&vote.candidate, &candidates[c]);
        }
    }
}
