use rand::SeedableRng;
use rand::rngs::SmallRng;

use hskdr::engine::range::LevelRange;
use hskdr::engine::store::{EntryStore, RawEntry};
use hskdr::engine::weights::{Feedback, STARTING_WEIGHT};
use hskdr::session::drill::DrillSession;
use hskdr::session::timeline::MAX_HISTORY;

fn make_rows(per_level: &[(u8, usize)]) -> Vec<RawEntry> {
    per_level
        .iter()
        .flat_map(|&(level, n)| {
            (0..n).map(move |_| RawEntry {
                hanzi: "字".to_string(),
                level,
                pinyin: "zì".to_string(),
                meanings: vec!["character".to_string()],
            })
        })
        .collect()
}

fn make_session(per_level: &[(u8, usize)], min: u8, max: u8, seed: u64) -> DrillSession {
    let store = EntryStore::from_rows(make_rows(per_level)).unwrap();
    DrillSession::new(
        store,
        LevelRange::new(min, max).unwrap(),
        SmallRng::seed_from_u64(seed),
    )
    .unwrap()
}

#[test]
fn timeline_never_exceeds_capacity() {
    let mut session = make_session(&[(1, 200)], 1, 1, 42);
    for _ in 0..(MAX_HISTORY + 50) {
        session.step_forward().unwrap();
    }
    assert_eq!(session.timeline().len(), MAX_HISTORY);
    assert_eq!(session.timeline().cursor(), MAX_HISTORY - 1);
}

#[test]
fn oldest_entries_become_unreachable_after_eviction() {
    let mut session = make_session(&[(1, 200)], 1, 1, 42);

    // Walk far enough past capacity that the earliest draws must be evicted.
    for _ in 0..(MAX_HISTORY + 20) {
        session.step_forward().unwrap();
    }

    // Stepping back all the way to index 0 visits exactly MAX_HISTORY
    // positions; everything older fell off the head.
    let mut steps = 0;
    while !session.timeline().at_oldest() {
        session.step_backward().unwrap();
        steps += 1;
    }
    assert_eq!(steps, MAX_HISTORY - 1);
    assert_eq!(session.timeline().len(), MAX_HISTORY);
}

#[test]
fn feedback_targets_visible_entry_after_eviction() {
    let mut session = make_session(&[(1, 300)], 1, 1, 7);

    // Force eviction to have happened at least once.
    for _ in 0..(MAX_HISTORY + 10) {
        session.step_forward().unwrap();
    }

    let visible = session.current().unwrap().id;
    session.set_feedback(Feedback::Increase);
    session.step_forward().unwrap();

    // The bump landed on the entry that was on screen, and nowhere else.
    assert_eq!(session.weights().get(visible), STARTING_WEIGHT * 2);
    let bumped: Vec<usize> = (0..session.store().len())
        .filter(|&id| session.weights().get(id) != STARTING_WEIGHT)
        .collect();
    assert_eq!(bumped, vec![visible]);
}

#[test]
fn back_and_forward_walk_revisits_the_same_entries() {
    let mut session = make_session(&[(1, 100)], 1, 1, 42);
    for _ in 0..10 {
        session.step_forward().unwrap();
    }

    let mut seen_backward = Vec::new();
    for _ in 0..5 {
        session.step_backward().unwrap();
        seen_backward.push(session.current().unwrap().id);
    }
    let mut seen_forward = Vec::new();
    for _ in 0..5 {
        seen_forward.push(session.current().unwrap().id);
        session.step_forward().unwrap();
    }

    seen_backward.reverse();
    assert_eq!(seen_backward, seen_forward);
}

#[test]
fn draws_follow_live_range_changes() {
    let mut session = make_session(&[(1, 30), (2, 30), (3, 30), (4, 30)], 1, 1, 42);

    session.set_max_level(2).unwrap();
    for _ in 0..40 {
        session.step_forward().unwrap();
        assert!(session.current().unwrap().level <= 2);
    }

    session.set_min_level(3).unwrap_err();
    // The rejected change left (1, 2) active.
    assert_eq!(session.range().min(), 1);
    assert_eq!(session.range().max(), 2);

    session.set_max_level(4).unwrap();
    session.set_min_level(3).unwrap();
    for _ in 0..40 {
        session.step_forward().unwrap();
        let level = session.current().unwrap().level;
        assert!((3..=4).contains(&level), "drew level {level}");
    }
}

#[test]
fn marked_entries_are_drawn_more_often() {
    let mut session = make_session(&[(1, 10)], 1, 1, 42);

    // Push one entry to the weight ceiling by repeatedly marking it at the
    // head of the history.
    session.jump_to_first().unwrap();
    let marked = session.current().unwrap().id;
    for _ in 0..6 {
        session.set_feedback(Feedback::Increase);
        session.step_backward().unwrap();
    }
    assert_eq!(session.weights().get(marked), 4096);

    let mut hits = 0;
    for _ in 0..300 {
        session.jump_to_newest().unwrap();
        if session.current().unwrap().id == marked {
            hits += 1;
        }
    }
    // The marked entry holds 4096 of 4672 total mass; well over half the
    // draws should land on it.
    assert!(hits > 150, "marked entry drawn {hits} of 300");
}

#[test]
fn seeded_sessions_replay_identically() {
    let mut a = make_session(&[(1, 50), (2, 50)], 1, 2, 99);
    let mut b = make_session(&[(1, 50), (2, 50)], 1, 2, 99);

    for step in 0..100 {
        if step % 7 == 0 {
            a.set_feedback(Feedback::Increase);
            b.set_feedback(Feedback::Increase);
        }
        a.step_forward().unwrap();
        b.step_forward().unwrap();
        assert_eq!(a.current().unwrap().id, b.current().unwrap().id);
    }
}

#[test]
fn bundled_dataset_supports_a_full_session() {
    let rows = hskdr::dataset::load_default().unwrap();
    let store = EntryStore::from_rows(rows).unwrap();
    let mut session = DrillSession::new(
        store,
        LevelRange::new(1, 6).unwrap(),
        SmallRng::seed_from_u64(1),
    )
    .unwrap();

    for _ in 0..50 {
        session.set_feedback(Feedback::Decrease);
        session.step_forward().unwrap();
        let entry = session.current().unwrap();
        assert!(!entry.characters.is_empty());
        assert_eq!(entry.characters.len(), entry.pinyin.len());
        assert!(!entry.meanings.is_empty());
    }
}
