use word_garden::core::{Feedback, Outcome, Word};
use word_garden::game::{
    AnyWord, GameError, MAX_ATTEMPTS, Session, SessionState, Submission, Validator,
    WordListValidator,
};
use word_garden::stats::{FileStorage, MemoryStorage, STATS_KEY, StatsStore};

use Outcome::{Absent, Correct, Present};

fn word(s: &str) -> Word {
    Word::new(s).unwrap()
}

fn type_word<V: word_garden::game::GuessValidator>(session: &mut Session<V>, guess: &str) {
    for ch in guess.chars() {
        session.input_letter(ch).unwrap();
    }
}

#[test]
fn scenario_a_trace_against_crane() {
    let feedback = Feedback::evaluate(&word("TRACE"), &word("CRANE"));
    assert_eq!(
        feedback.outcomes(),
        &[Absent, Correct, Correct, Present, Correct]
    );
}

#[test]
fn scenario_b_paper_against_apple() {
    let feedback = Feedback::evaluate(&word("PAPER"), &word("APPLE"));
    assert_eq!(
        feedback.outcomes(),
        &[Present, Present, Correct, Present, Absent]
    );
}

#[test]
fn scenario_c_six_misses_record_one_failure() {
    let mut stats = StatsStore::new(MemoryStorage::new());
    let mut session = Session::new(word("CRANE"), AnyWord);

    for guess in ["SHINE", "FLUTE", "SOUND", "BLEND", "GLORY", "PRIDE"] {
        assert_eq!(session.state(), SessionState::Filling);
        type_word(&mut session, guess);
        session.submit(&mut stats).unwrap();
    }

    assert_eq!(session.state(), SessionState::Lost);
    assert_eq!(stats.record().failures(), 1);
    assert_eq!(stats.record().games_won(), 0);

    let saved: serde_json::Value =
        serde_json::from_str(stats.storage().get(STATS_KEY).unwrap()).unwrap();
    assert_eq!(saved["fail"], 1);
}

#[test]
fn scenario_d_win_on_third_attempt_changes_only_key_three() {
    let storage = MemoryStorage::new().with_entry(STATS_KEY, r#"{"1":2,"3":5,"fail":1}"#);
    let (mut stats, _) = StatsStore::open(storage);
    let before = stats.record().clone();

    let mut session = Session::new(word("CRANE"), AnyWord);
    for guess in ["TRACE", "GRAIN", "CRANE"] {
        type_word(&mut session, guess);
        session.submit(&mut stats).unwrap();
    }

    assert_eq!(session.state(), SessionState::Won);
    assert_eq!(stats.record().wins(3), before.wins(3) + 1);
    for attempts in [1, 2, 4, 5, 6] {
        assert_eq!(stats.record().wins(attempts), before.wins(attempts));
    }
    assert_eq!(stats.record().failures(), before.failures());
}

#[test]
fn cursor_stays_in_bounds_under_any_key_sequence() {
    let mut stats = StatsStore::new(MemoryStorage::new());
    let mut session = Session::new(word("BRAVE"), AnyWord);
    let keys = "abcdefg\u{8}\u{8}hij\nklm\u{8}nopqrs\ntuvwx\n1yz\nbrave\nmore";

    for ch in keys.chars() {
        let result = match ch {
            '\n' => session.submit(&mut stats).map(|_| ()),
            '\u{8}' => {
                session.backspace();
                Ok(())
            }
            c => session.input_letter(c),
        };
        if let Err(GameError::PrematureSubmit { letters }) = result {
            assert!(letters < 5);
        }
        assert!(session.col() <= 5);
        assert!(session.row() <= MAX_ATTEMPTS);
    }
}

#[test]
fn dictionary_validator_keeps_row_for_correction() {
    let words = vec![word("CRANE"), word("SHINE")];
    let mut stats = StatsStore::new(MemoryStorage::new());
    let mut session = Session::new(
        word("CRANE"),
        Validator::WordList(WordListValidator::new(&words)),
    );

    type_word(&mut session, "ZZZZZ");
    assert_eq!(
        session.submit(&mut stats),
        Err(GameError::NotInWordList("ZZZZZ".to_string()))
    );
    assert_eq!((session.row(), session.col()), (0, 5));

    for _ in 0..5 {
        session.backspace();
    }
    type_word(&mut session, "shine");
    assert!(matches!(
        session.submit(&mut stats),
        Ok(Submission::Continue { .. })
    ));
}

#[test]
fn statistics_persist_across_sessions_on_disk() {
    let dir = tempfile::tempdir().unwrap();

    {
        let (mut stats, _) = StatsStore::open(FileStorage::with_dir(dir.path()));
        let mut session = Session::new(word("GRACE"), AnyWord);
        type_word(&mut session, "GRACE");
        session.submit(&mut stats).unwrap();

        session.restart(word("SHINE"));
        for _ in 0..MAX_ATTEMPTS {
            type_word(&mut session, "QQQQQ");
            session.submit(&mut stats).unwrap();
        }
    }

    let (stats, persisted) = StatsStore::open(FileStorage::with_dir(dir.path()));
    assert!(persisted.is_ok());
    assert_eq!(stats.record().wins(1), 1);
    assert_eq!(stats.record().failures(), 1);

    let rows = stats.record().histogram();
    assert_eq!(rows[0].width_percent, 50);
    assert_eq!(rows[6].width_percent, 50);
}

#[test]
fn strict_game_with_fixed_solution_outside_list_can_be_won() {
    use word_garden::wordlists::{SOLUTIONS, loader::words_from_slice};

    let solutions = words_from_slice(SOLUTIONS);
    let zebra = word("ZEBRA");
    assert!(!solutions.contains(&zebra));

    let mut stats = StatsStore::new(MemoryStorage::new());
    let mut session = Session::new(zebra, Validator::for_game(true, &solutions, Some(zebra)));
    type_word(&mut session, "zebra");

    assert!(matches!(
        session.submit(&mut stats),
        Ok(Submission::Won { attempts: 1, .. })
    ));
    assert_eq!(stats.record().wins(1), 1);
    assert_eq!(stats.record().failures(), 0);
}
