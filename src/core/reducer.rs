//! The session state machine
//!
//! `transition` is a pure function of `(session, action)`. Any action whose
//! precondition does not hold returns the session unchanged; that is normal
//! flow control, not an error.
//!
//! History is appended in exactly one place: the `Guess` that finds the
//! answer. `Success` only moves the status to `Complete`, so dispatching it
//! again (or guessing after completion) can never add a second entry.

use super::{Action, Letter, Session, SessionData, Status, Theme};

/// Apply `action` to `session`, returning the next session
#[must_use]
pub fn transition(session: Session, action: Action) -> Session {
    match action {
        Action::Init => init(session),
        Action::Ready(data) => ready(session, data),
        Action::Guess(value) => guess(session, value),
        Action::Success => success(session),
        Action::Theme(theme) => with_theme(session, theme),
    }
}

fn init(session: Session) -> Session {
    if session.status != Status::Idle {
        return session;
    }
    Session {
        status: Status::Loading,
        ..session
    }
}

fn ready(session: Session, data: SessionData) -> Session {
    if session.status != Status::Loading {
        return session;
    }
    Session {
        status: Status::Loaded,
        answer: data.answer,
        expires_at: data.expires_at,
        attempts: data.attempts,
        options: data.options,
        history: data.history,
        theme: data.theme.unwrap_or(session.theme),
    }
}

fn guess(mut session: Session, value: char) -> Session {
    if session.status != Status::Loaded {
        return session;
    }
    let Ok(letter) = Letter::new(value) else {
        return session;
    };
    if session.has_guessed(letter) {
        return session;
    }

    session.options.push(letter);
    session.attempts += 1;
    if letter == session.answer {
        session.history.push(session.attempts);
    }
    session
}

fn success(session: Session) -> Session {
    if !session.awaiting_success() {
        return session;
    }
    Session {
        status: Status::Complete,
        ..session
    }
}

fn with_theme(session: Session, theme: Theme) -> Session {
    Session { theme, ..session }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use proptest::prelude::*;

    fn letter(c: char) -> Letter {
        Letter::new(c).unwrap()
    }

    fn data(answer: char, history: Vec<u32>) -> SessionData {
        SessionData {
            answer: letter(answer),
            expires_at: DateTime::parse_from_rfc3339("2024-05-01T23:59:59.999Z").unwrap(),
            attempts: 0,
            options: Vec::new(),
            history,
            theme: None,
        }
    }

    fn idle(answer: char) -> Session {
        let d = data(answer, Vec::new());
        Session::new(d.answer, d.expires_at)
    }

    fn loaded(answer: char, history: Vec<u32>) -> Session {
        let session = transition(idle(answer), Action::Init);
        transition(session, Action::Ready(data(answer, history)))
    }

    fn play(mut session: Session, guesses: &str) -> Session {
        for c in guesses.chars() {
            session = transition(session, Action::Guess(c));
        }
        session
    }

    #[test]
    fn init_only_fires_while_idle() {
        let session = transition(idle('a'), Action::Init);
        assert_eq!(session.status, Status::Loading);

        let again = transition(session.clone(), Action::Init);
        assert_eq!(again, session);

        let loaded = loaded('a', vec![]);
        assert_eq!(transition(loaded.clone(), Action::Init), loaded);
    }

    #[test]
    fn ready_merges_data_and_loads() {
        let mut payload = data('q', vec![3, 5]);
        payload.options = vec![letter('a')];
        payload.attempts = 1;
        payload.theme = Some(Theme::Dark);

        let session = transition(transition(idle('b'), Action::Init), Action::Ready(payload));
        assert_eq!(session.status, Status::Loaded);
        assert_eq!(session.answer, letter('q'));
        assert_eq!(session.history, vec![3, 5]);
        assert_eq!(session.options, vec![letter('a')]);
        assert_eq!(session.attempts, 1);
        assert_eq!(session.theme, Theme::Dark);
    }

    #[test]
    fn ready_without_theme_keeps_current_theme() {
        let session = transition(idle('b'), Action::Theme(Theme::Dark));
        let session = transition(session, Action::Init);
        let session = transition(session, Action::Ready(data('c', vec![])));
        assert_eq!(session.theme, Theme::Dark);
    }

    #[test]
    fn ready_ignored_unless_loading() {
        let session = idle('b');
        assert_eq!(
            transition(session.clone(), Action::Ready(data('c', vec![9]))),
            session
        );

        let session = loaded('b', vec![1]);
        assert_eq!(
            transition(session.clone(), Action::Ready(data('c', vec![9]))),
            session
        );
    }

    #[test]
    fn guess_appends_and_counts() {
        let session = play(loaded('z', vec![]), "abc");
        assert_eq!(session.options, vec![letter('a'), letter('b'), letter('c')]);
        assert_eq!(session.attempts, 3);
        assert!(session.history.is_empty());
    }

    #[test]
    fn uppercase_guess_is_outside_alphabet() {
        let session = loaded('z', vec![]);
        for value in ['A', 'Z'] {
            assert_eq!(transition(session.clone(), Action::Guess(value)), session);
        }
    }

    #[test]
    fn invalid_duplicate_or_early_guesses_are_ignored() {
        let session = play(loaded('z', vec![]), "a");

        for value in ['a', 'A', '1', ' ', 'ß'] {
            assert_eq!(transition(session.clone(), Action::Guess(value)), session);
        }

        let not_loaded = idle('z');
        assert_eq!(transition(not_loaded.clone(), Action::Guess('a')), not_loaded);
        let loading = transition(idle('z'), Action::Init);
        assert_eq!(transition(loading.clone(), Action::Guess('a')), loading);
    }

    #[test]
    fn winning_guess_on_fourth_attempt_records_four() {
        let session = play(loaded('d', vec![]), "abcd");
        assert_eq!(session.history, vec![4]);
        assert_eq!(session.status, Status::Loaded);

        let session = transition(session, Action::Success);
        assert_eq!(session.status, Status::Complete);
        assert_eq!(session.history, vec![4]);
    }

    #[test]
    fn history_appends_once_per_window() {
        let session = transition(play(loaded('b', vec![7]), "ab"), Action::Success);
        let after = transition(session.clone(), Action::Success);
        let after = play(after, "bcdef");
        assert_eq!(after, session);
        assert_eq!(after.history, vec![7, 2]);
    }

    #[test]
    fn success_requires_winning_last_guess() {
        let session = play(loaded('m', vec![]), "ab");
        assert_eq!(transition(session.clone(), Action::Success), session);

        let idle = idle('m');
        assert_eq!(transition(idle.clone(), Action::Success), idle);
    }

    #[test]
    fn theme_applies_in_any_status() {
        let complete = transition(play(loaded('a', vec![]), "a"), Action::Success);
        for session in [idle('a'), loaded('a', vec![]), complete] {
            let status = session.status;
            let themed = transition(session, Action::Theme(Theme::Dark));
            assert_eq!(themed.theme, Theme::Dark);
            assert_eq!(themed.status, status);
        }
    }

    proptest! {
        #[test]
        fn attempts_track_options_under_any_input(
            answer in 0usize..26,
            inputs in proptest::collection::vec(any::<char>(), 0..60),
        ) {
            let answer = crate::alphabet::LETTERS[answer];
            let mut session = loaded(answer, vec![]);
            let mut wins = 0;

            for value in inputs {
                let before = session.clone();
                session = transition(session, Action::Guess(value));
                prop_assert_eq!(session.attempts as usize, session.options.len());
                prop_assert!(session.is_consistent());
                if session.history.len() > before.history.len() {
                    wins += 1;
                }
                if session.awaiting_success() {
                    session = transition(session, Action::Success);
                }
            }

            prop_assert!(wins <= 1);
            prop_assert_eq!(session.history.len(), wins);
        }
    }
}
