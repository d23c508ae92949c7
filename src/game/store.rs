//! The game store: owns the session and drives it through the reducer
//!
//! All changes go through [`GameStore::dispatch`]. Each dispatch runs the
//! reducer, writes the session through to storage, notifies observers, and
//! then reacts to the new state exactly once:
//! - `idle -> loading` triggers reconciliation followed by `ready`
//! - a `loaded` session whose latest guess is the answer triggers `success`

use super::GameError;
use super::reconcile::{ReconcileOutcome, reconcile};
use crate::clock::{Clock, countdown};
use crate::config::GameConfig;
use crate::core::{Action, Feedback, Letter, Session, Status, Theme, transition};
use crate::stats::{ShareConfig, Statistics, share_text};
use crate::storage::Storage;
use rand::Rng;

/// Callback invoked after every state change
pub type Observer = Box<dyn FnMut(&Session, &Action)>;

/// Owner of the single game session
pub struct GameStore<S, C, R> {
    session: Session,
    storage: S,
    clock: C,
    rng: R,
    config: GameConfig,
    observers: Vec<Observer>,
    outcome: Option<ReconcileOutcome>,
}

impl<S: Storage, C: Clock, R: Rng> GameStore<S, C, R> {
    /// Create an idle store; nothing is read from storage until [`start`](Self::start)
    pub fn new(storage: S, clock: C, mut rng: R, config: GameConfig) -> Self {
        let session = Session::generate(&mut rng, clock.now());
        Self {
            session,
            storage,
            clock,
            rng,
            config,
            observers: Vec::new(),
            outcome: None,
        }
    }

    /// Load the game: dispatch `init` if still idle and report how the stored record was used
    ///
    /// Calling this again after the first load does not reconcile a second time.
    ///
    /// # Errors
    /// Returns an error if storage cannot be read or written.
    pub fn start(&mut self) -> Result<ReconcileOutcome, GameError> {
        if self.session.status == Status::Idle {
            self.dispatch(Action::Init)?;
        }
        self.outcome.ok_or(GameError::NotStarted)
    }

    /// Apply one action and everything it triggers
    ///
    /// The in-memory session always advances, even when the write-through
    /// fails; the write error is returned after the follow-up effects have run.
    ///
    /// # Errors
    /// Returns an error if the session cannot be persisted or reconciled.
    pub fn dispatch(&mut self, action: Action) -> Result<(), GameError> {
        let previous = self.session.status;
        self.session = transition(self.session.clone(), action.clone());
        log::debug!(
            "{action}: {previous:?} -> {:?} ({} attempts)",
            self.session.status,
            self.session.attempts
        );

        // A failed write must not stall the lifecycle: react first, then report it
        let saved = self.persist();
        for observer in &mut self.observers {
            observer(&self.session, &action);
        }
        let reacted = self.react(previous);
        saved?;
        reacted
    }

    /// Guess a value (no effect if it is invalid, repeated, or the window is over)
    ///
    /// # Errors
    /// Returns an error if the session cannot be persisted.
    pub fn guess(&mut self, value: char) -> Result<(), GameError> {
        self.dispatch(Action::Guess(value))
    }

    /// # Errors
    /// Returns an error if the session cannot be persisted.
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), GameError> {
        self.dispatch(Action::Theme(theme))
    }

    /// # Errors
    /// Returns an error if the session cannot be persisted.
    pub fn toggle_theme(&mut self) -> Result<(), GameError> {
        self.set_theme(self.session.theme.toggled())
    }

    /// Register an observer called after every state change
    pub fn subscribe(&mut self, observer: impl FnMut(&Session, &Action) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn persist(&mut self) -> Result<(), GameError> {
        if self.session.status < Status::Loaded {
            return Ok(());
        }
        let record = self
            .session
            .encode()
            .map_err(crate::storage::StorageError::from)?;
        self.storage.set(&self.config.storage_key, &record)?;
        Ok(())
    }

    fn react(&mut self, previous: Status) -> Result<(), GameError> {
        if previous == Status::Idle && self.session.status == Status::Loading {
            let reconciled = reconcile(
                &mut self.storage,
                &self.clock,
                &mut self.rng,
                &self.config,
            )?;
            log::info!("session {}", reconciled.outcome);
            self.outcome = Some(reconciled.outcome);
            return self.dispatch(Action::Ready(reconciled.data));
        }

        if self.session.awaiting_success() {
            return self.dispatch(Action::Success);
        }
        Ok(())
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// How the stored record was used on load, once started
    #[must_use]
    pub const fn outcome(&self) -> Option<ReconcileOutcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_first_run(&self) -> bool {
        self.outcome == Some(ReconcileOutcome::FirstRun)
    }

    #[must_use]
    pub fn statistics(&self) -> Statistics {
        Statistics::from_history(&self.session.history, self.session.attempts)
    }

    #[must_use]
    pub fn feedback(&self, letter: Letter) -> Feedback {
        Feedback::classify(
            letter,
            self.session.answer,
            &self.session.options,
            self.config.range_threshold,
        )
    }

    /// Feedback for a letter as shown on the board
    ///
    /// The answer stays hidden (shown as unguessed) until the window is complete.
    #[must_use]
    pub fn board_feedback(&self, letter: Letter) -> Feedback {
        match self.feedback(letter) {
            Feedback::Correct if !self.session.is_complete() => Feedback::Unguessed,
            feedback => feedback,
        }
    }

    /// Board feedback for every letter, in keyboard order
    #[must_use]
    pub fn board(&self) -> Vec<(Letter, Feedback)> {
        Letter::keyboard()
            .map(|letter| (letter, self.board_feedback(letter)))
            .collect()
    }

    #[must_use]
    pub fn share_text(&self) -> String {
        share_text(
            &self.session.options,
            self.session.answer,
            &self.session.history,
            self.session.attempts,
            self.session.theme,
            &ShareConfig::from(&self.config),
        )
    }

    /// Time until the next window, `None` once the current one has expired
    #[must_use]
    pub fn countdown(&self) -> Option<String> {
        countdown(self.session.expires_at, self.clock.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::storage::{MemoryStorage, StorageError};
    use chrono::{DateTime, FixedOffset};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::RefCell;
    use std::rc::Rc;

    type TestStore = GameStore<MemoryStorage, FixedClock, StdRng>;

    fn at(rfc3339: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).unwrap()
    }

    fn store_with(storage: MemoryStorage, now: &str) -> TestStore {
        GameStore::new(
            storage,
            FixedClock(at(now)),
            StdRng::seed_from_u64(11),
            GameConfig::default(),
        )
    }

    fn started(storage: MemoryStorage) -> TestStore {
        let mut store = store_with(storage, "2024-05-01T12:00:00Z");
        store.start().unwrap();
        store
    }

    /// Letters other than the answer, in alphabetical order
    fn misses(store: &TestStore) -> Vec<char> {
        Letter::all()
            .filter(|&l| l != store.session().answer)
            .map(Letter::as_char)
            .collect()
    }

    #[test]
    fn new_store_is_idle_and_untouched() {
        let store = store_with(MemoryStorage::new(), "2024-05-01T12:00:00Z");
        assert_eq!(store.session().status, Status::Idle);
        assert_eq!(store.outcome(), None);
        assert_eq!(store.storage().writes(), 0);
    }

    #[test]
    fn start_loads_fresh_session() {
        let store = started(MemoryStorage::new());
        let session = store.session();

        assert_eq!(session.status, Status::Loaded);
        assert_eq!(session.attempts, 0);
        assert!(session.history.is_empty());
        assert!(store.is_first_run());
    }

    #[test]
    fn start_twice_does_not_reconcile_again() {
        let mut store = started(MemoryStorage::new());
        store.guess(misses(&store)[0]).unwrap();
        let before = store.session().clone();

        assert_eq!(store.start().unwrap(), ReconcileOutcome::FirstRun);
        assert_eq!(store.session(), &before);
    }

    #[test]
    fn external_init_after_load_is_noop() {
        let mut store = started(MemoryStorage::new());
        let before = store.session().clone();
        store.dispatch(Action::Init).unwrap();
        assert_eq!(store.session(), &before);
    }

    #[test]
    fn every_change_is_written_through() {
        let mut store = started(MemoryStorage::new());
        let miss = misses(&store)[0];
        store.guess(miss).unwrap();

        let record = store.storage().get("localData").unwrap().unwrap();
        assert_eq!(Session::decode(&record).unwrap(), *store.session());
    }

    #[test]
    fn winning_guess_completes_window_once() {
        let mut store = started(MemoryStorage::new());
        let answer = store.session().answer.as_char();
        for &miss in &misses(&store)[..3] {
            store.guess(miss).unwrap();
        }
        store.guess(answer).unwrap();

        assert_eq!(store.session().status, Status::Complete);
        assert_eq!(store.session().history, vec![4]);

        store.dispatch(Action::Success).unwrap();
        store.guess(misses(&store)[10]).unwrap();
        assert_eq!(store.session().history, vec![4]);
        assert_eq!(store.session().attempts, 4);
    }

    #[test]
    fn observers_see_every_dispatch_in_order() {
        let seen: Rc<RefCell<Vec<String>>> = Rc::default();
        let mut store = store_with(MemoryStorage::new(), "2024-05-01T12:00:00Z");
        let log = Rc::clone(&seen);
        store.subscribe(move |session, action| {
            log.borrow_mut()
                .push(format!("{}:{:?}", action.kind(), session.status));
        });

        store.start().unwrap();
        let answer = store.session().answer.as_char();
        store.guess(answer).unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![
                "init:Loading",
                "ready:Loaded",
                "guess:Loaded",
                "success:Complete"
            ]
        );
    }

    #[test]
    fn reload_resumes_mid_window() {
        let mut store = started(MemoryStorage::new());
        let answer = store.session().answer;
        let miss = misses(&store)[0];
        store.guess(miss).unwrap();
        store.toggle_theme().unwrap();
        let before = store.session().clone();

        let reloaded = started(store.storage().clone());
        assert_eq!(reloaded.outcome(), Some(ReconcileOutcome::Resumed));
        assert_eq!(reloaded.session(), &before);
        assert_eq!(reloaded.session().answer, answer);
    }

    #[test]
    fn reload_of_completed_window_stays_complete_without_new_history() {
        let mut store = started(MemoryStorage::new());
        let answer = store.session().answer.as_char();
        store.guess(answer).unwrap();

        let reloaded = started(store.storage().clone());
        assert_eq!(reloaded.session().status, Status::Complete);
        assert_eq!(reloaded.session().history, vec![1]);
    }

    #[test]
    fn board_hides_answer_until_complete() {
        let mut store = started(MemoryStorage::new());
        let answer = store.session().answer;
        assert_eq!(store.board_feedback(answer), Feedback::Unguessed);
        assert_eq!(store.feedback(answer), Feedback::Correct);

        store.guess(answer.as_char()).unwrap();
        assert_eq!(store.board_feedback(answer), Feedback::Correct);

        let board = store.board();
        assert_eq!(board.len(), 26);
        assert_eq!(board[0].0.as_char(), 'q');
        assert_eq!(
            board.iter().filter(|(_, f)| *f == Feedback::Correct).count(),
            1
        );
    }

    /// Memory storage whose next write can be made to fail
    #[derive(Default)]
    struct FailingStorage {
        inner: MemoryStorage,
        fail_next_write: bool,
    }

    impl Storage for FailingStorage {
        fn name(&self) -> &str {
            "failing"
        }

        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            if std::mem::take(&mut self.fail_next_write) {
                return Err(StorageError::Write {
                    path: key.into(),
                    source: std::io::Error::other("disk full"),
                });
            }
            self.inner.set(key, value)
        }
    }

    #[test]
    fn failed_write_of_winning_guess_still_completes_window() {
        let mut store = GameStore::new(
            FailingStorage::default(),
            FixedClock(at("2024-05-01T12:00:00Z")),
            StdRng::seed_from_u64(11),
            GameConfig::default(),
        );
        store.start().unwrap();
        let answer = store.session().answer;
        let miss = Letter::all().find(|&l| l != answer).unwrap();

        store.storage.fail_next_write = true;
        let err = store.guess(answer.as_char()).unwrap_err();
        assert!(matches!(err, GameError::Storage(StorageError::Write { .. })));

        assert_eq!(store.session().status, Status::Complete);
        assert_eq!(store.session().history, vec![1]);

        store.guess(miss.as_char()).unwrap();
        assert_eq!(store.session().attempts, 1);
        assert_eq!(store.session().options, vec![answer]);

        let record = store.storage().get("localData").unwrap().unwrap();
        assert_eq!(Session::decode(&record).unwrap().status, Status::Complete);
    }

    #[test]
    fn failed_write_still_notifies_observers() {
        let seen: Rc<RefCell<usize>> = Rc::default();
        let mut store = GameStore::new(
            FailingStorage::default(),
            FixedClock(at("2024-05-01T12:00:00Z")),
            StdRng::seed_from_u64(11),
            GameConfig::default(),
        );
        store.start().unwrap();
        let count = Rc::clone(&seen);
        store.subscribe(move |_, _| *count.borrow_mut() += 1);

        store.storage.fail_next_write = true;
        assert!(store.set_theme(Theme::Dark).is_err());
        assert_eq!(*seen.borrow(), 1);
        assert_eq!(store.session().theme, Theme::Dark);
    }

    #[test]
    fn countdown_runs_until_end_of_day() {
        let store = started(MemoryStorage::new());
        assert_eq!(store.countdown().as_deref(), Some("11:59:59"));
    }

    #[test]
    fn share_text_reflects_session() {
        let mut store = started(MemoryStorage::new());
        let answer = store.session().answer.as_char();
        store.guess(answer).unwrap();
        assert!(store.share_text().starts_with("Find Phunk  #1  1/26\n"));
        assert_eq!(store.statistics().best, Some(1));
    }
}
