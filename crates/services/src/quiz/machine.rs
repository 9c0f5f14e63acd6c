use std::sync::Arc;
use std::time::Duration;

use quiz_core::model::{
    Advance, AnswerOutcome, QuizSession, RankingEntry, RankingLedger, Screen, WrongAnswerNotebook,
};
use quiz_core::{Clock, QuestionBank, QuestionSource};
use storage::repository::SlotStore;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;

use super::persist;
use super::snapshot::QuizSnapshot;
use crate::config::DEFAULT_ADVANCE_DELAY;
use crate::sound::{SilentPlayer, SoundCue, SoundPlayer};

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

struct MachineState {
    screen: Screen,
    session: QuizSession,
    notebook: WrongAnswerNotebook,
    ledger: RankingLedger,
    /// Bumped on every start and navigation; a timer only fires for its own generation.
    generation: u64,
    pending_advance: Option<JoinHandle<()>>,
}

impl MachineState {
    fn invalidate_pending(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if let Some(handle) = self.pending_advance.take() {
            handle.abort();
        }
    }

    fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot::capture(&self.screen, &self.session, &self.notebook, &self.ledger)
    }
}

struct Inner {
    clock: Clock,
    advance_delay: Duration,
    bank: Arc<dyn QuestionSource>,
    store: Arc<dyn SlotStore>,
    sounds: Arc<dyn SoundPlayer>,
    state: Mutex<MachineState>,
    updates: watch::Sender<QuizSnapshot>,
}

//
// ─── BUILDER ───────────────────────────────────────────────────────────────────
//

/// Collects collaborators for a `QuizMachine`.
///
/// Defaults: the compiled-in `QuestionBank`, a `SilentPlayer`, and a 1500 ms
/// auto-advance delay.
pub struct QuizMachineBuilder {
    clock: Clock,
    store: Arc<dyn SlotStore>,
    bank: Arc<dyn QuestionSource>,
    sounds: Arc<dyn SoundPlayer>,
    advance_delay: Duration,
}

impl QuizMachineBuilder {
    #[must_use]
    pub fn with_bank(mut self, bank: Arc<dyn QuestionSource>) -> Self {
        self.bank = bank;
        self
    }

    #[must_use]
    pub fn with_sounds(mut self, sounds: Arc<dyn SoundPlayer>) -> Self {
        self.sounds = sounds;
        self
    }

    #[must_use]
    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.advance_delay = delay;
        self
    }

    /// Restore the notebook and ledger from storage and build the machine.
    ///
    /// Never fails: unreadable or corrupt slots start empty.
    pub async fn load(self) -> QuizMachine {
        let notebook = persist::load_notebook(self.store.as_ref()).await;
        let ledger = persist::load_ledger(self.store.as_ref()).await;
        tracing::info!(
            wrong_answers = notebook.len(),
            rankings = ledger.len(),
            "quiz state restored"
        );

        let state = MachineState {
            screen: Screen::Main,
            session: QuizSession::default(),
            notebook,
            ledger,
            generation: 0,
            pending_advance: None,
        };
        let (updates, _) = watch::channel(state.snapshot());

        QuizMachine {
            inner: Arc::new(Inner {
                clock: self.clock,
                advance_delay: self.advance_delay,
                bank: self.bank,
                store: self.store,
                sounds: self.sounds,
                state: Mutex::new(state),
                updates,
            }),
        }
    }
}

//
// ─── MACHINE ───────────────────────────────────────────────────────────────────
//

/// Drives screens, the running session, the notebook and the ledger.
///
/// Cheap to clone; clones share state. All operations swallow persistence and
/// audio failures (they are logged) so nothing propagates to the UI.
#[derive(Clone)]
pub struct QuizMachine {
    inner: Arc<Inner>,
}

impl QuizMachine {
    #[must_use]
    pub fn builder(clock: Clock, store: Arc<dyn SlotStore>) -> QuizMachineBuilder {
        QuizMachineBuilder {
            clock,
            store,
            bank: Arc::new(QuestionBank::new()),
            sounds: Arc::new(SilentPlayer),
            advance_delay: DEFAULT_ADVANCE_DELAY,
        }
    }

    /// Latest published state.
    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        self.inner.updates.borrow().clone()
    }

    /// Receiver notified after every mutation.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<QuizSnapshot> {
        self.inner.updates.subscribe()
    }

    /// Category names for the main screen.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        self.inner.bank.categories()
    }

    /// Begin a fresh session for `category`.
    ///
    /// Unknown categories produce an empty session on which answers are no-ops.
    /// The notebook is left untouched.
    pub async fn start_quiz(&self, category: &str) {
        let questions = self.inner.bank.questions(category);
        if questions.is_empty() {
            tracing::warn!(category, "no questions for category");
        }

        let mut state = self.inner.state.lock().await;
        state.invalidate_pending();
        tracing::info!(category, questions = questions.len(), "quiz started");
        state.session = QuizSession::start(category, questions);
        state.screen = Screen::Quiz(category.to_owned());
        self.publish(&state);
    }

    /// Submit an answer for the current question and schedule the auto-advance.
    pub async fn answer(&self, selected: usize) -> AnswerOutcome {
        let mut state = self.inner.state.lock().await;
        if !state.screen.is_quiz() {
            return AnswerOutcome::Ignored;
        }

        let outcome = state.session.answer(selected);
        match &outcome {
            AnswerOutcome::Ignored => return AnswerOutcome::Ignored,
            AnswerOutcome::Correct => self.play(SoundCue::Correct),
            AnswerOutcome::Wrong { question } => {
                if state.notebook.record_if_absent(question.clone()) {
                    persist::save_notebook(self.inner.store.as_ref(), &state.notebook).await;
                }
                self.play(SoundCue::Wrong);
            }
        }
        tracing::debug!(
            index = state.session.current_index(),
            selected,
            correct = matches!(outcome, AnswerOutcome::Correct),
            "answer recorded"
        );

        self.schedule_advance(&mut state);
        self.publish(&state);
        outcome
    }

    pub async fn go_to_main(&self) {
        self.navigate(Screen::Main).await;
    }

    pub async fn go_to_wrong_notes(&self) {
        self.navigate(Screen::WrongNotes).await;
    }

    pub async fn go_to_ranking(&self) {
        self.navigate(Screen::Ranking).await;
    }

    /// Empty the notebook and persist the empty list.
    pub async fn clear_wrong_answers(&self) {
        let mut state = self.inner.state.lock().await;
        state.notebook.clear();
        persist::save_notebook(self.inner.store.as_ref(), &state.notebook).await;
        self.publish(&state);
    }

    /// Empty the ledger and persist the empty list.
    pub async fn clear_rankings(&self) {
        let mut state = self.inner.state.lock().await;
        state.ledger.clear();
        persist::save_ledger(self.inner.store.as_ref(), &state.ledger).await;
        self.publish(&state);
    }

    async fn navigate(&self, screen: Screen) {
        let mut state = self.inner.state.lock().await;
        state.invalidate_pending();
        state.screen = screen;
        self.publish(&state);
    }

    fn schedule_advance(&self, state: &mut MachineState) {
        if let Some(previous) = state.pending_advance.take() {
            previous.abort();
        }

        let generation = state.generation;
        let delay = self.inner.advance_delay;
        let machine = self.clone();
        state.pending_advance = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            machine.advance(generation).await;
        }));
    }

    async fn advance(&self, generation: u64) {
        let mut state = self.inner.state.lock().await;
        if state.generation != generation {
            tracing::debug!(generation, current = state.generation, "stale auto-advance dropped");
            return;
        }
        // This task owns the handle; dropping it only detaches.
        state.pending_advance = None;

        match state.session.advance() {
            Some(Advance::NextQuestion { index }) => {
                tracing::debug!(index, "next question");
            }
            Some(Advance::Finished { score }) => {
                let entry = RankingEntry::recorded_at(score, &self.inner.clock.now_local());
                state.ledger.add(entry);
                persist::save_ledger(self.inner.store.as_ref(), &state.ledger).await;
                state.screen = Screen::Result;
                tracing::info!(
                    category = state.session.category(),
                    score,
                    total = state.session.questions().len(),
                    "quiz finished"
                );
            }
            None => return,
        }
        self.publish(&state);
    }

    fn play(&self, cue: SoundCue) {
        if let Err(err) = self.inner.sounds.play(cue) {
            tracing::debug!(?cue, error = %err, "sound cue failed");
        }
    }

    fn publish(&self, state: &MachineState) {
        self.inner.updates.send_replace(state.snapshot());
    }
}
