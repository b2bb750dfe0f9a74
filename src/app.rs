use crate::config::Config;
use crate::content::catalog::ContentCatalog;
use crate::content::types::{QuizCategory, category_by_key};
use crate::quiz::session::{QuizSession, SubmitError};
use crate::store::json_store::JsonStore;
use crate::store::schema::{AttemptHistoryData, AttemptRecord, ProfileData};
use crate::ui::components::menu::Menu;
use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

/// Completed attempts kept in the history file.
const ATTEMPT_HISTORY_CAP: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Home,
    Bulletin,
    BulletinDetail,
    Lectures,
    LectureDetail,
    Members,
    About,
    QuizSelect,
    Quiz,
    ProfileSetup,
}

/// Which pane of the quiz screen the keyboard cursor lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizFocus {
    Bank,
    Answer,
}

pub struct App {
    pub screen: AppScreen,
    pub menu: Menu<'static>,
    pub theme: &'static Theme,
    pub config: Config,
    pub catalog: ContentCatalog,
    pub store: Option<JsonStore>,
    pub profile: Option<ProfileData>,
    pub attempts: AttemptHistoryData,

    pub quiz: Option<QuizSession>,
    pub quiz_category: Option<&'static QuizCategory>,
    pub quiz_focus: QuizFocus,
    pub bank_selected: usize,
    pub answer_selected: usize,
    pub review_selected: usize,
    pub notice: Option<String>,

    pub category_selected: usize,
    pub bulletin_selected: usize,
    pub lecture_selected: usize,
    pub member_selected: usize,
    pub detail_scroll: u16,

    pub profile_input: LineInput,
    pub pending_category: Option<&'static QuizCategory>,

    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, catalog: ContentCatalog) -> Self {
        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));
        let menu = Menu::new(theme);

        let store = JsonStore::new().ok();
        let (profile, attempts) = match store {
            Some(ref s) => (s.load_profile(), s.load_attempt_history()),
            None => (None, AttemptHistoryData::default()),
        };

        Self {
            screen: AppScreen::Home,
            menu,
            theme,
            config,
            catalog,
            store,
            profile,
            attempts,
            quiz: None,
            quiz_category: None,
            quiz_focus: QuizFocus::Bank,
            bank_selected: 0,
            answer_selected: 0,
            review_selected: 0,
            notice: None,
            category_selected: 0,
            bulletin_selected: 0,
            lecture_selected: 0,
            member_selected: 0,
            detail_scroll: 0,
            profile_input: LineInput::new(""),
            pending_category: None,
            should_quit: false,
        }
    }

    /// Back to the home menu. Leaving the quiz screen this way discards the
    /// whole attempt; nothing in-progress is persisted.
    pub fn go_home(&mut self) {
        self.quiz = None;
        self.quiz_category = None;
        self.notice = None;
        self.screen = AppScreen::Home;
    }

    pub fn go_to_bulletin(&mut self) {
        self.bulletin_selected = 0;
        self.screen = AppScreen::Bulletin;
    }

    pub fn open_bulletin_detail(&mut self) {
        if self.bulletin_selected < self.catalog.announcements().len() {
            self.detail_scroll = 0;
            self.screen = AppScreen::BulletinDetail;
        }
    }

    pub fn go_to_lectures(&mut self) {
        self.lecture_selected = 0;
        self.screen = AppScreen::Lectures;
    }

    pub fn open_lecture_detail(&mut self) {
        if self.lecture_selected < self.catalog.lectures().len() {
            self.detail_scroll = 0;
            self.screen = AppScreen::LectureDetail;
        }
    }

    pub fn go_to_members(&mut self) {
        self.member_selected = 0;
        self.screen = AppScreen::Members;
    }

    pub fn go_to_about(&mut self) {
        self.screen = AppScreen::About;
    }

    /// Quiz area entry point, gated on a stored profile the way the
    /// original app gates on a signed-in user.
    pub fn go_to_quiz_select(&mut self) {
        if self.profile.is_none() {
            self.pending_category = None;
            self.open_profile_setup();
            return;
        }
        self.category_selected = 0;
        self.screen = AppScreen::QuizSelect;
    }

    /// Enter a category, passing through profile setup first if needed.
    pub fn open_category(&mut self, category: &'static QuizCategory) {
        if self.profile.is_none() {
            self.pending_category = Some(category);
            self.open_profile_setup();
            return;
        }
        self.start_quiz(category);
    }

    pub fn open_category_by_key(&mut self, key: &str) {
        if let Some(category) = category_by_key(key) {
            self.open_category(category);
        }
    }

    fn open_profile_setup(&mut self) {
        self.profile_input = LineInput::new("");
        self.screen = AppScreen::ProfileSetup;
    }

    /// Save the entered name and continue to wherever the gate was hit.
    pub fn submit_profile(&mut self) {
        let name = self.profile_input.value().trim().to_string();
        if name.is_empty() {
            return;
        }

        let profile = ProfileData::new(&name);
        if let Some(ref store) = self.store {
            let _ = store.save_profile(&profile);
        }
        self.profile = Some(profile);

        if let Some(category) = self.pending_category.take() {
            self.start_quiz(category);
        } else {
            self.go_to_quiz_select();
        }
    }

    pub fn start_quiz(&mut self, category: &'static QuizCategory) {
        let questions = self.catalog.quiz_set(category.key);
        // An empty set still lands on the quiz screen, which renders the
        // no-content state instead of a session.
        self.quiz = (!questions.is_empty()).then(|| QuizSession::new(questions));
        self.quiz_category = Some(category);
        self.quiz_focus = QuizFocus::Bank;
        self.bank_selected = 0;
        self.answer_selected = 0;
        self.review_selected = 0;
        self.notice = None;
        self.screen = AppScreen::Quiz;
    }

    /// Back to the category list, dropping the attempt.
    pub fn leave_quiz(&mut self) {
        self.quiz = None;
        self.quiz_category = None;
        self.notice = None;
        self.screen = AppScreen::QuizSelect;
    }

    pub fn quiz_select_token(&mut self) {
        if let Some(ref mut session) = self.quiz {
            // An empty bank is a normal state (everything placed), not a
            // stale-index bug; don't forward it.
            if self.bank_selected < session.available_tokens().len() {
                session.select_token(self.bank_selected);
            }
        }
        self.clamp_quiz_cursors();
    }

    pub fn quiz_remove_token(&mut self) {
        if let Some(ref mut session) = self.quiz {
            if self.answer_selected < session.selected_tokens().len() {
                session.remove_token(self.answer_selected);
            }
        }
        self.clamp_quiz_cursors();
    }

    /// Take back the most recently placed token.
    pub fn quiz_remove_last_token(&mut self) {
        if let Some(ref mut session) = self.quiz {
            let placed = session.selected_tokens().len();
            if placed > 0 {
                session.remove_token(placed - 1);
            }
        }
        self.clamp_quiz_cursors();
    }

    pub fn quiz_reset_question(&mut self) {
        if let Some(ref mut session) = self.quiz {
            session.reset_question();
        }
        self.reset_quiz_cursors();
    }

    pub fn quiz_go_to(&mut self, index: usize) {
        if let Some(ref mut session) = self.quiz {
            if index < session.question_count() {
                session.go_to(index);
                self.reset_quiz_cursors();
            }
        }
    }

    pub fn quiz_next(&mut self) {
        if let Some(ref mut session) = self.quiz {
            session.next();
        }
        self.reset_quiz_cursors();
    }

    pub fn quiz_prev(&mut self) {
        if let Some(ref mut session) = self.quiz {
            session.prev();
        }
        self.reset_quiz_cursors();
    }

    pub fn submit_quiz(&mut self) {
        let Some(ref mut session) = self.quiz else {
            return;
        };
        match session.submit() {
            Ok(()) => {
                self.review_selected = 0;
                self.record_attempt();
            }
            Err(SubmitError::Incomplete { unanswered }) => {
                self.notice = Some(format!(
                    "You have {unanswered} unanswered question(s). \
                     Please answer all questions before submitting."
                ));
            }
        }
    }

    pub fn restart_quiz(&mut self) {
        if let Some(ref mut session) = self.quiz {
            session.restart();
        }
        self.reset_quiz_cursors();
    }

    pub fn toggle_review(&mut self) {
        let index = self.review_selected;
        if let Some(ref mut session) = self.quiz {
            session.toggle_review(index);
        }
    }

    pub fn review_next(&mut self) {
        if let Some(ref session) = self.quiz {
            let count = session.results().map_or(0, |results| results.len());
            if count > 0 {
                self.review_selected = (self.review_selected + 1).min(count - 1);
            }
        }
    }

    pub fn review_prev(&mut self) {
        self.review_selected = self.review_selected.saturating_sub(1);
    }

    fn record_attempt(&mut self) {
        let (Some(category), Some(session)) = (self.quiz_category, self.quiz.as_ref()) else {
            return;
        };
        let Some(correct) = session.correct_count() else {
            return;
        };

        self.attempts.attempts.push(AttemptRecord {
            category: category.key.to_string(),
            correct,
            total: session.question_count(),
            timestamp: chrono::Utc::now(),
        });
        if self.attempts.attempts.len() > ATTEMPT_HISTORY_CAP {
            self.attempts.attempts.remove(0);
        }

        if let Some(ref store) = self.store {
            let _ = store.save_attempt_history(&self.attempts);
        }
    }

    pub fn toggle_quiz_focus(&mut self) {
        self.quiz_focus = match self.quiz_focus {
            QuizFocus::Bank => QuizFocus::Answer,
            QuizFocus::Answer => QuizFocus::Bank,
        };
        self.clamp_quiz_cursors();
    }

    pub fn quiz_cursor_left(&mut self) {
        match self.quiz_focus {
            QuizFocus::Bank => self.bank_selected = self.bank_selected.saturating_sub(1),
            QuizFocus::Answer => self.answer_selected = self.answer_selected.saturating_sub(1),
        }
    }

    pub fn quiz_cursor_right(&mut self) {
        if let Some(ref session) = self.quiz {
            match self.quiz_focus {
                QuizFocus::Bank => {
                    let len = session.available_tokens().len();
                    if len > 0 {
                        self.bank_selected = (self.bank_selected + 1).min(len - 1);
                    }
                }
                QuizFocus::Answer => {
                    let len = session.selected_tokens().len();
                    if len > 0 {
                        self.answer_selected = (self.answer_selected + 1).min(len - 1);
                    }
                }
            }
        }
    }

    fn reset_quiz_cursors(&mut self) {
        self.quiz_focus = QuizFocus::Bank;
        self.bank_selected = 0;
        self.answer_selected = 0;
    }

    fn clamp_quiz_cursors(&mut self) {
        if let Some(ref session) = self.quiz {
            let bank_len = session.available_tokens().len();
            self.bank_selected = self.bank_selected.min(bank_len.saturating_sub(1));
            let answer_len = session.selected_tokens().len();
            self.answer_selected = self.answer_selected.min(answer_len.saturating_sub(1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::types::CATEGORIES;

    fn app_with_bundled_content() -> App {
        let dir = tempfile::tempdir().unwrap();
        let catalog = ContentCatalog::load_from(dir.path()).unwrap();
        let mut app = App::new(Config::default(), catalog);
        // Tests must not touch (or depend on) the real data dir.
        app.store = None;
        app.profile = Some(ProfileData::new("Test Student"));
        app.attempts = AttemptHistoryData::default();
        app
    }

    #[test]
    fn quiz_gate_redirects_to_profile_setup() {
        let mut app = app_with_bundled_content();
        app.profile = None;

        app.go_to_quiz_select();
        assert_eq!(app.screen, AppScreen::ProfileSetup);
    }

    #[test]
    fn profile_submit_continues_into_pending_category() {
        let mut app = app_with_bundled_content();
        app.profile = None;
        app.open_category(&CATEGORIES[0]);
        assert_eq!(app.screen, AppScreen::ProfileSetup);

        for ch in "Ada".chars() {
            app.profile_input.handle(crossterm::event::KeyEvent::new(
                crossterm::event::KeyCode::Char(ch),
                crossterm::event::KeyModifiers::NONE,
            ));
        }
        app.submit_profile();

        assert!(app.profile.is_some());
        assert_eq!(app.screen, AppScreen::Quiz);
        assert!(app.quiz.is_some());
    }

    #[test]
    fn blank_profile_name_is_rejected() {
        let mut app = app_with_bundled_content();
        app.profile = None;
        app.go_to_quiz_select();
        app.submit_profile();
        assert!(app.profile.is_none());
        assert_eq!(app.screen, AppScreen::ProfileSetup);
    }

    #[test]
    fn unknown_category_key_is_ignored() {
        let mut app = app_with_bundled_content();
        app.open_category_by_key("expert");
        assert_eq!(app.screen, AppScreen::Home);
        assert!(app.quiz.is_none());
    }

    #[test]
    fn incomplete_submit_raises_notice_and_keeps_answering() {
        let mut app = app_with_bundled_content();
        app.open_category_by_key("basic");
        assert!(app.quiz.is_some());

        app.submit_quiz();
        assert!(app.notice.is_some());
        assert!(app.quiz.as_ref().unwrap().is_answering());
    }

    #[test]
    fn full_run_records_an_attempt() {
        let mut app = app_with_bundled_content();
        app.open_category_by_key("basic");

        // Answer every question correctly by picking bank tokens in
        // canonical order.
        let count = app.quiz.as_ref().unwrap().question_count();
        for q in 0..count {
            let answer = app.quiz.as_ref().unwrap().questions()[q].answer.clone();
            for token in &answer {
                let index = app
                    .quiz
                    .as_ref()
                    .unwrap()
                    .available_tokens()
                    .iter()
                    .position(|t| t == token)
                    .unwrap();
                app.bank_selected = index;
                app.quiz_select_token();
            }
            if q + 1 < count {
                app.quiz_next();
            }
        }

        app.submit_quiz();
        let session = app.quiz.as_ref().unwrap();
        assert_eq!(session.correct_count(), Some(count));
        assert_eq!(app.attempts.attempts.len(), 1);
        assert_eq!(app.attempts.attempts[0].correct, count);
        assert_eq!(app.attempts.best_for("basic").unwrap().correct, count);
    }

    #[test]
    fn leaving_the_quiz_drops_the_session() {
        let mut app = app_with_bundled_content();
        app.open_category_by_key("basic");
        app.quiz_select_token();

        app.leave_quiz();
        assert!(app.quiz.is_none());
        assert_eq!(app.screen, AppScreen::QuizSelect);

        // Re-entering starts a fresh attempt.
        app.open_category_by_key("basic");
        assert!(app.quiz.as_ref().unwrap().selected_tokens().is_empty());
    }

    #[test]
    fn actions_on_empty_panes_are_harmless() {
        let mut app = app_with_bundled_content();
        app.open_category_by_key("basic");

        // Nothing placed yet: removing from the empty answer is a no-op.
        app.quiz_remove_token();
        app.quiz_remove_last_token();
        assert!(app.quiz.as_ref().unwrap().selected_tokens().is_empty());

        // Drain the bank completely, then try to select once more.
        let bank_len = app.quiz.as_ref().unwrap().available_tokens().len();
        for _ in 0..bank_len {
            app.bank_selected = 0;
            app.quiz_select_token();
        }
        assert!(app.quiz.as_ref().unwrap().available_tokens().is_empty());
        app.quiz_select_token();
        assert_eq!(
            app.quiz.as_ref().unwrap().selected_tokens().len(),
            bank_len
        );
    }

    #[test]
    fn bank_cursor_clamps_as_tokens_deplete() {
        let mut app = app_with_bundled_content();
        app.open_category_by_key("basic");

        let bank_len = app.quiz.as_ref().unwrap().available_tokens().len();
        app.bank_selected = bank_len - 1;
        app.quiz_select_token();
        assert!(app.bank_selected < app.quiz.as_ref().unwrap().available_tokens().len().max(1));
    }
}
