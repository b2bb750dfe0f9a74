mod app;
mod config;
mod content;
mod event;
mod quiz;
mod store;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use app::{App, AppScreen, QuizFocus};
use content::catalog::ContentCatalog;
use event::{AppEvent, EventHandler};
use quiz::session::QuizSession;
use ui::components::answer_area::AnswerArea;
use ui::components::bulletin::{BulletinDetail, BulletinList};
use ui::components::lectures::{LectureDetail, LectureList};
use ui::components::members::MemberList;
use ui::components::notice::Notice;
use ui::components::question_nav::QuestionNav;
use ui::components::review::{ReviewList, ScoreCard};
use ui::components::token_bank::TokenBank;
use ui::layout::{AppLayout, centered_rect};
use ui::line_input::InputResult;

#[derive(Parser)]
#[command(
    name = "dblab",
    version,
    about = "Terminal study companion for the database lab"
)]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Jump straight into a quiz category (basic, advanced)")]
    category: Option<String>,

    #[arg(long, help = "Load content collections from this directory")]
    content_dir: Option<PathBuf>,

    #[arg(long, help = "Download the content bundle before starting")]
    refresh: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = config::Config::load().unwrap_or_default();
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    config.normalize_theme(&ui::theme::Theme::available_themes());

    let content_dir = cli
        .content_dir
        .clone()
        .unwrap_or_else(ContentCatalog::content_dir);

    #[cfg(feature = "network")]
    if cli.refresh || config.content_refresh_enabled {
        if let Err(err) = content::remote::refresh(&config.content_url, &content_dir) {
            eprintln!("content refresh failed: {err}");
        }
    }
    #[cfg(not(feature = "network"))]
    if cli.refresh {
        eprintln!("built without the network feature; --refresh ignored");
    }

    let catalog = ContentCatalog::load_from(&content_dir).unwrap_or_else(|err| {
        eprintln!("failed to load content: {err}");
        ContentCatalog::default()
    });

    let mut app = App::new(config, catalog);
    if let Some(ref key) = cli.category {
        app.open_category_by_key(key);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new();

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Resize => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match app.screen {
        AppScreen::Home => handle_home_key(app, key),
        AppScreen::Bulletin => handle_bulletin_key(app, key),
        AppScreen::BulletinDetail => handle_bulletin_detail_key(app, key),
        AppScreen::Lectures => handle_lectures_key(app, key),
        AppScreen::LectureDetail => handle_lecture_detail_key(app, key),
        AppScreen::Members => handle_members_key(app, key),
        AppScreen::About => handle_about_key(app, key),
        AppScreen::QuizSelect => handle_quiz_select_key(app, key),
        AppScreen::Quiz => handle_quiz_key(app, key),
        AppScreen::ProfileSetup => handle_profile_setup_key(app, key),
    }
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('1') => app.go_to_bulletin(),
        KeyCode::Char('2') => app.go_to_lectures(),
        KeyCode::Char('3') => app.go_to_quiz_select(),
        KeyCode::Char('4') => app.go_to_members(),
        KeyCode::Char('5') => app.go_to_about(),
        KeyCode::Up | KeyCode::Char('k') => app.menu.prev(),
        KeyCode::Down | KeyCode::Char('j') => app.menu.next(),
        KeyCode::Enter => match app.menu.selected {
            0 => app.go_to_bulletin(),
            1 => app.go_to_lectures(),
            2 => app.go_to_quiz_select(),
            3 => app.go_to_members(),
            4 => app.go_to_about(),
            _ => {}
        },
        _ => {}
    }
}

fn handle_bulletin_key(app: &mut App, key: KeyEvent) {
    let count = app.catalog.announcements().len();
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.go_home(),
        KeyCode::Down | KeyCode::Char('j') => {
            if count > 0 {
                app.bulletin_selected = (app.bulletin_selected + 1).min(count - 1);
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.bulletin_selected = app.bulletin_selected.saturating_sub(1);
        }
        KeyCode::Enter => app.open_bulletin_detail(),
        _ => {}
    }
}

fn handle_bulletin_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.screen = AppScreen::Bulletin,
        KeyCode::Down | KeyCode::Char('j') => {
            app.detail_scroll = app.detail_scroll.saturating_add(1);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.detail_scroll = app.detail_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_lectures_key(app: &mut App, key: KeyEvent) {
    let count = app.catalog.lectures().len();
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.go_home(),
        KeyCode::Down | KeyCode::Char('j') => {
            if count > 0 {
                app.lecture_selected = (app.lecture_selected + 1).min(count - 1);
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.lecture_selected = app.lecture_selected.saturating_sub(1);
        }
        KeyCode::Enter => app.open_lecture_detail(),
        _ => {}
    }
}

fn handle_lecture_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.screen = AppScreen::Lectures,
        KeyCode::Down | KeyCode::Char('j') => {
            app.detail_scroll = app.detail_scroll.saturating_add(1);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.detail_scroll = app.detail_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_members_key(app: &mut App, key: KeyEvent) {
    let count = app.catalog.members().len();
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.go_home(),
        KeyCode::Down | KeyCode::Char('j') => {
            if count > 0 {
                app.member_selected = (app.member_selected + 1).min(count - 1);
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.member_selected = app.member_selected.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_about_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter) {
        app.go_home();
    }
}

fn handle_quiz_select_key(app: &mut App, key: KeyEvent) {
    let count = content::types::CATEGORIES.len();
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.go_home(),
        KeyCode::Down | KeyCode::Char('j') => {
            app.category_selected = (app.category_selected + 1).min(count - 1);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.category_selected = app.category_selected.saturating_sub(1);
        }
        KeyCode::Enter => {
            let category = &content::types::CATEGORIES[app.category_selected];
            app.open_category(category);
        }
        _ => {}
    }
}

fn handle_profile_setup_key(app: &mut App, key: KeyEvent) {
    match app.profile_input.handle(key) {
        InputResult::Submit => app.submit_profile(),
        InputResult::Cancel => app.go_home(),
        InputResult::Continue => {}
    }
}

fn handle_quiz_key(app: &mut App, key: KeyEvent) {
    // The incomplete-submission notice blocks everything else.
    if app.notice.is_some() {
        if matches!(
            key.code,
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')
        ) {
            app.notice = None;
        }
        return;
    }

    let Some(session) = app.quiz.as_ref() else {
        // Empty category: only way out is back.
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
            app.leave_quiz();
        }
        return;
    };

    if session.is_answering() {
        match key.code {
            KeyCode::Esc => app.leave_quiz(),
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => app.toggle_quiz_focus(),
            KeyCode::Left | KeyCode::Char('h') => app.quiz_cursor_left(),
            KeyCode::Right | KeyCode::Char('l') => app.quiz_cursor_right(),
            KeyCode::Enter | KeyCode::Char(' ') => match app.quiz_focus {
                QuizFocus::Bank => app.quiz_select_token(),
                QuizFocus::Answer => app.quiz_remove_token(),
            },
            KeyCode::Backspace => app.quiz_remove_last_token(),
            KeyCode::Char('r') => app.quiz_reset_question(),
            KeyCode::Char('n') | KeyCode::Char(']') => app.quiz_next(),
            KeyCode::Char('p') | KeyCode::Char('[') => app.quiz_prev(),
            KeyCode::Char('s') => app.submit_quiz(),
            KeyCode::Char(ch) if ch.is_ascii_digit() && ch != '0' => {
                app.quiz_go_to(ch as usize - '1' as usize);
            }
            _ => {}
        }
    } else {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => app.leave_quiz(),
            KeyCode::Down | KeyCode::Char('j') => app.review_next(),
            KeyCode::Up | KeyCode::Char('k') => app.review_prev(),
            KeyCode::Enter | KeyCode::Char(' ') => app.toggle_review(),
            KeyCode::Char('r') => app.restart_quiz(),
            _ => {}
        }
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    match app.screen {
        AppScreen::Home => render_home(frame, app),
        AppScreen::Bulletin => render_bulletin(frame, app),
        AppScreen::BulletinDetail => render_bulletin_detail(frame, app),
        AppScreen::Lectures => render_lectures(frame, app),
        AppScreen::LectureDetail => render_lecture_detail(frame, app),
        AppScreen::Members => render_members(frame, app),
        AppScreen::About => render_about(frame, app),
        AppScreen::QuizSelect => render_quiz_select(frame, app),
        AppScreen::Quiz => render_quiz(frame, app),
        AppScreen::ProfileSetup => render_profile_setup(frame, app),
    }
}

fn render_header(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect, text: &str) {
    let colors = &app.theme.colors;
    let header = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(colors.header_fg())
            .bg(colors.header_bg())
            .add_modifier(Modifier::BOLD),
    )))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, area);
}

fn render_footer(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect, text: &str) {
    let colors = &app.theme.colors;
    let footer = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(colors.text_muted()),
    )));
    frame.render_widget(footer, area);
}

fn render_home(frame: &mut ratatui::Frame, app: &App) {
    let colors = &app.theme.colors;
    let layout = AppLayout::new(frame.area());

    let who = app.profile.as_ref().map_or("guest", |p| p.name.as_str());
    let header_text = format!(
        " dblab | {} | {} attempt(s) recorded ",
        who,
        app.attempts.attempts.len()
    );
    render_header(frame, app, layout.header, &header_text);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(5)])
        .split(layout.main);

    let menu_area = centered_rect(60, 90, main_layout[0]);
    frame.render_widget(&app.menu, menu_area);

    // Strip of the freshest bulletin posts, like the mobile home screen.
    let latest = app.catalog.latest_announcements(2);
    let block = Block::bordered()
        .title(" Latest announcements ")
        .border_style(Style::default().fg(colors.border()));
    let inner = block.inner(main_layout[1]);
    frame.render_widget(block, main_layout[1]);

    let mut lines: Vec<Line> = Vec::new();
    if latest.is_empty() {
        lines.push(Line::from(Span::styled(
            "Nothing posted yet.",
            Style::default().fg(colors.text_muted()),
        )));
    }
    for item in latest {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", item.date.format("%d %b")),
                Style::default().fg(colors.text_muted()),
            ),
            Span::styled(item.title.clone(), Style::default().fg(colors.fg())),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);

    render_footer(
        frame,
        app,
        layout.footer,
        " [1-5] Open  [j/k] Navigate  [Enter] Select  [q] Quit ",
    );
}

fn render_bulletin(frame: &mut ratatui::Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    render_header(frame, app, layout.header, " Lab's Bulletin ");
    frame.render_widget(
        BulletinList::new(app.catalog.announcements(), app.bulletin_selected, app.theme),
        layout.main,
    );
    render_footer(
        frame,
        app,
        layout.footer,
        " [j/k] Navigate  [Enter] Read  [Esc] Back ",
    );
}

fn render_bulletin_detail(frame: &mut ratatui::Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    render_header(frame, app, layout.header, " Lab's Bulletin ");
    if let Some(item) = app.catalog.announcements().get(app.bulletin_selected) {
        frame.render_widget(
            BulletinDetail::new(item, app.detail_scroll, app.theme),
            layout.main,
        );
    }
    render_footer(frame, app, layout.footer, " [j/k] Scroll  [Esc] Back ");
}

fn render_lectures(frame: &mut ratatui::Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    render_header(frame, app, layout.header, " Lectures ");
    frame.render_widget(
        LectureList::new(app.catalog.lectures(), app.lecture_selected, app.theme),
        layout.main,
    );
    render_footer(
        frame,
        app,
        layout.footer,
        " [j/k] Navigate  [Enter] Open  [Esc] Back ",
    );
}

fn render_lecture_detail(frame: &mut ratatui::Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    render_header(frame, app, layout.header, " Lectures ");
    if let Some(item) = app.catalog.lectures().get(app.lecture_selected) {
        frame.render_widget(
            LectureDetail::new(item, app.detail_scroll, app.theme),
            layout.main,
        );
    }
    render_footer(frame, app, layout.footer, " [j/k] Scroll  [Esc] Back ");
}

fn render_members(frame: &mut ratatui::Frame, app: &App) {
    let layout = AppLayout::new(frame.area());
    render_header(frame, app, layout.header, " Members ");
    frame.render_widget(
        MemberList::new(app.catalog.members(), app.member_selected, app.theme),
        layout.main,
    );
    render_footer(frame, app, layout.footer, " [j/k] Navigate  [Esc] Back ");
}

fn render_about(frame: &mut ratatui::Frame, app: &App) {
    let colors = &app.theme.colors;
    let layout = AppLayout::new(frame.area());
    render_header(frame, app, layout.header, " About ");

    let centered = centered_rect(70, 60, layout.main);
    let block = Block::bordered()
        .title(" Database Laboratory ")
        .border_style(Style::default().fg(colors.border()));
    let inner = block.inner(centered);
    frame.render_widget(block, centered);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "The Database Laboratory supports the database systems course:",
            Style::default().fg(colors.fg()),
        )),
        Line::from(Span::styled(
            "practicum modules, assistance hours, announcements, and quizzes.",
            Style::default().fg(colors.fg()),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "This companion app keeps the bulletin, lecture materials, and",
            Style::default().fg(colors.fg()),
        )),
        Line::from(Span::styled(
            "SQL practice quizzes within reach of your terminal.",
            Style::default().fg(colors.fg()),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("dblab {}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(colors.text_muted()),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );

    render_footer(frame, app, layout.footer, " [Esc] Back ");
}

fn render_quiz_select(frame: &mut ratatui::Frame, app: &App) {
    let colors = &app.theme.colors;
    let layout = AppLayout::new(frame.area());
    render_header(frame, app, layout.header, " SQL quiz ");

    let mut constraints = vec![Constraint::Length(2)];
    for _ in content::types::CATEGORIES {
        constraints.push(Constraint::Length(5));
    }
    constraints.push(Constraint::Min(0));

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(layout.main);

    let tagline = Paragraph::new(Line::from(Span::styled(
        "Level up your knowledge — take a quiz and reach your best score",
        Style::default().fg(colors.accent_alt()),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(tagline, main_layout[0]);

    for (i, category) in content::types::CATEGORIES.iter().enumerate() {
        let is_selected = i == app.category_selected;
        let border = if is_selected {
            colors.border_focused()
        } else {
            colors.border()
        };
        let block = Block::bordered().border_style(Style::default().fg(border));
        let inner = block.inner(main_layout[i + 1]);
        frame.render_widget(block, main_layout[i + 1]);

        let question_count = app.catalog.question_count(category.key);
        let best = app
            .attempts
            .best_for(category.key)
            .map_or("no attempts yet".to_string(), |record| {
                format!("best {}/{}", record.correct, record.total)
            });

        let title_style = if is_selected {
            Style::default()
                .fg(colors.accent_alt())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.fg())
        };
        let lines = vec![
            Line::from(Span::styled(category.title, title_style)),
            Line::from(Span::styled(
                category.tagline,
                Style::default().fg(colors.text_muted()),
            )),
            Line::from(Span::styled(
                format!("{question_count} questions \u{00b7} {best}"),
                Style::default().fg(colors.text_muted()),
            )),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }

    render_footer(
        frame,
        app,
        layout.footer,
        " [j/k] Navigate  [Enter] Start  [Esc] Back ",
    );
}

fn render_profile_setup(frame: &mut ratatui::Frame, app: &App) {
    let colors = &app.theme.colors;
    let area = frame.area();

    let centered = centered_rect(50, 40, area);
    let block = Block::bordered()
        .title(" Set up your profile ")
        .border_style(Style::default().fg(colors.border_focused()));
    let inner = block.inner(centered);
    frame.render_widget(block, centered);

    let (before, cursor_char, after) = app.profile_input.render_parts();
    let mut input_spans = vec![
        Span::styled("  Name: ", Style::default().fg(colors.text_muted())),
        Span::styled(before.to_string(), Style::default().fg(colors.fg())),
    ];
    match cursor_char {
        Some(ch) => {
            input_spans.push(Span::styled(
                ch.to_string(),
                Style::default()
                    .fg(colors.chip_cursor_fg())
                    .bg(colors.chip_cursor_bg()),
            ));
            input_spans.push(Span::styled(
                after.to_string(),
                Style::default().fg(colors.fg()),
            ));
        }
        None => {
            input_spans.push(Span::styled(
                " ",
                Style::default().bg(colors.chip_cursor_bg()),
            ));
        }
    }

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Quizzes need a profile. Enter your name to continue.",
            Style::default().fg(colors.fg()),
        )),
        Line::from(""),
        Line::from(input_spans),
        Line::from(""),
        Line::from(Span::styled(
            "  [Enter] Save  [Esc] Cancel",
            Style::default().fg(colors.text_muted()),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_quiz(frame: &mut ratatui::Frame, app: &App) {
    let colors = &app.theme.colors;
    let area = frame.area();
    let layout = AppLayout::new(area);

    let category_title = app.quiz_category.map_or("Quiz", |c| c.title);

    match app.quiz {
        None => {
            render_header(frame, app, layout.header, &format!(" {category_title} "));
            let message = Paragraph::new(Line::from(Span::styled(
                "No quizzes available for this category.",
                Style::default().fg(colors.text_muted()),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(message, centered_rect(60, 20, layout.main));
            render_footer(frame, app, layout.footer, " [Esc] Back ");
        }
        Some(ref session) if session.is_answering() => {
            render_quiz_answering(frame, app, session, &layout, category_title);
        }
        Some(ref session) => {
            render_quiz_results(frame, app, session, &layout, category_title);
        }
    }

    if let Some(ref message) = app.notice {
        let popup = centered_rect(50, 30, area);
        frame.render_widget(Notice::new("Incomplete Quiz", message, app.theme), popup);
    }
}

fn render_quiz_answering(
    frame: &mut ratatui::Frame,
    app: &App,
    session: &QuizSession,
    layout: &AppLayout,
    category_title: &str,
) {
    let colors = &app.theme.colors;

    let header_text = format!(
        " {category_title} | Question {}/{} | {}/{} answered ",
        session.current_index() + 1,
        session.question_count(),
        session.ledger().answered_count(),
        session.question_count(),
    );
    render_header(frame, app, layout.header, &header_text);

    let question = session.current_question();
    let schema_hint = question
        .and_then(|q| q.schema_hint.as_deref())
        .filter(|_| layout.tier.show_schema_hint(frame.area().height));

    let inner_width = layout.main.width.saturating_sub(2);
    let answer_rows = AnswerArea::row_count(session.selected_tokens(), inner_width);

    let mut constraints = vec![Constraint::Length(1)];
    if schema_hint.is_some() {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(3));
    constraints.push(Constraint::Length((answer_rows * 2 + 2) as u16));
    constraints.push(Constraint::Min(4));

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(layout.main);

    let answered: Vec<bool> = (0..session.question_count())
        .map(|i| session.answered(i))
        .collect();
    frame.render_widget(
        QuestionNav::new(session.current_index(), answered, app.theme),
        main_layout[0],
    );

    let mut idx = 1;
    if let Some(hint) = schema_hint {
        let block = Block::bordered()
            .title(" Schema ")
            .border_style(Style::default().fg(colors.accent_dim()));
        let paragraph = Paragraph::new(Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(colors.text_muted()),
        )))
        .block(block);
        frame.render_widget(paragraph, main_layout[idx]);
        idx += 1;
    }

    let title = question.map_or(String::new(), |q| q.title.clone());
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            title,
            Style::default().fg(colors.fg()),
        )))
        .wrap(Wrap { trim: true }),
        main_layout[idx],
    );
    idx += 1;

    let bank_focused = app.quiz_focus == QuizFocus::Bank;
    let answer_cursor =
        (!session.selected_tokens().is_empty()).then_some(app.answer_selected);
    frame.render_widget(
        AnswerArea::new(
            session.selected_tokens(),
            answer_cursor,
            !bank_focused,
            app.theme,
        ),
        main_layout[idx],
    );
    idx += 1;

    let bank_cursor = (!session.available_tokens().is_empty()).then_some(app.bank_selected);
    frame.render_widget(
        TokenBank::new(
            session.available_tokens(),
            bank_cursor,
            bank_focused,
            app.theme,
        ),
        main_layout[idx],
    );

    let footer_text = if session.can_submit() {
        " [Enter] Place/Remove  [Tab] Pane  [n/p] Question  [r] Reset  [s] Submit  [Esc] Back "
    } else {
        " [Enter] Place/Remove  [Tab] Pane  [n/p] Question  [r] Reset  [Esc] Back "
    };
    render_footer(frame, app, layout.footer, footer_text);
}

fn render_quiz_results(
    frame: &mut ratatui::Frame,
    app: &App,
    session: &QuizSession,
    layout: &AppLayout,
    category_title: &str,
) {
    render_header(
        frame,
        app,
        layout.header,
        &format!(" {category_title} | Result "),
    );

    let Some(results) = session.results() else {
        return;
    };
    let correct = session.correct_count().unwrap_or(0);

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(layout.main);

    frame.render_widget(
        ScoreCard::new(correct, session.question_count(), app.theme),
        main_layout[0],
    );
    frame.render_widget(
        ReviewList::new(
            results,
            session.expanded_reviews(),
            app.review_selected,
            app.theme,
        ),
        main_layout[1],
    );

    render_footer(
        frame,
        app,
        layout.footer,
        " [j/k] Select  [Enter] Expand  [r] Restart  [Esc] Back To Quiz ",
    );
}
