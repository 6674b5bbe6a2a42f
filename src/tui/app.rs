use crate::api::{
    Alert, ApiClient, JobCard, KpiCharts, KpiOverview, ScheduleEntry, Technician,
};
use crate::error::Result;
use crate::schedule::{board_rows, HoverState};
use crate::tui::db::PreferenceStore;
use crate::tui::form::{Field, JobCardForm};
use crate::tui::panels::{
    alerts::render_alerts_panel, dashboard::render_dashboard_panel,
    job_cards::render_job_cards_panel, kpis::render_kpis_panel,
    schedule::render_schedule_panel, technicians::render_technicians_panel,
};
use crate::tui::resource::{LoadState, Resource, Settled, Ticket};
use crate::tui::state::UserPreferences;
use crate::tui::toast::{ToastLevel, Toasts};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Margin, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{info, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Technicians,
    JobCards,
    Schedule,
    Alerts,
    Kpis,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Dashboard,
        Tab::Technicians,
        Tab::JobCards,
        Tab::Schedule,
        Tab::Alerts,
        Tab::Kpis,
    ];

    pub fn from_str(s: &str) -> Self {
        match s {
            "technicians" => Tab::Technicians,
            "job-cards" => Tab::JobCards,
            "schedule" => Tab::Schedule,
            "alerts" => Tab::Alerts,
            "kpis" => Tab::Kpis,
            _ => Tab::Dashboard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Technicians => "technicians",
            Tab::JobCards => "job-cards",
            Tab::Schedule => "schedule",
            Tab::Alerts => "alerts",
            Tab::Kpis => "kpis",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Technicians => "Technicians",
            Tab::JobCards => "Job Cards",
            Tab::Schedule => "Schedule",
            Tab::Alerts => "Alerts",
            Tab::Kpis => "KPIs",
        }
    }

    fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    fn prev(self) -> Self {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

/// Results posted back to the UI loop by fetch tasks.
#[derive(Debug)]
pub enum Message {
    Overview(Ticket, Result<KpiOverview>),
    Technicians(Ticket, Result<Vec<Technician>>),
    JobCards(Ticket, Result<Vec<JobCard>>),
    Schedule(Ticket, Result<Vec<ScheduleEntry>>),
    Alerts(Ticket, Result<Vec<Alert>>),
    Kpis(Ticket, Result<KpiCharts>),
    JobCreated(Result<()>),
    AutoAssigned(i64, Result<()>),
}

/// Schedule board view state.
#[derive(Debug, Default)]
pub struct ScheduleView {
    pub board: Resource<Vec<ScheduleEntry>>,
    pub hover: HoverState,
    /// Keyboard cursor into the board's display order.
    pub selected: Option<usize>,
    /// Screen rectangles of the blocks drawn last frame.
    pub hitboxes: Vec<(Rect, i64)>,
    /// Detail panel drawn last frame; it covers the blocks beneath it.
    pub detail: Option<Rect>,
}

impl ScheduleView {
    /// Job ids in the order the board draws them.
    pub fn display_order(&self) -> Vec<i64> {
        board_rows(self.board.data())
            .iter()
            .flat_map(|row| row.blocks.iter().map(|block| block.entry.job_id))
            .collect()
    }

    /// Technician row holding the keyboard selection.
    pub fn selected_row(&self) -> Option<usize> {
        let index = self.selected?;
        let mut seen = 0;
        for (row_index, row) in board_rows(self.board.data()).iter().enumerate() {
            seen += row.blocks.len();
            if index < seen {
                return Some(row_index);
            }
        }
        None
    }

    fn hit(&self, column: u16, row: u16) -> Option<i64> {
        let position = Position::new(column, row);
        // Later blocks are drawn on top, so they win.
        self.hitboxes
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, job_id)| *job_id)
    }

    pub fn pointer_moved(&mut self, column: u16, row: u16) {
        let over_detail = self
            .detail
            .is_some_and(|rect| rect.contains(Position::new(column, row)));
        if over_detail && self.hover.current().is_some() {
            return;
        }
        match self.hit(column, row) {
            Some(job_id) => {
                if let Some(previous) = self.hover.current() {
                    if previous != job_id {
                        self.hover.leave(previous);
                    }
                }
                self.hover.enter(job_id);
            }
            None => {
                if let Some(previous) = self.hover.current() {
                    self.hover.leave(previous);
                }
            }
        }
    }

    fn select(&mut self, index: usize) {
        let order = self.display_order();
        if let Some(job_id) = order.get(index) {
            self.selected = Some(index);
            self.hover.enter(*job_id);
        }
    }

    fn select_next(&mut self) {
        let len = self.display_order().len();
        if len == 0 {
            return;
        }
        let next = match self.selected {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.select(next);
    }

    fn select_prev(&mut self) {
        match self.selected {
            Some(i) if i > 0 => self.select(i - 1),
            None => self.select(0),
            _ => {}
        }
    }

    fn after_reload(&mut self) {
        let len = self.board.data().len();
        if self.selected.is_some_and(|i| i >= len) {
            self.selected = None;
        }
    }
}

pub struct App {
    pub current_tab: Tab,
    pub overview: Resource<KpiOverview>,
    pub technicians: Resource<Vec<Technician>>,
    pub job_cards: Resource<Vec<JobCard>>,
    pub schedule: ScheduleView,
    pub alerts: Resource<Vec<Alert>>,
    pub kpis: Resource<KpiCharts>,
    pub form: Option<JobCardForm>,
    pub form_error: Option<String>,
    pub toasts: Toasts,
    pub preferences: UserPreferences,
    pub show_help: bool,
    pub selected_index: usize,
    pub should_quit: bool,
    pub last_refresh: Instant,
    client: ApiClient,
    tx: UnboundedSender<Message>,
}

impl App {
    pub fn new(client: ApiClient, preferences: UserPreferences) -> (Self, UnboundedReceiver<Message>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let current_tab = Tab::from_str(&preferences.last_active_tab);

        let app = Self {
            current_tab,
            overview: Resource::default(),
            technicians: Resource::default(),
            job_cards: Resource::default(),
            schedule: ScheduleView::default(),
            alerts: Resource::default(),
            kpis: Resource::default(),
            form: None,
            form_error: None,
            toasts: Toasts::default(),
            preferences,
            show_help: false,
            selected_index: 0,
            should_quit: false,
            last_refresh: Instant::now(),
            client,
            tx,
        };
        (app, rx)
    }

    pub fn api_url(&self) -> &str {
        self.client.base_url()
    }

    /// Navigate to `tab`; like a route change, this mounts the view and
    /// starts its fetch.
    pub fn activate(&mut self, tab: Tab) {
        self.current_tab = tab;
        self.selected_index = 0;
        self.preferences.last_active_tab = tab.as_str().to_string();
        self.load(tab);
    }

    pub fn refresh_current(&mut self) {
        self.load(self.current_tab);
    }

    /// Start a fetch for `tab`. Requires a tokio runtime.
    pub fn load(&mut self, tab: Tab) {
        self.last_refresh = Instant::now();
        let client = self.client.clone();
        let tx = self.tx.clone();

        match tab {
            Tab::Dashboard => {
                let ticket = self.overview.begin();
                tokio::spawn(async move {
                    let result = client.kpi_overview().await;
                    let _ = tx.send(Message::Overview(ticket, result));
                });
            }
            Tab::Technicians => {
                let ticket = self.technicians.begin();
                tokio::spawn(async move {
                    let result = client.technicians().await;
                    let _ = tx.send(Message::Technicians(ticket, result));
                });
            }
            Tab::JobCards => {
                let ticket = self.job_cards.begin();
                tokio::spawn(async move {
                    let result = client.job_cards().await;
                    let _ = tx.send(Message::JobCards(ticket, result));
                });
            }
            Tab::Schedule => {
                let ticket = self.schedule.board.begin();
                tokio::spawn(async move {
                    let result = client.schedule_board().await;
                    let _ = tx.send(Message::Schedule(ticket, result));
                });
            }
            Tab::Alerts => {
                let ticket = self.alerts.begin();
                tokio::spawn(async move {
                    let result = client.alerts().await;
                    let _ = tx.send(Message::Alerts(ticket, result));
                });
            }
            Tab::Kpis => {
                let ticket = self.kpis.begin();
                tokio::spawn(async move {
                    let result = client.kpi_charts().await;
                    let _ = tx.send(Message::Kpis(ticket, result));
                });
            }
        }
    }

    pub fn apply(&mut self, message: Message) {
        match message {
            Message::Overview(ticket, result) => {
                if self.overview.settle(ticket, result) == Settled::Failed {
                    self.toasts.error("Failed to load KPI data");
                }
            }
            Message::Technicians(ticket, result) => {
                if self.technicians.settle(ticket, result) == Settled::Failed {
                    self.toasts.error("Failed to load technicians");
                }
                self.clamp_selection();
            }
            Message::JobCards(ticket, result) => {
                if self.job_cards.settle(ticket, result) == Settled::Failed {
                    self.toasts.error("Failed to load job cards");
                }
                self.clamp_selection();
            }
            Message::Schedule(ticket, result) => match self.schedule.board.settle(ticket, result) {
                Settled::Ready => self.schedule.after_reload(),
                Settled::Failed => {
                    self.toasts.error("Failed to load schedule");
                    self.schedule.after_reload();
                }
                Settled::Stale => {}
            },
            Message::Alerts(ticket, result) => {
                if self.alerts.settle(ticket, result) == Settled::Failed {
                    self.toasts.error("Failed to load alerts");
                }
            }
            Message::Kpis(ticket, result) => {
                if self.kpis.settle(ticket, result) == Settled::Failed {
                    self.toasts.error("Failed to load KPI data");
                }
            }
            Message::JobCreated(Ok(())) => {
                info!("job card created");
                self.toasts.success("Job card created successfully");
                self.form = None;
                self.form_error = None;
                self.load(Tab::JobCards);
            }
            Message::JobCreated(Err(e)) => {
                warn!(error = %e, "job card creation failed");
                self.toasts.error("Failed to create job card");
                if let Some(form) = self.form.as_mut() {
                    form.submitting = false;
                }
            }
            Message::AutoAssigned(job_id, Ok(())) => {
                info!(job_id, "job auto-assigned");
                self.toasts.success("Job auto-assigned successfully");
                self.load(Tab::JobCards);
            }
            Message::AutoAssigned(job_id, Err(e)) => {
                warn!(job_id, error = %e, "auto-assign failed");
                self.toasts.error("Failed to auto-assign job");
            }
        }
    }

    /// Fetch state of the active view.
    pub fn current_state(&self) -> LoadState {
        match self.current_tab {
            Tab::Dashboard => self.overview.state(),
            Tab::Technicians => self.technicians.state(),
            Tab::JobCards => self.job_cards.state(),
            Tab::Schedule => self.schedule.board.state(),
            Tab::Alerts => self.alerts.state(),
            Tab::Kpis => self.kpis.state(),
        }
    }

    fn list_len(&self) -> usize {
        match self.current_tab {
            Tab::Technicians => self.technicians.data().len(),
            Tab::JobCards => self.job_cards.data().len(),
            Tab::Alerts => self.alerts.data().len(),
            Tab::Dashboard | Tab::Schedule | Tab::Kpis => 0,
        }
    }

    fn clamp_selection(&mut self) {
        let max = self.list_len().saturating_sub(1);
        if self.selected_index > max {
            self.selected_index = max;
        }
    }

    fn submit_form(&mut self) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        if form.submitting {
            return;
        }
        match form.to_request() {
            Ok(body) => {
                form.submitting = true;
                self.form_error = None;
                let client = self.client.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let result = client.create_job_card(&body).await;
                    let _ = tx.send(Message::JobCreated(result));
                });
            }
            Err(e) => self.form_error = Some(e.to_string()),
        }
    }

    fn auto_assign_selected(&mut self) {
        let Some(job) = self.job_cards.data().get(self.selected_index) else {
            return;
        };
        if !job.can_auto_assign() {
            self.toasts
                .error(format!("Job #{} is not pending and unassigned", job.job_id));
            return;
        }
        let job_id = job.job_id;
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.auto_assign(job_id).await;
            let _ = tx.send(Message::AutoAssigned(job_id, result));
        });
    }
}

pub fn run_tui(client: ApiClient, store: Option<PreferenceStore>) -> Result<()> {
    let preferences = store
        .as_ref()
        .map(PreferenceStore::load_user_preferences)
        .unwrap_or_default();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (mut app, mut rx) = App::new(client, preferences);
    info!(api = app.api_url(), tab = app.current_tab.as_str(), "dashboard started");
    app.activate(app.current_tab);

    let outcome = event_loop(&mut terminal, &mut app, &mut rx);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Some(store) = &store {
        if let Err(e) = store.save_user_preferences(&app.preferences) {
            warn!(error = %e, "failed to save preferences");
        }
    }

    outcome
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: &mut UnboundedReceiver<Message>,
) -> Result<()> {
    terminal.clear()?;

    loop {
        while let Ok(message) = rx.try_recv() {
            app.apply(message);
        }

        let interval = app.preferences.refresh_interval;
        if interval > 0
            && app.form.is_none()
            && app.last_refresh.elapsed() > Duration::from_millis(interval)
        {
            app.refresh_current();
        }

        app.toasts.expire(Instant::now());
        terminal.draw(|f| ui(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => handle_key_event(app, key),
                Event::Mouse(mouse) => handle_mouse_event(app, mouse),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if app.current_tab != Tab::Schedule || app.form.is_some() || app.show_help {
        return;
    }
    if let MouseEventKind::Moved = mouse.kind {
        app.schedule.pointer_moved(mouse.column, mouse.row);
    }
}

pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.form.is_some() {
        handle_form_key(app, key);
        return;
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Esc => {
            if app.current_tab == Tab::Schedule && app.schedule.hover.current().is_some() {
                app.schedule.hover.clear();
                app.schedule.selected = None;
                app.schedule.detail = None;
            } else {
                app.should_quit = true;
            }
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Tab => app.activate(app.current_tab.next()),
        KeyCode::BackTab => app.activate(app.current_tab.prev()),
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            app.activate(Tab::ALL[index]);
        }
        KeyCode::Char('r') => app.refresh_current(),
        KeyCode::Down | KeyCode::Char('j') => {
            if app.current_tab == Tab::Schedule {
                app.schedule.select_next();
            } else if app.selected_index < app.list_len().saturating_sub(1) {
                app.selected_index += 1;
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if app.current_tab == Tab::Schedule {
                app.schedule.select_prev();
            } else if app.selected_index > 0 {
                app.selected_index -= 1;
            }
        }
        KeyCode::Right | KeyCode::Char('l') if app.current_tab == Tab::Schedule => {
            app.schedule.select_next();
        }
        KeyCode::Left | KeyCode::Char('h') if app.current_tab == Tab::Schedule => {
            app.schedule.select_prev();
        }
        KeyCode::Char('n') if app.current_tab == Tab::JobCards => {
            app.form = Some(JobCardForm::default());
            app.form_error = None;
        }
        KeyCode::Char('a') if app.current_tab == Tab::JobCards => {
            app.auto_assign_selected();
        }
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    let Some(form) = app.form.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Esc => {
            app.form = None;
            app.form_error = None;
        }
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Char(c) => form.insert(c),
        _ => {}
    }
}

pub fn ui(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let title_block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::DarkGray));

    let (status, status_color) = match app.current_state() {
        LoadState::Idle => ("", Color::DarkGray),
        LoadState::Loading => (" ⟳ loading", Color::Yellow),
        LoadState::Ready => (" ✓", Color::Green),
        LoadState::Failed => (" ✗ last fetch failed", Color::Red),
    };
    let title = Paragraph::new(Line::from(vec![
        Span::styled(" Workshop Manager ", Style::default().fg(Color::Cyan)),
        Span::styled(
            format!("· Load Management · {}", app.api_url()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(status, Style::default().fg(status_color)),
    ]))
    .block(title_block);
    frame.render_widget(title, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(20), Constraint::Min(0)])
        .split(chunks[1]);

    frame.render_widget(render_sidebar(app.current_tab), main_chunks[0]);

    let content_area = main_chunks[1];
    match app.current_tab {
        Tab::Dashboard => render_dashboard_panel(frame, app, content_area),
        Tab::Technicians => render_technicians_panel(frame, app, content_area),
        Tab::JobCards => render_job_cards_panel(frame, app, content_area),
        Tab::Schedule => {
            let hits = render_schedule_panel(frame, app, content_area);
            app.schedule.hitboxes = hits.blocks;
            app.schedule.detail = hits.detail;
        }
        Tab::Alerts => render_alerts_panel(frame, app, content_area),
        Tab::Kpis => render_kpis_panel(frame, app, content_area),
    }

    if app.form.is_some() {
        render_form_dialog(frame, app, content_area);
    }
    if app.show_help {
        render_help_overlay(frame, content_area);
    }

    let help_text = match (app.form.is_some(), app.current_tab) {
        (true, _) => " [Tab] Next field  [Enter] Create  [Esc] Cancel ",
        (false, Tab::JobCards) => " ↑↓ Navigate  [n] New  [a] Auto-assign  [r] Refresh  [Tab] Switch  [?] Help  [q] Quit ",
        (false, Tab::Schedule) => " ←→ Select job  [Esc] Hide details  [r] Refresh  [Tab] Switch  [?] Help  [q] Quit ",
        _ => " ↑↓ Navigate  [r] Refresh  [Tab] Switch  [1-6] Jump  [?] Help  [q] Quit ",
    };

    let footer_block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::DarkGray));

    let footer = Paragraph::new(help_text)
        .block(footer_block)
        .style(Style::default().fg(Color::White));
    frame.render_widget(footer, chunks[2]);

    render_toasts(frame, app, frame.area());
}

fn render_sidebar(active: Tab) -> List<'static> {
    let items: Vec<ListItem> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let style = if *tab == active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(format!(" {} {}", i + 1, tab.title())).style(style)
        })
        .collect();

    List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Navigation "))
        .style(Style::default().fg(Color::White))
}

/// A rectangle of at most `width` x `height` centred in `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn render_form_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let Some(form) = app.form.as_ref() else {
        return;
    };
    let dialog = centered(area, 64, 13);
    frame.render_widget(Clear, dialog);

    let title = if form.submitting {
        " Create New Job Card (saving…) "
    } else {
        " Create New Job Card "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().bg(Color::Black).fg(Color::White));
    frame.render_widget(block, dialog);

    let inner = dialog.inner(Margin::new(2, 1));
    let mut lines = Vec::new();
    for field in Field::ALL {
        let focused = form.focus == field;
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(field.label(), label_style)));
        let cursor = if focused { "▏" } else { "" };
        lines.push(Line::from(format!("> {}{}", form.value(field), cursor)));
        lines.push(Line::default());
    }
    if let Some(err) = &app.form_error {
        lines.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let dialog = centered(area, 50, 16);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Keyboard Shortcuts ")
        .style(Style::default().bg(Color::Black));

    frame.render_widget(Clear, dialog);
    frame.render_widget(block, dialog);

    let help_rows = [
        Row::new(vec![Cell::from("↑/↓ j/k"), Cell::from("Navigate items")]),
        Row::new(vec![Cell::from("←/→ h/l"), Cell::from("Select schedule block")]),
        Row::new(vec![Cell::from("mouse"), Cell::from("Hover a block for details")]),
        Row::new(vec![Cell::from("Tab/S-Tab"), Cell::from("Switch views")]),
        Row::new(vec![Cell::from("1-6"), Cell::from("Jump to view")]),
        Row::new(vec![Cell::from("r"), Cell::from("Refresh view")]),
        Row::new(vec![Cell::from("n"), Cell::from("New job card")]),
        Row::new(vec![Cell::from("a"), Cell::from("Auto-assign job")]),
        Row::new(vec![Cell::from("?"), Cell::from("Toggle help")]),
        Row::new(vec![Cell::from("q/Esc"), Cell::from("Quit")]),
    ];

    let help_table = Table::new(help_rows, [Constraint::Length(12), Constraint::Length(30)])
        .style(Style::default().fg(Color::White));

    frame.render_widget(help_table, dialog.inner(Margin::new(2, 1)));
}

/// Stack toasts in the bottom-right corner above the footer, newest last.
fn render_toasts(frame: &mut Frame, app: &App, area: Rect) {
    if app.toasts.is_empty() {
        return;
    }
    let width = 44.min(area.width);
    let stack_top = (area.y + area.height).saturating_sub(3 + 3 * app.toasts.len() as u16);
    for (i, toast) in app.toasts.iter().enumerate() {
        let y = stack_top + (i as u16) * 3;
        if y < area.y || y + 3 > area.y + area.height {
            continue;
        }
        let rect = Rect::new(area.x + area.width - width, y, width, 3);
        let color = match toast.level {
            ToastLevel::Success => Color::Green,
            ToastLevel::Error => Color::Red,
        };
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(toast.text.as_str())
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                )
                .style(Style::default().fg(color)),
            rect,
        );
    }
}
