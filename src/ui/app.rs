//! Main UI Application
//!
//! Coordinates rendering and input handling across all screens.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::progression::{runner_title, xp_into_level, XP_PER_LEVEL};
use crate::stats::{average_pace, format_duration, format_pace, total_distance, total_duration};
use crate::tracker::{FormField, Tab, Tracker, TrackerState};
use crate::ui::widgets::meter;

/// Width of the XP and achievement progress bars
const METER_WIDTH: u16 = 24;

/// UI state that is not part of the session itself
pub struct App {
    /// Scroll offset into the runs list
    runs_scroll: usize,
}

impl App {
    pub fn new() -> Self {
        Self { runs_scroll: 0 }
    }

    /// Handle keyboard input, returns true if should quit
    pub fn handle_input(&mut self, key: KeyEvent, tracker: &mut Tracker) -> Result<bool> {
        // Global quit shortcut
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(true);
        }

        match tracker.state() {
            TrackerState::Dashboard => self.handle_dashboard_input(key, tracker),
            TrackerState::LogRun => self.handle_log_run_input(key, tracker),
            TrackerState::Quit => Ok(true),
        }
    }

    fn handle_dashboard_input(&mut self, key: KeyEvent, tracker: &mut Tracker) -> Result<bool> {
        match key.code {
            KeyCode::Char('n') | KeyCode::Char('+') => {
                tracker.open_log_run();
            }
            KeyCode::Tab => {
                tracker.toggle_tab();
                self.runs_scroll = 0;
            }
            KeyCode::Char('1') => {
                if tracker.tab() != Tab::Runs {
                    tracker.toggle_tab();
                }
            }
            KeyCode::Char('2') => {
                if tracker.tab() != Tab::Achievements {
                    tracker.toggle_tab();
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.runs_scroll = self.runs_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = tracker.runs().len().saturating_sub(1);
                self.runs_scroll = (self.runs_scroll + 1).min(max);
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                tracker.quit();
                return Ok(true);
            }
            _ => {}
        }
        Ok(false)
    }

    fn handle_log_run_input(&mut self, key: KeyEvent, tracker: &mut Tracker) -> Result<bool> {
        match key.code {
            KeyCode::Esc => {
                tracker.cancel_log_run();
            }
            KeyCode::Enter => {
                // Invalid input is a silent no-op; the dialog stays open
                tracker.add_run();
            }
            KeyCode::Tab | KeyCode::Down => {
                tracker.form_mut().next_field();
            }
            KeyCode::BackTab | KeyCode::Up => {
                tracker.form_mut().prev_field();
            }
            KeyCode::Backspace => {
                tracker.form_mut().backspace();
            }
            KeyCode::Char(c) => {
                tracker.form_mut().push_char(c);
            }
            _ => {}
        }
        Ok(false)
    }

    /// Render the whole UI for the current state
    pub fn render(&self, frame: &mut Frame, tracker: &Tracker) {
        // Clear the entire screen first to prevent artifacts
        frame.render_widget(Clear, frame.area());

        match tracker.state() {
            TrackerState::Dashboard => self.render_dashboard(frame, tracker),
            TrackerState::LogRun => {
                self.render_dashboard(frame, tracker);
                self.render_log_run_popup(frame, tracker);
            }
            TrackerState::Quit => {}
        }
    }

    fn render_dashboard(&self, frame: &mut Frame, tracker: &Tracker) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Length(4),
                Constraint::Min(8),
            ])
            .split(frame.area());

        self.render_header(frame, chunks[0]);
        self.render_stat_cards(frame, tracker, chunks[1]);
        self.render_level_panel(frame, tracker, chunks[2]);
        self.render_tabs(frame, tracker, chunks[3]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Stridelog ")
            .border_style(Style::default().fg(Color::LightRed));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header = Line::from(vec![
            Span::styled(
                "Your running journey starts here",
                Style::default().fg(Color::Gray),
            ),
            Span::raw("   "),
            Span::styled(
                "[N] Log run  [Tab] Switch tab  [Q] Quit",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(header), inner);
    }

    fn render_stat_cards(&self, frame: &mut Frame, tracker: &Tracker, area: Rect) {
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(area);

        let runs = tracker.runs();
        let pace = average_pace(runs);
        // Zero means "no pace yet", never format it as a real pace
        let pace_text = if pace > 0.0 {
            format_pace(pace)
        } else {
            "--".to_string()
        };

        self.render_card(
            frame,
            cards[0],
            "Total Distance",
            format!("{:.1}", total_distance(runs)),
            "km",
            Color::Cyan,
        );
        self.render_card(
            frame,
            cards[1],
            "Total Time",
            format_duration(total_duration(runs)),
            "running",
            Color::Green,
        );
        self.render_card(frame, cards[2], "Avg Pace", pace_text, "per km", Color::Magenta);
        self.render_card(
            frame,
            cards[3],
            "Streak",
            tracker.progression().streak.to_string(),
            "days",
            Color::LightRed,
        );
    }

    fn render_card(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        value: String,
        unit: &str,
        color: Color,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", title))
            .border_style(Style::default().fg(color));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = vec![
            Line::from(Span::styled(
                value,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(unit.to_string(), Style::default().fg(Color::Gray))),
        ];
        let para = Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(para, inner);
    }

    fn render_level_panel(&self, frame: &mut Frame, tracker: &Tracker, area: Rect) {
        let progression = tracker.progression();
        let into_level = xp_into_level(progression.xp);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Level ")
            .border_style(Style::default().fg(Color::Yellow));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let fraction = f64::from(into_level) / f64::from(XP_PER_LEVEL);
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("Level {}", progression.level),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {} Runner", runner_title(progression.level)),
                    Style::default().fg(Color::Gray),
                ),
            ]),
            Line::from(vec![
                Span::styled(meter(fraction, METER_WIDTH), Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!(" {}/{} XP", into_level, XP_PER_LEVEL),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("  ({} total)", progression.xp),
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_tabs(&self, frame: &mut Frame, tracker: &Tracker, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        let selected = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let unselected = Style::default().fg(Color::DarkGray);
        let (runs_style, badges_style) = match tracker.tab() {
            Tab::Runs => (selected, unselected),
            Tab::Achievements => (unselected, selected),
        };

        let tabs = Line::from(vec![
            Span::styled(" [1] Runs ", runs_style),
            Span::raw("|"),
            Span::styled(" [2] Achievements ", badges_style),
        ]);
        frame.render_widget(Paragraph::new(tabs), chunks[0]);

        match tracker.tab() {
            Tab::Runs => self.render_runs(frame, tracker, chunks[1]),
            Tab::Achievements => self.render_achievements(frame, tracker, chunks[1]),
        }
    }

    fn render_runs(&self, frame: &mut Frame, tracker: &Tracker, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let runs = tracker.runs();
        if runs.is_empty() {
            let empty = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No runs logged yet",
                    Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Press [N] to log your first run!",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            let para = Paragraph::new(empty).alignment(ratatui::layout::Alignment::Center);
            frame.render_widget(para, inner);
            return;
        }

        let mut lines = Vec::new();
        for run in runs {
            lines.push(Line::from(vec![
                Span::styled(run.date.format("%Y-%m-%d").to_string(), Style::default().fg(Color::Gray)),
                Span::raw("  "),
                Span::styled(
                    format!("{:>5.1} km", run.distance_km),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("{:>7}", format_duration(run.duration_min)),
                    Style::default().fg(Color::Green),
                ),
                Span::raw("  "),
                Span::styled(format!("{:>8}", format_pace(run.pace)), Style::default().fg(Color::Cyan)),
                Span::raw("  "),
                Span::styled(format!("{} kcal", run.calories), Style::default().fg(Color::LightRed)),
            ]));
        }

        let scroll = self.runs_scroll.min(runs.len().saturating_sub(1)) as u16;
        let para = Paragraph::new(lines).scroll((scroll, 0));
        frame.render_widget(para, inner);
    }

    fn render_achievements(&self, frame: &mut Frame, tracker: &Tracker, area: Rect) {
        let achievements = tracker.achievements();
        let unlocked_count = achievements.iter().filter(|a| a.unlocked).count();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(
                " Achievements ({}/{}) ",
                unlocked_count,
                achievements.len()
            ))
            .border_style(Style::default().fg(Color::Yellow));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines: Vec<Line> = vec![Line::from("")];
        for achievement in &achievements {
            let (check, title_style) = if achievement.unlocked {
                (
                    Span::styled("[X] ", Style::default().fg(Color::Green)),
                    Style::default().fg(Color::Yellow),
                )
            } else {
                (
                    Span::styled("[ ] ", Style::default().fg(Color::DarkGray)),
                    Style::default().fg(Color::White),
                )
            };

            let mut title_line = vec![
                check,
                Span::raw(format!("{} ", achievement.icon)),
                Span::styled(achievement.title, title_style),
            ];
            if achievement.unlocked {
                title_line.push(Span::styled(
                    "  UNLOCKED",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                ));
            }
            lines.push(Line::from(title_line));
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(achievement.description, Style::default().fg(Color::Gray)),
            ]));

            if let Some(progress) = achievement.progress {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(
                        meter(progress.fraction(), METER_WIDTH),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(
                        format!(" {:.1}/{:.0}", progress.current, progress.target),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]));
            }
            lines.push(Line::from(""));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_log_run_popup(&self, frame: &mut Frame, tracker: &Tracker) {
        let popup_area = centered_rect(44, 50, frame.area());
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Log a Run ")
            .border_style(Style::default().fg(Color::Yellow));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let form = tracker.form();
        let mut lines = vec![Line::from("")];
        for field in [FormField::Distance, FormField::Duration, FormField::Date] {
            let active = form.field == field;
            let label_style = if active {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let value = match field {
                FormField::Distance => form.distance.as_str(),
                FormField::Duration => form.duration.as_str(),
                FormField::Date => form.date.as_str(),
            };

            lines.push(Line::from(Span::styled(format!("  {}", field.label()), label_style)));
            let mut value_line = vec![
                Span::raw("  "),
                Span::styled(value.to_string(), Style::default().fg(Color::White)),
            ];
            if active {
                value_line.push(Span::styled("▌", Style::default().fg(Color::Yellow)));
            }
            lines.push(Line::from(value_line));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "  [Enter] Save  [Tab] Next field  [Esc] Cancel",
            Style::default().fg(Color::DarkGray),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a centered rect using percentages of the available area
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
