use std::f64::consts::TAU;
use std::rc::Rc;

use chrono::NaiveDate;
use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::state::{AppState, Screen, Section, TeamMatchesView};
use crate::stats::{Outcome, PieSegment, StatsBucket};
use crate::team_api::MatchRecord;
use crate::teams::{self, KNOWN_TEAMS};

pub const LOADER_TEXT: &str = "Loading matches...";
pub const BACK_LABEL: &str = "[ Back ]";
pub const CHART_TITLE: &str = "Match Statistics";
pub const LATEST_TITLE: &str = "Latest Matches";

/// Fixed size of the statistics chart, borders included.
pub const PIE_WIDTH: u16 = 44;
pub const PIE_HEIGHT: u16 = 12;

const CARD_HEIGHT: u16 = 4;

fn frame_chunks(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area)
}

fn team_rows(inner: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(PIE_HEIGHT),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(inner)
}

/// How many match cards fit on screen for a full frame of `area`.
pub fn card_capacity(area: Rect) -> usize {
    let body = frame_chunks(area)[1];
    let inner = Block::default().borders(Borders::ALL).inner(body);
    let cards = team_rows(inner)[3];
    let list_area = Block::default().borders(Borders::ALL).inner(cards);
    (list_area.height / CARD_HEIGHT) as usize
}

pub fn ui(frame: &mut Frame, state: &AppState) {
    let chunks = frame_chunks(frame.size());

    let header = Paragraph::new(header_text(state))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match &state.screen {
        Screen::Home => render_home(frame, chunks[1], state),
        Screen::TeamMatches(view) => render_team_matches(frame, chunks[1], view),
    }

    let console = Paragraph::new(console_text(state))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, chunks[2]);

    let footer = Paragraph::new(footer_text(state)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[3]);

    if state.help_overlay {
        let area = frame.size();
        render_help_overlay(frame, area);
    }
}

fn header_text(state: &AppState) -> String {
    let title = match &state.screen {
        Screen::Home => "IPL DASHBOARD | Teams".to_string(),
        Screen::TeamMatches(view) => {
            let name = teams::team_info(&view.team_id)
                .map(|t| t.name)
                .unwrap_or(view.team_id.as_str());
            format!("IPL DASHBOARD | {name} | {}", state.route().path())
        }
    };
    let line1 = format!("   /\\   {title}");
    let line2 = "  /__\\".to_string();
    let line3 = "   ||".to_string();
    format!("{line1}\n{line2}\n{line3}")
}

fn footer_text(state: &AppState) -> String {
    match &state.screen {
        Screen::Home => "j/k/↑/↓ Move | Enter Open | ? Help | q Quit".to_string(),
        Screen::TeamMatches(_) => {
            "b/Esc Back | j/k/↑/↓ Scroll matches | ? Help | q Quit".to_string()
        }
    }
}

fn console_text(state: &AppState) -> String {
    state
        .logs
        .back()
        .cloned()
        .unwrap_or_else(|| "No alerts yet".to_string())
}

fn render_home(frame: &mut Frame, area: Rect, state: &AppState) {
    let lines: Vec<Line> = KNOWN_TEAMS
        .iter()
        .enumerate()
        .map(|(idx, team)| {
            let selected = idx == state.home_selected;
            let prefix = if selected { "> " } else { "  " };
            let style = if selected {
                Style::default().fg(Color::White).bg(Color::DarkGray)
            } else {
                Style::default().fg(team.accent)
            };
            Line::styled(format!("{prefix}{:<4} {}", team.code, team.name), style)
        })
        .collect();

    let list = Paragraph::new(lines)
        .block(Block::default().title("IPL Teams").borders(Borders::ALL));
    frame.render_widget(list, area);
}

pub fn render_team_matches(frame: &mut Frame, area: Rect, view: &TeamMatchesView) {
    let accent = teams::accent_color(&view.team_id);
    let outer = Block::default()
        .title(view.container_class())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let sections = view.view_sections();
    if let [Section::Loader] = sections.as_slice() {
        render_loader(frame, inner);
        return;
    }

    let rows = team_rows(inner);
    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(PIE_WIDTH)])
        .split(rows[1]);

    for section in &sections {
        match section {
            Section::Loader => render_loader(frame, inner),
            Section::Banner { src } => render_banner(frame, rows[0], view, src, accent),
            Section::LatestMatch(record) => render_latest_match(frame, middle[0], record),
            Section::PieChart { segments, legend } => {
                render_pie_chart(frame, middle[1], segments, legend)
            }
            Section::BackButton => render_back_button(frame, rows[2], accent),
            Section::MatchCards(records) => {
                render_match_cards(frame, rows[3], records, view.card_scroll)
            }
            Section::Failure { message } => {
                let failure_area = Rect {
                    height: rows[0].height + rows[1].height,
                    ..rows[0]
                };
                render_failure(frame, failure_area, message);
            }
        }
    }
}

fn render_loader(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let text_area = Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1,
    };
    let loader = Paragraph::new(LOADER_TEXT)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White));
    frame.render_widget(loader, text_area);
}

fn render_banner(frame: &mut Frame, area: Rect, view: &TeamMatchesView, src: &str, accent: Color) {
    let name = teams::team_info(&view.team_id)
        .map(|t| t.name)
        .unwrap_or(view.team_id.as_str());
    let banner = Paragraph::new(Line::from(vec![
        Span::styled(
            name.to_string(),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(src.to_string(), Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().title("Team Banner").borders(Borders::ALL));
    frame.render_widget(banner, area);
}

pub fn latest_match_text(record: &MatchRecord) -> String {
    [
        record.competing_team.clone(),
        format_match_date(&record.date),
        record.venue.clone(),
        record.result.clone(),
        format!("First Innings: {}", record.first_innings),
        format!("Second Innings: {}", record.second_innings),
        format!("Man Of The Match: {}", record.man_of_the_match),
        format!("Umpires: {}", record.umpires),
    ]
    .join("\n")
}

fn render_latest_match(frame: &mut Frame, area: Rect, record: &MatchRecord) {
    let panel = Paragraph::new(latest_match_text(record))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(LATEST_TITLE).borders(Borders::ALL));
    frame.render_widget(panel, area);
}

pub fn outcome_color(outcome: Outcome) -> Color {
    match outcome {
        Outcome::Won => Color::Green,
        Outcome::Lost => Color::Red,
        Outcome::Draw => Color::Yellow,
    }
}

fn status_color(status: &str) -> Color {
    match status {
        "Won" => outcome_color(Outcome::Won),
        "Lost" => outcome_color(Outcome::Lost),
        _ => outcome_color(Outcome::Draw),
    }
}

pub fn legend_line(legend: &[StatsBucket; 3]) -> Line<'static> {
    let mut spans = Vec::new();
    for (idx, bucket) in legend.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            "■ ",
            Style::default().fg(outcome_color(bucket.name)),
        ));
        spans.push(Span::raw(format!("{} {}", bucket.name.label(), bucket.value)));
    }
    Line::from(spans)
}

/// Canvas points for each segment, sampled on a dot grid inside the unit circle.
fn pie_points(segments: &[PieSegment; 3], x_half: f64, cols: u16, rows: u16) -> [Vec<(f64, f64)>; 3] {
    let mut out: [Vec<(f64, f64)>; 3] = Default::default();
    // Braille cells are 2x4 dots.
    let dots_x = (cols as usize * 2).max(1);
    let dots_y = (rows as usize * 4).max(1);
    for iy in 0..dots_y {
        let y = 1.0 - 2.0 * (iy as f64 + 0.5) / dots_y as f64;
        for ix in 0..dots_x {
            let x = -x_half + 2.0 * x_half * (ix as f64 + 0.5) / dots_x as f64;
            if x * x + y * y > 0.9 * 0.9 {
                continue;
            }
            let angle = y.atan2(x).rem_euclid(TAU);
            if let Some(idx) = segments.iter().position(|s| s.contains_angle(angle)) {
                out[idx].push((x, y));
            }
        }
    }
    out
}

fn render_pie_chart(frame: &mut Frame, area: Rect, segments: &[PieSegment; 3], legend: &[StatsBucket; 3]) {
    let block = Block::default().title(CHART_TITLE).borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 2 || inner.width == 0 {
        return;
    }

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);
    let chart_area = parts[0];

    // Terminal cells are about twice as tall as they are wide.
    let x_half = chart_area.width as f64 / (chart_area.height as f64 * 2.0);
    let points = pie_points(segments, x_half, chart_area.width, chart_area.height);
    let colors = (*segments).map(|s| outcome_color(s.name));

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([-x_half, x_half])
        .y_bounds([-1.0, 1.0])
        .paint(|ctx| {
            for (coords, color) in points.iter().zip(colors) {
                ctx.draw(&Points {
                    coords: coords.as_slice(),
                    color,
                });
            }
        });
    frame.render_widget(canvas, chart_area);

    let legend = Paragraph::new(legend_line(legend)).alignment(Alignment::Center);
    frame.render_widget(legend, parts[1]);
}

fn render_back_button(frame: &mut Frame, area: Rect, accent: Color) {
    let button = Paragraph::new(BACK_LABEL)
        .alignment(Alignment::Center)
        .style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

pub fn match_card_lines(record: &MatchRecord) -> [String; 2] {
    [
        format!("vs {}", record.competing_team),
        format!("{} | {}", record.result, record.match_status),
    ]
}

fn render_match_cards(frame: &mut Frame, area: Rect, records: &[MatchRecord], scroll: usize) {
    let block = Block::default().title("Recent Matches").borders(Borders::ALL);
    let list_area = block.inner(area);
    frame.render_widget(block, area);

    if records.is_empty() {
        let empty = Paragraph::new("No recent matches").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, list_area);
        return;
    }
    if list_area.height < CARD_HEIGHT {
        let empty = Paragraph::new("Match list needs more height")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, list_area);
        return;
    }

    let visible = (list_area.height / CARD_HEIGHT) as usize;
    let (start, end) = visible_window(scroll, records.len(), visible);
    for (i, record) in records[start..end].iter().enumerate() {
        let card_area = Rect {
            x: list_area.x,
            y: list_area.y + (i as u16) * CARD_HEIGHT,
            width: list_area.width,
            height: CARD_HEIGHT,
        };
        let [title, outcome] = match_card_lines(record);
        let card = Paragraph::new(vec![
            Line::styled(title, Style::default().add_modifier(Modifier::BOLD)),
            Line::styled(outcome, Style::default().fg(status_color(&record.match_status))),
        ])
        .block(
            Block::default()
                .title(format!("#{}", record.id))
                .borders(Borders::ALL),
        );
        frame.render_widget(card, card_area);
    }
}

/// Window of `visible` items starting at `scroll`, pulled back so the tail stays full.
pub fn visible_window(scroll: usize, total: usize, visible: usize) -> (usize, usize) {
    if total == 0 || visible == 0 {
        return (0, 0);
    }
    if total <= visible {
        return (0, total);
    }
    let start = scroll.min(total - visible);
    (start, start + visible)
}

fn render_failure(frame: &mut Frame, area: Rect, message: &str) {
    let text = format!("Could not load team matches.\n\n{message}");
    let failure = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Red))
        .block(Block::default().title("Error").borders(Borders::ALL));
    frame.render_widget(failure, area);
}

pub fn format_match_date(raw: &str) -> String {
    let cleaned = raw.trim();
    match NaiveDate::parse_from_str(cleaned, "%Y-%m-%d") {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => cleaned.to_string(),
    }
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "IPL Dashboard - Help",
        "",
        "Teams:",
        "  j/k or ↑/↓   Move",
        "  Enter        Open team matches",
        "",
        "Team matches:",
        "  b / Esc      Back to teams",
        "  j/k or ↑/↓   Scroll recent matches",
        "",
        "  ?            Toggle help",
        "  q            Quit",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
