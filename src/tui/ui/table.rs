use crate::cards::{Card, Suit};
use crate::report::{ActionKind, HandReport};
use crate::tui::app::AppState;
use core::cmp::Ordering;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Length(5), // dealer + board
            Constraint::Min(6),    // seats
            Constraint::Length(4), // status bar
        ])
        .split(f.area());

    let report = app.selected_report();
    let hand_label = match report {
        Some(r) if app.viewing_latest() => format!("Hand {}", r.hand_number),
        Some(r) => format!(
            "Hand {} (history {}/{})",
            r.hand_number,
            app.selected_index() + 1,
            app.reports().len()
        ),
        None => "No hand dealt".to_string(),
    };
    let cfg = app.game.config();
    let header_lines = vec![
        Line::from(format!(
            "{hand_label}   Ante: ${}  Blind: ${}  Bet: ${}",
            cfg.ante, cfg.blind, cfg.base_bet
        )),
        Line::from(format!(
            "Seed: {}   Table money: ${}   Policy: {}",
            app.game.seed(),
            app.game.total_money(),
            app.policy_name()
        )),
    ];
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("uth-rs").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    draw_board(f, chunks[1], report);
    draw_seats(f, chunks[2], app, report);

    let status_area = chunks[3];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner(status_area));
    let mut left = match report {
        None => vec![Line::from("Press Space to deal the first hand.")],
        Some(r) => vec![Line::from(dealer_line(r))],
    };
    if let Some(err) = app.last_error() {
        left.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    let right = vec![Line::from("Space deal • ←/→ browse"), Line::from("L log • ? help • Q quit")];
    f.render_widget(Paragraph::new(left).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );

    if app.help_open() {
        draw_help(f);
    } else if app.log_open() {
        draw_log(f, report);
    }
}

fn dealer_line(r: &HandReport) -> String {
    let q = if r.dealer_qualifies { "qualifies" } else { "does not qualify" };
    format!("Dealer: {} {} - {q}", r.dealer_best.category, r.dealer_best.tiebreakers)
}

fn draw_board(f: &mut Frame, area: Rect, report: Option<&HandReport>) {
    f.render_widget(Block::default().title("Dealer | Board").borders(Borders::ALL), area);
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 7); 7])
        .split(inner(area));
    let dealer = report.map(|r| r.dealer_hole.as_slice()).unwrap_or(&[]);
    let board = report.map(|r| r.community.as_slice()).unwrap_or(&[]);
    for (i, slot) in slots.iter().enumerate() {
        let (card, color) = if i < 2 {
            (dealer.get(i).copied(), Some(Color::Magenta))
        } else {
            (board.get(i - 2).copied(), None)
        };
        render_card_widget(f, *slot, card, color);
    }
}

fn draw_seats(f: &mut Frame, area: Rect, app: &AppState, report: Option<&HandReport>) {
    let players = app.game.players();
    let total = players.len();
    let top_cols = total.div_ceil(2);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2); 2])
        .split(area);
    for (r, row) in rows.iter().enumerate() {
        let range = if r == 0 { 0..top_cols } else { top_cols..total };
        if range.is_empty() {
            continue;
        }
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(range.clone().map(|_| Constraint::Ratio(1, range.len() as u32)))
            .split(*row);
        for (c, idx) in range.enumerate() {
            if let Some(p) = players.get(idx) {
                render_seat(f, cols[c], p.position(), p.money(), report);
            }
        }
    }
}

fn render_seat(
    f: &mut Frame,
    area: Rect,
    position: usize,
    money: u64,
    report: Option<&HandReport>,
) {
    let mut block = Block::default().title(format!("P{position}")).borders(Borders::ALL);
    let mut lines = vec![Line::from(format!("Money: ${money}"))];
    let mut hole: &[Card] = &[];

    if let Some(r) = report {
        hole = r
            .hole_cards
            .iter()
            .find(|(p, _)| *p == position)
            .map(|(_, cards)| cards.as_slice())
            .unwrap_or(&[]);
        let play = r.actions.iter().find_map(|a| match a.kind {
            ActionKind::Bet(amount) if a.position == position => Some((amount, a.street)),
            _ => None,
        });
        lines.push(Line::from(match play {
            Some((amount, street)) => format!("Play: ${amount} on {street}"),
            None => "Play: --".to_string(),
        }));
        if r.sat_out.contains(&position) {
            lines.push(Line::from("Sat out"));
            block = block.border_style(Style::default().fg(Color::DarkGray));
        } else if let Some(res) = r.result_for(position) {
            lines.push(Line::from(format!("{} {}", res.best.category, res.best.tiebreakers)));
            lines.push(Line::from(format!("Returned: ${}", res.payout.total())));
            let color = match res.outcome {
                Ordering::Greater => Color::Green,
                Ordering::Equal => Color::Yellow,
                Ordering::Less => Color::Red,
            };
            block = block.border_style(Style::default().fg(color));
        } else {
            lines.push(Line::from("Folded at the river"));
            block = block.border_style(Style::default().fg(Color::DarkGray));
        }
    }

    f.render_widget(block, area);
    let seat_inner = inner(area);
    if hole.len() == 2 && seat_inner.height > 4 {
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(seat_inner);
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), split[0]);
        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 2); 2])
            .split(split[1]);
        render_card_widget(f, cards[0], Some(hole[0]), Some(Color::Cyan));
        render_card_widget(f, cards[1], Some(hole[1]), Some(Color::Cyan));
    } else {
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), seat_inner);
    }
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Table:", bold)),
        Line::from("- Space / Enter: deal a new hand"),
        Line::from("- Left / Right: previous / next hand"),
        Line::from("- L: hand narration"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from(Span::styled("Seats:", bold)),
        Line::from("- Green beat the dealer, red lost, yellow tied"),
        Line::from("- Grey sat out or folded"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    f.render_widget(Clear, area);
    f.render_widget(Block::default().title("Help").borders(Borders::ALL), area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner(area));
}

fn draw_log(f: &mut Frame, report: Option<&HandReport>) {
    let area = centered_rect(80, 85, f.area());
    let mut lines: Vec<Line> = match report {
        Some(r) => r.to_string().lines().map(|l| Line::from(l.to_string())).collect(),
        None => vec![Line::from("No hand dealt yet.")],
    };
    lines.push(Line::from(Span::styled(
        "Close: L or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    f.render_widget(Clear, area);
    f.render_widget(Block::default().title("Hand log").borders(Borders::ALL), area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner(area));
}

fn suit_style(s: Suit) -> Style {
    match s {
        Suit::Hearts | Suit::Diamonds => Style::default().fg(Color::Red),
        Suit::Clubs | Suit::Spades => Style::default().fg(Color::White),
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<Card>, border: Option<Color>) {
    let mut block = Block::default().borders(Borders::ALL);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    f.render_widget(block, area);
    let content = match card {
        Some(c) => Line::from(Span::styled(c.to_string(), suit_style(c.suit()))),
        None => Line::from("[  ]"),
    };
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center), inner(area));
}
