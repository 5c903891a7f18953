//! UI rendering helpers for the terminal user interface.
//!
//! Everything drawn here comes from the transport's `DisplayState`; the UI
//! never reads playback state anywhere else.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::artwork::Artwork;
use crate::config::{ControlsSettings, UiSettings};
use crate::library::Track;
use crate::transport::{DisplayState, PlayerState};

/// Render the controls help text, incorporating the seek step.
fn controls_text(seek_seconds: u64) -> String {
    [
        "[space] play/pause".to_string(),
        "[p] play".to_string(),
        "[s] pause".to_string(),
        "[h/l] prev/next".to_string(),
        format!("[H/L] seek -/+{}s", seek_seconds),
        "[0-9] jump".to_string(),
        "[q] quit".to_string(),
    ]
    .join(" | ")
}

/// Summary line for the artwork panel.
fn artwork_text(artwork: Option<&Artwork>) -> String {
    match artwork {
        Some(a) => {
            let mime = a.mime_type.as_deref().unwrap_or("unknown type");
            format!("cover: {} ({:.1} KiB)", mime, a.len() as f64 / 1024.0)
        }
        None => "no artwork".to_string(),
    }
}

/// Fraction of the slider that is filled, kept inside the gauge's 0..=1 range.
fn slider_ratio(display: &DisplayState) -> f64 {
    if display.slider_max <= 0.0 || !display.position.is_finite() {
        return 0.0;
    }
    (display.position / display.slider_max).clamp(0.0, 1.0)
}

fn status_text(display: &DisplayState, status: Option<&str>) -> String {
    let mut parts: Vec<String> = vec![display.state.label().to_string()];
    if let Some(err) = &display.error {
        parts.push(format!("decode error: {}", err));
    }
    if let Some(msg) = status {
        parts.push(msg.to_string());
    }
    parts.join(" • ")
}

fn padded(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

/// Render the whole player into `frame`.
pub fn draw(
    frame: &mut Frame,
    tracks: &[Track],
    current_index: usize,
    display: &DisplayState,
    status: Option<&str>,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .split(frame.area());

    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" minitune ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    let title = format!(" track {}/{} ", current_index + 1, tracks.len());
    let name = Paragraph::new(display.track_name.as_str())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(padded(&title));
    frame.render_widget(name, chunks[1]);

    let art = Paragraph::new(artwork_text(display.artwork.as_ref())).block(padded(" artwork "));
    frame.render_widget(art, chunks[2]);

    let label = format!("{} / {}", display.elapsed_label, display.duration_label);
    let slider = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" position "))
        .ratio(slider_ratio(display))
        .label(label);
    frame.render_widget(slider, chunks[3]);

    let mut status_style = Style::default();
    if display.error.is_some() || status.is_some() {
        status_style = status_style.add_modifier(Modifier::BOLD);
    } else if display.state == PlayerState::Playing {
        status_style = status_style.add_modifier(Modifier::SLOW_BLINK);
    }
    let status_par = Paragraph::new(status_text(display, status))
        .style(status_style)
        .block(padded(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status_par, chunks[4]);

    let footer = Paragraph::new(controls_text(controls_settings.seek_seconds))
        .block(padded(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[6]);
}

#[cfg(test)]
mod tests;
