//! UI rendering for the TUI application

mod detail;
mod header_footer;
mod overview;

use crate::app::{App, View};
use ratatui::{
    prelude::*,
    widgets::{
        Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Scrollbar,
        ScrollbarOrientation, ScrollbarState, Table, Wrap,
    },
};

use detail::*;
use header_footer::*;
use overview::*;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Breadcrumb header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);

    match app.view {
        View::StackOverview => draw_stack_overview(frame, app, chunks[1]),
        View::ServiceDetail => draw_service_detail(frame, app, chunks[1]),
        View::Help => {
            match app.help_return {
                View::ServiceDetail => draw_service_detail(frame, app, chunks[1]),
                _ => draw_stack_overview(frame, app, chunks[1]),
            }
            draw_help(frame, app, chunks[1]);
        }
    }

    draw_footer(frame, app, chunks[2]);
}

/// Rectangle of the given size centered in `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Percentage-sized popup with minimums, centered in `area`
fn popup_rect(pct_w: u16, pct_h: u16, min_w: u16, min_h: u16, area: Rect) -> Rect {
    let w = ((area.width as u32 * pct_w as u32) / 100) as u16;
    let h = ((area.height as u32 * pct_h as u32) / 100) as u16;
    let w = w.max(min_w).min(area.width);
    let h = h.max(min_h).min(area.height);
    centered_rect(w, h, area)
}
