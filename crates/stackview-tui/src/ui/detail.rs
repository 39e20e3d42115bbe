use super::*;
use crate::detail_state::{DetailRow, DetailState};
use stackview_core::{
    mask_secret, OwnedName, Section, NO_CONFIGS, NO_EXPOSED_PORTS, NO_HEALTHCHECK, NO_URL_ROUTES,
    NO_VARIABLES, NO_VOLUMES,
};

const LABEL_WIDTH: usize = 28;

/// Width of the section navigation column
const NAV_WIDTH: u16 = 26;

pub(super) fn draw_service_detail(frame: &mut Frame, app: &App, area: Rect) {
    let Some(detail) = app.detail.as_ref() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(NAV_WIDTH), Constraint::Min(0)])
        .split(area);

    draw_section_nav(frame, detail, chunks[0]);

    let (lines, focus) = build_detail_lines(detail, &app.config.display.secret_mask);
    let inner_height = chunks[1].height.saturating_sub(2) as usize;
    let scroll = focus
        .map(|(first, last)| (last + 1).saturating_sub(inner_height).min(first))
        .unwrap_or(0);

    let page = Paragraph::new(lines.clone())
        .block(
            Block::default()
                .title(format!(" {} ", detail.details.name))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .scroll((scroll as u16, 0));
    frame.render_widget(page, chunks[1]);

    if lines.len() > inner_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("▲"))
            .end_symbol(Some("▼"));
        let mut scrollbar_state =
            ScrollbarState::new(lines.len().saturating_sub(inner_height)).position(scroll);
        let scrollbar_area = Rect {
            x: chunks[1].x + chunks[1].width.saturating_sub(1),
            y: chunks[1].y + 1,
            width: 1,
            height: chunks[1].height.saturating_sub(2),
        };
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

fn draw_section_nav(frame: &mut Frame, detail: &DetailState, area: Rect) {
    let current = detail.current_section();
    let items: Vec<ListItem> = Section::all()
        .iter()
        .map(|section| {
            if *section == current {
                ListItem::new(Line::from(vec![
                    Span::styled("▌ ", Style::default().fg(Color::Yellow)),
                    Span::styled(section.nav_label(), Style::default().fg(Color::White).bold()),
                ]))
            } else {
                ListItem::new(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(section.nav_label(), Style::default().fg(Color::Gray)),
                ]))
            }
        })
        .collect();

    let nav = List::new(items).block(Block::default().title(" Sections ").borders(Borders::ALL));
    frame.render_widget(nav, area);
}

fn section_header(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("─── {} ───", title),
        Style::default().fg(Color::DarkGray),
    ))
}

fn sub_header(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", title),
        Style::default().fg(Color::Cyan),
    ))
}

fn placeholder(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", text),
        Style::default().fg(Color::DarkGray).italic(),
    ))
}

fn label(text: &str) -> Span<'static> {
    Span::raw(format!("  {:<width$}", text, width = LABEL_WIDTH))
}

/// Stack-owned prefix dimmed, the rest bold
fn owned_name_spans(name: &OwnedName) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    if let Some(prefix) = &name.prefix {
        spans.push(Span::styled(prefix.clone(), Style::default().fg(Color::DarkGray)));
    }
    spans.push(Span::styled(name.suffix.clone(), Style::default().bold()));
    spans
}

/// Lines of the detail page plus the first and last line of the focused row.
/// An open config panel belongs to its row, so the range covers its content.
pub(super) fn build_detail_lines(
    detail: &DetailState,
    secret_mask: &str,
) -> (Vec<Line<'static>>, Option<(usize, usize)>) {
    let d = &detail.details;
    let focused = detail.focused_row();
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut focused_line = None;
    let mut panel_end = None;

    let mut push_row = |lines: &mut Vec<Line<'static>>, row: DetailRow, mut line: Line<'static>| {
        if focused == Some(row) {
            focused_line = Some(lines.len());
            line.style = Style::default().bg(Color::DarkGray);
        }
        lines.push(line);
    };

    // Details
    lines.push(section_header(Section::Details.title()));
    let mut spans = vec![label("Docker Swarm Service Name")];
    spans.extend(owned_name_spans(&d.swarm_name));
    push_row(&mut lines, DetailRow::SwarmName, Line::from(spans));
    push_row(
        &mut lines,
        DetailRow::ServiceId,
        Line::from(vec![label("Docker Swarm Service ID"), Span::raw(d.id.clone())]),
    );
    lines.push(Line::from(""));

    // Source
    lines.push(section_header(Section::Source.title()));
    let mut spans = vec![
        label("Full Image"),
        Span::styled(d.image.repository.clone(), Style::default().bold()),
    ];
    if let Some(sha) = &d.image.sha {
        spans.push(Span::styled(
            format!("@{}", sha),
            Style::default().fg(Color::DarkGray),
        ));
    }
    push_row(&mut lines, DetailRow::Image, Line::from(spans));
    lines.push(Line::from(""));

    // Environment variables
    lines.push(section_header(Section::Environment.title()));
    push_row(
        &mut lines,
        DetailRow::EnvHeader,
        Line::from(vec![
            Span::styled(
                format!("  {}", d.variable_count_label()),
                Style::default().bold(),
            ),
            Span::styled("   [Y] Copy as .env", Style::default().fg(Color::DarkGray)),
        ]),
    );
    if d.environment.is_empty() {
        lines.push(placeholder(NO_VARIABLES));
    }
    let key_width = d
        .environment
        .iter()
        .map(|env| env.key.len())
        .max()
        .unwrap_or(0);
    for (i, env) in d.environment.iter().enumerate() {
        let revealed = detail.is_revealed(i);
        let value = mask_secret(&env.value, revealed, secret_mask).to_string();
        let value_style = if revealed {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        push_row(
            &mut lines,
            DetailRow::Env(i),
            Line::from(vec![
                Span::styled(
                    format!("  {:<width$}", env.key, width = key_width),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(" = "),
                Span::styled(value, value_style),
            ]),
        );
    }
    lines.push(Line::from(""));

    // Networking
    lines.push(section_header(Section::Networking.title()));
    lines.push(sub_header("Network aliases"));
    push_row(
        &mut lines,
        DetailRow::NetworkAlias,
        Line::from(vec![
            label("Environment alias"),
            Span::styled(d.network_alias_short(), Style::default().bold()),
        ]),
    );
    push_row(
        &mut lines,
        DetailRow::GlobalAlias,
        Line::from(vec![
            label("Global alias"),
            Span::styled(d.global_alias_short(), Style::default().bold()),
        ]),
    );
    lines.push(sub_header("URL Routes"));
    if d.urls.is_empty() {
        lines.push(placeholder(NO_URL_ROUTES));
    }
    for (i, url) in d.urls.iter().enumerate() {
        let mut spans = vec![Span::styled(
            format!("  {}", url.address()),
            Style::default().fg(Color::Blue).underlined(),
        )];
        if let Some(port) = url.port {
            spans.push(Span::styled(
                format!(" → {}", port),
                Style::default().fg(Color::DarkGray),
            ));
        }
        push_row(&mut lines, DetailRow::Url(i), Line::from(spans));
    }
    lines.push(sub_header("Exposed ports"));
    if d.ports.is_empty() {
        lines.push(placeholder(NO_EXPOSED_PORTS));
    }
    for (i, port) in d.ports.iter().enumerate() {
        push_row(
            &mut lines,
            DetailRow::Port(i),
            Line::from(vec![
                Span::styled(format!("  {}", port.published), Style::default().bold()),
                Span::raw(format!(" → {} ", port.target)),
                Span::styled(port.protocol.clone(), Style::default().fg(Color::DarkGray)),
            ]),
        );
    }
    lines.push(Line::from(""));

    // Health checks
    lines.push(section_header(Section::Health.title()));
    match &d.healthcheck {
        Some(hc) => {
            push_row(
                &mut lines,
                DetailRow::Healthcheck,
                Line::from(vec![
                    label("Command:"),
                    Span::styled(hc.command.clone(), Style::default().fg(Color::Green)),
                ]),
            );
            for row in &hc.rows {
                lines.push(Line::from(vec![
                    label(&format!("{}:", row.field.label())),
                    Span::raw(row.value.clone()),
                ]));
            }
        }
        None => lines.push(placeholder(NO_HEALTHCHECK)),
    }
    lines.push(Line::from(""));

    // Volumes
    lines.push(section_header(Section::Volumes.title()));
    if d.volumes.is_empty() {
        lines.push(placeholder(NO_VOLUMES));
    }
    for (i, volume) in d.volumes.iter().enumerate() {
        let mut spans = vec![Span::styled(
            format!("  [{}] ", volume.kind),
            Style::default().fg(Color::DarkGray),
        )];
        spans.extend(owned_name_spans(&volume.name));
        spans.push(Span::raw(format!(" → {}", volume.target)));
        spans.push(Span::styled(
            format!("  ({})", volume.access_label()),
            Style::default().fg(Color::DarkGray),
        ));
        push_row(&mut lines, DetailRow::Volume(i), Line::from(spans));
    }
    lines.push(Line::from(""));

    // Configs
    lines.push(section_header(Section::Configs.title()));
    if d.configs.is_empty() {
        lines.push(placeholder(NO_CONFIGS));
    }
    for (i, config) in d.configs.iter().enumerate() {
        let expanded = detail.expanded_config == Some(i);
        let marker = if expanded { "  ▾ " } else { "  ▸ " };
        let mut spans = vec![Span::raw(marker)];
        spans.extend(owned_name_spans(&config.name));
        spans.push(Span::raw(format!(" → {}", config.target)));
        push_row(&mut lines, DetailRow::Config(i), Line::from(spans));

        if expanded {
            for content_line in config.content.lines() {
                lines.push(Line::from(Span::styled(
                    format!("      {}", content_line),
                    Style::default().fg(Color::Gray),
                )));
            }
            if focused == Some(DetailRow::Config(i)) {
                panel_end = Some(lines.len() - 1);
            }
        }
    }

    let focus = focused_line.map(|first| (first, panel_end.unwrap_or(first)));
    (lines, focus)
}
