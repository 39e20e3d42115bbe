use super::*;

pub(super) fn draw_stack_overview(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.overview.name))
        .borders(Borders::ALL);

    if app.overview.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No services in this stack",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from("  Press r to reload the snapshot"),
        ])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("SERVICE"),
        Cell::from("SWARM NAME"),
        Cell::from("IMAGE"),
        Cell::from("ENV"),
        Cell::from("URLS"),
        Cell::from("VOLUMES"),
        Cell::from("HEALTH"),
    ])
    .style(Style::default().fg(Color::DarkGray).bold());

    let rows: Vec<Row> = app
        .overview
        .services
        .iter()
        .map(|s| {
            let health = if s.has_healthcheck { "yes" } else { "-" };
            Row::new(vec![
                Cell::from(s.name.clone()).style(Style::default().bold()),
                Cell::from(s.swarm_name.clone()),
                Cell::from(s.image.clone()),
                Cell::from(s.env_count.to_string()),
                Cell::from(s.url_count.to_string()),
                Cell::from(s.volume_count.to_string()),
                Cell::from(health),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(16),
        Constraint::Percentage(24),
        Constraint::Percentage(30),
        Constraint::Length(5),
        Constraint::Length(6),
        Constraint::Length(9),
        Constraint::Length(7),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(table, area, &mut app.overview_table_state);
}
