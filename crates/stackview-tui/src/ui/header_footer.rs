use super::*;

pub(super) fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(app.key.project.clone(), Style::default().fg(Color::Gray)),
        Span::styled(" / ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.key.env.clone(), Style::default().fg(Color::Gray)),
        Span::styled(" / ", Style::default().fg(Color::DarkGray)),
        Span::styled(app.key.stack.clone(), Style::default().fg(Color::White).bold()),
    ];
    if let Some(detail) = app.detail.as_ref() {
        spans.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            detail.details.name.clone(),
            Style::default().fg(Color::Yellow).bold(),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" stackview - Compose Stack Viewer ")
            .title_style(Style::default().fg(Color::Cyan).bold())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(header, area);
}

/// Key hints for the current view
pub(super) fn footer_hint(app: &App) -> &'static str {
    match app.view {
        View::StackOverview if app.overview.is_empty() => "r: Reload  ?: Help  q: Quit",
        View::StackOverview => "j/k: Navigate  Enter: Open service  r: Reload  ?: Help  q: Quit",
        View::ServiceDetail => {
            "j/k: Move  Tab: Next section  Enter: Reveal/Expand  y: Copy  Y: Copy .env  r: Reload  Esc: Back"
        }
        View::Help => "Press any key to close help",
    }
}

pub(super) fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status_message {
        Some(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(Span::styled(
            footer_hint(app),
            Style::default().fg(Color::DarkGray),
        )),
    };

    let footer = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

pub(super) fn draw_help(frame: &mut Frame, app: &App, area: Rect) {
    let mut text = vec![
        Line::from(""),
        Line::from(Span::styled("Global Keys", Style::default().bold().underlined())),
        Line::from(""),
        Line::from("  ?/F1        Show this help"),
        Line::from("  r/F5        Reload the stack snapshot"),
        Line::from("  q/Esc       Back (quit from the overview)"),
        Line::from("  Ctrl+C      Quit"),
        Line::from(""),
    ];

    if app.help_return == View::ServiceDetail {
        text.extend([
            Line::from(Span::styled("Service Page", Style::default().bold().underlined())),
            Line::from(""),
            Line::from("  j/Down      Next row"),
            Line::from("  k/Up        Previous row"),
            Line::from("  Tab         Jump to next section"),
            Line::from("  Shift+Tab   Jump to previous section"),
            Line::from("  Enter/Space Reveal a variable or open a config"),
            Line::from("  y/c         Copy the focused value"),
            Line::from("  Y           Copy all variables as .env"),
        ]);
    } else {
        text.extend([
            Line::from(Span::styled("Stack Overview", Style::default().bold().underlined())),
            Line::from(""),
            Line::from("  j/Down      Move selection down"),
            Line::from("  k/Up        Move selection up"),
            Line::from("  g/Home      Go to first service"),
            Line::from("  G/End       Go to last service"),
            Line::from("  Enter       Open service details"),
        ]);
    }

    let help = Paragraph::new(text)
        .block(Block::default().title(" Help ").borders(Borders::ALL))
        .wrap(Wrap { trim: false });

    let popup = popup_rect(70, 80, 56, 20, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(help, popup);
}
