//! UI rendering for the Fila TUI

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Row, Table, Tabs, Wrap},
};
use tui_input::Input;

use crate::app::{App, Screen};
use crate::views::admin::{AdminMode, AdminTab, FilterField, StaffForm};
use crate::views::barber::BarberTab;
use crate::views::booking::{BookingStep, ConfirmField};
use crate::views::login::LoginField;
use crate::views::queue_status::{StatusTone, ahead_message, status_label, status_tone};
use shared::models::{QueueStatus, Role};

/// Main UI rendering function
pub fn draw(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Booking => draw_booking(frame, app),
        Screen::QueueStatus => draw_queue_status(frame, app),
        Screen::Login => draw_login(frame, app),
        Screen::Barber => draw_barber(frame, app),
        Screen::Admin => draw_admin(frame, app),
    }
}

fn tone_color(tone: StatusTone) -> Color {
    match tone {
        StatusTone::Pending => Color::Yellow,
        StatusTone::Active => Color::Green,
        StatusTone::Completed => Color::DarkGray,
        StatusTone::Error => Color::Red,
    }
}

fn money(value: f64) -> String {
    format!("R$ {value:.2}")
}

fn status_span(status: QueueStatus) -> Span<'static> {
    Span::styled(
        status_label(status),
        Style::default().fg(tone_color(status_tone(status))),
    )
}

/// Three-row frame: header, content, footer hints
fn screen_chunks(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(area)
}

fn draw_header(frame: &mut Frame, area: Rect, title: &str, subtitle: Line) {
    let mut spans = vec![
        Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("| "),
    ];
    spans.extend(subtitle.spans);

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(header, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, hints: &str, notice: Option<&str>) {
    let line = match notice {
        Some(notice) => Line::from(Span::styled(
            format!(" {notice} "),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(Span::styled(
            format!(" {hints} "),
            Style::default().fg(Color::DarkGray),
        )),
    };
    let footer = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// Bordered single-line text input; places the terminal cursor when focused
fn draw_input(frame: &mut Frame, area: Rect, title: &str, input: &Input, focused: bool) {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };

    let width = area.width.max(3) - 3;
    let scroll = input.visual_scroll(width as usize);
    let widget = Paragraph::new(input.value())
        .style(style)
        .scroll((0, scroll as u16))
        .block(Block::default().borders(Borders::ALL).title(format!(" {title} ")));
    frame.render_widget(widget, area);

    if focused {
        frame.set_cursor_position((
            area.x + ((input.visual_cursor().max(scroll) - scroll) as u16) + 1,
            area.y + 1,
        ));
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

// ========== Booking wizard ==========

fn draw_booking(frame: &mut Frame, app: &App) {
    let chunks = screen_chunks(frame.area());
    let view = &app.booking;

    let step = match view.step {
        BookingStep::Services => "Step 1/3 · Pick your services",
        BookingStep::Barbers => "Step 2/3 · Pick a barber",
        BookingStep::Confirm => "Step 3/3 · Your details",
    };
    draw_header(
        frame,
        chunks[0],
        "FILA · Barbershop Queue",
        Line::from(Span::styled(step, Style::default().fg(Color::White))),
    );

    match view.step {
        BookingStep::Services => draw_booking_services(frame, app, chunks[1]),
        BookingStep::Barbers => draw_booking_barbers(frame, app, chunks[1]),
        BookingStep::Confirm => draw_booking_confirm(frame, app, chunks[1]),
    }

    let hints = match view.step {
        BookingStep::Services => "↑/↓ move · space select · enter continue · r refresh · l staff login · q quit",
        BookingStep::Barbers => "↑/↓ move · enter choose · esc back",
        BookingStep::Confirm => "tab switch field · enter join the queue · esc back",
    };
    draw_footer(frame, chunks[2], hints, view.notice.as_deref());
}

fn draw_booking_services(frame: &mut Frame, app: &App, area: Rect) {
    let view = &app.booking;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(area);

    let items: Vec<ListItem> = if !view.services_loaded {
        vec![ListItem::new("  Loading services...")]
    } else if let Some(error) = &view.services_error {
        vec![ListItem::new(Line::from(Span::styled(
            format!("  Could not load services: {error}"),
            Style::default().fg(Color::Red),
        )))]
    } else if view.services.is_empty() {
        vec![ListItem::new("  No services available right now.")]
    } else {
        view.services
            .iter()
            .enumerate()
            .map(|(index, service)| {
                let mark = if view.is_selected(service.id) { "[x]" } else { "[ ]" };
                let style = if index == view.cursor {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("  {mark} {:<24}", service.name), style),
                    Span::styled(
                        format!("{:>10}  {:>3} min", money(service.price), service.avg_duration),
                        Style::default().fg(Color::Cyan),
                    ),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Services "),
    );
    frame.render_widget(list, chunks[0]);

    let totals = Paragraph::new(Line::from(vec![
        Span::raw(" Total: "),
        Span::styled(
            money(view.total_price()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" / {} min", view.total_duration()),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(totals, chunks[1]);
}

fn draw_booking_barbers(frame: &mut Frame, app: &App, area: Rect) {
    let view = &app.booking;

    let items: Vec<ListItem> = if !view.barbers_loaded {
        vec![ListItem::new("  Loading barbers...")]
    } else if view.barbers.is_empty() {
        vec![ListItem::new("  No barbers available right now.")]
    } else {
        view.barbers
            .iter()
            .enumerate()
            .map(|(index, barber)| {
                let mark = if view.selected_barber == Some(barber.id) { "(o)" } else { "( )" };
                let style = if index == view.barber_cursor {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let (badge, badge_color) = if barber.is_online {
                    ("Online", Color::Green)
                } else {
                    ("Offline", Color::DarkGray)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("  {mark} {:<24}", barber.name), style),
                    Span::styled(badge, Style::default().fg(badge_color)),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Barbers "),
    );
    frame.render_widget(list, area);
}

fn draw_booking_confirm(frame: &mut Frame, app: &App, area: Rect) {
    let view = &app.booking;
    let card = centered_rect(48, 12, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(card);

    let summary = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(
            money(view.total_price()),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!(" · {} min", view.total_duration()),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL).title(" Your booking "));
    frame.render_widget(summary, chunks[0]);

    draw_input(
        frame,
        chunks[1],
        "Full name",
        &view.name,
        view.focus == ConfirmField::Name,
    );
    draw_input(
        frame,
        chunks[2],
        "Phone",
        &view.phone,
        view.focus == ConfirmField::Phone,
    );

    let action = if view.submitting {
        Span::styled("Joining the queue...", Style::default().fg(Color::Yellow))
    } else if view.can_submit() {
        Span::styled(
            "Press Enter to join the queue",
            Style::default().fg(Color::Green),
        )
    } else {
        Span::styled(
            "Fill in your name and phone",
            Style::default().fg(Color::DarkGray),
        )
    };
    let action = Paragraph::new(Line::from(action)).alignment(Alignment::Center);
    frame.render_widget(action, chunks[3]);
}

// ========== Queue status ==========

fn draw_queue_status(frame: &mut Frame, app: &App) {
    let chunks = screen_chunks(frame.area());
    let view = &app.queue_status;

    draw_header(
        frame,
        chunks[0],
        "FILA · Queue Status",
        Line::from(Span::styled(
            format!("entry #{}", view.entry_id),
            Style::default().fg(Color::White),
        )),
    );

    let card = centered_rect(52, 10, chunks[1]);

    if view.load_failed() {
        let lines = vec![
            Line::from(Span::styled(
                "✗ Could not load your booking",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::raw(
                view.error.clone().unwrap_or_default(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to return to the start",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let card_widget = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title(" Error "));
        frame.render_widget(card_widget, card);
    } else if let Some(item) = &view.item {
        let mut lines = vec![
            Line::from(Span::styled(
                status_label(item.status),
                Style::default()
                    .fg(tone_color(status_tone(item.status)))
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        if item.status == QueueStatus::Waiting {
            let ahead = item.people_ahead.unwrap_or_default();
            lines.push(Line::from(Span::styled(
                ahead_message(ahead),
                Style::default().fg(Color::White),
            )));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![
            Span::styled("Client: ", Style::default().fg(Color::DarkGray)),
            Span::raw(item.client_name.clone()),
        ]));
        if let Some(updated) = view.last_update {
            lines.push(Line::from(Span::styled(
                format!("updated {}", updated.format("%H:%M:%S")),
                Style::default().fg(Color::DarkGray),
            )));
        }

        let card_widget = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Your place in line "));
        frame.render_widget(card_widget, card);
    } else {
        let card_widget = Paragraph::new("Loading...")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(card_widget, card);
    }

    draw_footer(frame, chunks[2], "esc/b back to start · q quit", None);
}

// ========== Login ==========

fn draw_login(frame: &mut Frame, app: &App) {
    let chunks = screen_chunks(frame.area());
    let view = &app.login;

    draw_header(
        frame,
        chunks[0],
        "FILA · Staff Login",
        Line::from(Span::styled(
            "barbers and admins only",
            Style::default().fg(Color::White),
        )),
    );

    let card = centered_rect(44, 11, chunks[1]);
    let form = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .split(card);

    draw_input(
        frame,
        form[0],
        "Username",
        &view.username,
        view.focus == Some(LoginField::Username),
    );

    // The password renders masked; the input itself keeps the real value
    let masked = Input::new("•".repeat(view.password.value().chars().count()));
    draw_input(
        frame,
        form[1],
        "Password",
        &masked,
        view.focus == Some(LoginField::Password),
    );

    let status = if view.submitting {
        Line::from(Span::styled("Signing in...", Style::default().fg(Color::Yellow)))
    } else if let Some(error) = &view.error {
        Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red)))
    } else {
        Line::from(Span::styled(
            "Press Enter to sign in",
            Style::default().fg(Color::DarkGray),
        ))
    };
    frame.render_widget(Paragraph::new(status).alignment(Alignment::Center), form[2]);

    draw_footer(frame, chunks[2], "tab switch field · enter sign in · esc back", None);
}

// ========== Barber dashboard ==========

fn draw_barber(frame: &mut Frame, app: &App) {
    let chunks = screen_chunks(frame.area());
    let view = &app.barber;

    let Some(session) = &app.session else {
        return;
    };
    let user = session.user();

    let (badge, badge_color) = if view.toggling {
        ("...", Color::Yellow)
    } else if view.is_online(user) {
        ("Online", Color::Green)
    } else {
        ("Offline", Color::Red)
    };
    draw_header(
        frame,
        chunks[0],
        "FILA · Barber",
        Line::from(vec![
            Span::styled(user.name.clone(), Style::default().fg(Color::White)),
            Span::raw("  "),
            Span::styled(badge, Style::default().fg(badge_color).add_modifier(Modifier::BOLD)),
        ]),
    );

    let content = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(chunks[1]);

    let tabs = Tabs::new(vec!["My Queue", "My Results"])
        .select(match view.tab {
            BarberTab::Queue => 0,
            BarberTab::Results => 1,
        })
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, content[0]);

    match view.tab {
        BarberTab::Queue => draw_barber_queue(frame, app, content[1]),
        BarberTab::Results => draw_barber_results(frame, app, content[1]),
    }

    let hints = match view.tab {
        BarberTab::Queue => "↑/↓ move · enter call/finish · x cancel · o toggle online · tab results · esc logout",
        BarberTab::Results => "d change period · o toggle online · tab queue · esc logout",
    };
    draw_footer(frame, chunks[2], hints, view.notice.as_deref());
}

fn draw_barber_queue(frame: &mut Frame, app: &App, area: Rect) {
    let view = &app.barber;

    let items: Vec<ListItem> = if !view.queue_loaded {
        vec![ListItem::new("  Loading queue...")]
    } else if view.queue.is_empty() {
        vec![ListItem::new("  No clients in the queue.")]
    } else {
        view.queue
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let style = if index == view.cursor {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let service = item
                    .service
                    .as_ref()
                    .map(|s| s.name.clone())
                    .unwrap_or_else(|| format!("service #{}", item.service_id));
                ListItem::new(Line::from(vec![
                    Span::styled(format!("  {:<20}", item.client_name), style),
                    Span::styled(format!("{:<20}", service), Style::default().fg(Color::Cyan)),
                    status_span(item.status),
                ]))
            })
            .collect()
    };

    let title = match &view.queue_error {
        Some(error) => format!(" Queue (stale: {error}) "),
        None => " Queue ".to_string(),
    };
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

fn draw_barber_results(frame: &mut Frame, app: &App, area: Rect) {
    let view = &app.barber;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(1)])
        .split(area);

    let Some(stats) = &view.stats else {
        let text = if view.stats_loading { "Loading stats..." } else { "No stats yet." };
        let placeholder = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(format!(
                " Last {} days ",
                view.stats_days
            )));
        frame.render_widget(placeholder, area);
        return;
    };

    draw_summary_tiles(
        frame,
        chunks[0],
        &format!(" Last {} days ", view.stats_days),
        stats.summary.total_revenue,
        stats.summary.total_services,
        stats.summary.average_ticket,
    );

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let daily_rows: Vec<Row> = stats
        .daily_history
        .iter()
        .map(|point| {
            Row::new(vec![
                point.date.clone(),
                money(point.revenue),
                point.services.to_string(),
            ])
        })
        .collect();
    let daily = Table::new(
        daily_rows,
        [
            Constraint::Length(12),
            Constraint::Length(12),
            Constraint::Length(8),
        ],
    )
    .header(Row::new(vec!["Day", "Revenue", "Cuts"]).style(Style::default().fg(Color::DarkGray)))
    .block(Block::default().borders(Borders::ALL).title(" By day "));
    frame.render_widget(daily, halves[0]);

    let service_rows: Vec<Row> = stats
        .service_breakdown
        .iter()
        .map(|slice| {
            Row::new(vec![
                slice.service_name.clone(),
                money(slice.revenue),
                slice.services.to_string(),
            ])
        })
        .collect();
    let services = Table::new(
        service_rows,
        [
            Constraint::Min(14),
            Constraint::Length(12),
            Constraint::Length(8),
        ],
    )
    .header(Row::new(vec!["Service", "Revenue", "Cuts"]).style(Style::default().fg(Color::DarkGray)))
    .block(Block::default().borders(Borders::ALL).title(" By service "));
    frame.render_widget(services, halves[1]);
}

fn draw_summary_tiles(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    revenue: f64,
    services: i64,
    average: f64,
) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let revenue_tile = Paragraph::new(Line::from(Span::styled(
        money(revenue),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(format!("{title}· Revenue ")));
    frame.render_widget(revenue_tile, tiles[0]);

    let services_tile = Paragraph::new(Line::from(Span::styled(
        services.to_string(),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(" Services "));
    frame.render_widget(services_tile, tiles[1]);

    let average_tile = Paragraph::new(Line::from(Span::styled(
        money(average),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(" Avg ticket "));
    frame.render_widget(average_tile, tiles[2]);
}

// ========== Admin dashboard ==========

fn draw_admin(frame: &mut Frame, app: &App) {
    let chunks = screen_chunks(frame.area());
    let view = &app.admin;

    let name = app
        .session
        .as_ref()
        .map(|s| s.user().name.clone())
        .unwrap_or_default();
    draw_header(
        frame,
        chunks[0],
        "FILA · Admin",
        Line::from(Span::styled(name, Style::default().fg(Color::White))),
    );

    let content = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(chunks[1]);

    let tabs = Tabs::new(vec!["Overview", "Services", "Staff"])
        .select(match view.tab {
            AdminTab::Overview => 0,
            AdminTab::Services => 1,
            AdminTab::Staff => 2,
        })
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, content[0]);

    match view.tab {
        AdminTab::Overview => draw_admin_overview(frame, app, content[1]),
        AdminTab::Services => draw_admin_services(frame, app, content[1]),
        AdminTab::Staff => draw_admin_staff(frame, app, content[1]),
    }

    let hints = match (view.tab, view.mode) {
        (AdminTab::Overview, AdminMode::Normal) => {
            "e edit dates · ←/→ service filter · r refresh · 1/2/3 tabs · esc logout"
        }
        (AdminTab::Overview, AdminMode::Editing) => "tab switch date · enter apply · esc cancel",
        (_, AdminMode::Normal) => "↑/↓ move · n new · e edit · d delete · 1/2/3 tabs · esc logout",
        (_, AdminMode::Editing) => "tab next field · enter save · esc cancel",
    };
    draw_footer(frame, chunks[2], hints, view.notice.as_deref());
}

fn draw_admin_overview(frame: &mut Frame, app: &App, area: Rect) {
    let view = &app.admin;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(1),
        ])
        .split(area);

    // Filters line
    let filters = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16),
            Constraint::Length(16),
            Constraint::Min(16),
        ])
        .split(chunks[0]);

    let editing = view.mode == AdminMode::Editing;
    draw_input(
        frame,
        filters[0],
        "From",
        &view.start,
        editing && view.filter_focus == FilterField::Start,
    );
    draw_input(
        frame,
        filters[1],
        "To",
        &view.end,
        editing && view.filter_focus == FilterField::End,
    );

    let filter_name = match view.service_filter {
        None => "All services".to_string(),
        Some(id) => view
            .services
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| format!("service #{id}")),
    };
    let service_filter = Paragraph::new(Line::from(Span::styled(
        filter_name,
        Style::default().fg(Color::Cyan),
    )))
    .block(Block::default().borders(Borders::ALL).title(" Service "));
    frame.render_widget(service_filter, filters[2]);

    match &view.stats {
        Some(stats) => {
            draw_summary_tiles(
                frame,
                chunks[1],
                " ",
                stats.summary.total_revenue,
                stats.summary.total_services,
                stats.summary.average_ticket,
            );

            let thirds = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(34),
                    Constraint::Percentage(33),
                    Constraint::Percentage(33),
                ])
                .split(chunks[2]);

            let daily_rows: Vec<Row> = stats
                .daily_history
                .iter()
                .map(|p| Row::new(vec![p.date.clone(), money(p.revenue), p.services.to_string()]))
                .collect();
            let daily = Table::new(
                daily_rows,
                [
                    Constraint::Length(12),
                    Constraint::Length(12),
                    Constraint::Length(6),
                ],
            )
            .header(Row::new(vec!["Day", "Revenue", "Cuts"]).style(Style::default().fg(Color::DarkGray)))
            .block(Block::default().borders(Borders::ALL).title(" By day "));
            frame.render_widget(daily, thirds[0]);

            let service_rows: Vec<Row> = stats
                .by_service
                .iter()
                .map(|s| Row::new(vec![s.service_name.clone(), money(s.revenue), s.services.to_string()]))
                .collect();
            let by_service = Table::new(
                service_rows,
                [
                    Constraint::Min(12),
                    Constraint::Length(12),
                    Constraint::Length(6),
                ],
            )
            .header(Row::new(vec!["Service", "Revenue", "Cuts"]).style(Style::default().fg(Color::DarkGray)))
            .block(Block::default().borders(Borders::ALL).title(" By service "));
            frame.render_widget(by_service, thirds[1]);

            let barber_rows: Vec<Row> = stats
                .by_barber
                .iter()
                .map(|b| Row::new(vec![b.barber_name.clone(), money(b.revenue), b.services.to_string()]))
                .collect();
            let by_barber = Table::new(
                barber_rows,
                [
                    Constraint::Min(12),
                    Constraint::Length(12),
                    Constraint::Length(6),
                ],
            )
            .header(Row::new(vec!["Barber", "Revenue", "Cuts"]).style(Style::default().fg(Color::DarkGray)))
            .block(Block::default().borders(Borders::ALL).title(" By barber "));
            frame.render_widget(by_barber, thirds[2]);
        }
        None => {
            let text = if view.stats_loading {
                "Loading stats...".to_string()
            } else if let Some(error) = &view.stats_error {
                format!("Could not load stats: {error}")
            } else {
                "No stats yet.".to_string()
            };
            let placeholder = Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(placeholder, chunks[2]);
        }
    }
}

fn draw_admin_services(frame: &mut Frame, app: &App, area: Rect) {
    let view = &app.admin;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    // Creation/edit form
    let form = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),
            Constraint::Length(14),
            Constraint::Length(14),
        ])
        .split(chunks[0]);

    let editing = view.mode == AdminMode::Editing;
    let form_title = match view.service_form.editing {
        Some(id) => format!("Name (editing #{id})"),
        None => "Name (new)".to_string(),
    };
    draw_input(
        frame,
        form[0],
        &form_title,
        &view.service_form.name,
        editing && view.service_form.focus == 0,
    );
    draw_input(
        frame,
        form[1],
        "Price",
        &view.service_form.price,
        editing && view.service_form.focus == 1,
    );
    draw_input(
        frame,
        form[2],
        "Minutes",
        &view.service_form.duration,
        editing && view.service_form.focus == 2,
    );

    let items: Vec<ListItem> = if !view.services_loaded {
        vec![ListItem::new("  Loading services...")]
    } else if view.services.is_empty() {
        vec![ListItem::new("  No services registered.")]
    } else {
        view.services
            .iter()
            .enumerate()
            .map(|(index, service)| {
                let style = if index == view.service_cursor && !editing {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let active = if service.is_active { "" } else { " (inactive)" };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("  {:<24}", service.name), style),
                    Span::styled(
                        format!("{:>10} · {:>3} min{active}", money(service.price), service.avg_duration),
                        Style::default().fg(Color::Cyan),
                    ),
                ]))
            })
            .collect()
    };
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Services "));
    frame.render_widget(list, chunks[1]);
}

fn draw_admin_staff(frame: &mut Frame, app: &App, area: Rect) {
    let view = &app.admin;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let form = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(16),
            Constraint::Length(16),
            Constraint::Length(16),
            Constraint::Length(12),
        ])
        .split(chunks[0]);

    let editing = view.mode == AdminMode::Editing;
    let form_title = match view.staff_form.editing {
        Some(id) => format!("Name (editing #{id})"),
        None => "Name (new)".to_string(),
    };
    draw_input(
        frame,
        form[0],
        &form_title,
        &view.staff_form.name,
        editing && view.staff_form.focus == 0,
    );
    draw_input(
        frame,
        form[1],
        "Username",
        &view.staff_form.username,
        editing && view.staff_form.focus == 1,
    );
    let masked = Input::new("•".repeat(view.staff_form.password.value().chars().count()));
    draw_input(
        frame,
        form[2],
        "Password",
        &masked,
        editing && view.staff_form.focus == 2,
    );

    let role_focused = editing && view.staff_form.focus == StaffForm::ROLE_FIELD;
    let role_style = if role_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    let role = Paragraph::new(Line::from(Span::styled(
        match view.staff_form.role {
            Role::Admin => "Admin",
            Role::Barber => "Barber",
        },
        role_style,
    )))
    .block(Block::default().borders(Borders::ALL).title(" Role "));
    frame.render_widget(role, form[3]);

    let items: Vec<ListItem> = if !view.users_loaded {
        vec![ListItem::new("  Loading staff...")]
    } else if view.users.is_empty() {
        vec![ListItem::new("  No staff registered.")]
    } else {
        view.users
            .iter()
            .enumerate()
            .map(|(index, user)| {
                let style = if index == view.user_cursor && !editing {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let role = match user.role {
                    Role::Admin => "ADMIN",
                    Role::Barber => "BARBER",
                };
                let (badge, badge_color) = if user.is_online {
                    ("online", Color::Green)
                } else {
                    ("offline", Color::DarkGray)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("  {:<22}", user.name), style),
                    Span::styled(format!("@{:<14}", user.username), Style::default().fg(Color::Cyan)),
                    Span::styled(format!("{role:<8}"), Style::default().fg(Color::Magenta)),
                    Span::styled(badge, Style::default().fg(badge_color)),
                ]))
            })
            .collect()
    };
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Staff "));
    frame.render_widget(list, chunks[1]);
}
