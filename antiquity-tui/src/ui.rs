use antiquity_core::model::{EraYear, PopulationType};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
};

use crate::app::{App, Field, Screen};

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();

    // Outer layout: title, main content, status line
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, content_area, status_area] = chunks else {
        return;
    };

    let header = Paragraph::new("antiquity – settlement populations of the ancient world")
        .block(Block::default().borders(Borders::ALL).title("Antiquity"));
    frame.render_widget(header, *header_area);

    match app.screen {
        Screen::Query => draw_query(frame, app, *content_area),
        Screen::GroupSelect => draw_group_select(frame, app, *content_area),
        Screen::Results => draw_results(frame, app, *content_area),
    }

    let nav_hint = match app.screen {
        Screen::Query => {
            "Tab/↑/↓ switch field · digits and - edit · g/→ groups · Enter run · q/Ctrl-C quit"
        }
        Screen::GroupSelect => {
            "↑/↓ move · Space toggle · c clear · Enter run · Left/Esc back · q/Ctrl-C quit"
        }
        Screen::Results => "[/] move current year · g groups · Esc/←/b back · q/Ctrl-C quit",
    };

    let status_text = if app.is_loading {
        format!("Loading… · {nav_hint}")
    } else if let Some(msg) = &app.error_message {
        format!("{msg} · {nav_hint}")
    } else {
        nav_hint.to_owned()
    };

    let status_style = if app.error_message.is_some() {
        Style::default().fg(Color::Red)
    } else if app.is_loading {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(status_style)
        .wrap(Wrap { trim: true });

    frame.render_widget(status, *status_area);
}

fn draw_query(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // start year
            Constraint::Length(3), // end year
            Constraint::Length(3), // current year
            Constraint::Min(0),    // summary
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [start_area, end_area, current_area, summary_area] = chunks else {
        return;
    };

    let fields = [
        (Field::StartYear, "Start year (e.g. -50 for 50 BCE)", &app.start_input, *start_area),
        (Field::EndYear, "End year", &app.end_input, *end_area),
        (Field::CurrentYear, "Current year", &app.current_input, *current_area),
    ];

    for (field, title, value, field_area) in fields {
        let style = if field == app.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let input = Paragraph::new(value.as_str())
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(style);
        frame.render_widget(input, field_area);
    }

    let summary = if app.selected_groups.is_empty() {
        String::from("No groups selected. Press g to pick population groups.")
    } else {
        match app.parse_years() {
            Ok(years) => format!(
                "{} from {} to {}, looking at {}",
                app.selected_groups.join(", "),
                EraYear(years.start),
                EraYear(years.end),
                EraYear(years.current)
            ),
            Err(_) => app.selected_groups.join(", "),
        }
    };

    let paragraph = Paragraph::new(summary)
        .block(Block::default().borders(Borders::ALL).title("Query"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, *summary_area);
}

fn draw_group_select(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items = app
        .groups
        .iter()
        .map(|group| {
            let marker = if app.is_selected(group) { "[x]" } else { "[ ]" };
            ListItem::new(format!("{marker} {group}"))
        })
        .collect::<Vec<ListItem<'_>>>();

    let title = format!(
        "Population groups ({} selected, Space to toggle)",
        app.selected_groups.len()
    );

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if !app.groups.is_empty() {
        state.select(Some(app.group_list_index));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_results(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let title = app.last_query.map_or_else(
        || String::from("Population distribution"),
        |years| {
            format!(
                "Population distribution in {} ({} – {})",
                EraYear(years.current),
                EraYear(years.start),
                EraYear(years.end)
            )
        },
    );

    if app.is_loading {
        let paragraph = Paragraph::new("Resolving places…")
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    if app.statistics.is_empty() {
        let paragraph = Paragraph::new("No statistics. Select at least one population group.")
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [stats_area, markers_area] = chunks else {
        return;
    };

    let stat_rows = app.statistics.iter().map(|stat| {
        Row::new(vec![
            Cell::from(stat.group.clone()),
            Cell::from(format_population(stat.population)),
            Cell::from(format!("{:.1}%", stat.percentage)),
            Cell::from(stat.region.clone()),
            Cell::from(format!("{:+.1}%", stat.growth)),
        ])
    });

    let stats_table = Table::new(
        stat_rows,
        [
            Constraint::Min(16),
            Constraint::Length(12),
            Constraint::Length(9),
            Constraint::Length(16),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new(vec!["Population Group", "Population", "Share", "Region", "Growth"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().borders(Borders::ALL).title(title))
    .column_spacing(1);

    frame.render_widget(stats_table, *stats_area);

    let marker_rows = app.settlements.iter().map(|settlement| {
        Row::new(vec![
            Cell::from(settlement.name.clone()),
            Cell::from(type_label(settlement.population_type)),
            Cell::from(format_population(settlement.estimated_population)),
            Cell::from(settlement.active.to_string()),
            Cell::from(format!(
                "{:.2}, {:.2}",
                settlement.coordinate.latitude, settlement.coordinate.longitude
            )),
            Cell::from(settlement.confidence.to_string()),
        ])
        .style(Style::default().fg(type_color(settlement.population_type)))
    });

    let markers_table = Table::new(
        marker_rows,
        [
            Constraint::Min(14),
            Constraint::Length(20),
            Constraint::Length(10),
            Constraint::Length(20),
            Constraint::Length(14),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new(vec!["Settlement", "Type", "Population", "Active", "Lat, Lon", "Conf."])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Map markers ({})", app.settlements.len())),
    )
    .column_spacing(1);

    frame.render_widget(markers_table, *markers_area);
}

/// Compact population figure: `1.2M`, `80.0K` or the plain number.
/// Smallest population that rounds to `1.0M` at one decimal.
const MILLION_THRESHOLD: u64 = 999_950;

fn format_population(population: u64) -> String {
    if population >= MILLION_THRESHOLD {
        let tenths = (population + 50_000) / 100_000;
        format!("{}.{}M", tenths / 10, tenths % 10)
    } else if population >= 1_000 {
        let tenths = (population + 50) / 100;
        format!("{}.{}K", tenths / 10, tenths % 10)
    } else {
        population.to_string()
    }
}

fn type_label(population_type: PopulationType) -> &'static str {
    match population_type {
        PopulationType::Roman => "Roman Settlement",
        PopulationType::Jewish => "Jewish Settlement",
        PopulationType::Mixed => "Mixed Population",
        PopulationType::Other => "Other",
    }
}

fn type_color(population_type: PopulationType) -> Color {
    match population_type {
        PopulationType::Roman => Color::LightRed,
        PopulationType::Jewish => Color::Cyan,
        PopulationType::Mixed => Color::LightBlue,
        PopulationType::Other => Color::Green,
    }
}
