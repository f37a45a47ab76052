use std::sync::Arc;

use antiquity_core::{
    model::{GroupStatistic, Settlement},
    service::SettlementService,
};

use crate::config::QueryConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Query,
    GroupSelect,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    StartYear,
    EndYear,
    CurrentYear,
}

impl Field {
    pub(crate) fn next(self) -> Self {
        match self {
            Field::StartYear => Field::EndYear,
            Field::EndYear => Field::CurrentYear,
            Field::CurrentYear => Field::StartYear,
        }
    }

    pub(crate) fn previous(self) -> Self {
        match self {
            Field::StartYear => Field::CurrentYear,
            Field::EndYear => Field::StartYear,
            Field::CurrentYear => Field::EndYear,
        }
    }
}

/// Parsed year inputs of the query screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct QueryYears {
    pub start: i32,
    pub end: i32,
    pub current: i32,
}

pub(crate) struct App {
    pub service: Arc<SettlementService>,

    pub screen: Screen,
    pub focused: Field,
    pub start_input: String,
    pub end_input: String,
    pub current_input: String,

    pub groups: &'static [&'static str],
    pub group_list_index: usize,
    pub selected_groups: Vec<String>,

    pub statistics: Vec<GroupStatistic>,
    pub settlements: Vec<Settlement>,
    pub last_query: Option<QueryYears>,

    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl App {
    pub(crate) fn new(service: Arc<SettlementService>, defaults: QueryConfig) -> Self {
        let groups = service.group_catalogue();
        Self {
            service,
            screen: Screen::Query,
            focused: Field::StartYear,
            start_input: defaults.start_year.to_string(),
            end_input: defaults.end_year.to_string(),
            current_input: defaults.current_year.to_string(),
            groups,
            group_list_index: 0,
            selected_groups: Vec::new(),
            statistics: Vec::new(),
            settlements: Vec::new(),
            last_query: None,
            is_loading: false,
            error_message: None,
        }
    }

    pub(crate) fn focused_input_mut(&mut self) -> &mut String {
        match self.focused {
            Field::StartYear => &mut self.start_input,
            Field::EndYear => &mut self.end_input,
            Field::CurrentYear => &mut self.current_input,
        }
    }

    /// Select or deselect the group under the cursor, keeping selection order.
    pub(crate) fn toggle_current_group(&mut self) {
        let Some(&group) = self.groups.get(self.group_list_index) else {
            return;
        };
        if let Some(pos) = self.selected_groups.iter().position(|selected| selected == group) {
            self.selected_groups.remove(pos);
        } else {
            self.selected_groups.push(group.to_owned());
        }
    }

    pub(crate) fn is_selected(&self, group: &str) -> bool {
        self.selected_groups.iter().any(|selected| selected == group)
    }

    pub(crate) fn parse_years(&self) -> Result<QueryYears, String> {
        Ok(QueryYears {
            start: parse_year("Start year", &self.start_input)?,
            end: parse_year("End year", &self.end_input)?,
            current: parse_year("Current year", &self.current_input)?,
        })
    }

    /// Move the current year by `delta`, staying inside the start/end range.
    pub(crate) fn shift_current_year(&mut self, delta: i32) -> Result<(), String> {
        let years = self.parse_years()?;
        let (low, high) = (years.start.min(years.end), years.start.max(years.end));
        let shifted = years.current.saturating_add(delta).clamp(low, high);
        self.current_input = shifted.to_string();
        Ok(())
    }
}

fn parse_year(label: &str, input: &str) -> Result<i32, String> {
    input
        .trim()
        .parse()
        .map_err(|_err| format!("{label} must be a whole number (negative for BCE)"))
}
