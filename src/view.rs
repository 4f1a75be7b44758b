use chrono_tz::Tz;

use crate::controller::DashboardState;
use crate::projector::{self, DisplayRow};

pub const TITLE: &str = "Recent games";
pub const FILTERS_LABEL: &str = "Filters";
pub const NEW_BET_LABEL: &str = "New Bet";
/// Route of the bet-creation flow.
pub const NEW_BET_ROUTE: &str = "/new-bet";

/// One selectable game in the filter bar.
#[derive(Clone, Debug, PartialEq)]
pub struct GameChip {
    pub id: i64,
    pub label: String,
    pub color: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FilterBar {
    Loading,
    Games(Vec<GameChip>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum BetList {
    Loading,
    Rows(Vec<DisplayRow>),
}

/// What the dashboard page shows for a given state.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardView {
    pub filters: FilterBar,
    pub bets: BetList,
}

impl DashboardView {
    pub fn from_state(state: &DashboardState) -> Self {
        let filters = if state.games_loading {
            FilterBar::Loading
        } else {
            let selected_id = state.selected_filter.as_ref().map(|g| g.id);
            FilterBar::Games(
                state
                    .games
                    .iter()
                    .map(|g| GameChip {
                        id: g.id,
                        label: g.type_field.clone(),
                        color: g.color.clone(),
                        selected: selected_id == Some(g.id),
                    })
                    .collect(),
            )
        };

        let bets = if state.bets_loading {
            BetList::Loading
        } else {
            BetList::Rows(state.bets.iter().map(|bet| projector::project(bet, &state.games)).collect())
        };

        Self { filters, bets }
    }

    /// Plain-text rendering, dates shown in `tz`.
    pub fn render_text(&self, tz: Tz) -> String {
        let mut out = String::new();
        out.push_str(TITLE);
        out.push('\n');

        out.push_str(FILTERS_LABEL);
        out.push_str(": ");
        match &self.filters {
            FilterBar::Loading => out.push_str("loading..."),
            FilterBar::Games(chips) => {
                let labels: Vec<String> = chips
                    .iter()
                    .map(|c| if c.selected { format!("[{}]", c.label) } else { c.label.clone() })
                    .collect();
                out.push_str(&labels.join(" "));
            }
        }
        out.push('\n');
        out.push_str(&format!("{} -> {}\n", NEW_BET_LABEL, NEW_BET_ROUTE));

        match &self.bets {
            BetList::Loading => out.push_str("\nloading...\n"),
            BetList::Rows(rows) => {
                for row in rows {
                    out.push('\n');
                    out.push_str(&format_row(row, tz));
                    out.push('\n');
                }
            }
        }
        out
    }
}

/// Format one bet row: numbers, then date and price, then the game name.
pub fn format_row(row: &DisplayRow, tz: Tz) -> String {
    let date_str = row
        .date
        .map(|dt| dt.with_timezone(&tz).format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "Invalid Date".to_string());
    format!("{}\n{} - ({})\n{} ({})", row.numbers, date_str, format_price(row.price), row.name, row.color)
}

/// `R$` amount with two decimals and a decimal comma.
pub fn format_price(price: f64) -> String {
    format!("R$ {:.2}", price).replace('.', ",")
}
