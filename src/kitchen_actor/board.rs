//! # Kitchen Board
//!
//! Read model for the kitchen display: tickets grouped into an "All" tab plus one tab per
//! station, each ticket annotated with its age and staleness at a given instant.

use crate::model::{KitchenTicket, Staleness, Station, TicketStatus};
use chrono::{DateTime, Utc};

/// One tab of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StationTab {
    All,
    Station(Station),
}

impl StationTab {
    pub fn label(&self) -> &str {
        match self {
            StationTab::All => "All",
            StationTab::Station(station) => station.as_str(),
        }
    }

    pub fn matches(&self, ticket: &KitchenTicket) -> bool {
        match self {
            StationTab::All => true,
            StationTab::Station(station) => &ticket.station == station,
        }
    }
}

/// A ticket as rendered on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketView {
    pub ticket: KitchenTicket,
    pub elapsed_minutes: i64,
    pub staleness: Staleness,
}

impl TicketView {
    pub fn new(ticket: &KitchenTicket, now: DateTime<Utc>) -> Self {
        let elapsed_minutes = ticket.elapsed_minutes(now);
        Self {
            ticket: ticket.clone(),
            elapsed_minutes,
            staleness: Staleness::from_elapsed_minutes(elapsed_minutes),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoardTab {
    pub tab: StationTab,
    pub tickets: Vec<TicketView>,
}

impl BoardTab {
    /// Badge count shown on the tab.
    pub fn count(&self) -> usize {
        self.tickets.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KitchenBoard {
    pub generated_at: DateTime<Utc>,
    pub tabs: Vec<BoardTab>,
    by_status: [(TicketStatus, usize); 3],
}

impl KitchenBoard {
    /// Groups `tickets` (in the given order) under "All" and each of `stations`.
    ///
    /// Tickets for a station not in `stations` only appear under "All".
    pub fn build(tickets: &[KitchenTicket], stations: &[Station], now: DateTime<Utc>) -> Self {
        let views: Vec<TicketView> = tickets.iter().map(|t| TicketView::new(t, now)).collect();

        let tabs = std::iter::once(StationTab::All)
            .chain(stations.iter().cloned().map(StationTab::Station))
            .map(|tab| BoardTab {
                tickets: views
                    .iter()
                    .filter(|view| tab.matches(&view.ticket))
                    .cloned()
                    .collect(),
                tab,
            })
            .collect();

        let mut by_status = [
            (TicketStatus::Pending, 0),
            (TicketStatus::InProgress, 0),
            (TicketStatus::Ready, 0),
        ];
        for ticket in tickets {
            if let Some((_, count)) = by_status.iter_mut().find(|(s, _)| *s == ticket.status) {
                *count += 1;
            }
        }

        Self {
            generated_at: now,
            tabs,
            by_status,
        }
    }

    pub fn tab(&self, tab: &StationTab) -> Option<&BoardTab> {
        self.tabs.iter().find(|t| &t.tab == tab)
    }

    /// `(label, count)` for every tab, in tab order.
    pub fn counts(&self) -> Vec<(&str, usize)> {
        self.tabs.iter().map(|t| (t.tab.label(), t.count())).collect()
    }

    /// Tickets per status across every station: Pending, In-Progress, Ready.
    pub fn status_counts(&self) -> [(TicketStatus, usize); 3] {
        self.by_status
    }
}
