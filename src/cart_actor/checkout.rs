//! Order numbering and kitchen routing used by checkout.

use crate::model::{OrderItem, Station, TicketCreate, TicketItem};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Shared `#N` order number sequence.
#[derive(Debug, Clone)]
pub struct OrderNumbers {
    next: Arc<AtomicU32>,
}

impl OrderNumbers {
    pub fn starting_at(first: u32) -> Self {
        Self {
            next: Arc::new(AtomicU32::new(first)),
        }
    }

    /// Claims the next order number.
    pub fn next(&self) -> String {
        format!("#{}", self.next.fetch_add(1, Ordering::SeqCst))
    }
}

/// Splits cart lines into one ticket per station.
///
/// Tickets come out in the order each station first appears in the cart; lines keep their
/// cart order within a ticket.
pub fn route_to_stations(
    order_number: &str,
    lines: &[OrderItem],
    table: Option<&str>,
    placed_at: DateTime<Utc>,
) -> Vec<TicketCreate> {
    let mut by_station: IndexMap<&Station, Vec<TicketItem>> = IndexMap::new();
    for line in lines {
        by_station.entry(&line.station).or_default().push(TicketItem {
            name: line.name.clone(),
            quantity: line.quantity,
            notes: line.notes.clone(),
        });
    }

    by_station
        .into_iter()
        .map(|(station, items)| TicketCreate {
            order_number: order_number.to_string(),
            items,
            station: station.clone(),
            table: table.map(str::to_string),
            created_at: Some(placed_at),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LineId, MenuItemId};
    use chrono::TimeZone;

    fn line(id: u32, name: &str, station: Station) -> OrderItem {
        OrderItem {
            id: LineId(id),
            menu_item_id: MenuItemId(format!("m{id}")),
            name: name.into(),
            quantity: id,
            price: 100.0,
            station,
            notes: None,
        }
    }

    #[test]
    fn test_order_numbers_increment() {
        let numbers = OrderNumbers::starting_at(1024);
        let shared = numbers.clone();
        assert_eq!(numbers.next(), "#1024");
        assert_eq!(shared.next(), "#1025");
    }

    #[test]
    fn test_one_ticket_per_station_in_first_seen_order() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 13, 0, 0).unwrap();
        let lines = vec![
            line(1, "Garlic Naan", Station::Tandoor),
            line(2, "Dal Makhani", Station::MainKitchen),
            line(3, "Tandoori Roti", Station::Tandoor),
        ];

        let tickets = route_to_stations("#1030", &lines, Some("T4"), at);

        assert_eq!(tickets.len(), 2);
        assert_eq!(tickets[0].station, Station::Tandoor);
        let names: Vec<&str> = tickets[0].items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Garlic Naan", "Tandoori Roti"]);
        assert_eq!(tickets[1].station, Station::MainKitchen);
        assert!(tickets
            .iter()
            .all(|t| t.order_number == "#1030" && t.table.as_deref() == Some("T4")));
        assert_eq!(tickets[0].created_at, Some(at));
    }
}
