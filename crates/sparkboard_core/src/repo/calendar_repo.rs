//! Calendar event list.

use crate::model::event::{CalendarEvent, EventDraft, EventId, EventKind};
use crate::model::form::FormErrors;
use crate::repo::{next_id, RepoError, RepoResult};
use log::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calendar {
    events: Vec<CalendarEvent>,
}

impl Calendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        let seeds = [
            ("Team Standup", "09:00 AM", "2024-01-28", EventKind::Meeting),
            (
                "Project Review",
                "02:00 PM",
                "2024-01-28",
                EventKind::Review,
            ),
            (
                "Client Presentation",
                "10:00 AM",
                "2024-01-29",
                EventKind::Presentation,
            ),
            (
                "Design Workshop",
                "03:00 PM",
                "2024-01-30",
                EventKind::Workshop,
            ),
        ];
        let events = seeds
            .into_iter()
            .zip(1..)
            .map(|((title, time, date, kind), id)| CalendarEvent {
                id: EventId(id),
                title: title.to_string(),
                time: time.to_string(),
                date: date.to_string(),
                kind,
            })
            .collect();
        Self { events }
    }

    pub fn list(&self) -> &[CalendarEvent] {
        &self.events
    }

    /// Events scheduled on `date` (exact `YYYY-MM-DD` match), in list order.
    pub fn events_on(&self, date: &str) -> Vec<&CalendarEvent> {
        let date = date.trim();
        self.events
            .iter()
            .filter(|event| event.date == date)
            .collect()
    }

    pub fn add(&mut self, draft: EventDraft) -> RepoResult<CalendarEvent> {
        let mut errors = FormErrors::new();
        errors.require("title", &draft.title, "Event title is required");
        errors.require("date", &draft.date, "Event date is required");
        errors.into_result()?;

        let id = EventId(next_id(self.events.iter().map(|event| event.id.0)));
        let event = CalendarEvent {
            id,
            title: draft.title.trim().to_string(),
            time: draft.time,
            date: draft.date.trim().to_string(),
            kind: draft.kind,
        };
        self.events.push(event.clone());
        info!("event=calendar_event_added module=calendar status=ok event_id={id}");
        Ok(event)
    }

    pub fn remove(&mut self, id: EventId) -> RepoResult<CalendarEvent> {
        let index = self
            .events
            .iter()
            .position(|event| event.id == id)
            .ok_or_else(|| {
                warn!("event=calendar_event_remove module=calendar status=not_found event_id={id}");
                RepoError::EventNotFound(id)
            })?;
        let removed = self.events.remove(index);
        info!("event=calendar_event_removed module=calendar status=ok event_id={id}");
        Ok(removed)
    }
}
