use serde::Deserialize;

/// A calendar entry for the schedule screen.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: u64,

    pub title: String,

    /// The day the event falls on, as `YYYY-MM-DD`.
    pub date: String,

    /// Start time within the day, as `HH:MM`, when the event is not all-day.
    pub time: Option<String>,

    /// Free-form note attached to the event.
    pub memo: Option<String>,
}
