use crate::client::RequestOptions;
use crate::models::calendar::CalendarEvent;
use crate::{Outcome, WelfareClient};

/// Provides access to the user's schedule.
pub struct CalendarApi<'a> {
    client: &'a WelfareClient,
}

impl<'a> CalendarApi<'a> {
    pub(crate) fn new(client: &'a WelfareClient) -> Self {
        Self { client }
    }

    /// Lists events for one day. `date` is `YYYY-MM-DD`.
    pub async fn events(&self, date: &str) -> Outcome<Vec<CalendarEvent>> {
        let options = RequestOptions::get().query("date", date);

        self.client
            .issue("/api/v1/calendar/events", options)
            .await
            .decode()
    }
}
