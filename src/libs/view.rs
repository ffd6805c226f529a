use crate::db::tasks::TaskSummary;
use crate::libs::messages::Message;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Task counts as a one-row table.
    pub fn summary(summary: &TaskSummary) -> Table {
        let mut table = Table::new();

        table.add_row(row![Message::SummaryTotal, Message::SummaryCompleted, Message::SummaryIncomplete]);
        table.add_row(row![summary.total, summary.completed, summary.incomplete]);

        table
    }
}
