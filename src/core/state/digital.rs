use chrono::NaiveDateTime;

use crate::{
    core::cmd::Cmd,
    domain::{
        format::{format_clock, format_date},
        schedule::{TickSource, DIGITAL_PERIOD},
    },
};

/// Digital readout view-model
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigitalState {
    time_text: String,
    date_text: String,
}

impl DigitalState {
    pub fn time_text(&self) -> &str {
        &self.time_text
    }

    pub fn date_text(&self) -> &str {
        &self.date_text
    }

    pub fn tick(&mut self, local: &NaiveDateTime) -> Vec<Cmd> {
        self.time_text = format_clock(local);
        self.date_text = format_date(local);
        vec![Cmd::schedule(TickSource::Digital, DIGITAL_PERIOD)]
    }
}
