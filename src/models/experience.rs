use chrono::{DateTime, FixedOffset, NaiveDateTime, NaiveTime, Offset, Utc};
use serde::{Deserialize, Serialize};

/// Offset every date and time on the site is displayed in (IST, GMT +5:30).
pub const DISPLAY_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

pub fn display_offset() -> FixedOffset {
    FixedOffset::east_opt(DISPLAY_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub location: String,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub about: String,
    pub price: u64,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub included: Option<Vec<String>>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub slots: Option<Vec<Slot>>,
}

fn default_active() -> bool {
    true
}

impl Experience {
    pub fn slots(&self) -> &[Slot] {
        self.slots.as_deref().unwrap_or(&[])
    }

    pub fn find_slot(&self, slot_id: &str) -> Option<&Slot> {
        self.slots().iter().find(|s| s.id == slot_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    #[serde(rename = "_id")]
    pub id: String,
    pub experience_id: String,
    pub date: DateTime<Utc>,
    pub time: String,
    pub capacity: u32,
    pub booked: u32,
    pub available: u32,
    pub status: SlotStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SlotStatus {
    Available,
    Low,
    SoldOut,
}

impl SlotStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotStatus::Available => "available",
            SlotStatus::Low => "low",
            SlotStatus::SoldOut => "sold_out",
        }
    }
}

impl Slot {
    pub fn is_sold_out(&self) -> bool {
        self.status == SlotStatus::SoldOut || self.available == 0
    }

    /// Short calendar label in the display offset, e.g. "Oct 22".
    pub fn date_label(&self) -> String {
        self.date.with_timezone(&display_offset()).format("%b %-d").to_string()
    }

    /// Calendar date in `YYYY-MM-DD` form, as shown on the order summary.
    pub fn iso_date(&self) -> String {
        self.date.with_timezone(&display_offset()).format("%Y-%m-%d").to_string()
    }

    /// Local start of the slot: the slot's calendar day combined with its
    /// display time. Falls back to the raw timestamp when the time string
    /// does not parse.
    pub fn starts_at(&self) -> NaiveDateTime {
        let local = self.date.with_timezone(&display_offset()).naive_local();
        match parse_display_time(&self.time) {
            Some(t) => local.date().and_time(t),
            None => local,
        }
    }
}

fn parse_display_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim().to_uppercase();
    ["%I:%M %p", "%I:%M%p", "%H:%M"]
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(&s, fmt).ok())
}
