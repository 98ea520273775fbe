use crate::models::Slot;

/// Distinct short date labels across `slots`, in order of first occurrence.
pub fn unique_dates(slots: &[Slot]) -> Vec<String> {
    let mut dates: Vec<String> = Vec::new();
    for slot in slots {
        let label = slot.date_label();
        if !dates.contains(&label) {
            dates.push(label);
        }
    }
    dates
}

/// Slots falling on the day labelled `date`, earliest start first.
pub fn slots_for_date<'a>(slots: &'a [Slot], date: &str) -> Vec<&'a Slot> {
    let mut times: Vec<&Slot> = slots.iter().filter(|s| s.date_label() == date).collect();
    times.sort_by_key(|s| s.starts_at());
    times
}

/// Date, time and ticket count picked on the detail page.
///
/// Quantity stays within `1..=available` of the selected slot; without a slot
/// it stays at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub date: Option<String>,
    pub slot_id: Option<String>,
    pub quantity: u32,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            date: None,
            slot_id: None,
            quantity: 1,
        }
    }
}

impl SelectionState {
    /// Initial state for a freshly loaded experience: first date, no time.
    pub fn seeded(slots: &[Slot]) -> Self {
        Self {
            date: unique_dates(slots).into_iter().next(),
            ..Self::default()
        }
    }

    /// Rebuilds a selection from untrusted URL values, dropping anything that
    /// no longer matches the slots and clamping the quantity.
    pub fn restore(slots: &[Slot], date: Option<&str>, slot_id: Option<&str>, quantity: Option<u32>) -> Self {
        let mut state = Self::seeded(slots);

        if let Some(date) = date {
            if unique_dates(slots).iter().any(|d| d == date) {
                state.date = Some(date.to_string());
            }
        }

        let slot = slot_id
            .and_then(|id| slots.iter().find(|s| s.id == id))
            .filter(|s| !s.is_sold_out())
            .filter(|s| state.date.as_deref() == Some(s.date_label().as_str()));

        if let Some(slot) = slot {
            state.slot_id = Some(slot.id.clone());
            state.quantity = quantity.unwrap_or(1).clamp(1, slot.available);
        }

        state
    }

    pub fn select_date(&mut self, date: &str) {
        self.date = Some(date.to_string());
        self.slot_id = None;
        self.quantity = 1;
    }

    /// Selects `slot` unless it is sold out. Returns whether the selection changed.
    pub fn select_slot(&mut self, slot: &Slot) -> bool {
        if slot.is_sold_out() {
            return false;
        }
        self.date = Some(slot.date_label());
        self.slot_id = Some(slot.id.clone());
        self.quantity = 1;
        true
    }

    pub fn selected_slot<'a>(&self, slots: &'a [Slot]) -> Option<&'a Slot> {
        let id = self.slot_id.as_deref()?;
        slots.iter().find(|s| s.id == id)
    }

    /// Upper bound for the quantity controls; 0 when no time is picked.
    pub fn max_quantity(&self, slots: &[Slot]) -> u32 {
        self.selected_slot(slots).map(|s| s.available).unwrap_or(0)
    }

    pub fn increment(&mut self, slots: &[Slot]) {
        if self.quantity < self.max_quantity(slots) {
            self.quantity += 1;
        }
    }

    pub fn decrement(&mut self) {
        if self.quantity > 1 {
            self.quantity -= 1;
        }
    }
}
