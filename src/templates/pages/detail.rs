use maud::{html, Markup};

use crate::models::{Experience, Slot};
use crate::navigation::detail_url;
use crate::services::pricing::{format_amount, price_breakdown};
use crate::services::selection::{slots_for_date, unique_dates, SelectionState};
use crate::templates::components::{error_panel, summary_row};
use crate::templates::page_layout;

pub struct DetailView<'a> {
    pub experience: &'a Experience,
    pub selection: &'a SelectionState,
    /// Blocking message from an attempted action, e.g. confirming without a time.
    pub alert: Option<&'a str>,
}

struct DateOption {
    label: String,
    href: String,
    selected: bool,
}

struct TimeOption<'a> {
    slot: &'a Slot,
    href: Option<String>,
    selected: bool,
}

pub fn detail_page(view: &DetailView<'_>) -> Markup {
    let exp = view.experience;
    let slots = exp.slots();
    let selection = view.selection;

    let dates: Vec<DateOption> = unique_dates(slots)
        .into_iter()
        .map(|label| {
            let mut next = selection.clone();
            next.select_date(&label);
            DateOption {
                href: detail_url(&exp.id, &next, None),
                selected: selection.date.as_deref() == Some(label.as_str()),
                label,
            }
        })
        .collect();

    let times: Vec<TimeOption> = selection
        .date
        .as_deref()
        .map(|d| slots_for_date(slots, d))
        .unwrap_or_default()
        .into_iter()
        .map(|slot| {
            let mut next = selection.clone();
            let href = next.select_slot(slot).then(|| detail_url(&exp.id, &next, None));
            TimeOption {
                slot,
                href,
                selected: selection.slot_id.as_deref() == Some(slot.id.as_str()),
            }
        })
        .collect();

    page_layout(
        &exp.name,
        "",
        html! {
            a href="/" class="back" { "← Details" }

            @if let Some(alert) = view.alert {
                div class="alert" role="alert" { (alert) }
            }

            div class="detail-grid" {
                div class="detail-main" {
                    div class="hero" {
                        img src=(exp.image) alt=(exp.name);
                    }
                    h1 { (exp.name) }
                    p class="description" { (exp.description) }

                    section class="choose-date" {
                        h3 { "Choose date" }
                        div class="options" {
                            @for date in &dates {
                                a.option.selected[date.selected] href=(date.href) { (date.label) }
                            }
                        }
                    }

                    section class="choose-time" {
                        h3 { "Choose time" }
                        div class="options" {
                            @if times.is_empty() {
                                p class="muted" { "No available times for this date." }
                            }
                            @for time in &times {
                                @if let Some(href) = &time.href {
                                    a.option.selected[time.selected] href=(href) data-status=(time.slot.status.as_str()) {
                                        span { (time.slot.time) }
                                        span class="badge" { (time.slot.available) " left" }
                                    }
                                } @else {
                                    span class="option sold-out" data-status=(time.slot.status.as_str()) aria-disabled="true" {
                                        span { (time.slot.time) }
                                        span class="badge" { "Sold out" }
                                    }
                                }
                            }
                        }
                        p class="muted" { "All times are in IST (GMT +5:30)" }
                    }

                    section class="about" {
                        h3 { "About" }
                        p { (exp.about) }
                    }
                }

                aside class="detail-summary" {
                    (booking_summary(exp, selection))
                }
            }
        },
    )
}

fn booking_summary(exp: &Experience, selection: &SelectionState) -> Markup {
    let slots = exp.slots();
    let max_qty = selection.max_quantity(slots);
    let quantity = selection.quantity;
    let price = price_breakdown(exp.price, quantity, 0.0);

    html! {
        div class="summary" {
            (summary_row("Starts at", &format!("₹{}", exp.price)))
            div class="summary-row" {
                span class="label" { "Quantity" }
                span class="stepper" {
                    @if quantity <= 1 {
                        span class="step disabled" aria-disabled="true" { "−" }
                    } @else {
                        a class="step" href=(detail_url(&exp.id, selection, Some("dec"))) { "−" }
                    }
                    span class="qty" { (quantity) }
                    @if quantity >= max_qty {
                        span class="step disabled" aria-disabled="true" { "+" }
                    } @else {
                        a class="step" href=(detail_url(&exp.id, selection, Some("inc"))) { "+" }
                    }
                }
            }
            (summary_row("Subtotal", &format_amount(price.subtotal)))
            (summary_row("Taxes", &format_amount(price.taxes)))
            hr;
            div class="summary-row total" {
                span class="label" { "Total" }
                span class="value" { (format_amount(price.total)) }
            }
            a.button.confirm.disabled[max_qty == 0] href=(detail_url(&exp.id, selection, Some("confirm"))) { "Confirm" }
        }
    }
}

pub fn detail_error_page(message: &str) -> Markup {
    page_layout(
        "Error",
        "",
        html! { (error_panel("Error loading experience", message, "/", "Back to Home")) },
    )
}
