use maud::{html, Markup};

use crate::models::{AppliedPromo, CheckoutForm, Experience, Slot};
use crate::navigation::{experience_url, PARAM_EXPERIENCE, PARAM_QUANTITY, PARAM_SLOT};
use crate::services::pricing::{format_amount, price_breakdown};
use crate::services::validation::FieldErrors;
use crate::templates::components::{field_error, summary_row};
use crate::templates::page_layout;

const FORM_ID: &str = "checkout-form";

pub struct CheckoutView<'a> {
    pub experience: &'a Experience,
    pub slot: &'a Slot,
    pub quantity: u32,
    pub form: &'a CheckoutForm,
    pub idempotency_key: &'a str,
    pub errors: &'a FieldErrors,
    pub applied: Option<&'a AppliedPromo>,
    pub promo_error: Option<&'a str>,
    /// Backend rejection of the last submission.
    pub submit_error: Option<&'a str>,
}

pub fn checkout_page(view: &CheckoutView<'_>) -> Markup {
    let exp = view.experience;
    let form = view.form;
    let discount = view.applied.map(AppliedPromo::discount).unwrap_or(0.0);
    let price = price_breakdown(exp.price, view.quantity, discount);

    page_layout(
        "Checkout",
        "",
        html! {
            a href=(experience_url(&exp.id)) class="back" { "← Checkout" }

            div class="checkout-grid" {
                div class="checkout-form" {
                    form id=(FORM_ID) method="post" action="/checkout" novalidate {
                        input type="hidden" name=(PARAM_EXPERIENCE) value=(exp.id);
                        input type="hidden" name=(PARAM_SLOT) value=(view.slot.id);
                        input type="hidden" name=(PARAM_QUANTITY) value=(view.quantity);
                        input type="hidden" name="idempotencyKey" value=(view.idempotency_key);
                        // Enter in a text field submits the booking, not the promo.
                        button type="submit" name="intent" value="submit" class="implicit-submit" tabindex="-1" aria-hidden="true" style="position:absolute;left:-9999px" {}
                        @if let Some(applied) = view.applied {
                            input type="hidden" name="appliedPromoCode" value=(applied.code);
                            input type="hidden" name="appliedDiscount" value=(applied.discount());
                            input type="hidden" name="appliedMessage" value=(applied.response.message);
                        }

                        div class="field-row" {
                            div class="field" {
                                label for="fullName" { "Full name" }
                                input type="text" id="fullName" name="fullName" value=(form.full_name) placeholder="Your name";
                                (field_error(view.errors.full_name))
                            }
                            div class="field" {
                                label for="email" { "Email" }
                                input type="email" id="email" name="email" value=(form.email) placeholder="Your email";
                                (field_error(view.errors.email))
                            }
                        }

                        div class="field" {
                            label for="phone" { "Phone (optional)" }
                            input type="tel" id="phone" name="phone" value=(form.phone) placeholder="Your phone";
                        }

                        div class="field promo" {
                            div class="promo-row" {
                                input type="text" id="promoCode" name="promoCode" value=(form.promo_code) placeholder="Promo code";
                                button type="submit" name="intent" value="apply" { "Apply" }
                            }
                            @if let Some(message) = view.promo_error {
                                p class="field-error" { (message) }
                            }
                            @if let Some(applied) = view.applied {
                                p class="promo-success" { (applied.response.message) }
                            }
                        }

                        div class="field terms" {
                            input type="checkbox" id="terms" name="agreedToTerms" checked[form.agreed()];
                            label for="terms" { "I agree to the terms and safety policy" }
                            (field_error(view.errors.agreed_to_terms))
                        }
                    }
                }

                aside class="checkout-summary" {
                    (summary_row("Experience", &exp.name))
                    (summary_row("Date", &view.slot.iso_date()))
                    (summary_row("Time", &view.slot.time))
                    (summary_row("Qty", &view.quantity.to_string()))
                    (summary_row("Subtotal", &format_amount(price.subtotal)))
                    @if view.applied.is_some() && price.discount > 0.0 {
                        div class="summary-row discount" {
                            span class="label" { "Discount" }
                            span class="value" { "-" (format_amount(price.discount)) }
                        }
                    }
                    (summary_row("Taxes", &format_amount(price.taxes)))
                    hr;
                    div class="summary-row total" {
                        span class="label" { "Total" }
                        span class="value" { (format_amount(price.total)) }
                    }

                    @if let Some(message) = view.submit_error.filter(|_| view.errors.is_empty()) {
                        p class="submit-error" role="alert" { (message) }
                    }

                    button type="submit" form=(FORM_ID) name="intent" value="submit" class="button pay" { "Pay and Confirm" }
                }
            }
        },
    )
}
