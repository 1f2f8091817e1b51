//! Receipt

use std::io;

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    basket::Basket,
    items::{Item, ItemError},
    offers::Offer,
    pricing::TotalPriceError,
};

/// Errors that can occur when building or writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Error calculating a basket total.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),

    /// Error pricing a single line.
    #[error(transparent)]
    Item(#[from] ItemError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// A priced basket line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    /// Item name
    pub name: String,

    /// Units purchased
    pub quantity: i64,

    /// Price of a single unit
    pub unit_price: Decimal,

    /// Offer applied to the line
    pub offer: Offer,

    /// Line price before the offer
    pub full_price: Decimal,

    /// Line price after the offer
    pub total: Decimal,
}

impl ReceiptLine {
    /// Amount the offer took off this line.
    #[must_use]
    pub fn savings(&self) -> Decimal {
        self.full_price - self.total
    }
}

impl TryFrom<&Item> for ReceiptLine {
    type Error = ItemError;

    fn try_from(item: &Item) -> Result<Self, Self::Error> {
        Ok(ReceiptLine {
            name: item.name().to_string(),
            quantity: item.quantity(),
            unit_price: item.price(),
            offer: item.offer(),
            full_price: item.full_price()?,
            total: item.total()?,
        })
    }
}

/// Final receipt for a priced basket.
#[derive(Debug, Clone)]
pub struct Receipt {
    /// One line per basket item, in basket order
    lines: Vec<ReceiptLine>,

    /// Total cost before any offers
    subtotal: Decimal,

    /// Total amount paid after offers
    total: Decimal,
}

impl Receipt {
    /// Build a receipt from a basket.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if any line cannot be priced or the totals overflow.
    pub fn from_basket(basket: &Basket) -> Result<Self, ReceiptError> {
        let lines = basket
            .iter()
            .map(ReceiptLine::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let subtotal = sum(lines.iter().map(|line| line.full_price))?;
        let total = sum(lines.iter().map(|line| line.total))?;

        Ok(Receipt {
            lines,
            subtotal,
            total,
        })
    }

    /// Priced lines, in basket order.
    #[must_use]
    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    /// Total cost before any offers
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    /// Total amount paid for all items
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Savings made by applying offers.
    #[must_use]
    pub fn savings(&self) -> Decimal {
        self.subtotal - self.total
    }

    /// Savings as a fraction of the subtotal.
    #[must_use]
    pub fn savings_percent(&self) -> Percentage {
        if self.subtotal.is_zero() {
            return Percentage::from(0.0);
        }

        Percentage::from(self.savings() / self.subtotal)
    }

    /// Writes the receipt as a table followed by a totals summary.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::IO`] if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record([
            "",
            "Item",
            "Qty",
            "Unit Price",
            "Offer",
            "Full Price",
            "Savings",
            "Total",
        ]);

        for (idx, line) in self.lines.iter().enumerate() {
            let offer = match line.offer {
                Offer::WithoutOffer => String::new(),
                offer => offer.to_string(),
            };

            builder.push_record([
                format!("#{:<3}", idx + 1),
                line.name.clone(),
                line.quantity.to_string(),
                format!("{:.2}", line.unit_price),
                offer,
                format!("{:.2}", line.full_price),
                savings_cell(line.savings()),
                format!("{:.2}", line.total),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(2..4), Alignment::right());
        table.modify(Columns::new(5..8), Alignment::right());

        for (idx, line) in self.lines.iter().enumerate() {
            if line.savings().is_zero() {
                table.modify((idx + 1, 6), color_dark_grey());
            } else {
                table.modify((idx + 1, 7), color_green());
            }
        }

        let table_str = colorize_borders(&table.to_string());

        writeln!(out, "\n{table_str}").map_err(|_err| ReceiptError::IO)?;

        write_receipt_summary(&mut out, self)
    }
}

fn sum(mut amounts: impl Iterator<Item = Decimal>) -> Result<Decimal, TotalPriceError> {
    amounts.try_fold(Decimal::ZERO, |acc, amount| {
        acc.checked_add(amount).ok_or(TotalPriceError::Overflow)
    })
}

fn savings_cell(savings: Decimal) -> String {
    if savings.is_zero() {
        "-".to_string()
    } else {
        format!("({savings:.2})")
    }
}

fn write_receipt_summary(out: &mut impl io::Write, receipt: &Receipt) -> Result<(), ReceiptError> {
    let savings_percent_points = percent_points_from_fractional_percentage(receipt.savings_percent());

    let subtotal_label = " Subtotal:";
    let total_label = " \x1b[1mTotal:\x1b[0m";
    let savings_label = " Savings:";

    let subtotal_val = format!("{:.2}  ", receipt.subtotal());
    let total_val = format!("{:.2}  ", receipt.total());
    let savings_val = format!("({savings_percent_points:.2}%) {:.2}  ", receipt.savings());

    let label_width = visible_width(subtotal_label)
        .max(visible_width(total_label))
        .max(visible_width(savings_label));

    let value_width = subtotal_val
        .len()
        .max(total_val.len())
        .max(savings_val.len());

    write_summary_line(out, subtotal_label, &subtotal_val, label_width, value_width)?;

    write_summary_line(
        out,
        total_label,
        &format!("\x1b[1m{total_val}\x1b[0m"),
        label_width,
        value_width,
    )?;

    write_summary_line(out, savings_label, &savings_val, label_width, value_width)?;

    writeln!(out).map_err(|_err| ReceiptError::IO)
}

fn percent_points_from_fractional_percentage(percentage: Percentage) -> Decimal {
    // `Percentage` is a fraction (e.g. 0.25), so multiply by 100 to print percent points.
    ((percentage * Decimal::ONE) * Decimal::ONE_HUNDRED).round_dp(2)
}

const DIM: &str = "\x1b[90m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

fn is_box_drawing(ch: char) -> bool {
    matches!(ch, '\u{2500}'..='\u{257F}')
}

/// Dims the table frame so the priced columns stand out.
fn colorize_borders(table: &str) -> String {
    let mut out = String::with_capacity(table.len() + 256);
    let mut dimmed = false;

    for ch in table.chars() {
        let frame = is_box_drawing(ch);

        if frame != dimmed {
            out.push_str(if frame { DIM } else { RESET });
            dimmed = frame;
        }

        out.push(ch);
    }

    if dimmed {
        out.push_str(RESET);
    }

    out
}

/// Number of terminal columns `s` occupies once colour codes are stripped.
fn visible_width(s: &str) -> usize {
    let mut chars = s.chars();
    let mut width = 0usize;

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            // An SGR sequence runs up to and including its final letter.
            _ = chars.find(char::is_ascii_alphabetic);
        } else {
            width += 1;
        }
    }

    width
}

/// One totals row: `label` flush right in its column, then two spaces and `value`.
fn write_summary_line(
    out: &mut impl io::Write,
    label: &str,
    value: &str,
    label_col_width: usize,
    value_col_width: usize,
) -> Result<(), ReceiptError> {
    let label_indent = " ".repeat(label_col_width.saturating_sub(visible_width(label)));
    let value_indent = " ".repeat(value_col_width.saturating_sub(visible_width(value)));

    writeln!(out, "{label_indent}{label}  {value_indent}{value}").map_err(|_err| ReceiptError::IO)
}

fn color_dark_grey() -> Color {
    Color::new(DIM, RESET)
}

fn color_green() -> Color {
    Color::new(GREEN, RESET)
}
