//! User-facing text for the booking CLI.

pub const WELCOME: &str = "🦆  Welcome to DuckFlix! 🦆";
pub const GOODBYE: &str = "\nThank you for using DuckFlix! 🍿";
pub const BOOK_TICKETS_HEADING: &str = "\nLet's book your tickets!\n";

pub const PROMPT_ACCOUNT_ID: &str = "👤 Please enter your account ID: ";
pub const PROMPT_RETRY: &str = "Would you like to try again? (y/n): ";
pub const INVALID_NUMBER: &str = "Please enter a valid whole number of zero or more.";

pub const SUCCESS_HEADING: &str = "\n🥳🎬 Booking succeeded! 🎬🥳";
pub const DIVIDER: &str = "------------------";
pub const BOOKING_REFERENCE: &str = "Booking reference:";
pub const TOTAL_TICKETS: &str = "\n🎟️  Total tickets:";
pub const TOTAL_SEATS: &str = "💺 Total seats:";
pub const TOTAL_COST: &str = "💰 Total cost:";

pub const BOOKING_FAILED: &str = "\n🚨 Booking failed:";

/// Prompt asking for a count of one ticket type, e.g. "How many ADULT tickets would you like? "
pub fn ticket_prompt(ticket_type: &str) -> String {
    format!("How many {ticket_type} tickets would you like? ")
}

/// Summary line for one ticket type, e.g. "Adult tickets: 2"
pub fn ticket_line(label: &str, count: u64) -> String {
    format!("{label} tickets: {count}")
}
