//! Hotel blocks

use serde_json::Value;

use super::{display_or, first_present, render, BLOCK_SEPARATOR, NOT_AVAILABLE, UNKNOWN};
use crate::types::Hotel;

/// Maximum number of hotels rendered per search
pub const MAX_HOTELS: usize = 10;

/// Search parameters echoed into each hotel's booking link
#[derive(Debug, Clone, Copy)]
pub struct HotelQuery<'a> {
    pub checkin_date: &'a str,
    pub checkout_date: &'a str,
    pub adults: i64,
}

/// Price line value: `"<amount> <currency>"`, or N/A without `min_total_price`
pub fn price_display(hotel: &Hotel) -> String {
    let Some(price) = hotel.min_total_price.as_ref() else {
        return NOT_AVAILABLE.to_string();
    };

    let currency = first_present([hotel.currency_code.as_ref(), hotel.currencycode.as_ref()])
        .map(render)
        .unwrap_or_default();

    format!("{} {}", render(price), currency).trim().to_string()
}

/// Booking link with the caller's dates and party size applied
pub fn booking_url(hotel: &Hotel, query: &HotelQuery<'_>) -> String {
    match first_present([hotel.url.as_ref()]) {
        Some(base) => format!(
            "{}?checkin={}&checkout={}&group_adults={}&no_rooms=1&group_children=0",
            render(base),
            query.checkin_date,
            query.checkout_date,
            query.adults
        ),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Largest available photo
fn main_image(hotel: &Hotel) -> String {
    first_present([
        hotel.max_1440_photo_url.as_ref(),
        hotel.max_photo_url.as_ref(),
        hotel.main_photo_url.as_ref(),
    ])
    .map(render)
    .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Render one hotel as eight labeled lines
pub fn format_hotel(hotel: &Hotel, query: &HotelQuery<'_>) -> String {
    format!(
        "Name: {}\nRating: {}/10\nAddress: {}\nPrice: {}\nCoordinates: {}, {}\nStars: {}\nURL: {}\nImage: {}\n",
        display_or(hotel.hotel_name.as_ref(), UNKNOWN),
        display_or(hotel.review_score.as_ref(), NOT_AVAILABLE),
        display_or(hotel.address.as_ref(), NOT_AVAILABLE),
        price_display(hotel),
        display_or(hotel.latitude.as_ref(), NOT_AVAILABLE),
        display_or(hotel.longitude.as_ref(), NOT_AVAILABLE),
        display_or(hotel.star_class.as_ref(), NOT_AVAILABLE),
        booking_url(hotel, query),
        main_image(hotel),
    )
}

/// Render the first [`MAX_HOTELS`] entries of a search `result` list.
///
/// Upstream order is kept. Returns an empty string for an empty list.
pub fn format_hotels(entries: &[Value], query: &HotelQuery<'_>) -> String {
    entries
        .iter()
        .take(MAX_HOTELS)
        .map(|entry| format_hotel(&Hotel::from_json(entry), query))
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}
