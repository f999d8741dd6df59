use fake::Fake;
use fake::faker::creditcard::raw::CreditCardNumber;
use fake::locales::EN;
use rand::Rng;
use serde_json::{Value, json};

use super::person::full_name;

const CARD_TYPES: [&str; 2] = ["MasterCard", "Visa"];
const MAX_EXPIRY_YEAR: u32 = 40;

/// Card record: `{type, number, ccv, exp, holder_name}`.
///
/// `exp` is `MM/YY` with the month in 01..=12 and the year in 01..=40.
pub fn credit_card<R: Rng>(rng: &mut R) -> Value {
    let card_type = if rng.random_bool(0.5) {
        CARD_TYPES[0]
    } else {
        CARD_TYPES[1]
    };
    let number: String = CreditCardNumber(EN).fake_with_rng(rng);
    let ccv = format!("{:03}", rng.random_range(0..1000));
    let month = rng.random_range(1..=12_u32);
    let year = rng.random_range(1..=MAX_EXPIRY_YEAR);
    let holder_name = full_name(rng);
    json!({
        "type": card_type,
        "number": number,
        "ccv": ccv,
        "exp": format!("{month:02}/{year:02}"),
        "holder_name": holder_name,
    })
}
