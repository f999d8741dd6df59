use fake::Fake;
use fake::faker::address::raw::{BuildingNumber, CityName, CountryName, StateName, StreetName};
use fake::faker::internet::raw::{Password, SafeEmail};
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::Rng;
use serde_json::{Value, json};

use super::identifiers::uuid_v4;

const PASSWORD_LEN: std::ops::Range<usize> = 8..16;

/// Account record: `{uid, email, firstname, lastname, password}`.
pub fn user<R: Rng>(rng: &mut R) -> Value {
    let uid = uuid_v4(rng);
    let email: String = SafeEmail(EN).fake_with_rng(rng);
    let firstname: String = FirstName(EN).fake_with_rng(rng);
    let lastname: String = LastName(EN).fake_with_rng(rng);
    let password: String = Password(EN, PASSWORD_LEN).fake_with_rng(rng);
    json!({
        "uid": uid,
        "email": email,
        "firstname": firstname,
        "lastname": lastname,
        "password": password,
    })
}

/// `{email, confirmed}` with a fair coin for `confirmed`.
pub fn email<R: Rng>(rng: &mut R) -> Value {
    let email: String = SafeEmail(EN).fake_with_rng(rng);
    json!({
        "email": email,
        "confirmed": rng.random_bool(0.5),
    })
}

/// US-style postal address with a five digit zip.
pub fn address<R: Rng>(rng: &mut R) -> Value {
    let firstname: String = FirstName(EN).fake_with_rng(rng);
    let lastname: String = LastName(EN).fake_with_rng(rng);
    let number: String = BuildingNumber(EN).fake_with_rng(rng);
    let street: String = StreetName(EN).fake_with_rng(rng);
    let city: String = CityName(EN).fake_with_rng(rng);
    let zip = format!("{:05}", rng.random_range(0..100_000));
    let state: String = StateName(EN).fake_with_rng(rng);
    let country: String = CountryName(EN).fake_with_rng(rng);
    json!({
        "firstname": firstname,
        "lastname": lastname,
        "street": format!("{number} {street}"),
        "city": city,
        "zip": zip,
        "state": state,
        "country": country,
    })
}

/// `First Last`, used as a card holder name.
pub(crate) fn full_name<R: Rng>(rng: &mut R) -> String {
    let first: String = FirstName(EN).fake_with_rng(rng);
    let last: String = LastName(EN).fake_with_rng(rng);
    format!("{first} {last}")
}
