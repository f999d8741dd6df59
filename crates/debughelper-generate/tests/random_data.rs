use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::Value;

use debughelper_generate::errors::GenerateError;
use debughelper_generate::generators::{address, credit_card, email, user};
use debughelper_generate::{RandomDataType, generate_many, generate_value, rng_from_seed};

fn keys(value: &Value) -> Vec<&str> {
    let mut keys: Vec<_> = value
        .as_object()
        .expect("record is an object")
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort();
    keys
}

fn text<'a>(value: &'a Value, key: &str) -> &'a str {
    value[key]
        .as_str()
        .unwrap_or_else(|| panic!("{key} should be a string"))
}

#[test]
fn user_record_has_expected_fields() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let record = user(&mut rng);
    assert_eq!(
        keys(&record),
        vec!["email", "firstname", "lastname", "password", "uid"]
    );
    assert!(text(&record, "email").contains('@'));
    let password = text(&record, "password");
    assert!((8..16).contains(&password.chars().count()), "{password}");
    assert!(uuid::Uuid::parse_str(text(&record, "uid")).is_ok());
}

#[test]
fn email_record_has_boolean_confirmation() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let record = email(&mut rng);
    assert_eq!(keys(&record), vec!["confirmed", "email"]);
    assert!(record["confirmed"].is_boolean());
}

#[test]
fn address_zip_is_five_digits() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..25 {
        let record = address(&mut rng);
        assert_eq!(
            keys(&record),
            vec!["city", "country", "firstname", "lastname", "state", "street", "zip"]
        );
        let zip = text(&record, "zip");
        assert_eq!(zip.len(), 5);
        assert!(zip.chars().all(|c| c.is_ascii_digit()), "{zip}");
    }
}

#[test]
fn credit_card_fields_follow_formats() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    for _ in 0..50 {
        let record = credit_card(&mut rng);
        assert_eq!(
            keys(&record),
            vec!["ccv", "exp", "holder_name", "number", "type"]
        );
        assert!(matches!(text(&record, "type"), "MasterCard" | "Visa"));

        let ccv = text(&record, "ccv");
        assert_eq!(ccv.len(), 3);
        assert!(ccv.chars().all(|c| c.is_ascii_digit()));

        let (month, year) = text(&record, "exp")
            .split_once('/')
            .expect("exp is MM/YY");
        assert_eq!(month.len(), 2);
        assert_eq!(year.len(), 2);
        let month: u32 = month.parse().expect("numeric month");
        let year: u32 = year.parse().expect("numeric year");
        assert!((1..=12).contains(&month));
        assert!((1..=40).contains(&year));

        assert!(text(&record, "holder_name").contains(' '));
        assert!(!text(&record, "number").is_empty());
    }
}

#[test]
fn identifiers_are_plain_strings() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let id = generate_value(RandomDataType::Uuid, &mut rng);
    assert!(uuid::Uuid::parse_str(id.as_str().expect("uuid string")).is_ok());

    let short = generate_value(RandomDataType::Nanoid, &mut rng);
    assert_eq!(short.as_str().expect("nanoid string").len(), 10);
}

#[test]
fn generate_many_returns_requested_count() {
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    for kind in RandomDataType::ALL {
        let values = generate_many(kind, 4, &mut rng);
        assert_eq!(values.as_array().map(Vec::len), Some(4), "{kind}");
    }
    let empty = generate_many(RandomDataType::User, 0, &mut rng);
    assert_eq!(empty, Value::Array(Vec::new()));
}

#[test]
fn same_seed_reproduces_data() {
    for kind in RandomDataType::ALL {
        let first = generate_many(kind, 3, &mut rng_from_seed("fixture"));
        let second = generate_many(kind, 3, &mut rng_from_seed("fixture"));
        assert_eq!(first, second, "{kind}");
    }
}

#[test]
fn different_seeds_produce_different_data() {
    let first = generate_many(RandomDataType::Uuid, 3, &mut rng_from_seed("alpha"));
    let second = generate_many(RandomDataType::Uuid, 3, &mut rng_from_seed("beta"));
    assert_ne!(first, second);
}

#[test]
fn data_type_names_round_trip_through_wire_format() {
    for kind in RandomDataType::ALL {
        let parsed: RandomDataType = kind.as_str().parse().expect("known type");
        assert_eq!(parsed, kind);
        let json = serde_json::to_value(kind).expect("serialize");
        assert_eq!(json, Value::String(kind.as_str().to_string()));
    }
    let unknown = "phone".parse::<RandomDataType>();
    assert!(matches!(unknown, Err(GenerateError::UnknownType(name)) if name == "phone"));
}
