use debughelper_generate::{RandomDataType, generate_value, rng_from_seed};

fn main() {
    let mut rng = rng_from_seed("list-data-types");
    for kind in RandomDataType::ALL {
        let sample = generate_value(kind, &mut rng);
        println!("{kind}: {sample}");
    }
}
