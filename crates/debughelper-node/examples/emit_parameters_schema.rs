use debughelper_node::parameters_json_schema;

fn main() {
    let schema = parameters_json_schema().expect("derive parameter schema");
    let json = serde_json::to_string_pretty(&schema).expect("serialize json schema");
    println!("{json}");
}
