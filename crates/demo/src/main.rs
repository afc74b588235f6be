use viewstate_parties::Client;

fn main() {
    viewstate_observability::init();

    let client = Client::new("Ryeojin", 1234);
    tracing::debug!(name = client.name(), postal_code = client.postal_code(), "rendering client");

    println!("{client}");
}
