use fineclaire_api::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("fineclaire-api failed: {err}");
        std::process::exit(1);
    }
}
